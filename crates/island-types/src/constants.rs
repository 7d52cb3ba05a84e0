// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Island-width floor applied to the *divisor copy* of w inside the
/// Rutherford rate. The stored width is never clamped.
pub const W_FLOOR: f64 = 1e-5;

/// Hard floor for the energy confinement time [s]. Keeps the downstream
/// power proxies strictly positive however far the island grows.
pub const TAU_E_FLOOR: f64 = 0.01;

/// Safety factor of the resonant surface in the reference scenario
/// (m/n = 2/1 tearing mode).
pub const Q_RESONANT: f64 = 2.0;

/// Resonance window: a surface within this distance of `Q_RESONANT`
/// receives the seed island.
pub const RESONANCE_TOL: f64 = 0.05;

/// Baseline energy confinement time [s] of the unperturbed plasma.
pub const TAU_E0: f64 = 1.0;

/// Confinement degradation strength per unit island width.
pub const ALPHA_DEGRADATION: f64 = 1.0;

/// Minor radius used to normalize the island width in the confinement
/// scaling (same surface-index units as `FluxSurface::radius`).
pub const MINOR_RADIUS: f64 = 10.0;

/// Reference electron density [m⁻³].
pub const N_DENSITY: f64 = 1.0e20;

/// Reference temperature [keV].
pub const T_KEV: f64 = 10.0;

/// Calibration constant mapping n²·τ_E to fusion power [arb. units].
pub const POWER_SCALING: f64 = 1e-23;

/// Linear drive coefficient A of the modified Rutherford equation.
pub const MRE_LINEAR_DRIVE: f64 = 0.5;

/// Resistive/curvature coefficient B.
pub const MRE_RESISTIVE: f64 = 0.01;

/// Bootstrap drive coefficient C.
pub const MRE_BOOTSTRAP: f64 = 0.5;
