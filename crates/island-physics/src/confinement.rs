// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Confinement
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Energy confinement time degraded by island growth.
//!
//! τ_E = max(τ_E0 · (1 − α·w_max/a), τ_floor)
//!
//! Larger islands short-circuit the nested surfaces and linearly reduce
//! confinement, down to a hard floor that keeps the downstream power
//! proxies well-defined.

use island_types::constants::{ALPHA_DEGRADATION, MINOR_RADIUS, TAU_E0, TAU_E_FLOOR};
use island_types::state::PlasmaState;

/// Confinement time for the current plasma state. O(surfaces), pure.
/// An island-free plasma returns exactly `tau_e0`.
pub fn compute_tau_e(state: &PlasmaState, tau_e0: f64, alpha: f64, minor_radius: f64) -> f64 {
    let max_w = state.max_island_width();
    (tau_e0 * (1.0 - alpha * max_w / minor_radius)).max(TAU_E_FLOOR)
}

/// Confinement time with the reference scaling constants.
pub fn default_tau_e(state: &PlasmaState) -> f64 {
    compute_tau_e(state, TAU_E0, ALPHA_DEGRADATION, MINOR_RADIUS)
}
