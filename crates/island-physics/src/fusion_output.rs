// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Fusion Output
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fusion performance proxies derived from the confinement time.
//!
//! Units are illustrative, not dimensionally enforced: the Lawson product
//! carries keV·s/m³ flavor, the power output is arbitrary units. Both are
//! total over τ_E ≥ 0, which the confinement floor guarantees upstream.

use island_types::constants::{N_DENSITY, POWER_SCALING, T_KEV};

/// Lawson triple-product proxy: n · T · τ_E.
pub fn compute_lawson_product(tau_e: f64, density: f64, t_kev: f64) -> f64 {
    density * t_kev * tau_e
}

/// Lawson product at reference density and temperature.
pub fn default_lawson_product(tau_e: f64) -> f64 {
    compute_lawson_product(tau_e, N_DENSITY, T_KEV)
}

/// Fusion power proxy: scaling · n² · τ_E, quadratic in density and
/// linear in confinement.
pub fn compute_fusion_power(tau_e: f64, density: f64, scaling: f64) -> f64 {
    scaling * density * density * tau_e
}

/// Fusion power at reference density and calibration.
pub fn default_fusion_power(tau_e: f64) -> f64 {
    compute_fusion_power(tau_e, N_DENSITY, POWER_SCALING)
}
