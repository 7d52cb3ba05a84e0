// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Modified Rutherford Equation
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Modified Rutherford equation (MRE) growth rate.
//!
//! dw/dt = A·Δ′ + B/w + C·w_bs − D·w²
//!
//! with Δ′ = (m/n − q)·delta_scale, a proxy for the linear tearing drive
//! from the mismatch between the mode ratio and the local safety factor.

use island_types::config::ScenarioConfig;
use island_types::constants::{MRE_BOOTSTRAP, MRE_LINEAR_DRIVE, MRE_RESISTIVE, W_FLOOR};
use island_types::state::{FluxSurface, MagneticIsland, RateModel};

/// Coefficient set of the MRE. All caller-supplied; defaults live here,
/// not in the rate function.
#[derive(Debug, Clone, Copy)]
pub struct MreCoefficients {
    /// Linear instability drive A.
    pub a: f64,
    /// Resistive/curvature term B.
    pub b: f64,
    /// Bootstrap drive C.
    pub c: f64,
    /// Quadratic saturation D.
    pub d: f64,
    /// Scale factor on the Δ′ mode-mismatch term.
    pub delta_scale: f64,
}

impl Default for MreCoefficients {
    fn default() -> Self {
        MreCoefficients {
            a: MRE_LINEAR_DRIVE,
            b: MRE_RESISTIVE,
            c: MRE_BOOTSTRAP,
            d: 1.0,
            delta_scale: 10.0,
        }
    }
}

impl MreCoefficients {
    /// Coefficients for a scenario: A, B, C are model constants, D and
    /// the Δ′ scale come from the user-facing knobs.
    pub fn from_config(config: &ScenarioConfig) -> Self {
        MreCoefficients {
            a: MRE_LINEAR_DRIVE,
            b: MRE_RESISTIVE,
            c: MRE_BOOTSTRAP,
            d: config.saturation,
            delta_scale: config.delta_scale,
        }
    }
}

/// Instantaneous island growth rate dw/dt.
///
/// The divisor copy of w is floored at `W_FLOOR` so the resistive term
/// stays finite; the island's stored width is left untouched. An exact
/// resonance (m/n == q) is no special case: Δ′ is simply zero and growth
/// is bootstrap minus saturation plus the resistive term.
///
/// Pure and deterministic: identical inputs give identical output.
pub fn compute_rate(
    island: &MagneticIsland,
    surface: &FluxSurface,
    coeffs: &MreCoefficients,
) -> f64 {
    let delta_prime = (island.mode_ratio() - surface.q) * coeffs.delta_scale;
    let w = island.w.max(W_FLOOR);

    coeffs.a * delta_prime + coeffs.b / w + coeffs.c * island.bootstrap_drive - coeffs.d * w * w
}

/// The MRE as a [`RateModel`] strategy, for drivers that want a named
/// physics object rather than a closure over coefficients.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModifiedRutherford {
    pub coefficients: MreCoefficients,
}

impl ModifiedRutherford {
    pub fn new(coefficients: MreCoefficients) -> Self {
        ModifiedRutherford { coefficients }
    }
}

impl RateModel for ModifiedRutherford {
    fn rate(&self, island: &MagneticIsland, surface: &FluxSurface) -> f64 {
        compute_rate(island, surface, &self.coefficients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_island() -> MagneticIsland {
        MagneticIsland::new(0.01, 2, 1, 0.2)
    }

    fn reference_surface() -> FluxSurface {
        FluxSurface::new(10.0, 2.0, None)
    }

    #[test]
    fn test_worked_example() {
        // w=0.01, m=2, n=1, bootstrap=0.2, q=2.0, A=0.5, B=0.01, C=0.5,
        // D=1.0, delta_scale=10: Δ′ = 0, rate = 1.0 + 0.1 − 0.0001.
        let rate = compute_rate(
            &reference_island(),
            &reference_surface(),
            &MreCoefficients::default(),
        );
        assert!((rate - 1.0999).abs() < 1e-12);
    }

    #[test]
    fn test_one_euler_step_of_worked_example() {
        let mut island = reference_island();
        let surface = reference_surface();
        let model = ModifiedRutherford::default();
        island.evolve(0.1, &surface, &model);
        assert!((island.w - 0.11999).abs() < 1e-12);
    }

    #[test]
    fn test_deterministic() {
        let island = reference_island();
        let surface = reference_surface();
        let coeffs = MreCoefficients::default();
        let r1 = compute_rate(&island, &surface, &coeffs);
        let r2 = compute_rate(&island, &surface, &coeffs);
        assert_eq!(r1, r2);
    }

    #[test]
    fn test_exact_resonance_is_no_special_case() {
        // m/n == q exactly: growth reduces to B/w + C·bs − D·w².
        let island = reference_island();
        let surface = reference_surface();
        let coeffs = MreCoefficients {
            a: 123.0,
            ..MreCoefficients::default()
        };
        let rate = compute_rate(&island, &surface, &coeffs);
        assert!((rate - 1.0999).abs() < 1e-12, "A must not matter at Δ′=0");
    }

    #[test]
    fn test_divisor_floor_at_zero_width() {
        let mut island = reference_island();
        island.w = 0.0;
        let rate = compute_rate(&island, &reference_surface(), &MreCoefficients::default());
        assert!(rate.is_finite());
        // Resistive term dominates: B / 1e-5 = 1000.
        assert!((rate - (1000.0 + 0.1)).abs() < 1e-9);
        // The stored width stays unclamped.
        assert_eq!(island.w, 0.0);
    }

    #[test]
    fn test_bootstrap_monotonicity() {
        let surface = reference_surface();
        let coeffs = MreCoefficients::default();
        let mut last = f64::NEG_INFINITY;
        for bs in [0.0, 0.2, 0.4, 0.6, 0.8, 1.0] {
            let island = MagneticIsland::new(0.01, 2, 1, bs);
            let rate = compute_rate(&island, &surface, &coeffs);
            assert!(rate > last, "rate must rise strictly with bootstrap");
            last = rate;
        }
    }

    #[test]
    fn test_negative_delta_prime_damps() {
        // q above the mode ratio: the linear term opposes growth.
        let island = reference_island();
        let surface = FluxSurface::new(10.0, 2.5, None);
        let coeffs = MreCoefficients::default();
        let resonant = compute_rate(&island, &reference_surface(), &coeffs);
        let detuned = compute_rate(&island, &surface, &coeffs);
        assert!(detuned < resonant);
    }

    #[test]
    fn test_coefficients_from_config() {
        let mut config = ScenarioConfig::default();
        config.saturation = 1.7;
        config.delta_scale = 4.0;
        let coeffs = MreCoefficients::from_config(&config);
        assert!((coeffs.a - 0.5).abs() < 1e-12);
        assert!((coeffs.b - 0.01).abs() < 1e-12);
        assert!((coeffs.c - 0.5).abs() < 1e-12);
        assert!((coeffs.d - 1.7).abs() < 1e-12);
        assert!((coeffs.delta_scale - 4.0).abs() < 1e-12);
    }
}
