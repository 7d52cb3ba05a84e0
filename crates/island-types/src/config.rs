// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::{IslandError, IslandResult};

/// One simulation scenario: the four user-facing knobs plus the grid and
/// stepping parameters. Every field has a serde default, so an empty JSON
/// object `{}` deserializes to the reference scenario.
///
/// Knob ranges (enforced by [`ScenarioConfig::validate`]):
/// initial_width 0.001–0.05, bootstrap 0.0–1.0, delta_scale 0.0–20.0,
/// saturation 0.1–2.0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Seed island width w₀ (default: 0.01).
    #[serde(default = "default_initial_width")]
    pub initial_width: f64,
    /// Bootstrap drive strength (default: 0.2).
    #[serde(default = "default_bootstrap")]
    pub bootstrap: f64,
    /// Scale factor on the Δ′ mode-mismatch term (default: 10.0).
    #[serde(default = "default_delta_scale")]
    pub delta_scale: f64,
    /// Saturation coefficient D (default: 1.0).
    #[serde(default = "default_saturation")]
    pub saturation: f64,
    /// Integration timestep (default: 0.1).
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Number of integration steps per run (default: 50).
    #[serde(default = "default_steps")]
    pub steps: usize,
    /// Number of nested flux surfaces (default: 10).
    #[serde(default = "default_n_surfaces")]
    pub n_surfaces: usize,
    /// Safety factor at the magnetic axis (default: 1.0).
    #[serde(default = "default_q_axis")]
    pub q_axis: f64,
    /// Safety factor increase per unit radius (default: 0.1).
    #[serde(default = "default_q_slope")]
    pub q_slope: f64,
}

fn default_initial_width() -> f64 {
    0.01
}
fn default_bootstrap() -> f64 {
    0.2
}
fn default_delta_scale() -> f64 {
    10.0
}
fn default_saturation() -> f64 {
    1.0
}
fn default_dt() -> f64 {
    0.1
}
fn default_steps() -> usize {
    50
}
fn default_n_surfaces() -> usize {
    10
}
fn default_q_axis() -> f64 {
    1.0
}
fn default_q_slope() -> f64 {
    0.1
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        ScenarioConfig {
            initial_width: default_initial_width(),
            bootstrap: default_bootstrap(),
            delta_scale: default_delta_scale(),
            saturation: default_saturation(),
            dt: default_dt(),
            steps: default_steps(),
            n_surfaces: default_n_surfaces(),
            q_axis: default_q_axis(),
            q_slope: default_q_slope(),
        }
    }
}

impl ScenarioConfig {
    /// Load a scenario from a JSON file.
    pub fn from_file(path: &str) -> IslandResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Boundary validation of the knob ranges. The physics layer itself
    /// takes plain reals; out-of-range values are rejected here, before
    /// they reach the integrator.
    pub fn validate(&self) -> IslandResult<()> {
        check_range("initial_width", self.initial_width, 0.001, 0.05)?;
        check_range("bootstrap", self.bootstrap, 0.0, 1.0)?;
        check_range("delta_scale", self.delta_scale, 0.0, 20.0)?;
        check_range("saturation", self.saturation, 0.1, 2.0)?;
        if !(self.dt > 0.0) {
            return Err(IslandError::ConfigError(format!(
                "dt must be positive, got {}",
                self.dt
            )));
        }
        if self.steps == 0 {
            return Err(IslandError::ConfigError("steps must be nonzero".into()));
        }
        if self.n_surfaces == 0 {
            return Err(IslandError::ConfigError(
                "n_surfaces must be nonzero".into(),
            ));
        }
        Ok(())
    }
}

fn check_range(name: &str, value: f64, lo: f64, hi: f64) -> IslandResult<()> {
    if value.is_finite() && (lo..=hi).contains(&value) {
        Ok(())
    } else {
        Err(IslandError::ConfigError(format!(
            "{} = {} outside allowed range [{}, {}]",
            name, value, lo, hi
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// Path relative to the workspace root (two levels above this crate).
    fn root_path(relative: &str) -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join(relative)
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_defaults_are_reference_scenario() {
        let cfg = ScenarioConfig::default();
        assert!((cfg.initial_width - 0.01).abs() < 1e-12);
        assert!((cfg.bootstrap - 0.2).abs() < 1e-12);
        assert!((cfg.delta_scale - 10.0).abs() < 1e-12);
        assert!((cfg.saturation - 1.0).abs() < 1e-12);
        assert!((cfg.dt - 0.1).abs() < 1e-12);
        assert_eq!(cfg.steps, 50);
        assert_eq!(cfg.n_surfaces, 10);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let cfg: ScenarioConfig = serde_json::from_str("{}").unwrap();
        assert!((cfg.initial_width - 0.01).abs() < 1e-12);
        assert_eq!(cfg.steps, 50);
    }

    #[test]
    fn test_load_reference_scenario_file() {
        let cfg = ScenarioConfig::from_file(&root_path("island_scenario.json")).unwrap();
        assert!((cfg.bootstrap - 0.2).abs() < 1e-12);
        assert!((cfg.q_slope - 0.1).abs() < 1e-12);
        cfg.validate().unwrap();
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = ScenarioConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: ScenarioConfig = serde_json::from_str(&json).unwrap();
        assert!((cfg.initial_width - cfg2.initial_width).abs() < 1e-15);
        assert!((cfg.delta_scale - cfg2.delta_scale).abs() < 1e-15);
        assert_eq!(cfg.steps, cfg2.steps);
    }

    #[test]
    fn test_validate_rejects_out_of_range_knobs() {
        let mut cfg = ScenarioConfig::default();
        cfg.initial_width = 0.2;
        assert!(cfg.validate().is_err());

        let mut cfg = ScenarioConfig::default();
        cfg.bootstrap = -0.1;
        assert!(cfg.validate().is_err());

        let mut cfg = ScenarioConfig::default();
        cfg.delta_scale = 25.0;
        assert!(cfg.validate().is_err());

        let mut cfg = ScenarioConfig::default();
        cfg.saturation = 0.0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_degenerate_stepping() {
        let mut cfg = ScenarioConfig::default();
        cfg.dt = 0.0;
        assert!(cfg.validate().is_err());

        let mut cfg = ScenarioConfig::default();
        cfg.steps = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = ScenarioConfig::default();
        cfg.n_surfaces = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut cfg = ScenarioConfig::default();
        cfg.delta_scale = f64::NAN;
        assert!(cfg.validate().is_err());
    }
}
