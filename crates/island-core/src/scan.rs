// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Parameter Scan
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One-knob parameter scans: re-run the full simulation over a sweep of
//! values and compare final fusion output. The impact statistic
//! (output range as a percentage of the mean) ranks the knobs against
//! each other.

use ndarray::Array1;

use island_types::config::ScenarioConfig;
use island_types::error::{IslandError, IslandResult};

use crate::sim::{DiscardSink, IslandSimulation};

/// The user-facing knobs a scan can sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanKnob {
    InitialWidth,
    Bootstrap,
    DeltaScale,
    Saturation,
}

impl ScanKnob {
    pub fn label(&self) -> &'static str {
        match self {
            ScanKnob::InitialWidth => "initial_width",
            ScanKnob::Bootstrap => "bootstrap",
            ScanKnob::DeltaScale => "delta_scale",
            ScanKnob::Saturation => "saturation",
        }
    }

    fn apply(&self, config: &mut ScenarioConfig, value: f64) {
        match self {
            ScanKnob::InitialWidth => config.initial_width = value,
            ScanKnob::Bootstrap => config.bootstrap = value,
            ScanKnob::DeltaScale => config.delta_scale = value,
            ScanKnob::Saturation => config.saturation = value,
        }
    }
}

/// Spread of a scan's outputs: absolute range and range as a percentage
/// of the mean output.
#[derive(Debug, Clone, Copy)]
pub struct ParameterImpact {
    pub range: f64,
    pub percent_of_mean: f64,
}

/// Outcome of one sweep: the knob values and the final fusion power each
/// value produced, index-aligned.
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub knob: ScanKnob,
    pub values: Array1<f64>,
    pub final_powers: Array1<f64>,
}

impl ScanResult {
    /// Impact of this knob on the final output.
    pub fn impact(&self) -> ParameterImpact {
        let max = self.final_powers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = self.final_powers.iter().copied().fold(f64::INFINITY, f64::min);
        let mean = self.final_powers.sum() / self.final_powers.len() as f64;
        let range = max - min;
        ParameterImpact {
            range,
            percent_of_mean: 100.0 * range / mean,
        }
    }

    /// Knob value yielding the highest final output, with that output.
    pub fn best_value(&self) -> (f64, f64) {
        let mut best = (self.values[0], self.final_powers[0]);
        for (&v, &p) in self.values.iter().zip(self.final_powers.iter()) {
            if p > best.1 {
                best = (v, p);
            }
        }
        best
    }
}

/// Sweep one knob over `values`, running the complete scenario for each,
/// and collect the final fusion power. Every swept value must pass the
/// scenario validation; an empty sweep is rejected.
pub fn scan_parameter(
    base: &ScenarioConfig,
    knob: ScanKnob,
    values: &[f64],
) -> IslandResult<ScanResult> {
    if values.is_empty() {
        return Err(IslandError::ScanError(format!(
            "empty value sweep for {}",
            knob.label()
        )));
    }

    let mut final_powers = Vec::with_capacity(values.len());
    for &value in values {
        let mut config = base.clone();
        knob.apply(&mut config, value);
        let mut sim = IslandSimulation::from_config(&config)?;
        let report = sim.run(&mut DiscardSink);
        final_powers.push(report.final_power);
    }

    Ok(ScanResult {
        knob,
        values: Array1::from(values.to_vec()),
        final_powers: Array1::from(final_powers),
    })
}
