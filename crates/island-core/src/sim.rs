// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Simulation Driver
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Step loop over the plasma state.
//!
//! Each step evolves every island, derives τ_E / Lawson / power from the
//! fresh state, and hands a [`StepRecord`] to the caller's sink. The core
//! keeps no time-series buffers of its own; accumulation belongs to the
//! sink owner.

use island_physics::confinement::default_tau_e;
use island_physics::fusion_output::{default_fusion_power, default_lawson_product};
use island_physics::mre::{ModifiedRutherford, MreCoefficients};
use island_types::config::ScenarioConfig;
use island_types::constants::{Q_RESONANT, RESONANCE_TOL};
use island_types::error::IslandResult;
use island_types::state::{FluxSurface, MagneticIsland, PlasmaState};

/// Steps spanned by the end-of-run dP/dt estimate.
const GRADIENT_WINDOW: usize = 5;

/// Reference plasma: surfaces at radius 1..=n with a linear q profile
/// q(r) = q_axis + q_slope·r. The first surface inside the resonance
/// window around q = 2 is seeded with the m=2, n=1 island; at most one
/// island is ever seeded. The aggregate itself stays general — this
/// single-island invariant lives only here, in the driver.
pub fn build_reference_plasma(config: &ScenarioConfig) -> PlasmaState {
    let mut surfaces = Vec::with_capacity(config.n_surfaces);
    let mut seeded = false;

    for i in 1..=config.n_surfaces {
        let radius = i as f64;
        let q = config.q_axis + config.q_slope * radius;

        let island = if !seeded && (q - Q_RESONANT).abs() < RESONANCE_TOL {
            seeded = true;
            Some(MagneticIsland::new(
                config.initial_width,
                2,
                1,
                config.bootstrap,
            ))
        } else {
            None
        };

        surfaces.push(FluxSurface::new(radius, q, island));
    }

    PlasmaState::new(surfaces)
}

/// One step's observables, in simulation order.
#[derive(Debug, Clone, Copy)]
pub struct StepRecord {
    /// Simulation time at which the step's state was recorded.
    pub time: f64,
    /// Stored width of the tracked island (unclamped; 0.0 if none).
    pub width: f64,
    /// Energy confinement time.
    pub tau_e: f64,
    /// Lawson triple-product proxy.
    pub lawson: f64,
    /// Fusion power proxy.
    pub power: f64,
}

/// Append-only consumer of step records. Owned by the presentation side;
/// the driver only pushes into it.
pub trait StepSink {
    fn record(&mut self, record: &StepRecord);
}

/// In-memory recorder, the plain [`StepSink`] for tests and reports.
#[derive(Debug, Default)]
pub struct MemoryRecorder {
    pub records: Vec<StepRecord>,
}

impl MemoryRecorder {
    pub fn new() -> Self {
        MemoryRecorder::default()
    }

    pub fn last(&self) -> Option<&StepRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl StepSink for MemoryRecorder {
    fn record(&mut self, record: &StepRecord) {
        self.records.push(*record);
    }
}

/// Sink that drops every record; used by scans that only need the report.
#[derive(Debug, Default)]
pub struct DiscardSink;

impl StepSink for DiscardSink {
    fn record(&mut self, _record: &StepRecord) {}
}

/// End-of-run summary.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    /// Stored island width after the last step (may be negative).
    pub final_width: f64,
    /// Half the final width, the island's cross-section radius.
    pub cross_section_radius: f64,
    /// Fusion power at the last step.
    pub final_power: f64,
    /// dP/dt estimated over the last `GRADIENT_WINDOW` steps; 0.0 when
    /// the run is shorter than the window.
    pub power_gradient: f64,
}

/// The driver: owns the plasma state and the rate model for one run and
/// advances them in discrete timesteps.
#[derive(Debug)]
pub struct IslandSimulation {
    state: PlasmaState,
    model: ModifiedRutherford,
    dt: f64,
    steps: usize,
    elapsed_steps: usize,
}

impl IslandSimulation {
    /// Validate the scenario and assemble the run.
    pub fn from_config(config: &ScenarioConfig) -> IslandResult<Self> {
        config.validate()?;
        Ok(IslandSimulation {
            state: build_reference_plasma(config),
            model: ModifiedRutherford::new(MreCoefficients::from_config(config)),
            dt: config.dt,
            steps: config.steps,
            elapsed_steps: 0,
        })
    }

    pub fn state(&self) -> &PlasmaState {
        &self.state
    }

    pub fn coefficients(&self) -> &MreCoefficients {
        &self.model.coefficients
    }

    /// Advance one timestep and derive the observables from the evolved
    /// state. Time stamps follow the step count at entry, so the first
    /// record carries t = 0.
    pub fn step(&mut self) -> StepRecord {
        let time = self.elapsed_steps as f64 * self.dt;
        self.state.evolve_islands(self.dt, &self.model);
        self.elapsed_steps += 1;

        let width = self
            .state
            .get_island_data()
            .first()
            .map(|&(_, w)| w)
            .unwrap_or(0.0);
        let tau_e = default_tau_e(&self.state);
        let lawson = default_lawson_product(tau_e);
        let power = default_fusion_power(tau_e);

        StepRecord {
            time,
            width,
            tau_e,
            lawson,
            power,
        }
    }

    /// Run the configured number of steps, handing every record to the
    /// sink, and summarize the run.
    pub fn run<S: StepSink>(&mut self, sink: &mut S) -> RunReport {
        let mut powers = Vec::with_capacity(self.steps);
        let mut final_width = 0.0;

        for _ in 0..self.steps {
            let record = self.step();
            powers.push(record.power);
            final_width = record.width;
            sink.record(&record);
        }

        let final_power = powers.last().copied().unwrap_or(0.0);
        let power_gradient = if powers.len() > GRADIENT_WINDOW {
            let first = powers[powers.len() - 1 - GRADIENT_WINDOW];
            (final_power - first) / (self.dt * GRADIENT_WINDOW as f64)
        } else {
            0.0
        };

        RunReport {
            final_width,
            cross_section_radius: final_width / 2.0,
            final_power,
            power_gradient,
        }
    }
}
