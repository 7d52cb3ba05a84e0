// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Island Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Simulation driver: scenario construction, the step loop with its
//! record sink, end-of-run reporting, and parameter scans.

pub mod scan;
pub mod sim;

pub use sim::{DiscardSink, IslandSimulation, MemoryRecorder, RunReport, StepRecord, StepSink};
