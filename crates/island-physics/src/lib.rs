// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — Island Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pure physics models: modified Rutherford island growth, confinement
//! degradation, and fusion-output proxies.

pub mod confinement;
pub mod fusion_output;
pub mod mre;
