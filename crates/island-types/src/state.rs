// ─────────────────────────────────────────────────────────────────────
// SCPN Island Dynamics — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Geometry and evolving state: magnetic islands, flux surfaces, and the
//! plasma-state aggregate that drives per-step island evolution.
//!
//! Surfaces and islands are identity objects: no `PartialEq` is derived,
//! two surfaces with equal radius and q are still distinct entities.

/// Strategy seam for the island growth physics: given an island and the
/// surface it perturbs, return the instantaneous dw/dt.
///
/// Implemented by `ModifiedRutherford` in island-physics; the blanket impl
/// below lets a driver pass a plain closure over its coefficients instead.
pub trait RateModel {
    fn rate(&self, island: &MagneticIsland, surface: &FluxSurface) -> f64;
}

impl<F> RateModel for F
where
    F: Fn(&MagneticIsland, &FluxSurface) -> f64,
{
    fn rate(&self, island: &MagneticIsland, surface: &FluxSurface) -> f64 {
        self(island, surface)
    }
}

/// A rotating tearing-mode island living on one flux surface.
#[derive(Debug, Clone)]
pub struct MagneticIsland {
    /// Island width [m-like units]. Mutated in place each step.
    pub w: f64,
    /// Poloidal mode number.
    pub m: u32,
    /// Toroidal mode number.
    pub n: u32,
    /// Self-generated bootstrap current strength, typically in [0, 1].
    pub bootstrap_drive: f64,
}

impl MagneticIsland {
    pub fn new(w0: f64, m: u32, n: u32, bootstrap_drive: f64) -> Self {
        MagneticIsland {
            w: w0,
            m,
            n,
            bootstrap_drive,
        }
    }

    /// Mode ratio m/n. Resonance sits where this matches the local q.
    pub fn mode_ratio(&self) -> f64 {
        f64::from(self.m) / f64::from(self.n)
    }

    /// Advance the island width by one explicit Euler step:
    /// `w ← w + rate(island, surface) · dt`.
    ///
    /// The stored width is NOT floored: under strong saturation it can
    /// mathematically go negative, and that trajectory is kept as-is.
    /// Rate models guard their own divisors (see `W_FLOOR`).
    pub fn evolve<R: RateModel + ?Sized>(&mut self, dt: f64, surface: &FluxSurface, model: &R) {
        let dw_dt = model.rate(self, surface);
        self.w += dw_dt * dt;
    }
}

/// One nested toroidal flux surface, indexed by minor radius, with an
/// optional owned island. `radius` and `q` are fixed for the surface's
/// lifetime; only the island mutates.
#[derive(Debug, Clone)]
pub struct FluxSurface {
    pub radius: f64,
    pub q: f64,
    pub island: Option<MagneticIsland>,
}

impl FluxSurface {
    pub fn new(radius: f64, q: f64, island: Option<MagneticIsland>) -> Self {
        FluxSurface { radius, q, island }
    }

    /// True iff an island perturbs this surface.
    pub fn has_island(&self) -> bool {
        self.island.is_some()
    }

    /// Evolve the attached island, if any.
    ///
    /// The island is detached for the duration of the rate evaluation so
    /// the surface can be handed to the model as a shared borrow.
    pub fn evolve_island<R: RateModel + ?Sized>(&mut self, dt: f64, model: &R) {
        if let Some(mut island) = self.island.take() {
            island.evolve(dt, self, model);
            self.island = Some(island);
        }
    }
}

/// All flux surfaces of one run, ordered by ascending radius. Iteration
/// order is the stored order and is deterministic.
///
/// The aggregate makes no single-island assumption: zero, one, or many
/// surfaces may carry islands, and each is evolved from its own pre-step
/// state only (the rate model reads nothing across surfaces).
#[derive(Debug, Clone)]
pub struct PlasmaState {
    pub flux_surfaces: Vec<FluxSurface>,
}

impl PlasmaState {
    pub fn new(flux_surfaces: Vec<FluxSurface>) -> Self {
        PlasmaState { flux_surfaces }
    }

    /// One integration step: evolve every attached island in surface
    /// order. Surfaces without islands are skipped.
    pub fn evolve_islands<R: RateModel + ?Sized>(&mut self, dt: f64, model: &R) {
        for surface in &mut self.flux_surfaces {
            surface.evolve_island(dt, model);
        }
    }

    /// `(radius, width)` for every island-carrying surface, in surface
    /// order, reflecting the state after the most recent evolve call.
    pub fn get_island_data(&self) -> Vec<(f64, f64)> {
        self.flux_surfaces
            .iter()
            .filter_map(|fs| fs.island.as_ref().map(|isl| (fs.radius, isl.w)))
            .collect()
    }

    /// Largest island width across all surfaces, floored at zero; 0.0 for
    /// an island-free plasma. Input to the confinement scaling.
    pub fn max_island_width(&self) -> f64 {
        self.flux_surfaces
            .iter()
            .filter_map(|fs| fs.island.as_ref())
            .map(|isl| isl.w)
            .fold(0.0, f64::max)
    }

    /// Number of island-carrying surfaces.
    pub fn island_count(&self) -> usize {
        self.flux_surfaces.iter().filter(|fs| fs.has_island()).count()
    }
}
