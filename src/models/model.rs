// src/models/model.rs

/// A one-factor price process that can be advanced by a single step given a
/// standard-normal shock.
pub trait PriceModel {
    /// Exact transition over `dt` for the shock `normal_draw`
    fn evolve(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64;
}
