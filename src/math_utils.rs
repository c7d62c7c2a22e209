// src/math_utils.rs

/// Round to `decimals` places, halves away from zero.
///
/// `f64::round` rounds half away from zero, so scaling first gives the same
/// rule at any precision: `round_to_decimals(2.345, 2) == 2.35` modulo the
/// usual binary-representation caveats.
pub fn round_to_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// True when `value` carries no digits beyond `decimals` places
pub fn has_at_most_decimals(value: f64, decimals: u32) -> bool {
    let scale = 10f64.powi(decimals as i32);
    let scaled = value * scale;
    (scaled - scaled.round()).abs() < 1e-6
}

pub struct Timer {
    start_time: std::time::Instant,
}

impl Timer {
    pub fn new() -> Timer {
        Timer {
            start_time: std::time::Instant::now(),
        }
    }

    pub fn start(&mut self) {
        self.start_time = std::time::Instant::now();
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64() * 1000.0
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
