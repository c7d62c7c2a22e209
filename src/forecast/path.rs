// src/forecast/path.rs
use chrono::NaiveDate;
use serde::Serialize;

/// One simulated trading day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ForecastStep {
    pub date: NaiveDate,
    pub price: f64,
}

/// Ordered single-path forecast, echoed back with its label and start price
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastPath {
    pub label: String,
    pub initial_price: f64,
    pub steps: Vec<ForecastStep>,
}

impl ForecastPath {
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn final_price(&self) -> Option<f64> {
        self.steps.last().map(|s| s.price)
    }

    /// Change against the previous trading day. The first day has no
    /// predecessor and reports 0.0.
    pub fn daily_changes(&self) -> Vec<f64> {
        let mut changes = Vec::with_capacity(self.steps.len());
        let mut prev: Option<f64> = None;
        for step in &self.steps {
            changes.push(prev.map_or(0.0, |p| step.price - p));
            prev = Some(step.price);
        }
        changes
    }

    /// Change of day `index` against the initial price
    pub fn total_change(&self, index: usize) -> Option<f64> {
        self.steps.get(index).map(|s| s.price - self.initial_price)
    }

    /// Number of days sitting on `floor`
    pub fn floored_days(&self, floor: f64) -> usize {
        self.steps.iter().filter(|s| s.price <= floor).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_path() -> ForecastPath {
        let d = |day| NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
        ForecastPath {
            label: "TSLA".to_string(),
            initial_price: 200.0,
            steps: vec![
                ForecastStep { date: d(17), price: 201.5 },
                ForecastStep { date: d(18), price: 199.25 },
                ForecastStep { date: d(19), price: 1.0 },
            ],
        }
    }

    #[test]
    fn test_daily_changes() {
        let changes = sample_path().daily_changes();
        assert_eq!(changes.len(), 3);
        assert_eq!(changes[0], 0.0);
        assert_relative_eq!(changes[1], -2.25, epsilon = 1e-9);
        assert_relative_eq!(changes[2], -198.25, epsilon = 1e-9);
    }

    #[test]
    fn test_total_change_and_final_price() {
        let path = sample_path();
        assert_relative_eq!(path.total_change(0).unwrap(), 1.5, epsilon = 1e-9);
        assert!(path.total_change(3).is_none());
        assert_eq!(path.final_price(), Some(1.0));
    }

    #[test]
    fn test_floored_days() {
        assert_eq!(sample_path().floored_days(1.0), 1);
    }

    #[test]
    fn test_serializes_iso_dates() {
        let json = serde_json::to_string(&sample_path()).unwrap();
        assert!(json.contains("\"date\":\"2024-06-17\""));
        assert!(json.contains("\"label\":\"TSLA\""));
    }
}
