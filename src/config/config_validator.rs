use std::fmt::Write as _;

use keeplang_core::LayoutId;

use crate::config::{Config, GestureTuning};

pub fn find_duplicate_cycle_entries(order: &[LayoutId]) -> Option<String> {
    let duplicates: Vec<_> = order
        .iter()
        .enumerate()
        .filter(|(i, id)| order[..*i].contains(id))
        .map(|(_, id)| *id)
        .collect();

    if duplicates.is_empty() {
        None
    } else {
        let mut error = String::from("Duplicate layouts in cycle order:\n\n");

        for id in &duplicates {
            let _ = writeln!(error, "• '{id}'");
        }

        error.push_str("\nEach layout may appear in the cycle only once.");
        Some(error)
    }
}

pub fn find_invalid_gesture_tuning(tuning: &GestureTuning) -> Option<String> {
    let positive = |name: &str, v: f64| {
        if v.is_finite() && v > 0.0 {
            None
        } else {
            Some(format!("gesture.{name} must be a positive number, got {v}"))
        }
    };

    positive("max_velocity", tuning.max_velocity)
        .or_else(|| positive("velocity_epsilon", tuning.velocity_epsilon))
        .or_else(|| positive("pixels_per_step", tuning.pixels_per_step))
        .or_else(|| {
            (tuning.max_steps_per_tick == 0)
                .then(|| "gesture.max_steps_per_tick must be at least 1".to_string())
        })
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.cycle_order.is_empty() {
            return Err("Cycle order must name at least one layout.".to_string());
        }
        if let Some(error) = find_duplicate_cycle_entries(&self.cycle_order) {
            return Err(error);
        }
        if let Some(error) = find_invalid_gesture_tuning(&self.gesture) {
            return Err(error);
        }
        Ok(())
    }
}
