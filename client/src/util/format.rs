//! Display formatting for record fields.
//!
//! Absent values render as "Not set" rather than zero so a missing
//! measurement is never mistaken for a recorded one.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

pub const NOT_SET: &str = "Not set";

#[must_use]
pub fn calorie_goal_text(goal: Option<i32>) -> String {
    goal.map_or_else(|| NOT_SET.to_owned(), |kcal| format!("{kcal} kcal"))
}

#[must_use]
pub fn kilograms_text(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_SET.to_owned(), |kg| format!("{kg:.1} kg"))
}

#[must_use]
pub fn centimeters_text(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_SET.to_owned(), |cm| format!("{cm:.0} cm"))
}

/// Serving count, dropping a `.0` for whole servings.
#[must_use]
pub fn servings_text(quantity: f64) -> String {
    let amount = if quantity.fract() == 0.0 { format!("{quantity:.0}") } else { format!("{quantity}") };
    if (quantity - 1.0).abs() < f64::EPSILON {
        format!("{amount} serving")
    } else {
        format!("{amount} servings")
    }
}

/// Date part of an ISO 8601 timestamp.
#[must_use]
pub fn date_part(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}
