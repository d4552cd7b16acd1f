use log::debug;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use crate::models::{AggregateResult, CourseRow};
use crate::utils::scale::points_of;

// Parses user text as a number, falling back to `default` for anything that is
// not a finite decimal. Every lenient numeric input in the crate goes through here.
pub fn parse_or_default(raw: &str, default: f64) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            debug!("Could not read {:?} as a number, using {}", raw, default);
            default
        }
    }
}

// Credits are never negative or non-finite once stored.
pub fn clamp_credits(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 { value } else { 0.0 }
}

pub fn coerce_credits(raw: &str) -> f64 {
    clamp_credits(parse_or_default(raw, 0.0))
}

// Accepts credits written as a number, a numeric string, null or garbage.
pub fn lenient_credits<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let credits = match value {
        Value::Number(n) => clamp_credits(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => coerce_credits(&s),
        Value::Bool(_) | Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    };
    Ok(credits)
}

// A course name that is not a string is read as an empty name.
pub fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

// A grade that is not a string is treated as absent.
pub fn lenient_grade<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Sums credits and grade points over `rows` in order and derives the GPA.
///
/// Never fails: bad credits count as zero, unknown grades are worth zero
/// points and a table without credits has a GPA of 0.0.
pub fn compute_aggregate(rows: &[CourseRow]) -> AggregateResult {
    let mut total_credits = 0.0;
    let mut total_points = 0.0;

    for row in rows {
        let credits = clamp_credits(row.credits);
        let points = row.grade.as_deref().map_or(0.0, points_of);
        total_credits += credits;
        total_points += credits * points;
    }

    let gpa = if total_credits > 0.0 { total_points / total_credits } else { 0.0 };

    AggregateResult { total_credits, total_points, gpa }
}

/// Credit-weighted combination of the current term with a previous record.
///
/// Negative credits are clamped to zero. GPA values are taken as given.
pub fn compute_cumulative(current_gpa: f64, current_credits: f64, prev_gpa: f64, prev_credits: f64) -> f64 {
    let current_credits = current_credits.max(0.0);
    let prev_credits = prev_credits.max(0.0);
    let total_credits = current_credits + prev_credits;

    if total_credits == 0.0 {
        return 0.0;
    }
    // A side with no credits contributes nothing; return the other side as is.
    if prev_credits == 0.0 {
        return current_gpa;
    }
    if current_credits == 0.0 {
        return prev_gpa;
    }

    (current_gpa * current_credits + prev_gpa * prev_credits) / total_credits
}
