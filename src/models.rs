use serde::{Deserialize, Serialize};
use crate::utils::gpa::{lenient_credits, lenient_grade, lenient_name};

// One course line of the form. Rows have no identity beyond their position in the table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CourseRow {
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_credits")]
    pub credits: f64,
    #[serde(default, deserialize_with = "lenient_grade")]
    pub grade: Option<String>,
}

impl CourseRow {
    pub fn new(name: impl Into<String>, credits: f64, grade: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credits,
            grade: Some(grade.into()),
        }
    }
}

// Totals derived from a table snapshot, recomputed on every refresh.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Default)]
pub struct AggregateResult {
    pub total_credits: f64,
    pub total_points: f64,
    pub gpa: f64,
}

// Editable columns of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Credits,
    Grade,
}

// Previously recorded GPA and the credits it covers. Zero means "not entered".
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct PreviousTerm {
    pub gpa: f64,
    pub credits: f64,
}

impl PreviousTerm {
    // Only counts once both values have been filled in.
    pub fn is_set(&self) -> bool {
        self.gpa > 0.0 && self.credits > 0.0
    }
}

// What the host displays after every refresh.
#[derive(Debug, Serialize, Clone, Copy, PartialEq)]
pub struct Summary {
    #[serde(flatten)]
    pub aggregate: AggregateResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cumulative_gpa: Option<f64>,
}
