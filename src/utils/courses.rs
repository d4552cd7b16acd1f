use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use log::{info, warn};
use crate::models::CourseRow;
use crate::utils::scale::{is_recognized, symbols};

// Parses a JSON array of course rows. Individual values are read leniently,
// only a document that is not an array of objects is rejected. Numbers beyond
// the f64 range are a JSON syntax error and reject the document too.
pub fn parse_courses(json: &str) -> Result<Vec<CourseRow>> {
    let rows: Vec<CourseRow> = serde_json::from_str(json).context("Course list is not a JSON array of course objects")?;

    let expected = symbols().collect::<Vec<_>>().join(", ");
    for (index, row) in rows.iter().enumerate() {
        match row.grade.as_deref() {
            Some(grade) if !is_recognized(grade) => warn!(
                "Row {} has unrecognized grade {:?} (expected one of {}), it will count as 0.0 points",
                index, grade, expected
            ),
            None => warn!("Row {} has no grade, it will count as 0.0 points", index),
            _ => {}
        }
    }

    Ok(rows)
}

// Reads a course list from disk for a one-shot report.
pub fn load_courses(path: &Path) -> Result<Vec<CourseRow>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read course list from {}", path.display()))?;
    let rows = parse_courses(&contents).with_context(|| format!("Failed to parse {}", path.display()))?;
    info!("Loaded {} courses from {}", rows.len(), path.display());
    Ok(rows)
}
