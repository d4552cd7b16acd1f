use log::debug;
use crate::models::{CourseRow, Field};
use crate::utils::gpa::coerce_credits;

/// Ordered list of course rows backing the form.
///
/// Rows are addressed by position. Removing a row shifts the ones after it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeTable {
    rows: Vec<CourseRow>,
}

impl GradeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: Vec<CourseRow>) -> Self {
        Self { rows }
    }

    // Adds an unnamed course at the end.
    pub fn append(&mut self, default_credits: f64, default_grade: &str) {
        self.rows.push(CourseRow::new("", default_credits, default_grade));
        debug!("Appended row {} ({} credits, grade {})", self.rows.len() - 1, default_credits, default_grade);
    }

    // Out of range indexes leave the table untouched.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.rows.len() {
            let removed = self.rows.remove(index);
            debug!("Removed row {} ({:?})", index, removed.name);
        } else {
            debug!("Ignoring removal of row {}, table has {} rows", index, self.rows.len());
        }
    }

    // Sets one field of one row. Credits are coerced, grades are stored verbatim.
    pub fn update(&mut self, index: usize, field: Field, value: &str) {
        let Some(row) = self.rows.get_mut(index) else {
            debug!("Ignoring update of row {}, table has {} rows", index, self.rows.len());
            return;
        };
        match field {
            Field::Name => row.name = value.to_string(),
            Field::Credits => row.credits = coerce_credits(value),
            Field::Grade => row.grade = Some(value.to_string()),
        }
        debug!("Updated {:?} of row {}", field, index);
    }

    pub fn rows(&self) -> &[CourseRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GradeTable {
        GradeTable::with_rows(vec![
            CourseRow::new("CS101", 3.0, "A"),
            CourseRow::new("MATH1", 4.0, "B+"),
            CourseRow::new("HIST", 2.0, "C"),
        ])
    }

    #[test]
    fn append_adds_default_row_at_end() {
        let mut table = sample();
        table.append(3.0, "B");
        assert_eq!(table.len(), 4);
        assert_eq!(table.rows()[3], CourseRow::new("", 3.0, "B"));
    }

    #[test]
    fn remove_at_shifts_following_rows() {
        let mut table = sample();
        table.remove_at(1);
        let names: Vec<_> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["CS101", "HIST"]);
    }

    #[test]
    fn remove_out_of_bounds_is_noop() {
        let mut table = sample();
        let before = table.clone();
        table.remove_at(3);
        table.remove_at(usize::MAX);
        assert_eq!(table, before);

        let mut empty = GradeTable::new();
        empty.remove_at(0);
        assert!(empty.is_empty());
    }

    #[test]
    fn update_coerces_credits() {
        let mut table = sample();
        table.update(0, Field::Credits, "4.5");
        assert_eq!(table.rows()[0].credits, 4.5);
        table.update(0, Field::Credits, "lots");
        assert_eq!(table.rows()[0].credits, 0.0);
        table.update(0, Field::Credits, "-2");
        assert_eq!(table.rows()[0].credits, 0.0);
    }

    #[test]
    fn update_stores_any_grade_and_name() {
        let mut table = sample();
        table.update(2, Field::Grade, "Q");
        table.update(2, Field::Name, "");
        assert_eq!(table.rows()[2].grade.as_deref(), Some("Q"));
        assert_eq!(table.rows()[2].name, "");
    }

    #[test]
    fn update_out_of_bounds_is_noop() {
        let mut table = sample();
        let before = table.clone();
        table.update(7, Field::Name, "nope");
        assert_eq!(table, before);
    }
}
