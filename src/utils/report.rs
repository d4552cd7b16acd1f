use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, object::Columns},
};
use crate::models::{CourseRow, PreviousTerm, Summary};
use crate::utils::gpa::{compute_aggregate, compute_cumulative};
use crate::utils::scale::GRADE_SCALE;

#[derive(Tabled)]
struct CourseLine {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Course Name")]
    name: String,
    #[tabled(rename = "Credits")]
    credits: String,
    #[tabled(rename = "Letter Grade")]
    grade: String,
}

#[derive(Tabled)]
struct ScaleLine {
    #[tabled(rename = "Grade")]
    symbol: &'static str,
    #[tabled(rename = "Points")]
    points: String,
}

const EXPLANATION: &str = "How GPA is computed
  - Per-course points = credits x grade points (A=4.0, A-=3.7, B+=3.3, ..., F=0.0).
  - Total grade points = sum of per-course points.
  - GPA = total grade points / total credits.
  - Cumulative GPA (optional) combines your current term with a previous GPA and credits.";

// Recomputes the displayed numbers from scratch. The cumulative value is only
// produced once a previous GPA and previous credits have both been entered.
pub fn summarize(rows: &[CourseRow], previous: &PreviousTerm) -> Summary {
    let aggregate = compute_aggregate(rows);
    let cumulative_gpa = previous.is_set().then(|| {
        compute_cumulative(aggregate.gpa, aggregate.total_credits, previous.gpa, previous.credits)
    });
    Summary { aggregate, cumulative_gpa }
}

pub fn render_courses(rows: &[CourseRow]) -> String {
    let lines: Vec<CourseLine> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| CourseLine {
            index,
            name: row.name.clone(),
            credits: format!("{:.1}", row.credits),
            grade: row.grade.clone().unwrap_or_else(|| "-".to_string()),
        })
        .collect();

    let mut table = Table::new(&lines);
    table
        .with(Style::modern())
        .with(Modify::new(Columns::new(2..)).with(Alignment::right()));
    if rows.is_empty() {
        table.with(Panel::footer("No courses yet, use `add`"));
    }
    table.to_string()
}

pub fn render_summary(summary: &Summary) -> String {
    let aggregate = &summary.aggregate;
    let mut out = format!(
        "Total Credits: {:.1}\nTotal Grade Points: {:.2}\nGPA: {:.3}",
        aggregate.total_credits, aggregate.total_points, aggregate.gpa
    );
    if let Some(cumulative) = summary.cumulative_gpa {
        out.push_str(&format!("\nCumulative GPA: {:.3}", cumulative));
    }
    out
}

// Full screen shown after every change: the course table followed by the results.
pub fn render_report(rows: &[CourseRow], previous: &PreviousTerm) -> String {
    let summary = summarize(rows, previous);
    format!("Courses\n{}\n\nResults\n{}", render_courses(rows), render_summary(&summary))
}

pub fn render_scale() -> String {
    let lines: Vec<ScaleLine> = GRADE_SCALE
        .iter()
        .map(|&(symbol, points)| ScaleLine { symbol, points: format!("{:.1}", points) })
        .collect();
    Table::new(&lines).with(Style::modern()).to_string()
}

pub fn explanation() -> &'static str {
    EXPLANATION
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<CourseRow> {
        vec![CourseRow::new("CS101", 3.0, "A"), CourseRow::new("MATH1", 4.0, "B+")]
    }

    #[test]
    fn summary_formats_metrics_with_fixed_precision() {
        let text = render_summary(&summarize(&rows(), &PreviousTerm::default()));
        assert!(text.contains("Total Credits: 7.0"));
        assert!(text.contains("Total Grade Points: 25.20"));
        assert!(text.contains("GPA: 3.600"));
        assert!(!text.contains("Cumulative"));
    }

    #[test]
    fn cumulative_shown_only_when_previous_complete() {
        let partial = PreviousTerm { gpa: 3.2, credits: 0.0 };
        assert_eq!(summarize(&rows(), &partial).cumulative_gpa, None);

        let previous = PreviousTerm { gpa: 3.2, credits: 30.0 };
        let summary = summarize(&rows(), &previous);
        assert!(render_summary(&summary).contains("Cumulative GPA: 3.276"));
    }

    #[test]
    fn course_table_lists_rows_in_order() {
        let text = render_courses(&rows());
        let cs = text.find("CS101").unwrap();
        let math = text.find("MATH1").unwrap();
        assert!(cs < math);
        assert!(text.contains("Letter Grade"));
    }

    #[test]
    fn empty_table_has_hint() {
        assert!(render_courses(&[]).contains("No courses yet"));
    }

    #[test]
    fn scale_lists_every_grade() {
        let text = render_scale();
        for (symbol, _) in GRADE_SCALE {
            assert!(text.contains(symbol));
        }
    }
}
