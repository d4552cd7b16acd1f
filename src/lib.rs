pub mod cli;
pub mod config;
pub mod models;
pub mod utils;

pub use models::{AggregateResult, CourseRow, Field, PreviousTerm, Summary};
pub use utils::gpa::{compute_aggregate, compute_cumulative, parse_or_default};
pub use utils::scale::{points_of, GRADE_SCALE};
pub use utils::session::Session;
pub use utils::table::GradeTable;
