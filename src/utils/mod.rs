pub mod courses;
pub mod gpa;
pub mod report;
pub mod scale;
pub mod session;
pub mod table;
