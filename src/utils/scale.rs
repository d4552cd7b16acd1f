// Letter grade to grade points on a 4.0 scale, in the order offered to the user.
pub const GRADE_SCALE: [(&str, f64); 12] = [
    ("A", 4.0),
    ("A-", 3.7),
    ("B+", 3.3),
    ("B", 3.0),
    ("B-", 2.7),
    ("C+", 2.3),
    ("C", 2.0),
    ("C-", 1.7),
    ("D+", 1.3),
    ("D", 1.0),
    ("D-", 0.7),
    ("F", 0.0),
];

pub const MAX_GPA: f64 = 4.0;

// Keeps a typed-in GPA on the scale. Anything unreadable counts as not entered.
pub fn clamp_gpa(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, MAX_GPA) } else { 0.0 }
}

// Looks up the grade points of a symbol. Surrounding whitespace is ignored and
// anything outside the scale is worth 0.0.
pub fn points_of(grade: &str) -> f64 {
    lookup(grade).unwrap_or(0.0)
}

// Exact lookup after trimming, `None` when the symbol is not on the scale.
pub fn lookup(grade: &str) -> Option<f64> {
    let grade = grade.trim();
    GRADE_SCALE
        .iter()
        .find(|(symbol, _)| *symbol == grade)
        .map(|(_, points)| *points)
}

pub fn is_recognized(grade: &str) -> bool {
    lookup(grade).is_some()
}

// Grade symbols in scale order.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    GRADE_SCALE.iter().map(|(symbol, _)| *symbol)
}
