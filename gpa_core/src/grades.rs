//! Default grade-point table for the 4.0 scale.
//!
//! This module provides the built-in grade-to-point mapping the engine
//! scores transcripts with. The table is immutable configuration passed
//! explicitly to the engine, never hidden global state.

use crate::types::GradeSymbol;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Cached default table - built once and reused across all operations
static DEFAULT_TABLE: Lazy<GradePointTable> = Lazy::new(build_default_table_internal);

/// Fixed mapping from scoring-eligible grades to point values on [0.0, 4.0]
///
/// Grades absent from the table (WH, NC, CM) are excluded from GPA
/// arithmetic entirely: zero weight, zero credit contribution.
#[derive(Clone, Debug)]
pub struct GradePointTable {
    points: HashMap<GradeSymbol, f64>,
}

impl GradePointTable {
    pub fn new(points: HashMap<GradeSymbol, f64>) -> Self {
        Self { points }
    }

    /// Point value for a grade, or None when the grade is excluded
    pub fn points(&self, grade: GradeSymbol) -> Option<f64> {
        self.points.get(&grade).copied()
    }

    /// Validate the table, returning human-readable findings
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for symbol in GradeSymbol::ALL {
            match (symbol.is_scoring_eligible(), self.points.get(&symbol)) {
                (true, None) => errors.push(format!(
                    "{}: scoring-eligible grade missing from table",
                    symbol
                )),
                (false, Some(_)) => errors.push(format!(
                    "{}: excluded grade must not carry points",
                    symbol
                )),
                (_, Some(value)) if !(0.0..=4.0).contains(value) => errors.push(format!(
                    "{}: point value {} outside [0.0, 4.0]",
                    symbol, value
                )),
                _ => {}
            }
        }

        errors
    }
}

/// Get a reference to the cached default table
///
/// This function returns a reference to the pre-built table, avoiding the
/// overhead of rebuilding it on every operation.
pub fn get_default_table() -> &'static GradePointTable {
    &DEFAULT_TABLE
}

/// Builds the default 4.0-scale grade-point table
///
/// **Note**: For production use, prefer `get_default_table()` which returns
/// a cached reference. This function is retained for testing and custom
/// table creation.
pub fn build_default_table() -> GradePointTable {
    build_default_table_internal()
}

/// Internal function that actually builds the table
fn build_default_table_internal() -> GradePointTable {
    let mut points = HashMap::new();

    points.insert(GradeSymbol::A, 4.0);
    points.insert(GradeSymbol::AMinus, 3.7);
    points.insert(GradeSymbol::BPlus, 3.3);
    points.insert(GradeSymbol::B, 3.0);
    points.insert(GradeSymbol::BMinus, 2.7);
    points.insert(GradeSymbol::CPlus, 2.3);
    points.insert(GradeSymbol::C, 2.0);
    points.insert(GradeSymbol::CMinus, 1.7);
    points.insert(GradeSymbol::DPlus, 1.3);
    points.insert(GradeSymbol::D, 1.0);
    points.insert(GradeSymbol::E, 0.0);
    points.insert(GradeSymbol::F, 0.0);

    GradePointTable::new(points)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_values() {
        let table = build_default_table();
        assert_eq!(table.points(GradeSymbol::A), Some(4.0));
        assert_eq!(table.points(GradeSymbol::BMinus), Some(2.7));
        assert_eq!(table.points(GradeSymbol::DPlus), Some(1.3));
        assert_eq!(table.points(GradeSymbol::E), Some(0.0));
        assert_eq!(table.points(GradeSymbol::F), Some(0.0));
    }

    #[test]
    fn test_excluded_grades_have_no_points() {
        let table = build_default_table();
        assert_eq!(table.points(GradeSymbol::Withheld), None);
        assert_eq!(table.points(GradeSymbol::NotCompleted), None);
        assert_eq!(table.points(GradeSymbol::CompletedModule), None);
    }

    #[test]
    fn test_default_table_validates_clean() {
        assert!(build_default_table().validate().is_empty());
        assert!(get_default_table().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_missing_grade() {
        let mut points = HashMap::new();
        points.insert(GradeSymbol::A, 4.0);
        let table = GradePointTable::new(points);

        let errors = table.validate();
        assert!(errors.iter().any(|e| e.contains("missing from table")));
    }

    #[test]
    fn test_validate_flags_out_of_range_value() {
        let mut table = build_default_table_internal();
        table.points.insert(GradeSymbol::A, 5.0);

        let errors = table.validate();
        assert!(errors.iter().any(|e| e.contains("outside [0.0, 4.0]")));
    }

    #[test]
    fn test_validate_flags_excluded_grade_with_points() {
        let mut table = build_default_table_internal();
        table.points.insert(GradeSymbol::Withheld, 0.0);

        let errors = table.validate();
        assert!(errors.iter().any(|e| e.contains("must not carry points")));
    }
}
