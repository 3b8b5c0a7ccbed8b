//! Core domain types for transcript analysis.
//!
//! This module defines the fundamental types used throughout the system:
//! - Letter grades and their token forms
//! - Course records and transcripts
//! - Retake classification and the analysis report

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Grade Types
// ============================================================================

/// A letter grade from the closed grading vocabulary
///
/// WH (withheld), NC (not completed) and CM (completed module) carry no
/// grade points and are excluded from GPA arithmetic entirely.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GradeSymbol {
    #[serde(rename = "A")]
    A,
    #[serde(rename = "A-")]
    AMinus,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "B-")]
    BMinus,
    #[serde(rename = "C+")]
    CPlus,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "C-")]
    CMinus,
    #[serde(rename = "D+")]
    DPlus,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "F")]
    F,
    #[serde(rename = "WH")]
    Withheld,
    #[serde(rename = "NC")]
    NotCompleted,
    #[serde(rename = "CM")]
    CompletedModule,
}

impl GradeSymbol {
    /// Every symbol in the vocabulary, in descending grade order
    pub const ALL: [GradeSymbol; 15] = [
        GradeSymbol::A,
        GradeSymbol::AMinus,
        GradeSymbol::BPlus,
        GradeSymbol::B,
        GradeSymbol::BMinus,
        GradeSymbol::CPlus,
        GradeSymbol::C,
        GradeSymbol::CMinus,
        GradeSymbol::DPlus,
        GradeSymbol::D,
        GradeSymbol::E,
        GradeSymbol::F,
        GradeSymbol::Withheld,
        GradeSymbol::NotCompleted,
        GradeSymbol::CompletedModule,
    ];

    /// Canonical token as it appears in results files
    pub fn as_str(&self) -> &'static str {
        match self {
            GradeSymbol::A => "A",
            GradeSymbol::AMinus => "A-",
            GradeSymbol::BPlus => "B+",
            GradeSymbol::B => "B",
            GradeSymbol::BMinus => "B-",
            GradeSymbol::CPlus => "C+",
            GradeSymbol::C => "C",
            GradeSymbol::CMinus => "C-",
            GradeSymbol::DPlus => "D+",
            GradeSymbol::D => "D",
            GradeSymbol::E => "E",
            GradeSymbol::F => "F",
            GradeSymbol::Withheld => "WH",
            GradeSymbol::NotCompleted => "NC",
            GradeSymbol::CompletedModule => "CM",
        }
    }

    /// Whether this grade contributes credits and points to GPA arithmetic
    pub fn is_scoring_eligible(&self) -> bool {
        !matches!(
            self,
            GradeSymbol::Withheld | GradeSymbol::NotCompleted | GradeSymbol::CompletedModule
        )
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeSymbol {
    type Err = String;

    /// Case-insensitive, whitespace-trimmed token match
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let token = s.trim().to_uppercase();
        GradeSymbol::ALL
            .into_iter()
            .find(|g| g.as_str() == token)
            .ok_or_else(|| format!("unknown grade symbol '{}'", s.trim()))
    }
}

// ============================================================================
// Course and Transcript Types
// ============================================================================

/// A single course result as it appears in the input file
///
/// Immutable once parsed. Course codes are not required to be unique.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseRecord {
    pub code: String,
    pub credits: u32,
    pub grade: GradeSymbol,
}

/// An ordered sequence of course records, as given in the input file
///
/// Order is preserved for reporting; GPA arithmetic does not depend on it.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Transcript {
    pub records: Vec<CourseRecord>,
}

impl Transcript {
    pub fn new(records: Vec<CourseRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Analysis Types
// ============================================================================

/// Classification of a course record for retake planning
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RetakeStatus {
    /// Failing or withheld result requiring mandatory repetition
    MustRetake,
    /// Passing but low result whose repetition could improve GPA
    Recommended,
    /// Nothing to do, including the excluded NC/CM results
    Fine,
}

/// A recommended-retake course with its single-course projection
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub record: CourseRecord,
    /// GPA if only this course were retaken at the assumed retake grade
    pub projected_gpa: f64,
}

/// Complete analysis of a transcript
///
/// GPA values are unrounded; rounding to two decimal places is a display
/// concern.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GpaReport {
    pub current_gpa: f64,
    /// Courses with failing or withheld results, highest credits first
    pub must_retake: Vec<CourseRecord>,
    /// D-range courses worth retaking, highest credits first
    pub recommended: Vec<Recommendation>,
    pub projected_after_mandatory: f64,
    pub projected_after_all: f64,
}
