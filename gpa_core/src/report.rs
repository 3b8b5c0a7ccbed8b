//! Serializable analysis report for machine-readable output.

use crate::{GpaReport, Transcript};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A complete analysis report as emitted by `gpa --json`
///
/// GPA values are serialized unrounded; two-decimal rounding applies only
/// to the text rendering.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// When the analysis ran
    pub generated_at: DateTime<Utc>,
    /// Results file the transcript was read from
    pub source: String,
    /// Number of course records parsed, excluded grades included
    pub course_count: usize,
    /// The GPA analysis itself
    pub analysis: GpaReport,
}

impl AnalysisReport {
    pub fn new(source: impl Into<String>, transcript: &Transcript, analysis: GpaReport) -> Self {
        Self {
            generated_at: Utc::now(),
            source: source.into(),
            course_count: transcript.len(),
            analysis,
        }
    }
}
