#![forbid(unsafe_code)]

//! Core parsing and scoring logic for the GPA analyzer.
//!
//! This crate provides:
//! - Domain types (grades, course records, transcripts, reports)
//! - The grade-point table
//! - Results-file parsing
//! - The scoring and retake-projection engine
//! - Configuration and logging support

pub mod types;
pub mod error;
pub mod grades;
pub mod config;
pub mod logging;
pub mod parser;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use grades::{build_default_table, get_default_table, GradePointTable};
pub use config::Config;
pub use parser::{parse_results_file, parse_results_str, to_results_string};
pub use engine::{analyze, classify};
pub use report::AnalysisReport;
