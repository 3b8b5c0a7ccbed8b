//! Results-file parsing.
//!
//! Converts raw `CODE,CREDITS,GRADE` lines into an ordered transcript.
//! The parse is fail-fast: the first malformed line aborts the whole file.

use crate::{CourseRecord, Error, GradeSymbol, Result, Transcript};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::path::Path;

/// Parse a results file into a transcript
///
/// File-read failures are reported with the offending path; the content
/// itself is handed to [`parse_results_str`].
pub fn parse_results_file(path: &Path) -> Result<Transcript> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_results_str(&content)
}

/// Parse results text into a transcript (useful for testing)
///
/// One record per line, comma-delimited, fields whitespace-trimmed, grade
/// tokens matched case-insensitively. Blank lines are skipped silently.
pub fn parse_results_str(content: &str) -> Result<Transcript> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Whitespace-only lines trim down to a single empty field
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() != 3 {
            return Err(malformed(
                content,
                line,
                format!("expected 3 fields, found {}", record.len()),
            ));
        }

        let code = record[0].to_string();
        if code.is_empty() {
            return Err(malformed(content, line, "course code is empty".into()));
        }

        let credits = match record[1].parse::<u32>() {
            Ok(credits) if credits > 0 => credits,
            _ => {
                return Err(malformed(
                    content,
                    line,
                    format!("credits must be a positive integer, got '{}'", &record[1]),
                ))
            }
        };

        let grade: GradeSymbol = record[2]
            .parse()
            .map_err(|reason| malformed(content, line, reason))?;

        records.push(CourseRecord {
            code,
            credits,
            grade,
        });
    }

    tracing::debug!("Parsed {} course records", records.len());
    Ok(Transcript::new(records))
}

/// Build a MalformedRecord error carrying the offending source line
fn malformed(content: &str, line: u64, reason: String) -> Error {
    let content = content
        .lines()
        .nth(line.saturating_sub(1) as usize)
        .unwrap_or_default()
        .to_string();

    Error::MalformedRecord {
        line,
        content,
        reason,
    }
}

/// Re-serialize a transcript in the results-file format
pub fn to_results_string(transcript: &Transcript) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    for record in &transcript.records {
        writer.write_record([
            record.code.as_str(),
            &record.credits.to_string(),
            record.grade.as_str(),
        ])?;
    }

    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    String::from_utf8(bytes).map_err(|e| Error::Other(format!("invalid UTF-8 in output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_records() {
        let transcript = parse_results_str("SCS1201,3,B-\nSCS1202,3,A\nSCS1203,3,F\n").unwrap();

        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.records[0].code, "SCS1201");
        assert_eq!(transcript.records[0].credits, 3);
        assert_eq!(transcript.records[0].grade, GradeSymbol::BMinus);
        assert_eq!(transcript.records[2].grade, GradeSymbol::F);
    }

    #[test]
    fn test_parse_trims_and_uppercases() {
        let transcript = parse_results_str("  scs1201 , 4 , b+  \n").unwrap();

        assert_eq!(transcript.records[0].code, "scs1201");
        assert_eq!(transcript.records[0].credits, 4);
        assert_eq!(transcript.records[0].grade, GradeSymbol::BPlus);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let transcript = parse_results_str("\nSCS1201,3,A\n\n   \nSCS1202,2,C\n\n").unwrap();
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_parse_empty_input() {
        let transcript = parse_results_str("").unwrap();
        assert!(transcript.is_empty());
    }

    #[test]
    fn test_unknown_grade_aborts_with_line() {
        let err = parse_results_str("SCS1201,3,A\nSCS1204,3,Z\n").unwrap_err();

        match err {
            Error::MalformedRecord {
                line,
                content,
                reason,
            } => {
                assert_eq!(line, 2);
                assert_eq!(content, "SCS1204,3,Z");
                assert!(reason.contains("unknown grade symbol"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_field_count_aborts() {
        let err = parse_results_str("SCS1201,3\n").unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 1, .. }));

        let err = parse_results_str("SCS1201,3,A,extra\n").unwrap_err();
        match err {
            Error::MalformedRecord { reason, .. } => {
                assert!(reason.contains("expected 3 fields, found 4"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_credits_abort() {
        for bad in ["SCS1201,zero,A\n", "SCS1201,0,A\n", "SCS1201,-3,A\n", "SCS1201,2.5,A\n"] {
            let err = parse_results_str(bad).unwrap_err();
            match err {
                Error::MalformedRecord { reason, .. } => {
                    assert!(reason.contains("positive integer"), "input: {}", bad);
                }
                other => panic!("Expected MalformedRecord, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_empty_code_aborts() {
        let err = parse_results_str(",3,A\n").unwrap_err();
        match err {
            Error::MalformedRecord { reason, .. } => {
                assert!(reason.contains("course code is empty"));
            }
            other => panic!("Expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_roundtrip_preserves_records() {
        let input = "SCS1201,3,B-\n\nSCS1202,3,A\nSCS1203,1,WH\n";
        let transcript = parse_results_str(input).unwrap();

        let serialized = to_results_string(&transcript).unwrap();
        let reparsed = parse_results_str(&serialized).unwrap();

        assert_eq!(transcript, reparsed);
        assert_eq!(serialized, "SCS1201,3,B-\nSCS1202,3,A\nSCS1203,1,WH\n");
    }

    #[test]
    fn test_parse_results_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("results.txt");
        std::fs::write(&path, "SCS1201,3,A\n").unwrap();

        let transcript = parse_results_file(&path).unwrap();
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        let err = parse_results_file(&path).unwrap_err();
        assert!(matches!(err, Error::Unreadable { .. }));
        assert!(err.to_string().contains("nonexistent.txt"));
    }
}
