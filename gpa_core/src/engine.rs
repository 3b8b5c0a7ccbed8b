//! Transcript scoring engine.
//!
//! Computes the current GPA, classifies every course for retake planning,
//! and projects GPA under retake scenarios. Everything here is a pure
//! function over explicit inputs; the grade table is configuration, not
//! hidden state.

use crate::{
    CourseRecord, Error, GpaReport, GradePointTable, GradeSymbol, Recommendation, Result,
    RetakeStatus, Transcript,
};
use std::cmp::Ordering;

/// Classify a grade for retake planning
///
/// F, E and WH require mandatory repetition; D and D+ are passing but low
/// enough that repetition can improve GPA; everything else, including the
/// excluded NC and CM results, is fine.
pub fn classify(grade: GradeSymbol) -> RetakeStatus {
    match grade {
        GradeSymbol::F | GradeSymbol::E | GradeSymbol::Withheld => RetakeStatus::MustRetake,
        GradeSymbol::D | GradeSymbol::DPlus => RetakeStatus::Recommended,
        _ => RetakeStatus::Fine,
    }
}

/// Analyze a transcript against a grade-point table
///
/// `retake_grade` is the grade assumed for every retaken course (default A
/// in the shipped configuration). It must be scoring-eligible: substituting
/// it makes a formerly-withheld record count toward the GPA.
///
/// Fails with [`Error::Unscorable`] when no record contributes credits,
/// rather than reporting a misleading 0.0.
pub fn analyze(
    transcript: &Transcript,
    table: &GradePointTable,
    retake_grade: GradeSymbol,
) -> Result<GpaReport> {
    let retake_points = table.points(retake_grade).ok_or_else(|| {
        Error::Config(format!(
            "retake grade {} is not scoring-eligible",
            retake_grade
        ))
    })?;

    let current_gpa = weighted_gpa(
        transcript
            .records
            .iter()
            .map(|r| (r.credits, table.points(r.grade))),
    )
    .ok_or(Error::Unscorable)?;

    let projected_after_mandatory = weighted_gpa(transcript.records.iter().map(|r| {
        match classify(r.grade) {
            RetakeStatus::MustRetake => (r.credits, Some(retake_points)),
            _ => (r.credits, table.points(r.grade)),
        }
    }))
    .ok_or(Error::Unscorable)?;

    let projected_after_all = weighted_gpa(transcript.records.iter().map(|r| {
        match classify(r.grade) {
            RetakeStatus::MustRetake | RetakeStatus::Recommended => {
                (r.credits, Some(retake_points))
            }
            RetakeStatus::Fine => (r.credits, table.points(r.grade)),
        }
    }))
    .ok_or(Error::Unscorable)?;

    let mut must_retake: Vec<CourseRecord> = transcript
        .records
        .iter()
        .filter(|r| classify(r.grade) == RetakeStatus::MustRetake)
        .cloned()
        .collect();
    must_retake.sort_by(|a, b| retake_order(a, b, table));

    // Recommended courses are substituted by position, not course code:
    // codes are not required to be unique.
    let mut recommended_idx: Vec<usize> = transcript
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| classify(r.grade) == RetakeStatus::Recommended)
        .map(|(i, _)| i)
        .collect();
    recommended_idx.sort_by(|&a, &b| {
        retake_order(&transcript.records[a], &transcript.records[b], table)
    });

    let recommended = recommended_idx
        .into_iter()
        .map(|i| {
            let projected = weighted_gpa(transcript.records.iter().enumerate().map(|(j, r)| {
                if i == j {
                    (r.credits, Some(retake_points))
                } else {
                    (r.credits, table.points(r.grade))
                }
            }))
            // The substituted course itself contributes credits
            .unwrap_or(current_gpa);

            Recommendation {
                record: transcript.records[i].clone(),
                projected_gpa: projected,
            }
        })
        .collect();

    tracing::debug!(
        "Analyzed {} courses: {} mandatory retakes",
        transcript.len(),
        must_retake.len()
    );

    Ok(GpaReport {
        current_gpa,
        must_retake,
        recommended,
        projected_after_mandatory,
        projected_after_all,
    })
}

/// Credit-weighted mean of grade points; None when no record contributes
fn weighted_gpa(records: impl Iterator<Item = (u32, Option<f64>)>) -> Option<f64> {
    let mut total_points = 0.0;
    let mut total_credits = 0u32;

    for (credits, points) in records {
        if let Some(points) = points {
            total_points += points * f64::from(credits);
            total_credits += credits;
        }
    }

    if total_credits == 0 {
        None
    } else {
        Some(total_points / f64::from(total_credits))
    }
}

/// Retake-list ordering: highest credits first, then worst grade first
fn retake_order(a: &CourseRecord, b: &CourseRecord, table: &GradePointTable) -> Ordering {
    let points_a = table.points(a.grade).unwrap_or(0.0);
    let points_b = table.points(b.grade).unwrap_or(0.0);

    b.credits
        .cmp(&a.credits)
        .then(points_a.partial_cmp(&points_b).unwrap_or(Ordering::Equal))
}
