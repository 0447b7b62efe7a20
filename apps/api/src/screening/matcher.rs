//! Matcher — pure set-overlap scoring of a candidate token set against a
//! job-description token set. No weighting, no synonyms, no partial credit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Qualitative verdict derived from the matching percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    StrongMatch,
    PartialMatch,
    PoorMatch,
}

impl Verdict {
    /// Thresholds: >70 strong, >40 and <=70 partial, <=40 poor.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage > 70.0 {
            Verdict::StrongMatch
        } else if percentage > 40.0 {
            Verdict::PartialMatch
        } else {
            Verdict::PoorMatch
        }
    }

    /// Banner message rendered to the caller for each verdict.
    pub fn banner(&self) -> &'static str {
        match self {
            Verdict::StrongMatch => "Resume is a strong match for the job description!",
            Verdict::PartialMatch => "Resume is a partial match for the job description.",
            Verdict::PoorMatch => "Resume does not match well with the job description.",
        }
    }
}

/// Result of evaluating one candidate token set against one job token set.
/// `missing` doubles as the improvement list: `job − (job ∩ candidate)` is
/// algebraically identical to `job − candidate`, so it is computed once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub matching: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    /// 0–100, rounded to two decimal places. 0 when the job set is empty.
    pub matching_percentage: f64,
}

/// Evaluates overlap between job-description tokens and candidate tokens.
pub fn evaluate(job: &BTreeSet<String>, candidate: &BTreeSet<String>) -> Evaluation {
    let matching: BTreeSet<String> = job.intersection(candidate).cloned().collect();
    let missing: BTreeSet<String> = job.difference(candidate).cloned().collect();

    let matching_percentage = if job.is_empty() {
        0.0
    } else {
        round2(matching.len() as f64 / job.len() as f64 * 100.0)
    };

    Evaluation {
        matching,
        missing,
        matching_percentage,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
