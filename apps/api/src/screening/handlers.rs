use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::screening::matcher::{evaluate, Evaluation, Verdict};
use crate::screening::tokenizer::tokenize;
use crate::state::AppState;

const JOB_DESCRIPTION_PART: &str = "job_description";
const RESUME_PART: &str = "resume";
const UPLOAD_PROMPT: &str = "Please upload both the job description and candidate resume.";

/// Response body for one evaluation.
///
/// `missing_skills` and `improvement_skills` are the same set serialized
/// under both names, matching the original output contract.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub matching_percentage: f64,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub improvement_skills: Vec<String>,
    /// Comma-joined improvement list, or "None" when nothing is missing.
    pub improvement_summary: String,
    pub verdict: Verdict,
    pub message: String,
}

/// POST /api/v1/evaluations
///
/// Multipart form with two required PDF parts: `job_description` and `resume`.
/// Stateless; each request is a pure function of the two uploaded files.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationResponse>, AppError> {
    let mut job_description: Option<Bytes> = None;
    let mut resume: Option<Bytes> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_PART | RESUME_PART => {
                if let Some(content_type) = field.content_type() {
                    if content_type != "application/pdf" {
                        return Err(AppError::Validation(format!(
                            "Part '{name}' must be a PDF (got '{content_type}')"
                        )));
                    }
                }
                let bytes = field.bytes().await?;
                if name == JOB_DESCRIPTION_PART {
                    job_description = Some(bytes);
                } else {
                    resume = Some(bytes);
                }
            }
            // Unknown parts are ignored, same as extra form state in the original UI.
            _ => {}
        }
    }

    let (Some(job_description), Some(resume)) = (job_description, resume) else {
        return Err(AppError::Validation(UPLOAD_PROMPT.to_string()));
    };
    if job_description.is_empty() || resume.is_empty() {
        return Err(AppError::Validation(UPLOAD_PROMPT.to_string()));
    }

    let job_text = state.extractor.extract(&job_description)?;
    let resume_text = state.extractor.extract(&resume)?;

    let job_tokens = tokenize(&job_text);
    let candidate_tokens = tokenize(&resume_text);

    let evaluation = evaluate(&job_tokens, &candidate_tokens);
    info!(
        matching_percentage = evaluation.matching_percentage,
        job_tokens = job_tokens.len(),
        candidate_tokens = candidate_tokens.len(),
        "evaluation complete"
    );

    Ok(Json(build_response(evaluation)))
}

fn build_response(evaluation: Evaluation) -> EvaluationResponse {
    let verdict = Verdict::from_percentage(evaluation.matching_percentage);
    let matching_skills: Vec<String> = evaluation.matching.into_iter().collect();
    let missing_skills: Vec<String> = evaluation.missing.into_iter().collect();

    EvaluationResponse {
        matching_percentage: evaluation.matching_percentage,
        matching_skills,
        improvement_summary: format_skill_list(&missing_skills),
        improvement_skills: missing_skills.clone(),
        missing_skills,
        verdict,
        message: verdict.banner().to_string(),
    }
}

/// Comma-joined skill list, or the literal "None" for an empty list.
fn format_skill_list(skills: &[String]) -> String {
    if skills.is_empty() {
        "None".to_string()
    } else {
        skills.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_build_response_strong_match() {
        let response = build_response(Evaluation {
            matching: set(&["docker", "python", "sql"]),
            missing: set(&[]),
            matching_percentage: 100.0,
        });

        assert_eq!(response.verdict, Verdict::StrongMatch);
        assert_eq!(
            response.message,
            "Resume is a strong match for the job description!"
        );
        assert_eq!(response.improvement_summary, "None");
        assert!(response.missing_skills.is_empty());
    }

    #[test]
    fn test_build_response_partial_match_lists_improvements() {
        let response = build_response(Evaluation {
            matching: set(&["docker", "python"]),
            missing: set(&["sql"]),
            matching_percentage: 66.67,
        });

        assert_eq!(response.verdict, Verdict::PartialMatch);
        assert_eq!(response.improvement_summary, "sql");
        assert_eq!(response.improvement_skills, vec!["sql".to_string()]);
        assert_eq!(response.missing_skills, response.improvement_skills);
    }

    #[test]
    fn test_build_response_poor_match_on_empty_job_set() {
        let response = build_response(Evaluation {
            matching: set(&[]),
            missing: set(&[]),
            matching_percentage: 0.0,
        });

        assert_eq!(response.verdict, Verdict::PoorMatch);
        assert_eq!(response.matching_percentage, 0.0);
        assert_eq!(response.improvement_summary, "None");
    }

    #[test]
    fn test_improvement_summary_joins_sorted_skills_with_commas() {
        let response = build_response(Evaluation {
            matching: set(&[]),
            missing: set(&["sql", "docker", "kubernetes"]),
            matching_percentage: 0.0,
        });

        // BTreeSet ordering makes the list deterministic
        assert_eq!(response.improvement_summary, "docker, kubernetes, sql");
    }
}
