use super::entities::{Candidate, Job};

const SKILL_WEIGHT: f64 = 0.45;
const EDUCATION_WEIGHT: f64 = 0.20;
const LOCATION_WEIGHT: f64 = 0.15;
const SECTOR_WEIGHT: f64 = 0.10;
const URGENCY_WEIGHT: f64 = 0.10;

const URGENCY_THRESHOLD_DAYS: i64 = 7;

/// Jaccard-style overlap of candidate skills against the job's required
/// skills, case-insensitive. Every pairwise match counts, so a skill
/// listed twice by the candidate counts twice.
fn skill_match(candidate_skills: &[String], job_skills: &[String]) -> f64 {
    let mut match_count = 0usize;
    for cs in candidate_skills {
        for js in job_skills {
            if cs.eq_ignore_ascii_case(js) {
                match_count += 1;
            }
        }
    }

    let denominator = candidate_skills.len() + job_skills.len() - match_count;
    if denominator == 0 {
        return 0.0;
    }
    match_count as f64 / denominator as f64
}

/// Rule-based match score in [0, 1]. Pure function.
pub fn score(candidate: &Candidate, job: &Job) -> f64 {
    let skill_score = skill_match(&candidate.skills, &job.skills_required) * SKILL_WEIGHT;

    let education_score = if candidate
        .education
        .eq_ignore_ascii_case(&job.education_required)
    {
        EDUCATION_WEIGHT
    } else {
        0.0
    };

    let location_score = if candidate.location.eq_ignore_ascii_case(&job.location) {
        LOCATION_WEIGHT
    } else {
        0.0
    };

    let sector_score = if candidate
        .interests
        .iter()
        .any(|interest| interest.eq_ignore_ascii_case(&job.sector))
    {
        SECTOR_WEIGHT
    } else {
        0.0
    };

    let urgency_score = if job.deadline_days <= URGENCY_THRESHOLD_DAYS {
        URGENCY_WEIGHT
    } else {
        0.0
    };

    skill_score + education_score + location_score + sector_score + urgency_score
}
