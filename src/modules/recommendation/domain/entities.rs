use serde::{Deserialize, Serialize};

/// Scoring input submitted by an anonymous caller. Kept in memory only,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub education: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub location: String,
    pub phone: String,
}

/// A static catalog entry. The catalog is fixed at compile time and
/// never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(rename = "skills_required")]
    pub skills_required: Vec<String>,
    #[serde(rename = "education_req")]
    pub education_required: String,
    pub location: String,
    #[serde(rename = "deadline_days")]
    pub deadline_days: i64,
    pub sector: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: Job,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_job_flattens_job_fields() {
        let scored = ScoredJob {
            job: Job {
                id: "2".to_string(),
                title: "Web Dev Intern".to_string(),
                skills_required: vec!["HTML".to_string()],
                education_required: "Undergraduate".to_string(),
                location: "Delhi".to_string(),
                deadline_days: 10,
                sector: "IT".to_string(),
            },
            score: 0.9,
        };

        let value = serde_json::to_value(&scored).unwrap();
        assert_eq!(value["title"], "Web Dev Intern");
        assert_eq!(value["skills_required"][0], "HTML");
        assert_eq!(value["education_req"], "Undergraduate");
        assert_eq!(value["deadline_days"], 10);
        assert_eq!(value["score"], 0.9);
    }
}
