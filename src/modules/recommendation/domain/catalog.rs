use super::entities::Job;

/// The fixed job catalog. Replaces a real listings store until one exists.
pub fn job_catalog() -> Vec<Job> {
    vec![
        Job {
            id: "1".to_string(),
            title: "Data Entry Intern".to_string(),
            skills_required: vec!["Excel".to_string(), "Typing".to_string()],
            education_required: "Undergraduate".to_string(),
            location: "Lucknow".to_string(),
            deadline_days: 5,
            sector: "Administration".to_string(),
        },
        Job {
            id: "2".to_string(),
            title: "Web Dev Intern".to_string(),
            skills_required: vec!["HTML".to_string(), "CSS".to_string(), "Go".to_string()],
            education_required: "Undergraduate".to_string(),
            location: "Delhi".to_string(),
            deadline_days: 10,
            sector: "IT".to_string(),
        },
        Job {
            id: "3".to_string(),
            title: "AI Research Intern".to_string(),
            skills_required: vec!["Python".to_string(), "ML".to_string()],
            education_required: "Postgraduate".to_string(),
            location: "Remote".to_string(),
            deadline_days: 3,
            sector: "Research".to_string(),
        },
        Job {
            id: "4".to_string(),
            title: "Govt Clerk Job".to_string(),
            skills_required: vec!["Typing".to_string(), "MS Office".to_string()],
            education_required: "Undergraduate".to_string(),
            location: "Lucknow".to_string(),
            deadline_days: 7,
            sector: "Administration".to_string(),
        },
    ]
}
