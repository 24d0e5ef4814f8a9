use jobfinder_backend::entities::{
    job_listing::{JobHighlights, JobListing},
    resume::{BasicInfo, ResumeData},
};

pub fn sample_job(id: &str) -> JobListing {
    JobListing {
        job_id: id.to_string(),
        employer_name: "Ferris Labs".into(),
        employer_logo: None,
        job_title: format!("Rust Engineer {}", id),
        job_employment_type_text: "Full-time".into(),
        job_apply_link: format!("https://jobs.test/{}/apply", id),
        job_description: "<p>Build fast services</p>".into(),
        job_is_remote: true,
        job_posted_human_readable: "2 days ago".into(),
        job_location: "Berlin, Germany".into(),
        job_city: "Berlin".into(),
        job_state: "BE".into(),
        job_highlights: JobHighlights {
            qualifications: Some(vec!["3+ years of Rust".into()]),
            responsibilities: None,
            benefits: None,
        },
        job_salary: None,
        job_min_salary: Some(70000.0),
        job_max_salary: Some(95000.0),
    }
}

pub fn sample_resume() -> ResumeData {
    ResumeData {
        basic_info: BasicInfo {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "+49 30 1234".into(),
            location: "Berlin".into(),
        },
        professional_summary: "Backend engineer".into(),
        skills: vec!["Rust".into(), "PostgreSQL".into()],
        years_of_experience: 4.0,
        recommended_job_roles: vec!["Backend Engineer".into(), "Rust Developer".into()],
        ..Default::default()
    }
}
