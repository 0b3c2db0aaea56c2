pub mod recommend_jobs;
