pub mod candidate_pool;
pub mod catalog;
pub mod entities;
pub mod scoring;
