pub mod recommend;

pub use recommend::recommend_handler;
