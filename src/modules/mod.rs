pub mod auth;
pub mod notifier;
pub mod profile;
pub mod recommendation;
