pub mod create_profile;
pub mod delete_resume;
pub mod get_my_profile;
pub mod update_profile;
pub mod upload_resume;

pub use create_profile::create_profile_handler;
pub use delete_resume::delete_resume_handler;
pub use get_my_profile::get_my_profile_handler;
pub use update_profile::update_profile_handler;
pub use upload_resume::upload_resume_handler;
