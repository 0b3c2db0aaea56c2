pub mod login;
pub mod logout;
pub mod register;

pub use login::login_handler;
pub use logout::logout_handler;
pub use register::register_handler;
