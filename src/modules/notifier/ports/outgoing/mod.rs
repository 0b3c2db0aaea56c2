pub mod reminder_sender;

pub use reminder_sender::ReminderSender;
