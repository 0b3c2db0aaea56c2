pub mod sms_log_sender;
