pub mod deadline_notifier;
pub mod outgoing;
pub mod ports;
