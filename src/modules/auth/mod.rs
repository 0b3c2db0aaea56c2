pub mod domain;
pub mod outgoing;
pub mod ports;
pub mod use_cases;
pub mod web;
