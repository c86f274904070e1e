pub mod application;
pub mod error;
pub mod interfaces;
pub mod media;
pub mod money;
pub mod payment;
pub mod pizza;
