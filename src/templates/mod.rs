pub mod base;
pub mod error;
pub mod home;
