//! Status Module
//!
//! Liveness records posted by clients, plus the API root greeting.

pub mod db;
pub mod handlers;

pub use db::{StatusCheck, StatusCheckCreate};
pub use handlers::*;
