//! Business logic services

pub mod forecast;
pub mod orchestrator;
pub mod rank;
pub mod warm;
