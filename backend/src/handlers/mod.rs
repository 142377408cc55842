//! HTTP request handlers

pub mod health;
pub mod rank;
pub mod regions;
pub mod warm;

pub use health::health_check;
