//! Shared domain logic for CragCast
//!
//! This crate contains the pure, I/O-free core of the forecast ranking
//! engine: coordinate geodesy, date-window resolution, the daily condition
//! classifier and the suitability scorer, plus the models they operate on.

pub mod conditions;
pub mod dates;
pub mod geo;
pub mod models;
pub mod scoring;
pub mod types;

pub use conditions::*;
pub use dates::*;
pub use geo::*;
pub use models::*;
pub use scoring::*;
pub use types::*;
