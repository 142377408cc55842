//! Domain models for the forecast ranking engine

pub mod forecast;
pub mod region;

pub use forecast::*;
pub use region::*;
