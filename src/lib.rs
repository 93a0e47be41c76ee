pub mod types;
pub mod geometry;
pub mod bcs;
pub mod loads;
pub mod ics;
pub mod results;

pub use types::*;
