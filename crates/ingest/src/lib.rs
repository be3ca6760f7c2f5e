pub mod error;
pub mod params;
pub mod runner;
pub mod transform;
