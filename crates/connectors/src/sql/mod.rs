pub mod destination;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod postgres;
