//! The typed reader and its process-wide counterpart.

pub mod env_reader;
pub mod global;

pub use env_reader::EnvReader;
