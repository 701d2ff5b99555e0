//! Environment sources
//!
//! - `SystemEnv`: the live process environment
//! - `MapEnv`: an in-memory map for tests and embedding

mod memory;
mod system;

pub use memory::MapEnv;
pub use system::SystemEnv;
