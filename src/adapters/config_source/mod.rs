//! Configuration source adapters.

pub mod env;
pub mod memory;

pub use env::EnvConfigSource;
pub use memory::InMemoryConfigSource;
