// Adapters layer: concrete implementations of the domain ports.

pub mod console;
pub mod memory;
pub mod mock_backend;
