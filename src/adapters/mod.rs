// Adapters layer: concrete implementations of the domain ports.

pub mod college_client;
pub mod document;
pub mod file_store;
pub mod memory_store;
