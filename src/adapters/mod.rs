//! Adapters implementing domain ports.
//!
//! Infrastructure implementations of the traits defined in [`crate::ports`].

pub mod in_memory_source;
pub mod text_file_source;

pub use in_memory_source::InMemorySource;
pub use text_file_source::TextFileSource;
