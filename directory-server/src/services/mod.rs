//! Service layer
//!
//! - [`DirectoryService`] - employee operations behind the HTTP routes

pub mod directory;
pub mod samples;

pub use directory::DirectoryService;
