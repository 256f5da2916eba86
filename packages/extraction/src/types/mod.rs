//! Data types for the extraction library.

pub mod media;
pub mod page;
