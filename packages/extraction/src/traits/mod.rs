//! Core trait abstractions for the extraction library.
//!
//! Applications implement these to swap the network layer out in tests.

pub mod fetcher;
