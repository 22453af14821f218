//! Configuration models for queue construction.

pub mod options;

pub use options::{QueueOptions, CAPACITY_ENV};
