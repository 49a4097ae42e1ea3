// src/pipeline/mod.rs

//! The dedup-and-delivery pipeline.

pub mod run;

pub use run::{Pipeline, RunReport};
