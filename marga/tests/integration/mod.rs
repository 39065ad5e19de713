//! Integration tests for marga
//!
//! Run whole levels through the pipeline and check graph properties,
//! determinism and the written documents.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test integration -- --nocapture
//! ```

mod common;
mod determinism;
mod outputs;
mod scenarios;
