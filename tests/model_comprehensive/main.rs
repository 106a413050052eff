//! Model Comprehensive Test Suite
//!
//! Ownership and list invariants of the value model as seen by applications.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test model_comprehensive
//! ```

pub use iotcon::prelude::*;

// Test modules
mod lists;
mod ownership;
