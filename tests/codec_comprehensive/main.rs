//! Codec Comprehensive Test Suite
//!
//! Exercises the JSON document codec and the daemon payload codec through the
//! `iotcon` facade.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test codec_comprehensive
//! cargo test --test codec_comprehensive round_trip::
//! ```

pub use iotcon::prelude::*;

// Test modules
mod ipc_payloads;
mod json_documents;
mod round_trip;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

/// The `/a/light` resource used across suites
pub fn light() -> Representation {
    let repr = Representation::new();
    repr.set_uri("/a/light").unwrap();
    repr.set_bool("power", true).unwrap();
    repr.set_int("level", 5).unwrap();
    repr.append_resource_type("core.light").unwrap();
    repr.append_interface("oc.mi.def").unwrap();
    repr
}

/// A parent with `count` direct children at `/a/child<i>`
pub fn parent_with_children(count: i64) -> Representation {
    let parent = Representation::new();
    parent.set_uri("/a/parent").unwrap();
    parent.set_str("string", "Hello").unwrap();
    for i in 0..count {
        let child = Representation::new();
        child.set_uri(format!("/a/child{}", i)).unwrap();
        child.set_int("index", i).unwrap();
        parent.append_child(&child).unwrap();
    }
    parent
}

/// Install a test subscriber so codec logs show up with `--nocapture`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}
