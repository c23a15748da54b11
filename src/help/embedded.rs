//! Embedded help text
//!
//! Help text compiled into the binary at build time.

// Include generated help text from build script
include!(concat!(env!("OUT_DIR"), "/help.rs"));
