#![forbid(unsafe_code)]

//! Attribute model generated at build time from `resources/fixtures/attrs.html`.
//!
//! The crate exists so the emitted code is compiled and its runtime contracts
//! can be exercised by ordinary tests.

include!(concat!(env!("OUT_DIR"), "/attributes.rs"));
