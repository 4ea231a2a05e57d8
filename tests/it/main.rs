//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - integration: Multi-tick scenarios through `HoverApp`
//! - unit: Single-component tests against the public API

mod helpers;
mod integration;
mod unit;
