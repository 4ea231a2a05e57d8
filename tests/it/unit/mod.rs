//! Unit tests for hoverboard.

mod perf_tests;
mod region_tests;
mod settings_tests;
