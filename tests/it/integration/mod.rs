//! Integration tests - whole ticks through `HoverApp`.

mod transition_tests;
