//! Core logic — datasets, scenario selection, animation, and the decorative
//! scene geometry.
//!
//! Nothing in this module depends on any TUI or rendering crate, and every
//! tick is a pure function of elapsed time — the whole layer is testable
//! without a terminal or a real display clock.

pub mod animator;
pub mod constellation;
pub mod dataset;
pub mod growth;
pub mod particles;
pub mod selector;
pub mod valuation;
