//! UI / rendering layer — everything that touches Ratatui widgets.
//!
//! This layer samples the *core* state (animator values, scene poses) and
//! turns it into terminal cells.  No animation logic happens here.

pub mod bars;
pub mod gauges;
pub mod help;
pub mod kpi;
pub mod layout;
pub mod scene;
pub mod tabs;
pub mod theme;
pub mod valuation;
