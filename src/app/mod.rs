//! Application orchestration — state management, input events, and handling.

pub mod event;
pub mod handler;
pub mod state;
