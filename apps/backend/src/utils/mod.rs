//! Shared utilities.

pub mod room_code;
