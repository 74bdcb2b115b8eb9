//! Command implementations for graphwalk

pub mod dispatch;
pub mod inspect;
pub mod solve;
