//! Client-side presentation state.

pub mod stage;
