//! Networking: the one-shot content document fetch.

pub mod api;
