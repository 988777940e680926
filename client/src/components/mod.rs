//! Overlay UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every view in the view table is rendered once, up front. Visibility is
//! driven by inline styles derived from the shared `Stage`, so navigation is a
//! style change rather than a re-render. Interactions go through the `Host`
//! from Leptos context.

pub mod carousel;
pub mod detail_panel;
pub mod load_status;
pub mod overlay;
pub mod selection_panel;
