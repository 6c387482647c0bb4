//! Rendering of the live duplicate-candidate list.
//!
//! The controller owns the visible rows and the notifier; this crate only
//! turns a [`ViewSnapshot`] into terminal widgets or plain text. Rendering is
//! idempotent: the same snapshot always produces the same output.

mod labels;
mod render;
mod rows;
mod style;

pub use labels::ViewLabels;
pub use render::ResultView;
pub use rows::{Notifier, ResultRow, ViewSnapshot};
pub use style::ViewStyle;

#[cfg(test)]
mod snapshot_tests;
