//! A small, pure flow layout engine for tag clouds and other wrapping lists.
//!
//! Given the measured sizes of some items, a container width, and the spacing
//! between items, [`layout::layout`] works out where each item goes. The host
//! is responsible for measuring items beforehand and for drawing them at the
//! returned positions afterwards.

mod error;
pub use error::*;

mod geometry;
pub use geometry::*;

/// Flow layout of pre-measured items into wrapping rows
pub mod layout;

mod rect;
pub use rect::*;

mod units;
pub use units::*;
