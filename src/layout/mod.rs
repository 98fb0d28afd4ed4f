//! Flow layout: positioning pre-measured items into wrapping rows.
//!
//! Items are packed left to right in input order. When the next item would
//! overflow the container width, a new row starts below the tallest item of
//! the current one. Nothing here measures or draws anything; callers hand in
//! [`Size`](crate::Size)s and get back [`Position`](crate::Position)s.
//!
//! # Layout Functions
//!
//! - [`layout`](crate::layout::layout) - one-shot layout with explicit spacing values
//! - [`FlowLayout::layout`](crate::layout::FlowLayout::layout) - reusable layout configured with a [`Spacing`](crate::layout::Spacing)
//!
//! # Example
//!
//! ```
//! use tag_flow::{Pt, Size, Position};
//! use tag_flow::layout::{FlowLayout, Spacing};
//!
//! let tags = vec![Size::new(40.0, 20.0), Size::new(40.0, 20.0), Size::new(40.0, 20.0)];
//! let flow = FlowLayout::new(Spacing::new(Pt(10.0), Pt(5.0)));
//!
//! let result = flow.layout(&tags, Pt(100.0)).expect("valid input");
//! assert_eq!(result.positions()[1], Position::new(50.0, 0.0));
//! assert_eq!(result.positions()[2], Position::new(0.0, 25.0));
//! assert_eq!(result.total_height(), Pt(45.0));
//! ```

mod flow;
mod result;
mod spacing;

pub use flow::*;
pub use result::*;
pub use spacing::*;
