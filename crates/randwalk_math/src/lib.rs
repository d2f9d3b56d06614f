//! 2D Mathematics Library
//!
//! This crate provides the small set of 2D types the random-walk simulation
//! and its renderer share.
//!
//! ## Core Types
//!
//! - [`Vec2`] - 2D vector in screen coordinates (x = left, y = top)
//! - [`Rect`] - Axis-aligned client rectangle of a container

mod vec2;
mod rect;

pub use vec2::Vec2;
pub use rect::Rect;
