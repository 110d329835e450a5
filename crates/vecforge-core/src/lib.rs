//! # VecForge Core
//!
//! Core value types and errors shared by the VecForge geometry kernel.
//! Provides the immutable primitives every higher layer builds on:
//! points, rectangles, colors, and the kernel's error types.

pub mod color;
pub mod constants;
pub mod error;
pub mod point;
pub mod rect;

pub use color::Color;
pub use error::{ColorError, Error, GeometryError, Result};
pub use point::Point;
pub use rect::Rect;
