// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! 2D shapes and paths, with intersection tests based on crossing numbers.
//!
//! The geom2d library provides rectangles, circles, ellipses, rounded
//! rectangles, segments and paths made of lines and Bézier curves. Every
//! shape implements [`Shape`]: it can be walked as a sequence of
//! [`PathElement`]s, and answers containment, closest point, farthest point
//! and distance queries. Every pair of shapes can be tested for intersection
//! through [`Intersects`].
//!
//! Intersection and containment tests involving paths are computed by
//! counting the crossings of the path with the "right shadow" of the other
//! shape, as described in the [`crossings`] module.
//!
//! # Examples
//!
//! ```
//! use geom2d::{Circle, Intersects, Path, Point, Rect, Shape};
//!
//! let circle = Circle::new((5.0, 8.0), 5.0);
//! assert_eq!(circle.bounding_box(), Rect::new(0.0, 3.0, 10.0, 13.0));
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0))?;
//! path.line_to((10.0, 10.0))?;
//! path.close_path();
//! assert!(path.contains(Point::new(8.0, 2.0)));
//! assert!(path.intersects(&circle));
//! assert!(!path.intersects(&Rect::new(20.0, 20.0, 30.0, 30.0)));
//! # Ok::<(), geom2d::PathError>(())
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. This crate uses the `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::bool_to_int_with_if
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("geom2d requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod circle;
pub mod common;
pub mod crossings;
mod ellipse;
mod error;
mod flatten;
mod path;
mod path_element;
mod point;
mod real;
mod rect;
mod rounded_rect;
mod segment;
mod shadow;
mod shape;
mod vec2;

pub use crate::affine::*;
pub use crate::circle::*;
pub use crate::common::{clamp, SPLINE_APPROXIMATION_RATIO};
pub use crate::crossings::{
    circle_crossings, ellipse_crossings, path_circle_crossings, path_ellipse_crossings,
    path_point_crossings, path_rect_crossings, path_round_rect_crossings,
    path_segment_crossings, path_shadow_crossings, point_crossings,
    point_crossings_without_equality, rect_crossings, round_rect_crossings, segment_crossings,
    CrossingMode, Crossings,
};
pub use crate::ellipse::*;
pub use crate::error::*;
pub use crate::flatten::*;
pub use crate::path::*;
pub use crate::path_element::*;
pub use crate::point::*;
pub use crate::real::*;
pub use crate::rect::*;
pub use crate::rounded_rect::*;
pub use crate::segment::*;
pub use crate::shadow::*;
pub use crate::shape::*;
pub use crate::vec2::*;
