// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generic trait for shapes.

use crate::{
    Affine, FlatteningIter, PathError, PathIterator, Point, Rect, TransformedIter, Vec2,
};

/// A generic trait for closed (or, for segments, degenerate) 2D shapes.
///
/// Every shape can be walked as a sequence of path elements, and answers
/// containment and distance queries. Distances are all derived from
/// [`Shape::closest_point`], so that the Euclidean, Manhattan and Chebyshev
/// variants agree on which point of the shape is the nearest.
pub trait Shape {
    /// The iterator returned by [`Shape::path_iter`].
    type PathIter<'iter>: PathIterator + 'iter
    where
        Self: 'iter;

    /// The outline of the shape as path elements.
    ///
    /// An empty shape produces no elements.
    fn path_iter(&self) -> Self::PathIter<'_>;

    /// The outline transformed by `affine`.
    fn transformed_iter(&self, affine: Affine) -> TransformedIter<Self::PathIter<'_>> {
        TransformedIter::new(self.path_iter(), affine)
    }

    /// The outline with curves replaced by lines deviating at most
    /// `flatness` from them.
    fn flattened_iter(&self, flatness: f64) -> FlatteningIter<Self::PathIter<'_>> {
        FlatteningIter::new(self.path_iter(), flatness)
    }

    /// The smallest rectangle that encloses the shape.
    fn bounding_box(&self) -> Rect;

    /// Whether `pt` is inside the shape.
    fn contains(&self, pt: Point) -> bool;

    /// Whether `rect` is entirely inside the shape.
    fn contains_rect(&self, rect: Rect) -> bool;

    /// The point of the shape nearest to `pt`.
    ///
    /// For a point inside the shape, this is the point itself.
    fn closest_point(&self, pt: Point) -> Point;

    /// The point of the shape farthest from `pt`.
    fn farthest_point(&self, pt: Point) -> Point;

    /// Move the shape by `v`.
    fn translate(&mut self, v: Vec2);

    /// Whether the shape has no area (or, for a segment, no length).
    fn is_empty(&self) -> bool;

    /// Whether the shape intersects the path described by `iter`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidArgument`] when `iter` does not start with
    /// a move.
    fn intersects_path_iter<I: PathIterator>(&self, iter: I) -> Result<bool, PathError>;

    /// The Euclidean distance from `pt` to the shape.
    #[inline]
    fn distance(&self, pt: Point) -> f64 {
        self.closest_point(pt).distance(pt)
    }

    /// The squared Euclidean distance from `pt` to the shape.
    #[inline]
    fn distance_squared(&self, pt: Point) -> f64 {
        self.closest_point(pt).distance_squared(pt)
    }

    /// The Manhattan distance from `pt` to the shape's closest point.
    #[inline]
    fn distance_l1(&self, pt: Point) -> f64 {
        self.closest_point(pt).distance_l1(pt)
    }

    /// The Chebyshev distance from `pt` to the shape's closest point.
    #[inline]
    fn distance_linf(&self, pt: Point) -> f64 {
        self.closest_point(pt).distance_linf(pt)
    }
}

/// Pairwise intersection test between two shapes.
///
/// Implemented for every pair of shape kinds in this crate. Touching
/// boundaries count as an intersection only where noted on the
/// implementations.
pub trait Intersects<Rhs: ?Sized> {
    /// Whether `self` and `other` share at least one point.
    fn intersects(&self, other: &Rhs) -> bool;
}
