// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path elements, winding rules and the path iterator abstraction.

use arrayvec::ArrayVec;

use crate::{Affine, PathError, Point};

/// The kind of a [`PathElement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElementType {
    /// Start a new sub-path.
    MoveTo,
    /// A straight line.
    LineTo,
    /// A quadratic Bézier curve with one control point.
    QuadTo,
    /// A cubic Bézier curve with two control points.
    CurveTo,
    /// Close the current sub-path back to its starting point.
    Close,
}

impl PathElementType {
    /// The number of coordinates (not points) a path stores for this kind.
    #[inline]
    pub const fn coord_count(self) -> usize {
        match self {
            PathElementType::MoveTo | PathElementType::LineTo => 2,
            PathElementType::QuadTo => 4,
            PathElementType::CurveTo => 6,
            PathElementType::Close => 0,
        }
    }
}

/// A single element of a path, as produced by a [`PathIterator`].
///
/// Every element carries its starting point, so an element can be processed
/// without the context of the previous one. Points that do not apply to the
/// element's kind are `NaN`: both control points of a move, line or close,
/// `ctrl2` of a quadratic, and the `from` point of a move.
#[derive(Clone, Copy, Debug)]
pub struct PathElement {
    /// The kind of this element.
    pub kind: PathElementType,
    /// The starting point.
    pub from: Point,
    /// The first control point.
    pub ctrl1: Point,
    /// The second control point.
    pub ctrl2: Point,
    /// The end point.
    pub to: Point,
}

impl PathElement {
    /// A move to `to`.
    #[inline]
    pub fn move_to(to: impl Into<Point>) -> PathElement {
        PathElement {
            kind: PathElementType::MoveTo,
            from: Point::NAN,
            ctrl1: Point::NAN,
            ctrl2: Point::NAN,
            to: to.into(),
        }
    }

    /// A line from `from` to `to`.
    #[inline]
    pub fn line_to(from: impl Into<Point>, to: impl Into<Point>) -> PathElement {
        PathElement {
            kind: PathElementType::LineTo,
            from: from.into(),
            ctrl1: Point::NAN,
            ctrl2: Point::NAN,
            to: to.into(),
        }
    }

    /// A quadratic curve from `from` to `to`.
    #[inline]
    pub fn quad_to(
        from: impl Into<Point>,
        ctrl: impl Into<Point>,
        to: impl Into<Point>,
    ) -> PathElement {
        PathElement {
            kind: PathElementType::QuadTo,
            from: from.into(),
            ctrl1: ctrl.into(),
            ctrl2: Point::NAN,
            to: to.into(),
        }
    }

    /// A cubic curve from `from` to `to`.
    #[inline]
    pub fn curve_to(
        from: impl Into<Point>,
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        to: impl Into<Point>,
    ) -> PathElement {
        PathElement {
            kind: PathElementType::CurveTo,
            from: from.into(),
            ctrl1: ctrl1.into(),
            ctrl2: ctrl2.into(),
            to: to.into(),
        }
    }

    /// The closing edge from `from` back to the sub-path start `to`.
    #[inline]
    pub fn close(from: impl Into<Point>, to: impl Into<Point>) -> PathElement {
        PathElement {
            kind: PathElementType::Close,
            from: from.into(),
            ctrl1: Point::NAN,
            ctrl2: Point::NAN,
            to: to.into(),
        }
    }

    /// Whether the element covers no distance.
    ///
    /// A move is always empty. A line or close is empty when its ends
    /// coincide; a curve when all of its points coincide.
    pub fn is_empty(&self) -> bool {
        match self.kind {
            PathElementType::MoveTo => true,
            PathElementType::LineTo | PathElementType::Close => self.from == self.to,
            PathElementType::QuadTo => self.from == self.to && self.ctrl1 == self.to,
            PathElementType::CurveTo => {
                self.from == self.to && self.ctrl1 == self.to && self.ctrl2 == self.to
            }
        }
    }

    /// Whether drawing this element would produce a visible mark.
    #[inline]
    pub fn is_drawable(&self) -> bool {
        !self.is_empty()
    }

    /// The points a path stores for this element, in storage order:
    /// control points first, then the end point. A close stores none.
    pub fn stored_points(&self) -> ArrayVec<Point, 3> {
        let mut points = ArrayVec::new();
        match self.kind {
            PathElementType::MoveTo | PathElementType::LineTo => points.push(self.to),
            PathElementType::QuadTo => {
                points.push(self.ctrl1);
                points.push(self.to);
            }
            PathElementType::CurveTo => {
                points.push(self.ctrl1);
                points.push(self.ctrl2);
                points.push(self.to);
            }
            PathElementType::Close => {}
        }
        points
    }

    /// Apply an affine transform to every point of the element.
    #[must_use]
    pub fn transform(&self, affine: Affine) -> PathElement {
        PathElement {
            kind: self.kind,
            from: affine * self.from,
            ctrl1: affine * self.ctrl1,
            ctrl2: affine * self.ctrl2,
            to: affine * self.to,
        }
    }
}

impl PartialEq for PathElement {
    /// Elements are equal when their kinds match and the points that apply to
    /// that kind are equal.
    fn eq(&self, other: &PathElement) -> bool {
        if self.kind != other.kind || self.to != other.to {
            return false;
        }
        match self.kind {
            PathElementType::MoveTo => true,
            PathElementType::LineTo | PathElementType::Close => self.from == other.from,
            PathElementType::QuadTo => self.from == other.from && self.ctrl1 == other.ctrl1,
            PathElementType::CurveTo => {
                self.from == other.from && self.ctrl1 == other.ctrl1 && self.ctrl2 == other.ctrl2
            }
        }
    }
}

/// The rule deciding which points are inside a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindingRule {
    /// A point is inside when the winding number is non-zero.
    #[default]
    NonZero,
    /// A point is inside when the winding number is odd.
    EvenOdd,
}

impl WindingRule {
    /// The mask to apply to a crossing count.
    ///
    /// `-1` keeps every bit for [`WindingRule::NonZero`]; for
    /// [`WindingRule::EvenOdd`] the caller chooses the parity mask (`1` for
    /// point crossings, which count by one, `2` for area crossings, which
    /// count each side of the shape).
    #[inline]
    pub const fn crossing_mask(self, even_odd_mask: i32) -> i32 {
        match self {
            WindingRule::NonZero => -1,
            WindingRule::EvenOdd => even_odd_mask,
        }
    }
}

/// An iterator over the elements of a path.
///
/// This is the common input of the crossing engines; it adds the winding rule
/// that gives meaning to the crossing counts.
pub trait PathIterator: Iterator<Item = PathElement> {
    /// The winding rule of the iterated path.
    fn winding_rule(&self) -> WindingRule;

    /// Like [`Iterator::next`], but reports exhaustion as an error.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::NoSuchElement`] when there are no more elements.
    fn next_element(&mut self) -> Result<PathElement, PathError> {
        self.next().ok_or(PathError::NoSuchElement)
    }
}

impl<I: PathIterator + ?Sized> PathIterator for &mut I {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        (**self).winding_rule()
    }
}

/// A [`PathIterator`] over any sequence of elements.
#[derive(Clone, Debug)]
pub struct ElementsIter<I> {
    inner: I,
    rule: WindingRule,
}

impl<I: Iterator<Item = PathElement>> ElementsIter<I> {
    /// Wrap `elements`, attaching the winding rule `rule`.
    pub fn new(elements: impl IntoIterator<IntoIter = I>, rule: WindingRule) -> Self {
        ElementsIter {
            inner: elements.into_iter(),
            rule,
        }
    }
}

impl<I: Iterator<Item = PathElement>> Iterator for ElementsIter<I> {
    type Item = PathElement;

    #[inline]
    fn next(&mut self) -> Option<PathElement> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: Iterator<Item = PathElement>> PathIterator for ElementsIter<I> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.rule
    }
}

/// A [`PathIterator`] applying an affine transform to another one.
#[derive(Clone, Debug)]
pub struct TransformedIter<I> {
    inner: I,
    affine: Affine,
}

impl<I: PathIterator> TransformedIter<I> {
    /// Transform every element of `inner` by `affine`.
    pub fn new(inner: I, affine: Affine) -> Self {
        TransformedIter { inner, affine }
    }
}

impl<I: PathIterator> Iterator for TransformedIter<I> {
    type Item = PathElement;

    #[inline]
    fn next(&mut self) -> Option<PathElement> {
        let el = self.inner.next()?;
        if self.affine.is_identity() {
            Some(el)
        } else {
            Some(el.transform(self.affine))
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: PathIterator> PathIterator for TransformedIter<I> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn emptiness() {
        assert!(PathElement::move_to((1.0, 1.0)).is_empty());
        assert!(!PathElement::move_to((1.0, 1.0)).is_drawable());
        assert!(PathElement::line_to((1.0, 1.0), (1.0, 1.0)).is_empty());
        assert!(PathElement::line_to((1.0, 1.0), (1.0, 2.0)).is_drawable());
        assert!(PathElement::quad_to((1.0, 1.0), (1.0, 1.0), (1.0, 1.0)).is_empty());
        assert!(PathElement::quad_to((1.0, 1.0), (2.0, 1.0), (1.0, 1.0)).is_drawable());
        assert!(PathElement::close((0.0, 0.0), (0.0, 0.0)).is_empty());
        assert!(
            PathElement::curve_to((0.0, 0.0), (0.0, 0.0), (0.0, 1.0), (0.0, 0.0)).is_drawable()
        );
    }

    #[test]
    fn unused_points_are_nan() {
        let m = PathElement::move_to((3.0, 4.0));
        assert!(m.from.is_nan());
        assert!(m.ctrl1.is_nan());
        let q = PathElement::quad_to((0.0, 0.0), (1.0, 1.0), (2.0, 0.0));
        assert!(!q.ctrl1.is_nan());
        assert!(q.ctrl2.is_nan());
        // NaN fields do not break equality.
        assert_eq!(m, PathElement::move_to((3.0, 4.0)));
        assert_ne!(m, PathElement::move_to((3.0, 5.0)));
    }

    #[test]
    fn masks() {
        assert_eq!(WindingRule::default(), WindingRule::NonZero);
        assert_eq!(WindingRule::NonZero.crossing_mask(2), -1);
        assert_eq!(WindingRule::EvenOdd.crossing_mask(2), 2);
        assert_eq!(WindingRule::EvenOdd.crossing_mask(1), 1);
    }

    #[test]
    fn next_element_reports_exhaustion() {
        let mut it = ElementsIter::new(
            vec![PathElement::move_to((0.0, 0.0))],
            WindingRule::EvenOdd,
        );
        assert_eq!(it.winding_rule(), WindingRule::EvenOdd);
        assert!(it.next_element().is_ok());
        assert_eq!(it.next_element(), Err(PathError::NoSuchElement));
    }

    #[test]
    fn transformed_iter() {
        let elements = vec![
            PathElement::move_to((1.0, 1.0)),
            PathElement::line_to((1.0, 1.0), (2.0, 1.0)),
        ];
        let it = TransformedIter::new(
            ElementsIter::new(elements, WindingRule::NonZero),
            Affine::translate((1.0, -1.0)),
        );
        let out: Vec<_> = it.collect();
        assert_eq!(out[0], PathElement::move_to((2.0, 0.0)));
        assert_eq!(out[1], PathElement::line_to((2.0, 0.0), (3.0, 0.0)));
    }
}
