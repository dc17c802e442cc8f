// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use core::fmt;
use core::ops::{Add, Sub};

use crate::crossings::{path_rect_crossings, CrossingMode};
use crate::segment::intersects_rect_segment;
use crate::{
    Circle, Ellipse, Intersects, Path, PathElement, PathError, PathIterator, Point, RoundRect,
    Segment, Shape, Vec2, WindingRule,
};

/// An axis-aligned rectangle.
///
/// The constructors establish `x0 <= x1` and `y0 <= y1`. Fields assigned
/// directly are expected to keep that order.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate.
    pub x0: f64,
    /// The minimum y coordinate.
    pub y0: f64,
    /// The maximum x coordinate.
    pub x1: f64,
    /// The maximum y coordinate.
    pub y1: f64,
}

impl Rect {
    /// The empty rectangle at the origin.
    pub const ZERO: Rect = Rect {
        x0: 0.,
        y0: 0.,
        x1: 0.,
        y1: 0.,
    };

    /// A new rectangle from two opposite corners' coordinates.
    ///
    /// The coordinates are sorted, so any two opposite corners work.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect {
            x0: x0.min(x1),
            y0: y0.min(y1),
            x1: x0.max(x1),
            y1: y0.max(y1),
        }
    }

    /// A new rectangle from two opposite corners.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x, p0.y, p1.x, p1.y)
    }

    /// A new rectangle from its minimum corner and size.
    ///
    /// A negative width or height extends towards smaller coordinates.
    #[inline]
    pub fn from_origin_size(origin: impl Into<Point>, width: f64, height: f64) -> Rect {
        let origin = origin.into();
        Rect::from_points(origin, origin + Vec2::new(width, height))
    }

    /// A new rectangle centered on `center`.
    #[inline]
    pub fn from_center_size(center: impl Into<Point>, width: f64, height: f64) -> Rect {
        let center = center.into();
        let half = Vec2::new(width / 2.0, height / 2.0);
        Rect::from_points(center - half, center + half)
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// The minimum corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The maximum corner.
    #[inline]
    pub fn max_corner(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// The center point of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(0.5 * (self.x0 + self.x1), 0.5 * (self.y0 + self.y1))
    }

    /// Re-establish `x0 <= x1` and `y0 <= y1`.
    #[inline]
    #[must_use]
    pub fn abs(&self) -> Rect {
        Rect::new(self.x0, self.y0, self.x1, self.y1)
    }

    /// The smallest rectangle enclosing both rectangles.
    #[inline]
    #[must_use]
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// The smallest rectangle enclosing the rectangle and `pt`.
    #[inline]
    #[must_use]
    pub fn union_pt(&self, pt: Point) -> Rect {
        Rect {
            x0: self.x0.min(pt.x),
            y0: self.y0.min(pt.y),
            x1: self.x1.max(pt.x),
            y1: self.y1.max(pt.y),
        }
    }

    /// The intersection of two rectangles.
    ///
    /// Disjoint rectangles produce a zero-area rectangle located between
    /// them.
    #[inline]
    #[must_use]
    pub fn intersect(&self, other: Rect) -> Rect {
        let x0 = self.x0.max(other.x0);
        let y0 = self.y0.max(other.y0);
        let x1 = self.x1.min(other.x1);
        let y1 = self.y1.min(other.y1);
        Rect {
            x0,
            y0,
            x1: x1.max(x0),
            y1: y1.max(y0),
        }
    }

    /// Expand the rectangle by `width` on the left and the right, and by
    /// `height` on the top and the bottom.
    ///
    /// Shrinking past zero size collapses to the center line.
    #[inline]
    #[must_use]
    pub fn inflate(&self, width: f64, height: f64) -> Rect {
        let c = self.center();
        let hw = (0.5 * self.width() + width).max(0.0);
        let hh = (0.5 * self.height() + height).max(0.0);
        Rect {
            x0: c.x - hw,
            y0: c.y - hh,
            x1: c.x + hw,
            y1: c.y + hh,
        }
    }

    /// The smallest rectangle enclosing all `points`, or `None` if there
    /// are none.
    pub fn enclosing(points: impl IntoIterator<Item = Point>) -> Option<Rect> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let init = Rect::from_points(first, first);
        Some(points.fold(init, |r, p| r.union_pt(p)))
    }
}

impl From<(Point, Point)> for Rect {
    #[inline(always)]
    fn from(points: (Point, Point)) -> Rect {
        Rect::from_points(points.0, points.1)
    }
}

impl From<((f64, f64), (f64, f64))> for Rect {
    #[inline(always)]
    fn from(coords: ((f64, f64), (f64, f64))) -> Rect {
        Rect::from_points(coords.0, coords.1)
    }
}

impl Add<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn add(self, v: Vec2) -> Rect {
        Rect {
            x0: self.x0 + v.x,
            y0: self.y0 + v.y,
            x1: self.x1 + v.x,
            y1: self.y1 + v.y,
        }
    }
}

impl Sub<Vec2> for Rect {
    type Output = Rect;

    #[inline]
    fn sub(self, v: Vec2) -> Rect {
        self + (-v)
    }
}

impl fmt::Debug for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(
                f,
                "Rect {{ origin: {:?}, width: {:?}, height: {:?} }}",
                self.origin(),
                self.width(),
                self.height()
            )
        } else {
            write!(
                f,
                "Rect {{ x0: {:?}, y0: {:?}, x1: {:?}, y1: {:?} }}",
                self.x0, self.y0, self.x1, self.y1
            )
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.origin(), self.max_corner())
    }
}

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RectPathIter {
    rect: Rect,
    ix: usize,
}

impl Iterator for RectPathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let Rect { x0, y0, x1, y1 } = self.rect;
        self.ix += 1;
        match self.ix {
            1 => Some(PathElement::move_to((x0, y0))),
            2 => Some(PathElement::line_to((x0, y0), (x1, y0))),
            3 => Some(PathElement::line_to((x1, y0), (x1, y1))),
            4 => Some(PathElement::line_to((x1, y1), (x0, y1))),
            5 => Some(PathElement::close((x0, y1), (x0, y0))),
            _ => None,
        }
    }
}

impl PathIterator for RectPathIter {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

impl Shape for Rect {
    type PathIter<'iter> = RectPathIter;

    fn path_iter(&self) -> RectPathIter {
        RectPathIter {
            rect: *self,
            ix: if self.is_empty() { 5 } else { 0 },
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        *self
    }

    /// Points on the border are inside.
    #[inline]
    fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }

    #[inline]
    fn contains_rect(&self, rect: Rect) -> bool {
        rect.x0 >= self.x0 && rect.y0 >= self.y0 && rect.x1 <= self.x1 && rect.y1 <= self.y1
    }

    fn closest_point(&self, pt: Point) -> Point {
        Point::new(
            crate::clamp(pt.x, self.x0, self.x1),
            crate::clamp(pt.y, self.y0, self.y1),
        )
    }

    fn farthest_point(&self, pt: Point) -> Point {
        let c = self.center();
        Point::new(
            if pt.x <= c.x { self.x1 } else { self.x0 },
            if pt.y <= c.y { self.y1 } else { self.y0 },
        )
    }

    #[inline]
    fn translate(&mut self, v: Vec2) {
        *self = *self + v;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    fn intersects_path_iter<I: PathIterator>(&self, iter: I) -> Result<bool, PathError> {
        let mask = iter.winding_rule().crossing_mask(2);
        let crossings =
            path_rect_crossings(0, iter, *self, CrossingMode::SimpleIntersectionWhenNotPolygon)?;
        Ok(crossings.is_hit(mask))
    }
}

impl Intersects<Rect> for Rect {
    /// Rectangles sharing only a border do not intersect.
    #[inline]
    fn intersects(&self, other: &Rect) -> bool {
        self.x1 > other.x0 && self.x0 < other.x1 && self.y1 > other.y0 && self.y0 < other.y1
    }
}

impl Intersects<Segment> for Rect {
    #[inline]
    fn intersects(&self, other: &Segment) -> bool {
        intersects_rect_segment(*self, other.p0, other.p1)
    }
}

impl Intersects<Circle> for Rect {
    #[inline]
    fn intersects(&self, other: &Circle) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Ellipse> for Rect {
    #[inline]
    fn intersects(&self, other: &Ellipse) -> bool {
        other.intersects(self)
    }
}

impl Intersects<RoundRect> for Rect {
    #[inline]
    fn intersects(&self, other: &RoundRect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Path> for Rect {
    /// An empty rectangle intersects no path.
    fn intersects(&self, other: &Path) -> bool {
        !self.is_empty() && matches!(self.intersects_path_iter(other.path_iter()), Ok(true))
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;
    use crate::PathElementType;

    #[test]
    fn constructors_sort_corners() {
        let r = Rect::new(10.0, 13.0, 5.0, 8.0);
        assert_eq!(r, Rect::new(5.0, 8.0, 10.0, 13.0));
        assert_eq!(r.width(), 5.0);
        assert_eq!(r.height(), 5.0);
        assert_eq!(Rect::from_origin_size((1.0, 1.0), -1.0, 2.0), Rect::new(0.0, 1.0, 1.0, 3.0));
        assert_eq!(
            Rect::from_center_size((0.0, 0.0), 2.0, 4.0),
            Rect::new(-1.0, -2.0, 1.0, 2.0)
        );
    }

    #[test]
    fn rect_rect_intersection() {
        let r = Rect::new(5.0, 8.0, 10.0, 13.0);
        assert!(!r.intersects(&Rect::new(0.0, 0.0, 8.0, 6.0)));
        assert!(r.intersects(&Rect::new(0.0, 0.0, 100.0, 100.0)));
        // Sharing a border only.
        assert!(!r.intersects(&Rect::new(10.0, 8.0, 12.0, 13.0)));
        assert!(r.intersects(&Rect::new(9.0, 12.0, 12.0, 20.0)));
    }

    #[test]
    fn containment() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        assert!(r.contains(Point::new(1.0, 0.5)));
        assert!(r.contains(Point::new(2.0, 1.0)));
        assert!(!r.contains(Point::new(2.1, 1.0)));
        assert!(r.contains_rect(Rect::new(0.5, 0.0, 1.0, 1.0)));
        assert!(!r.contains_rect(Rect::new(0.5, 0.0, 3.0, 1.0)));
    }

    #[test]
    fn closest_and_farthest() {
        let r = Rect::new(0.0, 0.0, 4.0, 2.0);
        assert_eq!(r.closest_point(Point::new(1.0, 1.0)), Point::new(1.0, 1.0));
        assert_eq!(r.closest_point(Point::new(-1.0, 5.0)), Point::new(0.0, 2.0));
        assert_eq!(r.closest_point(Point::new(6.0, 1.0)), Point::new(4.0, 1.0));
        assert_eq!(r.distance(Point::new(6.0, 1.0)), 2.0);
        assert_eq!(r.distance_l1(Point::new(-1.0, 5.0)), 4.0);
        assert_eq!(r.distance_linf(Point::new(-1.0, 5.0)), 3.0);
        assert_eq!(r.farthest_point(Point::new(1.0, 1.0)), Point::new(4.0, 2.0));
        assert_eq!(r.farthest_point(Point::new(3.0, 1.5)), Point::new(0.0, 0.0));
    }

    #[test]
    fn path_iter() {
        let r = Rect::new(0.0, 0.0, 2.0, 1.0);
        let els: Vec<_> = r.path_iter().collect();
        let kinds: Vec<_> = els.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            [
                PathElementType::MoveTo,
                PathElementType::LineTo,
                PathElementType::LineTo,
                PathElementType::LineTo,
                PathElementType::Close
            ]
        );
        assert_eq!(els[4], PathElement::close((0.0, 1.0), (0.0, 0.0)));
        assert_eq!(Rect::new(0.0, 0.0, 0.0, 1.0).path_iter().count(), 0);
        let moved: Vec<_> = r
            .transformed_iter(crate::Affine::translate((1.0, 0.0)))
            .map(|e| e.to)
            .collect();
        assert_eq!(moved[0], Point::new(1.0, 0.0));
    }

    #[test]
    fn rect_and_segment() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.intersects(&Segment::new((-5.0, 5.0), (15.0, 5.0))));
        assert!(r.intersects(&Segment::new((1.0, 1.0), (2.0, 2.0))));
        assert!(!r.intersects(&Segment::new((11.0, 0.0), (20.0, 10.0))));
        assert!(!r.intersects(&Segment::new((-2.0, 9.0), (1.0, 12.0))));
    }

    #[test]
    fn rect_and_path_iter() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        let big = Rect::new(-5.0, -5.0, 5.0, 5.0);
        assert_eq!(r.intersects_path_iter(big.path_iter()), Ok(true));
        let far = Rect::new(5.0, 5.0, 6.0, 6.0);
        assert_eq!(r.intersects_path_iter(far.path_iter()), Ok(false));
    }

    #[test]
    fn translate_and_format() {
        let mut r = Rect::new(0.0, 0.0, 1.0, 1.0);
        r.translate(Vec2::new(2.0, 3.0));
        assert_eq!(r, Rect::new(2.0, 3.0, 3.0, 4.0));
        assert_eq!(r - Vec2::new(2.0, 3.0), Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(format!("{r:?}"), "Rect { x0: 2.0, y0: 3.0, x1: 3.0, y1: 4.0 }");
        assert_eq!(
            Rect::enclosing([Point::new(1.0, 5.0), Point::new(-1.0, 2.0)]),
            Some(Rect::new(-1.0, 2.0, 1.0, 5.0))
        );
        assert_eq!(Rect::enclosing([]), None);
        assert_eq!(
            r.intersect(Rect::new(2.5, 0.0, 10.0, 3.5)),
            Rect::new(2.5, 3.0, 3.0, 3.5)
        );
        assert_eq!(r.inflate(1.0, 0.0), Rect::new(1.0, 3.0, 4.0, 4.0));
    }
}
