// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line segments, and the point/segment primitives the rest of the crate is
//! built from.

use core::ops::{Add, Sub};

use crate::common::{
    cohen_sutherland_code, COHEN_SUTHERLAND_BOTTOM, COHEN_SUTHERLAND_LEFT,
    COHEN_SUTHERLAND_RIGHT, COHEN_SUTHERLAND_TOP,
};
use crate::crossings::{path_segment_crossings, CrossingMode};
use crate::real::is_epsilon_zero;
use crate::{
    Circle, Ellipse, Intersects, Path, PathElement, PathError, PathIterator, Point, Rect,
    RoundRect, Shape, Vec2, WindingRule,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A line segment.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// The segment's start point.
    pub p0: Point,
    /// The segment's end point.
    pub p1: Point,
}

impl Segment {
    /// Create a new segment.
    #[inline(always)]
    pub fn new(p0: impl Into<Point>, p1: impl Into<Point>) -> Segment {
        Segment {
            p0: p0.into(),
            p1: p1.into(),
        }
    }

    /// The vector from `p0` to `p1`.
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.p1 - self.p0
    }

    /// The length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    /// The squared length of the segment.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.vector().length_squared()
    }

    /// The midpoint of the segment.
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p0.midpoint(self.p1)
    }

    /// The segment with its end points swapped.
    #[inline]
    #[must_use]
    pub fn reversed(&self) -> Segment {
        Segment::new(self.p1, self.p0)
    }

    /// The part of the segment that lies inside `rect`, or `None` if the
    /// segment misses the rectangle.
    ///
    /// Uses Cohen–Sutherland clipping; the returned segment keeps the
    /// direction of `self`.
    pub fn clip_to_rect(&self, rect: Rect) -> Option<Segment> {
        clip_cohen_sutherland(self.p0, self.p1, rect).map(|(p0, p1)| Segment { p0, p1 })
    }
}

/// Clip the segment `p0`-`p1` against `rect`, returning the clipped ends.
fn clip_cohen_sutherland(mut p0: Point, mut p1: Point, rect: Rect) -> Option<(Point, Point)> {
    let Rect { x0, y0, x1, y1 } = rect;
    let mut code0 = cohen_sutherland_code(p0.x, p0.y, x0, y0, x1, y1);
    let mut code1 = cohen_sutherland_code(p1.x, p1.y, x0, y0, x1, y1);
    loop {
        if code0 | code1 == 0 {
            return Some((p0, p1));
        }
        if code0 & code1 != 0 {
            return None;
        }
        let out = if code0 != 0 { code0 } else { code1 };
        let p = if out & COHEN_SUTHERLAND_TOP != 0 {
            Point::new(p0.x + (p1.x - p0.x) * (y1 - p0.y) / (p1.y - p0.y), y1)
        } else if out & COHEN_SUTHERLAND_BOTTOM != 0 {
            Point::new(p0.x + (p1.x - p0.x) * (y0 - p0.y) / (p1.y - p0.y), y0)
        } else if out & COHEN_SUTHERLAND_RIGHT != 0 {
            Point::new(x1, p0.y + (p1.y - p0.y) * (x1 - p0.x) / (p1.x - p0.x))
        } else if out & COHEN_SUTHERLAND_LEFT != 0 {
            Point::new(x0, p0.y + (p1.y - p0.y) * (x0 - p0.x) / (p1.x - p0.x))
        } else {
            return None;
        };
        if out == code0 {
            p0 = p;
            code0 = cohen_sutherland_code(p0.x, p0.y, x0, y0, x1, y1);
        } else {
            p1 = p;
            code1 = cohen_sutherland_code(p1.x, p1.y, x0, y0, x1, y1);
        }
    }
}

/// Whether the segment `p0`-`p1` intersects the rectangle.
///
/// A degenerate segment whose clipped remainder is a single point does not
/// intersect.
pub(crate) fn intersects_rect_segment(rect: Rect, p0: Point, p1: Point) -> bool {
    clip_cohen_sutherland(p0, p1, rect).is_some_and(|(a, b)| a != b)
}

/// The ratio along `a`-`b` of the projection of `p` onto the line through
/// them.
///
/// `0` is `a`, `1` is `b`. The result is NaN when `a == b`.
#[inline]
pub fn projected_point_ratio(a: Point, b: Point, p: Point) -> f64 {
    let v = b - a;
    (p - a).dot(v) / v.length_squared()
}

/// The squared distance from `p` to the infinite line through `a` and `b`.
///
/// When `a == b`, the distance to that point.
pub fn distance_squared_line_point(a: Point, b: Point, p: Point) -> f64 {
    let v = b - a;
    let denom = v.length_squared();
    if denom == 0.0 {
        return p.distance_squared(a);
    }
    let s = ((a.y - p.y) * v.x - (a.x - p.x) * v.y) / denom;
    s * s * denom
}

/// The squared distance from `p` to the segment `a`-`b`.
pub fn distance_squared_segment_point(a: Point, b: Point, p: Point) -> f64 {
    let v = b - a;
    let denom = v.length_squared();
    if denom == 0.0 {
        return p.distance_squared(a);
    }
    let ratio = (p - a).dot(v) / denom;
    if ratio <= 0.0 {
        p.distance_squared(a)
    } else if ratio >= 1.0 {
        p.distance_squared(b)
    } else {
        let s = ((a.y - p.y) * v.x - (a.x - p.x) * v.y) / denom;
        s * s * denom
    }
}

/// The point of segment `a`-`b` nearest to `p`.
pub fn closest_point_on_segment(a: Point, b: Point, p: Point) -> Point {
    let ratio = projected_point_ratio(a, b, p);
    // NaN for a degenerate segment falls to `a`.
    if !(ratio > 0.0) {
        a
    } else if ratio >= 1.0 {
        b
    } else {
        a.lerp(b, ratio)
    }
}

/// The end point of segment `a`-`b` farthest from `p`.
#[inline]
pub fn farthest_point_on_segment(a: Point, b: Point, p: Point) -> Point {
    if p.distance_squared(a) >= p.distance_squared(b) {
        a
    } else {
        b
    }
}

/// The side of the directed line `p1` → `p2` on which `p` lies.
///
/// The sign follows `(p - p1) × (p2 - p1)`: `1` and `-1` for the two
/// sides, `0` when `p` is on the line. A cross product whose magnitude is at
/// most `epsilon` counts as on the line.
pub fn side_of_line(p1: Point, p2: Point, p: Point, epsilon: f64) -> i32 {
    let mut side = (p.x - p1.x) * (p2.y - p1.y) - (p.y - p1.y) * (p2.x - p1.x);
    if side != 0.0 && side.abs() <= epsilon {
        side = 0.0;
    }
    if side < 0.0 {
        -1
    } else if side > 0.0 {
        1
    } else {
        0
    }
}

/// Whether `p` lies on the closed segment `a`-`b`.
fn is_point_on_segment(p: Point, a: Point, b: Point) -> bool {
    let v = b - a;
    let w = p - a;
    if v.x == 0.0 && v.y == 0.0 {
        return p == a;
    }
    if w.cross(v) != 0.0 {
        return false;
    }
    let d = w.dot(v);
    d >= 0.0 && d <= v.length_squared()
}

/// One half of the segment-segment test: can `b0`-`b1` cross the line of
/// `a0`-`a1` at a point of `a0`-`a1`?
fn may_cross(a0: Point, a1: Point, b0: Point, b1: Point, with_ends: bool) -> bool {
    let v = a1 - a0;
    let f1 = (b0 - a0).cross(v);
    let f2 = (b1 - a0).cross(v);
    let sign = f1 * f2;
    if sign < 0.0 {
        return true;
    }
    if sign > 0.0 {
        return false;
    }
    let len2 = v.length_squared();
    if len2 == 0.0 {
        // `a0`-`a1` is a single point, which has no interior.
        return with_ends && is_point_on_segment(a0, b0, b1);
    }
    let r1 = (b0 - a0).dot(v) / len2;
    let r2 = (b1 - a0).dot(v) / len2;
    if f1 == 0.0 && f2 == 0.0 {
        // Collinear: the projections must overlap [0, 1].
        if with_ends {
            (r1 >= 0.0 || r2 >= 0.0) && (r1 <= 1.0 || r2 <= 1.0)
        } else {
            (r1 > 0.0 || r2 > 0.0) && (r1 < 1.0 || r2 < 1.0)
        }
    } else if !with_ends {
        false
    } else if f1 == 0.0 {
        (0.0..=1.0).contains(&r1)
    } else {
        (0.0..=1.0).contains(&r2)
    }
}

/// Whether two segments intersect, counting shared end points and
/// collinear overlaps.
pub fn intersects_segment_segment_with_ends(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    may_cross(a0, a1, b0, b1, true) && may_cross(b0, b1, a0, a1, true)
}

/// Whether two segments cross strictly inside both of them.
///
/// Touching at an end point is not an intersection; a collinear overlap of
/// positive length is.
pub fn intersects_segment_segment_without_ends(
    a0: Point,
    a1: Point,
    b0: Point,
    b1: Point,
) -> bool {
    may_cross(a0, a1, b0, b1, false) && may_cross(b0, b1, a0, a1, false)
}

impl Add<Vec2> for Segment {
    type Output = Segment;

    #[inline]
    fn add(self, v: Vec2) -> Segment {
        Segment::new(self.p0 + v, self.p1 + v)
    }
}

impl Sub<Vec2> for Segment {
    type Output = Segment;

    #[inline]
    fn sub(self, v: Vec2) -> Segment {
        Segment::new(self.p0 - v, self.p1 - v)
    }
}

impl From<(Point, Point)> for Segment {
    #[inline(always)]
    fn from((p0, p1): (Point, Point)) -> Segment {
        Segment::new(p0, p1)
    }
}

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct SegmentPathIter {
    seg: Segment,
    ix: usize,
}

impl Iterator for SegmentPathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        self.ix += 1;
        match self.ix {
            1 => Some(PathElement::move_to(self.seg.p0)),
            2 => Some(PathElement::line_to(self.seg.p0, self.seg.p1)),
            _ => None,
        }
    }
}

impl PathIterator for SegmentPathIter {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

impl Shape for Segment {
    type PathIter<'iter> = SegmentPathIter;

    fn path_iter(&self) -> SegmentPathIter {
        SegmentPathIter {
            seg: *self,
            // Nothing to draw for a point.
            ix: if self.is_empty() { 2 } else { 0 },
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        Rect::from_points(self.p0, self.p1)
    }

    /// Whether `pt` lies on the segment, up to the rounding error of the
    /// distance computation.
    fn contains(&self, pt: Point) -> bool {
        is_epsilon_zero(distance_squared_segment_point(self.p0, self.p1, pt))
    }

    /// A segment has no area, so it never contains a rectangle.
    #[inline]
    fn contains_rect(&self, _rect: Rect) -> bool {
        false
    }

    #[inline]
    fn closest_point(&self, pt: Point) -> Point {
        closest_point_on_segment(self.p0, self.p1, pt)
    }

    #[inline]
    fn farthest_point(&self, pt: Point) -> Point {
        farthest_point_on_segment(self.p0, self.p1, pt)
    }

    #[inline]
    fn translate(&mut self, v: Vec2) {
        *self = *self + v;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.p0 == self.p1
    }

    fn intersects_path_iter<I: PathIterator>(&self, iter: I) -> Result<bool, PathError> {
        let mask = iter.winding_rule().crossing_mask(2);
        let crossings = path_segment_crossings(
            0,
            iter,
            self,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        )?;
        Ok(crossings.is_hit(mask))
    }
}

impl Intersects<Segment> for Segment {
    /// Touching end points and collinear overlaps count.
    #[inline]
    fn intersects(&self, other: &Segment) -> bool {
        intersects_segment_segment_with_ends(self.p0, self.p1, other.p0, other.p1)
    }
}

impl Intersects<Rect> for Segment {
    #[inline]
    fn intersects(&self, other: &Rect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Circle> for Segment {
    #[inline]
    fn intersects(&self, other: &Circle) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Ellipse> for Segment {
    #[inline]
    fn intersects(&self, other: &Ellipse) -> bool {
        other.intersects(self)
    }
}

impl Intersects<RoundRect> for Segment {
    #[inline]
    fn intersects(&self, other: &RoundRect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Path> for Segment {
    fn intersects(&self, other: &Path) -> bool {
        matches!(self.intersects_path_iter(other.path_iter()), Ok(true))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::crossings::Crossings;
    use crate::{ElementsIter, Path, PathElementType};

    fn assert_approx_eq(x: f64, y: f64) {
        assert!((x - y).abs() < 1e-9, "{x} != {y}");
    }

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).length() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn closest_point_projects_and_clamps() {
        let s = Segment::new((0.0, 0.0), (10.0, 5.0));
        assert_near(s.closest_point(Point::new(2.0, 2.0)), Point::new(2.4, 1.2));
        assert_near(s.closest_point(Point::new(-3.0, 0.0)), Point::new(0.0, 0.0));
        assert_near(s.closest_point(Point::new(20.0, 3.0)), Point::new(10.0, 5.0));
        // The distances all agree on the same closest point.
        let p = Point::new(2.0, 2.0);
        assert_approx_eq(s.distance_l1(p), 0.4 + 0.8);
        assert_approx_eq(s.distance_linf(p), 0.8);
        assert_approx_eq(s.distance_squared(p), 0.8);
        assert_approx_eq(s.distance(p), 0.8_f64.sqrt());
    }

    #[test]
    fn degenerate_segment() {
        let s = Segment::new((1.0, 1.0), (1.0, 1.0));
        assert!(s.is_empty());
        assert_eq!(s.path_iter().count(), 0);
        assert_eq!(s.closest_point(Point::new(5.0, 5.0)), Point::new(1.0, 1.0));
        assert_approx_eq(
            distance_squared_segment_point(s.p0, s.p1, Point::new(4.0, 5.0)),
            25.0,
        );
        assert_approx_eq(
            distance_squared_line_point(s.p0, s.p1, Point::new(4.0, 5.0)),
            25.0,
        );
    }

    #[test]
    fn line_and_segment_distances() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let p = Point::new(3.0, 2.0);
        assert_approx_eq(distance_squared_line_point(a, b, p), 4.0);
        assert_approx_eq(distance_squared_segment_point(a, b, p), 8.0);
        assert_approx_eq(projected_point_ratio(a, b, p), 3.0);
        assert_eq!(farthest_point_on_segment(a, b, Point::new(0.2, 1.0)), b);
        assert_eq!(farthest_point_on_segment(a, b, Point::new(0.8, 1.0)), a);
    }

    #[test]
    fn sides() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(0.0, 1.0);
        assert_eq!(side_of_line(p1, p2, Point::new(1.0, 0.5), 0.0), 1);
        assert_eq!(side_of_line(p1, p2, Point::new(-1.0, 0.5), 0.0), -1);
        assert_eq!(side_of_line(p1, p2, Point::new(0.0, 7.0), 0.0), 0);
        assert_eq!(side_of_line(p1, p2, Point::new(1e-3, 0.5), 1e-2), 0);
    }

    #[test]
    fn segment_segment() {
        let a0 = Point::new(0.0, 0.0);
        let a1 = Point::new(2.0, 2.0);
        // Proper crossing.
        assert!(intersects_segment_segment_with_ends(
            a0,
            a1,
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0)
        ));
        assert!(intersects_segment_segment_without_ends(
            a0,
            a1,
            Point::new(0.0, 2.0),
            Point::new(2.0, 0.0)
        ));
        // Touching at an end point.
        let t0 = Point::new(2.0, 2.0);
        let t1 = Point::new(3.0, 0.0);
        assert!(intersects_segment_segment_with_ends(a0, a1, t0, t1));
        assert!(!intersects_segment_segment_without_ends(a0, a1, t0, t1));
        // Collinear overlap.
        let c0 = Point::new(1.0, 1.0);
        let c1 = Point::new(3.0, 3.0);
        assert!(intersects_segment_segment_with_ends(a0, a1, c0, c1));
        assert!(intersects_segment_segment_without_ends(a0, a1, c0, c1));
        // Collinear but disjoint.
        let d0 = Point::new(3.0, 3.0);
        let d1 = Point::new(4.0, 4.0);
        assert!(!intersects_segment_segment_with_ends(a0, a1, d0, d1));
        // Parallel.
        let e0 = Point::new(0.0, 1.0);
        let e1 = Point::new(2.0, 3.0);
        assert!(!intersects_segment_segment_with_ends(a0, a1, e0, e1));
        assert!(Segment::new(a0, a1).intersects(&Segment::new(t0, t1)));
    }

    #[test]
    fn point_segment_against_segment() {
        let a0 = Point::new(0.0, 0.0);
        let a1 = Point::new(2.0, 2.0);
        let on = Point::new(1.0, 1.0);
        let off = Point::new(1.0, 1.5);
        assert!(intersects_segment_segment_with_ends(on, on, a0, a1));
        assert!(intersects_segment_segment_with_ends(a0, a1, on, on));
        assert!(intersects_segment_segment_with_ends(a1, a1, a0, a1));
        assert!(!intersects_segment_segment_with_ends(off, off, a0, a1));
        assert!(!intersects_segment_segment_with_ends(a0, a1, off, off));
        // Beyond the end, on the supporting line.
        let beyond = Point::new(3.0, 3.0);
        assert!(!intersects_segment_segment_with_ends(beyond, beyond, a0, a1));
        assert!(!intersects_segment_segment_without_ends(on, on, a0, a1));
        // Two points.
        assert!(intersects_segment_segment_with_ends(on, on, on, on));
        assert!(!intersects_segment_segment_with_ends(on, on, off, off));
        let dot = Segment::new(on, on);
        assert!(dot.intersects(&Segment::new(a0, a1)));
        assert!(Segment::new(a0, a1).intersects(&dot));
    }

    #[test]
    fn segment_inside_even_odd_polygon() {
        // The segment ends level with the vertex at (0.5, 0).
        let mut path = Path::with_winding_rule(WindingRule::EvenOdd);
        path.move_to((3.0, -2.0));
        for p in [(0.5, 0.0), (0.5, 5.0), (-5.0, 5.0), (-5.0, -5.0), (3.0, -5.0)] {
            path.line_to(p).unwrap();
        }
        path.close_path();
        let s = Segment::new((1.0, -1.0), (0.0, 0.0));
        assert_eq!(
            path_segment_crossings(0, path.path_iter(), &s, CrossingMode::Standard),
            Ok(Crossings::Count(2))
        );
        assert!(s.intersects(&path));
        assert!(path.intersects(&s));
        path.set_winding_rule(WindingRule::NonZero);
        assert!(s.intersects(&path));
    }

    #[test]
    fn segment_segment_is_symmetric() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let mut p = || Point::new(rng.random_range(-4..=4) as f64, rng.random_range(-4..=4) as f64);
            let (a0, a1, b0, b1) = (p(), p(), p(), p());
            if a0 == a1 || b0 == b1 {
                continue;
            }
            assert_eq!(
                intersects_segment_segment_with_ends(a0, a1, b0, b1),
                intersects_segment_segment_with_ends(b0, b1, a0, a1),
            );
            // A strict crossing is always a crossing.
            if intersects_segment_segment_without_ends(a0, a1, b0, b1) {
                assert!(intersects_segment_segment_with_ends(a0, a1, b0, b1));
            }
        }
    }

    #[test]
    fn clipping() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        let s = Segment::new((-5.0, 5.0), (15.0, 5.0));
        let c = s.clip_to_rect(r).map(|c| (c.p0, c.p1));
        assert_eq!(c, Some((Point::new(0.0, 5.0), Point::new(10.0, 5.0))));
        assert!(Segment::new((-5.0, -5.0), (-1.0, 20.0))
            .clip_to_rect(r)
            .is_none());
        let inside = Segment::new((1.0, 1.0), (2.0, 3.0));
        assert_eq!(inside.clip_to_rect(r), Some(inside));
        assert!(inside.intersects(&r));
        assert!(!Segment::new((1.0, 1.0), (1.0, 1.0)).intersects(&r));
    }

    #[test]
    fn path_iter_and_containment() {
        let s = Segment::new((0.0, 0.0), (4.0, 2.0));
        let els: Vec<_> = s.path_iter().collect();
        assert_eq!(els.len(), 2);
        assert_eq!(els[0].kind, PathElementType::MoveTo);
        assert_eq!(els[1], PathElement::line_to((0.0, 0.0), (4.0, 2.0)));
        assert!(s.contains(Point::new(2.0, 1.0)));
        assert!(!s.contains(Point::new(2.0, 1.1)));
        assert!(!s.contains_rect(Rect::new(0.0, 0.0, 1.0, 1.0)));
        assert_eq!(s.bounding_box(), Rect::new(0.0, 0.0, 4.0, 2.0));
        let mut t = s;
        t.translate(Vec2::new(1.0, 1.0));
        assert_eq!(t, Segment::new((1.0, 1.0), (5.0, 3.0)));
    }

    #[test]
    fn segment_against_path_iter() {
        let square = [
            PathElement::move_to((0.0, 0.0)),
            PathElement::line_to((0.0, 0.0), (4.0, 0.0)),
            PathElement::line_to((4.0, 0.0), (4.0, 4.0)),
            PathElement::line_to((4.0, 4.0), (0.0, 4.0)),
            PathElement::close((0.0, 4.0), (0.0, 0.0)),
        ];
        let it = || ElementsIter::new(square, WindingRule::NonZero);
        let crossing = Segment::new((-1.0, 2.0), (2.0, 2.0));
        assert_eq!(crossing.intersects_path_iter(it()), Ok(true));
        let inside = Segment::new((1.0, 1.0), (2.0, 2.0));
        assert_eq!(inside.intersects_path_iter(it()), Ok(true));
        let outside = Segment::new((5.0, 1.0), (6.0, 2.0));
        assert_eq!(outside.intersects_path_iter(it()), Ok(false));
    }
}
