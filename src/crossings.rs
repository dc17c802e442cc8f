// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Crossing numbers between paths and shapes.
//!
//! A crossing count is the signed number of times a path crosses the ray
//! that extends a target (a point, or the "right shadow" of a shape) towards
//! increasing x. Edges going up (increasing y) count `+1`, edges going down
//! count `-1`. Whenever the path touches the target itself, the count is
//! replaced by [`Crossings::Intersects`] and the computation stops.

use arrayvec::ArrayVec;

use crate::circle::intersects_circle_segment;
use crate::ellipse::intersects_ellipse_segment;
use crate::rounded_rect::intersects_round_rect_segment;
use crate::{
    intersects_segment_segment_with_ends, side_of_line, Circle, Ellipse, ElementsIter,
    FlatteningIter, PathElement, PathElementType, PathError, PathIterator, PathShadow, Point,
    Rect, RoundRect, Segment, WindingRule, SPLINE_APPROXIMATION_RATIO,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The result of a crossing computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossings {
    /// The signed number of crossings of the target's right shadow.
    Count(i32),
    /// The path touches or enters the target.
    Intersects,
}

impl Crossings {
    /// Whether the path touches the target.
    #[inline]
    pub fn is_intersects(self) -> bool {
        matches!(self, Crossings::Intersects)
    }

    /// The crossing count, or `None` for [`Crossings::Intersects`].
    #[inline]
    pub fn count(self) -> Option<i32> {
        match self {
            Crossings::Count(n) => Some(n),
            Crossings::Intersects => None,
        }
    }

    /// Whether the result means the target is inside or touching the path,
    /// using `mask` to interpret the count.
    ///
    /// The mask comes from [`WindingRule::crossing_mask`](crate::WindingRule::crossing_mask).
    #[inline]
    pub fn is_hit(self, mask: i32) -> bool {
        match self {
            Crossings::Count(n) => n & mask != 0,
            Crossings::Intersects => true,
        }
    }

    /// Whether the count alone (without any intersection) puts the target
    /// inside the path.
    #[inline]
    pub fn is_strictly_inside(self, mask: i32) -> bool {
        matches!(self, Crossings::Count(n) if n & mask != 0)
    }
}

/// How a path crossing computation treats a path whose last sub-path is not
/// closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CrossingMode {
    /// Open sub-paths count as they are.
    #[default]
    Standard,
    /// An open sub-path is closed by an implicit line back to its start.
    AutoClose,
    /// An open path only reports [`Crossings::Intersects`]; any other count
    /// is reset to zero.
    SimpleIntersectionWhenNotPolygon,
}

/// The crossings of the edge `p0` → `p1` with the ray from `p` towards
/// positive x.
///
/// The edge includes its lower end point and excludes its upper one, so a
/// ray through a shared vertex is counted once.
pub fn point_crossings(p: Point, p0: Point, p1: Point) -> i32 {
    if p.y < p0.y && p.y < p1.y {
        return 0;
    }
    if p.y >= p0.y && p.y >= p1.y {
        return 0;
    }
    if p.x >= p0.x && p.x >= p1.x {
        return 0;
    }
    let dir = if p0.y < p1.y { 1 } else { -1 };
    if p.x < p0.x && p.x < p1.x {
        return dir;
    }
    let xint = p0.x + (p.y - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
    if p.x >= xint {
        return 0;
    }
    dir
}

/// Like [`point_crossings`], but with both end points of the edge included.
///
/// A point lying on the edge itself is counted as crossing it.
pub fn point_crossings_without_equality(p: Point, p0: Point, p1: Point) -> i32 {
    if p.y < p0.y && p.y < p1.y {
        return 0;
    }
    if p.y > p0.y && p.y > p1.y {
        return 0;
    }
    if p.x > p0.x && p.x > p1.x {
        return 0;
    }
    let dir = if p0.y < p1.y { 1 } else { -1 };
    if p.x < p0.x && p.x < p1.x {
        return dir;
    }
    let xint = p0.x + (p.y - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
    if p.x > xint {
        return 0;
    }
    dir
}

/// Count an edge lying entirely right of a target spanning `[ymin, ymax]`.
#[inline]
fn right_shadow_crossings(count: i32, p0: Point, p1: Point, ymin: f64, ymax: f64) -> i32 {
    let mut n = count;
    if p0.y < p1.y {
        if p0.y <= ymin {
            n += 1;
        }
        if p1.y >= ymax {
            n += 1;
        }
    } else if p1.y < p0.y {
        if p1.y <= ymin {
            n -= 1;
        }
        if p0.y >= ymax {
            n -= 1;
        }
    }
    n
}

/// Whether the edge is entirely above, below or left of `[xmin, ..] ×
/// [ymin, ymax]`, in which case it adds no crossing.
#[inline]
fn is_rejected(p0: Point, p1: Point, xmin: f64, ymin: f64, ymax: f64) -> bool {
    (p0.y >= ymax && p1.y >= ymax)
        || (p0.y <= ymin && p1.y <= ymin)
        || (p0.x <= xmin && p1.x <= xmin)
}

/// The crossings of the edge `p0` → `p1` with the right shadow of `rect`,
/// added to `count`.
pub fn rect_crossings(count: i32, rect: Rect, p0: Point, p1: Point) -> Crossings {
    let Rect {
        x0: xmin,
        y0: ymin,
        x1: xmax,
        y1: ymax,
    } = rect;
    if is_rejected(p0, p1, xmin, ymin, ymax) {
        return Crossings::Count(count);
    }
    if p0.x >= xmax && p1.x >= xmax {
        return Crossings::Count(right_shadow_crossings(count, p0, p1, ymin, ymax));
    }
    let strictly_inside = |p: Point| p.x > xmin && p.x < xmax && p.y > ymin && p.y < ymax;
    if strictly_inside(p0) || strictly_inside(p1) {
        return Crossings::Intersects;
    }
    // The x coordinates where the edge enters and leaves the horizontal band.
    let mut xi0 = p0.x;
    if p0.y < ymin {
        xi0 += (ymin - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
    } else if p0.y > ymax {
        xi0 += (ymax - p0.y) * (p1.x - p0.x) / (p1.y - p0.y);
    }
    let mut xi1 = p1.x;
    if p1.y < ymin {
        xi1 += (ymin - p1.y) * (p0.x - p1.x) / (p0.y - p1.y);
    } else if p1.y > ymax {
        xi1 += (ymax - p1.y) * (p0.x - p1.x) / (p0.y - p1.y);
    }
    if xi0 <= xmin && xi1 <= xmin {
        return Crossings::Count(count);
    }
    if xi0 >= xmax && xi1 >= xmax {
        return Crossings::Count(right_shadow_crossings(count, p0, p1, ymin, ymax));
    }
    Crossings::Intersects
}

/// The crossings of the edge `p0` → `p1` with the right shadow of `circle`,
/// added to `count`.
pub fn circle_crossings(count: i32, circle: &Circle, p0: Point, p1: Point) -> Crossings {
    let c = circle.center;
    let r = circle.radius.abs();
    let (ymin, ymax) = (c.y - r, c.y + r);
    if is_rejected(p0, p1, c.x - r, ymin, ymax) {
        return Crossings::Count(count);
    }
    if p0.x >= c.x + r && p1.x >= c.x + r {
        Crossings::Count(right_shadow_crossings(count, p0, p1, ymin, ymax))
    } else if intersects_circle_segment(c, r, p0, p1) {
        Crossings::Intersects
    } else {
        Crossings::Count(
            count
                + point_crossings(Point::new(c.x, ymin), p0, p1)
                + point_crossings(Point::new(c.x, ymax), p0, p1),
        )
    }
}

/// The crossings of the edge `p0` → `p1` with the right shadow of
/// `ellipse`, added to `count`.
///
/// An edge touching the ellipse intersects it.
pub fn ellipse_crossings(count: i32, ellipse: &Ellipse, p0: Point, p1: Point) -> Crossings {
    let Rect {
        x0: xmin,
        y0: ymin,
        x1: xmax,
        y1: ymax,
    } = ellipse.rect();
    if is_rejected(p0, p1, xmin, ymin, ymax) {
        return Crossings::Count(count);
    }
    if p0.x >= xmax && p1.x >= xmax {
        Crossings::Count(right_shadow_crossings(count, p0, p1, ymin, ymax))
    } else if intersects_ellipse_segment(ellipse.rect(), p0, p1, true) {
        Crossings::Intersects
    } else {
        let xc = (xmin + xmax) / 2.0;
        Crossings::Count(
            count
                + point_crossings(Point::new(xc, ymin), p0, p1)
                + point_crossings(Point::new(xc, ymax), p0, p1),
        )
    }
}

/// The crossings of the edge `p0` → `p1` with the right shadow of the
/// rounded rectangle, added to `count`.
pub fn round_rect_crossings(count: i32, round_rect: &RoundRect, p0: Point, p1: Point) -> Crossings {
    let Rect {
        x0: xmin,
        y0: ymin,
        x1: xmax,
        y1: ymax,
    } = round_rect.rect;
    if is_rejected(p0, p1, xmin, ymin, ymax) {
        return Crossings::Count(count);
    }
    if p0.x >= xmax && p1.x >= xmax {
        return Crossings::Count(right_shadow_crossings(count, p0, p1, ymin, ymax));
    }
    if intersects_round_rect_segment(round_rect, p0, p1) {
        return Crossings::Intersects;
    }
    // The rightmost points of the flat top and bottom sides. Unlike
    // `xmax - arc_width`, these lie on the shape for any arc size.
    let x = xmax - round_rect.radii().x;
    Crossings::Count(
        count
            + point_crossings(Point::new(x, ymin), p0, p1)
            + point_crossings(Point::new(x, ymax), p0, p1),
    )
}

/// The crossings of the edge `p0` → `p1` with the right shadow of
/// `segment`, added to `count`.
///
/// The shadow of a segment is the area right of it; it is crossed when the
/// edge passes one of its end points on the right side of the segment.
pub fn segment_crossings(count: i32, segment: &Segment, p0: Point, p1: Point) -> Crossings {
    let Segment { p0: s1, p1: s2 } = *segment;
    let (xmin, xmax) = (s1.x.min(s2.x), s1.x.max(s2.x));
    let (ymin, ymax) = (s1.y.min(s2.y), s1.y.max(s2.y));
    if is_rejected(p0, p1, xmin, ymin, ymax) {
        return Crossings::Count(count);
    }
    if p0.x >= xmax && p1.x >= xmax {
        return Crossings::Count(right_shadow_crossings(count, p0, p1, ymin, ymax));
    }
    if intersects_segment_segment_with_ends(p0, p1, s1, s2) {
        return Crossings::Intersects;
    }
    let (lo, hi) = if s1.y <= s2.y { (s1, s2) } else { (s2, s1) };
    let side1 = side_of_line(lo, hi, p0, 0.0);
    let side2 = side_of_line(lo, hi, p1, 0.0);
    let mut n = count;
    if side1 > 0 || side2 > 0 {
        let n1 = point_crossings(s1, p0, p1);
        let n2 = if n1 != 0 {
            point_crossings_without_equality(s2, p0, p1)
        } else {
            point_crossings(s2, p0, p1)
        };
        n += n1 + n2;
    }
    Crossings::Count(n)
}

/// A target of the path crossing walk.
pub(crate) trait CrossingTarget {
    /// Add the crossings of the edge `p0` → `p1` to `count`.
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError>;

    /// Whether a path vertex at `p` touches the target.
    fn is_touched_by(&self, _p: Point) -> bool {
        false
    }

    /// Whether the walk stops at the first close with a non-zero count.
    fn stops_at_close(&self) -> bool {
        false
    }
}

struct PointTarget(Point);

impl CrossingTarget for PointTarget {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        Ok(Crossings::Count(count + point_crossings(self.0, p0, p1)))
    }

    fn is_touched_by(&self, p: Point) -> bool {
        p == self.0
    }
}

impl CrossingTarget for Rect {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        Ok(rect_crossings(count, *self, p0, p1))
    }

    fn stops_at_close(&self) -> bool {
        true
    }
}

impl CrossingTarget for Circle {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        Ok(circle_crossings(count, self, p0, p1))
    }
}

impl CrossingTarget for Ellipse {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        Ok(ellipse_crossings(count, self, p0, p1))
    }
}

impl CrossingTarget for RoundRect {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        Ok(round_rect_crossings(count, self, p0, p1))
    }

    fn stops_at_close(&self) -> bool {
        true
    }
}

impl CrossingTarget for Segment {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        Ok(segment_crossings(count, self, p0, p1))
    }

    fn stops_at_close(&self) -> bool {
        true
    }
}

impl CrossingTarget for PathShadow<'_> {
    fn edge_crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        self.crossings(count, p0, p1)
    }

    fn stops_at_close(&self) -> bool {
        true
    }
}

/// The iterator over one curve, flattened, used to recurse into curves.
type CurveIter = FlatteningIter<ElementsIter<arrayvec::IntoIter<PathElement, 2>>>;

/// A path made of a move to `from` and the curve `el`, flattened.
pub(crate) fn flattened_curve(rule: WindingRule, from: Point, el: PathElement) -> CurveIter {
    let mut sub = ArrayVec::<PathElement, 2>::new();
    sub.push(PathElement::move_to(from));
    sub.push(PathElement { from, ..el });
    FlatteningIter::new(ElementsIter::new(sub, rule), SPLINE_APPROXIMATION_RATIO)
}

/// Walk `iter` and accumulate the crossings of its edges with `target`.
pub(crate) fn walk<T, I>(
    target: &T,
    count: i32,
    mut iter: I,
    mode: CrossingMode,
) -> Result<Crossings, PathError>
where
    T: CrossingTarget + ?Sized,
    I: PathIterator,
{
    let Some(first) = iter.next() else {
        return Ok(Crossings::Count(0));
    };
    if first.kind != PathElementType::MoveTo {
        log::debug!("crossing query on a path starting with {:?}", first.kind);
        return Err(PathError::InvalidArgument(
            "missing initial move in path definition",
        ));
    }
    let rule = iter.winding_rule();
    let mut mov = first.to;
    let mut cur = mov;
    let mut n = count;
    for el in iter {
        match el.kind {
            PathElementType::MoveTo => {
                mov = el.to;
                cur = mov;
            }
            PathElementType::LineTo => {
                if target.is_touched_by(el.to) {
                    return Ok(Crossings::Intersects);
                }
                match target.edge_crossings(n, cur, el.to)? {
                    Crossings::Count(c) => n = c,
                    Crossings::Intersects => return Ok(Crossings::Intersects),
                }
                cur = el.to;
            }
            PathElementType::QuadTo | PathElementType::CurveTo => {
                if target.is_touched_by(el.to) {
                    return Ok(Crossings::Intersects);
                }
                let sub = flattened_curve(rule, cur, el);
                match walk(target, n, sub, CrossingMode::Standard)? {
                    Crossings::Count(c) => n = c,
                    Crossings::Intersects => return Ok(Crossings::Intersects),
                }
                cur = el.to;
            }
            PathElementType::Close => {
                if cur != mov {
                    if target.is_touched_by(mov) {
                        return Ok(Crossings::Intersects);
                    }
                    match target.edge_crossings(n, cur, mov)? {
                        Crossings::Count(c) => n = c,
                        Crossings::Intersects => return Ok(Crossings::Intersects),
                    }
                }
                if target.stops_at_close() && n != 0 {
                    return Ok(Crossings::Count(n));
                }
                cur = mov;
            }
        }
    }
    if cur != mov {
        match mode {
            CrossingMode::Standard => {}
            CrossingMode::AutoClose => {
                if target.is_touched_by(mov) {
                    return Ok(Crossings::Intersects);
                }
                return target.edge_crossings(n, cur, mov);
            }
            CrossingMode::SimpleIntersectionWhenNotPolygon => n = 0,
        }
    }
    Ok(Crossings::Count(n))
}

/// The crossings of the path described by `iter` with the ray from `p`
/// towards positive x, added to `count`.
///
/// A path vertex exactly at `p` (other than the initial move) is reported
/// as [`Crossings::Intersects`].
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_point_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    p: Point,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(&PointTarget(p), count, iter, mode)
}

/// The crossings of the path described by `iter` with the right shadow of
/// `segment`, added to `count`.
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_segment_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    segment: &Segment,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(segment, count, iter, mode)
}

/// The crossings of the path described by `iter` with the right shadow of
/// `rect`, added to `count`.
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_rect_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    rect: Rect,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(&rect, count, iter, mode)
}

/// The crossings of the path described by `iter` with the right shadow of
/// `circle`, added to `count`.
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_circle_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    circle: &Circle,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(circle, count, iter, mode)
}

/// The crossings of the path described by `iter` with the right shadow of
/// `ellipse`, added to `count`.
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_ellipse_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    ellipse: &Ellipse,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(ellipse, count, iter, mode)
}

/// The crossings of the path described by `iter` with the right shadow of
/// `round_rect`, added to `count`.
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_round_rect_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    round_rect: &RoundRect,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(round_rect, count, iter, mode)
}

/// The crossings of the path described by `iter` with the shadow of another
/// path, added to `count`.
///
/// # Errors
///
/// Returns [`PathError::InvalidArgument`] when `iter` does not start with a
/// move.
pub fn path_shadow_crossings<I: PathIterator>(
    count: i32,
    iter: I,
    shadow: &PathShadow<'_>,
    mode: CrossingMode,
) -> Result<Crossings, PathError> {
    walk(shadow, count, iter, mode)
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;
    use crate::{Path, Shape};

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Vec<PathElement> {
        vec![
            PathElement::move_to((x0, y0)),
            PathElement::line_to((x0, y0), (x1, y0)),
            PathElement::line_to((x1, y0), (x1, y1)),
            PathElement::line_to((x1, y1), (x0, y1)),
            PathElement::close((x0, y1), (x0, y0)),
        ]
    }

    fn iter(els: Vec<PathElement>) -> ElementsIter<vec::IntoIter<PathElement>> {
        ElementsIter::new(els, WindingRule::NonZero)
    }

    /// The path used throughout the crossing tests.
    fn reference_path() -> Path {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 1.0)).unwrap();
        path.quad_to((3.0, 0.0), (4.0, 3.0)).unwrap();
        path.curve_to((5.0, -1.0), (6.0, 5.0), (7.0, -5.0)).unwrap();
        path
    }

    #[test]
    fn point_crossing_of_one_edge() {
        let up = (Point::new(1.0, 0.0), Point::new(1.0, 2.0));
        assert_eq!(point_crossings(Point::new(0.0, 1.0), up.0, up.1), 1);
        assert_eq!(point_crossings(Point::new(0.0, 1.0), up.1, up.0), -1);
        assert_eq!(point_crossings(Point::new(2.0, 1.0), up.0, up.1), 0);
        // The lower end is included, the upper one is not.
        assert_eq!(point_crossings(Point::new(0.0, 0.0), up.0, up.1), 1);
        assert_eq!(point_crossings(Point::new(0.0, 2.0), up.0, up.1), 0);
        // Both ends are included, and so is the edge itself.
        let inclusive = |p: Point| point_crossings_without_equality(p, up.0, up.1);
        assert_eq!(inclusive(Point::new(0.0, 0.0)), 1);
        assert_eq!(inclusive(Point::new(0.0, 2.0)), 1);
        assert_eq!(inclusive(Point::new(1.0, 1.0)), 1);
        assert_eq!(inclusive(Point::new(2.0, 1.0)), 0);
        assert_eq!(inclusive(Point::new(0.0, 3.0)), 0);
        assert_eq!(point_crossings_without_equality(Point::new(0.0, 1.0), up.1, up.0), -1);
        // A slanted edge is crossed left of its intercept only.
        let a = Point::new(0.0, 0.0);
        let b = Point::new(4.0, 4.0);
        assert_eq!(point_crossings(Point::new(1.0, 2.0), a, b), 1);
        assert_eq!(point_crossings(Point::new(3.0, 2.0), a, b), 0);
    }

    #[test]
    fn rect_crossing_of_one_edge() {
        let r = Rect::new(0.0, 0.0, 2.0, 2.0);
        // Right of the rectangle, spanning it fully.
        let c = rect_crossings(0, r, Point::new(3.0, -1.0), Point::new(3.0, 3.0));
        assert_eq!(c, Crossings::Count(2));
        let c = rect_crossings(0, r, Point::new(3.0, 3.0), Point::new(3.0, -1.0));
        assert_eq!(c, Crossings::Count(-2));
        // Through the rectangle.
        let c = rect_crossings(5, r, Point::new(1.0, -1.0), Point::new(1.0, 3.0));
        assert_eq!(c, Crossings::Intersects);
        // Left of it.
        let c = rect_crossings(5, r, Point::new(-1.0, -1.0), Point::new(-1.0, 3.0));
        assert_eq!(c, Crossings::Count(5));
        // Passing a corner on the right.
        let c = rect_crossings(0, r, Point::new(1.0, -3.0), Point::new(5.0, 1.0));
        assert_eq!(c, Crossings::Count(1));
    }

    #[test]
    fn engine_rejects_missing_move() {
        let els = vec![PathElement::line_to((0.0, 0.0), (1.0, 1.0))];
        let res = path_point_crossings(0, iter(els), Point::ZERO, CrossingMode::Standard);
        assert_eq!(
            res,
            Err(PathError::InvalidArgument(
                "missing initial move in path definition"
            ))
        );
        let res = path_point_crossings(3, iter(Vec::new()), Point::ZERO, CrossingMode::Standard);
        assert_eq!(res, Ok(Crossings::Count(0)));
    }

    #[test]
    fn point_inside_square() {
        let els = square(0.0, 0.0, 4.0, 4.0);
        let inside = path_point_crossings(0, iter(els.clone()), Point::new(1.0, 1.0), CrossingMode::Standard);
        assert!(matches!(inside, Ok(Crossings::Count(c)) if c & 1 != 0));
        let outside =
            path_point_crossings(0, iter(els.clone()), Point::new(5.0, 1.0), CrossingMode::Standard);
        assert_eq!(outside, Ok(Crossings::Count(0)));
        // A vertex is an intersection.
        let vertex = path_point_crossings(0, iter(els), Point::new(4.0, 4.0), CrossingMode::Standard);
        assert_eq!(vertex, Ok(Crossings::Intersects));
    }

    #[test]
    fn open_path_modes() {
        // An open "U" shape; closing it makes a square.
        let els = vec![
            PathElement::move_to((0.0, 0.0)),
            PathElement::line_to((0.0, 0.0), (4.0, 0.0)),
            PathElement::line_to((4.0, 0.0), (4.0, 4.0)),
            PathElement::line_to((4.0, 4.0), (0.0, 4.0)),
        ];
        let p = Point::new(1.0, 1.0);
        let standard = path_point_crossings(0, iter(els.clone()), p, CrossingMode::Standard);
        assert_eq!(standard, Ok(Crossings::Count(1)));
        let auto = path_point_crossings(0, iter(els.clone()), p, CrossingMode::AutoClose);
        assert_eq!(auto, Ok(Crossings::Count(1)));
        let simple = path_point_crossings(
            0,
            iter(els.clone()),
            p,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        );
        assert_eq!(simple, Ok(Crossings::Count(0)));
        // Auto-closing reaches the initial move.
        let at_start = path_point_crossings(0, iter(els), Point::ZERO, CrossingMode::AutoClose);
        assert_eq!(at_start, Ok(Crossings::Intersects));
    }

    #[test]
    fn reference_path_point_crossings() {
        let path = reference_path();
        let crossings =
            |p: Point, mode| path_point_crossings(0, path.path_iter(), p, mode).unwrap();
        // On the first line, which is not counted; the cubic passes
        // downwards on the right.
        assert_eq!(
            crossings(Point::new(0.5, 0.5), CrossingMode::Standard),
            Crossings::Count(-1)
        );
        // Vertices of the path.
        assert_eq!(
            crossings(Point::new(1.0, 1.0), CrossingMode::Standard),
            Crossings::Intersects
        );
        assert_eq!(
            crossings(Point::new(7.0, -5.0), CrossingMode::Standard),
            Crossings::Intersects
        );
        // Far away.
        assert_eq!(
            crossings(Point::new(-10.0, 20.0), CrossingMode::AutoClose),
            Crossings::Count(0)
        );
        assert_eq!(
            crossings(Point::new(20.0, 0.0), CrossingMode::AutoClose),
            Crossings::Count(0)
        );
        // The path is open, so the simple mode hides all counts.
        assert_eq!(
            crossings(
                Point::new(-1.0, -1.0),
                CrossingMode::SimpleIntersectionWhenNotPolygon
            ),
            Crossings::Count(0)
        );
    }

    #[test]
    fn reference_path_shape_crossings() {
        let path = reference_path();
        // A rectangle enclosing the whole path.
        let big = Rect::new(-10.0, -10.0, 20.0, 20.0);
        assert_eq!(
            path_rect_crossings(0, path.path_iter(), big, CrossingMode::Standard),
            Ok(Crossings::Intersects)
        );
        // A rectangle far to the left.
        let left = Rect::new(-20.0, -1.0, -10.0, 1.0);
        let c = path_rect_crossings(0, path.path_iter(), left, CrossingMode::AutoClose).unwrap();
        assert!(!c.is_intersects());
        // A small circle at a vertex.
        let circle = Circle::new((1.0, 1.0), 0.1);
        assert_eq!(
            path_circle_crossings(0, path.path_iter(), &circle, CrossingMode::Standard),
            Ok(Crossings::Intersects)
        );
        // A segment crossing the first line.
        let seg = Segment::new((0.0, 1.0), (1.0, 0.0));
        assert_eq!(
            path_segment_crossings(0, path.path_iter(), &seg, CrossingMode::Standard),
            Ok(Crossings::Intersects)
        );
        // A segment far to the right.
        let seg = Segment::new((20.0, 0.0), (21.0, 1.0));
        assert_eq!(
            path_segment_crossings(
                0,
                path.path_iter(),
                &seg,
                CrossingMode::SimpleIntersectionWhenNotPolygon
            ),
            Ok(Crossings::Count(0))
        );
    }

    #[test]
    fn shapes_inside_a_square() {
        let els = square(0.0, 0.0, 10.0, 10.0);
        let rect = Rect::new(4.0, 4.0, 6.0, 6.0);
        let c = path_rect_crossings(0, iter(els.clone()), rect, CrossingMode::Standard);
        assert_eq!(c, Ok(Crossings::Count(2)));
        let circle = Circle::new((5.0, 5.0), 1.0);
        let c = path_circle_crossings(0, iter(els.clone()), &circle, CrossingMode::Standard);
        assert_eq!(c, Ok(Crossings::Count(2)));
        let ellipse = Ellipse::from_rect(Rect::new(3.0, 4.0, 7.0, 6.0));
        let c = path_ellipse_crossings(0, iter(els.clone()), &ellipse, CrossingMode::Standard);
        assert_eq!(c, Ok(Crossings::Count(2)));
        let rr = RoundRect::new(Rect::new(3.0, 3.0, 7.0, 7.0), 1.0, 1.0);
        let c = path_round_rect_crossings(0, iter(els.clone()), &rr, CrossingMode::Standard);
        assert_eq!(c, Ok(Crossings::Count(2)));
        let seg = Segment::new((4.0, 4.0), (6.0, 6.0));
        let c = path_segment_crossings(0, iter(els), &seg, CrossingMode::Standard);
        assert_eq!(c, Ok(Crossings::Count(2)));
    }

    #[test]
    fn is_hit_masks() {
        assert!(Crossings::Intersects.is_hit(2));
        assert!(!Crossings::Intersects.is_strictly_inside(2));
        assert!(Crossings::Count(2).is_hit(2));
        assert!(!Crossings::Count(4).is_hit(2));
        assert!(Crossings::Count(4).is_hit(-1));
        assert!(Crossings::Count(-2).is_strictly_inside(-1));
        assert_eq!(Crossings::Count(3).count(), Some(3));
        assert_eq!(Crossings::Intersects.count(), None);
    }
}
