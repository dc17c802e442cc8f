// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of axis-aligned ellipses.

use crate::crossings::{path_ellipse_crossings, CrossingMode};
use crate::{
    farthest_point_on_segment, Circle, Intersects, Path, PathElement, PathError, PathIterator,
    Point, Rect, RoundRect, Segment, Shape, Vec2, WindingRule,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The distance of the Bézier control points from the on-curve points, for a
/// quarter of a unit circle.
pub(crate) const KAPPA: f64 = 0.552_284_749_830_793_4;

/// The maximum number of bisection steps of the ellipse root finders.
///
/// Enough to exhaust the precision of an `f64` interval.
const MAX_BISECTIONS: usize = 1074;

/// An axis-aligned ellipse, described by its bounding rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ellipse {
    rect: Rect,
}

impl Ellipse {
    /// Create an ellipse from its center and its radii along the x and y
    /// axes.
    #[inline]
    pub fn new(center: impl Into<Point>, radii: impl Into<Vec2>) -> Ellipse {
        let center = center.into();
        let radii = radii.into();
        Ellipse::from_rect(Rect::from_center_size(center, 2.0 * radii.x, 2.0 * radii.y))
    }

    /// Create the ellipse inscribed in `rect`.
    #[inline]
    pub fn from_rect(rect: Rect) -> Ellipse {
        Ellipse { rect: rect.abs() }
    }

    /// The bounding rectangle of the ellipse.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Replace the bounding rectangle of the ellipse.
    #[inline]
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect.abs();
    }

    /// The center of the ellipse.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// The radii along the x and y axes.
    #[inline]
    pub fn radii(&self) -> Vec2 {
        Vec2::new(self.rect.width() / 2.0, self.rect.height() / 2.0)
    }
}

/// Whether `p` is inside the ellipse inscribed in `rect`.
///
/// Works in the frame where the ellipse is the circle of radius 0.5 centered
/// at the origin.
pub(crate) fn ellipse_contains(rect: Rect, p: Point) -> bool {
    let (w, h) = (rect.width(), rect.height());
    if w <= 0.0 || h <= 0.0 {
        return false;
    }
    let nx = (p.x - rect.x0) / w - 0.5;
    let ny = (p.y - rect.y0) / h - 0.5;
    nx * nx + ny * ny <= 0.25
}

/// Whether the segment `p0`-`p1` intersects the ellipse inscribed in `rect`.
///
/// When `touching` is set, a segment tangent to the ellipse intersects it.
pub(crate) fn intersects_ellipse_segment(rect: Rect, p0: Point, p1: Point, touching: bool) -> bool {
    let (ea, eb) = (rect.width() / 2.0, rect.height() / 2.0);
    if ea <= 0.0 || eb <= 0.0 {
        return false;
    }
    let c = rect.center();
    let (a2, b2) = (ea * ea, eb * eb);
    let v = p1 - p0;
    let d = p0 - c;
    let qa = v.x * v.x / a2 + v.y * v.y / b2;
    let qb = 2.0 * (d.x * v.x / a2 + d.y * v.y / b2);
    let qc = d.x * d.x / a2 + d.y * d.y / b2 - 1.0;
    if qa == 0.0 {
        return qc < 0.0 || (touching && qc == 0.0);
    }
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return false;
    }
    if disc == 0.0 {
        let t = -qb / (2.0 * qa);
        return touching && (0.0..=1.0).contains(&t);
    }
    let sq = disc.sqrt();
    let t1 = (-qb - sq) / (2.0 * qa);
    let t2 = (-qb + sq) / (2.0 * qa);
    (t1 >= 0.0 || t2 >= 0.0) && (t1 <= 1.0 || t2 <= 1.0)
}

/// The point of the solid ellipse inscribed in `rect` nearest to `p`.
pub(crate) fn closest_point_on_solid_ellipse(rect: Rect, p: Point) -> Point {
    let c = rect.center();
    let (a, b) = (rect.width() / 2.0, rect.height() / 2.0);
    let d = p - c;
    if a > 0.0 && b > 0.0 && (d.x * d.x) / (a * a) + (d.y * d.y) / (b * b) <= 1.0 {
        return p;
    }
    // Work in the first quadrant, with the major axis along x.
    let swap = a < b;
    let (e0, e1, y0, y1) = if swap {
        (b, a, d.y.abs(), d.x.abs())
    } else {
        (a, b, d.x.abs(), d.y.abs())
    };
    let (x0, x1) = closest_in_quadrant(e0, e1, y0, y1);
    let (rx, ry) = if swap { (x1, x0) } else { (x0, x1) };
    Point::new(c.x + rx.copysign(d.x), c.y + ry.copysign(d.y))
}

/// The nearest point of the quarter ellipse with semi-axes `e0 >= e1` to the
/// point `(y0, y1)` of the first quadrant, which lies outside the ellipse.
fn closest_in_quadrant(e0: f64, e1: f64, y0: f64, y1: f64) -> (f64, f64) {
    if e1 <= 0.0 {
        // The ellipse is a segment along x.
        return (y0.min(e0.max(0.0)), 0.0);
    }
    if y1 > 0.0 {
        if y0 > 0.0 {
            let z0 = y0 / e0;
            let z1 = y1 / e1;
            let g = z0 * z0 + z1 * z1 - 1.0;
            if g != 0.0 {
                let r0 = (e0 / e1) * (e0 / e1);
                let s = ellipse_normal_root(r0, z0, z1, g);
                (r0 * y0 / (s + r0), y1 / (s + 1.0))
            } else {
                (y0, y1)
            }
        } else {
            (0.0, y1.min(e1))
        }
    } else {
        let numer = e0 * y0;
        let denom = e0 * e0 - e1 * e1;
        if numer < denom {
            let xde = numer / denom;
            (e0 * xde, e1 * (1.0 - xde * xde).sqrt())
        } else {
            (e0.min(y0), 0.0)
        }
    }
}

/// Bisection for the root of the normal equation of an ellipse.
fn ellipse_normal_root(r0: f64, z0: f64, z1: f64, g: f64) -> f64 {
    let n0 = r0 * z0;
    let mut s0 = z1 - 1.0;
    let mut s1 = if g < 0.0 { 0.0 } else { n0.hypot(z1) - 1.0 };
    let mut s = 0.0;
    for _ in 0..MAX_BISECTIONS {
        s = 0.5 * (s0 + s1);
        if s == s0 || s == s1 {
            break;
        }
        let ratio0 = n0 / (s + r0);
        let ratio1 = z1 / (s + 1.0);
        let gs = ratio0 * ratio0 + ratio1 * ratio1 - 1.0;
        if gs > 0.0 {
            s0 = s;
        } else if gs < 0.0 {
            s1 = s;
        } else {
            break;
        }
    }
    s
}

/// The point of the ellipse inscribed in `rect` farthest from `p`.
pub(crate) fn farthest_point_on_ellipse(rect: Rect, p: Point) -> Point {
    let c = rect.center();
    let (a, b) = (rect.width() / 2.0, rect.height() / 2.0);
    if a <= 0.0 && b <= 0.0 {
        return c;
    }
    if b <= 0.0 {
        return farthest_point_on_segment(Point::new(c.x - a, c.y), Point::new(c.x + a, c.y), p);
    }
    if a <= 0.0 {
        return farthest_point_on_segment(Point::new(c.x, c.y - b), Point::new(c.x, c.y + b), p);
    }
    let d = p - c;
    if d.x == 0.0 && d.y == 0.0 {
        return if a >= b {
            Point::new(c.x + a, c.y)
        } else {
            Point::new(c.x, c.y + b)
        };
    }
    let (a2, b2) = (a * a, b * b);
    // A point on the minor axis may see two farthest points off the axes.
    if a > b && d.x == 0.0 {
        let t = d.y * b2 / (b2 - a2);
        if t.abs() < b {
            return Point::new(c.x + a * (1.0 - t * t / b2).sqrt(), c.y + t);
        }
    } else if b > a && d.y == 0.0 {
        let t = d.x * a2 / (a2 - b2);
        if t.abs() < a {
            return Point::new(c.x + t, c.y + b * (1.0 - t * t / a2).sqrt());
        }
    }
    // Solve `sum (d_i e_i / (e_i² - λ))² = 1` for the Lagrange multiplier
    // λ > max(a², b²), where the left side decreases monotonically.
    let m = a2.max(b2);
    let mut lo = m;
    let mut hi = m + (d.x * d.x * a2 + d.y * d.y * b2).sqrt();
    let f = |l: f64| {
        let fx = d.x * a / (a2 - l);
        let fy = d.y * b / (b2 - l);
        fx * fx + fy * fy
    };
    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (lo + hi);
        if mid == lo || mid == hi {
            break;
        }
        if f(mid) > 1.0 {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Point::new(c.x + d.x * a2 / (a2 - hi), c.y + d.y * b2 / (b2 - hi))
}

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct EllipsePathIter {
    rect: Rect,
    ix: usize,
}

impl EllipsePathIter {
    pub(crate) fn new(rect: Rect) -> Self {
        let empty = rect.width() <= 0.0 || rect.height() <= 0.0;
        EllipsePathIter {
            rect,
            ix: if empty { 6 } else { 0 },
        }
    }
}

impl Iterator for EllipsePathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let Point { x: cx, y: cy } = self.rect.center();
        let kx = KAPPA * self.rect.width() / 2.0;
        let ky = KAPPA * self.rect.height() / 2.0;
        self.ix += 1;
        match self.ix {
            1 => Some(PathElement::move_to((x1, cy))),
            2 => Some(PathElement::curve_to(
                (x1, cy),
                (x1, cy + ky),
                (cx + kx, y1),
                (cx, y1),
            )),
            3 => Some(PathElement::curve_to(
                (cx, y1),
                (cx - kx, y1),
                (x0, cy + ky),
                (x0, cy),
            )),
            4 => Some(PathElement::curve_to(
                (x0, cy),
                (x0, cy - ky),
                (cx - kx, y0),
                (cx, y0),
            )),
            5 => Some(PathElement::curve_to(
                (cx, y0),
                (cx + kx, y0),
                (x1, cy - ky),
                (x1, cy),
            )),
            6 => Some(PathElement::close((x1, cy), (x1, cy))),
            _ => None,
        }
    }
}

impl PathIterator for EllipsePathIter {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

impl Shape for Ellipse {
    type PathIter<'iter> = EllipsePathIter;

    fn path_iter(&self) -> EllipsePathIter {
        EllipsePathIter::new(self.rect)
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    #[inline]
    fn contains(&self, pt: Point) -> bool {
        ellipse_contains(self.rect, pt)
    }

    /// Tests the corner of `rect` farthest from the center.
    fn contains_rect(&self, rect: Rect) -> bool {
        let c = self.center();
        let rc = rect.center();
        let corner = Point::new(
            if c.x <= rc.x { rect.x1 } else { rect.x0 },
            if c.y <= rc.y { rect.y1 } else { rect.y0 },
        );
        self.contains(corner)
    }

    fn closest_point(&self, pt: Point) -> Point {
        closest_point_on_solid_ellipse(self.rect, pt)
    }

    fn farthest_point(&self, pt: Point) -> Point {
        farthest_point_on_ellipse(self.rect, pt)
    }

    #[inline]
    fn translate(&mut self, v: Vec2) {
        self.rect = self.rect + v;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    fn intersects_path_iter<I: PathIterator>(&self, iter: I) -> Result<bool, PathError> {
        let mask = iter.winding_rule().crossing_mask(2);
        let crossings =
            path_ellipse_crossings(0, iter, self, CrossingMode::SimpleIntersectionWhenNotPolygon)?;
        Ok(crossings.is_hit(mask))
    }
}

impl Intersects<Ellipse> for Ellipse {
    fn intersects(&self, other: &Ellipse) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        // Map `self` onto the unit circle at the origin.
        let r = self.radii();
        let mapped = Rect::from_origin_size(
            (
                (other.rect.x0 - self.rect.x0) / r.x - 1.0,
                (other.rect.y0 - self.rect.y0) / r.y - 1.0,
            ),
            other.rect.width() / r.x,
            other.rect.height() / r.y,
        );
        closest_point_on_solid_ellipse(mapped, Point::ORIGIN).distance_squared(Point::ORIGIN) < 1.0
    }
}

impl Intersects<Circle> for Ellipse {
    fn intersects(&self, other: &Circle) -> bool {
        if self.is_empty() {
            return false;
        }
        let p = closest_point_on_solid_ellipse(self.rect, other.center);
        p.distance_squared(other.center) < other.radius * other.radius
    }
}

impl Intersects<Rect> for Ellipse {
    fn intersects(&self, other: &Rect) -> bool {
        let (w, h) = (self.rect.width(), self.rect.height());
        if w <= 0.0 || h <= 0.0 {
            return false;
        }
        let c = self.center();
        let nx = (crate::clamp(c.x, other.x0, other.x1) - c.x) / w;
        let ny = (crate::clamp(c.y, other.y0, other.y1) - c.y) / h;
        nx * nx + ny * ny < 0.25
    }
}

impl Intersects<Segment> for Ellipse {
    #[inline]
    fn intersects(&self, other: &Segment) -> bool {
        intersects_ellipse_segment(self.rect, other.p0, other.p1, false)
    }
}

impl Intersects<RoundRect> for Ellipse {
    #[inline]
    fn intersects(&self, other: &RoundRect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Path> for Ellipse {
    fn intersects(&self, other: &Path) -> bool {
        matches!(self.intersects_path_iter(other.path_iter()), Ok(true))
    }
}
