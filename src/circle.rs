// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Implementation of circle shape.

use crate::crossings::{path_circle_crossings, CrossingMode};
use crate::ellipse::EllipsePathIter;
use crate::{
    distance_squared_segment_point, Ellipse, Intersects, Path, PathError, PathIterator, Point,
    Rect, RoundRect, Segment, Shape, Vec2,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A circle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    /// The center.
    pub center: Point,
    /// The radius.
    pub radius: f64,
}

impl Circle {
    /// A new circle from center and radius.
    ///
    /// A negative radius is stored as its absolute value.
    #[inline]
    pub fn new(center: impl Into<Point>, radius: f64) -> Circle {
        Circle {
            center: center.into(),
            radius: radius.abs(),
        }
    }
}

/// Whether the segment `p0`-`p1` comes strictly closer than `radius` to
/// `center`.
#[inline]
pub(crate) fn intersects_circle_segment(center: Point, radius: f64, p0: Point, p1: Point) -> bool {
    distance_squared_segment_point(p0, p1, center) < radius * radius
}

impl Shape for Circle {
    type PathIter<'iter> = EllipsePathIter;

    fn path_iter(&self) -> EllipsePathIter {
        EllipsePathIter::new(self.bounding_box())
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        let r = self.radius.abs();
        let Point { x, y } = self.center;
        Rect::new(x - r, y - r, x + r, y + r)
    }

    #[inline]
    fn contains(&self, pt: Point) -> bool {
        pt.distance_squared(self.center) <= self.radius * self.radius
    }

    /// Tests the corner of `rect` farthest from the center.
    fn contains_rect(&self, rect: Rect) -> bool {
        let rc = rect.center();
        let corner = Point::new(
            if self.center.x <= rc.x { rect.x1 } else { rect.x0 },
            if self.center.y <= rc.y { rect.y1 } else { rect.y0 },
        );
        self.contains(corner)
    }

    fn closest_point(&self, pt: Point) -> Point {
        let v = pt - self.center;
        if v.length_squared() <= self.radius * self.radius {
            return pt;
        }
        self.center + v.normalize() * self.radius
    }

    fn farthest_point(&self, pt: Point) -> Point {
        let v = pt - self.center;
        if v.x == 0.0 && v.y == 0.0 {
            return self.center + Vec2::new(self.radius, 0.0);
        }
        self.center - v.normalize() * self.radius
    }

    #[inline]
    fn translate(&mut self, v: Vec2) {
        self.center += v;
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.radius <= 0.0
    }

    fn intersects_path_iter<I: PathIterator>(&self, iter: I) -> Result<bool, PathError> {
        let mask = iter.winding_rule().crossing_mask(2);
        let crossings =
            path_circle_crossings(0, iter, self, CrossingMode::SimpleIntersectionWhenNotPolygon)?;
        Ok(crossings.is_hit(mask))
    }
}

impl Intersects<Circle> for Circle {
    #[inline]
    fn intersects(&self, other: &Circle) -> bool {
        let r = self.radius + other.radius;
        self.center.distance_squared(other.center) < r * r
    }
}

impl Intersects<Rect> for Circle {
    fn intersects(&self, other: &Rect) -> bool {
        let Point { x, y } = self.center;
        let dx = if x < other.x0 {
            other.x0 - x
        } else if x > other.x1 {
            x - other.x1
        } else {
            0.0
        };
        let dy = if y < other.y0 {
            other.y0 - y
        } else if y > other.y1 {
            y - other.y1
        } else {
            0.0
        };
        dx * dx + dy * dy < self.radius * self.radius
    }
}

impl Intersects<Segment> for Circle {
    #[inline]
    fn intersects(&self, other: &Segment) -> bool {
        intersects_circle_segment(self.center, self.radius, other.p0, other.p1)
    }
}

impl Intersects<Ellipse> for Circle {
    #[inline]
    fn intersects(&self, other: &Ellipse) -> bool {
        other.intersects(self)
    }
}

impl Intersects<RoundRect> for Circle {
    #[inline]
    fn intersects(&self, other: &RoundRect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Path> for Circle {
    fn intersects(&self, other: &Path) -> bool {
        matches!(self.intersects_path_iter(other.path_iter()), Ok(true))
    }
}
