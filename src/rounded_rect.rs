// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle with rounded corners.

use crate::crossings::{path_round_rect_crossings, CrossingMode};
use crate::ellipse::{
    closest_point_on_solid_ellipse, farthest_point_on_ellipse, intersects_ellipse_segment, KAPPA,
};
use crate::segment::intersects_rect_segment;
use crate::{
    Circle, Ellipse, Intersects, Path, PathElement, PathError, PathIterator, Point, Rect,
    Segment, Shape, Vec2, WindingRule,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A rectangle with elliptical corners.
///
/// The arc dimensions are the full width and height of the ellipse that
/// rounds each corner. They are clamped to the size of the rectangle
/// wherever they are used, so the stored values may exceed it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRect {
    /// The bounding rectangle.
    pub rect: Rect,
    /// The width of the corner arcs.
    pub arc_width: f64,
    /// The height of the corner arcs.
    pub arc_height: f64,
}

impl RoundRect {
    /// A new rounded rectangle.
    #[inline]
    pub fn new(rect: Rect, arc_width: f64, arc_height: f64) -> RoundRect {
        RoundRect {
            rect: rect.abs(),
            arc_width,
            arc_height,
        }
    }

    /// A new rounded rectangle from its corner coordinates and arc
    /// dimensions.
    #[inline]
    pub fn from_coords(x0: f64, y0: f64, x1: f64, y1: f64, arc_width: f64, arc_height: f64) -> Self {
        RoundRect::new(Rect::new(x0, y0, x1, y1), arc_width, arc_height)
    }

    /// The radii of the corner ellipses, after clamping to the rectangle.
    #[inline]
    pub fn radii(&self) -> Vec2 {
        Vec2::new(
            self.rect.width().min(self.arc_width.abs()) / 2.0,
            self.rect.height().min(self.arc_height.abs()) / 2.0,
        )
    }

    /// The center of the rectangle.
    #[inline]
    pub fn center(&self) -> Point {
        self.rect.center()
    }

    /// The horizontal and the vertical bar of the central cross.
    fn bands(&self) -> [Rect; 2] {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let r = self.radii();
        [
            Rect::new(x0, y0 + r.y, x1, y1 - r.y),
            Rect::new(x0 + r.x, y0, x1 - r.x, y1),
        ]
    }

    /// The bounding rectangles of the four corner ellipses, counterclockwise
    /// from the minimum corner.
    fn corner_rects(&self) -> [Rect; 4] {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let r = self.radii();
        let (w, h) = (2.0 * r.x, 2.0 * r.y);
        [
            Rect::new(x0, y0, x0 + w, y0 + h),
            Rect::new(x1 - w, y0, x1, y0 + h),
            Rect::new(x1 - w, y1 - h, x1, y1),
            Rect::new(x0, y1 - h, x0 + w, y1),
        ]
    }

    fn corners(&self) -> [Ellipse; 4] {
        self.corner_rects().map(Ellipse::from_rect)
    }
}

/// Whether the segment `p0`-`p1` intersects the rounded rectangle.
pub(crate) fn intersects_round_rect_segment(round_rect: &RoundRect, p0: Point, p1: Point) -> bool {
    round_rect
        .bands()
        .iter()
        .any(|band| intersects_rect_segment(*band, p0, p1))
        || round_rect
            .corner_rects()
            .iter()
            .any(|corner| intersects_ellipse_segment(*corner, p0, p1, false))
}

#[doc(hidden)]
#[derive(Clone, Debug)]
pub struct RoundRectPathIter {
    rect: Rect,
    radii: Vec2,
    ix: usize,
}

impl Iterator for RoundRectPathIter {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let Rect { x0, y0, x1, y1 } = self.rect;
        let Vec2 { x: rx, y: ry } = self.radii;
        // Distances of the control points from the corners.
        let (cx, cy) = ((1.0 - KAPPA) * rx, (1.0 - KAPPA) * ry);
        self.ix += 1;
        match self.ix {
            1 => Some(PathElement::move_to((x0, y0 + ry))),
            2 => Some(PathElement::line_to((x0, y0 + ry), (x0, y1 - ry))),
            3 => Some(PathElement::curve_to(
                (x0, y1 - ry),
                (x0, y1 - cy),
                (x0 + cx, y1),
                (x0 + rx, y1),
            )),
            4 => Some(PathElement::line_to((x0 + rx, y1), (x1 - rx, y1))),
            5 => Some(PathElement::curve_to(
                (x1 - rx, y1),
                (x1 - cx, y1),
                (x1, y1 - cy),
                (x1, y1 - ry),
            )),
            6 => Some(PathElement::line_to((x1, y1 - ry), (x1, y0 + ry))),
            7 => Some(PathElement::curve_to(
                (x1, y0 + ry),
                (x1, y0 + cy),
                (x1 - cx, y0),
                (x1 - rx, y0),
            )),
            8 => Some(PathElement::line_to((x1 - rx, y0), (x0 + rx, y0))),
            9 => Some(PathElement::curve_to(
                (x0 + rx, y0),
                (x0 + cx, y0),
                (x0, y0 + cy),
                (x0, y0 + ry),
            )),
            10 => Some(PathElement::close((x0, y0 + ry), (x0, y0 + ry))),
            _ => None,
        }
    }
}

impl PathIterator for RoundRectPathIter {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        WindingRule::NonZero
    }
}

impl Shape for RoundRect {
    type PathIter<'iter> = RoundRectPathIter;

    fn path_iter(&self) -> RoundRectPathIter {
        RoundRectPathIter {
            rect: self.rect,
            radii: self.radii(),
            ix: if self.is_empty() { 10 } else { 0 },
        }
    }

    #[inline]
    fn bounding_box(&self) -> Rect {
        self.rect
    }

    /// The maximum borders of the rectangle are outside; a rectangle with
    /// no extent contains only its corner.
    fn contains(&self, pt: Point) -> bool {
        let Rect { x0, y0, x1, y1 } = self.rect;
        if self.rect.width() <= 0.0 && self.rect.height() <= 0.0 {
            return pt.x == x0 && pt.y == y0;
        }
        if pt.x < x0 || pt.y < y0 || pt.x >= x1 || pt.y >= y1 {
            return false;
        }
        let r = self.radii();
        if pt.x >= x0 + r.x && pt.x < x1 - r.x {
            return true;
        }
        if pt.y >= y0 + r.y && pt.y < y1 - r.y {
            return true;
        }
        let cx = if pt.x < x0 + r.x { x0 + r.x } else { x1 - r.x };
        let cy = if pt.y < y0 + r.y { y0 + r.y } else { y1 - r.y };
        let xx = (pt.x - cx) / r.x;
        let yy = (pt.y - cy) / r.y;
        xx * xx + yy * yy <= 1.0
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
        let Rect { x0, y0, x1, y1 } = self.rect;
        let r = self.radii();
        let [bottom_left, bottom_right, top_right, top_left] = self.corner_rects();
        let corner = if pt.x < x0 + r.x {
            if pt.y < y0 + r.y {
                Some(bottom_left)
            } else if pt.y > y1 - r.y {
                Some(top_left)
            } else {
                None
            }
        } else if pt.x > x1 - r.x {
            if pt.y < y0 + r.y {
                Some(bottom_right)
            } else if pt.y > y1 - r.y {
                Some(top_right)
            } else {
                None
            }
        } else {
            None
        };
        match corner {
            Some(corner) => closest_point_on_solid_ellipse(corner, pt),
            None => self.rect.closest_point(pt),
        }
    }

    /// The farthest point lies on the corner arc opposite to `pt`.
    fn farthest_point(&self, pt: Point) -> Point {
        let c = self.center();
        let [bottom_left, bottom_right, top_right, top_left] = self.corner_rects();
        let corner = match (pt.x <= c.x, pt.y <= c.y) {
            (true, true) => top_right,
            (true, false) => bottom_right,
            (false, true) => top_left,
            (false, false) => bottom_left,
        };
        farthest_point_on_ellipse(corner, pt)
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
        let crossings = path_round_rect_crossings(
            0,
            iter,
            self,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        )?;
        Ok(crossings.is_hit(mask))
    }
}

impl Intersects<Rect> for RoundRect {
    fn intersects(&self, other: &Rect) -> bool {
        self.bands().iter().any(|band| band.intersects(other))
            || self.corners().iter().any(|corner| corner.intersects(other))
    }
}

impl Intersects<Circle> for RoundRect {
    fn intersects(&self, other: &Circle) -> bool {
        self.bands().iter().any(|band| other.intersects(band))
            || self.corners().iter().any(|corner| corner.intersects(other))
    }
}

impl Intersects<Ellipse> for RoundRect {
    fn intersects(&self, other: &Ellipse) -> bool {
        self.bands().iter().any(|band| other.intersects(band))
            || self.corners().iter().any(|corner| corner.intersects(other))
    }
}

impl Intersects<Segment> for RoundRect {
    #[inline]
    fn intersects(&self, other: &Segment) -> bool {
        intersects_round_rect_segment(self, other.p0, other.p1)
    }
}

impl Intersects<RoundRect> for RoundRect {
    fn intersects(&self, other: &RoundRect) -> bool {
        self.bands().iter().any(|band| other.intersects(band))
            || self.corners().iter().any(|corner| other.intersects(corner))
    }
}

impl Intersects<Path> for RoundRect {
    fn intersects(&self, other: &Path) -> bool {
        matches!(self.intersects_path_iter(other.path_iter()), Ok(true))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::crossings::{round_rect_crossings, Crossings};
    use crate::PathElementType;

    fn assert_point_approx_eq(p: Point, q: Point) {
        assert!(p.distance(q) < 1e-9, "{p:?} != {q:?}");
    }

    fn rounded() -> RoundRect {
        RoundRect::from_coords(0.0, 0.0, 10.0, 10.0, 4.0, 4.0)
    }

    #[test]
    fn radii_are_clamped() {
        let rr = RoundRect::new(Rect::new(0.0, 0.0, 4.0, 2.0), 10.0, -10.0);
        assert_eq!(rr.radii(), Vec2::new(2.0, 1.0));
        assert_eq!(rounded().radii(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn containment() {
        let rr = rounded();
        assert!(rr.contains(Point::new(5.0, 5.0)));
        assert!(rr.contains(Point::new(0.0, 5.0)));
        assert!(rr.contains(Point::new(1.0, 1.0)));
        assert!(!rr.contains(Point::new(0.2, 0.2)));
        assert!(!rr.contains(Point::new(9.8, 9.8)));
        // The maximum borders are excluded.
        assert!(!rr.contains(Point::new(10.0, 5.0)));
        assert!(rr.contains_rect(Rect::new(2.0, 2.0, 8.0, 8.0)));
        assert!(!rr.contains_rect(Rect::new(0.1, 0.1, 5.0, 5.0)));
        let point = RoundRect::from_coords(1.0, 1.0, 1.0, 1.0, 2.0, 2.0);
        assert!(point.contains(Point::new(1.0, 1.0)));
        assert!(!point.contains(Point::new(1.0, 1.1)));
    }

    #[test]
    fn closest_and_farthest() {
        let rr = rounded();
        let h = 2.0 - 2.0_f64.sqrt();
        assert_eq!(rr.closest_point(Point::new(5.0, 5.0)), Point::new(5.0, 5.0));
        assert_eq!(rr.closest_point(Point::new(5.0, -3.0)), Point::new(5.0, 0.0));
        assert_eq!(rr.closest_point(Point::new(-3.0, 5.0)), Point::new(0.0, 5.0));
        assert_point_approx_eq(rr.closest_point(Point::new(-1.0, -1.0)), Point::new(h, h));
        assert_point_approx_eq(
            rr.closest_point(Point::new(11.0, 11.0)),
            Point::new(10.0 - h, 10.0 - h),
        );
        assert_point_approx_eq(
            rr.farthest_point(Point::new(1.0, 1.0)),
            Point::new(10.0 - h, 10.0 - h),
        );
        assert_point_approx_eq(rr.farthest_point(Point::new(9.0, 1.0)), Point::new(h, 10.0 - h));
        let square = RoundRect::from_coords(0.0, 0.0, 10.0, 10.0, 0.0, 0.0);
        assert_eq!(square.farthest_point(Point::new(1.0, 1.0)), Point::new(10.0, 10.0));
    }

    #[test]
    fn pairwise() {
        let rr = rounded();
        // Inside the bounding box, outside the rounded corner.
        assert!(!rr.intersects(&Circle::new((-0.5, -0.5), 1.0)));
        assert!(rr.intersects(&Circle::new((-0.5, 5.0), 1.0)));
        assert!(!rr.intersects(&Rect::new(-1.0, -1.0, 0.3, 0.3)));
        assert!(rr.intersects(&Rect::new(-1.0, -1.0, 1.0, 1.0)));
        assert!(!rr.intersects(&Segment::new((-1.0, 1.0), (1.0, -1.0))));
        assert!(rr.intersects(&Segment::new((-1.0, 5.0), (1.0, 5.0))));
        assert!(Segment::new((-1.0, 5.0), (1.0, 5.0)).intersects(&rr));
        assert!(!rr.intersects(&Ellipse::new((-1.0, -1.0), (1.0, 1.0))));
        assert!(rr.intersects(&Ellipse::new((5.0, -1.0), (1.0, 2.0))));
        let near = RoundRect::from_coords(9.0, 9.0, 20.0, 20.0, 4.0, 4.0);
        assert!(!rr.intersects(&near));
        assert!(!near.intersects(&rr));
        let overlapping = RoundRect::from_coords(7.0, 7.0, 20.0, 20.0, 4.0, 4.0);
        assert!(rr.intersects(&overlapping));
        assert!(overlapping.intersects(&rr));
    }

    #[test]
    fn path_iter() {
        let rr = rounded();
        let els: Vec<_> = rr.path_iter().collect();
        assert_eq!(els.len(), 10);
        assert_eq!(els[0], PathElement::move_to((0.0, 2.0)));
        let curves = els.iter().filter(|el| el.kind == PathElementType::CurveTo).count();
        assert_eq!(curves, 4);
        assert_eq!(els[3].to, Point::new(8.0, 10.0));
        let empty = RoundRect::from_coords(0.0, 0.0, 0.0, 10.0, 1.0, 1.0);
        assert_eq!(empty.path_iter().count(), 0);
        let mut moved = rr;
        moved.translate(Vec2::new(1.0, 2.0));
        assert_eq!(moved.rect, Rect::new(1.0, 2.0, 11.0, 12.0));
        let mut around = Path::new();
        around.move_to((-5.0, 5.0));
        around.line_to((15.0, 5.0)).unwrap();
        assert_eq!(rr.intersects_path_iter(around.path_iter()), Ok(true));
        assert!(rr.intersects(&around));
    }

    #[test]
    fn edge_in_corner_gap() {
        // Fully rounded ends: the corners of the bounding rectangle lie
        // outside the shape.
        let rr = RoundRect::from_coords(0.0, 0.0, 4.0, 2.0, 4.0, 2.0);
        let (a, b, c) = (
            Point::new(0.1, -1.0),
            Point::new(0.3, 0.3),
            Point::new(-1.0, -1.0),
        );
        assert_eq!(round_rect_crossings(0, &rr, a, b), Crossings::Count(0));
        assert_eq!(round_rect_crossings(0, &rr, b, c), Crossings::Count(0));
        let mut gap = Path::new();
        gap.move_to(a);
        gap.line_to(b).unwrap();
        gap.line_to(c).unwrap();
        gap.close_path();
        assert!(!rr.intersects(&gap));
        assert!(!gap.intersects(&rr));
    }
}
