// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shadow of a path, for path-against-path crossing tests.
//!
//! The shadow of a path is the area right of it. An edge of another path
//! is first tested against the bounding box of the shadowed path; only when
//! it enters that box is the path itself walked, edge by edge, and the
//! crossings of the edge with the horizontal lines at the box's minimum and
//! maximum y are recorded.

use crate::crossings::{flattened_curve, rect_crossings, Crossings};
use crate::{
    intersects_segment_segment_without_ends, side_of_line, Path, PathElementType, PathError,
    PathIterator, Point, Rect, Shape,
};

/// A borrowed path and a snapshot of its bounding box.
#[derive(Clone, Copy, Debug)]
pub struct PathShadow<'a> {
    path: &'a Path,
    bounds: Rect,
}

/// The state of one walk of the shadowed path.
#[derive(Clone, Copy, Debug)]
struct ShadowData {
    crossings: Crossings,
    /// Whether an x-intercept has been recorded at `ymin`.
    has_x4ymin: bool,
    has_x4ymax: bool,
    x4ymin: f64,
    x4ymax: f64,
    ymin: f64,
    ymax: f64,
}

impl ShadowData {
    fn new(bounds: Rect) -> Self {
        ShadowData {
            crossings: Crossings::Count(0),
            has_x4ymin: false,
            has_x4ymax: false,
            x4ymin: bounds.x0,
            x4ymax: bounds.x0,
            ymin: bounds.y0,
            ymax: bounds.y1,
        }
    }

    fn is_intersects(&self) -> bool {
        self.crossings.is_intersects()
    }

    fn add(&mut self, delta: i32) {
        if let Crossings::Count(n) = self.crossings {
            self.crossings = Crossings::Count(n + delta);
        }
    }

    fn set_for_ymax(&mut self, x: f64, y: f64) {
        if y >= self.ymax && x > self.x4ymax {
            self.x4ymax = x;
            self.has_x4ymax = true;
        }
    }

    fn set_for_ymin(&mut self, x: f64, y: f64) {
        if y <= self.ymin && x > self.x4ymin {
            self.x4ymin = x;
            self.has_x4ymin = true;
        }
    }
}

impl<'a> PathShadow<'a> {
    /// Create the shadow of `path`.
    pub fn new(path: &'a Path) -> Self {
        PathShadow {
            path,
            bounds: path.bounding_box(),
        }
    }

    /// The bounding box of the shadowed path, as it was at creation.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The crossings of the edge `p0` → `p1` with the shadow, added to
    /// `count`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidArgument`] if the shadowed path does not
    /// start with a move.
    pub fn crossings(&self, count: i32, p0: Point, p1: Point) -> Result<Crossings, PathError> {
        let bounds_crossings = rect_crossings(count, self.bounds, p0, p1);
        if !bounds_crossings.is_intersects() {
            return Ok(bounds_crossings);
        }
        let mut data = ShadowData::new(self.bounds);
        discretize(self.path.path_iter(), p0, p1, &mut data)?;
        let mask = self.path.winding_rule().crossing_mask(2);
        if data.crossings.is_hit(mask) {
            log::trace!("edge {p0:?} -> {p1:?} enters the shadowed path");
            return Ok(Crossings::Intersects);
        }
        let inc = i32::from(data.has_x4ymin) + i32::from(data.has_x4ymax);
        Ok(Crossings::Count(count + if p0.y < p1.y { inc } else { -inc }))
    }
}

/// Walk the shadowed path, crossing each of its edges with the query edge
/// `q0` → `q1`.
fn discretize<I: PathIterator>(
    mut iter: I,
    q0: Point,
    q1: Point,
    data: &mut ShadowData,
) -> Result<(), PathError> {
    if data.is_intersects() {
        return Ok(());
    }
    let Some(first) = iter.next() else {
        return Ok(());
    };
    if first.kind != PathElementType::MoveTo {
        return Err(PathError::InvalidArgument(
            "missing initial move in path definition",
        ));
    }
    let rule = iter.winding_rule();
    let mut mov = first.to;
    let mut cur = mov;
    for el in iter {
        match el.kind {
            PathElementType::MoveTo => {
                mov = el.to;
                cur = mov;
            }
            PathElementType::LineTo => {
                cross_segment_two_shadow_lines(cur, el.to, q0, q1, data);
                if data.is_intersects() {
                    return Ok(());
                }
                cur = el.to;
            }
            PathElementType::QuadTo | PathElementType::CurveTo => {
                discretize(flattened_curve(rule, cur, el), q0, q1, data)?;
                if data.is_intersects() {
                    return Ok(());
                }
                cur = el.to;
            }
            PathElementType::Close => {
                if cur != mov {
                    cross_segment_two_shadow_lines(cur, mov, q0, q1, data);
                }
                if data.crossings != Crossings::Count(0) {
                    return Ok(());
                }
                cur = mov;
            }
        }
    }
    if cur != mov {
        // Only intersections count for an open path.
        data.crossings = Crossings::Count(0);
    }
    Ok(())
}

/// Cross the shadow edge `s0` → `s1` with the query edge `q0` → `q1`.
fn cross_segment_two_shadow_lines(
    s0: Point,
    s1: Point,
    q0: Point,
    q1: Point,
    data: &mut ShadowData,
) {
    let (xmin, xmax) = (s0.x.min(s1.x), s0.x.max(s1.x));
    let (ymin, ymax) = (s0.y.min(s1.y), s0.y.max(s1.y));
    if (q0.y < ymin && q1.y < ymin) || (q0.y > ymax && q1.y > ymax) {
        return;
    }
    if q0.x < xmin && q1.x < xmin {
        return;
    }
    if q0.x >= xmax && q1.x >= xmax {
        // The query edge passes right of the shadow edge.
        let alpha = (q1.x - q0.x) / (q1.y - q0.y);
        if q0.y < q1.y {
            if q0.y <= ymin {
                data.set_for_ymin(q0.x + (ymin - q0.y) * alpha, ymin);
                data.add(1);
            }
            if q1.y >= ymax {
                data.set_for_ymax(q0.x + (ymax - q0.y) * alpha, ymax);
                data.add(1);
            }
        } else {
            if q1.y <= ymin {
                data.set_for_ymin(q0.x + (ymin - q0.y) * alpha, ymin);
                data.add(-1);
            }
            if q0.y >= ymax {
                data.set_for_ymax(q0.x + (ymax - q0.y) * alpha, ymax);
                data.add(-1);
            }
        }
    } else if intersects_segment_segment_without_ends(s0, s1, q0, q1) {
        data.crossings = Crossings::Intersects;
    } else {
        let is_up = s0.y <= s1.y;
        let (lo, hi) = if is_up { (s0, s1) } else { (s1, s0) };
        let side1 = side_of_line(lo, hi, q0, 0.0);
        let side2 = side_of_line(lo, hi, q1, 0.0);
        if side1 > 0 || side2 > 0 {
            cross_segment_shadow_line(hi.x, ymax, q0, q1, is_up, data);
            cross_segment_shadow_line(lo.x, ymin, q0, q1, !is_up, data);
        }
    }
}

/// Cross the horizontal half-line starting at `(sx, sy)` towards positive x
/// with the query edge.
fn cross_segment_shadow_line(
    sx: f64,
    sy: f64,
    q0: Point,
    q1: Point,
    is_max: bool,
    data: &mut ShadowData,
) {
    if (sy < q0.y && sy < q1.y) || (sy > q0.y && sy > q1.y) {
        return;
    }
    if sx > q0.x && sx > q1.x {
        return;
    }
    let xint = q0.x + (sy - q0.y) * (q1.x - q0.x) / (q1.y - q0.y);
    if sx > xint {
        return;
    }
    if is_max {
        data.set_for_ymax(xint, sy);
    } else {
        data.set_for_ymin(xint, sy);
    }
    data.add(if q0.y < q1.y { 1 } else { -1 });
}
