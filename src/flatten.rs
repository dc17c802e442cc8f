// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Approximation of curves by line segments.

use smallvec::SmallVec;

use crate::{
    distance_squared_segment_point, PathElement, PathElementType, PathIterator, Point,
    WindingRule,
};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The default maximum number of recursive subdivisions of one curve.
pub const DEFAULT_FLATTENING_LIMIT: u32 = 10;

/// A curve waiting to be subdivided or emitted as a line.
#[derive(Clone, Copy, Debug)]
enum PendingCurve {
    Quad([Point; 3]),
    Cubic([Point; 4]),
}

impl PendingCurve {
    /// The squared maximum distance of the control points from the chord.
    fn squared_flatness(&self) -> f64 {
        match self {
            PendingCurve::Quad([p0, p1, p2]) => distance_squared_segment_point(*p0, *p2, *p1),
            PendingCurve::Cubic([p0, p1, p2, p3]) => distance_squared_segment_point(*p0, *p3, *p1)
                .max(distance_squared_segment_point(*p0, *p3, *p2)),
        }
    }

    fn end(&self) -> Point {
        match self {
            PendingCurve::Quad(p) => p[2],
            PendingCurve::Cubic(p) => p[3],
        }
    }

    /// Split at `t = 0.5` with de Casteljau's construction.
    fn subdivide(&self) -> (PendingCurve, PendingCurve) {
        match self {
            PendingCurve::Quad([p0, p1, p2]) => {
                let a = p0.midpoint(*p1);
                let b = p1.midpoint(*p2);
                let mid = a.midpoint(b);
                (
                    PendingCurve::Quad([*p0, a, mid]),
                    PendingCurve::Quad([mid, b, *p2]),
                )
            }
            PendingCurve::Cubic([p0, p1, p2, p3]) => {
                let a = p0.midpoint(*p1);
                let b = p1.midpoint(*p2);
                let c = p2.midpoint(*p3);
                let ab = a.midpoint(b);
                let bc = b.midpoint(c);
                let mid = ab.midpoint(bc);
                (
                    PendingCurve::Cubic([*p0, a, ab, mid]),
                    PendingCurve::Cubic([mid, bc, c, *p3]),
                )
            }
        }
    }
}

/// A [`PathIterator`] that replaces every curve of another iterator by lines.
///
/// Moves, lines and closes pass through. Each emitted element's `from` is the
/// end point of the element emitted before it. A curve is split in halves
/// until its squared flatness drops below the squared tolerance, or until it
/// has been split `limit` times.
#[derive(Clone, Debug)]
pub struct FlatteningIter<I> {
    inner: I,
    squared_flatness: f64,
    limit: u32,
    /// Pending pieces of the current curve; the top is the next one in path
    /// order.
    pending: SmallVec<[(PendingCurve, u32); 16]>,
    current: Point,
    move_point: Point,
}

impl<I: PathIterator> FlatteningIter<I> {
    /// Flatten `inner` with the maximum control point deviation `flatness`.
    pub fn new(inner: I, flatness: f64) -> Self {
        Self::with_limit(inner, flatness, DEFAULT_FLATTENING_LIMIT)
    }

    /// Flatten `inner`, subdividing each curve at most `limit` times.
    pub fn with_limit(inner: I, flatness: f64, limit: u32) -> Self {
        FlatteningIter {
            inner,
            squared_flatness: flatness * flatness,
            limit,
            pending: SmallVec::new(),
            current: Point::ZERO,
            move_point: Point::ZERO,
        }
    }

    fn push_curve(&mut self, curve: PendingCurve) {
        self.pending.push((curve, 0));
    }
}

impl<I: PathIterator> Iterator for FlatteningIter<I> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        loop {
            if let Some((curve, level)) = self.pending.pop() {
                let flatness = curve.squared_flatness();
                if level < self.limit && flatness >= self.squared_flatness {
                    let (left, right) = curve.subdivide();
                    self.pending.push((right, level + 1));
                    self.pending.push((left, level + 1));
                    continue;
                }
                if flatness >= self.squared_flatness {
                    log::trace!(
                        "curve piece still {} off its chord after {} subdivisions",
                        flatness.sqrt(),
                        level
                    );
                }
                let end = curve.end();
                let el = PathElement::line_to(self.current, end);
                self.current = end;
                return Some(el);
            }
            let el = self.inner.next()?;
            match el.kind {
                PathElementType::MoveTo => {
                    self.current = el.to;
                    self.move_point = el.to;
                    return Some(PathElement::move_to(el.to));
                }
                PathElementType::LineTo => {
                    let out = PathElement::line_to(self.current, el.to);
                    self.current = el.to;
                    return Some(out);
                }
                PathElementType::QuadTo => {
                    self.push_curve(PendingCurve::Quad([self.current, el.ctrl1, el.to]));
                }
                PathElementType::CurveTo => {
                    self.push_curve(PendingCurve::Cubic([
                        self.current,
                        el.ctrl1,
                        el.ctrl2,
                        el.to,
                    ]));
                }
                PathElementType::Close => {
                    let out = PathElement::close(self.current, self.move_point);
                    self.current = self.move_point;
                    return Some(out);
                }
            }
        }
    }
}

impl<I: PathIterator> PathIterator for FlatteningIter<I> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.inner.winding_rule()
    }
}
