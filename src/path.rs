// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paths made of lines and Bézier curves.

use alloc::vec::Vec;
use core::cell::Cell;

use crate::crossings::{path_point_crossings, path_rect_crossings, path_shadow_crossings};
use crate::{
    closest_point_on_segment, farthest_point_on_segment, Affine, Circle, CrossingMode, Ellipse,
    Intersects, PathElement, PathElementType, PathError, PathIterator, PathShadow, Point, Rect,
    RoundRect, Segment, Shape, Vec2, WindingRule, SPLINE_APPROXIMATION_RATIO,
};

/// A path: a sequence of moves, lines, quadratic and cubic Bézier curves,
/// and closes.
///
/// Elements are stored compactly, as a list of element kinds and a flat list
/// of coordinates. Bounding boxes and length are computed lazily and
/// remembered until the next mutation.
///
/// A path is `Send` but not `Sync`, since queries update the remembered
/// values.
#[derive(Clone, Default, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    kinds: Vec<PathElementType>,
    coords: Vec<f64>,
    winding_rule: WindingRule,
    #[cfg_attr(feature = "serde", serde(skip))]
    #[cfg_attr(feature = "schemars", schemars(skip))]
    graphical_bounds: Cell<Option<Rect>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    #[cfg_attr(feature = "schemars", schemars(skip))]
    control_bounds: Cell<Option<Rect>>,
    #[cfg_attr(feature = "serde", serde(skip))]
    #[cfg_attr(feature = "schemars", schemars(skip))]
    length: Cell<Option<f64>>,
}

impl Path {
    /// Create a new, empty path with the non-zero winding rule.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a new, empty path with the given winding rule.
    #[inline]
    pub fn with_winding_rule(winding_rule: WindingRule) -> Path {
        Path {
            winding_rule,
            ..Path::default()
        }
    }

    /// Create a path from the elements of `iter`, adopting its winding rule.
    ///
    /// # Errors
    ///
    /// Fails like [`Path::add`].
    pub fn from_path_iter<I: PathIterator>(iter: I) -> Result<Path, PathError> {
        let mut path = Path::with_winding_rule(iter.winding_rule());
        path.add(iter)?;
        Ok(path)
    }

    fn invalidate(&self) {
        self.graphical_bounds.set(None);
        self.control_bounds.set(None);
        self.length.set(None);
    }

    fn push(&mut self, kind: PathElementType, points: &[Point]) -> Result<(), PathError> {
        if self.kinds.is_empty() {
            return Err(PathError::InvalidState("missing initial move in path definition"));
        }
        self.kinds.push(kind);
        self.coords.extend(points.iter().flat_map(|p| [p.x, p.y]));
        self.invalidate();
        Ok(())
    }

    /// Start a new sub-path at `p`.
    ///
    /// Two moves in a row collapse into the second one.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        let p = p.into();
        if self.kinds.last() == Some(&PathElementType::MoveTo) {
            let n = self.coords.len();
            self.coords[n - 2] = p.x;
            self.coords[n - 1] = p.y;
        } else {
            self.kinds.push(PathElementType::MoveTo);
            self.coords.extend([p.x, p.y]);
        }
        self.invalidate();
    }

    /// Add a line to `p`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidState`] if the path is empty; the path is
    /// left unmodified.
    pub fn line_to(&mut self, p: impl Into<Point>) -> Result<(), PathError> {
        self.push(PathElementType::LineTo, &[p.into()])
    }

    /// Add a quadratic Bézier curve to `p`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidState`] if the path is empty.
    pub fn quad_to(&mut self, ctrl: impl Into<Point>, p: impl Into<Point>) -> Result<(), PathError> {
        self.push(PathElementType::QuadTo, &[ctrl.into(), p.into()])
    }

    /// Add a cubic Bézier curve to `p`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidState`] if the path is empty.
    pub fn curve_to(
        &mut self,
        ctrl1: impl Into<Point>,
        ctrl2: impl Into<Point>,
        p: impl Into<Point>,
    ) -> Result<(), PathError> {
        self.push(
            PathElementType::CurveTo,
            &[ctrl1.into(), ctrl2.into(), p.into()],
        )
    }

    /// Close the current sub-path.
    ///
    /// Does nothing on an empty path, or right after a move or a close.
    pub fn close_path(&mut self) {
        match self.kinds.last() {
            None | Some(PathElementType::MoveTo | PathElementType::Close) => {}
            Some(_) => {
                self.kinds.push(PathElementType::Close);
                self.invalidate();
            }
        }
    }

    /// Append every element of `iter` to the path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidState`] when the elements start with a
    /// drawing command and the path is empty. Elements appended before the
    /// failure are kept.
    pub fn add(&mut self, iter: impl IntoIterator<Item = PathElement>) -> Result<(), PathError> {
        for el in iter {
            match el.kind {
                PathElementType::MoveTo => self.move_to(el.to),
                PathElementType::LineTo => self.line_to(el.to)?,
                PathElementType::QuadTo => self.quad_to(el.ctrl1, el.to)?,
                PathElementType::CurveTo => self.curve_to(el.ctrl1, el.ctrl2, el.to)?,
                PathElementType::Close => self.close_path(),
            }
        }
        Ok(())
    }

    /// Remove the last element.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidState`] if the path is empty.
    pub fn remove_last(&mut self) -> Result<(), PathError> {
        let kind = self
            .kinds
            .pop()
            .ok_or(PathError::InvalidState("no element to remove"))?;
        self.coords.truncate(self.coords.len() - kind.coord_count());
        self.invalidate();
        Ok(())
    }

    /// Remove the first element that ends at `p`, or, for curves, that has
    /// any of its points at `p`.
    ///
    /// Returns whether an element was removed.
    pub fn remove(&mut self, p: impl Into<Point>) -> bool {
        let p = p.into();
        let mut coord_ix = 0;
        let found = self.kinds.iter().enumerate().find_map(|(ix, kind)| {
            let range = coord_ix..coord_ix + kind.coord_count();
            coord_ix = range.end;
            self.coords[range.clone()]
                .chunks_exact(2)
                .any(|c| c[0] == p.x && c[1] == p.y)
                .then_some((ix, range))
        });
        let Some((ix, range)) = found else {
            return false;
        };
        self.kinds.remove(ix);
        self.coords.drain(range);
        self.invalidate();
        true
    }

    /// Replace the last stored point.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::InvalidState`] if the path has no point.
    pub fn set_last_point(&mut self, p: impl Into<Point>) -> Result<(), PathError> {
        let n = self.coords.len();
        if n < 2 {
            return Err(PathError::InvalidState("no point to replace"));
        }
        let p = p.into();
        self.coords[n - 2] = p.x;
        self.coords[n - 1] = p.y;
        self.invalidate();
        Ok(())
    }

    /// Remove every element and reset the winding rule to
    /// [`WindingRule::NonZero`].
    pub fn clear(&mut self) {
        self.kinds.clear();
        self.coords.clear();
        self.winding_rule = WindingRule::NonZero;
        self.invalidate();
    }

    /// The winding rule.
    #[inline]
    pub fn winding_rule(&self) -> WindingRule {
        self.winding_rule
    }

    /// Set the winding rule.
    #[inline]
    pub fn set_winding_rule(&mut self, winding_rule: WindingRule) {
        self.winding_rule = winding_rule;
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the path has no drawable element.
    pub fn is_empty(&self) -> bool {
        !self.path_iter().any(|el| el.is_drawable())
    }

    /// Whether the path is a single move followed by at least one line, and
    /// nothing else.
    pub fn is_polyline(&self) -> bool {
        match self.kinds.split_first() {
            Some((PathElementType::MoveTo, rest)) => {
                !rest.is_empty() && rest.iter().all(|k| *k == PathElementType::LineTo)
            }
            _ => false,
        }
    }

    /// Whether the path contains a quadratic or a cubic curve.
    pub fn is_curved(&self) -> bool {
        self.kinds
            .iter()
            .any(|k| matches!(k, PathElementType::QuadTo | PathElementType::CurveTo))
    }

    /// Whether the path has more than one move.
    pub fn is_multi_parts(&self) -> bool {
        self.kinds
            .iter()
            .filter(|k| **k == PathElementType::MoveTo)
            .nth(1)
            .is_some()
    }

    /// Whether the path is a single sub-path ending with a close.
    pub fn is_polygon(&self) -> bool {
        match self.kinds.split_first() {
            Some((PathElementType::MoveTo, rest)) => {
                rest.last() == Some(&PathElementType::Close)
                    && !rest.contains(&PathElementType::MoveTo)
            }
            _ => false,
        }
    }

    /// The kind of the element at `index`.
    #[inline]
    pub fn element_type_at(&self, index: usize) -> Option<PathElementType> {
        self.kinds.get(index).copied()
    }

    /// The coordinate at `index` in the flat coordinate list.
    #[inline]
    pub fn coord_at(&self, index: usize) -> Option<f64> {
        self.coords.get(index).copied()
    }

    /// The last stored point.
    ///
    /// After a close, this is the end of the last drawing command, not the
    /// start of the closed sub-path.
    pub fn current_point(&self) -> Option<Point> {
        match self.coords.as_slice() {
            [.., x, y] => Some(Point::new(*x, *y)),
            _ => None,
        }
    }

    /// All stored points, control points included.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.coords
            .chunks_exact(2)
            .map(|c| Point::new(c[0], c[1]))
    }

    /// Whether `p` is one of the stored points, control points included.
    pub fn contains_control_point(&self, p: Point) -> bool {
        self.points().any(|q| q == p)
    }

    /// The bounding box of every point of the drawing commands, control
    /// points included.
    ///
    /// The zero rectangle if there is no drawing command.
    pub fn bounding_box_with_ctrl_points(&self) -> Rect {
        if let Some(bounds) = self.control_bounds.get() {
            return bounds;
        }
        let points = self
            .path_iter()
            .filter(|el| {
                matches!(
                    el.kind,
                    PathElementType::LineTo | PathElementType::QuadTo | PathElementType::CurveTo
                )
            })
            .flat_map(|el| core::iter::once(el.from).chain(el.stored_points()));
        let bounds = Rect::enclosing(points).unwrap_or(Rect::ZERO);
        self.control_bounds.set(Some(bounds));
        bounds
    }

    /// The length of the path, closing lines included.
    ///
    /// Curves are measured on their flattening.
    pub fn length(&self) -> f64 {
        if let Some(length) = self.length.get() {
            return length;
        }
        let length = self
            .flattened_iter(SPLINE_APPROXIMATION_RATIO)
            .filter(|el| matches!(el.kind, PathElementType::LineTo | PathElementType::Close))
            .map(|el| el.from.distance(el.to))
            .sum();
        self.length.set(Some(length));
        length
    }

    /// Apply an affine transform to every point of the path.
    pub fn transform(&mut self, affine: Affine) {
        for c in self.coords.chunks_exact_mut(2) {
            let p = affine * Point::new(c[0], c[1]);
            c[0] = p.x;
            c[1] = p.y;
        }
        self.invalidate();
    }
}

impl PartialEq for Path {
    /// Paths are equal when they have the same elements and winding rule.
    fn eq(&self, other: &Path) -> bool {
        self.kinds == other.kinds
            && self.coords == other.coords
            && self.winding_rule == other.winding_rule
    }
}

/// An iterator over the elements of a [`Path`].
///
/// Created by [`Shape::path_iter`]; calling it again restarts the iteration.
#[derive(Clone, Debug)]
pub struct PathElementsIter<'a> {
    path: &'a Path,
    ix: usize,
    coord_ix: usize,
    cur: Point,
    mov: Point,
}

impl Iterator for PathElementsIter<'_> {
    type Item = PathElement;

    fn next(&mut self) -> Option<PathElement> {
        let kind = *self.path.kinds.get(self.ix)?;
        let n = kind.coord_count();
        let c = self.path.coords.get(self.coord_ix..self.coord_ix + n)?;
        self.ix += 1;
        self.coord_ix += n;
        let from = self.cur;
        let el = match kind {
            PathElementType::MoveTo => {
                self.mov = Point::new(c[0], c[1]);
                PathElement::move_to(self.mov)
            }
            PathElementType::LineTo => PathElement::line_to(from, (c[0], c[1])),
            PathElementType::QuadTo => PathElement::quad_to(from, (c[0], c[1]), (c[2], c[3])),
            PathElementType::CurveTo => {
                PathElement::curve_to(from, (c[0], c[1]), (c[2], c[3]), (c[4], c[5]))
            }
            PathElementType::Close => PathElement::close(from, self.mov),
        };
        self.cur = el.to;
        Some(el)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.path.kinds.len() - self.ix;
        (n, Some(n))
    }
}

impl ExactSizeIterator for PathElementsIter<'_> {}

impl PathIterator for PathElementsIter<'_> {
    #[inline]
    fn winding_rule(&self) -> WindingRule {
        self.path.winding_rule
    }
}

impl Shape for Path {
    type PathIter<'iter> = PathElementsIter<'iter>;

    fn path_iter(&self) -> PathElementsIter<'_> {
        PathElementsIter {
            path: self,
            ix: 0,
            coord_ix: 0,
            cur: Point::NAN,
            mov: Point::NAN,
        }
    }

    /// The bounding box of the drawn lines and of the flattened curves.
    ///
    /// The zero rectangle if nothing is drawn.
    fn bounding_box(&self) -> Rect {
        if let Some(bounds) = self.graphical_bounds.get() {
            return bounds;
        }
        let points = self
            .flattened_iter(SPLINE_APPROXIMATION_RATIO)
            .filter(|el| el.kind == PathElementType::LineTo)
            .flat_map(|el| [el.from, el.to]);
        let bounds = Rect::enclosing(points).unwrap_or(Rect::ZERO);
        self.graphical_bounds.set(Some(bounds));
        bounds
    }

    /// A point on the outline is inside.
    fn contains(&self, pt: Point) -> bool {
        let mask = self.winding_rule.crossing_mask(1);
        matches!(
            path_point_crossings(
                0,
                self.path_iter(),
                pt,
                CrossingMode::SimpleIntersectionWhenNotPolygon
            ),
            Ok(c) if c.is_hit(mask)
        )
    }

    /// Open sub-paths are closed for this test. A rectangle touching the
    /// outline is not contained.
    fn contains_rect(&self, rect: Rect) -> bool {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return false;
        }
        let mask = self.winding_rule.crossing_mask(2);
        matches!(
            path_rect_crossings(0, self.path_iter(), rect, CrossingMode::AutoClose),
            Ok(c) if c.is_strictly_inside(mask)
        )
    }

    /// Works on the flattened path. A point inside a closed sub-path is its
    /// own closest point.
    ///
    /// `Point::NAN` for a path without elements.
    fn closest_point(&self, pt: Point) -> Point {
        let mask = self.winding_rule.crossing_mask(1);
        let mut best = Point::NAN;
        let mut best_dist = f64::INFINITY;
        let mut crossings = 0;
        for el in self.flattened_iter(SPLINE_APPROXIMATION_RATIO) {
            let candidate = match el.kind {
                PathElementType::MoveTo => {
                    crossings = 0;
                    el.to
                }
                PathElementType::Close => {
                    crossings += crate::point_crossings(pt, el.from, el.to);
                    if crossings & mask != 0 {
                        return pt;
                    }
                    crossings = 0;
                    if el.is_empty() {
                        continue;
                    }
                    closest_point_on_segment(el.from, el.to, pt)
                }
                _ => {
                    crossings += crate::point_crossings(pt, el.from, el.to);
                    closest_point_on_segment(el.from, el.to, pt)
                }
            };
            let d = candidate.distance_squared(pt);
            if d < best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }

    /// Works on the flattened path.
    ///
    /// `Point::NAN` for a path without elements.
    fn farthest_point(&self, pt: Point) -> Point {
        let mut best = Point::NAN;
        let mut best_dist = f64::NEG_INFINITY;
        for el in self.flattened_iter(SPLINE_APPROXIMATION_RATIO) {
            let candidate = match el.kind {
                PathElementType::MoveTo => el.to,
                _ => farthest_point_on_segment(el.from, el.to, pt),
            };
            let d = candidate.distance_squared(pt);
            if d > best_dist {
                best_dist = d;
                best = candidate;
            }
        }
        best
    }

    #[inline]
    fn translate(&mut self, v: Vec2) {
        self.transform(Affine::translate(v));
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Path::is_empty(self)
    }

    /// Tests the elements of `iter` against the shadow of this path; the
    /// winding rule of this path interprets the result.
    fn intersects_path_iter<I: PathIterator>(&self, iter: I) -> Result<bool, PathError> {
        let mask = self.winding_rule.crossing_mask(2);
        let shadow = PathShadow::new(self);
        let crossings = path_shadow_crossings(
            0,
            iter,
            &shadow,
            CrossingMode::SimpleIntersectionWhenNotPolygon,
        )?;
        Ok(crossings.is_hit(mask))
    }
}

impl Intersects<Path> for Path {
    /// Each path is tested against the shadow of the other, so that a path
    /// enclosing the other is detected from either side.
    fn intersects(&self, other: &Path) -> bool {
        matches!(self.intersects_path_iter(other.path_iter()), Ok(true))
            || matches!(other.intersects_path_iter(self.path_iter()), Ok(true))
    }
}

impl Intersects<Rect> for Path {
    #[inline]
    fn intersects(&self, other: &Rect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Circle> for Path {
    #[inline]
    fn intersects(&self, other: &Circle) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Ellipse> for Path {
    #[inline]
    fn intersects(&self, other: &Ellipse) -> bool {
        other.intersects(self)
    }
}

impl Intersects<RoundRect> for Path {
    #[inline]
    fn intersects(&self, other: &RoundRect) -> bool {
        other.intersects(self)
    }
}

impl Intersects<Segment> for Path {
    #[inline]
    fn intersects(&self, other: &Segment) -> bool {
        other.intersects(self)
    }
}
