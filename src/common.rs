// Copyright 2025 the Geom2d Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations and shared constants.

#![allow(missing_docs)]

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("geom2d requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn atan2(self, other: Self) -> Self => atan2;
    fn copysign(self, sign: Self) -> Self => copysign;
    fn hypot(self, other: Self) -> Self => hypot;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sqrt(self) -> Self => sqrt;
}

/// The flatness used when curves are approximated by line segments for
/// crossing tests, bounding boxes, lengths and distances.
pub const SPLINE_APPROXIMATION_RATIO: f64 = 0.1;

/// Clamp `value` into `[min, max]`.
///
/// Unlike [`f64::clamp`], this does not panic when `min > max`; `max` wins in
/// that case. NaN passes through.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Cohen–Sutherland region code: inside the rectangle.
pub const COHEN_SUTHERLAND_INSIDE: u8 = 0;
/// Cohen–Sutherland region code: left of the rectangle.
pub const COHEN_SUTHERLAND_LEFT: u8 = 1;
/// Cohen–Sutherland region code: right of the rectangle.
pub const COHEN_SUTHERLAND_RIGHT: u8 = 2;
/// Cohen–Sutherland region code: below the rectangle (smaller y).
pub const COHEN_SUTHERLAND_BOTTOM: u8 = 4;
/// Cohen–Sutherland region code: above the rectangle (larger y).
pub const COHEN_SUTHERLAND_TOP: u8 = 8;

/// Compute the Cohen–Sutherland region code of a point relative to the
/// rectangle `[x0, x1] × [y0, y1]`.
#[inline]
pub fn cohen_sutherland_code(px: f64, py: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> u8 {
    let mut code = COHEN_SUTHERLAND_INSIDE;
    if px < x0 {
        code |= COHEN_SUTHERLAND_LEFT;
    } else if px > x1 {
        code |= COHEN_SUTHERLAND_RIGHT;
    }
    if py < y0 {
        code |= COHEN_SUTHERLAND_BOTTOM;
    } else if py > y1 {
        code |= COHEN_SUTHERLAND_TOP;
    }
    code
}
