//! The capability interface a verifier consumes from a curve implementation.

use core::fmt::Debug;

use crate::{Affine, Scalar};

/// Narrow set of curve operations needed to check a Schnorr equation.
///
/// Points cross the boundary as [`Affine`] coordinate pairs. Inside, an
/// implementation works on its own [`CurveArithmetic::Point`] type and hands
/// results back through [`CurveArithmetic::normalize`], whose output is the
/// canonical form used for equality.
pub trait CurveArithmetic {
    /// Working representation of a point.
    type Point: Copy + Debug;

    /// Short label used in logs.
    fn name(&self) -> &'static str;

    /// The fixed generator G.
    fn generator(&self) -> Self::Point;

    /// Curve membership of a coordinate pair. The point at infinity is a
    /// member; coordinates outside the base field are not.
    fn is_on_curve(&self, point: &Affine) -> bool;

    /// Load a coordinate pair into the working representation. `None` when
    /// the pair is not on the curve.
    fn lift(&self, point: &Affine) -> Option<Self::Point>;

    /// `scalar * point`.
    fn multiply(&self, point: &Self::Point, scalar: &Scalar) -> Self::Point;

    /// `a + b`.
    fn add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point;

    /// Canonical affine coordinates of `point`.
    fn normalize(&self, point: &Self::Point) -> Affine;
}

impl<C: CurveArithmetic + ?Sized> CurveArithmetic for &C {
    type Point = C::Point;

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn generator(&self) -> Self::Point {
        (**self).generator()
    }

    fn is_on_curve(&self, point: &Affine) -> bool {
        (**self).is_on_curve(point)
    }

    fn lift(&self, point: &Affine) -> Option<Self::Point> {
        (**self).lift(point)
    }

    fn multiply(&self, point: &Self::Point, scalar: &Scalar) -> Self::Point {
        (**self).multiply(point, scalar)
    }

    fn add(&self, a: &Self::Point, b: &Self::Point) -> Self::Point {
        (**self).add(a, b)
    }

    fn normalize(&self, point: &Self::Point) -> Affine {
        (**self).normalize(point)
    }
}
