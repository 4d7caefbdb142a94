// secp256k1 : y^2 = x^3 + 7 over GF(2^256 - 2^32 - 977)
// Generator (SEC 2, section 2.4.1):
//   x = 0x79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798
//   y = 0x483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8
// Curve prime order: 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141 (256 bits)
// Curve cofactor: 1

use crate::basefield::FieldElement;
use crate::{Group, Scalar};
use core::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};

/// Length of an uncompressed SEC1 point: `0x04 || x || y`.
pub const UNCOMPRESSED_LEN: usize = 65;

/// SEC1 tag byte of an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

const GENERATOR_X: [u8; 32] = [
    0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
    0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
];

const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3a, 0xda, 0x77, 0x26, 0xa3, 0xc4, 0x65, 0x5d, 0xa4, 0xfb, 0xfc, 0x0e, 0x11, 0x08, 0xa8,
    0xfd, 0x17, 0xb4, 0x48, 0xa6, 0x85, 0x54, 0x19, 0x9c, 0x47, 0xd0, 0x8f, 0xfb, 0x10, 0xd4, 0xb8,
];

/// Affine point on secp256k1.
///
/// Coordinates are held exactly as decoded, so an `Affine` may describe a pair
/// that is not on the curve at all. [`Affine::is_on_curve`] is the gate that
/// separates the two.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affine {
    /// The x-coordinate of the point
    pub x: FieldElement,
    /// The y-coordinate of the point
    pub y: FieldElement,
    /// Whether this point is the point at infinity (identity element)
    pub is_infinity: bool,
}

impl Affine {
    /// The 'b' coefficient. The 'a' coefficient is zero.
    #[inline]
    fn curve_b() -> FieldElement {
        FieldElement::from_u64(7)
    }

    /// The point at infinity (identity element)
    pub const INFINITY: Self = Affine {
        x: FieldElement::ZERO,
        y: FieldElement::ZERO,
        is_infinity: true,
    };

    pub const GENERATOR: Self = Affine {
        x: FieldElement::from_be_bytes(GENERATOR_X),
        y: FieldElement::from_be_bytes(GENERATOR_Y),
        is_infinity: false,
    };

    /// Create a new affine point. No curve check is performed.
    pub fn new(x: FieldElement, y: FieldElement) -> Self {
        Affine {
            x,
            y,
            is_infinity: false,
        }
    }

    #[inline]
    pub fn is_infinity(&self) -> bool {
        self.is_infinity
    }

    /// Check if a point is on the curve: y^2 = x^3 + 7.
    ///
    /// Coordinates outside [0, p) are rejected even if they would satisfy
    /// the equation after reduction.
    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity {
            return true;
        }
        if !self.x.is_canonical() || !self.y.is_canonical() {
            return false;
        }

        let y2 = self.y.square();
        let x3 = self.x.square() * self.x;
        let rhs = x3 + Self::curve_b();

        y2 == rhs
    }

    pub fn generator() -> Self {
        Self::GENERATOR
    }

    /// Split an uncompressed SEC1 encoding into coordinates.
    ///
    /// Returns `None` when the tag byte is not `0x04`. The coordinates are
    /// not checked against the curve.
    pub fn from_uncompressed(bytes: &[u8; UNCOMPRESSED_LEN]) -> Option<Self> {
        if bytes[0] != UNCOMPRESSED_TAG {
            return None;
        }

        let mut x = [0u8; 32];
        let mut y = [0u8; 32];
        x.copy_from_slice(&bytes[1..33]);
        y.copy_from_slice(&bytes[33..]);
        Some(Affine::new(
            FieldElement::from_be_bytes(x),
            FieldElement::from_be_bytes(y),
        ))
    }

    /// Uncompressed SEC1 encoding. The point at infinity has none.
    pub fn to_uncompressed(&self) -> Option<[u8; UNCOMPRESSED_LEN]> {
        if self.is_infinity {
            return None;
        }

        let mut out = [0u8; UNCOMPRESSED_LEN];
        out[0] = UNCOMPRESSED_TAG;
        out[1..33].copy_from_slice(&self.x.to_be_bytes());
        out[33..].copy_from_slice(&self.y.to_be_bytes());
        Some(out)
    }

    /// Point doubling: 2*P.
    pub fn double(&self) -> Self {
        if self.is_infinity {
            return *self;
        }

        // If y = 0, then 2P = O
        if self.y.is_zero() {
            return Self::INFINITY;
        }

        // λ = 3x^2 / (2y), the curve has a = 0
        let x2 = self.x.square();
        let numerator = x2 + x2 + x2;
        let denominator = self.y + self.y;
        let lambda = numerator / denominator;

        // x_r = λ^2 - 2x
        let x_r = lambda.square() - self.x - self.x;

        // y_r = λ(x - x_r) - y
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }

    pub fn negate(&self) -> Self {
        if self.is_infinity {
            return *self;
        }
        Affine::new(self.x, -self.y)
    }
}

impl Group for Affine {
    type Scalar = Scalar;

    #[inline]
    fn identity() -> Self {
        Self::INFINITY
    }

    #[inline]
    fn is_identity(&self) -> bool {
        self.is_infinity
    }

    #[inline]
    fn generator() -> Self {
        Self::GENERATOR
    }

    #[inline]
    fn double(&self) -> Self {
        Self::double(self)
    }

    #[inline]
    fn negate(&self) -> Self {
        Self::negate(self)
    }
}

impl Add for Affine {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        if self.is_infinity {
            return other;
        }
        if other.is_infinity {
            return self;
        }

        if self.x == other.x {
            if self.y == other.y {
                return self.double();
            }
            // P + (-P)
            return Self::INFINITY;
        }

        // λ = (y2 - y1) / (x2 - x1)
        let lambda = (other.y - self.y) / (other.x - self.x);

        // x_r = λ^2 - x1 - x2
        let x_r = lambda.square() - self.x - other.x;

        // y_r = λ(x1 - x_r) - y1
        let y_r = lambda * (self.x - x_r) - self.y;

        Affine::new(x_r, y_r)
    }
}

impl AddAssign for Affine {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Sub for Affine {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self + other.negate()
    }
}

impl SubAssign for Affine {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Neg for Affine {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Mul<&Scalar> for Affine {
    type Output = Self;

    fn mul(self, scalar: &Scalar) -> Self {
        <Self as Group>::scalar_mul(&self, scalar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Group;

    fn point(x: &str, y: &str) -> Affine {
        fn field(hex: &str) -> FieldElement {
            let mut bytes = [0u8; 32];
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16).expect("hex digit");
            }
            FieldElement::from_be_bytes(bytes)
        }
        Affine::new(field(x), field(y))
    }

    fn two_g() -> Affine {
        point(
            "c6047f9441ed7d6d3045406e95c07cd85c778e4b8cef3ca7abac09b95c709ee5",
            "1ae168fea63dc339a3c58419466ceaeef7f632653266d0e1236431a950cfe52a",
        )
    }

    fn three_g() -> Affine {
        point(
            "f9308a019258c31049344f85f89d5229b531c845836f99b08601f113bce036f9",
            "388f7b0f632de8140fe337e62a37f3566500a99934c2231b6cb9fd7584b8e672",
        )
    }

    #[test]
    fn test_infinity() {
        let inf = Affine::INFINITY;
        assert!(inf.is_infinity());
        assert!(inf.is_on_curve());
        assert_eq!(inf.to_uncompressed(), None);
    }

    #[test]
    fn test_generator_on_curve() {
        let g = Affine::generator();
        assert!(g.is_on_curve(), "Generator point is not on the curve");
        assert!(!g.is_infinity());
    }

    #[test]
    fn test_off_curve_rejected() {
        let g = Affine::generator();
        let shifted = Affine::new(g.x, g.y + FieldElement::from_u64(1));
        assert!(!shifted.is_on_curve());
    }

    #[test]
    fn test_non_canonical_coordinate_rejected() {
        // (1, y) is on the curve; (1 + p, y) reduces to it but must still fail.
        let y = "4218f20ae6c646b363db68605822fb14264ca8d2587fdd6fbc750d587e76a7ee";
        let valid = point(
            "0000000000000000000000000000000000000000000000000000000000000001",
            y,
        );
        assert!(valid.is_on_curve());

        let aliased = point(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc30",
            y,
        );
        assert!(!aliased.x.is_canonical());
        assert!(!aliased.is_on_curve());
    }

    #[test]
    fn test_uncompressed_encoding() {
        let g = Affine::generator();
        let bytes = g.to_uncompressed().expect("finite point");
        assert_eq!(bytes[0], UNCOMPRESSED_TAG);
        assert_eq!(Affine::from_uncompressed(&bytes), Some(g));

        let mut compressed_tag = bytes;
        compressed_tag[0] = 0x02;
        assert_eq!(Affine::from_uncompressed(&compressed_tag), None);
    }

    #[test]
    fn test_point_addition_with_infinity() {
        let g = Affine::generator();
        let inf = Affine::INFINITY;

        assert_eq!(g + inf, g);
        assert_eq!(inf + g, g);
        assert_eq!(inf + inf, inf);
    }

    #[test]
    fn test_known_multiples() {
        let g = Affine::generator();
        assert_eq!(g.double(), two_g());
        assert_eq!(g + g, two_g());
        assert_eq!(two_g() + g, three_g());
        assert!(three_g().is_on_curve());
    }

    #[test]
    fn test_point_negation() {
        let g = Affine::generator();
        let neg_g = g.negate();

        assert!(neg_g.is_on_curve());
        assert_eq!(g + neg_g, Affine::INFINITY);
        assert_eq!(three_g() - g, two_g());
    }

    #[test]
    fn test_scalar_multiplication() {
        let g = Affine::generator();
        let result = g.scalar_mul(&Scalar::from_u64(5));

        let expected = g + g + g + g + g;
        assert_eq!(result, expected);
        assert!(result.is_on_curve());
        assert_eq!(g * &Scalar::from_u64(3), three_g());
    }

    #[test]
    fn test_scalar_mul_zero_and_one() {
        let g = Affine::generator();
        assert_eq!(g.scalar_mul(&Scalar::ZERO), Affine::INFINITY);
        assert_eq!(g.scalar_mul(&Scalar::ONE), g);
        assert_eq!(g.mul_u64(0), Affine::INFINITY);
    }

    #[test]
    fn test_order_minus_one() {
        // (n - 1) * G = -G
        let g = Affine::generator();
        let result = g.scalar_mul_windowed(&-Scalar::ONE);
        assert_eq!(result, -g);
    }

    #[test]
    fn test_associativity() {
        let g = Affine::generator();
        let a = Scalar::from_u64(3);
        let b = Scalar::from_u64(5);

        let left = g.scalar_mul(&(a + b));
        let right = g.scalar_mul(&a) + g.scalar_mul(&b);

        assert_eq!(left, right);
    }

    #[test]
    fn test_windowed_scalar_mul() {
        let g = Affine::generator();
        let scalar = Scalar::from_u64(123456);

        let result1 = g.scalar_mul(&scalar);
        let result2 = g.scalar_mul_windowed(&scalar);

        assert_eq!(result1, result2);
        assert!(result1.is_on_curve());
    }

    #[test]
    fn test_mul_u64() {
        let g = Affine::generator();
        let result1 = g.mul_u64(42);
        let result2 = g.scalar_mul(&Scalar::from_u64(42));

        assert_eq!(result1, result2);
        assert_eq!(g.mul_u64(3), three_g());
    }
}
