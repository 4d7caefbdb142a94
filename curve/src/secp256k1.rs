//! Production curve arithmetic backed by the `k256` crate.

use k256::elliptic_curve::ops::Reduce;
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{AffinePoint, EncodedPoint, FieldBytes, ProjectivePoint, U256};

use crate::{Affine, CurveArithmetic, FieldElement, Scalar};

/// secp256k1 arithmetic in projective coordinates, normalized on demand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct K256Curve;

impl K256Curve {
    fn to_k256_scalar(scalar: &Scalar) -> k256::Scalar {
        // `Scalar` is always below n, so this reduction is the identity.
        let bytes = scalar.to_be_bytes();
        <k256::Scalar as Reduce<U256>>::reduce_bytes(FieldBytes::from_slice(&bytes))
    }

    fn encode(point: &Affine) -> EncodedPoint {
        let x = point.x.to_be_bytes();
        let y = point.y.to_be_bytes();
        EncodedPoint::from_affine_coordinates(
            FieldBytes::from_slice(&x),
            FieldBytes::from_slice(&y),
            false,
        )
    }

    fn field(bytes: &FieldBytes) -> FieldElement {
        let mut out = [0u8; 32];
        out.copy_from_slice(bytes);
        FieldElement::from_be_bytes(out)
    }
}

impl CurveArithmetic for K256Curve {
    type Point = ProjectivePoint;

    fn name(&self) -> &'static str {
        "k256"
    }

    fn generator(&self) -> ProjectivePoint {
        ProjectivePoint::GENERATOR
    }

    fn is_on_curve(&self, point: &Affine) -> bool {
        self.lift(point).is_some()
    }

    fn lift(&self, point: &Affine) -> Option<ProjectivePoint> {
        if point.is_infinity() {
            return Some(ProjectivePoint::IDENTITY);
        }

        // Decoding checks both coordinates are in range and satisfy the curve equation.
        let decoded: Option<AffinePoint> =
            AffinePoint::from_encoded_point(&Self::encode(point)).into();
        decoded.map(ProjectivePoint::from)
    }

    fn multiply(&self, point: &ProjectivePoint, scalar: &Scalar) -> ProjectivePoint {
        *point * Self::to_k256_scalar(scalar)
    }

    fn add(&self, a: &ProjectivePoint, b: &ProjectivePoint) -> ProjectivePoint {
        *a + *b
    }

    fn normalize(&self, point: &ProjectivePoint) -> Affine {
        let encoded = point.to_affine().to_encoded_point(false);
        match (encoded.x(), encoded.y()) {
            (Some(x), Some(y)) => Affine::new(Self::field(x), Self::field(y)),
            _ => Affine::INFINITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Group, RandomField, ReferenceCurve};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generator_matches_reference() {
        let curve = K256Curve;
        assert_eq!(curve.normalize(&curve.generator()), Affine::generator());
    }

    #[test]
    fn test_lift_round_trip() {
        let curve = K256Curve;
        let g = Affine::generator();
        let lifted = curve.lift(&g).expect("generator is on the curve");
        assert_eq!(curve.normalize(&lifted), g);
    }

    #[test]
    fn test_off_curve_rejected() {
        let curve = K256Curve;
        let g = Affine::generator();
        let bad = Affine::new(g.x, g.y + FieldElement::from_u64(1));
        assert!(!curve.is_on_curve(&bad));
        assert!(curve.lift(&bad).is_none());
    }

    #[test]
    fn test_non_canonical_coordinate_rejected() {
        let curve = K256Curve;
        let g = Affine::generator();
        let bad = Affine::new(FieldElement::from_be_bytes([0xff; 32]), g.y);
        assert!(!curve.is_on_curve(&bad));
    }

    #[test]
    fn test_identity_handling() {
        let curve = K256Curve;
        assert!(curve.is_on_curve(&Affine::INFINITY));

        let zero = curve.multiply(&curve.generator(), &Scalar::ZERO);
        assert_eq!(curve.normalize(&zero), Affine::INFINITY);

        let g = curve.generator();
        let neg = curve.multiply(&g, &-Scalar::ONE);
        assert_eq!(curve.normalize(&curve.add(&g, &neg)), Affine::INFINITY);
    }

    #[test]
    fn test_multiply_matches_reference() {
        let k256 = K256Curve;
        let reference = ReferenceCurve;
        let mut rng = StdRng::seed_from_u64(42);
        let scalar = Scalar::random(&mut rng);

        let fast = k256.normalize(&k256.multiply(&k256.generator(), &scalar));
        let slow = reference.normalize(&reference.multiply(&reference.generator(), &scalar));
        assert_eq!(fast, slow);
        assert!(reference.is_on_curve(&fast));
    }

    #[test]
    fn test_add_matches_reference() {
        let k256 = K256Curve;
        let reference = ReferenceCurve;

        let a = Affine::generator().mul_u64(11);
        let b = Affine::generator().mul_u64(31);

        let lifted_a = k256.lift(&a).expect("on curve");
        let lifted_b = k256.lift(&b).expect("on curve");
        let fast = k256.normalize(&k256.add(&lifted_a, &lifted_b));

        assert_eq!(fast, reference.add(&a, &b));
        assert_eq!(fast, Affine::generator().mul_u64(42));
    }
}
