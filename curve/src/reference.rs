use crate::{Affine, CurveArithmetic, Group, Scalar};

/// Curve arithmetic built only on this crate's affine formulas.
///
/// Slow and variable-time. It shares no code with [`crate::K256Curve`], which
/// makes it useful as an independent cross-check of the production backend.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceCurve;

impl CurveArithmetic for ReferenceCurve {
    type Point = Affine;

    fn name(&self) -> &'static str {
        "reference"
    }

    fn generator(&self) -> Affine {
        Affine::GENERATOR
    }

    fn is_on_curve(&self, point: &Affine) -> bool {
        point.is_on_curve()
    }

    fn lift(&self, point: &Affine) -> Option<Affine> {
        point.is_on_curve().then_some(*point)
    }

    fn multiply(&self, point: &Affine, scalar: &Scalar) -> Affine {
        point.scalar_mul_windowed(scalar)
    }

    fn add(&self, a: &Affine, b: &Affine) -> Affine {
        *a + *b
    }

    // Affine results are already in canonical form.
    fn normalize(&self, point: &Affine) -> Affine {
        *point
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldElement;

    #[test]
    fn test_lift_rejects_off_curve() {
        let curve = ReferenceCurve;
        let g = Affine::generator();
        assert_eq!(curve.lift(&g), Some(g));

        let bad = Affine::new(g.x, g.y + FieldElement::from_u64(1));
        assert!(!curve.is_on_curve(&bad));
        assert_eq!(curve.lift(&bad), None);
    }

    #[test]
    fn test_equation_shape() {
        // 7*G == 2*(3*G) + G
        let curve = ReferenceCurve;
        let g = curve.generator();
        let left = curve.normalize(&curve.multiply(&g, &Scalar::from_u64(7)));

        let three_g = curve.multiply(&g, &Scalar::from_u64(3));
        let six_g = curve.multiply(&three_g, &Scalar::from_u64(2));
        let right = curve.normalize(&curve.add(&six_g, &g));

        assert_eq!(left, right);
        assert!(curve.is_on_curve(&right));
    }
}
