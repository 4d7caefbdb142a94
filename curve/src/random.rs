use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::Scalar;

/// Helper trait for sampling random field elements.
pub trait RandomField: Sized {
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomField for Scalar {
    #[inline]
    fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        StandardUniform.sample(rng)
    }
}

/// Rejection sampling over 256-bit strings; n is close enough to 2^256 that
/// a retry is practically never needed.
impl Distribution<Scalar> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Scalar {
        loop {
            let bytes: [u8; 32] = rng.random();
            if let Some(scalar) = Scalar::from_canonical_be_bytes(&bytes) {
                return scalar;
            }
        }
    }
}
