use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Access to a scalar as a 256-bit unsigned integer.
pub trait ScalarBits {
    /// Little-endian 64-bit limbs.
    fn to_u64_limbs(&self) -> [u64; 4];

    /// Index one past the highest set bit, 0 for zero.
    fn bit_len(&self) -> usize {
        let limbs = self.to_u64_limbs();
        limbs
            .iter()
            .rposition(|&limb| limb != 0)
            .map_or(0, |top| top * 64 + (64 - limbs[top].leading_zeros() as usize))
    }

    fn bit(&self, index: usize) -> bool {
        let limbs = self.to_u64_limbs();
        (limbs[index / 64] >> (index % 64)) & 1 == 1
    }

    /// The 4-bit digit starting at bit `4 * index`.
    fn nibble(&self, index: usize) -> usize {
        let limbs = self.to_u64_limbs();
        ((limbs[index / 16] >> ((index % 16) * 4)) & 0xF) as usize
    }
}

impl ScalarBits for u64 {
    fn to_u64_limbs(&self) -> [u64; 4] {
        [*self, 0, 0, 0]
    }
}

/// Additive group of curve points.
pub trait Group:
    Sized + Copy + Add<Output = Self> + AddAssign + Sub<Output = Self> + SubAssign + Neg<Output = Self>
{
    type Scalar: ScalarBits;

    fn identity() -> Self;
    fn is_identity(&self) -> bool;
    fn generator() -> Self;
    fn double(&self) -> Self;
    fn negate(&self) -> Self;

    /// Double-and-add, most significant bit first. Running time depends on
    /// the bit length of the scalar.
    fn scalar_mul(&self, scalar: &Self::Scalar) -> Self {
        double_and_add(*self, scalar)
    }

    /// Fixed 4-bit window over all 64 digits.
    fn scalar_mul_windowed(&self, scalar: &Self::Scalar) -> Self {
        if self.is_identity() {
            return Self::identity();
        }

        // table[i] = i * self
        let mut table = [Self::identity(); 16];
        table[1] = *self;
        for i in 2..16 {
            table[i] = table[i - 1] + *self;
        }

        (0..64).rev().fold(Self::identity(), |acc, index| {
            let acc = acc.double().double().double().double();
            match scalar.nibble(index) {
                0 => acc,
                digit => acc + table[digit],
            }
        })
    }

    fn mul_u64(&self, n: u64) -> Self {
        double_and_add(*self, &n)
    }
}

fn double_and_add<G: Group, S: ScalarBits>(point: G, scalar: &S) -> G {
    (0..scalar.bit_len()).rev().fold(G::identity(), |acc, index| {
        let acc = acc.double();
        if scalar.bit(index) { acc + point } else { acc }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_len() {
        assert_eq!(0u64.bit_len(), 0);
        assert_eq!(1u64.bit_len(), 1);
        assert_eq!(0x10u64.bit_len(), 5);
        assert_eq!(u64::MAX.bit_len(), 64);
    }

    #[test]
    fn test_nibbles() {
        let n = 0xabcdu64;
        assert_eq!(n.nibble(0), 0xd);
        assert_eq!(n.nibble(3), 0xa);
        assert_eq!(n.nibble(4), 0);
        assert_eq!(n.nibble(63), 0);
        assert!(n.bit(0));
        assert!(!n.bit(1));
    }
}
