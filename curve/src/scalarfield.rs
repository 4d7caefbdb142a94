//! Scalar field of secp256k1. n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
//!
//! Elements are always fully reduced and stored as [u64; 4] in little-endian
//! limb order. Arithmetic goes through `BigUint`.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::group::ScalarBits;

/// Integer modulo the group order n.
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Scalar {
    limbs: [u64; 4],
}

// Group order: n = 0xfffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141
const MODULUS: [u64; 4] = [
    0xbfd25e8cd0364141,
    0xbaaedce6af48a03b,
    0xfffffffffffffffe,
    0xffffffffffffffff,
];

impl Scalar {
    pub const ZERO: Self = Scalar {
        limbs: [0, 0, 0, 0],
    };

    pub const ONE: Self = Scalar {
        limbs: [1, 0, 0, 0],
    };

    /// The group order n.
    pub fn order() -> BigUint {
        BigUint::from_bytes_be(&limbs_to_be_bytes(MODULUS))
    }

    #[inline]
    pub fn from_u64(val: u64) -> Self {
        Scalar {
            limbs: [val, 0, 0, 0],
        }
    }

    /// Interpret 32 big-endian bytes as an integer and reduce it modulo n.
    pub fn from_be_bytes_reduced(bytes: &[u8; 32]) -> Self {
        Self::from_biguint(&(BigUint::from_bytes_be(bytes) % Self::order()))
    }

    /// Interpret 32 big-endian bytes as an integer, rejecting values >= n.
    pub fn from_canonical_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let limbs = be_bytes_to_limbs(bytes);
        if is_canonical(limbs) {
            Some(Scalar { limbs })
        } else {
            None
        }
    }

    #[inline]
    pub fn to_be_bytes(&self) -> [u8; 32] {
        limbs_to_be_bytes(self.limbs)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.limbs == [0, 0, 0, 0]
    }

    fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(&self.to_be_bytes())
    }

    // `val` must already be below n.
    fn from_biguint(val: &BigUint) -> Self {
        let digits = val.to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes[32 - digits.len()..].copy_from_slice(&digits);
        Scalar {
            limbs: be_bytes_to_limbs(&bytes),
        }
    }
}

#[inline]
fn be_bytes_to_limbs(bytes: &[u8; 32]) -> [u64; 4] {
    let mut limbs = [0u64; 4];
    for (i, limb) in limbs.iter_mut().enumerate() {
        let start = (3 - i) * 8;
        let mut chunk = [0u8; 8];
        chunk.copy_from_slice(&bytes[start..start + 8]);
        *limb = u64::from_be_bytes(chunk);
    }
    limbs
}

#[inline]
fn limbs_to_be_bytes(limbs: [u64; 4]) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (i, limb) in limbs.iter().enumerate() {
        let start = (3 - i) * 8;
        bytes[start..start + 8].copy_from_slice(&limb.to_be_bytes());
    }
    bytes
}

#[inline]
const fn is_canonical(limbs: [u64; 4]) -> bool {
    let (_, borrow) = limbs[0].overflowing_sub(MODULUS[0]);
    let (_, borrow) = borrowing_sub(limbs[1], MODULUS[1], borrow);
    let (_, borrow) = borrowing_sub(limbs[2], MODULUS[2], borrow);
    let (_, borrow) = borrowing_sub(limbs[3], MODULUS[3], borrow);
    borrow
}

/// Helper: Borrowing subtraction
#[inline]
const fn borrowing_sub(a: u64, b: u64, borrow: bool) -> (u64, bool) {
    let (diff, overflow1) = a.overflowing_sub(b);
    let (diff, overflow2) = diff.overflowing_sub(borrow as u64);
    (diff, overflow1 || overflow2)
}

impl ScalarBits for Scalar {
    #[inline]
    fn to_u64_limbs(&self) -> [u64; 4] {
        self.limbs
    }
}

impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_biguint(&((self.to_biguint() + rhs.to_biguint()) % Self::order()))
    }
}

impl AddAssign for Scalar {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let n = Self::order();
        Self::from_biguint(&((self.to_biguint() + &n - rhs.to_biguint()) % n))
    }
}

impl SubAssign for Scalar {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_biguint(&((self.to_biguint() * rhs.to_biguint()) % Self::order()))
    }
}

impl MulAssign for Scalar {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:016x}{:016x}{:016x}{:016x}",
            self.limbs[3], self.limbs[2], self.limbs[1], self.limbs[0]
        )
    }
}

impl Debug for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self)
    }
}
