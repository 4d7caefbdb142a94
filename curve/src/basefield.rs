//! Base field of secp256k1. p = 0xfffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f
//!
//! Elements are stored as 32 big-endian bytes, exactly as they appear in an
//! encoded point. Decoding never reduces: a coordinate >= p is kept as-is and
//! reported by [`FieldElement::is_canonical`], so curve checks can reject it.

use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{Add, Div, Mul, Neg, Sub};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

// p = 2^256 - 2^32 - 977
const MODULUS: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xfc, 0x2f,
];

#[inline]
fn modulus() -> BigUint {
    BigUint::from_bytes_be(&MODULUS)
}

/// Element of the secp256k1 base field, big-endian.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldElement([u8; 32]);

impl FieldElement {
    pub const ZERO: Self = FieldElement([0; 32]);

    /// Wrap raw big-endian bytes. No reduction takes place.
    #[inline]
    pub const fn from_be_bytes(bytes: [u8; 32]) -> Self {
        FieldElement(bytes)
    }

    #[inline]
    pub const fn to_be_bytes(&self) -> [u8; 32] {
        self.0
    }

    pub fn from_u64(val: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&val.to_be_bytes());
        FieldElement(bytes)
    }

    /// Whether the stored integer is strictly below p.
    #[inline]
    pub fn is_canonical(&self) -> bool {
        // Lexicographic order on big-endian bytes is numeric order.
        self.0 < MODULUS
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == [0; 32]
    }

    pub fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplicative inverse via Fermat, a^(p-2). Zero maps to zero.
    pub fn inverse(&self) -> Self {
        let p = modulus();
        let exp = &p - 2u32;
        Self::from_biguint(&self.to_biguint().modpow(&exp, &p))
    }

    fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(&self.0) % modulus()
    }

    fn from_biguint(val: &BigUint) -> Self {
        let digits = val.to_bytes_be();
        let mut bytes = [0u8; 32];
        bytes[32 - digits.len()..].copy_from_slice(&digits);
        FieldElement(bytes)
    }
}

impl Add for FieldElement {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_biguint(&((self.to_biguint() + rhs.to_biguint()) % modulus()))
    }
}

impl Sub for FieldElement {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let p = modulus();
        Self::from_biguint(&((self.to_biguint() + &p - rhs.to_biguint()) % p))
    }
}

impl Mul for FieldElement {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_biguint(&((self.to_biguint() * rhs.to_biguint()) % modulus()))
    }
}

#[allow(clippy::suspicious_arithmetic_impl)]
impl Div for FieldElement {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl Neg for FieldElement {
    type Output = Self;

    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl Display for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl Debug for FieldElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({})", self)
    }
}
