//! Constants used by the verification gate.

/// Hex characters taken by the point prefix.
pub const PREFIX_HEX_LEN: usize = 2;

/// Hex characters taken by one coordinate.
pub const COORDINATE_HEX_LEN: usize = 64;

/// Hex characters in an encoded point.
///
/// The layout is `[prefix:2][X:64][Y:64]`, with prefix `04`.
pub const POINT_HEX_LEN: usize = PREFIX_HEX_LEN + 2 * COORDINATE_HEX_LEN;

/// Hex characters in an encoded signature scalar (32 bytes, big-endian).
pub const SCALAR_HEX_LEN: usize = 64;

/// Size of a SHA-256 digest in bytes.
pub const DIGEST_SIZE: usize = 32;

/// Compute units charged for one curve-membership check.
pub const COST_CURVE_CHECK: u64 = 1;

/// Compute units charged for one SHA-256 invocation.
pub const COST_HASH: u64 = 1;

/// Compute units charged for one scalar multiplication.
pub const COST_MULTIPLY: u64 = 100;

/// Compute units charged for one point addition.
pub const COST_ADD: u64 = 2;

/// Compute units charged for one normalization.
pub const COST_NORMALIZE: u64 = 1;

/// Compute units consumed by a verification that runs every step:
/// four curve checks, two hashes, two multiplications, one addition and
/// two normalizations.
pub const FULL_VERIFICATION_COST: u64 = 4 * COST_CURVE_CHECK
    + 2 * COST_HASH
    + 2 * COST_MULTIPLY
    + COST_ADD
    + 2 * COST_NORMALIZE;
