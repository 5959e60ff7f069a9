use thiserror::Error;

/// Errors produced while converting, encoding or building addresses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A character outside the base58 alphabet was found while decoding.
    #[error("invalid base58 character {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },
    /// A digest or name did not have the required fixed length.
    #[error("expected length {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// The requested prefix cannot be kept intact once the checksum is inserted.
    #[error("prefix {prefix:?} cannot be embedded in a checksummed address")]
    PrefixConstraintViolated { prefix: String },
    /// Bases below 2 cannot represent numbers.
    #[error("invalid digit base {0}")]
    InvalidBase(u32),
    /// `base^group_size` must fit a 32-bit super-digit.
    #[error("group of {group_size} digits in base {base} does not fit 32 bits")]
    GroupTooWide { base: u32, group_size: u32 },
    /// An input digit was not smaller than its base.
    #[error("digit {digit} out of range for base {base}")]
    InvalidDigit { digit: u32, base: u32 },
    /// The trailing checksum does not match the payload.
    #[error("checksum {actual:02x?} does not match expected {expected:02x?}")]
    ChecksumMismatch { expected: [u8; 4], actual: [u8; 4] },
    /// Checked data is not even long enough to hold a checksum.
    #[error("data of length {0} too short for a checksum")]
    TooShort(usize),
    /// Address version byte other than zero.
    #[error("unsupported address version {0}")]
    InvalidVersion(u8),
}
