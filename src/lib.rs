// Base58 codec, checksummed addresses and caller-prefixed pseudo-addresses.

pub mod address;
pub mod base58;
pub mod convert;
pub mod error;
pub mod vanity;

pub use address::{
    append_checksum, checksum, decode_address, digest_to_address, publickey_to_address,
    sha256_to_address, verify_checksum, versioned_payload,
};
pub use base58::{decode_base58, decode_base58_check, encode_base58, encode_base58_check};
pub use convert::{convert_base, convert_base_grouped, Radix};
pub use error::Error;
pub use vanity::{hash_to_hr_addresses, hr_address, sha256_to_hr_addresses};
