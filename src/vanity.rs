// Human-readable pseudo-addresses with a caller-chosen prefix.

use log::{debug, trace};

use crate::address::{self, ADDRESS_LEN, PAYLOAD_LEN, VERSION};
use crate::base58;
use crate::error::Error;

/// Digit 29, half of 58.
const MEDIAN_SYMBOL: char = 'W';
/// Median symbol followed by five zero-digit symbols.
const PLACEHOLDER: &str = "W11111";
/// Longest base58 rendering of a 25-byte address with a zero version byte.
pub const MAX_ENCODED_LEN: usize = 34;
/// Longest prefix that still leaves room for the placeholder.
pub const MAX_PREFIX_LEN: usize = MAX_ENCODED_LEN - PLACEHOLDER.len();
pub const ALGORITHM_NAME_LEN: usize = 6;
/// Hex characters of a digest covered by one address.
pub const CHUNK_LEN: usize = 16;
/// Chunk indexes stay a single hex digit, which is never `0`.
pub const MAX_CHUNKS: usize = 15;
const SHA256_HEX_LEN: usize = 64;

fn violated(prefix: &str) -> Error {
    Error::PrefixConstraintViolated { prefix: prefix.to_string() }
}

/// Decode `prefix` plus placeholder into 25 address bytes, padding with the
/// median symbol until the decoded length fits.
fn placeholder_address(prefix: &str) -> Result<Vec<u8>, Error> {
    for filler in 0..=(MAX_PREFIX_LEN - prefix.len()) {
        let mut candidate = String::with_capacity(MAX_ENCODED_LEN);
        candidate.push_str(prefix);
        candidate.extend(std::iter::repeat(MEDIAN_SYMBOL).take(filler));
        candidate.push_str(PLACEHOLDER);

        let bytes = base58::decode_base58(&candidate)?;
        if bytes.len() == ADDRESS_LEN && bytes[0] == VERSION {
            if filler > 0 {
                debug!("padded prefix {:?} with {} median symbols", prefix, filler);
            }
            return Ok(bytes);
        }
        trace!("candidate {} decodes to {} bytes", candidate, bytes.len());
    }
    Err(violated(prefix))
}

/// Build a checksum-valid address that starts with `prefix`.
pub fn hr_address(prefix: &str) -> Result<String, Error> {
    if prefix.len() > MAX_PREFIX_LEN {
        return Err(violated(prefix));
    }
    // Also makes `prefix` ASCII.
    base58::check_symbols(prefix)?;

    // The placeholder's trailing six digits sit at the middle of their range.
    // Swapping its last four bytes for the real checksum moves the number by
    // less than 2^32, inside the 29 * 58^5 of headroom either way, so no carry
    // or borrow reaches the prefix digits.
    let placeholder = placeholder_address(prefix)?;
    let encoded = base58::encode_base58(&address::append_checksum(&placeholder[..PAYLOAD_LEN]));
    if !encoded.starts_with(prefix) {
        return Err(violated(prefix));
    }
    Ok(encoded)
}

/// One pseudo-address per 16 hex characters of `hexdigest`, at most 15.
///
/// Each prefix spells out the algorithm name, the 1-based chunk index in hex
/// and the chunk itself, with `0` (not in the alphabet) written as `o`.
pub fn hash_to_hr_addresses(algorithm: &str, hexdigest: &str) -> Result<Vec<String>, Error> {
    let name_len = algorithm.chars().count();
    if name_len != ALGORITHM_NAME_LEN {
        return Err(Error::InvalidLength { expected: ALGORITHM_NAME_LEN, actual: name_len });
    }
    let bad = hexdigest.chars().enumerate().find(|(_, c)| !c.is_ascii_hexdigit());
    if let Some((position, symbol)) = bad {
        return Err(Error::InvalidSymbol { symbol, position });
    }
    if hexdigest.len() / CHUNK_LEN > MAX_CHUNKS {
        return Err(Error::InvalidLength {
            expected: MAX_CHUNKS * CHUNK_LEN,
            actual: hexdigest.len(),
        });
    }

    hexdigest
        .as_bytes()
        .chunks_exact(CHUNK_LEN)
        .enumerate()
        .map(|(i, chunk)| {
            // Only ASCII hex digits are left at this point.
            let chunk: String = chunk
                .iter()
                .map(|&b| if b == b'0' { 'o' } else { char::from(b) })
                .collect();
            let prefix = format!("1{}x{:x}x{}x", algorithm, i + 1, chunk);
            trace!("chunk {} prefix {}", i + 1, prefix);
            hr_address(&prefix)
        })
        .collect()
}

/// Pseudo-addresses for a hex SHA-256 digest.
pub fn sha256_to_hr_addresses(hexdigest: &str) -> Result<Vec<String>, Error> {
    if hexdigest.len() != SHA256_HEX_LEN {
        return Err(Error::InvalidLength { expected: SHA256_HEX_LEN, actual: hexdigest.len() });
    }
    hash_to_hr_addresses("SHA256", hexdigest)
}
