// Base58 encoding and decoding on top of the grouped digit converter.

use crate::address;
use crate::convert::{self, Radix};
use crate::error::Error;

pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Symbol standing for digit zero; one per leading zero byte.
pub const ZERO_SYMBOL: char = ALPHABET[0] as char;

/// ASCII to digit value, `None` for anything outside the alphabet.
static DIGIT_VALUES: [Option<u8>; 128] = digit_table();

const fn digit_table() -> [Option<u8>; 128] {
    let mut table = [None; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = Some(i as u8);
        i += 1;
    }
    table
}

fn digit_value(position: usize, symbol: char) -> Result<u32, Error> {
    match DIGIT_VALUES.get(u32::from(symbol) as usize).copied().flatten() {
        Some(v) => Ok(u32::from(v)),
        None => Err(Error::InvalidSymbol { symbol, position }),
    }
}

/// Check that every character of `s` is in the alphabet.
pub fn check_symbols(s: &str) -> Result<(), Error> {
    s.chars()
        .enumerate()
        .try_for_each(|(position, symbol)| digit_value(position, symbol).map(|_| ()))
}

/// Encode bytes as a base58 string.
pub fn encode_base58(data: &[u8]) -> String {
    // Zero bytes vanish in the numeric conversion and are restored by count.
    let zeros = data.iter().take_while(|b| **b == 0).count();
    let input: Vec<u32> = data.iter().map(|&b| u32::from(b)).collect();
    let digits = convert::convert_grouped(&input, Radix::BYTES, Radix::BASE58);

    let mut result = String::with_capacity(zeros + digits.len());
    for _ in 0..zeros {
        result.push(ZERO_SYMBOL);
    }
    for d in digits {
        result.push(ALPHABET[d as usize] as char);
    }
    result
}

/// Decode a base58 string into bytes.
pub fn decode_base58(s: &str) -> Result<Vec<u8>, Error> {
    let input = s
        .chars()
        .enumerate()
        .map(|(position, symbol)| digit_value(position, symbol))
        .collect::<Result<Vec<u32>, Error>>()?;
    let zeros = input.iter().take_while(|&&d| d == 0).count();
    let bytes = convert::convert_grouped(&input, Radix::BASE58, Radix::BYTES);

    let mut result = Vec::with_capacity(zeros + bytes.len());
    result.extend(std::iter::repeat(0u8).take(zeros));
    // Each digit is below 256 after conversion to Radix::BYTES.
    result.extend(bytes.into_iter().map(|b| b as u8));
    Ok(result)
}

/// Encode data in base58 with a 4-byte checksum.
pub fn encode_base58_check(data: &[u8]) -> String {
    encode_base58(&address::append_checksum(data))
}

/// Decode a base58 string and verify its trailing checksum, returning the payload.
pub fn decode_base58_check(s: &str) -> Result<Vec<u8>, Error> {
    let data = decode_base58(s)?;
    let payload = address::verify_checksum(&data)?;
    Ok(payload.to_vec())
}
