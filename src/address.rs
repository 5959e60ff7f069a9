// Address layout: version byte, 20-byte digest, first four bytes of sha256d.

use bitcoin::hashes::{ripemd160, sha256, sha256d, Hash};

use crate::base58;
use crate::error::Error;

pub const VERSION: u8 = 0x00;
pub const DIGEST_LEN: usize = 20;
pub const SHA256_LEN: usize = 32;
pub const CHECKSUM_LEN: usize = 4;
/// Version byte plus digest.
pub const PAYLOAD_LEN: usize = 1 + DIGEST_LEN;
/// Payload plus checksum.
pub const ADDRESS_LEN: usize = PAYLOAD_LEN + CHECKSUM_LEN;

/// First four bytes of sha256d(payload).
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = sha256d::Hash::hash(payload).to_byte_array();
    let mut check = [0u8; CHECKSUM_LEN];
    check.copy_from_slice(&hash[..CHECKSUM_LEN]);
    check
}

/// Return `payload` followed by its checksum.
pub fn append_checksum(payload: &[u8]) -> Vec<u8> {
    let mut extended = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    extended.extend_from_slice(payload);
    extended.extend_from_slice(&checksum(payload));
    extended
}

/// Split off the trailing checksum and check it against the rest.
pub fn verify_checksum(data: &[u8]) -> Result<&[u8], Error> {
    if data.len() < CHECKSUM_LEN {
        return Err(Error::TooShort(data.len()));
    }
    let (payload, check) = data.split_at(data.len() - CHECKSUM_LEN);
    let expected = checksum(payload);
    if check != expected.as_slice() {
        let mut actual = [0u8; CHECKSUM_LEN];
        actual.copy_from_slice(check);
        return Err(Error::ChecksumMismatch { expected, actual });
    }
    Ok(payload)
}

/// Prefix a 20-byte digest with the version byte.
pub fn versioned_payload(digest: &[u8]) -> Result<[u8; PAYLOAD_LEN], Error> {
    if digest.len() != DIGEST_LEN {
        return Err(Error::InvalidLength { expected: DIGEST_LEN, actual: digest.len() });
    }
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = VERSION;
    payload[1..].copy_from_slice(digest);
    Ok(payload)
}

/// Raw 25 address bytes for a 20-byte digest.
pub fn address_bytes(digest: &[u8]) -> Result<[u8; ADDRESS_LEN], Error> {
    let payload = versioned_payload(digest)?;
    let mut address = [0u8; ADDRESS_LEN];
    address[..PAYLOAD_LEN].copy_from_slice(&payload);
    address[PAYLOAD_LEN..].copy_from_slice(&checksum(&payload));
    Ok(address)
}

/// Encode a RIPEMD-160 digest (or any other 160-bit value) as an address.
pub fn digest_to_address(digest: &[u8]) -> Result<String, Error> {
    Ok(base58::encode_base58(&address_bytes(digest)?))
}

/// Encode a SHA-256 digest as an address, reducing it through RIPEMD-160 first.
pub fn sha256_to_address(digest: &[u8]) -> Result<String, Error> {
    if digest.len() != SHA256_LEN {
        return Err(Error::InvalidLength { expected: SHA256_LEN, actual: digest.len() });
    }
    digest_to_address(ripemd160::Hash::hash(digest).as_byte_array())
}

/// Address of a public key, or of any other binary data.
pub fn publickey_to_address(publickey: &[u8]) -> Result<String, Error> {
    sha256_to_address(sha256::Hash::hash(publickey).as_byte_array())
}

/// Decode and verify an address, returning the embedded digest.
pub fn decode_address(s: &str) -> Result<[u8; DIGEST_LEN], Error> {
    let data = base58::decode_base58(s)?;
    if data.len() != ADDRESS_LEN {
        return Err(Error::InvalidLength { expected: ADDRESS_LEN, actual: data.len() });
    }
    let payload = verify_checksum(&data)?;
    if payload[0] != VERSION {
        return Err(Error::InvalidVersion(payload[0]));
    }
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&payload[1..]);
    Ok(digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::hashes::hash160;
    use bitcoin::hex::FromHex;

    const GENESIS_HASH160: &str = "62e907b15cbf27d5425399ebf6f0fb50ebb88f18";
    const GENESIS_ADDRESS: &str = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa";

    #[test]
    fn zero_digest_address() {
        assert_eq!(digest_to_address(&[0u8; 20]).unwrap(), "1111111111111111111114oLvT2");
    }

    #[test]
    fn genesis_address() {
        let digest = Vec::<u8>::from_hex(GENESIS_HASH160).unwrap();
        assert_eq!(digest_to_address(&digest).unwrap(), GENESIS_ADDRESS);
        assert_eq!(decode_address(GENESIS_ADDRESS).unwrap().to_vec(), digest);
    }

    #[test]
    fn checksum_layout() {
        let payload = versioned_payload(&[7u8; 20]).unwrap();
        assert_eq!(payload[0], VERSION);
        let full = append_checksum(&payload);
        assert_eq!(full.len(), ADDRESS_LEN);
        assert_eq!(&full[..PAYLOAD_LEN], &payload[..]);
        assert_eq!(full[PAYLOAD_LEN..], checksum(&payload));
        assert_eq!(address_bytes(&[7u8; 20]).unwrap().to_vec(), full);
        assert_eq!(verify_checksum(&full).unwrap(), &payload[..]);
    }

    #[test]
    fn verify_rejects_tampering() {
        let mut full = append_checksum(b"payload");
        full[0] ^= 1;
        assert!(matches!(verify_checksum(&full), Err(Error::ChecksumMismatch { .. })));
        assert_eq!(verify_checksum(&[1, 2, 3]), Err(Error::TooShort(3)));
    }

    #[test]
    fn wrong_digest_lengths() {
        assert_eq!(
            digest_to_address(&[0u8; 19]),
            Err(Error::InvalidLength { expected: 20, actual: 19 })
        );
        assert_eq!(
            sha256_to_address(&[0u8; 20]),
            Err(Error::InvalidLength { expected: 32, actual: 20 })
        );
    }

    #[test]
    fn publickey_matches_hash160() {
        let publickey = b"not really a public key";
        let digest = hash160::Hash::hash(publickey).to_byte_array();
        let address = publickey_to_address(publickey).unwrap();
        assert_eq!(address, digest_to_address(&digest).unwrap());
        assert_eq!(decode_address(&address).unwrap(), digest);

        let sha = sha256::Hash::hash(publickey).to_byte_array();
        assert_eq!(sha256_to_address(&sha).unwrap(), address);
    }

    #[test]
    fn decode_address_errors() {
        assert_eq!(
            decode_address("StV1DL6CwTryKyV"),
            Err(Error::InvalidLength { expected: 25, actual: 11 })
        );
        let mut raw = [5u8; ADDRESS_LEN];
        let check = checksum(&raw[..PAYLOAD_LEN]);
        raw[PAYLOAD_LEN..].copy_from_slice(&check);
        assert_eq!(decode_address(&base58::encode_base58(&raw)), Err(Error::InvalidVersion(5)));
    }
}
