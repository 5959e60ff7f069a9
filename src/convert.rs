// Base conversion of big-endian digit sequences, without a big-integer type.

use crate::error::Error;

/// A digit base together with the number of digits packed into one group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Radix {
    base: u32,
    group_size: u32,
}

impl Radix {
    /// Bytes, three at a time (`256^3 = 16_777_216`).
    pub const BYTES: Radix = Radix { base: 256, group_size: 3 };
    /// Base58 digits, four at a time (`58^4 = 11_316_496`).
    pub const BASE58: Radix = Radix { base: 58, group_size: 4 };

    /// Create a radix, rejecting bases below 2 and groups that overflow 32 bits.
    pub fn new(base: u32, group_size: u32) -> Result<Self, Error> {
        check_base(base)?;
        if group_size == 0 || base.checked_pow(group_size).is_none() {
            return Err(Error::GroupTooWide { base, group_size });
        }
        Ok(Radix { base, group_size })
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    pub fn group_size(&self) -> u32 {
        self.group_size
    }

    /// Base of one packed super-digit, `base^group_size`.
    pub fn group_base(&self) -> u32 {
        self.base.pow(self.group_size)
    }
}

fn check_base(base: u32) -> Result<(), Error> {
    if base < 2 {
        return Err(Error::InvalidBase(base));
    }
    Ok(())
}

fn check_digits(input: &[u32], base: u32) -> Result<(), Error> {
    match input.iter().find(|&&d| d >= base) {
        Some(&digit) => Err(Error::InvalidDigit { digit, base }),
        None => Ok(()),
    }
}

/// Big-endian digits in, little-endian digits out.
///
/// Every digit of `input` must be below `base`. Leading zeros vanish; zero
/// itself comes back as an empty vector.
fn convert_base_reversed<I>(input: I, base: u32, new_base: u32) -> Vec<u32>
where
    I: IntoIterator<Item = u32>,
{
    let base = u64::from(base);
    let new_base = u64::from(new_base);
    let mut result: Vec<u32> = Vec::new();
    for d in input {
        // result = result * base + d, carried out in new_base
        let mut carry = u64::from(d);
        for digit in result.iter_mut() {
            let acc = u64::from(*digit) * base + carry;
            *digit = (acc % new_base) as u32;
            carry = acc / new_base;
        }
        while carry > 0 {
            result.push((carry % new_base) as u32);
            carry /= new_base;
        }
    }
    result
}

/// Convert big-endian `input` digits from `base` to `new_base`, one digit at a time.
///
/// The result carries no leading zero digits. Callers that need to preserve
/// leading zeros have to count them on the input and re-add them.
pub fn convert_base(input: &[u32], base: u32, new_base: u32) -> Result<Vec<u32>, Error> {
    check_base(base)?;
    check_base(new_base)?;
    check_digits(input, base)?;
    let mut result = convert_base_reversed(input.iter().copied(), base, new_base);
    result.reverse();
    Ok(result)
}

/// Same result as [`convert_base`], computed on packed groups of digits.
pub fn convert_base_grouped(input: &[u32], from: Radix, to: Radix) -> Result<Vec<u32>, Error> {
    check_digits(input, from.base)?;
    Ok(convert_grouped(input, from, to))
}

/// Grouped conversion for input already known to be in range.
pub(crate) fn convert_grouped(input: &[u32], from: Radix, to: Radix) -> Vec<u32> {
    let size = from.group_size as usize;
    let padding = (size - input.len() % size) % size;
    let padded: Vec<u32> = std::iter::repeat(0)
        .take(padding)
        .chain(input.iter().copied())
        .collect();
    let grouped = padded
        .chunks(size)
        .map(|chunk| chunk.iter().fold(0u32, |acc, &d| acc * from.base + d));

    let mut result = Vec::new();
    for mut group_digit in convert_base_reversed(grouped, from.group_base(), to.group_base()) {
        for _ in 0..to.group_size {
            result.push(group_digit % to.base);
            group_digit /= to.base;
        }
    }
    result.reverse();

    // Unpacking the top super-digit leaves zero padding in front.
    let leading = result.iter().position(|&d| d != 0).unwrap_or(result.len());
    result.drain(..leading);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_digits(rng: &mut StdRng, base: u32, len: usize) -> Vec<u32> {
        (0..len).map(|_| rng.gen_range(0..base)).collect()
    }

    fn strip_leading_zeros(digits: &[u32]) -> &[u32] {
        let start = digits.iter().position(|&d| d != 0).unwrap_or(digits.len());
        &digits[start..]
    }

    #[test]
    fn decimal_to_binary() {
        assert_eq!(convert_base(&[1, 0], 10, 2).unwrap(), vec![1, 0, 1, 0]);
        assert_eq!(convert_base(&[2, 5, 5], 10, 16).unwrap(), vec![15, 15]);
        assert_eq!(convert_base(&[1, 0, 0], 16, 10).unwrap(), vec![2, 5, 6]);
    }

    #[test]
    fn zero_and_empty() {
        assert!(convert_base(&[], 256, 58).unwrap().is_empty());
        assert!(convert_base(&[0], 256, 58).unwrap().is_empty());
        assert!(convert_base(&[0, 0, 0], 58, 256).unwrap().is_empty());
        assert!(convert_base_grouped(&[], Radix::BYTES, Radix::BASE58).unwrap().is_empty());
        assert!(convert_base_grouped(&[0, 0], Radix::BYTES, Radix::BASE58).unwrap().is_empty());
    }

    #[test]
    fn leading_zeros_are_dropped() {
        assert_eq!(convert_base(&[0, 0, 5], 10, 16).unwrap(), vec![5]);
        assert_eq!(
            convert_base_grouped(&[0, 0, 0, 0, 1], Radix::BYTES, Radix::BASE58).unwrap(),
            vec![1]
        );
    }

    #[test]
    fn round_trip_random() {
        let mut rng = StdRng::seed_from_u64(58);
        for &(base, new_base) in &[(256, 58), (58, 256), (10, 7), (2, 1000), (65_536, 3)] {
            for len in 0..40 {
                let digits = random_digits(&mut rng, base, len);
                let there = convert_base(&digits, base, new_base).unwrap();
                assert!(there.iter().all(|&d| d < new_base));
                let back = convert_base(&there, new_base, base).unwrap();
                assert_eq!(back, strip_leading_zeros(&digits));
            }
        }
    }

    #[test]
    fn grouped_matches_ungrouped() {
        let mut rng = StdRng::seed_from_u64(256);
        let pairs = [
            (Radix::BYTES, Radix::BASE58),
            (Radix::BASE58, Radix::BYTES),
            (Radix::new(10, 9).unwrap(), Radix::new(2, 31).unwrap()),
            (Radix::new(2, 16).unwrap(), Radix::new(7, 1).unwrap()),
        ];
        for (from, to) in pairs {
            for len in 0..64 {
                let digits = random_digits(&mut rng, from.base(), len);
                let plain = convert_base(&digits, from.base(), to.base()).unwrap();
                let grouped = convert_base_grouped(&digits, from, to).unwrap();
                assert_eq!(grouped, plain, "{:?} -> {:?} for {:?}", from, to, digits);
            }
        }
    }

    #[test]
    fn group_sizes() {
        assert_eq!(Radix::BYTES.group_base(), 16_777_216);
        assert_eq!(Radix::BASE58.group_base(), 11_316_496);
        assert_eq!(Radix::new(256, 4), Err(Error::GroupTooWide { base: 256, group_size: 4 }));
        assert_eq!(Radix::new(10, 0), Err(Error::GroupTooWide { base: 10, group_size: 0 }));
        assert_eq!(Radix::new(1, 3), Err(Error::InvalidBase(1)));
    }

    #[test]
    fn rejects_bad_input() {
        assert_eq!(convert_base(&[1], 1, 10), Err(Error::InvalidBase(1)));
        assert_eq!(convert_base(&[1], 10, 0), Err(Error::InvalidBase(0)));
        assert_eq!(
            convert_base(&[3, 10], 10, 2),
            Err(Error::InvalidDigit { digit: 10, base: 10 })
        );
        assert_eq!(
            convert_base_grouped(&[58], Radix::BASE58, Radix::BYTES),
            Err(Error::InvalidDigit { digit: 58, base: 58 })
        );
    }
}
