//! Coded bit input.

use bitvec::order::Lsb0;
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

use crate::error::{Error, Result};

/// Anything that can hand the modulator an ordered, read-only run of
/// coded and interleaved bits.
pub trait BitSource {
    fn bits(&self) -> &BitSlice;
}

impl BitSource for BitSlice {
    fn bits(&self) -> &BitSlice {
        self
    }
}

impl BitSource for BitVec {
    fn bits(&self) -> &BitSlice {
        self.as_bitslice()
    }
}

/// Parse a string of '0' and '1' characters. Whitespace and '_' are
/// accepted as separators.
pub fn parse_bits(text: &str) -> Result<BitVec> {
    let mut bits = BitVec::with_capacity(text.len());
    for (offset, ch) in text.char_indices() {
        match ch {
            '0' => bits.push(false),
            '1' => bits.push(true),
            '_' => {}
            c if c.is_whitespace() => {}
            c => return Err(Error::InvalidBit { ch: c, offset }),
        }
    }
    Ok(bits)
}

/// Unpack bytes least-significant bit first, the order bits go on the air.
pub fn bits_from_bytes(bytes: &[u8]) -> BitVec {
    BitSlice::<u8, Lsb0>::from_slice(bytes)
        .iter()
        .by_vals()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::bitvec;

    #[test]
    fn parses_with_separators() {
        let bits = parse_bits("10_01\n 11").expect("parse");
        assert_eq!(bits, bitvec![1, 0, 0, 1, 1, 1]);
    }

    #[test]
    fn rejects_other_characters() {
        assert_eq!(
            parse_bits("0102"),
            Err(Error::InvalidBit { ch: '2', offset: 3 })
        );
    }

    #[test]
    fn bytes_unpack_lsb_first() {
        let bits = bits_from_bytes(&[0b0000_0101, 0x80]);
        assert_eq!(bits.len(), 16);
        assert_eq!(bits, bitvec![1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1]);
    }

    #[test]
    fn sources_expose_their_bits() {
        let owned = bitvec![1, 1, 0];
        assert_eq!(BitSource::bits(&owned).len(), 3);
        assert_eq!(BitSource::bits(owned.as_bitslice()).count_ones(), 2);
    }
}
