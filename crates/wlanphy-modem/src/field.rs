//! SIGNAL / DATA field split.

use bitvec::slice::BitSlice;

use crate::error::{Error, Result};

/// Length of the SIGNAL field, one BPSK OFDM symbol.
pub const HEADER_BITS: usize = 48;

/// Split coded bits into the SIGNAL field and the DATA field that follows.
pub fn split(bits: &BitSlice) -> Result<(&BitSlice, &BitSlice)> {
    if bits.len() < HEADER_BITS {
        return Err(Error::TruncatedHeader { len: bits.len() });
    }
    Ok(bits.split_at(HEADER_BITS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitvec::prelude::*;

    #[test]
    fn splits_at_48() {
        let mut bits = bitvec![0; 48];
        bits.extend([true, false, true]);
        let (header, payload) = split(&bits).expect("split");
        assert_eq!(header.len(), 48);
        assert!(header.not_any());
        assert_eq!(payload.to_bitvec(), bitvec![1, 0, 1]);
    }

    #[test]
    fn header_only_leaves_empty_payload() {
        let bits = bitvec![1; 48];
        let (header, payload) = split(&bits).expect("split");
        assert!(header.all());
        assert!(payload.is_empty());
    }

    #[test]
    fn short_input_is_rejected() {
        let bits = bitvec![1; 47];
        assert_eq!(split(&bits).unwrap_err(), Error::TruncatedHeader { len: 47 });
    }
}
