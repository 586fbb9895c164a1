//! Grouping of constellation points into OFDM symbols.

use std::fmt;
use std::str::FromStr;

use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;

use crate::constellation::{map, ConstellationPoint};
use crate::field::HEADER_BITS;
use crate::scheme::{ModulationScheme, SIGNAL_SCHEME};
use crate::subcarrier::DATA_SUBCARRIERS;
use crate::symbol::OfdmSymbol;

/// What to do with DATA bits that do not fill a whole OFDM symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TailPolicy {
    /// Discard the trailing bits.
    #[default]
    Drop,
    /// Append zero bits up to the next symbol boundary and emit it.
    Pad,
}

impl TailPolicy {
    pub fn name(self) -> &'static str {
        match self {
            TailPolicy::Drop => "drop",
            TailPolicy::Pad => "pad",
        }
    }
}

impl FromStr for TailPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drop" => Ok(TailPolicy::Drop),
            "pad" => Ok(TailPolicy::Pad),
            other => Err(format!("unknown tail policy: {}", other)),
        }
    }
}

impl fmt::Display for TailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Coded bits carried by one OFDM symbol (N_CBPS).
pub fn bits_per_symbol(scheme: ModulationScheme) -> usize {
    DATA_SUBCARRIERS * scheme.code_word_length()
}

/// BPSK-map the 48 SIGNAL bits into a single OFDM symbol.
///
/// # Panics
///
/// If `header` is not exactly 48 bits long.
pub fn header_symbol(header: &BitSlice) -> OfdmSymbol {
    assert_eq!(
        header.len(),
        HEADER_BITS,
        "SIGNAL field must be {} bits",
        HEADER_BITS
    );
    let mut data = [map(SIGNAL_SCHEME, &header[..1]); DATA_SUBCARRIERS];
    for (slot, bit) in data.iter_mut().zip(header.chunks_exact(1)) {
        *slot = map(SIGNAL_SCHEME, bit);
    }
    OfdmSymbol::new(data)
}

/// Map `bits` onto constellation points, one per complete group of
/// `code_word_length` bits. A short trailing group is ignored.
pub fn map_bits(scheme: ModulationScheme, bits: &BitSlice) -> Vec<&'static ConstellationPoint> {
    bits.chunks_exact(scheme.code_word_length())
        .map(|group| map(scheme, group))
        .collect()
}

/// Map the DATA field and split it into OFDM symbols of 48 points each.
pub fn payload_symbols(
    scheme: ModulationScheme,
    payload: &BitSlice,
    policy: TailPolicy,
) -> Vec<OfdmSymbol> {
    let symbol_bits = bits_per_symbol(scheme);
    let tail = payload.len() % symbol_bits;

    let padded: BitVec;
    let bits = match policy {
        TailPolicy::Drop => {
            if tail != 0 {
                tracing::debug!(
                    scheme = %scheme,
                    dropped_bits = tail,
                    "trailing DATA bits do not fill an OFDM symbol"
                );
            }
            &payload[..payload.len() - tail]
        }
        TailPolicy::Pad if tail != 0 => {
            let pad_bits = symbol_bits - tail;
            tracing::debug!(scheme = %scheme, pad_bits, "padding DATA field");
            let mut bits = payload.to_bitvec();
            bits.resize(payload.len() + pad_bits, false);
            padded = bits;
            padded.as_bitslice()
        }
        TailPolicy::Pad => payload,
    };

    map_bits(scheme, bits)
        .chunks_exact(DATA_SUBCARRIERS)
        .filter_map(OfdmSymbol::from_points)
        .collect()
}
