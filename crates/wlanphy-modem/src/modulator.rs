//! SIGNAL + DATA field modulation into frequency-domain OFDM symbols.

use crate::assembler::{header_symbol, payload_symbols, TailPolicy};
use crate::bits::BitSource;
use crate::error::Result;
use crate::field::split;
use crate::scheme::{ModulationScheme, SIGNAL_SCHEME};
use crate::symbol::OfdmSymbol;

/// OFDM symbols occupied by the SIGNAL field.
pub const HEADER_SYMBOLS: usize = 1;

/// Maps coded bits onto OFDM data subcarriers.
///
/// The payload scheme is fixed at construction; `modulate` takes `&self`
/// and keeps no state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OfdmModulator {
    scheme: ModulationScheme,
    tail_policy: TailPolicy,
}

impl OfdmModulator {
    /// Create a modulator for `scheme` that drops incomplete trailing symbols.
    pub fn new(scheme: ModulationScheme) -> Self {
        Self {
            scheme,
            tail_policy: TailPolicy::default(),
        }
    }

    /// Resolve a configured scheme name (`BPSK`, `QPSK`, `QAM-16`, `QAM-64`).
    pub fn from_config(modulation: &str) -> Result<Self> {
        Self::builder(modulation).build()
    }

    /// Create a builder for the given scheme name.
    pub fn builder(modulation: &str) -> OfdmModulatorBuilder {
        OfdmModulatorBuilder::new(modulation)
    }

    /// Payload scheme.
    pub fn scheme(&self) -> ModulationScheme {
        self.scheme
    }

    pub fn tail_policy(&self) -> TailPolicy {
        self.tail_policy
    }

    /// Modulate the SIGNAL field and the DATA field that follows it.
    pub fn modulate<S>(&self, source: &S) -> Result<SymbolModel>
    where
        S: BitSource + ?Sized,
    {
        let bits = source.bits();
        let (header, payload) = split(bits)?;

        let payload = payload_symbols(self.scheme, payload, self.tail_policy);
        let payload_len = payload.len();
        let mut symbols = Vec::with_capacity(HEADER_SYMBOLS + payload_len);
        symbols.push(header_symbol(header));
        symbols.extend(payload);

        tracing::debug!(
            scheme = %self.scheme,
            input_bits = bits.len(),
            payload_symbols = payload_len,
            "modulated PPDU"
        );

        Ok(SymbolModel {
            symbols,
            scheme: self.scheme,
        })
    }
}

/// Builder for configuring an [`OfdmModulator`].
#[derive(Debug, Clone)]
pub struct OfdmModulatorBuilder {
    modulation: String,
    tail_policy: TailPolicy,
}

impl OfdmModulatorBuilder {
    pub fn new(modulation: &str) -> Self {
        Self {
            modulation: modulation.to_string(),
            tail_policy: TailPolicy::default(),
        }
    }

    /// Set how DATA bits short of a full OFDM symbol are handled.
    pub fn tail_policy(mut self, policy: TailPolicy) -> Self {
        self.tail_policy = policy;
        self
    }

    /// Resolve the scheme name and build the modulator.
    pub fn build(self) -> Result<OfdmModulator> {
        let scheme = self.modulation.parse::<ModulationScheme>()?;
        Ok(OfdmModulator {
            scheme,
            tail_policy: self.tail_policy,
        })
    }
}

/// OFDM symbols of one PPDU in transmission order: the SIGNAL symbol,
/// then the DATA symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolModel {
    symbols: Vec<OfdmSymbol>,
    scheme: ModulationScheme,
}

impl SymbolModel {
    /// Payload scheme.
    pub fn scheme(&self) -> ModulationScheme {
        self.scheme
    }

    pub fn header_scheme(&self) -> ModulationScheme {
        SIGNAL_SCHEME
    }

    pub fn header(&self) -> &[OfdmSymbol] {
        &self.symbols[..HEADER_SYMBOLS]
    }

    pub fn payload(&self) -> &[OfdmSymbol] {
        &self.symbols[HEADER_SYMBOLS..]
    }

    pub fn header_len(&self) -> usize {
        HEADER_SYMBOLS
    }

    pub fn payload_len(&self) -> usize {
        self.symbols.len() - HEADER_SYMBOLS
    }

    pub fn symbols(&self) -> &[OfdmSymbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn into_symbols(self) -> Vec<OfdmSymbol> {
        self.symbols
    }
}

impl IntoIterator for SymbolModel {
    type Item = OfdmSymbol;
    type IntoIter = std::vec::IntoIter<OfdmSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.into_iter()
    }
}

impl<'a> IntoIterator for &'a SymbolModel {
    type Item = &'a OfdmSymbol;
    type IntoIter = std::slice::Iter<'a, OfdmSymbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
