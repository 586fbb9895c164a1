//! Frequency-domain modulation for the 802.11 OFDM PHY.
//!
//! Coded bits are split into the 48-bit SIGNAL field, always BPSK, and the
//! DATA field, modulated with the configured scheme. Both are mapped onto
//! the 48 data subcarriers of successive OFDM symbols. Time-domain
//! synthesis (pilots, IFFT, guard interval) happens downstream.

pub mod assembler;
pub mod bits;
pub mod constellation;
mod error;
pub mod field;
pub mod modulator;
pub mod scheme;
pub mod subcarrier;
pub mod symbol;

pub use assembler::TailPolicy;
pub use bits::{bits_from_bytes, parse_bits, BitSource};
pub use constellation::ConstellationPoint;
pub use error::{Error, Result};
pub use modulator::{OfdmModulator, OfdmModulatorBuilder, SymbolModel};
pub use scheme::{ModulationScheme, SIGNAL_SCHEME};
pub use symbol::OfdmSymbol;
