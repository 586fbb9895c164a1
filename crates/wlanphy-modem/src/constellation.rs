//! Bit group to constellation point mapping.
//!
//! Tables follow the IEEE 802.11 OFDM Gray-coded assignment. The first bit
//! of a group (b0, earliest on the air) is the least-significant bit of the
//! table index; the low half of the group selects I and the high half
//! selects Q. Every table is normalized to unit average power.

use bitvec::slice::BitSlice;
use rustfft::num_complex::Complex;

use crate::scheme::ModulationScheme;

pub type ConstellationPoint = Complex<f64>;

const fn point(re: f64, im: f64) -> ConstellationPoint {
    Complex { re, im }
}

/// Builds a square QAM table from the per-axis levels, indexed by
/// `i_bits | q_bits << log2(L)`.
const fn square<const N: usize, const L: usize>(levels: [f64; L]) -> [ConstellationPoint; N] {
    let mut table = [point(0.0, 0.0); N];
    let mut idx = 0;
    while idx < N {
        table[idx] = point(levels[idx % L], levels[idx / L]);
        idx += 1;
    }
    table
}

static BPSK: [ConstellationPoint; 2] = [point(-1.0, 0.0), point(1.0, 0.0)];

const QPSK_NORM: f64 = std::f64::consts::FRAC_1_SQRT_2;
static QPSK: [ConstellationPoint; 4] = square([-QPSK_NORM, QPSK_NORM]);

// 1/sqrt(10)
const QAM16_NORM: f64 = 0.316_227_766_016_837_94;
// b0b1: 00 -> -3, 10 -> +3, 01 -> -1, 11 -> +1
const QAM16_LEVELS: [f64; 4] = [
    -3.0 * QAM16_NORM,
    3.0 * QAM16_NORM,
    -QAM16_NORM,
    QAM16_NORM,
];
static QAM16: [ConstellationPoint; 16] = square(QAM16_LEVELS);

// 1/sqrt(42)
const QAM64_NORM: f64 = 0.154_303_349_962_091_9;
// b0b1b2: 000 -> -7, 100 -> +7, 010 -> -1, 110 -> +1,
//         001 -> -5, 101 -> +5, 011 -> -3, 111 -> +3
const QAM64_LEVELS: [f64; 8] = [
    -7.0 * QAM64_NORM,
    7.0 * QAM64_NORM,
    -QAM64_NORM,
    QAM64_NORM,
    -5.0 * QAM64_NORM,
    5.0 * QAM64_NORM,
    -3.0 * QAM64_NORM,
    3.0 * QAM64_NORM,
];
static QAM64: [ConstellationPoint; 64] = square(QAM64_LEVELS);

/// The full constellation of `scheme`, indexed by bit group value.
pub fn constellation(scheme: ModulationScheme) -> &'static [ConstellationPoint] {
    match scheme {
        ModulationScheme::Bpsk => &BPSK,
        ModulationScheme::Qpsk => &QPSK,
        ModulationScheme::Qam16 => &QAM16,
        ModulationScheme::Qam64 => &QAM64,
    }
}

/// Table index of a bit group, first bit least significant.
pub fn group_index(bits: &BitSlice) -> usize {
    bits.iter()
        .by_vals()
        .enumerate()
        .fold(0, |acc, (k, bit)| acc | (usize::from(bit) << k))
}

/// Map one bit group onto its constellation point.
///
/// # Panics
///
/// If `bits.len()` differs from the scheme's code word length. Upstream
/// grouping guarantees the length, so a mismatch is a logic error.
pub fn map(scheme: ModulationScheme, bits: &BitSlice) -> &'static ConstellationPoint {
    assert_eq!(
        bits.len(),
        scheme.code_word_length(),
        "{} maps groups of {} bits, got {}",
        scheme,
        scheme.code_word_length(),
        bits.len()
    );
    &constellation(scheme)[group_index(bits)]
}
