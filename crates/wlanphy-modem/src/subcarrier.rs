//! Data subcarrier numbering for one 20 MHz OFDM symbol.
//!
//! Local positions 0..=47 map onto subcarriers -26..=-22, -20..=-8,
//! -6..=-1, 1..=6, 8..=20 and 22..=26 (IEEE 802.11 M(k)). Indices here are
//! biased by 26 so they can address arrays directly.

/// Data-bearing subcarriers per OFDM symbol.
pub const DATA_SUBCARRIERS: usize = 48;

/// Width of the occupied channel, -26..=26.
pub const SUBCARRIER_SPAN: usize = 53;

/// Biased index of the DC subcarrier.
pub const CENTER_SUBCARRIER: usize = 26;

/// Biased indices of the pilot tones at -21, -7, 7 and 21.
pub const PILOT_SUBCARRIERS: [usize; 4] = [5, 19, 33, 47];

/// Translate a local position into its biased subcarrier index.
///
/// # Panics
///
/// If `position` is outside `0..=47`.
pub fn translate(position: usize) -> usize {
    match try_translate(position) {
        Some(index) => index,
        None => panic!("the domain of M(k) (k = {}) is [0,47]", position),
    }
}

/// Like [`translate`], returning `None` outside the domain.
pub fn try_translate(position: usize) -> Option<usize> {
    let index = match position {
        0..=4 => position,
        5..=17 => position + 1,
        18..=23 => position + 2,
        24..=29 => position + 3,
        30..=42 => position + 4,
        43..=47 => position + 5,
        _ => return None,
    };
    Some(index)
}

/// Inverse of [`translate`]: the local position that lands on `index`.
/// DC, pilot and out-of-span indices have none.
pub fn position_of(index: usize) -> Option<usize> {
    let position = match index {
        0..=4 => index,
        6..=18 => index - 1,
        20..=25 => index - 2,
        27..=32 => index - 3,
        34..=46 => index - 4,
        48..=52 => index - 5,
        _ => return None,
    };
    Some(position)
}

/// Remove the bias, giving the subcarrier number relative to DC.
pub fn to_signed(index: usize) -> i32 {
    index as i32 - CENTER_SUBCARRIER as i32
}
