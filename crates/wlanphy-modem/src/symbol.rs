//! Frequency-domain OFDM symbol.

use rustfft::num_complex::Complex;

use crate::constellation::ConstellationPoint;
use crate::subcarrier::{position_of, translate, DATA_SUBCARRIERS, SUBCARRIER_SPAN};

/// One OFDM symbol with all 48 data subcarriers occupied.
///
/// Points are stored by local position and addressed by subcarrier through
/// the M(k) translation. DC and pilot subcarriers are never occupied.
#[derive(Debug, Clone, PartialEq)]
pub struct OfdmSymbol {
    data: [&'static ConstellationPoint; DATA_SUBCARRIERS],
}

impl OfdmSymbol {
    pub(crate) fn new(data: [&'static ConstellationPoint; DATA_SUBCARRIERS]) -> Self {
        Self { data }
    }

    /// Build a symbol from exactly 48 points in local position order.
    /// Returns `None` for any other length.
    pub fn from_points(points: &[&'static ConstellationPoint]) -> Option<Self> {
        points.try_into().ok().map(Self::new)
    }

    /// Point at local position `position` (0..=47).
    pub fn point(&self, position: usize) -> Option<&'static ConstellationPoint> {
        self.data.get(position).copied()
    }

    /// Points in local position order.
    pub fn points(&self) -> &[&'static ConstellationPoint; DATA_SUBCARRIERS] {
        &self.data
    }

    /// Point carried on biased subcarrier `index`, if it is a data subcarrier.
    pub fn subcarrier(&self, index: usize) -> Option<&'static ConstellationPoint> {
        position_of(index).map(|position| self.data[position])
    }

    /// Occupied subcarriers in ascending order as `(biased index, point)`.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &'static ConstellationPoint)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(position, &point)| (translate(position), point))
    }

    /// Dense -26..=26 layout with zeros on DC and pilot subcarriers.
    pub fn to_dense(&self) -> [Complex<f64>; SUBCARRIER_SPAN] {
        let mut dense = [Complex::new(0.0, 0.0); SUBCARRIER_SPAN];
        for (index, point) in self.occupied() {
            dense[index] = *point;
        }
        dense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellation::constellation;
    use crate::scheme::ModulationScheme;
    use crate::subcarrier::{CENTER_SUBCARRIER, PILOT_SUBCARRIERS};

    fn ramp() -> OfdmSymbol {
        let table = constellation(ModulationScheme::Qam64);
        let points: Vec<&'static ConstellationPoint> = table[..DATA_SUBCARRIERS].iter().collect();
        OfdmSymbol::from_points(&points).expect("48 points")
    }

    #[test]
    fn from_points_requires_48() {
        let table = constellation(ModulationScheme::Qam64);
        let short: Vec<&'static ConstellationPoint> = table[..47].iter().collect();
        assert!(OfdmSymbol::from_points(&short).is_none());
        let long: Vec<&'static ConstellationPoint> = table[..49].iter().collect();
        assert!(OfdmSymbol::from_points(&long).is_none());
    }

    #[test]
    fn subcarrier_lookup_follows_translation() {
        let symbol = ramp();
        let table = constellation(ModulationScheme::Qam64);
        for position in 0..DATA_SUBCARRIERS {
            assert_eq!(symbol.subcarrier(translate(position)), Some(&table[position]));
            assert_eq!(symbol.point(position), Some(&table[position]));
        }
        assert_eq!(symbol.point(DATA_SUBCARRIERS), None);
    }

    #[test]
    fn dc_and_pilots_stay_empty() {
        let symbol = ramp();
        assert_eq!(symbol.subcarrier(CENTER_SUBCARRIER), None);
        let dense = symbol.to_dense();
        for index in PILOT_SUBCARRIERS.iter().copied().chain([CENTER_SUBCARRIER]) {
            assert_eq!(symbol.subcarrier(index), None);
            assert_eq!(dense[index], Complex::new(0.0, 0.0));
        }
    }

    #[test]
    fn occupied_is_ascending_and_complete() {
        let symbol = ramp();
        let indices: Vec<usize> = symbol.occupied().map(|(index, _)| index).collect();
        assert_eq!(indices.len(), DATA_SUBCARRIERS);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn dense_layout_matches_occupied() {
        let symbol = ramp();
        let dense = symbol.to_dense();
        for (index, point) in symbol.occupied() {
            assert_eq!(dense[index], *point);
        }
    }
}
