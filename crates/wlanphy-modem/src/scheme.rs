//! Payload modulation schemes and their configuration names.

use std::fmt;
use std::str::FromStr;

use phf::phf_map;

use crate::error::Error;

/// Modulation scheme used for one field of the PPDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModulationScheme {
    Bpsk,
    Qpsk,
    Qam16,
    Qam64,
}

/// The SIGNAL field is always BPSK, whatever the payload uses.
pub const SIGNAL_SCHEME: ModulationScheme = ModulationScheme::Bpsk;

static SCHEME_NAMES: phf::Map<&'static str, ModulationScheme> = phf_map! {
    "BPSK" => ModulationScheme::Bpsk,
    "QPSK" => ModulationScheme::Qpsk,
    "QAM-16" => ModulationScheme::Qam16,
    "QAM-64" => ModulationScheme::Qam64,
};

impl ModulationScheme {
    pub const ALL: [ModulationScheme; 4] = [
        ModulationScheme::Bpsk,
        ModulationScheme::Qpsk,
        ModulationScheme::Qam16,
        ModulationScheme::Qam64,
    ];

    /// Number of coded bits carried by one constellation point (N_BPSC).
    pub fn code_word_length(self) -> usize {
        match self {
            ModulationScheme::Bpsk => 1,
            ModulationScheme::Qpsk => 2,
            ModulationScheme::Qam16 => 4,
            ModulationScheme::Qam64 => 6,
        }
    }

    /// Number of points in the constellation.
    pub fn order(self) -> usize {
        1 << self.code_word_length()
    }

    /// Configuration name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ModulationScheme::Bpsk => "BPSK",
            ModulationScheme::Qpsk => "QPSK",
            ModulationScheme::Qam16 => "QAM-16",
            ModulationScheme::Qam64 => "QAM-64",
        }
    }
}

impl FromStr for ModulationScheme {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        SCHEME_NAMES
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownScheme(name.to_string()))
    }
}

impl fmt::Display for ModulationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_to_schemes() {
        assert_eq!("BPSK".parse::<ModulationScheme>(), Ok(ModulationScheme::Bpsk));
        assert_eq!("QPSK".parse::<ModulationScheme>(), Ok(ModulationScheme::Qpsk));
        assert_eq!("QAM-16".parse::<ModulationScheme>(), Ok(ModulationScheme::Qam16));
        assert_eq!("QAM-64".parse::<ModulationScheme>(), Ok(ModulationScheme::Qam64));
    }

    #[test]
    fn unknown_names_are_rejected() {
        for name in ["QAM-256", "qpsk", "QAM16", ""] {
            assert_eq!(
                name.parse::<ModulationScheme>(),
                Err(Error::UnknownScheme(name.to_string()))
            );
        }
    }

    #[test]
    fn display_round_trips_through_name() {
        for scheme in ModulationScheme::ALL {
            assert_eq!(scheme.to_string().parse::<ModulationScheme>(), Ok(scheme));
        }
    }

    #[test]
    fn code_word_lengths() {
        let lengths: Vec<usize> = ModulationScheme::ALL
            .iter()
            .map(|s| s.code_word_length())
            .collect();
        assert_eq!(lengths, vec![1, 2, 4, 6]);
        assert_eq!(ModulationScheme::Qam64.order(), 64);
    }

    #[test]
    fn error_message_names_the_scheme() {
        let err = "QAM-256".parse::<ModulationScheme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown modulation scheme = QAM-256");
    }
}
