use core::str::FromStr;

use serde::Serialize;

use bouquet_core::{DomainError, DomainResult, ValueObject};

/// Stem size. Declaration order is the sort order: `Small` before `Large`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StemSize {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "L")]
    Large,
}

impl StemSize {
    pub fn from_code(code: char) -> DomainResult<Self> {
        match code {
            'S' => Ok(StemSize::Small),
            'L' => Ok(StemSize::Large),
            other => Err(DomainError::format(format!(
                "size not one of S, L: {other:?}"
            ))),
        }
    }

    pub fn code(self) -> char {
        match self {
            StemSize::Small => 'S',
            StemSize::Large => 'L',
        }
    }
}

impl core::fmt::Display for StemSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One unit of flower inventory: species `a`..=`z` in a given size.
///
/// Field order drives the derived ordering: all small stems sort before all
/// large ones, species ascending within a size.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Stem {
    size: StemSize,
    species: char,
}

impl ValueObject for Stem {}

impl Stem {
    pub fn new(species: char, size: StemSize) -> DomainResult<Self> {
        if !species.is_ascii_lowercase() {
            return Err(DomainError::format(format!(
                "species not in range a-z: {species:?}"
            )));
        }
        Ok(Self { size, species })
    }

    pub fn species(&self) -> char {
        self.species
    }

    pub fn size(&self) -> StemSize {
        self.size
    }
}

impl core::fmt::Display for Stem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.species, self.size)
    }
}

impl FromStr for Stem {
    type Err = DomainError;

    /// Parses the two-character record form, e.g. `aS` or `bL`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(species), Some(size), None) => Stem::new(species, StemSize::from_code(size)?),
            _ => Err(DomainError::format(format!(
                "stem record must be exactly 2 characters: {s:?}"
            ))),
        }
    }
}
