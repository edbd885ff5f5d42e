use serde::Serialize;

use bouquet_core::ValueObject;
use bouquet_designs::{DesignCode, Stem};

/// A quantity of one stem.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StemCount {
    pub stem: Stem,
    pub count: u32,
}

impl ValueObject for StemCount {}

impl core::fmt::Display for StemCount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.count, self.stem.species())
    }
}

/// Stems selected for one design, in the design's requirement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Arrangement(Vec<StemCount>);

impl ValueObject for Arrangement {}

impl Arrangement {
    pub fn new(stems: Vec<StemCount>) -> Self {
        Self(stems)
    }

    pub fn stems(&self) -> &[StemCount] {
        &self.0
    }

    /// Number of stems across all entries.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|s| s.count).sum()
    }
}

/// A composed bouquet: a design code and the stems committed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bouquet {
    pub design: DesignCode,
    pub arrangement: Arrangement,
}

impl ValueObject for Bouquet {}

impl Bouquet {
    pub fn new(design: DesignCode, arrangement: Arrangement) -> Self {
        Self {
            design,
            arrangement,
        }
    }

    pub fn stems(&self) -> &[StemCount] {
        self.arrangement.stems()
    }
}

/// Output line form: design code then `<count><species>` per stem, e.g. `LS3a2b`.
impl core::fmt::Display for Bouquet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.design)?;
        for stem in self.arrangement.stems() {
            write!(f, "{stem}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bouquet_designs::StemSize;

    #[test]
    fn renders_output_line() {
        let bouquet = Bouquet::new(
            DesignCode::new('L', StemSize::Small).unwrap(),
            Arrangement::new(vec![
                StemCount {
                    stem: "aS".parse().unwrap(),
                    count: 3,
                },
                StemCount {
                    stem: "bS".parse().unwrap(),
                    count: 2,
                },
            ]),
        );
        assert_eq!(bouquet.to_string(), "LS3a2b");
        assert_eq!(bouquet.arrangement.total(), 5);
    }
}
