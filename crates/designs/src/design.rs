use core::str::FromStr;

use serde::Serialize;

use bouquet_core::{DomainError, DomainResult, Entity, ValueObject};

use crate::record::parse_design_record;
use crate::stem::{Stem, StemSize};

/// Design identifier: an upper-case name letter plus the size of its stems.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DesignCode {
    name: char,
    size: StemSize,
}

impl DesignCode {
    pub fn new(name: char, size: StemSize) -> DomainResult<Self> {
        if !name.is_ascii_uppercase() {
            return Err(DomainError::format(format!(
                "design name not in range A-Z: {name:?}"
            )));
        }
        Ok(Self { name, size })
    }

    pub fn name(&self) -> char {
        self.name
    }

    pub fn size(&self) -> StemSize {
        self.size
    }
}

impl core::fmt::Display for DesignCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.name, self.size)
    }
}

/// A stem a design may use, with the most it will take of it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StemRequirement {
    pub stem: Stem,
    pub max_count: u32,
}

impl ValueObject for StemRequirement {}

impl core::fmt::Display for StemRequirement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.max_count, self.stem.species())
    }
}

/// A bouquet template: which stems, how many of each at most, how many in total.
///
/// Invariants (checked in [`Design::new`]):
/// - at least one requirement, no stem listed twice
/// - with `k` requirements and total `T`, every `max_count` is in `1..=T-k+1`,
///   so every other requirement can still contribute at least one stem
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Design {
    code: DesignCode,
    requirements: Vec<StemRequirement>,
    total: u32,
}

impl Design {
    /// Build a design from declared `(species, count)` pairs in record order.
    ///
    /// All stems share the design's size. A species declared twice keeps its
    /// first count. Each declared count is clamped to `total - k + 1`.
    pub fn new(code: DesignCode, declared: Vec<(char, u32)>, total: u32) -> DomainResult<Self> {
        let mut distinct: Vec<(Stem, u32)> = Vec::with_capacity(declared.len());
        for (species, count) in declared {
            let stem = Stem::new(species, code.size())?;
            if distinct.iter().any(|(seen, _)| *seen == stem) {
                tracing::warn!(design = %code, %stem, "stem declared twice; keeping first count");
                continue;
            }
            distinct.push((stem, count));
        }

        if distinct.is_empty() {
            return Err(DomainError::format(format!(
                "design {code} declares no stems"
            )));
        }

        let k = distinct.len() as i64;
        let any_stem_max = i64::from(total) - k + 1;

        let mut requirements = Vec::with_capacity(distinct.len());
        for (stem, count) in distinct {
            let max_count = i64::from(count).min(any_stem_max);
            if max_count < 1 {
                return Err(DomainError::range(format!(
                    "design {code}: requirement {count}{species} clamps to {max_count} \
                     (total {total}, {k} distinct stems); stem counts must be positive",
                    species = stem.species(),
                )));
            }
            requirements.push(StemRequirement {
                stem,
                // 1 <= max_count <= count, so it fits back into u32.
                max_count: max_count as u32,
            });
        }

        Ok(Self {
            code,
            requirements,
            total,
        })
    }

    pub fn code(&self) -> DesignCode {
        self.code
    }

    /// Requirements in the order they were declared.
    pub fn requirements(&self) -> &[StemRequirement] {
        &self.requirements
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn requires(&self, stem: &Stem) -> bool {
        self.requirements.iter().any(|r| r.stem == *stem)
    }

    /// Human description, e.g. `Design LS with stem options 3a3b3c and total 5`.
    pub fn describe(&self) -> String {
        let options: String = self.requirements.iter().map(ToString::to_string).collect();
        format!(
            "Design {} with stem options {} and total {}",
            self.code, options, self.total
        )
    }
}

impl Entity for Design {
    type Id = DesignCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

/// Record form with effective (clamped) caps; parses back to an equal design.
impl core::fmt::Display for Design {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code)?;
        for requirement in &self.requirements {
            write!(f, "{requirement}")?;
        }
        write!(f, "{}", self.total)
    }
}

impl FromStr for Design {
    type Err = DomainError;

    /// Parses a design record such as `LS10a3b5c5`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let record = parse_design_record(s)?;
        let code = DesignCode::new(record.name, StemSize::from_code(record.size)?)?;
        Design::new(code, record.requirements, record.total)
    }
}
