//! Design catalog indexed by stem.

use std::collections::HashMap;

use crate::design::Design;
use crate::stem::Stem;

/// All known designs, in registration order, indexed by every stem they use.
///
/// `designs_for(stem)` costs time proportional to the designs that use
/// `stem`, not to the size of the catalog.
#[derive(Debug, Clone, Default)]
pub struct DesignCatalog {
    designs: Vec<Design>,
    by_stem: HashMap<Stem, Vec<usize>>,
}

impl DesignCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_designs(designs: impl IntoIterator<Item = Design>) -> Self {
        let mut catalog = Self::new();
        for design in designs {
            catalog.register(design);
        }
        catalog
    }

    /// Append a design. Later registrations lose ties against earlier ones.
    pub fn register(&mut self, design: Design) {
        let position = self.designs.len();
        for requirement in design.requirements() {
            self.by_stem.entry(requirement.stem).or_default().push(position);
        }
        tracing::debug!(design = %design.code(), "{}", design.describe());
        self.designs.push(design);
    }

    /// Designs that use `stem`, in registration order.
    pub fn designs_for<'a>(&'a self, stem: &Stem) -> impl Iterator<Item = &'a Design> + 'a {
        self.by_stem
            .get(stem)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&position| &self.designs[position])
    }

    /// Every design, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Design> {
        self.designs.iter()
    }

    pub fn len(&self) -> usize {
        self.designs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design(record: &str) -> Design {
        record.parse().unwrap()
    }

    fn stem(record: &str) -> Stem {
        record.parse().unwrap()
    }

    fn codes<'a>(designs: impl Iterator<Item = &'a Design>) -> Vec<String> {
        designs.map(|d| d.code().to_string()).collect()
    }

    #[test]
    fn indexes_each_design_under_every_required_stem() {
        let catalog = DesignCatalog::from_designs([
            design("AS2a1b3"),
            design("BS1b1c2"),
            design("CL1a1"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(codes(catalog.designs_for(&stem("aS"))), ["AS"]);
        assert_eq!(codes(catalog.designs_for(&stem("bS"))), ["AS", "BS"]);
        assert_eq!(codes(catalog.designs_for(&stem("cS"))), ["BS"]);
        assert_eq!(codes(catalog.designs_for(&stem("aL"))), ["CL"]);
    }

    #[test]
    fn unknown_stem_has_no_candidates() {
        let catalog = DesignCatalog::from_designs([design("AS2a2")]);
        assert_eq!(catalog.designs_for(&stem("zS")).count(), 0);
        assert_eq!(catalog.designs_for(&stem("aL")).count(), 0);
    }

    #[test]
    fn keeps_registration_order_including_repeated_codes() {
        let catalog = DesignCatalog::from_designs([
            design("DS3a3"),
            design("ES2a2"),
            design("DS1a1"),
        ]);
        let totals: Vec<u32> = catalog.designs_for(&stem("aS")).map(Design::total).collect();
        assert_eq!(totals, [3, 2, 1]);
        assert_eq!(codes(catalog.iter()), ["DS", "ES", "DS"]);
    }

    #[test]
    fn empty_catalog() {
        let catalog = DesignCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.designs_for(&stem("aS")).count(), 0);
    }
}
