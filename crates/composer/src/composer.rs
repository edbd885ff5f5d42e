//! Allocation engine: one arriving stem in, at most one bouquet out.

use core::convert::Infallible;

use bouquet_core::Aggregate;
use bouquet_designs::{DesignCatalog, Stem};
use bouquet_events::{Event, execute};

use crate::bouquet::Bouquet;
use crate::extract::try_extract;
use crate::supply::{PendingArrival, SupplyLedger};

/// Command: a stem has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerCommand {
    ReceiveStem(Stem),
}

/// Event: StemReceived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StemReceived {
    pub stem: Stem,
}

/// Event: BouquetComposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BouquetComposed {
    pub bouquet: Bouquet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComposerEvent {
    StemReceived(StemReceived),
    BouquetComposed(BouquetComposed),
}

impl Event for ComposerEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ComposerEvent::StemReceived(_) => "composer.stem.received",
            ComposerEvent::BouquetComposed(_) => "composer.bouquet.composed",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

/// Owns the design catalog and the supply ledger.
///
/// Each command is decided against a read-only view and only then applied,
/// so a bouquet's stems leave the ledger all at once or not at all.
#[derive(Debug, Clone)]
pub struct Composer {
    catalog: DesignCatalog,
    supply: SupplyLedger,
    composed: u64,
    version: u64,
}

impl Composer {
    pub fn new(catalog: DesignCatalog) -> Self {
        Self {
            catalog,
            supply: SupplyLedger::new(),
            composed: 0,
            version: 0,
        }
    }

    pub fn catalog(&self) -> &DesignCatalog {
        &self.catalog
    }

    pub fn supply(&self) -> &SupplyLedger {
        &self.supply
    }

    /// Bouquets composed so far.
    pub fn composed_count(&self) -> u64 {
        self.composed
    }

    /// Record `stem` and compose the first bouquet it completes, if any.
    pub fn try_compose(&mut self, stem: Stem) -> Option<Bouquet> {
        let events = match execute(self, &ComposerCommand::ReceiveStem(stem)) {
            Ok(events) => events,
            Err(never) => match never {},
        };
        events.into_iter().find_map(|event| match event {
            ComposerEvent::BouquetComposed(e) => Some(e.bouquet),
            ComposerEvent::StemReceived(_) => None,
        })
    }

    fn handle_receive(&self, stem: Stem) -> Vec<ComposerEvent> {
        let mut events = vec![ComposerEvent::StemReceived(StemReceived { stem })];
        let view = PendingArrival::new(&self.supply, stem);

        for design in self.catalog.designs_for(&stem) {
            match try_extract(&view, design) {
                Some(arrangement) => {
                    events.push(ComposerEvent::BouquetComposed(BouquetComposed {
                        bouquet: Bouquet::new(design.code(), arrangement),
                    }));
                    break;
                }
                None => {
                    tracing::debug!(%stem, design = %design.code(), "design not fillable yet");
                }
            }
        }

        events
    }
}

impl Aggregate for Composer {
    type Command = ComposerCommand;
    type Event = ComposerEvent;
    type Error = Infallible;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            ComposerEvent::StemReceived(e) => {
                tracing::debug!(stem = %e.stem, "stem received");
                self.supply.add(e.stem);
            }
            ComposerEvent::BouquetComposed(e) => {
                // Decided against the same state, so the stems are on hand.
                if let Err(err) = self.supply.commit(e.bouquet.stems()) {
                    tracing::error!(bouquet = %e.bouquet, error = %err, "bouquet stems not on hand");
                }
                self.composed += 1;
                tracing::info!(bouquet = %e.bouquet, "bouquet composed");
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            ComposerCommand::ReceiveStem(stem) => Ok(self.handle_receive(*stem)),
        }
    }

    fn version(&self) -> u64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supply::Availability;
    use bouquet_designs::Design;

    fn composer(designs: &[&str]) -> Composer {
        Composer::new(DesignCatalog::from_designs(
            designs.iter().map(|d| d.parse::<Design>().unwrap()),
        ))
    }

    fn stem(record: &str) -> Stem {
        record.parse().unwrap()
    }

    fn feed(composer: &mut Composer, stems: &[&str]) -> Vec<Option<String>> {
        stems
            .iter()
            .map(|s| composer.try_compose(stem(s)).map(|b| b.to_string()))
            .collect()
    }

    #[test]
    fn single_species_design() {
        let mut c = composer(&["AS2a2"]);
        assert_eq!(feed(&mut c, &["aS", "aS"]), [None, Some("AS2a".into())]);
        assert_eq!(c.supply().total_on_hand(), 0);
        assert_eq!(c.composed_count(), 1);
    }

    #[test]
    fn two_species_design_then_leftover() {
        let mut c = composer(&["BS1a1b2"]);
        assert_eq!(
            feed(&mut c, &["aS", "bS", "aS"]),
            [None, Some("BS1a1b".into()), None]
        );
        assert_eq!(c.supply().available(&stem("aS")), 1);
    }

    #[test]
    fn waits_for_total() {
        let mut c = composer(&["CS5a3"]);
        assert_eq!(
            feed(&mut c, &["aS", "aS", "aS"]),
            [None, None, Some("CS3a".into())]
        );
    }

    #[test]
    fn earlier_registered_design_wins() {
        let mut c = composer(&["DS1a1", "ES1a1"]);
        assert_eq!(feed(&mut c, &["aS", "aS"]), [Some("DS1a".into()), Some("DS1a".into())]);
    }

    #[test]
    fn falls_through_to_next_candidate() {
        // FS needs a b too; GS can be filled right away.
        let mut c = composer(&["FS1a1b2", "GS1a1"]);
        assert_eq!(feed(&mut c, &["aS"]), [Some("GS1a".into())]);
    }

    #[test]
    fn only_designs_using_the_arrival_are_tried() {
        // HS is fillable once aS is on hand, but a bL arrival never triggers it.
        let mut c = composer(&["HS1a1", "IL1b2"]);
        c.supply.add(stem("aS"));
        assert_eq!(feed(&mut c, &["bL"]), [None]);
        assert_eq!(c.supply().available(&stem("aS")), 1);
        assert_eq!(feed(&mut c, &["aS"]), [Some("HS1a".into())]);
    }

    #[test]
    fn size_is_part_of_stem_identity() {
        let mut c = composer(&["AL2a2"]);
        assert_eq!(feed(&mut c, &["aS", "aS", "aL"]), [None, None, None]);
        assert_eq!(feed(&mut c, &["aL"]), [Some("AL2a".into())]);
    }

    #[test]
    fn handle_does_not_mutate_and_apply_versions_each_event() {
        let c = composer(&["AS1a1"]);
        let before_supply = c.supply().clone();
        let events = c.handle(&ComposerCommand::ReceiveStem(stem("aS"))).unwrap();
        assert_eq!(c.supply(), &before_supply);
        assert_eq!(c.version(), 0);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].event_type(), "composer.stem.received");
        assert_eq!(events[1].event_type(), "composer.bouquet.composed");

        let mut c = c;
        c.try_compose(stem("aS"));
        assert_eq!(c.version(), 2);
        c.try_compose(stem("bS"));
        assert_eq!(c.version(), 3);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashMap;

        fn stem_strategy() -> impl Strategy<Value = Stem> {
            (prop::char::range('a', 'e'), prop::bool::ANY).prop_map(|(species, large)| {
                let size = if large { "L" } else { "S" };
                format!("{species}{size}").parse::<Stem>().unwrap()
            })
        }

        fn design_strategy() -> impl Strategy<Value = Option<Design>> {
            (
                prop::char::range('A', 'Z'),
                prop::bool::ANY,
                prop::collection::vec((prop::char::range('a', 'e'), 1u32..6), 1..4),
                1u32..10,
            )
                .prop_map(|(name, large, reqs, total)| {
                    let size = if large { 'L' } else { 'S' };
                    let reqs: String = reqs.iter().map(|(s, c)| format!("{c}{s}")).collect();
                    format!("{name}{size}{reqs}{total}").parse::<Design>().ok()
                })
        }

        fn catalog_strategy() -> impl Strategy<Value = DesignCatalog> {
            prop::collection::vec(design_strategy(), 1..8)
                .prop_map(|designs| DesignCatalog::from_designs(designs.into_iter().flatten()))
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: on-hand plus committed equals everything ever received, per stem.
            #[test]
            fn stems_are_conserved(
                catalog in catalog_strategy(),
                arrivals in prop::collection::vec(stem_strategy(), 0..200),
            ) {
                let mut composer = Composer::new(catalog);
                let mut received: HashMap<Stem, u64> = HashMap::new();
                let mut committed: HashMap<Stem, u64> = HashMap::new();

                for stem in arrivals {
                    *received.entry(stem).or_default() += 1;
                    if let Some(bouquet) = composer.try_compose(stem) {
                        for taken in bouquet.stems() {
                            *committed.entry(taken.stem).or_default() += u64::from(taken.count);
                        }
                    }
                    for (stem, count) in &received {
                        let on_hand = u64::from(composer.supply().available(stem));
                        let used = committed.get(stem).copied().unwrap_or(0);
                        prop_assert_eq!(on_hand + used, *count);
                    }
                }
            }

            /// Property: every bouquet hits its design total exactly, uses every
            /// requirement at least once within its cap, and contains the arrival.
            #[test]
            fn bouquets_are_exact_and_triggered_by_the_arrival(
                catalog in catalog_strategy(),
                arrivals in prop::collection::vec(stem_strategy(), 0..200),
            ) {
                let mut composer = Composer::new(catalog.clone());
                for stem in arrivals {
                    let Some(bouquet) = composer.try_compose(stem) else { continue };

                    let design = catalog
                        .designs_for(&stem)
                        .find(|d| d.code() == bouquet.design && try_matches(d, &bouquet));
                    prop_assert!(design.is_some(), "{} not explained by a design using {}", bouquet, stem);
                    let design = design.unwrap();

                    prop_assert_eq!(bouquet.arrangement.total(), design.total());
                    prop_assert_eq!(bouquet.stems().len(), design.requirements().len());
                    for (taken, req) in bouquet.stems().iter().zip(design.requirements()) {
                        prop_assert_eq!(taken.stem, req.stem);
                        prop_assert!(taken.count >= 1);
                        prop_assert!(taken.count <= req.max_count);
                    }
                    prop_assert!(bouquet.stems().iter().any(|t| t.stem == stem));
                }
            }

            /// Property: same catalog and arrivals produce the same bouquets.
            #[test]
            fn composition_is_deterministic(
                catalog in catalog_strategy(),
                arrivals in prop::collection::vec(stem_strategy(), 0..100),
            ) {
                let run = |catalog: DesignCatalog| {
                    let mut composer = Composer::new(catalog);
                    arrivals
                        .iter()
                        .map(|s| composer.try_compose(*s))
                        .collect::<Vec<_>>()
                };
                prop_assert_eq!(run(catalog.clone()), run(catalog));
            }
        }

        fn try_matches(design: &Design, bouquet: &Bouquet) -> bool {
            design
                .requirements()
                .iter()
                .map(|r| r.stem)
                .eq(bouquet.stems().iter().map(|t| t.stem))
        }
    }
}
