//! Supply ledger: stems on hand.

use std::collections::HashMap;

use bouquet_core::{DomainError, DomainResult};
use bouquet_designs::Stem;

use crate::bouquet::StemCount;

/// Read access to stem availability.
pub trait Availability {
    /// Units of `stem` on hand (0 if never seen).
    fn available(&self, stem: &Stem) -> u32;
}

/// Count of on-hand stems per stem identity. Counts never go negative.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplyLedger {
    on_hand: HashMap<Stem, u32>,
}

impl SupplyLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stem: Stem) {
        *self.on_hand.entry(stem).or_insert(0) += 1;
    }

    /// Remove every listed quantity, or nothing at all.
    ///
    /// Fails without touching the ledger if any stem (summed over the list)
    /// is short.
    pub fn commit(&mut self, taken: &[StemCount]) -> DomainResult<()> {
        let mut needed: HashMap<Stem, u32> = HashMap::with_capacity(taken.len());
        for entry in taken {
            *needed.entry(entry.stem).or_insert(0) += entry.count;
        }
        for (stem, count) in &needed {
            let available = self.available(stem);
            if available < *count {
                return Err(DomainError::invariant(format!(
                    "cannot take {count} of {stem}: only {available} on hand"
                )));
            }
        }
        for (stem, count) in needed {
            if let Some(on_hand) = self.on_hand.get_mut(&stem) {
                *on_hand -= count;
            }
        }
        Ok(())
    }

    /// Put quantities back (undo of a tentative take).
    pub fn release(&mut self, taken: &[StemCount]) {
        for entry in taken {
            *self.on_hand.entry(entry.stem).or_insert(0) += entry.count;
        }
    }

    /// Units on hand across all stems.
    pub fn total_on_hand(&self) -> u64 {
        self.on_hand.values().map(|&c| u64::from(c)).sum()
    }

    /// Non-zero counts sorted by stem (small before large, then species).
    pub fn snapshot(&self) -> Vec<(Stem, u32)> {
        let mut entries: Vec<(Stem, u32)> = self
            .on_hand
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(stem, count)| (*stem, *count))
            .collect();
        entries.sort();
        entries
    }
}

impl Availability for SupplyLedger {
    fn available(&self, stem: &Stem) -> u32 {
        self.on_hand.get(stem).copied().unwrap_or(0)
    }
}

/// The ledger as it will be once `arrival` has been added, without adding it.
#[derive(Debug, Clone, Copy)]
pub struct PendingArrival<'a> {
    supply: &'a SupplyLedger,
    arrival: Stem,
}

impl<'a> PendingArrival<'a> {
    pub fn new(supply: &'a SupplyLedger, arrival: Stem) -> Self {
        Self { supply, arrival }
    }
}

impl Availability for PendingArrival<'_> {
    fn available(&self, stem: &Stem) -> u32 {
        self.supply.available(stem) + u32::from(*stem == self.arrival)
    }
}
