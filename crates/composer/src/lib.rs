//! Bouquet composition engine.
//!
//! Keeps a ledger of stems on hand and, for every arriving stem, composes at
//! most one bouquet from the first catalog design the ledger can now fill.
//! Deterministic domain logic only (no IO).

pub mod bouquet;
pub mod composer;
pub mod extract;
pub mod supply;

pub use bouquet::{Arrangement, Bouquet, StemCount};
pub use composer::{BouquetComposed, Composer, ComposerCommand, ComposerEvent, StemReceived};
pub use extract::try_extract;
pub use supply::{Availability, PendingArrival, SupplyLedger};
