//! Design catalog domain module.
//!
//! Stems (the unit of inventory), bouquet designs and the catalog that
//! indexes designs by the stems they use. Pure domain logic: no IO.

pub mod catalog;
pub mod design;
pub mod record;
pub mod stem;

pub use catalog::DesignCatalog;
pub use design::{Design, DesignCode, StemRequirement};
pub use stem::{Stem, StemSize};
