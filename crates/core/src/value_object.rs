//! Value object trait: equality by value, not identity.
//!
//! Stems, stem requirements and bouquets are value objects: two stems with the
//! same species and size are the same stem for every purpose in the system.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (`Stem { species: 'a', size: Small }`)
/// - **Entity**: has identity (`Design` identified by its `DesignCode`)
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by attribute values
/// - **Debug**: helpful for logging and tests
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
