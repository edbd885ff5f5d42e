//! Events and the output boundary they are published through.
//!
//! - [`Event`]: a named, versioned fact produced by an aggregate.
//! - [`execute`]: the canonical decide-then-evolve step.
//! - [`EventSink`]: where accepted outputs go (stdout writer, test collector).

pub mod event;
pub mod handler;
pub mod sink;

pub use event::Event;
pub use handler::execute;
pub use sink::{EventSink, InMemorySink};
