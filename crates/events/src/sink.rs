//! Output boundary abstraction.
//!
//! Composition produces results one at a time; a sink receives each result
//! in order as soon as it exists. The binary writes to stdout, tests collect
//! into memory.

/// Receives produced messages in order.
pub trait EventSink<M> {
    type Error: core::fmt::Debug;

    fn publish(&mut self, message: M) -> Result<(), Self::Error>;
}

/// In-memory sink for tests/dev: keeps everything it is given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InMemorySink<M> {
    messages: Vec<M>,
}

impl<M> InMemorySink<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }
}

impl<M> Default for InMemorySink<M> {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
        }
    }
}

impl<M> EventSink<M> for InMemorySink<M> {
    type Error = core::convert::Infallible;

    fn publish(&mut self, message: M) -> Result<(), Self::Error> {
        self.messages.push(message);
        Ok(())
    }
}
