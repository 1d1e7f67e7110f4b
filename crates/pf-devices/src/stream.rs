//! Streams and the registry that owns them.

use core::fmt;

use pf_core::{MassRate, PfError, PfResult, StreamId, kgps};

/// A process stream carrying a single mass-flow quantity.
///
/// Streams have no owner device: the producing and consuming devices both
/// refer to the same registry entry by [`StreamId`].
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    name: String,
    mass_flow: MassRate,
}

impl Stream {
    /// Create a stream named after its sequence number ("s1", "s2", ...).
    ///
    /// Mass flow starts at zero.
    pub fn new(sequence: u32) -> Self {
        Self {
            name: format!("s{sequence}"),
            mass_flow: kgps(0.0),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass_flow(&self) -> MassRate {
        self.mass_flow
    }

    /// Set the mass flow. No validation: negative or non-finite values pass
    /// through unchanged.
    pub fn set_mass_flow(&mut self, mass_flow: MassRate) {
        self.mass_flow = mass_flow;
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stream {} flow = {} kg/s", self.name, self.mass_flow.value)
    }
}

/// Owns every stream of one scenario and hands out handles.
///
/// The registry also owns the sequential naming counter, so independent
/// scenarios (and parallel tests) get independent "s1", "s2", ... sequences.
#[derive(Debug, Default)]
pub struct StreamRegistry {
    streams: Vec<Stream>,
    next_sequence: u32,
}

impl StreamRegistry {
    /// Create an empty registry; the first stream it creates is named "s1".
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stream with the next sequential name and return its handle.
    pub fn create(&mut self) -> StreamId {
        self.next_sequence += 1;
        let id = StreamId::from_index(self.streams.len() as u32);
        self.streams.push(Stream::new(self.next_sequence));
        id
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }

    /// Get a stream by handle (returns None if the handle is dangling).
    pub fn stream(&self, id: StreamId) -> Option<&Stream> {
        self.streams.get(id.index() as usize)
    }

    /// Get a stream mutably by handle.
    pub fn stream_mut(&mut self, id: StreamId) -> Option<&mut Stream> {
        self.streams.get_mut(id.index() as usize)
    }

    /// Read a stream's mass flow, failing on a dangling handle.
    pub fn mass_flow(&self, id: StreamId) -> PfResult<MassRate> {
        self.stream(id)
            .map(Stream::mass_flow)
            .ok_or(PfError::IndexOob {
                what: "stream",
                index: id.index() as usize,
                len: self.streams.len(),
            })
    }

    /// Write a stream's mass flow, failing on a dangling handle.
    pub fn set_mass_flow(&mut self, id: StreamId, mass_flow: MassRate) -> PfResult<()> {
        let len = self.streams.len();
        let stream = self.stream_mut(id).ok_or(PfError::IndexOob {
            what: "stream",
            index: id.index() as usize,
            len,
        })?;
        stream.set_mass_flow(mass_flow);
        Ok(())
    }
}
