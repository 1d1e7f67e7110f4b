//! Device capability trait and shared port bookkeeping.

use core::fmt;

use pf_core::StreamId;

use crate::error::{DeviceError, DeviceResult};
use crate::stream::StreamRegistry;

/// Direction/kind of a device port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortKind {
    /// Inlet port (upstream connection).
    Inlet,
    /// Outlet port (downstream connection).
    Outlet,
}

impl fmt::Display for PortKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortKind::Inlet => write!(f, "input"),
            PortKind::Outlet => write!(f, "output"),
        }
    }
}

/// Bounded inlet/outlet connection lists shared by every device variant.
///
/// Capacities are fixed at construction. Attaching past a capacity is
/// rejected, never truncated, so `inputs().len() <= input_capacity()` and
/// `outputs().len() <= output_capacity()` hold at all times.
#[derive(Debug, Clone)]
pub struct Ports {
    inputs: Vec<StreamId>,
    outputs: Vec<StreamId>,
    input_capacity: usize,
    output_capacity: usize,
}

impl Ports {
    pub fn new(input_capacity: usize, output_capacity: usize) -> Self {
        Self {
            inputs: Vec::with_capacity(input_capacity),
            outputs: Vec::with_capacity(output_capacity),
            input_capacity,
            output_capacity,
        }
    }

    pub fn inputs(&self) -> &[StreamId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[StreamId] {
        &self.outputs
    }

    pub fn input_capacity(&self) -> usize {
        self.input_capacity
    }

    pub fn output_capacity(&self) -> usize {
        self.output_capacity
    }

    /// Attach an inlet stream, rejecting the call once capacity is reached.
    pub fn attach_input(&mut self, stream: StreamId) -> DeviceResult<()> {
        if self.inputs.len() < self.input_capacity {
            self.inputs.push(stream);
            Ok(())
        } else {
            Err(DeviceError::CapacityExceeded {
                port: PortKind::Inlet,
                capacity: self.input_capacity,
            })
        }
    }

    /// Attach an outlet stream, rejecting the call once capacity is reached.
    pub fn attach_output(&mut self, stream: StreamId) -> DeviceResult<()> {
        if self.outputs.len() < self.output_capacity {
            self.outputs.push(stream);
            Ok(())
        } else {
            Err(DeviceError::CapacityExceeded {
                port: PortKind::Outlet,
                capacity: self.output_capacity,
            })
        }
    }
}

/// Capability shared by every device variant.
///
/// A device is wired by attaching stream handles to its bounded ports, then
/// updated. Updating reads the current inlet mass flows from the registry and
/// writes the computed outlet mass flows back. Preconditions are checked
/// before the first write, so a failed update leaves the registry untouched;
/// repeated updates with unchanged inlet flows are idempotent.
pub trait Device {
    /// Attached inlet streams, in attach order.
    fn inputs(&self) -> &[StreamId];

    /// Attached outlet streams, in attach order.
    fn outputs(&self) -> &[StreamId];

    /// Attach an inlet stream; fails with [`DeviceError::CapacityExceeded`]
    /// once the inlet capacity is reached.
    fn add_input(&mut self, stream: StreamId) -> DeviceResult<()>;

    /// Attach an outlet stream; fails with [`DeviceError::CapacityExceeded`]
    /// once the outlet capacity is reached.
    fn add_output(&mut self, stream: StreamId) -> DeviceResult<()>;

    /// Recompute outlet mass flows from the current inlet mass flows.
    fn update_outputs(&self, streams: &mut StreamRegistry) -> DeviceResult<()>;
}
