//! Mixer: joins several inlet streams into one outlet.

use pf_core::{StreamId, kgps};
use tracing::debug;

use crate::device::{Device, Ports};
use crate::error::{DeviceError, DeviceResult};
use crate::stream::StreamRegistry;

/// A mixer always exposes exactly one outlet.
const MIXER_OUTLETS: usize = 1;

/// Joins up to `inputs_count` inlet streams into a single outlet stream.
///
/// Updating sums the mass flows of however many inlets are attached; inlets
/// left unattached simply contribute nothing, and a mixer with no inlets
/// writes zero flow.
#[derive(Debug, Clone)]
pub struct Mixer {
    ports: Ports,
}

impl Mixer {
    /// Create a mixer accepting up to `inputs_count` inlet streams.
    pub fn new(inputs_count: usize) -> Self {
        Self {
            ports: Ports::new(inputs_count, MIXER_OUTLETS),
        }
    }
}

impl Device for Mixer {
    fn inputs(&self) -> &[StreamId] {
        self.ports.inputs()
    }

    fn outputs(&self) -> &[StreamId] {
        self.ports.outputs()
    }

    fn add_input(&mut self, stream: StreamId) -> DeviceResult<()> {
        self.ports.attach_input(stream)
    }

    fn add_output(&mut self, stream: StreamId) -> DeviceResult<()> {
        self.ports.attach_output(stream)
    }

    fn update_outputs(&self, streams: &mut StreamRegistry) -> DeviceResult<()> {
        let outputs = self.ports.outputs();
        if outputs.is_empty() {
            return Err(DeviceError::Precondition {
                what: "outputs must be attached before update",
            });
        }

        let mut sum = kgps(0.0);
        for &input in self.ports.inputs() {
            sum += streams.mass_flow(input)?;
        }

        // The summed mass is spread over the attached outlets, not the
        // inlets. With the single outlet this reduces to the plain sum.
        let per_outlet = sum / outputs.len() as f64;
        for &output in outputs {
            streams.set_mass_flow(output, per_outlet)?;
        }

        debug!(
            inlets = self.ports.inputs().len(),
            mass_flow = per_outlet.value,
            "mixer outlet updated"
        );
        Ok(())
    }
}
