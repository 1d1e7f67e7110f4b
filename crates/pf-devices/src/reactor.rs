//! Reactor: passes one inlet through, or splits it across two outlets.

use pf_core::StreamId;
use tracing::debug;

use crate::device::{Device, Ports};
use crate::error::{DeviceError, DeviceResult};
use crate::stream::StreamRegistry;

/// Converts a single inlet stream into one outlet, or splits it evenly
/// across two outlets when built in double-outlet mode.
///
/// The mode is fixed at construction. In double-outlet mode the split
/// conserves mass: both outlets carry half the inlet flow.
#[derive(Debug, Clone)]
pub struct Reactor {
    ports: Ports,
    double_output: bool,
}

impl Reactor {
    /// Create a reactor. `double_output` selects two outlets with an even
    /// split; otherwise the single outlet carries the inlet flow unchanged.
    pub fn new(double_output: bool) -> Self {
        let outlets = if double_output { 2 } else { 1 };
        Self {
            ports: Ports::new(1, outlets),
            double_output,
        }
    }

    /// Whether this reactor was built in double-outlet mode.
    pub fn is_double_output(&self) -> bool {
        self.double_output
    }
}

impl Device for Reactor {
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
        let inputs = self.ports.inputs();
        if inputs.is_empty() {
            return Err(DeviceError::Precondition {
                what: "input stream not connected",
            });
        }

        // Unlike the mixer, a reactor requires its full outlet complement.
        let outputs = self.ports.outputs();
        if outputs.len() != self.ports.output_capacity() {
            return Err(DeviceError::Precondition {
                what: "output streams not fully attached",
            });
        }

        let inlet_flow = streams.mass_flow(inputs[0])?;

        if self.double_output {
            let half = inlet_flow / 2.0;
            streams.set_mass_flow(outputs[0], half)?;
            streams.set_mass_flow(outputs[1], half)?;
            debug!(
                inlet = inlet_flow.value,
                per_outlet = half.value,
                "reactor split inlet across two outlets"
            );
        } else {
            streams.set_mass_flow(outputs[0], inlet_flow)?;
            debug!(inlet = inlet_flow.value, "reactor passed inlet through");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pf_core::kgps;

    fn wired_reactor(
        streams: &mut StreamRegistry,
        double_output: bool,
        inlet_flow: f64,
    ) -> (Reactor, Vec<StreamId>) {
        let mut reactor = Reactor::new(double_output);
        let inlet = streams.create();
        streams.set_mass_flow(inlet, kgps(inlet_flow)).unwrap();
        reactor.add_input(inlet).unwrap();

        let mut outlets = Vec::new();
        for _ in 0..reactor.ports.output_capacity() {
            let outlet = streams.create();
            reactor.add_output(outlet).unwrap();
            outlets.push(outlet);
        }
        (reactor, outlets)
    }

    #[test]
    fn single_mode_passes_inlet_through() {
        let mut streams = StreamRegistry::new();
        let (reactor, outlets) = wired_reactor(&mut streams, false, 20.0);

        reactor.update_outputs(&mut streams).unwrap();
        assert_abs_diff_eq!(
            streams.mass_flow(outlets[0]).unwrap().value,
            20.0,
            epsilon = 0.01
        );
    }

    #[test]
    fn double_mode_splits_evenly() {
        let mut streams = StreamRegistry::new();
        let (reactor, outlets) = wired_reactor(&mut streams, true, 30.0);

        reactor.update_outputs(&mut streams).unwrap();
        let first = streams.mass_flow(outlets[0]).unwrap().value;
        let second = streams.mass_flow(outlets[1]).unwrap().value;
        assert_abs_diff_eq!(first, 15.0, epsilon = 0.01);
        assert_abs_diff_eq!(second, 15.0, epsilon = 0.01);
        assert_abs_diff_eq!(first + second, 30.0, epsilon = 0.01);
    }

    #[test]
    fn update_without_inlet_is_rejected() {
        let mut streams = StreamRegistry::new();
        let mut reactor = Reactor::new(false);
        let outlet = streams.create();
        streams.set_mass_flow(outlet, kgps(7.0)).unwrap();
        reactor.add_output(outlet).unwrap();

        let err = reactor.update_outputs(&mut streams).unwrap_err();
        assert_eq!(
            err,
            DeviceError::Precondition {
                what: "input stream not connected",
            }
        );
        // The outlet was never written.
        assert_eq!(streams.mass_flow(outlet).unwrap().value, 7.0);
    }

    #[test]
    fn double_mode_with_one_outlet_is_rejected() {
        let mut streams = StreamRegistry::new();
        let mut reactor = Reactor::new(true);

        let inlet = streams.create();
        let outlet = streams.create();
        streams.set_mass_flow(inlet, kgps(30.0)).unwrap();
        reactor.add_input(inlet).unwrap();
        reactor.add_output(outlet).unwrap();

        let err = reactor.update_outputs(&mut streams).unwrap_err();
        assert_eq!(
            err,
            DeviceError::Precondition {
                what: "output streams not fully attached",
            }
        );
        assert_eq!(streams.mass_flow(outlet).unwrap().value, 0.0);
    }

    #[test]
    fn mode_accessor_is_stable_across_updates() {
        let mut streams = StreamRegistry::new();
        let (reactor, _) = wired_reactor(&mut streams, true, 8.0);
        assert!(reactor.is_double_output());

        for _ in 0..3 {
            reactor.update_outputs(&mut streams).unwrap();
            assert!(reactor.is_double_output());
        }

        let single = Reactor::new(false);
        assert!(!single.is_double_output());
    }
}
