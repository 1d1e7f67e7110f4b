//! pf-devices: the stream/device model for procflow.
//!
//! A flowsheet is a set of named streams, owned by a [`StreamRegistry`] and
//! referenced by handle, wired into devices. Each device holds bounded lists
//! of inlet and outlet stream handles; updating a device reads the current
//! inlet mass flows and writes the computed outlet mass flows back into the
//! registry.
//!
//! Streams are shared between the device that produces them and the device
//! that consumes them downstream. The model assumes one writer per stream per
//! update pass but does not enforce it.

pub mod device;
pub mod error;
pub mod mixer;
pub mod reactor;
pub mod stream;

pub use device::{Device, PortKind, Ports};
pub use error::{DeviceError, DeviceResult};
pub use mixer::Mixer;
pub use reactor::Reactor;
pub use stream::{Stream, StreamRegistry};
