//! Error types for device wiring and updates.

use pf_core::PfError;
use thiserror::Error;

use crate::device::PortKind;

/// Errors raised while wiring or updating a device.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// Attaching one more stream would exceed the port's configured capacity.
    /// The attach is rejected and the connection list is left unchanged.
    #[error("{port} stream limit reached (capacity {capacity})")]
    CapacityExceeded { port: PortKind, capacity: usize },

    /// Required wiring is absent or incomplete for an update.
    #[error("Precondition violated: {what}")]
    Precondition { what: &'static str },

    #[error(transparent)]
    Core(#[from] PfError),
}

pub type DeviceResult<T> = Result<T, DeviceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_names_the_port() {
        let err = DeviceError::CapacityExceeded {
            port: PortKind::Inlet,
            capacity: 2,
        };
        assert!(err.to_string().contains("input"));

        let err = DeviceError::CapacityExceeded {
            port: PortKind::Outlet,
            capacity: 1,
        };
        assert!(err.to_string().contains("output"));
    }

    #[test]
    fn core_error_passes_through() {
        let core = PfError::IndexOob {
            what: "stream",
            index: 7,
            len: 0,
        };
        let err: DeviceError = core.clone().into();
        assert_eq!(err, DeviceError::Core(core));
    }
}
