//! Native identity source on Linux.

use crate::{FingerprintSource, LinuxMachineId};

pub fn native_source() -> Box<dyn FingerprintSource> {
    Box::new(LinuxMachineId::default())
}
