//! Native identity source on Windows.

use crate::{FingerprintSource, WindowsMachineGuid};

pub fn native_source() -> Box<dyn FingerprintSource> {
    Box::new(WindowsMachineGuid)
}
