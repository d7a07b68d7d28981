//! Native identity source on macOS.

use crate::{FingerprintSource, IoregPlatformUuid};

pub fn native_source() -> Box<dyn FingerprintSource> {
    Box::new(IoregPlatformUuid::default())
}
