//! Identity source for platforms without a known machine identity store.

use crate::{FingerprintSource, FixedSource, UNKNOWN_PLATFORM_ID};

pub fn native_source() -> Box<dyn FingerprintSource> {
    Box::new(FixedSource::new(UNKNOWN_PLATFORM_ID))
}
