//! Machine fingerprint resolver.
//!
//! Reads a persistent machine identity from a platform-specific source and
//! squeezes it into the fixed 8-byte fingerprint field of a PointId. Every
//! source degrades to a sentinel string on failure; resolution never fails.

pub mod ioreg;
pub mod machine_id;

#[cfg(target_os = "windows")]
pub mod registry;

#[cfg(target_os = "linux")]
#[path = "platform_linux.rs"]
mod platform;

#[cfg(target_os = "windows")]
#[path = "platform_windows.rs"]
mod platform;

#[cfg(target_os = "macos")]
#[path = "platform_macos.rs"]
mod platform;

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
#[path = "platform_other.rs"]
mod platform;

pub use ioreg::{IoregPlatformUuid, parse_ioreg_uuid};
pub use machine_id::LinuxMachineId;
pub use platform::native_source;

#[cfg(target_os = "windows")]
pub use registry::WindowsMachineGuid;

/// Length of the fingerprint field in bytes.
pub const FINGERPRINT_LEN: usize = 8;

/// Fallback when the Windows registry lookup fails.
pub const WINDOWS_SENTINEL: &str = "WINDOW-NA";
/// Fallback when the machine-id file cannot be read.
pub const LINUX_SENTINEL: &str = "LINUX-NA";
/// Fallback when the hardware inventory command fails or its output is malformed.
pub const PLATFORM_SENTINEL: &str = "PLATFORM-NA";
/// Fallback when the hardware inventory ran but reported no UUID.
pub const MISSING_UUID_SENTINEL: &str = "NA";
/// Identity used on platforms without a known machine identity source.
pub const UNKNOWN_PLATFORM_ID: &str = "default";

/// Errors raised while reading a machine identity.
///
/// These never leave the crate's public resolvers; each one maps to a
/// sentinel string.
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("identity key not found")]
    MissingKey,

    #[error("malformed identity output: {0}")]
    Malformed(String),
}

/// A source of the machine identity string.
///
/// Implementations must be total: return a sentinel instead of failing.
pub trait FingerprintSource: Send + Sync {
    fn machine_id(&self) -> String;
}

/// Source that always returns the same string.
///
/// Used as the identity on unknown platforms and as a test double.
#[derive(Debug, Clone)]
pub struct FixedSource(pub String);

impl FixedSource {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl FingerprintSource for FixedSource {
    fn machine_id(&self) -> String {
        self.0.clone()
    }
}

/// Encodes `id` as ASCII and resizes it to exactly [`FINGERPRINT_LEN`] bytes.
///
/// Non-ASCII characters become `?`. Longer input is truncated, shorter input
/// is zero-padded on the right.
pub fn resize_fingerprint(id: &str) -> [u8; FINGERPRINT_LEN] {
    let mut out = [0u8; FINGERPRINT_LEN];
    let bytes = id.chars().map(|c| if c.is_ascii() { c as u8 } else { b'?' });
    for (slot, byte) in out.iter_mut().zip(bytes) {
        *slot = byte;
    }
    out
}

/// Resolves the fingerprint bytes from an explicit source.
pub fn fingerprint_from(source: &dyn FingerprintSource) -> [u8; FINGERPRINT_LEN] {
    resize_fingerprint(&source.machine_id())
}

/// Resolves the fingerprint bytes of the current machine.
pub fn machine_fingerprint() -> [u8; FINGERPRINT_LEN] {
    fingerprint_from(native_source().as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_truncates_long_ids() {
        let fp = resize_fingerprint("4c4c4544-0042-3510-8052-b4c04f4d3232");
        assert_eq!(&fp, b"4c4c4544");
    }

    #[test]
    fn resize_pads_short_ids_with_zeros() {
        assert_eq!(resize_fingerprint("NA"), [b'N', b'A', 0, 0, 0, 0, 0, 0]);
        assert_eq!(resize_fingerprint(""), [0u8; 8]);
    }

    #[test]
    fn resize_keeps_exact_length() {
        assert_eq!(&resize_fingerprint("ABCDEFGH"), b"ABCDEFGH");
    }

    #[test]
    fn resize_replaces_non_ascii() {
        assert_eq!(&resize_fingerprint("né-1234x"), b"n?-1234x");
    }

    #[test]
    fn sentinels_fit_the_field() {
        for s in [
            WINDOWS_SENTINEL,
            LINUX_SENTINEL,
            PLATFORM_SENTINEL,
            MISSING_UUID_SENTINEL,
            UNKNOWN_PLATFORM_ID,
        ] {
            assert_eq!(resize_fingerprint(s).len(), FINGERPRINT_LEN);
        }
        // "PLATFORM-NA" loses its suffix.
        assert_eq!(&resize_fingerprint(PLATFORM_SENTINEL), b"PLATFORM");
    }

    #[test]
    fn fixed_source_round_trips() {
        let src = FixedSource::new(UNKNOWN_PLATFORM_ID);
        assert_eq!(&fingerprint_from(&src), b"default\0");
    }

    #[test]
    fn native_fingerprint_is_always_eight_bytes() {
        let fp = machine_fingerprint();
        assert_eq!(fp.len(), FINGERPRINT_LEN);
    }
}
