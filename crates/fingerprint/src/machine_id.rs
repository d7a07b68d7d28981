//! systemd/dbus machine-id file source.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{FingerprintError, FingerprintSource, LINUX_SENTINEL};

/// Default location of the machine-id file.
pub const DEFAULT_MACHINE_ID_PATH: &str = "/etc/machine-id";

/// Reads the machine identity from a machine-id file.
#[derive(Debug, Clone)]
pub struct LinuxMachineId {
    path: PathBuf,
}

impl LinuxMachineId {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LinuxMachineId {
    fn default() -> Self {
        Self::new(DEFAULT_MACHINE_ID_PATH)
    }
}

impl FingerprintSource for LinuxMachineId {
    fn machine_id(&self) -> String {
        match read_machine_id(&self.path) {
            Ok(id) => id,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "machine-id unavailable");
                LINUX_SENTINEL.into()
            }
        }
    }
}

/// Reads and trims a machine-id file. An empty file is not an error.
///
/// Invalid UTF-8 is decoded lossily; only a failed read is an error.
pub fn read_machine_id(path: &Path) -> Result<String, FingerprintError> {
    let data = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&data).trim().to_string())
}
