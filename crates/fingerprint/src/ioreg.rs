//! macOS hardware inventory (`ioreg`) source.
//!
//! The platform UUID appears in `ioreg -rd1 -c IOPlatformExpertDevice` output
//! as a line like:
//!
//! ```text
//!     "IOPlatformUUID" = "564D0E1A-7D5B-4B2E-9C1B-0A1B2C3D4E5F"
//! ```

use std::process::{Command, Stdio};

use tracing::debug;

use crate::{FingerprintError, FingerprintSource, MISSING_UUID_SENTINEL, PLATFORM_SENTINEL};

const UUID_KEY: &str = "IOPlatformUUID";

/// Runs the hardware inventory command and extracts the platform UUID.
#[derive(Debug, Clone)]
pub struct IoregPlatformUuid {
    program: String,
    args: Vec<String>,
}

impl IoregPlatformUuid {
    /// Uses an arbitrary command whose stdout is parsed like `ioreg` output.
    pub fn with_command(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| (*a).to_string()).collect(),
        }
    }

    fn run(&self) -> Result<String, FingerprintError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Default for IoregPlatformUuid {
    fn default() -> Self {
        Self::with_command("ioreg", &["-rd1", "-c", "IOPlatformExpertDevice"])
    }
}

impl FingerprintSource for IoregPlatformUuid {
    fn machine_id(&self) -> String {
        let output = match self.run() {
            Ok(out) => out,
            Err(e) => {
                debug!(program = %self.program, error = %e, "hardware inventory failed");
                return PLATFORM_SENTINEL.into();
            }
        };

        match parse_ioreg_uuid(&output) {
            Ok(uuid) => uuid,
            Err(FingerprintError::MissingKey) => {
                debug!("hardware inventory has no platform UUID");
                MISSING_UUID_SENTINEL.into()
            }
            Err(e) => {
                debug!(error = %e, "hardware inventory output unreadable");
                PLATFORM_SENTINEL.into()
            }
        }
    }
}

/// Extracts the quoted value following `IOPlatformUUID` in `ioreg` output.
///
/// Returns [`FingerprintError::MissingKey`] when the key is absent and
/// [`FingerprintError::Malformed`] when the `= "value"` part is cut short.
pub fn parse_ioreg_uuid(output: &str) -> Result<String, FingerprintError> {
    let key_at = output.find(UUID_KEY).ok_or(FingerprintError::MissingKey)?;
    let rest = &output[key_at + UUID_KEY.len()..];
    // The value must sit on the key's own line.
    let after_key = rest.lines().next().unwrap_or_default();

    let eq = after_key
        .find('=')
        .ok_or_else(|| FingerprintError::Malformed("no value after key".into()))?;
    let after_eq = &after_key[eq + 1..];
    let open = after_eq
        .find('"')
        .ok_or_else(|| FingerprintError::Malformed("value is not quoted".into()))?;
    let value = &after_eq[open + 1..];
    let close = value
        .find('"')
        .ok_or_else(|| FingerprintError::Malformed("unterminated value".into()))?;

    Ok(value[..close].to_string())
}
