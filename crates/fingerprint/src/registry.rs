//! Windows registry `MachineGuid` source.

use tracing::debug;
use winreg::RegKey;
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_READ, KEY_WOW64_64KEY};

use crate::{FingerprintError, FingerprintSource, WINDOWS_SENTINEL};

const CRYPTOGRAPHY_KEY: &str = r"SOFTWARE\Microsoft\Cryptography";
const MACHINE_GUID_VALUE: &str = "MachineGuid";

/// Reads `HKLM\SOFTWARE\Microsoft\Cryptography\MachineGuid`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsMachineGuid;

impl FingerprintSource for WindowsMachineGuid {
    fn machine_id(&self) -> String {
        match read_machine_guid() {
            Ok(guid) => guid,
            Err(e) => {
                debug!(error = %e, "registry MachineGuid unavailable");
                WINDOWS_SENTINEL.into()
            }
        }
    }
}

fn read_machine_guid() -> Result<String, FingerprintError> {
    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    // The value lives in the 64-bit view; a 32-bit build would otherwise be redirected.
    let key = hklm.open_subkey_with_flags(CRYPTOGRAPHY_KEY, KEY_READ | KEY_WOW64_64KEY)?;
    let guid: String = key.get_value(MACHINE_GUID_VALUE)?;
    Ok(guid)
}
