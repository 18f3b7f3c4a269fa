//! Stand-ins for platforms without the power and token facilities. Probes
//! report absence and transitions report unsupported, so callers degrade
//! gracefully instead of failing to compile.

use crate::controller::PowerProvider;
use crate::error::{Error, Result};
use tracing::debug;

/// Always `false`: there are no platform libraries to probe here.
pub fn has_capability(_library: &str, _symbol: &str) -> bool {
    false
}

/// Always the synthetic fallback; there is no system message table.
pub fn format_os_error(code: u32) -> String {
    format!("Unspecified error [{code}]")
}

/// Token adjustment does not apply on this platform; report success so
/// exit-type requests still reach the transition call.
pub fn enable_privilege(privilege: &str) -> Result<()> {
    debug!(privilege, "token adjustment unavailable, skipping");
    Ok(())
}

/// [`PowerProvider`] for platforms without a power-transition facility.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativePower;

impl PowerProvider for NativePower {
    fn enable_privilege(&self, privilege: &str) -> Result<()> {
        enable_privilege(privilege)
    }

    fn exit_session(&self, _flags: u32) -> Result<()> {
        Err(Error::Unsupported("session exit"))
    }

    fn suspend(&self, _hibernate: bool, _force: bool) -> Result<()> {
        Err(Error::Unsupported("suspend"))
    }
}
