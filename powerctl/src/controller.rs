//! Dispatch from a requested [`PowerAction`] to the OS transition calls.

use crate::action::{exit_flags, PowerAction};
use crate::error::{Error, Result};
use tracing::debug;

/// Privilege required for the exit-type transitions.
pub const SHUTDOWN_PRIVILEGE: &str = "SeShutdownPrivilege";

/// The OS facilities the controller drives. [`crate::NativePower`] is the
/// real implementation; tests substitute a recording fake.
pub trait PowerProvider {
    /// Enable `privilege` on the current process token. Platforms without a
    /// privilege-adjustment facility must report success without doing
    /// anything.
    fn enable_privilege(&self, privilege: &str) -> Result<()>;

    /// Issue the session-exit transition with the given flag word.
    fn exit_session(&self, flags: u32) -> Result<()>;

    /// Issue the suspend transition. Implementations report an error only
    /// when the suspend facility is missing entirely; the transition's own
    /// return code is discarded.
    fn suspend(&self, hibernate: bool, force: bool) -> Result<()>;
}

/// Ensure the process may change power state, then request `action`.
///
/// `force` is OR'd into the flag word for the exit-type actions; on the
/// suspend path it is forwarded to the OS primitive as-is.
///
/// For shutdown, reboot and power-off the OS may terminate this process
/// before the call returns.
pub fn request_power_action(
    power: &impl PowerProvider,
    action: PowerAction,
    force: bool,
) -> Result<()> {
    match action {
        PowerAction::Suspend => suspend_system(power, false, force),
        PowerAction::Hibernate => suspend_system(power, true, force),
        action => exit_system(power, action, force),
    }
}

fn suspend_system(power: &impl PowerProvider, hibernate: bool, force: bool) -> Result<()> {
    debug!(hibernate, force, "requesting suspend transition");
    power.suspend(hibernate, force)
}

fn exit_system(power: &impl PowerProvider, action: PowerAction, force: bool) -> Result<()> {
    let Some(flags) = exit_flags(action, force) else {
        return Err(Error::Unsupported("session exit"));
    };
    debug!(?action, flags, "requesting session exit");
    power.enable_privilege(SHUTDOWN_PRIVILEGE)?;
    power.exit_session(flags)
}
