//! Power actions and their encoding for the session-exit call.

/// A requested power-state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    /// End the calling user's session.
    LogOff,
    /// Shut the system down without turning power off.
    ShutDown,
    /// Shut down and restart the system.
    Reboot,
    /// Shut down and turn power off.
    PowerOff,
    /// Enter the low-power suspend state (suspend-to-RAM).
    Suspend,
    /// Hibernate (suspend-to-disk).
    Hibernate,
}

// Flag words understood by the session-exit call. Same values as the Win32
// EWX_* constants; kept local so the flag math stays portable.
const EXIT_LOGOFF: u32 = 0x0;
const EXIT_SHUTDOWN: u32 = 0x1;
const EXIT_REBOOT: u32 = 0x2;
const EXIT_FORCE: u32 = 0x4;
const EXIT_POWEROFF: u32 = 0x8;

impl PowerAction {
    /// Base flag word for the session-exit call, or `None` for the two
    /// actions that take the suspend path instead.
    pub fn exit_code(self) -> Option<u32> {
        match self {
            PowerAction::LogOff => Some(EXIT_LOGOFF),
            PowerAction::ShutDown => Some(EXIT_SHUTDOWN),
            PowerAction::Reboot => Some(EXIT_REBOOT),
            PowerAction::PowerOff => Some(EXIT_POWEROFF),
            PowerAction::Suspend | PowerAction::Hibernate => None,
        }
    }
}

/// Flag word for the session-exit call: the action's base code with the
/// force bit OR'd in when `force` is set.
pub fn exit_flags(action: PowerAction, force: bool) -> Option<u32> {
    let base = action.exit_code()?;
    Some(if force { base | EXIT_FORCE } else { base })
}
