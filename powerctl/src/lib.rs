//! Power-state control: log off, shut down, reboot, power off, suspend and
//! hibernate, with best-effort elevation of the shutdown privilege on the
//! current process token.
//!
//! The real backend is Win32 (`ExitWindowsEx`, `SetSuspendState` and the
//! token APIs, reached through the `windows` crate). Other targets compile
//! but report the transitions as unsupported. Everything is synchronous and
//! blocking; for shutdown-type actions the OS may terminate the process
//! before the call returns.
//!
//! ```no_run
//! use powerctl::{request_power_action, NativePower, PowerAction};
//!
//! request_power_action(&NativePower, PowerAction::Reboot, false)?;
//! # Ok::<(), powerctl::Error>(())
//! ```

mod action;
mod controller;
mod error;
mod tests;

#[cfg(windows)]
mod win32;
#[cfg(not(windows))]
mod unsupported;

pub use action::{exit_flags, PowerAction};
pub use controller::{request_power_action, PowerProvider, SHUTDOWN_PRIVILEGE};
pub use error::{Error, Result};

#[cfg(windows)]
pub use win32::{enable_privilege, format_os_error, has_capability, NativePower};
#[cfg(not(windows))]
pub use unsupported::{enable_privilege, format_os_error, has_capability, NativePower};
