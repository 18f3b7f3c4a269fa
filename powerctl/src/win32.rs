//! Win32 backend: capability probing, error-message formatting, token
//! privilege adjustment and the actual power-transition calls.

use crate::controller::PowerProvider;
use crate::error::{Error, Result};
use std::ffi::CString;
use tracing::debug;
use windows::core::{Owned, HSTRING, PCSTR, PCWSTR, PWSTR};
use windows::Win32::Foundation::{BOOLEAN, HANDLE, HMODULE, LUID};
use windows::Win32::Security::{
    AdjustTokenPrivileges, LookupPrivilegeValueW, LUID_AND_ATTRIBUTES, SE_PRIVILEGE_ENABLED,
    TOKEN_ADJUST_PRIVILEGES, TOKEN_PRIVILEGES, TOKEN_QUERY,
};
use windows::Win32::System::Diagnostics::Debug::{
    FormatMessageW, FORMAT_MESSAGE_FROM_SYSTEM, FORMAT_MESSAGE_IGNORE_INSERTS,
};
use windows::Win32::System::LibraryLoader::{FreeLibrary, GetProcAddress, LoadLibraryW};
use windows::Win32::System::Power::SetSuspendState;
use windows::Win32::System::Shutdown::{ExitWindowsEx, EXIT_WINDOWS_FLAGS, SHUTDOWN_REASON};
use windows::Win32::System::Threading::{GetCurrentProcess, OpenProcessToken};

/// Module handle that is freed when it goes out of scope, on success and
/// error paths alike.
struct LoadedLibrary(HMODULE);

impl Drop for LoadedLibrary {
    fn drop(&mut self) {
        unsafe {
            let _ = FreeLibrary(self.0);
        }
    }
}

/// Whether `library` exports `symbol` on the running OS.
///
/// Never fails: an unloadable library or unresolvable symbol yields `false`.
/// The library handle acquired for the probe is released on every path.
pub fn has_capability(library: &str, symbol: &str) -> bool {
    let Ok(module) = (unsafe { LoadLibraryW(&HSTRING::from(library)) }) else {
        return false;
    };
    let module = LoadedLibrary(module);
    let Ok(symbol) = CString::new(symbol) else {
        return false;
    };
    unsafe { GetProcAddress(module.0, PCSTR(symbol.as_ptr().cast())) }.is_some()
}

/// Render an OS error code through the system message table. Codes with no
/// message yield `"Unspecified error [<code>]"`; this never fails.
pub fn format_os_error(code: u32) -> String {
    let mut buffer = [0u16; 512];
    let len = unsafe {
        FormatMessageW(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            None,
            code,
            0,
            PWSTR(buffer.as_mut_ptr()),
            buffer.len() as u32,
            None,
        )
    };
    let message = String::from_utf16_lossy(&buffer[..len as usize]);
    let message = message.trim_end();
    if message.is_empty() {
        format!("Unspecified error [{code}]")
    } else {
        message.to_string()
    }
}

// windows-rs stores Win32 failures as HRESULTs; recover the original code so
// the formatter sees what GetLastError reported.
fn privilege_error(err: windows::core::Error) -> Error {
    let hr = err.code().0 as u32;
    let code = if hr & 0xFFFF_0000 == 0x8007_0000 {
        hr & 0xFFFF
    } else {
        hr
    };
    Error::Privilege(format_os_error(code))
}

/// Enable `privilege` on the current process token.
///
/// A single privilege entry is adjusted per call and nothing is ever
/// disabled by this path. On systems without the token-adjustment entry
/// point this is a no-op success. The token handle is closed on every exit
/// path.
pub fn enable_privilege(privilege: &str) -> Result<()> {
    if !has_capability("advapi32.dll", "AdjustTokenPrivileges") {
        debug!(privilege, "token adjustment unavailable, skipping");
        return Ok(());
    }

    unsafe {
        let mut token: Owned<HANDLE> = Owned::default();
        OpenProcessToken(
            GetCurrentProcess(),
            TOKEN_ADJUST_PRIVILEGES | TOKEN_QUERY,
            &mut *token,
        )
        .map_err(privilege_error)?;

        let mut luid = LUID::default();
        LookupPrivilegeValueW(PCWSTR::null(), &HSTRING::from(privilege), &mut luid)
            .map_err(privilege_error)?;

        let new_state = TOKEN_PRIVILEGES {
            PrivilegeCount: 1,
            Privileges: [LUID_AND_ATTRIBUTES {
                Luid: luid,
                Attributes: SE_PRIVILEGE_ENABLED,
            }],
        };
        AdjustTokenPrivileges(*token, false, Some(&new_state), 0, None, None)
            .map_err(privilege_error)
    }
}

/// [`PowerProvider`] backed by the Win32 power and token facilities.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativePower;

impl PowerProvider for NativePower {
    fn enable_privilege(&self, privilege: &str) -> Result<()> {
        enable_privilege(privilege)
    }

    fn exit_session(&self, flags: u32) -> Result<()> {
        unsafe { ExitWindowsEx(EXIT_WINDOWS_FLAGS(flags), SHUTDOWN_REASON(0)) }
            .map_err(privilege_error)
    }

    fn suspend(&self, hibernate: bool, force: bool) -> Result<()> {
        if !has_capability("powrprof.dll", "SetSuspendState") {
            return Err(Error::Unsupported("suspend"));
        }
        // Fire-and-forget: only the capability probe is checked, the
        // transition's return code is discarded.
        unsafe {
            let _ = SetSuspendState(
                BOOLEAN::from(hibernate),
                BOOLEAN::from(force),
                BOOLEAN::from(false),
            );
        }
        Ok(())
    }
}
