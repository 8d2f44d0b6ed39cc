//! The boundary to the C library's xattr calls.
//!
//! [`XattrSys`] is a safe, slice-based view of the eight calls. The only
//! production implementation is [`Libc`]; everything above this module
//! deals in owned buffers and never touches a raw pointer.

use std::{ffi::CStr, io, ptr};

/// Whether a call resolves a trailing symlink or acts on the link itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymlinkMode {
    Follow,
    NoFollow,
}

impl SymlinkMode {
    /// Pick the libc call name matching this mode, for diagnostics.
    pub(crate) fn pick(self, follow: &'static str, no_follow: &'static str) -> &'static str {
        match self {
            SymlinkMode::Follow => follow,
            SymlinkMode::NoFollow => no_follow,
        }
    }
}

/// The native xattr interface.
///
/// Sizes come back as `u64` exactly as the kernel reported them; callers
/// range-check before allocating. A destination of `None` is the sizing
/// call: a null buffer with a requested size of 0.
///
/// Errors must carry the errno of the failing call, which means reading it
/// on the same thread, right after the call.
pub trait XattrSys: Send + Sync + 'static {
    fn set(&self, mode: SymlinkMode, path: &CStr, name: &CStr, value: &[u8]) -> io::Result<()>;

    fn get(
        &self,
        mode: SymlinkMode,
        path: &CStr,
        name: &CStr,
        buf: Option<&mut [u8]>,
    ) -> io::Result<u64>;

    fn list(&self, mode: SymlinkMode, path: &CStr, buf: Option<&mut [u8]>) -> io::Result<u64>;

    fn remove(&self, mode: SymlinkMode, path: &CStr, name: &CStr) -> io::Result<()>;
}

/// The host C library.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libc;

// Create-or-replace.
const SET_FLAGS: libc::c_int = 0;

impl XattrSys for Libc {
    fn set(&self, mode: SymlinkMode, path: &CStr, name: &CStr, value: &[u8]) -> io::Result<()> {
        let f = match mode {
            SymlinkMode::Follow => libc::setxattr,
            SymlinkMode::NoFollow => libc::lsetxattr,
        };
        // SAFETY: path and name are NUL-terminated and the value pointer is
        // valid for value.len() bytes for the duration of the call.
        let res = unsafe {
            f(
                path.as_ptr(),
                name.as_ptr(),
                value.as_ptr() as *const libc::c_void,
                value.len(),
                SET_FLAGS,
            )
        };
        check_status(res)
    }

    fn get(
        &self,
        mode: SymlinkMode,
        path: &CStr,
        name: &CStr,
        buf: Option<&mut [u8]>,
    ) -> io::Result<u64> {
        let f = match mode {
            SymlinkMode::Follow => libc::getxattr,
            SymlinkMode::NoFollow => libc::lgetxattr,
        };
        let (buf_ptr, size) = raw_parts(buf);
        // SAFETY: buf_ptr is either null with size 0, or points to a live
        // exclusive slice of exactly `size` bytes.
        let res = unsafe { f(path.as_ptr(), name.as_ptr(), buf_ptr, size) };
        check_size(res)
    }

    fn list(&self, mode: SymlinkMode, path: &CStr, buf: Option<&mut [u8]>) -> io::Result<u64> {
        let f = match mode {
            SymlinkMode::Follow => libc::listxattr,
            SymlinkMode::NoFollow => libc::llistxattr,
        };
        let (buf_ptr, size) = raw_parts(buf);
        // SAFETY: as for `get`.
        let res = unsafe { f(path.as_ptr(), buf_ptr as *mut libc::c_char, size) };
        check_size(res)
    }

    fn remove(&self, mode: SymlinkMode, path: &CStr, name: &CStr) -> io::Result<()> {
        let f = match mode {
            SymlinkMode::Follow => libc::removexattr,
            SymlinkMode::NoFollow => libc::lremovexattr,
        };
        // SAFETY: both arguments are NUL-terminated.
        let res = unsafe { f(path.as_ptr(), name.as_ptr()) };
        check_status(res)
    }
}

fn raw_parts(buf: Option<&mut [u8]>) -> (*mut libc::c_void, usize) {
    match buf {
        Some(buf) => (buf.as_mut_ptr() as *mut libc::c_void, buf.len()),
        None => (ptr::null_mut(), 0),
    }
}

fn check_status(res: libc::c_int) -> io::Result<()> {
    if res == 0 {
        Ok(())
    } else {
        Err(io::Error::last_os_error())
    }
}

fn check_size(res: libc::ssize_t) -> io::Result<u64> {
    if res < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(res as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_path_reports_enoent() {
        let path = c"/nonexistent/xattrs-native-test";
        let err = Libc
            .get(SymlinkMode::Follow, path, c"user.missing", None)
            .unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));

        let err = Libc.list(SymlinkMode::NoFollow, path, None).unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));

        let err = Libc
            .remove(SymlinkMode::Follow, path, c"user.missing")
            .unwrap_err();
        assert_eq!(err.raw_os_error(), Some(libc::ENOENT));
    }

    #[test]
    fn pick_matches_mode() {
        assert_eq!(SymlinkMode::Follow.pick("getxattr", "lgetxattr"), "getxattr");
        assert_eq!(SymlinkMode::NoFollow.pick("getxattr", "lgetxattr"), "lgetxattr");
    }
}
