//! Async access to POSIX extended attributes.
//!
//! Eight calls mirror the C library: get, set, list and remove, each in a
//! variant that follows symlinks and an `l`-prefixed one that acts on the
//! link itself. Paths, names and values are plain strings. Failures of any
//! kind (missing path or attribute, permissions, unsupported filesystem,
//! undecodable payload) come back as `false` or `None`; the underlying
//! errno is only reported through `tracing` at debug level.
//!
//! Every call runs its blocking syscalls on Tokio's blocking pool, so the
//! functions must be awaited inside a Tokio runtime; anywhere else they
//! resolve to `false`/`None` without touching the filesystem. Calls are not
//! cancellable once dispatched.
//!
//! ```no_run
//! # async fn demo() {
//! if xattrs::setxattr("/tmp/file", "user.comment", "hello").await {
//!     assert_eq!(
//!         xattrs::getxattr("/tmp/file", "user.comment").await.as_deref(),
//!         Some("hello")
//!     );
//! }
//! # }
//! ```

mod buffer;
mod error;
mod native;
mod shim;

pub use native::{Libc, SymlinkMode, XattrSys};
pub use shim::Shim;

/// Create or replace attribute `name` on `path`, following symlinks.
pub async fn setxattr(path: &str, name: &str, value: &str) -> bool {
    Shim::global().setxattr(path, name, value).await
}

/// Create or replace attribute `name` on the symlink `path` itself.
pub async fn lsetxattr(path: &str, name: &str, value: &str) -> bool {
    Shim::global().lsetxattr(path, name, value).await
}

/// Value of attribute `name` on `path`, following symlinks.
pub async fn getxattr(path: &str, name: &str) -> Option<String> {
    Shim::global().getxattr(path, name).await
}

/// Value of attribute `name` on the symlink `path` itself.
pub async fn lgetxattr(path: &str, name: &str) -> Option<String> {
    Shim::global().lgetxattr(path, name).await
}

/// Attribute names on `path`, following symlinks.
pub async fn listxattr(path: &str) -> Option<Vec<String>> {
    Shim::global().listxattr(path).await
}

/// Attribute names on the symlink `path` itself.
pub async fn llistxattr(path: &str) -> Option<Vec<String>> {
    Shim::global().llistxattr(path).await
}

/// Remove attribute `name` from `path`, following symlinks.
pub async fn removexattr(path: &str, name: &str) -> bool {
    Shim::global().removexattr(path, name).await
}

/// Remove attribute `name` from the symlink `path` itself.
pub async fn lremovexattr(path: &str, name: &str) -> bool {
    Shim::global().lremovexattr(path, name).await
}
