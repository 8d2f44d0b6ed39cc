mod getxattr;
mod listxattr;
mod removexattr;
mod setxattr;


use std::{
    ffi::CString,
    io,
    sync::{Arc, LazyLock},
};

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::{
    buffer,
    error::XattrError,
    native::{Libc, XattrSys},
};

static GLOBAL: LazyLock<Shim> = LazyLock::new(|| Shim::new(Libc));

/// The attribute access shim.
///
/// Owns a shared handle to the native interface and turns each operation
/// into one blocking task. Every method resolves to a value or to the
/// failure value of its type (`false` / `None`); nothing is raised.
pub struct Shim<S = Libc> {
    sys: Arc<S>,
}

impl Shim<Libc> {
    /// The process-wide shim over the host C library, created on first use.
    pub fn global() -> &'static Shim<Libc> {
        &GLOBAL
    }
}

impl<S: XattrSys> Shim<S> {
    pub fn new(sys: S) -> Self {
        Self::from_arc(Arc::new(sys))
    }

    pub fn from_arc(sys: Arc<S>) -> Self {
        Self { sys }
    }

    /// Run `work` on the blocking pool with the encoded `args` moved into
    /// it, so the buffers live until the native call has returned. Outside
    /// a Tokio runtime nothing is dispatched and the result is `None`.
    async fn run<A, T, F>(
        &self,
        call: &'static str,
        args: Result<A, XattrError>,
        work: F,
    ) -> Option<T>
    where
        A: Send + 'static,
        T: Send + 'static,
        F: FnOnce(&S, A) -> Result<T> + Send + 'static,
    {
        let args = match args {
            Ok(args) => args,
            Err(err) => {
                debug!(call, %err, "could not encode arguments");
                return None;
            }
        };

        let Ok(runtime) = Handle::try_current() else {
            warn!(call, "no Tokio runtime");
            return None;
        };

        let sys = Arc::clone(&self.sys);
        match runtime.spawn_blocking(move || work(&sys, args)).await {
            Ok(Ok(value)) => Some(value),
            Ok(Err(err)) => {
                let errno = err
                    .downcast_ref::<XattrError>()
                    .and_then(XattrError::raw_os_error);
                let error = format!("{err:#}");
                debug!(call, ?errno, %error, "xattr call failed");
                None
            }
            Err(err) => {
                warn!(call, %err, "xattr task did not complete");
                None
            }
        }
    }
}

impl<S> Clone for Shim<S> {
    fn clone(&self) -> Self {
        Self {
            sys: Arc::clone(&self.sys),
        }
    }
}

fn encode_path_name(path: &str, name: &str) -> Result<(CString, CString), XattrError> {
    Ok((
        buffer::encode_cstr("path", path)?,
        buffer::encode_cstr("name", name)?,
    ))
}

/// Size, allocate, fetch.
///
/// `native` is called once with no buffer to learn the size, then once
/// with a buffer of exactly that size. Nothing is retried: a sizing error
/// ends the operation before any fetch, and a payload that grew in between
/// is an error rather than a truncated result.
fn two_phase<F>(call: &'static str, mut native: F) -> Result<Vec<u8>>
where
    F: FnMut(Option<&mut [u8]>) -> io::Result<u64>,
{
    let size = native(None)
        .map_err(|source| XattrError::Os { call, source })
        .context("sizing call")?;
    let mut buf = buffer::alloc(size).context("allocating fetch buffer")?;
    let reported = native(Some(&mut buf))
        .map_err(|source| XattrError::Os { call, source })
        .context("fetch call")?;
    Ok(buffer::filled(call, buf, reported)?)
}
