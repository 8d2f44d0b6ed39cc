use anyhow::Context;

use super::{Shim, two_phase};
use crate::{
    buffer,
    native::{SymlinkMode, XattrSys},
};

impl<S: XattrSys> Shim<S> {
    /// Names of all attributes of `path`, following symlinks.
    pub async fn listxattr(&self, path: &str) -> Option<Vec<String>> {
        self.list_names(SymlinkMode::Follow, path).await
    }

    /// Names of all attributes of a symlink itself.
    pub async fn llistxattr(&self, path: &str) -> Option<Vec<String>> {
        self.list_names(SymlinkMode::NoFollow, path).await
    }

    // Sizing and fetching always use the same mode.
    async fn list_names(&self, mode: SymlinkMode, path: &str) -> Option<Vec<String>> {
        let call = mode.pick("listxattr", "llistxattr");
        let path = buffer::encode_cstr("path", path);
        self.run(call, path, move |sys, path| {
            let buf = two_phase(call, |buf| sys.list(mode, &path, buf))?;
            buffer::decode_names(&buf).context("decoding name list")
        })
        .await
    }
}
