use anyhow::Context;

use super::{Shim, encode_path_name, two_phase};
use crate::{
    buffer,
    native::{SymlinkMode, XattrSys},
};

impl<S: XattrSys> Shim<S> {
    /// Read attribute `name` of `path`, following symlinks.
    ///
    /// `None` if the path or attribute does not exist, the value is not
    /// UTF-8, or the value changed size between sizing and fetching.
    /// An empty value is `Some("")`.
    pub async fn getxattr(&self, path: &str, name: &str) -> Option<String> {
        self.get_value(SymlinkMode::Follow, path, name).await
    }

    /// Like [`Shim::getxattr`], but reads from a symlink itself.
    pub async fn lgetxattr(&self, path: &str, name: &str) -> Option<String> {
        self.get_value(SymlinkMode::NoFollow, path, name).await
    }

    async fn get_value(&self, mode: SymlinkMode, path: &str, name: &str) -> Option<String> {
        let call = mode.pick("getxattr", "lgetxattr");
        self.run(call, encode_path_name(path, name), move |sys, (path, name)| {
            let buf = two_phase(call, |buf| sys.get(mode, &path, &name, buf))?;
            buffer::decode_value(buf).context("decoding value")
        })
        .await
    }
}
