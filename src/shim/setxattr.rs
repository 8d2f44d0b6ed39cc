use super::{Shim, encode_path_name};
use crate::{
    buffer,
    error::XattrError,
    native::{SymlinkMode, XattrSys},
};

impl<S: XattrSys> Shim<S> {
    /// Create or replace attribute `name` of `path`, following symlinks.
    ///
    /// The value is stored as its UTF-8 bytes, without a terminator.
    pub async fn setxattr(&self, path: &str, name: &str, value: &str) -> bool {
        self.set_value(SymlinkMode::Follow, path, name, value).await
    }

    /// Like [`Shim::setxattr`], but writes to a symlink itself.
    pub async fn lsetxattr(&self, path: &str, name: &str, value: &str) -> bool {
        self.set_value(SymlinkMode::NoFollow, path, name, value).await
    }

    async fn set_value(&self, mode: SymlinkMode, path: &str, name: &str, value: &str) -> bool {
        let call = mode.pick("setxattr", "lsetxattr");
        let args = encode_path_name(path, name)
            .map(|(path, name)| (path, name, buffer::encode_value(value)));
        self.run(call, args, move |sys, (path, name, value)| {
            sys.set(mode, &path, &name, &value)
                .map_err(|source| XattrError::Os { call, source })?;
            Ok(())
        })
        .await
        .is_some()
    }
}
