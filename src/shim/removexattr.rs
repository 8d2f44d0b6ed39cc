use super::{Shim, encode_path_name};
use crate::{
    error::XattrError,
    native::{SymlinkMode, XattrSys},
};

impl<S: XattrSys> Shim<S> {
    /// Remove attribute `name` of `path`, following symlinks. `false` if it
    /// was not there.
    pub async fn removexattr(&self, path: &str, name: &str) -> bool {
        self.remove_value(SymlinkMode::Follow, path, name).await
    }

    pub async fn lremovexattr(&self, path: &str, name: &str) -> bool {
        self.remove_value(SymlinkMode::NoFollow, path, name).await
    }

    async fn remove_value(&self, mode: SymlinkMode, path: &str, name: &str) -> bool {
        let call = mode.pick("removexattr", "lremovexattr");
        self.run(call, encode_path_name(path, name), move |sys, (path, name)| {
            sys.remove(mode, &path, &name)
                .map_err(|source| XattrError::Os { call, source })?;
            Ok(())
        })
        .await
        .is_some()
    }
}
