use crate::{CamResult, cam::FdtCam};
use std::{future::Future, path::Path};

/// This trait provides convenience functions for the `FdtCam` struct.
pub trait CamUtil {
    /// Convenience method for capturing a snapshot and writing it to a file.
    ///
    /// * `path` - Destination path. An existing file is overwritten; the write
    ///   is not atomic, so a reader racing the write may observe a partial file.
    ///
    /// The file handle is closed before the future resolves.
    fn save_snapshot(
        &self,
        path: impl AsRef<Path> + Send,
    ) -> impl Future<Output = CamResult<()>> + Send;
}

impl CamUtil for FdtCam {
    async fn save_snapshot(&self, path: impl AsRef<Path> + Send) -> CamResult<()> {
        let bytes = self.get_snapshot().await?;

        tokio::fs::write(path, &bytes).await?;

        Ok(())
    }
}
