//! Filesystem-backed attachment store for complaint images.
//!
//! Each complaint has two fixed slots: the citizen's original photo and the
//! officer's resolution photo. Originals live directly under the storage
//! root under a timestamp-prefixed name that is recorded on the complaint
//! row; resolution images live under `{root}/resolution/` under the fixed
//! name `resolution_{id}`, so re-uploading replaces the previous proof.
//!
//! The storage root is injected at construction. Directories are created
//! lazily on first write. Writes are plain `tokio::fs` calls with no file
//! locking: concurrent writes to the same slot interleave
//! non-deterministically (last write wins).

use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::fs::File;

use crate::complaint::{original_image_name, resolution_image_name};
use crate::types::{epoch_millis, DbId};

/// Subdirectory of the storage root holding resolution images.
const RESOLUTION_DIR: &str = "resolution";

/// Fallback content type for original images with an unknown extension.
pub const FALLBACK_ORIGINAL_CONTENT_TYPE: &str = "application/octet-stream";

/// Fallback content type for resolution images. These are stored without
/// an extension, so this fallback is what gets served in practice.
pub const FALLBACK_RESOLUTION_CONTENT_TYPE: &str = "image/jpeg";

/// Binary attachment storage addressed by complaint id and slot.
#[derive(Debug, Clone)]
pub struct AttachmentStore {
    root: PathBuf,
}

impl AttachmentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Base directory under which all attachments are stored.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a citizen-uploaded image, returning the stored name to
    /// record on the complaint row.
    pub async fn put_original(
        &self,
        filename: Option<&str>,
        bytes: &[u8],
    ) -> io::Result<String> {
        fs::create_dir_all(&self.root).await?;
        let stored = original_image_name(epoch_millis(), filename);
        fs::write(self.root.join(&stored), bytes).await?;
        Ok(stored)
    }

    /// Persist an officer's resolution image, overwriting any prior one
    /// for the same complaint.
    pub async fn put_resolution(&self, id: DbId, bytes: &[u8]) -> io::Result<String> {
        let dir = self.root.join(RESOLUTION_DIR);
        fs::create_dir_all(&dir).await?;
        let stored = resolution_image_name(id);
        fs::write(dir.join(&stored), bytes).await?;
        Ok(stored)
    }

    /// Open a stored original image by the name recorded on the complaint.
    ///
    /// Returns `Ok(None)` when no such file exists; other I/O failures
    /// propagate.
    pub async fn open_original(
        &self,
        stored_name: &str,
    ) -> io::Result<Option<(File, &'static str)>> {
        let path = self.root.join(stored_name);
        open_with_content_type(&path, FALLBACK_ORIGINAL_CONTENT_TYPE).await
    }

    /// Open the resolution image for a complaint, if one was uploaded.
    pub async fn open_resolution(&self, id: DbId) -> io::Result<Option<(File, &'static str)>> {
        let path = self.root.join(RESOLUTION_DIR).join(resolution_image_name(id));
        open_with_content_type(&path, FALLBACK_RESOLUTION_CONTENT_TYPE).await
    }
}

async fn open_with_content_type(
    path: &Path,
    fallback: &'static str,
) -> io::Result<Option<(File, &'static str)>> {
    match File::open(path).await {
        Ok(file) => Ok(Some((file, content_type_for(path, fallback)))),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Guess a Content-Type from the file extension.
fn content_type_for(path: &Path, fallback: &'static str) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => fallback,
    }
}
