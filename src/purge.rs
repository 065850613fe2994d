// Image purge: deletes image files from the top level of a folder. Images
// are recognised by extension only; subdirectories are never entered.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::PurgeError;

/// Folder purged when none is given on the command line.
pub const DEFAULT_IMAGE_FOLDER: &str = "images";

/// Lower-cased extensions treated as images.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp"];

/// Outcome of a purge that managed to list its folder.
#[derive(Debug, Default)]
pub struct PurgeReport {
    /// Files that were removed.
    pub deleted: Vec<PathBuf>,
    /// One [`PurgeError::FileDelete`] per file that could not be removed.
    pub failed: Vec<PurgeError>,
}

/// Returns true if `path` has an extension from [`IMAGE_EXTENSIONS`],
/// ignoring case. A bare dotfile such as `.png` has no extension.
pub fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Deletes every image directly inside `folder`.
///
/// The whole listing is read before anything is removed, so a listing
/// failure deletes nothing and returns [`PurgeError::DirectoryRead`].
/// Each deletion is attempted exactly once; failures are collected in the
/// report and do not stop the remaining deletions.
///
/// # Side Effects
///
/// - Irreversibly removes matching files.
pub fn purge_images(folder: &Path) -> Result<PurgeReport, PurgeError> {
    log::debug!("Scanning '{}' for images", folder.display());

    let entries = fs::read_dir(folder)
        .and_then(|entries| entries.collect::<Result<Vec<_>, _>>())
        .map_err(|error| PurgeError::DirectoryRead {
            path: folder.to_path_buf(),
            error,
        })?;

    let mut report = PurgeReport::default();
    for entry in entries {
        let path = entry.path();
        if !is_image(&path) {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => {
                log::info!("Deleted file: {}", path.display());
                report.deleted.push(path);
            }
            Err(error) => {
                log::warn!("Failed to delete '{}': {}", path.display(), error);
                report.failed.push(PurgeError::FileDelete { path, error });
            }
        }
    }

    Ok(report)
}
