//! Archive listing.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use zip::ZipArchive;

use crate::Result;
use crate::SkeletonError;
use crate::inspection::manifest::ManifestEntry;
use crate::inspection::manifest::SkeletonManifest;

/// Lists the entries of a zip archive without extracting anything.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not a readable zip.
pub fn list_skeleton<P: AsRef<Path>>(archive_path: P) -> Result<SkeletonManifest> {
    let mut archive = open_zip(archive_path.as_ref())?;
    let mut manifest = SkeletonManifest::new(String::from_utf8_lossy(archive.comment()));

    for i in 0..archive.len() {
        let entry = archive
            .by_index_raw(i)
            .map_err(|e| SkeletonError::InvalidArchive(format!("failed to read entry {i}: {e}")))?;

        manifest.add_entry(ManifestEntry {
            name: entry.name().to_string(),
            is_dir: entry.is_dir(),
            size: entry.size(),
            compressed_size: entry.compressed_size(),
            compression: format!("{:?}", entry.compression()),
            modified: entry.last_modified().map(|dt| {
                format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    dt.year(),
                    dt.month(),
                    dt.day(),
                    dt.hour(),
                    dt.minute(),
                    dt.second()
                )
            }),
        });
    }

    Ok(manifest)
}

pub(crate) fn open_zip(archive_path: &Path) -> Result<ZipArchive<BufReader<File>>> {
    let file = File::open(archive_path)?;
    ZipArchive::new(BufReader::new(file))
        .map_err(|e| SkeletonError::InvalidArchive(format!("failed to open ZIP archive: {e}")))
}
