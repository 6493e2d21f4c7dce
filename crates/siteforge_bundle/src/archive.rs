//! In-memory zip packaging of a site artifact.

use siteforge_core::{MARKUP_ENTRY, SCRIPT_ENTRY, STYLE_ENTRY, SiteArtifact};
use siteforge_error::ArchiveError;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Packs the artifact into a deflate-compressed zip held entirely in memory.
///
/// The archive carries exactly three entries — `index.html`, `style.css`,
/// `script.js` — whose contents are the artifact payloads, byte for byte.
/// Nothing is written to disk; the returned bytes are the only serialized
/// form of the site.
pub fn pack_site(artifact: &SiteArtifact) -> Result<Vec<u8>, ArchiveError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    let entries = [
        (MARKUP_ENTRY, artifact.markup()),
        (STYLE_ENTRY, artifact.styling()),
        (SCRIPT_ENTRY, artifact.scripting()),
    ];

    for (name, contents) in entries {
        writer
            .start_file(name, options)
            .map_err(|e| ArchiveError::new(format!("failed to open entry {}: {}", name, e)))?;
        writer
            .write_all(contents.as_bytes())
            .map_err(|e| ArchiveError::new(format!("failed to write entry {}: {}", name, e)))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| ArchiveError::new(format!("failed to finish archive: {}", e)))?;

    Ok(cursor.into_inner())
}
