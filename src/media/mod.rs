// SPDX-License-Identifier: MPL-2.0
//! The selected file and its local preview.
//!
//! A preview never touches the network: the file is read from disk, decoded
//! to confirm it really is an image, and handed to the image widget as an
//! in-memory handle. The application state keeps at most one
//! [`PreviewImage`] alive; installing a new one drops its predecessor.

use crate::error::{Error, Result};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// File extensions offered by the open dialog and accepted for drops.
pub const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// The user's chosen image, referenced for the duration of one submission.
///
/// Superseded wholesale by the next selection; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn from_path(path: PathBuf) -> Self {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        let mime_type = guess_mime_type(&path).to_string();
        Self {
            path,
            file_name,
            mime_type,
        }
    }
}

/// Maps a file extension to the MIME type sent with the multipart part.
fn guess_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// An in-memory thumbnail handle bound to the selected file.
#[derive(Debug, Clone)]
pub struct PreviewImage {
    handle: image::Handle,
    width: u32,
    height: u32,
    byte_len: usize,
}

impl PreviewImage {
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn byte_len(&self) -> usize {
        self.byte_len
    }

    /// Short caption shown under the thumbnail, e.g. `1024 × 768 px · 2.1 MB`.
    pub fn caption(&self) -> String {
        format!(
            "{} × {} px · {}",
            self.width,
            self.height,
            format_size(self.byte_len)
        )
    }
}

fn format_size(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let bytes = bytes as f64;
    if bytes >= MB {
        format!("{:.1} MB", bytes / MB)
    } else if bytes >= KB {
        format!("{:.0} kB", bytes / KB)
    } else {
        format!("{} B", bytes)
    }
}

/// Reads and decodes the file, returning a widget-ready preview.
///
/// Decoding up front means a non-image lands in the error surface here
/// rather than as a confusing blank thumbnail later.
pub fn load_preview(path: &Path) -> Result<PreviewImage> {
    let bytes = std::fs::read(path)?;
    let decoded = ::image::load_from_memory(&bytes).map_err(|e| Error::Io(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());
    let byte_len = bytes.len();

    Ok(PreviewImage {
        handle: image::Handle::from_bytes(bytes),
        width,
        height,
        byte_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_test_png(dir: &Path) -> PathBuf {
        let path = dir.join("catch.png");
        let img = ::image::RgbaImage::from_pixel(3, 2, ::image::Rgba([0, 90, 120, 255]));
        img.save(&path).expect("failed to write test png");
        path
    }

    #[test]
    fn selected_file_guesses_mime_from_extension() {
        let file = SelectedFile::from_path(PathBuf::from("/photos/Catch.JPG"));
        assert_eq!(file.mime_type, "image/jpeg");
        assert_eq!(file.file_name, "Catch.JPG");

        let file = SelectedFile::from_path(PathBuf::from("/photos/net.png"));
        assert_eq!(file.mime_type, "image/png");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        let file = SelectedFile::from_path(PathBuf::from("/photos/catch"));
        assert_eq!(file.mime_type, "application/octet-stream");
    }

    #[test]
    fn load_preview_reads_dimensions() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = write_test_png(dir.path());

        let preview = load_preview(&path).expect("preview should load");
        assert_eq!(preview.width(), 3);
        assert_eq!(preview.height(), 2);
        assert!(preview.byte_len() > 0);
        assert!(preview.caption().starts_with("3 × 2 px"));
    }

    #[test]
    fn load_preview_rejects_non_image_bytes() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not pixels").expect("failed to write file");

        let err = load_preview(&path).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_preview_reports_missing_file() {
        let err = load_preview(Path::new("/no/such/file.png")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn sizes_are_humanized() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2 kB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }
}
