use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::util::format::format_file_size;

pub const DEFAULT_ACCEPTED_FORMATS: [&str; 5] = ["mp3", "wav", "m4a", "aac", "flac"];
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

#[derive(Error, Debug, Clone)]
pub enum UploadError {
    #[error("Unsupported format `{extension}`. Accepted formats: {accepted}")]
    UnsupportedFormat { extension: String, accepted: String },

    #[error("File too large ({size}). Maximum size: {max}")]
    TooLarge { size: String, max: String },

    #[error("Could not read file: {0}")]
    Unreadable(String),
}

/// An accepted upload selection. The file itself stays on disk; only the
/// handle travels through the form.
#[derive(Debug, Clone)]
pub struct AudioFile {
    pub path: PathBuf,
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct UploadPolicy {
    accepted_formats: Vec<String>,
    max_size: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ACCEPTED_FORMATS.iter().map(|f| f.to_string()),
            MAX_UPLOAD_BYTES,
        )
    }
}

impl UploadPolicy {
    pub fn new(accepted_formats: impl IntoIterator<Item = String>, max_size: u64) -> Self {
        Self {
            accepted_formats: accepted_formats
                .into_iter()
                .map(|f| f.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
            max_size,
        }
    }

    /// Human-readable allow-list, e.g. `.mp3, .wav`.
    pub fn accepted_list(&self) -> String {
        self.accepted_formats
            .iter()
            .map(|f| format!(".{f}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Extension first, then size, matching the order failures are surfaced
    /// to the user. On rejection the caller keeps its previous selection.
    pub fn check(&self, path: &Path) -> Result<AudioFile, UploadError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        if !self.accepted_formats.contains(&extension) {
            return Err(UploadError::UnsupportedFormat {
                extension: format!(".{extension}"),
                accepted: self.accepted_list(),
            });
        }

        let metadata = fs::metadata(path).map_err(|e| UploadError::Unreadable(e.to_string()))?;
        if metadata.len() > self.max_size {
            return Err(UploadError::TooLarge {
                size: format_file_size(metadata.len()),
                max: format_file_size(self.max_size),
            });
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        Ok(AudioFile {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_audio(dir: &tempfile::TempDir, name: &str, bytes: usize) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&vec![0u8; bytes]).unwrap();
        path
    }

    #[test]
    fn accepts_allowed_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let policy = UploadPolicy::default();

        for name in ["a.mp3", "b.wav", "c.m4a", "d.aac", "e.flac", "f.MP3"] {
            let path = temp_audio(&dir, name, 16);
            let file = policy.check(&path).unwrap();
            assert_eq!(file.size, 16);
            assert_eq!(file.name, name);
        }
    }

    #[test]
    fn rejects_disallowed_extensions() {
        let dir = tempfile::tempdir().unwrap();
        let policy = UploadPolicy::default();

        for name in ["notes.txt", "song.ogg", "noext"] {
            let path = temp_audio(&dir, name, 16);
            assert!(matches!(
                policy.check(&path),
                Err(UploadError::UnsupportedFormat { .. })
            ));
        }
    }

    #[test]
    fn extension_is_checked_before_the_file_is_read() {
        let policy = UploadPolicy::default();
        // Nonexistent path: a bad extension still fails on the extension.
        assert!(matches!(
            policy.check(Path::new("/no/such/file.ogg")),
            Err(UploadError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            policy.check(Path::new("/no/such/file.mp3")),
            Err(UploadError::Unreadable(_))
        ));
    }

    #[test]
    fn rejects_files_over_the_size_cap() {
        let dir = tempfile::tempdir().unwrap();
        let policy = UploadPolicy::new(["wav".to_string()], 1024);

        let small = temp_audio(&dir, "ok.wav", 1024);
        assert!(policy.check(&small).is_ok());

        let big = temp_audio(&dir, "big.wav", 1025);
        assert!(matches!(
            policy.check(&big),
            Err(UploadError::TooLarge { .. })
        ));
    }

    #[test]
    fn default_cap_is_50_mib() {
        assert_eq!(UploadPolicy::default().max_size(), 50 * 1024 * 1024);
    }

    #[test]
    fn custom_allow_list_normalizes_dots_and_case() {
        let policy = UploadPolicy::new([".OGG".to_string()], MAX_UPLOAD_BYTES);
        let dir = tempfile::tempdir().unwrap();
        let path = temp_audio(&dir, "tune.ogg", 8);
        assert!(policy.check(&path).is_ok());
        assert_eq!(policy.accepted_list(), ".ogg");
    }
}
