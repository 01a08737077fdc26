use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::SeedError;

/// Contents of one fixture file.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub table_name: String,
    #[serde(default)]
    pub data: Vec<Value>,
}

/// Loads JSON fixture files from a single folder.
#[derive(Debug, Clone)]
pub struct DataLoader {
    data_folder: PathBuf,
}

impl DataLoader {
    pub fn new(data_folder: impl Into<PathBuf>) -> Result<Self, SeedError> {
        let data_folder = data_folder.into();
        if !data_folder.is_dir() {
            return Err(SeedError::DataFolderMissing(data_folder));
        }
        Ok(Self { data_folder })
    }

    pub fn data_folder(&self) -> &Path {
        &self.data_folder
    }

    pub fn load_json_file(&self, file_path: &Path) -> Result<SeedFile, SeedError> {
        let file = display_name(file_path);
        let raw = fs::read_to_string(file_path).map_err(|source| SeedError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;
        let data = serde_json::from_str(&raw).map_err(|source| SeedError::Json { file, source })?;
        tracing::info!("Loaded data from {}", display_name(file_path));
        Ok(data)
    }

    /// Loads every `<pattern>.json` in the folder; `*` matches any file stem.
    /// Unreadable or malformed files are logged and skipped.
    pub fn load_data(&self, file_patterns: &[String]) -> Result<Vec<SeedFile>, SeedError> {
        let mut all_data = Vec::new();

        for pattern in file_patterns {
            let json_files = self.matching_files(pattern)?;

            if json_files.is_empty() {
                tracing::warn!("No files found matching pattern: {}.json", pattern);
                continue;
            }

            for json_file in json_files {
                match self.load_json_file(&json_file) {
                    Ok(data) => all_data.push(data),
                    Err(e) => tracing::error!("Error loading {}: {}", display_name(&json_file), e),
                }
            }
        }

        Ok(all_data)
    }

    fn matching_files(&self, pattern: &str) -> Result<Vec<PathBuf>, SeedError> {
        let entries = fs::read_dir(&self.data_folder).map_err(|source| SeedError::Io {
            path: self.data_folder.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|source| SeedError::Io {
                    path: self.data_folder.clone(),
                    source,
                })?
                .path();

            if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let matches = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => pattern == "*" || stem == pattern,
                None => false,
            };
            if matches {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
