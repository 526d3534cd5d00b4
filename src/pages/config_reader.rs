use log::debug;
use snafu::prelude::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::pages::*;

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct FileSource {
    /// csv or xlsx. Guessed from the extension if missing.
    pub provider: Option<String>,
    #[serde(rename = "filePath")]
    pub file_path: String,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct Effects {
    pub gallery: Option<bool>,
    pub confetti: Option<bool>,
}

#[derive(Eq, PartialEq, Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyConfig {
    /// The bundled files, tried in order.
    #[serde(rename = "dataSources")]
    pub data_sources: Option<Vec<FileSource>>,
    #[serde(rename = "uploadPath")]
    pub upload_path: Option<String>,
    #[serde(rename = "topK")]
    pub top_k: Option<usize>,
    #[serde(rename = "excelWorksheetName")]
    pub excel_worksheet_name: Option<String>,
    #[serde(rename = "outputFormat")]
    pub output_format: Option<String>,
    #[serde(rename = "defaultTopic")]
    pub default_topic: Option<String>,
    #[serde(rename = "defaultDifficulty")]
    pub default_difficulty: Option<String>,
    pub effects: Option<Effects>,
    #[serde(rename = "gallerySeed")]
    pub gallery_seed: Option<u32>,
}

/// Reads the configuration file.
///
/// Returns the configuration and the directory against which relative paths are resolved.
pub fn read_config(path: &str) -> AppResult<(StudyConfig, PathBuf)> {
    let contents = fs::read_to_string(path).context(OpeningJsonSnafu { path })?;
    let config: StudyConfig = serde_json::from_str(&contents).context(ParsingJsonSnafu {})?;
    debug!("read_config: {:?}", config);

    for (idx, source) in config.data_sources.iter().flatten().enumerate() {
        if source.file_path.trim().is_empty() {
            whatever!("dataSources[{}]: the file path is empty", idx);
        }
    }
    if config.top_k == Some(0) {
        whatever!("topK must be at least 1");
    }

    let root = Path::new(path)
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_default();
    Ok((config, root))
}
