// Where the data of the ranking page comes from.

use log::{debug, info};
use snafu::prelude::*;

use std::path::{Path, PathBuf};

use mbti_study::Table;

use crate::args::RankArgs;
use crate::pages::*;
use crate::pages::{io_csv, io_xlsx};

/// The bundled data file, when no configuration says otherwise.
pub const DEFAULT_BUNDLED_PATH: &str = "data/countries_mbti.csv";

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Provider {
    Csv,
    Xlsx,
}

impl Provider {
    pub fn from_name(name: &str) -> AppResult<Provider> {
        match name.trim().to_lowercase().as_str() {
            "csv" => Ok(Provider::Csv),
            "xlsx" | "excel" => Ok(Provider::Xlsx),
            _ => UnknownProviderSnafu { provider: name }.fail(),
        }
    }

    pub fn guess(path: &Path) -> Provider {
        match path.extension().and_then(|e| e.to_str()) {
            Some(e) if e.eq_ignore_ascii_case("xlsx") => Provider::Xlsx,
            _ => Provider::Csv,
        }
    }
}

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Origin {
    /// Shipped with the program. Only used if the file exists.
    Bundled,
    /// Provided by the user.
    Upload,
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResolvedSource {
    pub origin: Origin,
    pub path: PathBuf,
    pub provider: Provider,
    pub worksheet: Option<String>,
}

impl ResolvedSource {
    pub fn is_available(&self) -> bool {
        match self.origin {
            Origin::Bundled => self.path.is_file(),
            Origin::Upload => true,
        }
    }

    pub fn read_table(&self) -> BAppResult<Table> {
        info!("Attempting to read data file {:?}", self.path);
        match self.provider {
            Provider::Csv => io_csv::read_csv_table(&self.path),
            Provider::Xlsx => io_xlsx::read_xlsx_table(&self.path, self.worksheet.as_deref()),
        }
    }
}

fn resolve(
    origin: Origin,
    root: &Path,
    file_path: &str,
    provider: Option<&str>,
    worksheet: Option<&str>,
) -> AppResult<ResolvedSource> {
    let path = root.join(file_path);
    let provider = match provider {
        Some(name) => Provider::from_name(name)?,
        None => Provider::guess(&path),
    };
    Ok(ResolvedSource {
        origin,
        path,
        provider,
        worksheet: worksheet.map(|s| s.to_string()),
    })
}

/// All the data sources, in priority order: the bundled files first, then the upload.
///
/// Command line options replace the corresponding entries of the configuration.
pub fn source_candidates(
    args: &RankArgs,
    config: &StudyConfig,
    root: &Path,
) -> AppResult<Vec<ResolvedSource>> {
    let input_type = args.input_type.as_deref();
    let worksheet = args
        .excel_worksheet_name
        .as_deref()
        .or(config.excel_worksheet_name.as_deref());

    let mut res: Vec<ResolvedSource> = Vec::new();
    match (&args.data, &config.data_sources) {
        // Paths from the command line are relative to the working directory.
        (Some(p), _) => res.push(resolve(
            Origin::Bundled,
            Path::new(""),
            p,
            input_type,
            worksheet,
        )?),
        (None, Some(sources)) => {
            for source in sources.iter() {
                res.push(resolve(
                    Origin::Bundled,
                    root,
                    &source.file_path,
                    input_type.or(source.provider.as_deref()),
                    source.excel_worksheet_name.as_deref().or(worksheet),
                )?);
            }
        }
        (None, None) => res.push(resolve(
            Origin::Bundled,
            Path::new(""),
            DEFAULT_BUNDLED_PATH,
            input_type,
            worksheet,
        )?),
    }

    match (&args.upload, &config.upload_path) {
        (Some(p), _) => res.push(resolve(
            Origin::Upload,
            Path::new(""),
            p,
            input_type,
            worksheet,
        )?),
        (None, Some(p)) => res.push(resolve(Origin::Upload, root, p, input_type, worksheet)?),
        (None, None) => {}
    }
    debug!("source_candidates: {:?}", res);
    Ok(res)
}

/// The first available source wins.
pub fn first_available(candidates: &[ResolvedSource]) -> AppResult<&ResolvedSource> {
    candidates
        .iter()
        .find(|c| c.is_available())
        .context(MissingDataSnafu {
            looked_at: candidates
                .iter()
                .map(|c| format!("{}", c.path.display()))
                .collect::<Vec<String>>()
                .join(", "),
        })
}
