use std::path::Path;

/// The name of the file, without the directories.
pub fn simplify_file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Header names as they appear in the first row, without a byte order mark.
pub fn clean_headers<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    headers
        .into_iter()
        .map(|h| h.as_ref().trim_start_matches('\u{feff}').to_string())
        .collect()
}
