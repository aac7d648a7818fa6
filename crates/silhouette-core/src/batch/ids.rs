use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::consts::ARTIFACT_ID_SEPARATOR;
use crate::error::Result;

/// Numeric id prefix of a file name such as `25_Pikachu.png`.
pub fn parse_artifact_id(file_name: &str) -> Option<u32> {
    let (prefix, _) = file_name.split_once(ARTIFACT_ID_SEPARATOR)?;
    prefix.parse().ok()
}

/// Regular files directly inside `dir`, sorted by file name.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Ids of every artifact already present in `dir`.
pub fn collect_ids(dir: &Path) -> Result<BTreeSet<u32>> {
    let mut ids = BTreeSet::new();
    for path in list_files(dir)? {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match parse_artifact_id(name) {
            Some(id) => {
                ids.insert(id);
            }
            None => warn!(path = %path.display(), "Ignoring file without an id prefix"),
        }
    }
    Ok(ids)
}

/// Ids with a complete artifact pair: present in both directories.
pub fn processed_ids(hidden_dir: &Path, revealed_dir: &Path) -> Result<BTreeSet<u32>> {
    let hidden = collect_ids(hidden_dir)?;
    let revealed = collect_ids(revealed_dir)?;
    Ok(hidden.intersection(&revealed).copied().collect())
}
