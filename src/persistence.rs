// File: src/persistence.rs
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::core::types::Vocabulary;
use crate::error::NumWordsError;

/// A vocabulary bundled with its registry identity: the unit that travels in
/// pack files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguagePack {
    pub code: String,
    pub name: String,
    pub vocabulary: Vocabulary,
}

/// Writes a compiled pack. The write goes through a temp file in the target
/// directory and an atomic rename, so a crash never leaves a half-written
/// pack behind.
pub fn save_pack(pack: &LanguagePack, path: &Path) -> Result<(), NumWordsError> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, pack)?;
    temp_file.persist(path).map_err(|e| NumWordsError::Io(e.error))?;
    Ok(())
}

pub fn load_pack(path: &Path) -> Result<LanguagePack, NumWordsError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(bincode::deserialize_from(reader)?)
}

/// Human-authored packs are plain JSON; omitted `alphabet`, `decimal_point`
/// and `separator` fields take their defaults.
pub fn load_json_pack(path: &Path) -> Result<LanguagePack, NumWordsError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
