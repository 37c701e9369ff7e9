//! Quran dataset types and file loading

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of surahs in the Quran; ids outside 1..=114 are rejected
/// before any dataset access.
pub const SURAH_COUNT: u32 = 114;

/// Default dataset filename, expected next to the application.
pub const DATASET_FILENAME: &str = "quran-uthmani-hafs.clean.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ayah {
    /// Ordinal within the surah. Optional in the wire format; an absent
    /// number renders as an empty Arabic-Indic string.
    pub ayah_no: Option<u32>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Surah {
    pub surah_id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ayahs: Vec<Ayah>,
}

/// Root of the dataset document. Loaded once at startup, immutable for
/// the process lifetime. Ayah order is recitation order and is preserved
/// exactly as it appears in the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quran {
    #[serde(default)]
    pub surahs: Vec<Surah>,
}

impl Quran {
    /// Read and parse the dataset file. A missing file is a startup-class
    /// error naming the expected path.
    pub fn load(path: &Path) -> Result<Quran> {
        if !path.exists() {
            bail!(
                "Dataset tidak ditemukan: {}. Pastikan {} satu folder dengan aplikasi",
                path.display(),
                DATASET_FILENAME
            );
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset at {}", path.display()))?;
        let quran: Quran = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse dataset at {}", path.display()))?;
        tracing::debug!("Loaded {} surahs from {}", quran.surahs.len(), path.display());
        Ok(quran)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_parses_surahs_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILENAME);
        let mut f = fs::File::create(&path).unwrap();
        write!(
            f,
            r#"{{"surahs": [
                {{"surah_id": 1, "name": "Al-Fatihah", "ayahs": [
                    {{"ayah_no": 1, "text": "بِسْمِ اللَّهِ"}},
                    {{"ayah_no": 2, "text": "الْحَمْدُ لِلَّهِ"}}
                ]}},
                {{"surah_id": 2, "name": "Al-Baqarah", "ayahs": []}}
            ]}}"#
        )
        .unwrap();

        let quran = Quran::load(&path).unwrap();
        assert_eq!(quran.surahs.len(), 2);
        assert_eq!(quran.surahs[0].surah_id, 1);
        assert_eq!(quran.surahs[0].ayahs[1].ayah_no, Some(2));
        assert_eq!(quran.surahs[1].name, "Al-Baqarah");
    }

    #[test]
    fn test_load_missing_file_names_expected_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DATASET_FILENAME);
        let err = Quran::load(&path).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Dataset tidak ditemukan"));
        assert!(msg.contains(DATASET_FILENAME));
    }

    #[test]
    fn test_ayah_without_number_deserializes() {
        let surah: Surah =
            serde_json::from_str(r#"{"surah_id": 9, "name": "At-Tawbah", "ayahs": [{"text": "x"}]}"#)
                .unwrap();
        assert_eq!(surah.ayahs[0].ayah_no, None);
    }
}
