//! Application state: the dataset loaded once at startup

use crate::dataset::{Quran, Surah, DATASET_FILENAME};
use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Shared read-only state. The dataset is loaded once, the id lookup map
/// is built alongside it, and nothing mutates afterwards, so handlers
/// share this behind a plain `Arc`.
#[derive(Debug)]
pub struct AppState {
    quran: Quran,
    by_id: HashMap<u32, usize>,
}

impl AppState {
    /// Load the dataset from `path` and build the id index. Fails fast
    /// when the file is missing or unparseable.
    pub fn new(path: &Path) -> Result<Self> {
        let quran = Quran::load(path)?;
        Ok(Self::from_quran(quran))
    }

    /// Build state from an already-parsed dataset. Duplicate surah ids
    /// keep the first occurrence, matching a front-to-back scan.
    pub fn from_quran(quran: Quran) -> Self {
        let mut by_id = HashMap::with_capacity(quran.surahs.len());
        for (idx, surah) in quran.surahs.iter().enumerate() {
            by_id.entry(surah.surah_id).or_insert(idx);
        }
        Self { quran, by_id }
    }

    pub fn surah(&self, id: u32) -> Option<&Surah> {
        self.by_id.get(&id).map(|&idx| &self.quran.surahs[idx])
    }

    pub fn surah_count(&self) -> usize {
        self.quran.surahs.len()
    }
}

/// Resolve the dataset path.
///
/// - `MUSHAF_DATASET` env var, when set
/// - the dataset file next to the executable
/// - the dataset file in the current working directory
pub fn dataset_path() -> PathBuf {
    if let Ok(path) = std::env::var("MUSHAF_DATASET") {
        return PathBuf::from(path);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let candidate = exe_dir.join(DATASET_FILENAME);
            if candidate.exists() {
                return candidate;
            }
        }
    }

    PathBuf::from(DATASET_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Ayah;

    fn quran() -> Quran {
        Quran {
            surahs: vec![
                Surah {
                    surah_id: 1,
                    name: "Al-Fatihah".to_string(),
                    ayahs: vec![Ayah {
                        ayah_no: Some(1),
                        text: "بِسْمِ اللَّهِ".to_string(),
                    }],
                },
                Surah {
                    surah_id: 2,
                    name: "Al-Baqarah".to_string(),
                    ayahs: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_lookup_finds_each_id_once() {
        let state = AppState::from_quran(quran());
        assert_eq!(state.surah(1).unwrap().name, "Al-Fatihah");
        assert_eq!(state.surah(2).unwrap().name, "Al-Baqarah");
        assert_eq!(state.surah_count(), 2);
    }

    #[test]
    fn test_lookup_absent_id_is_none() {
        let state = AppState::from_quran(quran());
        assert!(state.surah(3).is_none());
        assert!(state.surah(114).is_none());
    }

    #[test]
    fn test_duplicate_ids_keep_first() {
        let mut q = quran();
        q.surahs.push(Surah {
            surah_id: 1,
            name: "Duplicate".to_string(),
            ayahs: vec![],
        });
        let state = AppState::from_quran(q);
        assert_eq!(state.surah(1).unwrap().name, "Al-Fatihah");
    }
}
