//! Request-scoped view models for rendered surah pages

use crate::dataset::{Surah, SURAH_COUNT};
use crate::numerals::to_arabic_number;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct AyahView {
    pub no: Option<u32>,
    /// Arabic-Indic rendering of `no`; empty when the number is absent.
    pub no_ar: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurahView {
    pub surah_id: u32,
    pub name: String,
    pub count: usize,
    pub ayahs: Vec<AyahView>,
    pub prev_id: Option<u32>,
    pub next_id: Option<u32>,
}

impl SurahView {
    pub fn build(surah: &Surah) -> SurahView {
        let id = surah.surah_id;
        let ayahs: Vec<AyahView> = surah
            .ayahs
            .iter()
            .map(|a| AyahView {
                no: a.ayah_no,
                no_ar: a.ayah_no.map(to_arabic_number).unwrap_or_default(),
                text: a.text.clone(),
            })
            .collect();

        SurahView {
            surah_id: id,
            name: display_name(surah),
            count: ayahs.len(),
            ayahs,
            prev_id: (id > 1).then(|| id - 1),
            next_id: (id < SURAH_COUNT).then(|| id + 1),
        }
    }
}

/// Surah name for display, falling back to the id when the record
/// carries no usable name.
pub fn display_name(surah: &Surah) -> String {
    if surah.name.is_empty() {
        surah.surah_id.to_string()
    } else {
        surah.name.clone()
    }
}
