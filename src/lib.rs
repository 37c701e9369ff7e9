//! Mushaf Web - Quran surah viewer
//!
//! Serves surah text from a static JSON dataset as HTML pages and
//! plain-text exports.

pub mod dataset;
pub mod error;
pub mod export;
pub mod numerals;
pub mod render;
pub mod routes;
pub mod state;
pub mod view;

pub use dataset::{Ayah, Quran, Surah, DATASET_FILENAME, SURAH_COUNT};
pub use error::MushafError;
pub use export::{export_filename, surah_text};
pub use numerals::to_arabic_number;
pub use state::{dataset_path, AppState};
pub use view::{AyahView, SurahView};
