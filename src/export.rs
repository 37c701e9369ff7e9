//! Plain-text surah export with a byte-stable format

use crate::dataset::Surah;
use crate::numerals::to_arabic_number;
use crate::view::display_name;

/// End-of-ayah marker (U+06DD) prefixed to each ayah number.
const AYAH_MARKER: char = '\u{06DD}';

/// Format a surah as a downloadable text blob: a title line, a blank
/// line, then one line per ayah, with a trailing newline. Output is
/// byte-identical for identical input.
pub fn surah_text(surah: &Surah) -> String {
    let mut out = format!(
        "Surah {} (#{}) — {} ayat\n\n",
        display_name(surah),
        surah.surah_id,
        surah.ayahs.len()
    );
    for ayah in &surah.ayahs {
        let no_ar = ayah.ayah_no.map(to_arabic_number).unwrap_or_default();
        out.push_str(&ayah.text);
        out.push(' ');
        out.push(AYAH_MARKER);
        out.push_str(&no_ar);
        out.push('\n');
    }
    out
}

/// Attachment filename, id zero-padded to three digits.
pub fn export_filename(surah_id: u32) -> String {
    format!("surah_{surah_id:03}.txt")
}
