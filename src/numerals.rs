//! Arabic-Indic numeral transliteration

const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Replace each decimal digit of `n` with its Arabic-Indic equivalent,
/// preserving digit order.
pub fn to_arabic_number(n: u32) -> String {
    n.to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| ARABIC_INDIC_DIGITS[d as usize])
        .collect()
}
