//! HTML rendering for the home and surah pages
//!
//! Pages are small enough that they are assembled with `format!` rather
//! than a template engine.

use crate::view::SurahView;
use std::fmt::Write;

/// Minimal HTML escaping for text interpolated into pages.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html lang="id">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
.error {{ color: #b00020; }}
.ayah {{ direction: rtl; text-align: right; font-size: 1.6rem; line-height: 2.6rem; margin: 0.5rem 0; }}
.ayah .no {{ color: #666; }}
nav a {{ margin-left: 1rem; }}
</style>
</head>
<body>
{body}</body>
</html>
"#
    )
}

fn lookup_form() -> &'static str {
    r#"<form method="post" action="/go">
<label for="surah_id">Nomor surah (1-114):</label>
<input type="text" id="surah_id" name="surah_id" inputmode="numeric">
<button type="submit">Buka</button>
</form>
"#
}

/// Home page: the lookup form, optionally with an inline error message.
pub fn home_page(error: Option<&str>) -> String {
    let mut body = String::from("<h1>Mushaf</h1>\n");
    body.push_str(lookup_form());
    if let Some(msg) = error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(msg));
    }
    page("Mushaf", &body)
}

/// Surah page: the form, the ayah list, and prev/next/export navigation.
pub fn surah_page(view: &SurahView) -> String {
    let name = escape_html(&view.name);
    let mut body = String::from("<h1>Mushaf</h1>\n");
    body.push_str(lookup_form());
    let _ = writeln!(
        body,
        "<h2>Surah {} (#{}) &mdash; {} ayat</h2>",
        name, view.surah_id, view.count
    );
    for ayah in &view.ayahs {
        let _ = writeln!(
            body,
            "<p class=\"ayah\">{} <span class=\"no\">\u{06DD}{}</span></p>",
            escape_html(&ayah.text),
            ayah.no_ar
        );
    }
    body.push_str("<nav>\n");
    if let Some(prev) = view.prev_id {
        let _ = writeln!(body, "<a href=\"/surah/{prev}\">&larr; Surah {prev}</a>");
    }
    if let Some(next) = view.next_id {
        let _ = writeln!(body, "<a href=\"/surah/{next}\">Surah {next} &rarr;</a>");
    }
    let _ = writeln!(
        body,
        "<a href=\"/export/{}.txt\">Unduh .txt</a>",
        view.surah_id
    );
    body.push_str("</nav>\n");
    page(&format!("Surah {name}"), &body)
}
