//! Presentation text helpers.
//!
//! String-level helpers shared by the API layer and the view-rendering
//! frontend contract: page titles, flash styling classes, tag stripping,
//! excerpting and highlighting for search results, slug/anchor generation,
//! and public file URL mapping.

use std::path::Path;
use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Characters of context kept on each side of an excerpt match.
pub const EXCERPT_RADIUS: usize = 50;

/// Omission marker inserted where excerpted text was elided.
const OMISSION: &str = "...";

/// Compiled regex matching HTML tags. Compiled once, reused forever.
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid regex"));

// ---------------------------------------------------------------------------
// Titles and flash styling
// ---------------------------------------------------------------------------

/// Compose the document title from a page title and the site name.
///
/// An empty page title yields the bare site name.
pub fn page_title(page_title: &str, site_name: &str) -> String {
    if page_title.is_empty() {
        site_name.to_string()
    } else {
        format!("{page_title} | {site_name}")
    }
}

/// Map a flash message kind to its alert CSS class.
///
/// Unknown kinds pass through unchanged so ad-hoc flash categories can
/// carry their own class name.
pub fn flash_class_for(kind: &str) -> &str {
    match kind {
        "success" | "notice" => "alert-success",
        "danger" | "alert" => "alert-danger",
        "warning" => "alert-warning",
        "info" => "alert-info",
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Tag stripping and transliteration
// ---------------------------------------------------------------------------

/// Remove HTML tags, leaving only text content.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Best-effort ASCII fold of common accented Latin characters.
///
/// Characters without a mapping pass through unchanged, so the output is
/// not guaranteed to be pure ASCII for arbitrary input.
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            'á' | 'à' | 'â' | 'ä' | 'ã' | 'å' | 'ā' => out.push('a'),
            'Á' | 'À' | 'Â' | 'Ä' | 'Ã' | 'Å' | 'Ā' => out.push('A'),
            'é' | 'è' | 'ê' | 'ë' | 'ē' | 'ě' => out.push('e'),
            'É' | 'È' | 'Ê' | 'Ë' | 'Ē' | 'Ě' => out.push('E'),
            'í' | 'ì' | 'î' | 'ï' | 'ī' => out.push('i'),
            'Í' | 'Ì' | 'Î' | 'Ï' | 'Ī' => out.push('I'),
            'ó' | 'ò' | 'ô' | 'ö' | 'õ' | 'ō' | 'ø' => out.push('o'),
            'Ó' | 'Ò' | 'Ô' | 'Ö' | 'Õ' | 'Ō' | 'Ø' => out.push('O'),
            'ú' | 'ù' | 'û' | 'ü' | 'ū' | 'ů' => out.push('u'),
            'Ú' | 'Ù' | 'Û' | 'Ü' | 'Ū' | 'Ů' => out.push('U'),
            'ç' | 'č' | 'ć' => out.push('c'),
            'Ç' | 'Č' | 'Ć' => out.push('C'),
            'ñ' | 'ń' => out.push('n'),
            'Ñ' | 'Ń' => out.push('N'),
            'š' | 'ś' => out.push('s'),
            'Š' | 'Ś' => out.push('S'),
            'ž' | 'ź' | 'ż' => out.push('z'),
            'Ž' | 'Ź' | 'Ż' => out.push('Z'),
            'ý' | 'ÿ' => out.push('y'),
            'Ý' => out.push('Y'),
            'ł' => out.push('l'),
            'Ł' => out.push('L'),
            'đ' => out.push('d'),
            'Đ' => out.push('D'),
            'ř' => out.push('r'),
            'Ř' => out.push('R'),
            'ť' => out.push('t'),
            'Ť' => out.push('T'),
            'ğ' => out.push('g'),
            'Ğ' => out.push('G'),
            'ß' => out.push_str("ss"),
            'æ' => out.push_str("ae"),
            'Æ' => out.push_str("Ae"),
            'œ' => out.push_str("oe"),
            'Œ' => out.push_str("Oe"),
            other => out.push(other),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Excerpting and highlighting
// ---------------------------------------------------------------------------

/// Build a case-insensitive literal-match regex over the given phrases.
///
/// Empty phrases are dropped. Returns `None` when no usable phrase remains.
fn phrase_regex(phrases: &[&str]) -> Option<Regex> {
    let escaped: Vec<String> = phrases
        .iter()
        .filter(|p| !p.is_empty())
        .map(|p| regex::escape(p))
        .collect();

    if escaped.is_empty() {
        return None;
    }

    Some(
        RegexBuilder::new(&escaped.join("|"))
            .case_insensitive(true)
            .build()
            .expect("escaped phrases form a valid pattern"),
    )
}

/// Excerpt a window of `radius` characters around the first
/// case-insensitive occurrence of `phrase`.
///
/// Elided text is replaced with `...` on the affected side. Returns `None`
/// when the phrase is empty or does not occur.
pub fn excerpt(text: &str, phrase: &str, radius: usize) -> Option<String> {
    let re = phrase_regex(&[phrase])?;
    let found = re.find(text)?;

    // Walk back `radius` characters from the match start, staying on
    // char boundaries.
    let mut start = found.start();
    for (taken, (idx, _)) in text[..found.start()].char_indices().rev().enumerate() {
        if taken == radius {
            break;
        }
        start = idx;
    }

    // Walk forward `radius` characters past the match end.
    let mut end = text.len();
    for (taken, (idx, _)) in text[found.end()..].char_indices().enumerate() {
        if taken == radius {
            end = found.end() + idx;
            break;
        }
    }

    let mut result = String::new();
    if start > 0 {
        result.push_str(OMISSION);
    }
    result.push_str(&text[start..end]);
    if end < text.len() {
        result.push_str(OMISSION);
    }
    Some(result)
}

/// Truncate to at most `length` characters, ellipsis included.
pub fn truncate(text: &str, length: usize) -> String {
    if text.chars().count() <= length {
        return text.to_string();
    }
    let kept: String = text.chars().take(length.saturating_sub(OMISSION.len())).collect();
    format!("{kept}{OMISSION}")
}

/// Wrap each case-insensitive occurrence of any phrase in `<strong>` tags.
///
/// Phrases are matched literally (regex metacharacters are escaped) and as
/// a single alternation so overlapping phrases never double-wrap.
pub fn highlight(text: &str, phrases: &[&str]) -> String {
    match phrase_regex(phrases) {
        Some(re) => re.replace_all(text, "<strong>$0</strong>").into_owned(),
        None => text.to_string(),
    }
}

/// Plain-text excerpt of an HTML fragment around `phrase`, highlighted.
///
/// Tags are stripped and the text transliterated before matching so the
/// phrase matches regardless of markup or accents. When the phrase does
/// not occur, the lead of the text is used instead.
pub fn excerpt_or_lead(html: &str, phrase: &str) -> String {
    let text = transliterate(&strip_tags(html));
    let excerpted = excerpt(&text, phrase, EXCERPT_RADIUS)
        .unwrap_or_else(|| truncate(&text, EXCERPT_RADIUS));
    highlight(&excerpted, &[phrase])
}

// ---------------------------------------------------------------------------
// Slugs and anchors
// ---------------------------------------------------------------------------

/// Normalize text into a lowercase, hyphen-separated ASCII slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::new();
    let mut pending_dash = false;
    for ch in transliterate(text).chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }
    slug
}

/// Render a heading span with a stable fragment id and a self-link.
pub fn anchored_heading(pretty_text: &str) -> String {
    let id = slugify(pretty_text);
    format!(
        "<span id='{id}' class='anchorable'>{pretty_text} \
         <a href='#{id}'><span class='glyphicon glyphicon-link'></span></a></span>"
    )
}

// ---------------------------------------------------------------------------
// Files and timestamps
// ---------------------------------------------------------------------------

/// Map an absolute file path under the public document root to a
/// site-relative URL.
pub fn public_file_url(path: &Path, public_root: &Path) -> Result<String, CoreError> {
    let relative = path.strip_prefix(public_root).map_err(|_| {
        CoreError::Validation(format!(
            "{} is not under the public root",
            path.display()
        ))
    })?;
    Ok(format!("/{}", relative.display()))
}

/// Format a timestamp for inline display, e.g. `March  5, 2016  2:30pm UTC`.
pub fn format_local_time(ts: &Timestamp) -> String {
    ts.format("%B %e, %Y %l:%M%P %Z").to_string()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_page_title_with_page() {
        assert_eq!(page_title("Competitions", "podium"), "Competitions | podium");
    }

    #[test]
    fn test_page_title_empty_page_falls_back_to_site() {
        assert_eq!(page_title("", "podium"), "podium");
    }

    #[test]
    fn test_flash_class_known_kinds() {
        assert_eq!(flash_class_for("success"), "alert-success");
        assert_eq!(flash_class_for("notice"), "alert-success");
        assert_eq!(flash_class_for("danger"), "alert-danger");
        assert_eq!(flash_class_for("alert"), "alert-danger");
        assert_eq!(flash_class_for("warning"), "alert-warning");
        assert_eq!(flash_class_for("info"), "alert-info");
    }

    #[test]
    fn test_flash_class_unknown_kind_passes_through() {
        assert_eq!(flash_class_for("plain-banner"), "plain-banner");
    }

    #[test]
    fn test_strip_tags() {
        assert_eq!(strip_tags("<p>Hello <b>world</b></p>"), "Hello world");
    }

    #[test]
    fn test_strip_tags_leaves_plain_text() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }

    #[test]
    fn test_transliterate_folds_accents() {
        assert_eq!(transliterate("Kévin Føø Straße"), "Kevin Foo Strasse");
    }

    #[test]
    fn test_transliterate_passes_unmapped_through() {
        assert_eq!(transliterate("東京 2025"), "東京 2025");
    }

    #[test]
    fn test_excerpt_windows_around_match() {
        let text = "aaaaaaaaaa needle bbbbbbbbbb";
        assert_eq!(
            excerpt(text, "needle", 4),
            Some("...aaa needle bbb...".to_string())
        );
    }

    #[test]
    fn test_excerpt_no_leading_omission_at_start() {
        assert_eq!(excerpt("needle tail", "needle", 20), Some("needle tail".to_string()));
    }

    #[test]
    fn test_excerpt_case_insensitive() {
        assert!(excerpt("The Needle is here", "needle", 3).is_some());
    }

    #[test]
    fn test_excerpt_missing_phrase_is_none() {
        assert_eq!(excerpt("nothing to see", "needle", 10), None);
    }

    #[test]
    fn test_excerpt_empty_phrase_is_none() {
        assert_eq!(excerpt("nothing to see", "", 10), None);
    }

    #[test]
    fn test_excerpt_respects_multibyte_boundaries() {
        let text = "ééééé needle ööööö";
        let result = excerpt(text, "needle", 2).expect("phrase occurs");
        assert!(result.contains("needle"));
        assert!(result.starts_with(OMISSION) && result.ends_with(OMISSION));
    }

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate("short", 50), "short");
    }

    #[test]
    fn test_truncate_long_text_keeps_budget() {
        let result = truncate("abcdefghij", 8);
        assert_eq!(result, "abcde...");
        assert_eq!(result.chars().count(), 8);
    }

    #[test]
    fn test_highlight_wraps_matches() {
        assert_eq!(
            highlight("a needle in a haystack", &["needle"]),
            "a <strong>needle</strong> in a haystack"
        );
    }

    #[test]
    fn test_highlight_preserves_original_case() {
        assert_eq!(highlight("Needle time", &["needle"]), "<strong>Needle</strong> time");
    }

    #[test]
    fn test_highlight_without_phrases_is_identity() {
        assert_eq!(highlight("untouched", &[]), "untouched");
        assert_eq!(highlight("untouched", &[""]), "untouched");
    }

    #[test]
    fn test_highlight_escapes_metacharacters() {
        assert_eq!(highlight("costs 3.50", &["3.50"]), "costs <strong>3.50</strong>");
        assert_eq!(highlight("costs 3x50", &["3.50"]), "costs 3x50");
    }

    #[test]
    fn test_excerpt_or_lead_strips_and_highlights() {
        let html = "<p>The quick brown fox</p>";
        assert_eq!(
            excerpt_or_lead(html, "quick"),
            "The <strong>quick</strong> brown fox"
        );
    }

    #[test]
    fn test_excerpt_or_lead_falls_back_to_lead() {
        let html = format!("<p>{}</p>", "x".repeat(200));
        let result = excerpt_or_lead(&html, "absent");
        assert_eq!(result.chars().count(), EXCERPT_RADIUS);
        assert!(result.ends_with(OMISSION));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Kévin's Notes"), "kevin-s-notes");
        assert_eq!(slugify("  spaced  out  "), "spaced-out");
    }

    #[test]
    fn test_anchored_heading_links_to_own_id() {
        let html = anchored_heading("Prize Money");
        assert!(html.contains("id='prize-money'"));
        assert!(html.contains("href='#prize-money'"));
        assert!(html.contains("Prize Money"));
    }

    #[test]
    fn test_public_file_url_inside_root() {
        let url = public_file_url(
            Path::new("/srv/podium/public/img/logo.png"),
            Path::new("/srv/podium/public"),
        )
        .expect("path is under the root");
        assert_eq!(url, "/img/logo.png");
    }

    #[test]
    fn test_public_file_url_outside_root_fails() {
        let result = public_file_url(Path::new("/etc/passwd"), Path::new("/srv/podium/public"));
        assert!(result.is_err());
    }

    #[test]
    fn test_format_local_time() {
        let ts = chrono::Utc.with_ymd_and_hms(2016, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(format_local_time(&ts), "March  5, 2016  2:30pm UTC");
    }
}
