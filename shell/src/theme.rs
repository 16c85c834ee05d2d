//! Theme-aware rewriting of external view URLs.
//!
//! Embedded viewers (Grafana in kiosk mode, mostly) pick their color scheme
//! from a `theme` query parameter. [`apply_theme`] forces that parameter to
//! the shell's current theme.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;
use url::{Url, form_urlencoded};

use crate::types::Theme;

/// Query parameter read by the embedded viewer.
pub const THEME_PARAM: &str = "theme";

/// One `theme=light|dark` query segment, nothing else.
fn regex_theme_segment() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^theme=(?:light|dark)$").expect("valid theme pattern"))
}

/// Return `view_url` with its `theme` parameter set to `theme`.
///
/// - empty input is returned unchanged (unconfigured report)
/// - parseable URLs lose every existing `theme` parameter and get exactly one
///   appended; other parameters keep their original encoding and order
/// - unparseable input falls back to a textual rewrite
///
/// Never panics and is idempotent: applying the same theme twice yields the
/// same string.
pub fn apply_theme(view_url: &str, theme: Theme) -> String {
    if view_url.is_empty() {
        return String::new();
    }

    match Url::parse(view_url) {
        Ok(mut url) => {
            let theme_segment = format!("{THEME_PARAM}={}", theme.as_str());
            let query = url
                .query()
                .unwrap_or("")
                .split('&')
                .filter(|segment| !segment.is_empty() && !is_theme_segment(segment))
                .chain(std::iter::once(theme_segment.as_str()))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
            url.to_string()
        }
        Err(err) => {
            debug!(%err, url = view_url, "view url did not parse, rewriting theme textually");
            apply_theme_textual(view_url, theme)
        }
    }
}

fn is_theme_segment(segment: &str) -> bool {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .is_some_and(|(key, _)| key == THEME_PARAM)
}

fn apply_theme_textual(view_url: &str, theme: Theme) -> String {
    let (head, fragment) = match view_url.find('#') {
        Some(pos) => view_url.split_at(pos),
        None => (view_url, ""),
    };
    let (base, query) = head.split_once('?').unwrap_or((head, ""));

    let theme_segment = format!("{THEME_PARAM}={}", theme.as_str());
    let query = query
        .split('&')
        .filter(|segment| !segment.is_empty() && !regex_theme_segment().is_match(segment))
        .chain(std::iter::once(theme_segment.as_str()))
        .collect::<Vec<_>>()
        .join("&");

    format!("{base}?{query}{fragment}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn appends_theme_to_plain_url() {
        assert_eq!(
            apply_theme("http://x/d/a?orgId=1", Theme::Dark),
            "http://x/d/a?orgId=1&theme=dark"
        );
        assert_eq!(apply_theme("http://x/d/a", Theme::Light), "http://x/d/a?theme=light");
    }

    #[test]
    fn replaces_existing_theme_anywhere() {
        assert_eq!(
            apply_theme("http://x/d/a?theme=light&orgId=1&theme=dark", Theme::Dark),
            "http://x/d/a?orgId=1&theme=dark"
        );
        assert_eq!(
            apply_theme("http://x/d/a?orgId=1&theme=blue", Theme::Light),
            "http://x/d/a?orgId=1&theme=light"
        );
    }

    #[test]
    fn keeps_other_params_verbatim() {
        let url = "http://grafana:3000/d/t/trip?from=2025-10-31T19:00:00.000Z&var-vehicle=FSD-7890&&kiosk=true";
        assert_eq!(
            apply_theme(url, Theme::Dark),
            "http://grafana:3000/d/t/trip?from=2025-10-31T19:00:00.000Z&var-vehicle=FSD-7890&kiosk=true&theme=dark"
        );
    }

    #[test]
    fn keeps_fragment() {
        assert_eq!(
            apply_theme("https://x/d/a?orgId=1#panel-2", Theme::Light),
            "https://x/d/a?orgId=1&theme=light#panel-2"
        );
    }

    #[test]
    fn empty_url_stays_empty() {
        assert_eq!(apply_theme("", Theme::Dark), "");
    }

    #[test]
    fn malformed_url_uses_textual_fallback() {
        assert_eq!(apply_theme("not a url", Theme::Dark), "not a url?theme=dark");
        assert_eq!(apply_theme("/d/a?orgId=1", Theme::Light), "/d/a?orgId=1&theme=light");
        assert_eq!(apply_theme("/d/a?theme=light", Theme::Dark), "/d/a?theme=dark");
        assert_eq!(
            apply_theme("/d/a?theme=light&orgId=1", Theme::Dark),
            "/d/a?orgId=1&theme=dark"
        );
        assert_eq!(
            apply_theme("/d/a?orgId=1&theme=dark&kiosk", Theme::Light),
            "/d/a?orgId=1&kiosk&theme=light"
        );
        assert_eq!(apply_theme("/d/a?", Theme::Light), "/d/a?theme=light");
    }

    #[test]
    fn malformed_url_drops_adjacent_theme_params() {
        assert_eq!(apply_theme("x?theme=dark&theme=light", Theme::Dark), "x?theme=dark");
        assert_eq!(apply_theme("/d/a?theme=light&theme=dark", Theme::Dark), "/d/a?theme=dark");
    }

    #[test]
    fn malformed_url_keeps_theme_before_fragment() {
        assert_eq!(apply_theme("/d/a?theme=dark#panel", Theme::Light), "/d/a?theme=light#panel");
        assert_eq!(apply_theme("/d/a#panel", Theme::Dark), "/d/a?theme=dark#panel");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            "",
            "not a url",
            "http://x/d/a?orgId=1",
            "http://x/d/a?theme=dark",
            "http://x/d/a?theme=light&theme=dark&x=1",
            "/relative?theme=dark&a=b",
            "http://[broken",
            "http://x/d/a?orgId=1#frag",
            "mailto:ops@example.com",
            "x?theme=dark&theme=light",
            "/d/a?theme=light&theme=dark",
            "/d/a?theme=dark#panel",
        ];
        for input in inputs {
            for theme in [Theme::Light, Theme::Dark] {
                let once = apply_theme(input, theme);
                assert_eq!(apply_theme(&once, theme), once, "input {input:?}");
            }
        }
    }

    #[test]
    fn theme_switch_changes_only_theme() {
        let dark = apply_theme("http://x/d/a?orgId=1", Theme::Dark);
        let light = apply_theme(&dark, Theme::Light);
        assert_eq!(light, "http://x/d/a?orgId=1&theme=light");
    }
}
