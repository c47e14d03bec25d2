//! Terminal presentation of gists.

use crate::types::Gist;
use std::fmt::Write;

/// Renders one gist for terminal display.
///
/// Layout: identifier, URL, last-updated timestamp, the description when
/// non-empty, then the filenames, followed by a blank line. Pure formatting;
/// the caller decides where the string goes.
pub fn render_gist(gist: &Gist) -> String {
    let mut out = String::new();

    writeln!(out, "ID:  {}", gist.id).ok();
    writeln!(out, "URL: {}", gist.html_url).ok();
    let date = gist
        .updated_at
        .map(|t| t.to_rfc3339())
        .unwrap_or_default();
    writeln!(out, "Date: {}\n", date).ok();

    if !gist.description.is_empty() {
        writeln!(out, "{}", gist.description).ok();
    }
    for filename in gist.filenames() {
        writeln!(out, "{}", filename).ok();
    }
    writeln!(out).ok();

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GistFile;
    use chrono::{TimeZone, Utc};

    fn sample_gist() -> Gist {
        let mut gist = Gist::new("my notes", true, "file1.txt", "hello");
        gist.id = "abc123".into();
        gist.html_url = "https://gist.github.com/abc123".into();
        gist.updated_at = Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        gist
    }

    #[test]
    fn test_render_with_description() {
        let rendered = render_gist(&sample_gist());

        assert!(rendered.contains("ID:  abc123"));
        assert!(rendered.contains("URL: https://gist.github.com/abc123"));
        assert!(rendered.contains("Date: 2024-05-01T12:00:00+00:00"));
        assert!(rendered.contains("my notes"));
        assert!(rendered.contains("file1.txt"));
    }

    #[test]
    fn test_render_without_description() {
        let mut gist = sample_gist();
        gist.description.clear();

        let rendered = render_gist(&gist);
        assert!(!rendered.contains("my notes"));
        assert!(rendered.contains("file1.txt"));
    }

    #[test]
    fn test_render_lists_filenames_in_order() {
        let mut gist = sample_gist();
        gist.files.insert("aaa.txt".into(), GistFile::new("a"));

        let rendered = render_gist(&gist);
        let aaa = rendered.find("aaa.txt").unwrap();
        let file1 = rendered.find("file1.txt").unwrap();
        assert!(aaa < file1);
    }
}
