//! Rendering of ranked documents into a prompt context block.

use crate::engine::ScoredDocument;

/// Render ranked documents as numbered, fenced excerpts.
///
/// Each entry is `"{rank}. {file name}"` followed by the full content in a
/// code fence tagged with `language`. Entries are separated by a blank line
/// and the result is trimmed, so an empty slice yields an empty string.
pub fn format_excerpts(results: &[ScoredDocument], language: &str) -> String {
    let mut out = String::new();

    for (index, scored) in results.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}\n",
            index + 1,
            scored.document.file_name()
        ));
        out.push_str(&format!(
            "```{language}\n{}\n```\n\n",
            scored.document.content
        ));
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assist_workspace::Document;
    use pretty_assertions::assert_eq;

    fn scored(path: &str, content: &str, distance: f32) -> ScoredDocument {
        ScoredDocument {
            document: Document::new(path, content),
            distance,
        }
    }

    #[test]
    fn test_format_excerpts() {
        let results = vec![
            scored("/app/lib/main.dart", "void main() {}", 0.1),
            scored("/app/lib/src/home.dart", "class Home {}", 0.4),
        ];

        let expected = "1. main.dart\n```dart\nvoid main() {}\n```\n\n2. home.dart\n```dart\nclass Home {}\n```";
        assert_eq!(format_excerpts(&results, "dart"), expected);
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_excerpts(&[], "dart"), "");
    }

    #[test]
    fn test_format_trims_outer_whitespace_only() {
        let results = vec![scored("/a.rs", "\n  fn a() {}  \n", 0.0)];

        assert_eq!(
            format_excerpts(&results, "rust"),
            "1. a.rs\n```rust\n\n  fn a() {}  \n\n```"
        );
    }
}
