//! Placeholder handling inside WordprocessingML parts.
//!
//! Word freely splits the text of a paragraph into several runs, so a
//! placeholder typed as `{{ name }}` can end up as
//! `{{ na</w:t></w:r><w:r><w:t>me }}` in the XML. Before rendering, the
//! markup inside every placeholder is dropped so the expression becomes
//! contiguous again. The tags removed always come in close/open pairs,
//! which keeps the surrounding XML well formed.

use std::collections::BTreeSet;

use regex_lite::{Captures, Regex};

use crate::error::Result;

const SPLIT_OPEN: &str = r"\{(?:<[^>]*>)+\{";
const SPLIT_CLOSE: &str = r"\}(?:<[^>]*>)+\}";
const PLACEHOLDER: &str = r"(?s)\{\{(.*?)\}\}";
const TAG: &str = r"<[^>]*>";

/// Rewrites split placeholders and lists the fields a part refers to.
pub(crate) struct PlaceholderScanner {
    split_open: Regex,
    split_close: Regex,
    placeholder: Regex,
    tag: Regex,
}

impl PlaceholderScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            split_open: Regex::new(SPLIT_OPEN)?,
            split_close: Regex::new(SPLIT_CLOSE)?,
            placeholder: Regex::new(PLACEHOLDER)?,
            tag: Regex::new(TAG)?,
        })
    }

    /// Make every placeholder in `xml` contiguous text.
    pub fn normalize(&self, xml: &str) -> String {
        let joined = self.split_open.replace_all(xml, "{{");
        let joined = self.split_close.replace_all(&joined, "}}");

        self.placeholder
            .replace_all(&joined, |caps: &Captures<'_>| {
                let inner = caps.get(1).map_or("", |m| m.as_str());
                format!("{{{{{}}}}}", self.tag.replace_all(inner, ""))
            })
            .into_owned()
    }

    /// Field names referenced by the placeholders of a normalized part.
    pub fn fields(&self, normalized: &str) -> BTreeSet<String> {
        self.placeholder
            .captures_iter(normalized)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contiguous_placeholder_is_untouched() {
        let scanner = PlaceholderScanner::new().unwrap();
        let xml = "<w:p><w:r><w:t>Dear {{ name }},</w:t></w:r></w:p>";
        assert_eq!(scanner.normalize(xml), xml);
    }

    #[test]
    fn test_placeholder_split_across_runs() {
        let scanner = PlaceholderScanner::new().unwrap();
        let xml = "<w:r><w:t>{{ na</w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>me }}</w:t></w:r>";
        assert_eq!(
            scanner.normalize(xml),
            "<w:r><w:t>{{ name }}</w:t></w:r>"
        );
    }

    #[test]
    fn test_split_braces_are_joined() {
        let scanner = PlaceholderScanner::new().unwrap();
        let xml = "<w:t>{</w:t></w:r><w:r><w:t>{email}</w:t></w:r><w:r><w:t>}</w:t>";
        assert_eq!(scanner.normalize(xml), "<w:t>{{email}}</w:t>");
    }

    #[test]
    fn test_fields_are_collected() {
        let scanner = PlaceholderScanner::new().unwrap();
        let xml = scanner.normalize(
            "<w:t>{{ name }} / {{email}} / {{ name }} / {{ pass</w:t><w:t>port }}</w:t>",
        );

        let fields: Vec<_> = scanner.fields(&xml).into_iter().collect();
        assert_eq!(fields, vec!["email", "name", "passport"]);
    }
}
