use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    LinkedIn,
    YouTube,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::LinkedIn, Platform::YouTube];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::LinkedIn => "linkedin",
            Platform::YouTube => "youtube",
        }
    }

    /// Display label used on badges and chips.
    pub fn label(self) -> &'static str {
        match self {
            Platform::LinkedIn => "LinkedIn",
            Platform::YouTube => "YouTube",
        }
    }

    /// Text of the "open original" link in the detail view.
    pub fn link_label(self) -> &'static str {
        match self {
            Platform::YouTube => "Watch Video",
            Platform::LinkedIn => "View Post",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Platform::ALL.into_iter().find(|p| p.as_str() == raw)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry as supplied by the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub platform: Platform,
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ContentRecord {
    pub fn key(&self) -> RecordKey {
        RecordKey {
            platform: self.platform,
            id: self.id.clone(),
        }
    }

    pub fn view_url(&self) -> Option<&str> {
        Some(self.url.as_str()).filter(|url| !url.is_empty())
    }

    pub fn download(&self) -> Option<&str> {
        self.download_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Numeric ordering key derived from the id; ids without leading digits sort as 0.
    ///
    /// LinkedIn ids are sequence numbers and YouTube ids are dates, so the two
    /// platforms share one numeric axis without sharing a meaning.
    pub fn sort_key(&self) -> i64 {
        parse_leading_int(&self.id).unwrap_or(0)
    }
}

/// Composite `(platform, id)` key, rendered as `platform-id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordKey {
    pub platform: Platform,
    pub id: String,
}

impl RecordKey {
    pub fn new(platform: Platform, id: impl Into<String>) -> Self {
        Self {
            platform,
            id: id.into(),
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let (platform, id) = raw.split_once('-')?;
        let platform = Platform::parse(platform)?;
        Some(Self::new(platform, id))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.platform, self.id)
    }
}

/// Integer prefix of `raw`: optional whitespace and sign, then ASCII digits.
/// Trailing text is ignored; `None` when no digit is present.
pub(crate) fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let value = rest[..end].bytes().fold(0i64, |acc, digit| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_follows_parse_int() {
        assert_eq!(parse_leading_int("0007"), Some(7));
        assert_eq!(parse_leading_int("20250404"), Some(20_250_404));
        assert_eq!(parse_leading_int("  12abc"), Some(12));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("abc12"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("+"), None);
    }

    #[test]
    fn record_key_round_trips_through_display() {
        let key = RecordKey::new(Platform::YouTube, "20250307");
        assert_eq!(key.to_string(), "youtube-20250307");
        assert_eq!(RecordKey::parse("youtube-20250307"), Some(key));
        assert_eq!(RecordKey::parse("tiktok-1"), None);
        assert_eq!(RecordKey::parse("linkedin"), None);
    }

    #[test]
    fn empty_links_are_absent() {
        let record = ContentRecord {
            id: "0001".into(),
            platform: Platform::LinkedIn,
            title: "T".into(),
            url: String::new(),
            tags: vec![],
            download_url: Some(String::new()),
        };
        assert_eq!(record.view_url(), None);
        assert_eq!(record.download(), None);
    }

    #[test]
    fn deserializes_with_optional_fields_missing() {
        let record: ContentRecord = serde_json::from_str(
            r#"{"id": "20250307", "platform": "youtube", "title": "Sessions", "download_url": null}"#,
        )
        .unwrap();
        assert_eq!(record.platform, Platform::YouTube);
        assert!(record.url.is_empty());
        assert!(record.tags.is_empty());
        assert_eq!(record.download(), None);
        assert!(serde_json::from_str::<ContentRecord>(
            r#"{"id": "1", "platform": "tiktok", "title": "x"}"#
        )
        .is_err());
    }
}
