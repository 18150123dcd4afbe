//! Bulk tag-entry parsing
//!
//! Users can paste a comma-separated list of `title:time[:memo]` entries
//! to tag a video in one step. The time is plain seconds, or `M:SS` /
//! `H:MM:SS` when no memo follows. Parsing is total: malformed segments
//! become structured issues instead of being silently dropped.

use serde::{Deserialize, Serialize};

/// One successfully parsed tag entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    /// Highlight label
    pub title: String,

    /// Offset in seconds
    pub timestamp: u32,

    /// Optional memo (empty string when omitted)
    pub memo: String,
}

/// Why a segment failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseIssueKind {
    /// Segment has no `title:time` separator
    MissingTime,
    /// Title part is empty
    EmptyTitle,
    /// Time part is not a recognized seconds or clock value
    InvalidTime,
}

/// A malformed segment, reported with its position and text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseIssue {
    /// Zero-based index of the segment in the input
    pub segment: usize,

    /// The raw segment text
    pub input: String,

    /// What went wrong
    pub kind: ParseIssueKind,
}

/// Result of parsing a bulk entry string
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagEntryParse {
    /// Entries that parsed cleanly, in input order
    pub entries: Vec<TagEntry>,

    /// Segments that did not
    pub issues: Vec<ParseIssue>,
}

impl TagEntryParse {
    /// True when every non-blank segment parsed
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parse a comma-separated `title:time[:memo]` list.
///
/// Blank segments (from trailing commas or doubled separators) are
/// skipped without an issue. If everything after the first colon is a
/// valid clock value it is taken as the time; otherwise the next
/// colon-separated token is the time in seconds and the remainder is
/// the memo.
pub fn parse_tag_entries(input: &str) -> TagEntryParse {
    let mut result = TagEntryParse::default();

    for (segment, raw) in input.split(',').enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }

        let issue = |kind| ParseIssue {
            segment,
            input: text.to_string(),
            kind,
        };

        let Some((title, rest)) = text.split_once(':') else {
            result.issues.push(issue(ParseIssueKind::MissingTime));
            continue;
        };

        let title = title.trim();
        if title.is_empty() {
            result.issues.push(issue(ParseIssueKind::EmptyTitle));
            continue;
        }

        // Whole remainder as a clock value first ("solo:1:30" means 90s,
        // not 1s with a "30" memo); otherwise seconds followed by memo.
        let entry = if let Some(timestamp) = parse_time(rest.trim()) {
            Some(TagEntry {
                title: title.to_string(),
                timestamp,
                memo: String::new(),
            })
        } else {
            let (time_part, memo) = match rest.split_once(':') {
                Some((t, m)) => (t.trim(), m.trim()),
                None => (rest.trim(), ""),
            };
            time_part.parse::<u32>().ok().map(|timestamp| TagEntry {
                title: title.to_string(),
                timestamp,
                memo: memo.to_string(),
            })
        };

        match entry {
            Some(entry) => result.entries.push(entry),
            None => result.issues.push(issue(ParseIssueKind::InvalidTime)),
        }
    }

    result
}

/// Parse a time given as plain seconds, `M:SS`, or `H:MM:SS`
fn parse_time(s: &str) -> Option<u32> {
    if let Ok(secs) = s.parse::<u32>() {
        return Some(secs);
    }
    let nums: Option<Vec<u32>> = s.split(':').map(|p| p.trim().parse::<u32>().ok()).collect();
    match nums?.as_slice() {
        [m, s] if *s < 60 => Some(m * 60 + s),
        [h, m, s] if *m < 60 && *s < 60 => Some(h * 3600 + m * 60 + s),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_time_memo_segments() {
        let parsed = parse_tag_entries("intro:30:great opener, outro:90");
        assert!(parsed.is_clean());
        assert_eq!(
            parsed.entries,
            vec![
                TagEntry {
                    title: "intro".into(),
                    timestamp: 30,
                    memo: "great opener".into(),
                },
                TagEntry {
                    title: "outro".into(),
                    timestamp: 90,
                    memo: String::new(),
                },
            ]
        );
    }

    #[test]
    fn parses_clock_times_without_memo() {
        let parsed = parse_tag_entries("solo:1:30, encore:1:02:05");
        assert!(parsed.is_clean());
        assert_eq!(parsed.entries[0].timestamp, 90);
        assert_eq!(parsed.entries[1].timestamp, 3725);
    }

    #[test]
    fn seconds_with_text_memo_are_unambiguous() {
        let parsed = parse_tag_entries("goal:45:what a finish");
        assert!(parsed.is_clean());
        assert_eq!(parsed.entries[0].timestamp, 45);
        assert_eq!(parsed.entries[0].memo, "what a finish");
    }

    #[test]
    fn malformed_segments_become_issues_not_drops() {
        let parsed = parse_tag_entries("intro:30, no-time-here, :45, bad:xx");
        assert_eq!(parsed.entries.len(), 1);
        assert_eq!(parsed.issues.len(), 3);
        assert_eq!(parsed.issues[0].kind, ParseIssueKind::MissingTime);
        assert_eq!(parsed.issues[0].segment, 1);
        assert_eq!(parsed.issues[1].kind, ParseIssueKind::EmptyTitle);
        assert_eq!(parsed.issues[2].kind, ParseIssueKind::InvalidTime);
    }

    #[test]
    fn blank_segments_are_skipped_silently() {
        let parsed = parse_tag_entries("intro:30,, outro:90,");
        assert!(parsed.is_clean());
        assert_eq!(parsed.entries.len(), 2);
    }

    #[test]
    fn out_of_range_clock_falls_back_to_seconds_plus_memo() {
        // 75 is not a valid seconds field, so "1" is the time and "75"
        // becomes the memo.
        let parsed = parse_tag_entries("odd:1:75");
        assert!(parsed.is_clean());
        assert_eq!(parsed.entries[0].timestamp, 1);
        assert_eq!(parsed.entries[0].memo, "75");
    }
}
