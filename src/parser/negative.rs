use super::NegativeReviewEntry;
use crate::config::DanglingPolicy;
use tracing::{debug, trace};

pub const NEGATIVE_REVIEWS_MARKER: &str = "Negative Reviews:";
pub const ISSUE_SUMMARY_MARKER: &str = "Issue Summary:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Inside,
}

/// Username and review text still waiting for an issue summary
#[derive(Debug)]
struct PendingEntry {
    username: String,
    review_text: String,
}

impl PendingEntry {
    fn from_line(line: &str) -> Option<Self> {
        let (username, review_text) = line.split_once(':')?;
        Some(Self {
            username: username.trim().to_string(),
            review_text: review_text.trim().to_string(),
        })
    }

    fn complete(self, issue_summary: &str) -> NegativeReviewEntry {
        NegativeReviewEntry {
            username: self.username,
            review_text: self.review_text,
            issue_summary: issue_summary.trim().to_string(),
        }
    }
}

/// Extract negative review entries from an analysis reply
///
/// Only lines after a `Negative Reviews:` marker are considered. Inside
/// that section a `<username>: <review>` line opens an entry and the next
/// `Issue Summary:` line closes it. While an entry is open, further
/// `name: text` lines are dropped rather than merged or used to replace it.
/// An `Issue Summary:` line with nothing open is dropped too.
///
/// `policy` decides what happens to an entry still open at end of text.
pub fn extract_negative_reviews(text: &str, policy: DanglingPolicy) -> Vec<NegativeReviewEntry> {
    let mut section = Section::Outside;
    let mut pending: Option<PendingEntry> = None;
    let mut entries = Vec::new();

    for line in text.lines().map(str::trim) {
        if line.contains(NEGATIVE_REVIEWS_MARKER) {
            section = Section::Inside;
            continue;
        }

        if section == Section::Outside || line.is_empty() {
            continue;
        }

        if let Some(summary) = line.strip_prefix(ISSUE_SUMMARY_MARKER) {
            match pending.take() {
                Some(entry) => entries.push(entry.complete(summary)),
                None => debug!("Dropping issue summary with no open review: {:?}", line),
            }
        } else if pending.is_none() {
            pending = PendingEntry::from_line(line);
        } else {
            trace!("Ignoring line while a review is open: {:?}", line);
        }
    }

    if let Some(entry) = pending {
        match policy {
            DanglingPolicy::Drop => {
                debug!(
                    "Dropping review from {:?} with no issue summary",
                    entry.username
                );
            }
            DanglingPolicy::Keep => entries.push(entry.complete("")),
        }
    }

    entries
}
