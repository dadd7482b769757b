//! Renders the status line announced for an issue.
//!
//! Template: `Issue {number}: {title} {url} {hashtag}`. Lengths are counted
//! in Unicode code points. When the line is too long, code points are
//! removed from the start of the title only; the number, URL and hashtag
//! are never shortened.

use crate::domain::models::{Issue, StatusConfig};

#[derive(Debug, Clone)]
pub struct StatusFormatter {
    hashtag: String,
    max_chars: usize,
}

impl StatusFormatter {
    pub fn new(hashtag: impl Into<String>, max_chars: usize) -> Self {
        Self {
            hashtag: hashtag.into(),
            max_chars,
        }
    }

    pub fn from_config(config: &StatusConfig) -> Self {
        Self::new(config.hashtag.clone(), config.max_chars)
    }

    /// Render the status for `issue`, trimming its title if needed.
    pub fn format(&self, issue: &Issue) -> String {
        let full = self.render(issue.number, &issue.title, &issue.html_url);
        let length = full.chars().count();
        if length <= self.max_chars {
            return full;
        }

        let overflow = length - self.max_chars;
        let trimmed: String = issue.title.chars().skip(overflow).collect();
        self.render(issue.number, &trimmed, &issue.html_url)
    }

    fn render(&self, number: i64, title: &str, url: &str) -> String {
        format!("Issue {number}: {title} {url} {}", self.hashtag)
    }
}

impl Default for StatusFormatter {
    fn default() -> Self {
        Self::from_config(&StatusConfig::default())
    }
}
