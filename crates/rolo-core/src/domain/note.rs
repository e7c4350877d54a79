use crate::error::CoreError;
use chrono::DateTime;
use serde::{Deserialize, Serialize};

pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const SUMMARY_LEN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub created_at: i64,
}

impl Note {
    pub fn new(
        content: &str,
        title: Option<&str>,
        tags_string: Option<&str>,
        created_at: i64,
    ) -> Result<Self, CoreError> {
        let mut note = Self {
            content: require_content(content)?,
            title: normalize_title(title),
            tags: Vec::new(),
            created_at,
        };
        if let Some(tags) = tags_string {
            note.add_tags(tags);
        }
        Ok(note)
    }

    /// Comma-separated tags; lowercased, only new ones appended, so the call
    /// is idempotent under repeated identical input.
    pub fn add_tags(&mut self, tags_string: &str) {
        for tag in parse_tags(tags_string) {
            if !self.tags.contains(&tag) {
                self.tags.push(tag);
            }
        }
    }

    /// Full replace of content, title and tag set. The note keeps its prior
    /// state when the new content is empty.
    pub fn update(
        &mut self,
        content: &str,
        title: Option<&str>,
        tags_string: Option<&str>,
    ) -> Result<(), CoreError> {
        let content = require_content(content)?;
        self.content = content;
        self.title = normalize_title(title);
        self.tags.clear();
        if let Some(tags) = tags_string {
            self.add_tags(tags);
        }
        Ok(())
    }

    /// Case-insensitive substring match over content, title and tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return false;
        }
        self.content.to_lowercase().contains(&query)
            || self
                .title
                .as_deref()
                .is_some_and(|title| title.to_lowercase().contains(&query))
            || self.tags.iter().any(|tag| tag.contains(&query))
    }

    /// Exact case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim().to_lowercase();
        self.tags.iter().any(|candidate| *candidate == tag)
    }

    /// Short one-line description used by the selection protocol.
    pub fn summary(&self) -> String {
        match self.title.as_deref() {
            Some(title) => title.to_string(),
            None => self.content.chars().take(SUMMARY_LEN).collect(),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(title) = self.title.as_deref() {
            out.push_str(&format!("title: {}\n", title));
        }
        out.push_str(&format!("note: {}\n", self.content));
        let tags = if self.tags.is_empty() {
            "(none)".to_string()
        } else {
            self.tags.join(", ")
        };
        out.push_str(&format!("tags: {}\n", tags));
        out.push_str(&format!("created at: {}", format_created_at(self.created_at)));
        out
    }
}

fn require_content(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyNoteContent);
    }
    Ok(trimmed.to_string())
}

fn normalize_title(title: Option<&str>) -> Option<String> {
    title.map(str::trim).filter(|t| !t.is_empty()).map(String::from)
}

fn parse_tags(tags_string: &str) -> Vec<String> {
    tags_string
        .split(',')
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn format_created_at(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0)
        .unwrap_or_else(|| DateTime::from_timestamp(0, 0).expect("epoch"))
        .format(CREATED_AT_FORMAT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::Note;
    use crate::error::CoreError;

    #[test]
    fn note_requires_content() {
        assert_eq!(
            Note::new("   ", Some("title"), None, 0),
            Err(CoreError::EmptyNoteContent)
        );
    }

    #[test]
    fn add_tags_is_idempotent_and_lowercases() {
        let mut note = Note::new("call back", None, Some("Work, urgent"), 0).unwrap();
        assert_eq!(note.tags, vec!["work", "urgent"]);
        note.add_tags("work, URGENT, follow-up");
        assert_eq!(note.tags, vec!["work", "urgent", "follow-up"]);
        note.add_tags("work, URGENT, follow-up");
        assert_eq!(note.tags, vec!["work", "urgent", "follow-up"]);
    }

    #[test]
    fn update_replaces_everything() {
        let mut note = Note::new("old", Some("Old Title"), Some("a,b"), 42).unwrap();
        note.update("new content", None, Some("c")).unwrap();
        assert_eq!(note.content, "new content");
        assert_eq!(note.title, None);
        assert_eq!(note.tags, vec!["c"]);
        assert_eq!(note.created_at, 42);
    }

    #[test]
    fn update_rolls_back_on_empty_content() {
        let mut note = Note::new("keep me", Some("Title"), Some("a,b"), 0).unwrap();
        let before = note.clone();
        assert_eq!(
            note.update("  ", None, Some("c")),
            Err(CoreError::EmptyNoteContent)
        );
        assert_eq!(note, before);
    }

    #[test]
    fn matches_searches_content_title_and_tags() {
        let note = Note::new("Buy milk", Some("Groceries"), Some("errand"), 0).unwrap();
        assert!(note.matches("MILK"));
        assert!(note.matches("grocer"));
        assert!(note.matches("erra"));
        assert!(!note.matches("meeting"));
        assert!(!note.matches("  "));
    }

    #[test]
    fn has_tag_is_exact_case_insensitive() {
        let note = Note::new("x", None, Some("follow-up"), 0).unwrap();
        assert!(note.has_tag("Follow-Up"));
        assert!(!note.has_tag("follow"));
    }

    #[test]
    fn render_includes_placeholder_when_no_tags() {
        let note = Note::new("hello", None, None, 0).unwrap();
        let rendered = note.render();
        assert!(rendered.contains("tags: (none)"));
        assert!(rendered.contains("created at: 1970-01-01 00:00:00"));
    }
}
