//! Story catalog types.
//!
//! Field names on the wire follow the frontend's expectations: mostly
//! camelCase, with `session_id` kept in snake_case.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A story in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Display names, in join order.
    pub participants: Vec<String>,
    /// Human-readable activity label ("Agora", "2 horas atrás", ...).
    #[serde(rename = "lastActivity")]
    pub last_activity: String,
    #[serde(rename = "messageCount")]
    pub message_count: u64,
    pub status: StoryStatus,
    pub genre: String,
    /// `YYYY-MM-DD`.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Correlates to a chat session; not checked for existence.
    pub session_id: String,
}

impl Story {
    /// Case-insensitive substring match over title, description and genre.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.genre.to_lowercase().contains(needle)
    }
}

/// Story lifecycle states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    #[default]
    Active,
    Paused,
    Completed,
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoryStatus::Active => write!(f, "active"),
            StoryStatus::Paused => write!(f, "paused"),
            StoryStatus::Completed => write!(f, "completed"),
        }
    }
}

impl FromStr for StoryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(StoryStatus::Active),
            "paused" => Ok(StoryStatus::Paused),
            "completed" => Ok(StoryStatus::Completed),
            other => Err(format!("invalid story status: '{other}'")),
        }
    }
}

/// Status filter for listing: everything, or one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(StoryStatus),
}

impl StatusFilter {
    pub fn admits(&self, status: StoryStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = String;

    /// Exact lowercase match only; `Active` is not a filter value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "active" => Ok(StatusFilter::Only(StoryStatus::Active)),
            "paused" => Ok(StatusFilter::Only(StoryStatus::Paused)),
            "completed" => Ok(StatusFilter::Only(StoryStatus::Completed)),
            other => Err(format!("invalid status filter: '{other}'")),
        }
    }
}

/// Request to create a story. All three fields are required, but they are
/// optional here so the missing one can be reported by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateStoryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
}

/// Partial update. Absent fields are left untouched; present fields are
/// applied as-is, including empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStoryRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<StoryStatus>,
    pub genre: Option<String>,
}

/// Result of a filtered listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryList {
    pub stories: Vec<Story>,
    pub total: usize,
}

/// Aggregate counts over the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryStats {
    pub total_stories: usize,
    pub active_stories: usize,
    pub completed_stories: usize,
    pub paused_stories: usize,
    pub total_messages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Story {
        Story {
            id: "1".to_string(),
            title: "A Floresta Encantada".to_string(),
            description: "Uma aventura mágica".to_string(),
            participants: vec!["Você".to_string()],
            last_activity: "Agora".to_string(),
            message_count: 3,
            status: StoryStatus::Active,
            genre: "Fantasia".to_string(),
            created_at: "2025-01-15".to_string(),
            session_id: "session_1".to_string(),
        }
    }

    #[test]
    fn test_story_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["lastActivity"], "Agora");
        assert_eq!(json["messageCount"], 3);
        assert_eq!(json["createdAt"], "2025-01-15");
        assert_eq!(json["session_id"], "session_1");
        assert_eq!(json["status"], "active");
    }

    #[test]
    fn test_story_status_roundtrip() {
        for status in [StoryStatus::Active, StoryStatus::Paused, StoryStatus::Completed] {
            let parsed: StoryStatus = status.to_string().parse().unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn test_status_filter_parse() {
        assert_eq!("all".parse::<StatusFilter>().unwrap(), StatusFilter::All);
        assert_eq!(
            "paused".parse::<StatusFilter>().unwrap(),
            StatusFilter::Only(StoryStatus::Paused)
        );
        assert!("archived".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_is_case_sensitive() {
        assert!("Active".parse::<StatusFilter>().is_err());
        assert!("ALL".parse::<StatusFilter>().is_err());
        assert!(" paused".parse::<StatusFilter>().is_err());
    }

    #[test]
    fn test_status_filter_admits() {
        assert!(StatusFilter::All.admits(StoryStatus::Completed));
        assert!(StatusFilter::Only(StoryStatus::Active).admits(StoryStatus::Active));
        assert!(!StatusFilter::Only(StoryStatus::Active).admits(StoryStatus::Paused));
    }

    #[test]
    fn test_matches_search_is_case_insensitive() {
        let story = sample();
        assert!(story.matches_search("floresta"));
        assert!(story.matches_search("mágica"));
        assert!(story.matches_search("fanta"));
        assert!(!story.matches_search("cyberpunk"));
    }

    #[test]
    fn test_update_request_distinguishes_absent_from_empty() {
        let req: UpdateStoryRequest = serde_json::from_str(r#"{"title": ""}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some(""));
        assert!(req.description.is_none());
        assert!(req.status.is_none());
    }
}
