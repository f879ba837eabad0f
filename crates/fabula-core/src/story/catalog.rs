//! In-memory story catalog.
//!
//! An ordered list of stories plus an id counter behind one `RwLock`. Nothing
//! awaits while the lock is held.

use std::sync::RwLock;

use chrono::Local;

use fabula_types::error::StoryError;
use fabula_types::story::{
    CreateStoryRequest, StatusFilter, Story, StoryList, StoryStats, StoryStatus,
    UpdateStoryRequest,
};

use super::seed::seed_stories;

/// Participant list given to newly created stories.
const DEFAULT_PARTICIPANT: &str = "Você";

/// Activity label given to newly created stories.
const NEW_STORY_ACTIVITY: &str = "Agora";

struct CatalogState {
    stories: Vec<Story>,
    /// Next id to hand out. Never decreases, so deleted ids are not reused.
    next_id: u64,
}

/// Story records with filtered listing, CRUD and aggregate statistics.
pub struct StoryCatalog {
    state: RwLock<CatalogState>,
}

impl StoryCatalog {
    /// Build a catalog over existing stories.
    ///
    /// The id counter starts above both the collection size and the largest
    /// numeric id present.
    pub fn new(stories: Vec<Story>) -> Self {
        let max_id = stories
            .iter()
            .filter_map(|s| s.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        let next_id = max_id.max(stories.len() as u64) + 1;

        Self {
            state: RwLock::new(CatalogState { stories, next_id }),
        }
    }

    /// Catalog preloaded with the demo stories.
    pub fn seeded() -> Self {
        Self::new(seed_stories())
    }

    /// Stories matching `filter` and, when non-empty, containing `search`
    /// (case-insensitive) in title, description or genre. Order is preserved.
    pub fn list(&self, filter: StatusFilter, search: &str) -> StoryList {
        let needle = search.to_lowercase();
        let state = self.state.read().expect("story catalog lock poisoned");

        let stories: Vec<Story> = state
            .stories
            .iter()
            .filter(|s| filter.admits(s.status))
            .filter(|s| needle.is_empty() || s.matches_search(&needle))
            .cloned()
            .collect();

        StoryList {
            total: stories.len(),
            stories,
        }
    }

    pub fn get(&self, id: &str) -> Result<Story, StoryError> {
        let state = self.state.read().expect("story catalog lock poisoned");
        state
            .stories
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoryError::NotFound)
    }

    /// Validate and append a new story.
    ///
    /// Reports the first of `title`, `description`, `genre` that is missing
    /// or blank. Values are stored as given (not trimmed).
    pub fn create(&self, request: CreateStoryRequest) -> Result<Story, StoryError> {
        let title = required("title", request.title)?;
        let description = required("description", request.description)?;
        let genre = required("genre", request.genre)?;

        let mut state = self.state.write().expect("story catalog lock poisoned");
        let id = state.next_id.to_string();
        state.next_id += 1;

        let story = Story {
            session_id: format!("session_{id}"),
            id,
            title,
            description,
            participants: vec![DEFAULT_PARTICIPANT.to_string()],
            last_activity: NEW_STORY_ACTIVITY.to_string(),
            message_count: 0,
            status: StoryStatus::Active,
            genre,
            created_at: Local::now().format("%Y-%m-%d").to_string(),
        };
        state.stories.push(story.clone());

        tracing::info!(story_id = %story.id, "story created");
        Ok(story)
    }

    /// Apply the fields present in `request`; everything else is untouched.
    pub fn update(&self, id: &str, request: UpdateStoryRequest) -> Result<Story, StoryError> {
        let mut state = self.state.write().expect("story catalog lock poisoned");
        let story = state
            .stories
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoryError::NotFound)?;

        if let Some(title) = request.title {
            story.title = title;
        }
        if let Some(description) = request.description {
            story.description = description;
        }
        if let Some(status) = request.status {
            story.status = status;
        }
        if let Some(genre) = request.genre {
            story.genre = genre;
        }

        tracing::info!(story_id = %id, "story updated");
        Ok(story.clone())
    }

    /// Remove a story and return it. Remaining ids are not renumbered.
    pub fn delete(&self, id: &str) -> Result<Story, StoryError> {
        let mut state = self.state.write().expect("story catalog lock poisoned");
        let index = state
            .stories
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoryError::NotFound)?;
        let removed = state.stories.remove(index);

        tracing::info!(story_id = %id, "story deleted");
        Ok(removed)
    }

    /// Counts by status and total messages, computed from current state.
    pub fn stats(&self) -> StoryStats {
        let state = self.state.read().expect("story catalog lock poisoned");
        let count = |status: StoryStatus| state.stories.iter().filter(|s| s.status == status).count();

        StoryStats {
            total_stories: state.stories.len(),
            active_stories: count(StoryStatus::Active),
            completed_stories: count(StoryStatus::Completed),
            paused_stories: count(StoryStatus::Paused),
            total_messages: state.stories.iter().map(|s| s.message_count).sum(),
        }
    }

    pub fn len(&self) -> usize {
        self.state
            .read()
            .expect("story catalog lock poisoned")
            .stories
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for StoryCatalog {
    fn default() -> Self {
        Self::seeded()
    }
}

fn required(field: &'static str, value: Option<String>) -> Result<String, StoryError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(StoryError::MissingField(field)),
    }
}
