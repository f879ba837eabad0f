//! Query parameter extractors for list endpoints.

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use fabula_types::story::StatusFilter;

use crate::http::error::AppError;

/// Drop-in for [`axum::extract::Query`] whose rejection is [`AppError::Validation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(AppError::Validation(rejection.body_text())),
        }
    }
}

/// Query parameters for the story list endpoint.
#[derive(Debug, Deserialize, Default)]
pub struct StoryListQuery {
    /// `all`, `active`, `paused` or `completed`. Absent means `all`.
    pub status: Option<String>,
    /// Case-insensitive substring over title, description and genre.
    #[serde(default)]
    pub search: String,
}

impl StoryListQuery {
    pub fn status_filter(&self) -> Result<StatusFilter, AppError> {
        match self.status.as_deref() {
            None | Some("") => Ok(StatusFilter::All),
            Some(s) => s.parse().map_err(AppError::Validation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabula_types::story::StoryStatus;

    fn query(status: Option<&str>) -> StoryListQuery {
        StoryListQuery {
            status: status.map(str::to_string),
            search: String::new(),
        }
    }

    #[test]
    fn status_filter_parsing() {
        assert_eq!(query(None).status_filter().unwrap(), StatusFilter::All);
        assert_eq!(query(Some("all")).status_filter().unwrap(), StatusFilter::All);
        assert_eq!(
            query(Some("paused")).status_filter().unwrap(),
            StatusFilter::Only(StoryStatus::Paused)
        );
        assert!(matches!(
            query(Some("archived")).status_filter(),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            query(Some("Active")).status_filter(),
            Err(AppError::Validation(_))
        ));
    }
}
