use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ids::{FeedbackId, ModuleId, UserId};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FeedbackError {
    #[error("comments cannot be empty")]
    EmptyComments,
    #[error("rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
}

/// Star rating on the 1–5 button set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// # Errors
    ///
    /// Returns `FeedbackError::RatingOutOfRange` outside `1..=5`.
    pub fn new(value: u8) -> Result<Self, FeedbackError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(FeedbackError::RatingOutOfRange(value))
        }
    }

    #[must_use]
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Every selectable star, lowest first.
    pub fn all() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = FeedbackError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// Unvalidated feedback form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeedbackDraft {
    pub rating: Rating,
    pub comments: String,
}

impl FeedbackDraft {
    /// # Errors
    ///
    /// Returns `FeedbackError::EmptyComments` when the comments are blank after trimming.
    pub fn validate(
        self,
        user_id: UserId,
        module_id: ModuleId,
    ) -> Result<NewFeedback, FeedbackError> {
        let comments = self.comments.trim();
        if comments.is_empty() {
            return Err(FeedbackError::EmptyComments);
        }
        Ok(NewFeedback {
            user_id,
            module_id,
            rating: self.rating,
            comments: comments.to_owned(),
        })
    }
}

/// Body of the feedback call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewFeedback {
    pub user_id: UserId,
    pub module_id: ModuleId,
    pub rating: Rating,
    pub comments: String,
}

/// Acknowledgement returned by the feedback endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FeedbackReceipt {
    #[serde(default)]
    pub id: Option<FeedbackId>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
