use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{ModuleId, ProgressId, UserId};
use super::module::TrainingModule;

/// Per (user, module) record written by the service after an assessment is graded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ProgressId>,
    pub user_id: UserId,
    pub module_id: ModuleId,
    pub completed: bool,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ProgressRecord {
    /// `score/total` label, or `None` when the service did not report a score.
    ///
    /// The score is capped at the total so a malformed record never renders as > 100%.
    #[must_use]
    pub fn score_label(&self) -> Option<String> {
        let score = self.score?;
        let total = self.total_questions.unwrap_or(score);
        Some(format!("{}/{}", score.min(total), total))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleStatus {
    NotStarted,
    Attempted,
    Completed,
}

/// Aggregate view over the catalog and the caller's progress records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressOverview {
    module_count: usize,
    completed_count: usize,
    records: Vec<ProgressRecord>,
}

impl ProgressOverview {
    #[must_use]
    pub fn new(modules: &[TrainingModule], records: Vec<ProgressRecord>) -> Self {
        let completed_count = records.iter().filter(|record| record.completed).count();
        Self {
            module_count: modules.len(),
            completed_count,
            records,
        }
    }

    #[must_use]
    pub fn module_count(&self) -> usize {
        self.module_count
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed_count
    }

    /// Completed records over catalog size, in percent. Zero modules yields zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self) -> f64 {
        if self.module_count == 0 {
            return 0.0;
        }
        (self.completed_count as f64 / self.module_count as f64) * 100.0
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn rounded_percentage(&self) -> u32 {
        self.percentage().round() as u32
    }

    #[must_use]
    pub fn record(&self, module_id: &ModuleId) -> Option<&ProgressRecord> {
        self.records
            .iter()
            .find(|record| &record.module_id == module_id)
    }

    #[must_use]
    pub fn status(&self, module_id: &ModuleId) -> ModuleStatus {
        match self.record(module_id) {
            None => ModuleStatus::NotStarted,
            Some(record) if record.completed => ModuleStatus::Completed,
            Some(_) => ModuleStatus::Attempted,
        }
    }
}
