use serde::{Deserialize, Serialize};

use super::ids::ModuleId;

/// A single training module as supplied by the remote catalog.
///
/// The client never edits modules; unknown fields in the payload are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingModule {
    pub id: ModuleId,
    pub order: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub video_url: String,
    /// Markdown body.
    pub content: String,
}

impl TrainingModule {
    #[must_use]
    pub fn order_label(&self) -> String {
        format!("Module {}", self.order)
    }
}

/// Sort modules by their catalog order, keeping the server order for ties.
pub fn sort_by_order(modules: &mut [TrainingModule]) {
    modules.sort_by_key(|module| module.order);
}
