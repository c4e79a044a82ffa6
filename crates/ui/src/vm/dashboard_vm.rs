use aware_core::model::{ModuleId, ModuleStatus, ProgressOverview, TrainingModule, User};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleCardVm {
    pub id: ModuleId,
    pub order_label: String,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub completed: bool,
    pub score_label: Option<String>,
    pub action_label: &'static str,
}

impl ModuleCardVm {
    #[must_use]
    pub fn new(module: &TrainingModule, overview: &ProgressOverview) -> Self {
        let completed = overview.status(&module.id) == ModuleStatus::Completed;
        let score_label = overview
            .record(&module.id)
            .and_then(aware_core::model::ProgressRecord::score_label);
        Self {
            id: module.id.clone(),
            order_label: module.order_label(),
            title: module.title.clone(),
            description: module.description.clone(),
            duration: module.duration.clone(),
            completed,
            score_label,
            action_label: if completed { "Review" } else { "Start" },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub user_name: String,
    pub role_badge: &'static str,
    pub percentage_label: String,
    /// Width of the overall progress bar, 0..=100.
    pub percentage_width: u32,
    pub completed_summary: String,
    pub cards: Vec<ModuleCardVm>,
}

/// `modules` must already be sorted by order.
#[must_use]
pub fn map_dashboard(
    user: &User,
    modules: &[TrainingModule],
    overview: &ProgressOverview,
) -> DashboardVm {
    let rounded = overview.rounded_percentage();
    DashboardVm {
        user_name: user.name.clone(),
        role_badge: user.role.badge(),
        percentage_label: format!("{rounded}%"),
        percentage_width: rounded.min(100),
        completed_summary: format!(
            "{} of {} modules completed",
            overview.completed_count(),
            overview.module_count()
        ),
        cards: modules
            .iter()
            .map(|module| ModuleCardVm::new(module, overview))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aware_core::model::{ProgressRecord, Role, UserId};

    fn module(id: &str, order: u32) -> TrainingModule {
        TrainingModule {
            id: ModuleId::new(id),
            order,
            title: format!("Title {order}"),
            description: "About".into(),
            duration: "30 mins".into(),
            video_url: String::new(),
            content: String::new(),
        }
    }

    fn record(module_id: &str, completed: bool, score: u32, total: u32) -> ProgressRecord {
        ProgressRecord {
            id: None,
            user_id: UserId::new("u-1"),
            module_id: ModuleId::new(module_id),
            completed,
            score: Some(score),
            total_questions: Some(total),
            completed_at: None,
        }
    }

    fn user(role: Role) -> User {
        User {
            id: UserId::new("u-1"),
            name: "Asha".into(),
            role,
            created_at: None,
        }
    }

    #[test]
    fn cards_reflect_progress() {
        let modules = vec![module("m-1", 1), module("m-2", 2), module("m-3", 3)];
        let overview = ProgressOverview::new(
            &modules,
            vec![record("m-1", true, 5, 5), record("m-2", false, 2, 5)],
        );
        let vm = map_dashboard(&user(Role::Student), &modules, &overview);

        assert_eq!(vm.percentage_label, "33%");
        assert_eq!(vm.completed_summary, "1 of 3 modules completed");
        assert_eq!(vm.cards[0].action_label, "Review");
        assert_eq!(vm.cards[0].score_label.as_deref(), Some("5/5"));
        assert_eq!(vm.cards[1].action_label, "Start");
        assert_eq!(vm.cards[1].score_label.as_deref(), Some("2/5"));
        assert_eq!(vm.cards[2].score_label, None);
        assert_eq!(vm.cards[2].order_label, "Module 3");
    }

    #[test]
    fn staff_badge_and_empty_catalog() {
        let overview = ProgressOverview::new(&[], Vec::new());
        let vm = map_dashboard(&user(Role::Staff), &[], &overview);
        assert_eq!(vm.role_badge, "Staff Member");
        assert_eq!(vm.percentage_label, "0%");
        assert_eq!(vm.completed_summary, "0 of 0 modules completed");
        assert!(vm.cards.is_empty());
    }
}
