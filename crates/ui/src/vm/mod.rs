mod dashboard_vm;
mod markdown_vm;
mod module_vm;

pub use dashboard_vm::{DashboardVm, ModuleCardVm, map_dashboard};
pub use markdown_vm::{embeddable_video_url, markdown_to_html, sanitize_html};
pub use module_vm::{
    QuestionVm, ResultsVm, assessment_copy, graded_message, incomplete_message, map_questions,
};
