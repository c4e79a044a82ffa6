mod dashboard;
mod landing;
mod module;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use dashboard::DashboardView;
pub use landing::LandingView;
pub use module::ModuleView;
pub use state::{ViewError, ViewState, view_state_from_resource};
