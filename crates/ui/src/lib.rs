pub mod app;
pub mod context;
pub mod routes;
pub mod toast;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, SessionContext, UiApp, build_app_context};
