use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{DashboardView, LandingView, ModuleView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", LandingView)] Landing {},
    #[route("/dashboard", DashboardView)] Dashboard {},
    #[route("/module/:module_id", ModuleView)] Module { module_id: String },
}
