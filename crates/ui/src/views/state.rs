use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    NotFound,
    Unavailable,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
            ViewError::NotFound => "This module could not be found.",
            ViewError::Unavailable => "The training service is unavailable right now.",
        }
    }
}

impl From<&services::ApiError> for ViewError {
    fn from(err: &services::ApiError) -> Self {
        match err {
            services::ApiError::NotFound(_) => ViewError::NotFound,
            services::ApiError::Status(status) if status.as_u16() == 404 => ViewError::NotFound,
            services::ApiError::Http(_) | services::ApiError::Unavailable(_) => {
                ViewError::Unavailable
            }
            _ => ViewError::Unknown,
        }
    }
}

impl From<services::ModuleError> for ViewError {
    fn from(err: services::ModuleError) -> Self {
        match &err {
            services::ModuleError::Api(api) => ViewError::from(api),
            _ => ViewError::Unknown,
        }
    }
}

impl From<services::DashboardError> for ViewError {
    fn from(err: services::DashboardError) -> Self {
        match &err {
            services::DashboardError::Api(api) => ViewError::from(api),
            _ => ViewError::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
