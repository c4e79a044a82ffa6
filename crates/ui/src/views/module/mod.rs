mod assessment;
mod content;
mod feedback;
mod results;
mod view;

pub use view::ModuleView;
