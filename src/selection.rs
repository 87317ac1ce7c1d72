mod controller;
mod lifecycle;

pub use controller::SelectionController;
pub use lifecycle::{Lifecycle, PromptEvent, Status};
