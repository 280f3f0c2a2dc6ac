//! Application state module

mod app_state;
mod carousel;
mod forms;
mod gallery;
mod modal;
mod scroll_lock;
mod splash_state;
mod submission;

pub use app_state::*;
pub use carousel::*;
pub use forms::*;
pub use gallery::*;
pub use modal::*;
pub use scroll_lock::*;
pub use splash_state::*;
pub use submission::*;
