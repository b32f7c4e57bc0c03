// module declaration
pub mod core;
pub mod feedback;
pub mod form;
pub mod mint;
pub mod network;

// export App and related types
pub use core::{App, Theme};
pub use feedback::{Feedback, FeedbackKind};
pub use form::FormField;
