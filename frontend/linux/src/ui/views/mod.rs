//! UI Views Module
//!
//! This module contains the main views for the Newsdesk frontend. Views
//! represent complete screens.

pub mod login;
pub mod search;

// Re-export views for easy access
pub use login::{LoginMessage, LoginView};
pub use search::{SearchMessage, SearchView};
