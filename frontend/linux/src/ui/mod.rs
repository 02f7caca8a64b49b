//! UI Module for the Newsdesk Linux frontend
//!
//! This module contains all user interface pieces: the theme, reusable
//! components, and the login and search views.

pub mod components;
pub mod theme;
pub mod views;

// Re-export commonly used UI helpers
pub use theme::{button_styles, container_styles, create_newsdesk_theme, utils};
