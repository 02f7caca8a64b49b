//! Toast Component Module
//!
//! Overlay notifications that appear temporarily to provide user feedback.
//! Toasts stack in the bottom-right corner and dismiss themselves after a
//! short delay; the application drives expiry from a periodic tick.

use iced::widget::{column, container, Space};
use iced::{Alignment, Element, Length};
use std::time::{Duration, Instant};

use crate::ui::theme::alerts::{render_alert, AlertMessage};

/// Duration for toast auto-dismiss
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts to display simultaneously
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Margin between the toast stack and the window edge
const TOAST_MARGIN: f32 = 20.0;

/// Vertical gap between stacked toasts
const TOAST_SPACING: f32 = 10.0;

/// Width of a rendered toast
const TOAST_WIDTH: f32 = 360.0;

/// Individual toast item with timing information
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: usize,
    pub message: AlertMessage,
    pub created_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Create a new toast with the default auto-dismiss delay
    pub fn new(id: usize, message: AlertMessage) -> Self {
        Self::with_duration(id, message, DEFAULT_TOAST_DURATION)
    }

    /// Create a toast with a custom auto-dismiss delay
    pub fn with_duration(id: usize, message: AlertMessage, duration: Duration) -> Self {
        Self {
            id,
            message,
            created_at: Instant::now(),
            duration,
        }
    }

    /// Check if this toast should be dismissed
    pub fn should_dismiss(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Toast manager for handling multiple toasts
#[derive(Debug, Clone, Default)]
pub struct ToastManager {
    toasts: Vec<Toast>,
    next_id: usize,
}

impl ToastManager {
    /// Create a new toast manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new toast, dropping the oldest one past the display limit
    pub fn add_toast(&mut self, message: AlertMessage) -> usize {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.push(Toast::new(id, message));
        if self.toasts.len() > MAX_VISIBLE_TOASTS {
            self.toasts.remove(0);
        }

        id
    }

    /// Add an error toast
    pub fn error<S: Into<String>>(&mut self, message: S) -> usize {
        self.add_toast(AlertMessage::error(message))
    }

    /// Add a success toast
    pub fn success<S: Into<String>>(&mut self, message: S) -> usize {
        self.add_toast(AlertMessage::success(message))
    }

    /// Remove a specific toast by ID
    pub fn remove_toast(&mut self, toast_id: usize) {
        self.toasts.retain(|toast| toast.id != toast_id);
    }

    /// Remove all toasts whose display time has elapsed
    pub fn remove_expired_toasts(&mut self) {
        self.toasts.retain(|toast| !toast.should_dismiss());
    }

    /// Get all current toasts
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Check if there are any toasts
    pub fn has_toasts(&self) -> bool {
        !self.toasts.is_empty()
    }

    /// Get the number of active toasts
    pub fn count(&self) -> usize {
        self.toasts.len()
    }
}

/// Overlay the toast stack over the main content, floating bottom-right
pub fn render_toast_overlay<'a, Message: Clone + 'a>(
    toast_manager: &'a ToastManager,
    main_content: Element<'a, Message>,
    on_dismiss: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    if !toast_manager.has_toasts() {
        return main_content;
    }

    let mut toast_column = column![].align_items(Alignment::End);
    for toast in toast_manager.toasts() {
        let dismiss = on_dismiss(toast.id);
        toast_column = toast_column.push(
            container(render_alert(&toast.message, Some(dismiss))).width(Length::Fixed(TOAST_WIDTH)),
        );
        toast_column = toast_column.push(Space::with_height(Length::Fixed(TOAST_SPACING)));
    }

    let toast_container = container(toast_column.width(Length::Shrink))
        .width(Length::Fill)
        .height(Length::Shrink)
        .align_x(iced::alignment::Horizontal::Right)
        .padding([0.0, TOAST_MARGIN, TOAST_MARGIN, 0.0]);

    column![main_content, toast_container].into()
}
