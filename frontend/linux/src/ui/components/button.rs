//! Reusable button components
//!
//! Pre-configured buttons that use the shared theme, so views stay
//! consistent without repeating styling.

use iced::{widget::button, Element};

use crate::ui::{button_styles, utils};

/// A primary action button. Passing `None` leaves the button disabled.
pub fn primary_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let mut btn = button(label)
        .padding(utils::button_padding())
        .style(button_styles::primary());

    if let Some(message) = on_press {
        btn = btn.on_press(message);
    }

    btn.into()
}

/// A secondary action button with consistent styling
pub fn secondary_button<'a, Message: Clone + 'a>(
    label: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let mut btn = button(label)
        .padding(utils::button_padding())
        .style(button_styles::secondary());

    if let Some(message) = on_press {
        btn = btn.on_press(message);
    }

    btn.into()
}
