//! Theme and styling for the Newsdesk Linux frontend
//!
//! This module contains the custom theme implementation using the Newsdesk
//! brand colors. It provides consistent styling across all views: button and
//! container style sheets, shared layout constants, and the alert rendering
//! used by toasts.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

// Newsdesk brand colors
/// Accent blue used for primary actions and highlights (#1a6feb)
pub const ACCENT_BLUE: Color = Color::from_rgb(0.102, 0.435, 0.922);

/// Accent blue hover state (slightly darker)
pub const ACCENT_BLUE_HOVER: Color = Color::from_rgb(0.08, 0.37, 0.82);

/// Accent blue pressed state (even darker)
pub const ACCENT_BLUE_PRESSED: Color = Color::from_rgb(0.06, 0.31, 0.72);

/// Accent blue with low opacity for hover backgrounds
pub const ACCENT_BLUE_LIGHT: Color = Color::from_rgba(0.102, 0.435, 0.922, 0.1);

/// Accent blue with medium opacity for pressed backgrounds
pub const ACCENT_BLUE_MEDIUM: Color = Color::from_rgba(0.102, 0.435, 0.922, 0.2);

/// Success color (#06d6a0)
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.024, 0.839, 0.627);

/// Error color (#ef476f)
pub const ERROR_RED: Color = Color::from_rgb(0.937, 0.278, 0.435);

/// Warning color (#fcbf49)
pub const WARNING_YELLOW: Color = Color::from_rgb(0.988, 0.749, 0.286);

/// Light application background (#f8f9fa)
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.97, 0.976, 0.98);

/// Dark text color (#212529)
pub const DARK_TEXT: Color = Color::from_rgb(0.129, 0.145, 0.161);

/// Light gray text color for secondary lines
pub const LIGHT_GRAY_TEXT: Color = Color::from_rgb(0.6, 0.6, 0.6);

/// Disabled background color
pub const DISABLED_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Disabled text color
pub const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Disabled border color
pub const DISABLED_BORDER: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Light gray border for cards
pub const EXTRA_LIGHT_GRAY: Color = Color::from_rgb(0.9, 0.9, 0.9);

/// Creates the Newsdesk custom theme with brand colors
pub fn create_newsdesk_theme() -> Theme {
    Theme::custom(
        "Newsdesk".to_string(),
        iced::theme::Palette {
            background: LIGHT_BACKGROUND,
            text: DARK_TEXT,
            primary: ACCENT_BLUE,
            success: SUCCESS_GREEN,
            danger: ERROR_RED,
        },
    )
}

/// Custom button style functions for consistent styling across views
pub mod button_styles {
    use super::*;

    /// Primary button style using the accent blue
    pub fn primary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(PrimaryButton))
    }

    /// Secondary button style with an accent border on a transparent body
    pub fn secondary() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(SecondaryButton))
    }

    /// Style for buttons that are present but not pressable
    pub fn disabled() -> iced::theme::Button {
        iced::theme::Button::Custom(Box::new(DisabledButton))
    }

    struct PrimaryButton;

    impl button::StyleSheet for PrimaryButton {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_BLUE)),
                text_color: Color::WHITE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_BLUE_HOVER)),
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_BLUE_PRESSED)),
                ..self.active(style)
            }
        }

        fn disabled(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }
    }

    struct SecondaryButton;

    impl button::StyleSheet for SecondaryButton {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(Color::TRANSPARENT)),
                text_color: ACCENT_BLUE,
                border: Border {
                    color: ACCENT_BLUE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }

        fn hovered(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_BLUE_LIGHT)),
                ..self.active(style)
            }
        }

        fn pressed(&self, style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(ACCENT_BLUE_MEDIUM)),
                ..self.active(style)
            }
        }

        fn disabled(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(Color::TRANSPARENT)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }
    }

    struct DisabledButton;

    impl button::StyleSheet for DisabledButton {
        type Style = Theme;

        fn active(&self, _style: &Self::Style) -> button::Appearance {
            button::Appearance {
                background: Some(Background::Color(DISABLED_BACKGROUND)),
                text_color: DISABLED_TEXT,
                border: Border {
                    color: DISABLED_BORDER,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }
    }
}

/// Custom container style functions for alerts and cards
pub mod container_styles {
    use super::*;

    /// Error alert background
    pub fn error_alert() -> iced::theme::Container {
        tinted(ERROR_RED)
    }

    /// Warning alert background
    pub fn warning_alert() -> iced::theme::Container {
        tinted(WARNING_YELLOW)
    }

    /// Success alert background
    pub fn success_alert() -> iced::theme::Container {
        tinted(SUCCESS_GREEN)
    }

    /// Info alert background
    pub fn info_alert() -> iced::theme::Container {
        tinted(ACCENT_BLUE)
    }

    /// White card with a light border, used for search result entries
    pub fn result_card() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(ResultCard))
    }

    /// Small accent-tinted badge holding a result score
    pub fn score_badge() -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(ScoreBadge))
    }

    fn tinted(color: Color) -> iced::theme::Container {
        iced::theme::Container::Custom(Box::new(TintedContainer { color }))
    }

    struct TintedContainer {
        color: Color,
    }

    impl container::StyleSheet for TintedContainer {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: Some(DARK_TEXT),
                background: Some(Background::Color(Color {
                    a: 0.12,
                    ..self.color
                })),
                border: Border {
                    color: self.color,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }
    }

    struct ResultCard;

    impl container::StyleSheet for ResultCard {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: None,
                background: Some(Background::Color(Color::WHITE)),
                border: Border {
                    color: EXTRA_LIGHT_GRAY,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                ..Default::default()
            }
        }
    }

    struct ScoreBadge;

    impl container::StyleSheet for ScoreBadge {
        type Style = Theme;

        fn appearance(&self, _style: &Self::Style) -> container::Appearance {
            container::Appearance {
                text_color: Some(ACCENT_BLUE),
                background: Some(Background::Color(ACCENT_BLUE_LIGHT)),
                border: Border {
                    color: ACCENT_BLUE_MEDIUM,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                ..Default::default()
            }
        }
    }
}

/// Shared layout constants and small widget helpers
pub mod utils {
    use super::button_styles;
    use iced::widget::{button, text};
    use iced::Element;

    /// Standard button padding
    pub fn button_padding() -> [u16; 2] {
        [10, 20]
    }

    /// Reduced padding for compact buttons
    pub fn small_button_padding() -> [u16; 2] {
        [4, 10]
    }

    /// Padding inside alert and toast containers
    pub fn alert_padding() -> [u16; 2] {
        [12, 16]
    }

    /// Default vertical rhythm between sections
    pub fn standard_spacing() -> u16 {
        20
    }

    /// Corner radius shared by buttons, inputs, and badges
    pub fn border_radius() -> f32 {
        4.0
    }

    /// Toggle button switching a password field between hidden and shown
    pub fn password_visibility_toggle<'a, Message: Clone + 'a>(
        visible: bool,
        on_toggle: Message,
    ) -> Element<'a, Message> {
        let label = if visible { "Hide" } else { "Show" };
        button(text(label).size(12))
            .on_press(on_toggle)
            .padding(small_button_padding())
            .style(button_styles::secondary())
            .into()
    }
}

/// Alert messages rendered inline or as toasts
pub mod alerts {
    use super::{button_styles, container_styles, utils, DARK_TEXT};
    use super::{ACCENT_BLUE, ERROR_RED, SUCCESS_GREEN, WARNING_YELLOW};
    use iced::widget::{button, column, container, row, text, Space};
    use iced::{Alignment, Color, Element, Length};

    /// Severity of an alert
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum AlertLevel {
        Error,
        Warning,
        Success,
        Info,
    }

    /// A user-facing notification
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct AlertMessage {
        pub level: AlertLevel,
        pub title: Option<String>,
        pub message: String,
        pub dismissible: bool,
    }

    impl AlertMessage {
        pub fn error<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Error,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn warning<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Warning,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn success<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Success,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        pub fn info<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Info,
                title: None,
                message: message.into(),
                dismissible: true,
            }
        }

        /// Failure reaching or talking to the backend service
        pub fn api_error<S: Into<String>>(message: S) -> Self {
            Self {
                level: AlertLevel::Error,
                title: Some("Connection Problem".to_string()),
                message: message.into(),
                dismissible: true,
            }
        }

        fn accent_color(&self) -> Color {
            match self.level {
                AlertLevel::Error => ERROR_RED,
                AlertLevel::Warning => WARNING_YELLOW,
                AlertLevel::Success => SUCCESS_GREEN,
                AlertLevel::Info => ACCENT_BLUE,
            }
        }
    }

    /// Render a single alert, optionally with a dismiss control
    pub fn render_alert<'a, Message: Clone + 'a>(
        alert: &'a AlertMessage,
        on_dismiss: Option<Message>,
    ) -> Element<'a, Message> {
        let container_style = match alert.level {
            AlertLevel::Error => container_styles::error_alert(),
            AlertLevel::Warning => container_styles::warning_alert(),
            AlertLevel::Success => container_styles::success_alert(),
            AlertLevel::Info => container_styles::info_alert(),
        };

        let mut text_column = column![];
        if let Some(title) = &alert.title {
            text_column = text_column.push(
                text(title)
                    .size(14)
                    .style(iced::theme::Text::Color(alert.accent_color())),
            );
        }
        text_column = text_column.push(
            text(&alert.message)
                .size(12)
                .style(iced::theme::Text::Color(DARK_TEXT)),
        );

        let mut content = row![text_column.width(Length::Fill).spacing(4)];
        if alert.dismissible {
            if let Some(dismiss) = on_dismiss {
                content = content.push(Space::with_width(Length::Fixed(10.0))).push(
                    button("✕")
                        .on_press(dismiss)
                        .padding([2, 6])
                        .style(button_styles::secondary()),
                );
            }
        }

        container(content.align_items(Alignment::Center))
            .padding(utils::alert_padding())
            .width(Length::Fill)
            .style(container_style)
            .into()
    }
}
