//! Login View
//!
//! Collects the account credentials and signs in against the backend. On
//! success the returned token becomes the client's default bearer credential
//! and is persisted for the next start; the application then switches to the
//! search view. Every failure collapses into one generic notification - the
//! cause is only written to the log.

use iced::widget::{button, column, container, row, text, text_input, Space};
use iced::{Alignment, Command, Element, Length};
use tracing::{error, info, warn};

use newsdesk_shared::{validation, ApiClient, Credentials, TokenStore};

use crate::ui::theme::{self, button_styles, utils};

/// Notification shown for any sign-in failure, regardless of cause.
const FAILURE_NOTICE: &str = "Sign in failed. Check your credentials and try again.";

/// Messages for the login view
#[derive(Debug, Clone)]
pub enum LoginMessage {
    /// Username input changed
    UsernameChanged(String),
    /// Password input changed
    PasswordChanged(String),
    /// Toggle password visibility
    TogglePasswordVisibility,
    /// Attempt to sign in
    Submit,
    /// Sign-in attempt finished
    SubmitComplete(Result<(), String>),
}

/// State of the sign-in process
#[derive(Debug, Clone, PartialEq, Eq)]
enum LoginState {
    /// Editing the form
    Input,
    /// Request in flight; the form is locked
    Submitting,
    /// Signed in successfully
    Complete,
}

/// Login view component
#[derive(Debug)]
pub struct LoginView {
    api: ApiClient,
    token_store: TokenStore,
    username: String,
    password: String,
    show_password: bool,
    state: LoginState,
    /// Pending failure notification, consumed once by the app shell
    failure: Option<String>,
}

impl LoginView {
    /// Create a new login view
    pub fn new(api: ApiClient, token_store: TokenStore) -> Self {
        Self {
            api,
            token_store,
            username: String::new(),
            password: String::new(),
            show_password: false,
            state: LoginState::Input,
            failure: None,
        }
    }

    /// Whether a sign-in request is currently in flight
    pub fn is_submitting(&self) -> bool {
        self.state == LoginState::Submitting
    }

    /// Whether sign-in finished successfully
    pub fn is_complete(&self) -> bool {
        self.state == LoginState::Complete
    }

    /// Take the pending failure notification, if one was produced
    pub fn take_error(&mut self) -> Option<String> {
        self.failure.take()
    }

    fn credentials(&self) -> Credentials {
        Credentials::new(self.username.clone(), self.password.clone())
    }

    /// Both required fields present and no request in flight
    fn can_submit(&self) -> bool {
        self.state == LoginState::Input && validation::credentials_complete(&self.credentials())
    }

    /// Update the view with a message
    pub fn update(&mut self, message: LoginMessage) -> Command<LoginMessage> {
        match message {
            LoginMessage::UsernameChanged(username) => {
                self.username = username;
                Command::none()
            }

            LoginMessage::PasswordChanged(password) => {
                self.password = password;
                Command::none()
            }

            LoginMessage::TogglePasswordVisibility => {
                self.show_password = !self.show_password;
                Command::none()
            }

            LoginMessage::Submit => {
                if !self.can_submit() {
                    return Command::none();
                }

                info!(username = %self.username, "submitting sign-in");
                self.state = LoginState::Submitting;

                let api = self.api.clone();
                let store = self.token_store.clone();
                let credentials = self.credentials();

                Command::perform(
                    submit_async(api, store, credentials),
                    LoginMessage::SubmitComplete,
                )
            }

            LoginMessage::SubmitComplete(result) => {
                match result {
                    Ok(()) => {
                        info!("sign-in succeeded");
                        self.state = LoginState::Complete;
                    }
                    Err(cause) => {
                        // Invalid credentials, network trouble, and server
                        // errors all surface as the same notice.
                        error!("sign-in failed: {cause}");
                        self.state = LoginState::Input;
                        self.failure = Some(FAILURE_NOTICE.to_string());
                    }
                }
                Command::none()
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<LoginMessage> {
        match self.state {
            LoginState::Complete => self.view_complete(),
            _ => self.view_form(),
        }
    }

    /// Render the sign-in form
    fn view_form(&self) -> Element<LoginMessage> {
        let header = column![
            text("Newsdesk").size(32),
            Space::with_height(Length::Fixed(8.0)),
            text("Sign in to search the knowledge base")
                .size(14)
                .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
        ]
        .align_items(Alignment::Center);

        container(
            column![
                Space::with_height(Length::Fill),
                header,
                Space::with_height(Length::Fixed(30.0)),
                self.view_username_input(),
                Space::with_height(Length::Fixed(utils::standard_spacing().into())),
                self.view_password_input(),
                Space::with_height(Length::Fixed(40.0)),
                self.view_submit_button(),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center)
            .max_width(400),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    /// Render the username input section
    fn view_username_input(&self) -> Element<LoginMessage> {
        let mut input = text_input("Enter your username", &self.username)
            .padding(utils::button_padding())
            .width(Length::Fill);

        if !self.is_submitting() {
            input = input
                .on_input(LoginMessage::UsernameChanged)
                .on_submit(LoginMessage::Submit);
        }

        column![
            text("Username").size(16),
            Space::with_height(Length::Fixed(8.0)),
            input,
        ]
        .width(Length::Fill)
        .into()
    }

    /// Render the password input section
    fn view_password_input(&self) -> Element<LoginMessage> {
        let mut input = text_input("Enter your password", &self.password)
            .secure(!self.show_password)
            .padding(utils::button_padding())
            .width(Length::Fill);

        if !self.is_submitting() {
            input = input
                .on_input(LoginMessage::PasswordChanged)
                .on_submit(LoginMessage::Submit);
        }

        let toggle = utils::password_visibility_toggle(
            self.show_password,
            LoginMessage::TogglePasswordVisibility,
        );

        column![
            text("Password").size(16),
            Space::with_height(Length::Fixed(8.0)),
            row![input, Space::with_width(Length::Fixed(10.0)), toggle]
                .align_items(Alignment::Center),
        ]
        .width(Length::Fill)
        .into()
    }

    /// Render the submit button; disabled while the form is incomplete or a
    /// request is in flight
    fn view_submit_button(&self) -> Element<LoginMessage> {
        let label = if self.is_submitting() {
            "Signing In..."
        } else {
            "Sign In"
        };

        let submit = if self.can_submit() {
            button(label)
                .on_press(LoginMessage::Submit)
                .style(button_styles::primary())
        } else {
            button(label).style(button_styles::disabled())
        };

        submit.padding(utils::button_padding()).into()
    }

    /// Render the transient signed-in screen
    fn view_complete(&self) -> Element<LoginMessage> {
        container(
            column![
                text("Signed in").size(24),
                Space::with_height(Length::Fixed(10.0)),
                text("Loading the search view...")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
            ]
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }
}

/// Run the sign-in request and install the returned token.
async fn submit_async(
    api: ApiClient,
    store: TokenStore,
    credentials: Credentials,
) -> Result<(), String> {
    let token = api.login(&credentials).await.map_err(|e| e.to_string())?;

    api.authorize(token.clone());
    if let Err(error) = store.save(&token) {
        // A token that outlives the process is a convenience, not a
        // requirement; the session keeps working either way.
        warn!("failed to persist token: {error}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> LoginView {
        let api = ApiClient::new("http://127.0.0.1:1");
        let store = TokenStore::new(std::env::temp_dir().join("newsdesk-login-test-token"));
        LoginView::new(api, store)
    }

    fn filled_view() -> LoginView {
        let mut view = view();
        let _ = view.update(LoginMessage::UsernameChanged("reader".to_string()));
        let _ = view.update(LoginMessage::PasswordChanged("secret".to_string()));
        view
    }

    #[test]
    fn new_view_cannot_submit() {
        let view = view();
        assert!(!view.can_submit());
        assert!(!view.is_submitting());
        assert!(!view.is_complete());
    }

    #[test]
    fn complete_fields_enable_submission() {
        let view = filled_view();
        assert!(view.can_submit());
    }

    #[test]
    fn submit_without_required_fields_does_nothing() {
        let mut view = view();
        let _ = view.update(LoginMessage::UsernameChanged("reader".to_string()));

        let _ = view.update(LoginMessage::Submit);
        assert!(!view.is_submitting());
    }

    #[test]
    fn submit_locks_the_form() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::Submit);

        assert!(view.is_submitting());
        assert!(!view.can_submit());
    }

    #[test]
    fn resubmit_while_pending_is_ignored() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::Submit);
        let _ = view.update(LoginMessage::Submit);

        assert!(view.is_submitting());
        assert!(!view.is_complete());
        assert!(view.take_error().is_none());
    }

    #[test]
    fn failure_returns_to_input_with_one_notice() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::Submit);
        let _ = view.update(LoginMessage::SubmitComplete(Err("401".to_string())));

        assert!(!view.is_complete());
        assert!(!view.is_submitting());

        // The notice is generic and is produced exactly once.
        let notice = view.take_error();
        assert_eq!(notice.as_deref(), Some(FAILURE_NOTICE));
        assert!(view.take_error().is_none());
    }

    #[test]
    fn success_completes_exactly_once() {
        let mut view = filled_view();
        let _ = view.update(LoginMessage::Submit);
        let _ = view.update(LoginMessage::SubmitComplete(Ok(())));

        assert!(view.is_complete());
        assert!(view.take_error().is_none());
    }

    #[test]
    fn password_visibility_toggles() {
        let mut view = view();
        assert!(!view.show_password);

        let _ = view.update(LoginMessage::TogglePasswordVisibility);
        assert!(view.show_password);

        let _ = view.update(LoginMessage::TogglePasswordVisibility);
        assert!(!view.show_password);
    }
}
