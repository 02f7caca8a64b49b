//! Newsdesk Linux Frontend
//!
//! Native desktop client for the Newsdesk news knowledge base, built with the
//! Iced GUI framework. The application signs in against the backend service
//! and provides semantic search over the indexed articles.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use iced::{Application, Command, Element, Length, Settings, Subscription, Theme};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod ui;

use newsdesk_shared::config::paths;
use newsdesk_shared::{ApiClient, AppConfig, ConfigManager, TokenStore};

use ui::components::toast::{render_toast_overlay, ToastManager};
use ui::theme;
use ui::views::login::{LoginMessage, LoginView};
use ui::views::search::{SearchMessage, SearchView};

/// Command-line options
#[derive(Debug, Parser)]
#[command(
    name = "newsdesk",
    version,
    about = "Desktop client for the Newsdesk knowledge base"
)]
struct Args {
    /// Path to an alternate configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured server base URL
    #[arg(long, value_name = "URL")]
    server: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Startup inputs resolved before the GUI launches
#[derive(Debug, Clone)]
pub struct AppFlags {
    config_path: PathBuf,
    server_override: Option<String>,
}

/// Result of asynchronous startup: configuration plus any persisted token
#[derive(Debug, Clone)]
pub struct Bootstrap {
    config: AppConfig,
    stored_token: Option<String>,
}

/// Main application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// Startup finished (or failed)
    BootstrapLoaded(Result<Bootstrap, String>),

    /// Login view messages
    Login(LoginMessage),

    /// Search view messages
    Search(SearchMessage),

    /// Toast management
    ToastTick,
    DismissToast(usize),
}

/// Application state
#[derive(Debug)]
enum AppState {
    Loading,
    LoginActive(LoginView),
    MainInterface(SearchView),
    Error(String),
}

/// Main application structure
pub struct NewsdeskApp {
    state: AppState,
    api: Option<ApiClient>,
    token_store: TokenStore,
    toasts: ToastManager,
    theme: Theme,
}

impl Application for NewsdeskApp {
    type Message = Message;
    type Theme = Theme;
    type Executor = iced::executor::Default;
    type Flags = AppFlags;

    fn new(flags: AppFlags) -> (Self, Command<Message>) {
        info!("Initializing Newsdesk frontend");

        let token_store = TokenStore::default_location();
        let app = Self {
            state: AppState::Loading,
            api: None,
            token_store: token_store.clone(),
            toasts: ToastManager::new(),
            theme: ui::create_newsdesk_theme(),
        };

        let bootstrap = Command::perform(
            bootstrap_async(flags.config_path, flags.server_override, token_store),
            Message::BootstrapLoaded,
        );

        (app, bootstrap)
    }

    fn title(&self) -> String {
        match &self.state {
            AppState::Loading => "Newsdesk - Loading...".to_string(),
            AppState::LoginActive(_) => "Newsdesk - Sign In".to_string(),
            AppState::MainInterface(_) => "Newsdesk".to_string(),
            AppState::Error(_) => "Newsdesk - Error".to_string(),
        }
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match message {
            Message::BootstrapLoaded(Ok(bootstrap)) => {
                let server = &bootstrap.config.server;
                let api = ApiClient::with_timeout(
                    &server.base_url,
                    Duration::from_secs(server.timeout_seconds),
                );

                if let Some(token) = bootstrap.stored_token {
                    info!("restored saved credential token");
                    api.authorize(token);
                }

                info!(server = %server.base_url, "configuration loaded, showing sign-in");
                self.state =
                    AppState::LoginActive(LoginView::new(api.clone(), self.token_store.clone()));
                self.api = Some(api);
                Command::none()
            }

            Message::BootstrapLoaded(Err(message)) => {
                error!("startup failed: {message}");
                self.state = AppState::Error(message);
                Command::none()
            }

            Message::Login(login_msg) => {
                let (command, failure, complete) =
                    if let AppState::LoginActive(view) = &mut self.state {
                        let command = view.update(login_msg).map(Message::Login);
                        (command, view.take_error(), view.is_complete())
                    } else {
                        return Command::none();
                    };

                if let Some(notice) = failure {
                    self.toasts.error(notice);
                }

                if complete {
                    if let Some(api) = &self.api {
                        info!("signed in, showing search");
                        self.toasts.success("Signed in");
                        self.state = AppState::MainInterface(SearchView::new(api.clone()));
                    }
                }

                command
            }

            Message::Search(search_msg) => {
                if let AppState::MainInterface(view) = &mut self.state {
                    view.update(search_msg).map(Message::Search)
                } else {
                    Command::none()
                }
            }

            Message::ToastTick => {
                self.toasts.remove_expired_toasts();
                Command::none()
            }

            Message::DismissToast(id) => {
                self.toasts.remove_toast(id);
                Command::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let content = match &self.state {
            AppState::Loading => self.view_loading(),
            AppState::LoginActive(view) => view.view().map(Message::Login),
            AppState::MainInterface(view) => view.view().map(Message::Search),
            AppState::Error(message) => self.view_error(message),
        };

        render_toast_overlay(&self.toasts, content, Message::DismissToast)
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.toasts.has_toasts() {
            iced::time::every(Duration::from_millis(250)).map(|_| Message::ToastTick)
        } else {
            Subscription::none()
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

impl NewsdeskApp {
    /// View loading screen
    fn view_loading(&self) -> Element<Message> {
        use iced::widget::{column, container, text, Space};
        use iced::Alignment;

        container(
            column![
                Space::with_height(Length::Fill),
                text("Loading Newsdesk...").size(24),
                Space::with_height(Length::Fixed(20.0)),
                text("Reading configuration...")
                    .size(14)
                    .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }

    /// View error screen for unrecoverable startup failures
    fn view_error<'a>(&'a self, message: &'a str) -> Element<'a, Message> {
        use iced::widget::{column, container, text, Space};
        use iced::Alignment;

        container(
            column![
                Space::with_height(Length::Fill),
                text("Something went wrong")
                    .size(28)
                    .style(iced::theme::Text::Color(theme::ERROR_RED)),
                Space::with_height(Length::Fixed(20.0)),
                text(message).size(14),
                Space::with_height(Length::Fixed(10.0)),
                text("Fix the configuration and restart the application.")
                    .size(12)
                    .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                Space::with_height(Length::Fill),
            ]
            .align_items(Alignment::Center)
            .max_width(500),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x()
        .center_y()
        .into()
    }
}

/// Load configuration and any persisted token before showing the first view.
async fn bootstrap_async(
    config_path: PathBuf,
    server_override: Option<String>,
    token_store: TokenStore,
) -> Result<Bootstrap, String> {
    let mut manager = ConfigManager::new(config_path);
    manager
        .load()
        .map_err(|e| format!("failed to load configuration: {e}"))?;

    let mut config = manager.config().clone();
    if let Some(url) = server_override {
        config.server.base_url = url;
    }
    config.validate().map_err(|e| e.to_string())?;

    let stored_token = match token_store.load() {
        Ok(token) => token,
        Err(error) => {
            warn!("failed to read stored token: {error}");
            None
        }
    };

    Ok(Bootstrap {
        config,
        stored_token,
    })
}

fn main() -> iced::Result {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        tracing_subscriber::filter::LevelFilter::DEBUG
    } else {
        tracing_subscriber::filter::LevelFilter::INFO
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_level(true),
        )
        .with(level)
        .init();

    info!("Starting Newsdesk frontend");

    let flags = AppFlags {
        config_path: args.config.unwrap_or_else(paths::config_file),
        server_override: args.server,
    };

    // Configure application settings
    let settings = Settings {
        window: iced::window::Settings {
            size: iced::Size::new(1000.0, 700.0),
            min_size: Some(iced::Size::new(800.0, 600.0)),
            position: iced::window::Position::Centered,
            ..Default::default()
        },
        antialiasing: true,
        ..Settings::with_flags(flags)
    };

    NewsdeskApp::run(settings)
}
