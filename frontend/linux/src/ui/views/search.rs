//! Search View
//!
//! Free-text semantic search over the knowledge base. Each search replaces
//! the displayed results with whatever the server returns. Requests are not
//! serialized: starting a new search does not cancel the previous one, so a
//! slow older response can still overwrite a newer result set.

use iced::widget::{column, container, row, scrollable, text, text_input, Space};
use iced::{Alignment, Command, Element, Length};
use tracing::{debug, error, info};

use newsdesk_shared::{snippet, ApiClient, SearchHit, SearchRequest};

use crate::ui::components::button::{primary_button, secondary_button};
use crate::ui::theme::{self, container_styles, utils};

/// Messages for the search view
#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// Search query changed
    QueryChanged(String),
    /// Clear the query field
    Clear,
    /// Run the search
    Submit,
    /// A search request finished
    ResultsLoaded(Result<Vec<SearchHit>, String>),
}

/// A hit prepared for display
#[derive(Debug, Clone)]
pub struct ResultRow {
    pub hit: SearchHit,
    /// Snippet reduced to plain text; the server markup is never rendered
    pub snippet_text: String,
}

impl ResultRow {
    fn from_hit(hit: SearchHit) -> Self {
        let snippet_text = snippet::plain_text(&hit.snippet);
        Self { hit, snippet_text }
    }
}

/// Search view component
#[derive(Debug)]
pub struct SearchView {
    api: ApiClient,
    query: String,
    rows: Vec<ResultRow>,
    has_searched: bool,
}

impl SearchView {
    /// Create a new search view
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            query: String::new(),
            rows: Vec::new(),
            has_searched: false,
        }
    }

    /// Current result rows, in server order
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Update the view with a message
    pub fn update(&mut self, message: SearchMessage) -> Command<SearchMessage> {
        match message {
            SearchMessage::QueryChanged(query) => {
                self.query = query;
                Command::none()
            }

            SearchMessage::Clear => {
                self.query.clear();
                Command::none()
            }

            SearchMessage::Submit => {
                debug!(query = %self.query, "search requested");

                let api = self.api.clone();
                let request = SearchRequest::new(self.query.clone());

                Command::perform(search_async(api, request), SearchMessage::ResultsLoaded)
            }

            SearchMessage::ResultsLoaded(result) => {
                match result {
                    Ok(hits) => {
                        info!("search returned {} results", hits.len());
                        self.rows = hits.into_iter().map(ResultRow::from_hit).collect();
                        self.has_searched = true;
                    }
                    Err(cause) => {
                        // No error state exists here; the previous results
                        // stay on screen and the cause goes to the log.
                        error!("search failed: {cause}");
                    }
                }
                Command::none()
            }
        }
    }

    /// Render the view
    pub fn view(&self) -> Element<SearchMessage> {
        let content = column![
            Space::with_height(Length::Fixed(20.0)),
            self.view_search_bar(),
            Space::with_height(Length::Fixed(utils::standard_spacing().into())),
            self.view_results(),
        ]
        .padding([0, 30, 30, 30])
        .spacing(10);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Render the search bar
    fn view_search_bar(&self) -> Element<SearchMessage> {
        row![
            text_input("Search the knowledge base...", &self.query)
                .on_input(SearchMessage::QueryChanged)
                .on_submit(SearchMessage::Submit)
                .width(Length::FillPortion(3))
                .padding([8, 12]),
            Space::with_width(Length::Fixed(10.0)),
            primary_button("Search", Some(SearchMessage::Submit)),
            Space::with_width(Length::Fixed(10.0)),
            secondary_button(
                "Clear",
                (!self.query.is_empty()).then_some(SearchMessage::Clear)
            ),
        ]
        .align_items(Alignment::Center)
        .into()
    }

    /// Render the result list or an empty state
    fn view_results(&self) -> Element<SearchMessage> {
        if self.rows().is_empty() {
            return if self.has_searched {
                column![
                    Space::with_height(Length::Fixed(50.0)),
                    text("No results found")
                        .size(16)
                        .style(iced::theme::Text::Color(theme::DISABLED_TEXT)),
                    text("Try different search terms")
                        .size(14)
                        .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                ]
                .align_items(Alignment::Center)
                .width(Length::Fill)
                .into()
            } else {
                column![
                    Space::with_height(Length::Fixed(50.0)),
                    text("Search the knowledge base")
                        .size(16)
                        .style(iced::theme::Text::Color(theme::DISABLED_TEXT)),
                    text("Results appear here, ranked by relevance")
                        .size(14)
                        .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                ]
                .align_items(Alignment::Center)
                .width(Length::Fill)
                .into()
            };
        }

        let result_items: Vec<Element<SearchMessage>> =
            self.rows.iter().map(|row| self.view_result_row(row)).collect();

        scrollable(column(result_items).spacing(10).padding([10, 0]))
            .height(Length::Fill)
            .into()
    }

    /// Render a single result entry
    fn view_result_row(&self, result: &ResultRow) -> Element<SearchMessage> {
        container(
            column![
                row![
                    text(&result.hit.title)
                        .size(16)
                        .style(iced::theme::Text::Color(theme::DARK_TEXT))
                        .width(Length::Fill),
                    container(text(result.hit.score_display()).size(12))
                        .padding([2, 8])
                        .style(container_styles::score_badge()),
                ]
                .align_items(Alignment::Center),
                Space::with_height(Length::Fixed(4.0)),
                text(&result.hit.source)
                    .size(12)
                    .style(iced::theme::Text::Color(theme::LIGHT_GRAY_TEXT)),
                Space::with_height(Length::Fixed(8.0)),
                text(&result.snippet_text).size(13),
            ]
            .spacing(2),
        )
        .padding(15)
        .width(Length::Fill)
        .style(container_styles::result_card())
        .into()
    }
}

/// Run a search request.
async fn search_async(api: ApiClient, request: SearchRequest) -> Result<Vec<SearchHit>, String> {
    api.search(&request).await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> SearchView {
        SearchView::new(ApiClient::new("http://127.0.0.1:1"))
    }

    fn hit(id: &str, title: &str, snippet: &str) -> SearchHit {
        SearchHit {
            id: id.to_string(),
            title: title.to_string(),
            source: "doc1".to_string(),
            score: 0.842,
            snippet: snippet.to_string(),
        }
    }

    #[test]
    fn query_edits_are_tracked() {
        let mut view = view();
        let _ = view.update(SearchMessage::QueryChanged("rust".to_string()));
        assert_eq!(view.query, "rust");

        let _ = view.update(SearchMessage::Clear);
        assert!(view.query.is_empty());
    }

    #[test]
    fn results_replace_previous_rows() {
        let mut view = view();

        let _ = view.update(SearchMessage::ResultsLoaded(Ok(vec![
            hit("1", "A", ""),
            hit("2", "B", ""),
        ])));
        assert_eq!(view.rows().len(), 2);

        let _ = view.update(SearchMessage::ResultsLoaded(Ok(vec![hit("3", "C", "")])));
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].hit.title, "C");
    }

    #[test]
    fn empty_results_clear_the_list() {
        let mut view = view();
        let _ = view.update(SearchMessage::ResultsLoaded(Ok(vec![hit("1", "A", "")])));
        let _ = view.update(SearchMessage::ResultsLoaded(Ok(Vec::new())));

        assert!(view.rows().is_empty());
        assert!(view.has_searched);
    }

    #[test]
    fn failed_search_leaves_rows_untouched() {
        let mut view = view();
        let _ = view.update(SearchMessage::ResultsLoaded(Ok(vec![hit("1", "A", "")])));

        let _ = view.update(SearchMessage::ResultsLoaded(Err("boom".to_string())));
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn snippets_are_reduced_to_plain_text() {
        let mut view = view();
        let _ = view.update(SearchMessage::ResultsLoaded(Ok(vec![hit(
            "1",
            "A",
            "<b>hi</b> there",
        )])));

        assert_eq!(view.rows()[0].snippet_text, "hi there");
        assert_eq!(view.rows()[0].hit.score_display(), "0.842");
    }
}
