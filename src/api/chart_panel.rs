use tracing::{debug, warn};

use crate::core::PriceHistory;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, StatusEvent, Theme};

pub const DEFAULT_PLACEHOLDER: &str = "Price Chart Will Appear Here\n\n\
     Select a cryptocurrency from the table\n\
     to view its price chart.";

/// What the panel currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPanelContent<'a> {
    Placeholder(&'a str),
    Chart,
}

/// Ticket for one in-flight history fetch. Only the most recently issued
/// ticket may update the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRequest(u64);

/// Host-facing chart view: owns the engine and falls back to placeholder
/// text until a history has been loaded successfully.
pub struct ChartPanel<R: Renderer> {
    engine: ChartEngine<R>,
    placeholder: Option<String>,
    latest_request: u64,
}

impl<R: Renderer> ChartPanel<R> {
    #[must_use]
    pub fn new(engine: ChartEngine<R>) -> Self {
        Self {
            engine,
            placeholder: Some(DEFAULT_PLACEHOLDER.to_owned()),
            latest_request: 0,
        }
    }

    #[must_use]
    pub fn content(&self) -> ChartPanelContent<'_> {
        match &self.placeholder {
            Some(text) => ChartPanelContent::Placeholder(text),
            None => ChartPanelContent::Chart,
        }
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine<R> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ChartEngine<R> {
        &mut self.engine
    }

    #[must_use]
    pub fn into_engine(self) -> ChartEngine<R> {
        self.engine
    }

    /// Starts a history request, superseding any request still in flight.
    pub fn begin_loading(&mut self, coin_name: &str) -> (HistoryRequest, StatusEvent) {
        self.latest_request += 1;
        debug!(coin = coin_name, request = self.latest_request, "loading chart history");
        (
            HistoryRequest(self.latest_request),
            StatusEvent::info(format!("Loading 7-day chart for {coin_name}...")),
        )
    }

    #[must_use]
    pub fn is_current(&self, request: HistoryRequest) -> bool {
        request.0 == self.latest_request
    }

    /// Applies the result of `request`, or drops it when a newer request has
    /// been started since.
    pub fn apply_requested_history(
        &mut self,
        request: HistoryRequest,
        coin_name: &str,
        history: Option<PriceHistory>,
    ) -> Option<StatusEvent> {
        if !self.is_current(request) {
            debug!(coin = coin_name, request = request.0, "dropping stale chart history");
            return None;
        }
        Some(self.apply_history(coin_name, history))
    }

    /// Applies a history fetch result; `None` means the source had nothing.
    pub fn apply_history(&mut self, coin_name: &str, history: Option<PriceHistory>) -> StatusEvent {
        let result = history.ok_or_else(|| {
            ChartError::SourceUnavailable(format!("no history returned for {coin_name}"))
        });
        self.apply_history_result(coin_name, result)
    }

    pub fn apply_history_result(
        &mut self,
        coin_name: &str,
        history: ChartResult<PriceHistory>,
    ) -> StatusEvent {
        match history {
            Ok(history) => {
                self.engine.set_history(history, coin_name);
                self.placeholder = None;
                StatusEvent::success(format!("Loaded 7-day chart for {coin_name}"))
            }
            Err(err) => {
                warn!(coin = coin_name, error = %err, "chart history unavailable");
                self.placeholder = Some(format!(
                    "Unable to load chart data for {coin_name}.\n\nPlease try again later."
                ));
                StatusEvent::error(format!("Failed to load chart for {coin_name}"))
            }
        }
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.engine.set_theme(theme);
    }

    pub fn toggle_theme(&mut self) -> StatusEvent {
        let theme = self.engine.toggle_theme();
        let name = if theme.is_dark() { "dark" } else { "light" };
        StatusEvent::info(format!("Switched to {name} theme"))
    }
}
