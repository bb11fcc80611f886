use tokio_util::sync::CancellationToken;
use weather_now_core::InputError;
use weather_now_meteo::WeatherSnapshot;

use crate::error_mapping::IntoAppError;
use crate::form::SearchForm;
use crate::services::{SearchTicket, WeatherServiceMessage};

/// What the result area shows. Exactly one of these at a time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Failed(String),
    Loaded(WeatherSnapshot),
}

impl ViewState {
    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        match self {
            ViewState::Loaded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

/// Form, displayed result and the bookkeeping for the search in flight.
#[derive(Debug, Default)]
pub struct WeatherModel {
    pub form: SearchForm,
    view: ViewState,
    generation: u64,
    pending: Option<u64>,
    cancel: Option<CancellationToken>,
}

impl WeatherModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Submit the form.
    ///
    /// A blank query fails immediately and returns `None`; nothing should be
    /// requested. Otherwise the previous search (if any) is cancelled and a
    /// ticket for the new one is returned.
    pub fn submit(&mut self) -> Option<SearchTicket> {
        self.cancel_pending();

        if self.form.is_blank() {
            let err: weather_now_core::AppError = InputError::EmptyQuery.into();
            tracing::debug!("Rejected submit: {}", err);
            self.view = ViewState::Failed(err.user_message().to_string());
            return None;
        }

        self.generation += 1;
        let cancel = CancellationToken::new();
        self.pending = Some(self.generation);
        self.cancel = Some(cancel.clone());

        tracing::info!(
            "Search #{} submitted for {:?}",
            self.generation,
            self.form.query()
        );

        Some(SearchTicket {
            generation: self.generation,
            query: self.form.query().to_string(),
            cancel,
        })
    }

    /// Apply a finished lookup. Returns `false` when the result belongs to a
    /// superseded search and was discarded.
    pub fn apply(&mut self, message: WeatherServiceMessage) -> bool {
        match message {
            WeatherServiceMessage::SearchDone { generation, result } => {
                if self.pending != Some(generation) {
                    tracing::debug!(
                        "Discarding stale result #{} (pending: {:?})",
                        generation,
                        self.pending
                    );
                    return false;
                }

                self.pending = None;
                self.cancel = None;
                self.view = match result {
                    Ok(snapshot) => ViewState::Loaded(snapshot),
                    Err(e) => {
                        let app_err = e.into_app_error();
                        ViewState::Failed(app_err.user_message().to_string())
                    }
                };
                true
            }
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.pending = None;
    }
}
