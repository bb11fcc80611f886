//! Weather backend: async city lookup.
//! All network work runs off the UI loop; results are sent back over a channel.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;
use weather_now_meteo::{LookupError, WeatherLookup, WeatherSnapshot};

/// Messages sent from async operations back to the UI loop
#[derive(Debug)]
pub enum WeatherServiceMessage {
    /// Result of the lookup started with `generation`
    SearchDone {
        generation: u64,
        result: Result<WeatherSnapshot, LookupError>,
    },
}

/// One submitted search. Issued by the model, consumed by `request_search`.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
    pub cancel: CancellationToken,
}

/// Run a lookup in the background.
/// Sends `SearchDone` on the channel when complete; sends nothing if cancelled first.
pub fn request_search(
    tx: &UnboundedSender<WeatherServiceMessage>,
    lookup: Arc<WeatherLookup>,
    ticket: SearchTicket,
) -> tokio::task::JoinHandle<()> {
    let tx = tx.clone();

    tokio::spawn(async move {
        let SearchTicket {
            generation,
            query,
            cancel,
        } = ticket;

        let result = tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Search #{} for {:?} cancelled", generation, query);
                return;
            }
            result = lookup.search(&query) => result,
        };

        match &result {
            Ok(snapshot) => tracing::info!("Search #{} loaded {}", generation, snapshot.city),
            Err(e) => tracing::error!("Error fetching weather data: {}", e),
        }

        let _ = tx.send(WeatherServiceMessage::SearchDone { generation, result });
    })
}
