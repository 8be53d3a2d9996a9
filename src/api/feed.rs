//! Fetch lifecycle: the newest location update supersedes in-flight requests

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::core::GeoPoint;

use super::client::PlacesClient;
use super::types::Place;

/// Publishes the latest nearby-places result set for a moving user
///
/// Each location update starts a fresh fetch and cancels the one still in
/// flight. Results are published on a watch channel; a superseded fetch never
/// overwrites a newer one, even if it completes after the cancellation.
pub struct PlacesFeed<C: PlacesClient + 'static> {
    client: Arc<C>,
    sender: watch::Sender<Vec<Place>>,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<CancellationToken>>,
}

impl<C: PlacesClient + 'static> PlacesFeed<C> {
    pub fn new(client: Arc<C>) -> Self {
        let (sender, _receiver) = watch::channel(Vec::new());
        Self {
            client,
            sender,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Subscribe to result-set updates; the initial value is empty
    pub fn subscribe(&self) -> watch::Receiver<Vec<Place>> {
        self.sender.subscribe()
    }

    /// Start a fetch for `origin`, superseding any fetch still in flight
    pub async fn refresh(&self, origin: GeoPoint) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();

        {
            let mut in_flight = self.in_flight.lock().await;
            if let Some(previous) = in_flight.replace(token.clone()) {
                previous.cancel();
            }
        }

        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();
        let latest = Arc::clone(&self.generation);
        tokio::spawn(async move {
            let places = tokio::select! {
                biased;
                _ = token.cancelled() => {
                    debug!(generation, "Nearby fetch superseded before completion");
                    return;
                }
                places = client.fetch_nearby(origin) => places,
            };
            // A fetch racing past its cancellation still must not publish
            // over a newer generation.
            if latest.load(Ordering::SeqCst) == generation {
                let _ = sender.send(places);
            } else {
                debug!(generation, "Dropping stale nearby fetch result");
            }
        });
    }

    /// Cancel any fetch still in flight without starting a new one
    pub async fn cancel_in_flight(&self) {
        let mut in_flight = self.in_flight.lock().await;
        if let Some(token) = in_flight.take() {
            token.cancel();
        }
    }
}
