//! Server-Sent Events (SSE) Handler
//!
//! Streams collection lifecycle events to connected observers in real
//! time. Events are received from the event bus and forwarded to every
//! connected SSE client as JSON with a `type` discriminator.
//!
//! Delivery is best-effort and per-connection stateless: a client that
//! disconnects misses the events fired while it was away and is expected
//! to reconnect and reconcile with one `GET /api/status` read. Nothing is
//! buffered or replayed.
//!
//! ## Usage
//!
//! Connect to `/api/events` with an EventSource client:
//!
//! ```javascript
//! const events = new EventSource('/api/events');
//! events.addEventListener('collection_completed', (e) => {
//!     console.log('Collection done:', JSON.parse(e.data));
//! });
//! ```

use futures::StreamExt;
use rocket::response::stream::{Event, EventStream};
use rocket::{State, get};
use std::sync::Arc;
use tracing::{debug, warn};

use super::handlers::ApiState;

/// SSE event stream handler
///
/// Subscribes to the event bus and forwards each collection lifecycle
/// event to the connected client.
#[get("/events")]
pub async fn events_stream(state: &State<ApiState>) -> EventStream![] {
    let event_bus = Arc::clone(&state.event_bus);

    EventStream! {
        let mut event_stream = match event_bus.subscribe_events().await {
            Ok(stream) => stream,
            Err(e) => {
                warn!("Failed to subscribe to events: {}", e);
                yield Event::data(format!("Failed to subscribe: {}", e))
                    .event("error");
                return;
            }
        };

        debug!("SSE client connected, streaming events");

        while let Some(event) = event_stream.next().await {
            let event_name = event.name();
            let event_data = match serde_json::to_string(&event) {
                Ok(data) => data,
                Err(e) => {
                    warn!("Failed to serialize event: {}", e);
                    continue;
                }
            };

            debug!("Sending SSE event: {}", event_name);
            yield Event::data(event_data).event(event_name);
        }

        debug!("SSE event stream closed");
    }
}
