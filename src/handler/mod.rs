//! Request handling: a JSON event in, a fixed JSON envelope out.
//!
//! The handler is stateless per invocation and never panics on malformed
//! input. "No barcode" and "processing failed" travel as different typed
//! outcomes and map to 404 and 500 respectively; they are never inferred
//! from one another.

pub mod event;
pub mod response;

pub use event::Event;
pub use response::{RequestContext, Response};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde_json::Value;
use tracing::{debug, warn};

use crate::engine::Engine;
use crate::error::ProcessingError;
use crate::models::Detection;
use crate::storage::ObjectStore;

/// Stateless request handler owning the detection engine and the object
/// store it resolves stored-object events against.
pub struct Handler {
    engine: Engine,
    store: Box<dyn ObjectStore>,
}

impl Handler {
    /// Create a handler from an engine and an object store
    pub fn new(engine: Engine, store: Box<dyn ObjectStore>) -> Self {
        Self { engine, store }
    }

    /// Process one request and produce the response envelope.
    ///
    /// Mapping: unrecognized shape → 400, winner → 200, valid image with
    /// no barcode → 404, any fetch/decode/scan failure → 500.
    pub fn handle(&self, request: &Value, ctx: &RequestContext) -> Response {
        let Some(event) = Event::classify(request) else {
            debug!(request_id = %ctx.request_id, "unrecognized request shape");
            return Response::invalid_input();
        };

        match self.run(&event) {
            Ok(Some(detection)) => Response::success(&detection, ctx),
            Ok(None) => Response::not_found(ctx),
            Err(err) => {
                warn!(request_id = %ctx.request_id, error = %err, "request processing failed");
                Response::processing_error(ctx)
            }
        }
    }

    fn run(&self, event: &Event) -> Result<Option<Detection>, ProcessingError> {
        let bytes = self.acquire_bytes(event)?;
        Ok(self.engine.detect_bytes(&bytes)?)
    }

    fn acquire_bytes(&self, event: &Event) -> Result<Vec<u8>, ProcessingError> {
        match event {
            Event::InlineImage { data } => Ok(BASE64.decode(data)?),
            Event::StoredObject { bucket, key } => Ok(self.store.fetch(bucket, key)?),
        }
    }
}
