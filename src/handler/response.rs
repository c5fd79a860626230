use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::json;

use crate::models::Detection;

/// Error code on the 404 body
pub const CODE_NOT_FOUND: &str = "BARCODE_NOT_FOUND";
/// Error code on the 500 body
pub const CODE_PROCESSING: &str = "PROCESSING_ERROR";

const NOT_FOUND_MESSAGE: &str = "No barcode could be detected in the provided image";
const PROCESSING_MESSAGE: &str = "An error occurred while processing the image";
const INVALID_INPUT_MESSAGE: &str = "Invalid input format";

/// Identity of one invocation, supplied by the caller and echoed back as
/// `requestId` on every enveloped response.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlates the response with the invocation
    pub request_id: String,
}

impl RequestContext {
    /// Create a context with the given request id
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

/// Proxy-style HTTP response: a status code, optional headers, and a
/// JSON-encoded string body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    /// HTTP status code
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// Response headers; the bare 400 shape carries none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    /// JSON-encoded body
    pub body: String,
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Access-Control-Allow-Origin".to_string(), "*".to_string()),
    ])
}

impl Response {
    /// 200 with the winning value, symbology, and confidence
    pub fn success(detection: &Detection, ctx: &RequestContext) -> Self {
        let body = json!({
            "success": true,
            "data": {
                "barcodeValue": detection.value,
                "barcodeType": detection.symbology,
                "confidence": detection.confidence,
            },
            "requestId": ctx.request_id,
        });
        Self {
            status_code: 200,
            headers: Some(default_headers()),
            body: body.to_string(),
        }
    }

    /// 404: the image was valid but no barcode could be read
    pub fn not_found(ctx: &RequestContext) -> Self {
        Self::error_envelope(404, CODE_NOT_FOUND, NOT_FOUND_MESSAGE, ctx)
    }

    /// 500: something failed while fetching or scanning; no detail leaks
    pub fn processing_error(ctx: &RequestContext) -> Self {
        Self::error_envelope(500, CODE_PROCESSING, PROCESSING_MESSAGE, ctx)
    }

    /// 400: the request matched none of the accepted shapes
    pub fn invalid_input() -> Self {
        Self {
            status_code: 400,
            headers: None,
            body: json!({"error": INVALID_INPUT_MESSAGE}).to_string(),
        }
    }

    fn error_envelope(status: u16, code: &str, message: &str, ctx: &RequestContext) -> Self {
        let body = json!({
            "success": false,
            "error": {"code": code, "message": message},
            "requestId": ctx.request_id,
        });
        Self {
            status_code: status,
            headers: Some(default_headers()),
            body: body.to_string(),
        }
    }
}
