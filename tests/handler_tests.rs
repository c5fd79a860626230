//! Request handler tests: all three event shapes against the full engine,
//! plus the fixed envelope contract for every status code.

use std::collections::HashMap;
use std::io::Cursor;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{GrayImage, Luma};
use qrcode::QrCode;
use serde_json::{Value, json};

use barscan::Engine;
use barscan::error::StorageError;
use barscan::handler::{Handler, RequestContext, Response};
use barscan::storage::ObjectStore;

/// In-memory object store keyed by (bucket, key).
struct MapStore {
    objects: HashMap<(String, String), Vec<u8>>,
}

impl MapStore {
    fn empty() -> Self {
        Self {
            objects: HashMap::new(),
        }
    }

    fn with(bucket: &str, key: &str, bytes: Vec<u8>) -> Self {
        let mut objects = HashMap::new();
        objects.insert((bucket.to_string(), key.to_string()), bytes);
        Self { objects }
    }
}

impl ObjectStore for MapStore {
    fn fetch(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        self.objects
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound {
                bucket: bucket.to_string(),
                key: key.to_string(),
            })
    }
}

fn qr_png(content: &str) -> Vec<u8> {
    let gray = QrCode::new(content.as_bytes())
        .unwrap()
        .render::<Luma<u8>>()
        .min_dimensions(250, 250)
        .build();
    let mut bytes = Vec::new();
    gray.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn blank_png() -> Vec<u8> {
    let gray = GrayImage::from_pixel(40, 40, Luma([255]));
    let mut bytes = Vec::new();
    gray.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

fn handler_with(store: MapStore) -> Handler {
    Handler::new(Engine::new(), Box::new(store))
}

fn ctx() -> RequestContext {
    RequestContext::new("11111111-2222-3333-4444-555555555555")
}

fn body_of(response: &Response) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

fn assert_enveloped_headers(response: &Response) {
    let headers = response.headers.as_ref().expect("headers present");
    assert_eq!(headers.get("Content-Type").unwrap(), "application/json");
    assert_eq!(headers.get("Access-Control-Allow-Origin").unwrap(), "*");
}

#[test]
fn test_base64_body_event_succeeds() {
    let content = "order-4711";
    let event = json!({
        "body": BASE64.encode(qr_png(content)),
        "isBase64Encoded": true,
    });

    let response = handler_with(MapStore::empty()).handle(&event, &ctx());
    assert_eq!(response.status_code, 200);
    assert_enveloped_headers(&response);

    let body = body_of(&response);
    assert_eq!(body["success"], Value::Bool(true));
    assert_eq!(body["data"]["barcodeValue"], content);
    assert_eq!(body["data"]["barcodeType"], "QRCODE");
    let confidence = body["data"]["confidence"].as_f64().unwrap();
    assert!(confidence > 0.0 && confidence <= 1.0);
    assert_eq!(body["requestId"], "11111111-2222-3333-4444-555555555555");
}

#[test]
fn test_stored_object_event_succeeds() {
    let content = "stored-object-content";
    let store = MapStore::with("uploads", "scans/today.png", qr_png(content));
    let event = json!({
        "Records": [{
            "eventSource": "aws:s3",
            "s3": {
                "bucket": {"name": "uploads"},
                "object": {"key": "scans/today.png"}
            }
        }]
    });

    let response = handler_with(store).handle(&event, &ctx());
    assert_eq!(response.status_code, 200);
    assert_eq!(body_of(&response)["data"]["barcodeValue"], content);
}

#[test]
fn test_bare_image_event_succeeds() {
    let content = "bare-image-field";
    let event = json!({"image": BASE64.encode(qr_png(content))});

    let response = handler_with(MapStore::empty()).handle(&event, &ctx());
    assert_eq!(response.status_code, 200);
    assert_eq!(body_of(&response)["data"]["barcodeValue"], content);
}

#[test]
fn test_symbol_free_image_maps_to_404() {
    let event = json!({"image": BASE64.encode(blank_png())});
    let response = handler_with(MapStore::empty()).handle(&event, &ctx());

    assert_eq!(response.status_code, 404);
    assert_enveloped_headers(&response);
    let body = body_of(&response);
    assert_eq!(body["success"], Value::Bool(false));
    assert_eq!(body["error"]["code"], "BARCODE_NOT_FOUND");
    assert_eq!(
        body["error"]["message"],
        "No barcode could be detected in the provided image"
    );
}

#[test]
fn test_corrupt_payload_maps_to_500() {
    let event = json!({"image": BASE64.encode(b"these are not pixels")});
    let response = handler_with(MapStore::empty()).handle(&event, &ctx());

    assert_eq!(response.status_code, 500);
    assert_enveloped_headers(&response);
    let body = body_of(&response);
    assert_eq!(body["error"]["code"], "PROCESSING_ERROR");
    assert_eq!(
        body["error"]["message"],
        "An error occurred while processing the image"
    );
}

#[test]
fn test_store_failure_maps_to_500_not_404() {
    // Missing object is a processing failure; 404 is reserved for "valid
    // image, no barcode"
    let event = json!({
        "Records": [{
            "eventSource": "aws:s3",
            "s3": {"bucket": {"name": "uploads"}, "object": {"key": "never-uploaded.png"}}
        }]
    });
    let response = handler_with(MapStore::empty()).handle(&event, &ctx());
    assert_eq!(response.status_code, 500);
    assert_eq!(body_of(&response)["error"]["code"], "PROCESSING_ERROR");
}

#[test]
fn test_unrecognized_shape_maps_to_bare_400() {
    let response = handler_with(MapStore::empty()).handle(&json!({}), &ctx());
    assert_eq!(response.status_code, 400);
    assert!(response.headers.is_none());
    assert_eq!(body_of(&response), json!({"error": "Invalid input format"}));
}

#[test]
fn test_each_response_echoes_the_request_id() {
    let handler = handler_with(MapStore::empty());
    let ctx = RequestContext::new("echo-me");

    let not_found = handler.handle(&json!({"image": BASE64.encode(blank_png())}), &ctx);
    assert_eq!(body_of(&not_found)["requestId"], "echo-me");

    let failed = handler.handle(&json!({"image": "%%%"}), &ctx);
    assert_eq!(body_of(&failed)["requestId"], "echo-me");
}
