use serde::Deserialize;
use serde_json::Value;

/// A classified request: where the image bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Base64-encoded image carried inline in the request
    InlineImage {
        /// The base64 payload
        data: String,
    },
    /// Image stored in an object store
    StoredObject {
        /// Bucket holding the object
        bucket: String,
        /// Object key within the bucket
        key: String,
    },
}

/// Loose mirror of the accepted shapes; every field optional so one struct
/// covers all three.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEvent {
    body: Option<String>,
    #[serde(rename = "isBase64Encoded")]
    is_base64_encoded: bool,
    #[serde(rename = "Records")]
    records: Vec<RawRecord>,
    image: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    #[serde(rename = "eventSource")]
    event_source: Option<String>,
    s3: Option<RawS3>,
}

#[derive(Debug, Deserialize)]
struct RawS3 {
    bucket: RawBucket,
    object: RawObject,
}

#[derive(Debug, Deserialize)]
struct RawBucket {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawObject {
    key: String,
}

impl Event {
    /// Classify a raw JSON request into one of the accepted shapes.
    ///
    /// Shapes are tried in priority order: base64 body with the
    /// `isBase64Encoded` flag, then the first object-store record, then a
    /// bare `image` field. `None` means the request is malformed and maps
    /// to the 400 response; that includes structurally recognized shapes
    /// whose fields carry the wrong types.
    pub fn classify(value: &Value) -> Option<Event> {
        let raw = RawEvent::deserialize(value).ok()?;

        if raw.is_base64_encoded {
            if let Some(body) = raw.body {
                return Some(Event::InlineImage { data: body });
            }
        }

        if let Some(record) = raw.records.first() {
            if record.event_source.as_deref() == Some("aws:s3") {
                if let Some(s3) = &record.s3 {
                    return Some(Event::StoredObject {
                        bucket: s3.bucket.name.clone(),
                        key: s3.object.key.clone(),
                    });
                }
            }
        }

        if let Some(image) = raw.image {
            return Some(Event::InlineImage { data: image });
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classifies_base64_body() {
        let event = json!({"body": "aGVsbG8=", "isBase64Encoded": true});
        assert_eq!(
            Event::classify(&event),
            Some(Event::InlineImage {
                data: "aGVsbG8=".to_string()
            })
        );
    }

    #[test]
    fn test_body_without_flag_is_not_inline() {
        let event = json!({"body": "aGVsbG8="});
        assert_eq!(Event::classify(&event), None);
    }

    #[test]
    fn test_classifies_stored_object_record() {
        let event = json!({
            "Records": [{
                "eventSource": "aws:s3",
                "s3": {
                    "bucket": {"name": "uploads"},
                    "object": {"key": "photos/receipt.png"}
                }
            }]
        });
        assert_eq!(
            Event::classify(&event),
            Some(Event::StoredObject {
                bucket: "uploads".to_string(),
                key: "photos/receipt.png".to_string()
            })
        );
    }

    #[test]
    fn test_record_from_other_source_is_skipped() {
        let event = json!({
            "Records": [{"eventSource": "aws:sqs"}],
            "image": "aGVsbG8="
        });
        assert_eq!(
            Event::classify(&event),
            Some(Event::InlineImage {
                data: "aGVsbG8=".to_string()
            })
        );
    }

    #[test]
    fn test_classifies_bare_image_field() {
        let event = json!({"image": "aGVsbG8="});
        assert_eq!(
            Event::classify(&event),
            Some(Event::InlineImage {
                data: "aGVsbG8=".to_string()
            })
        );
    }

    #[test]
    fn test_body_takes_priority_over_image() {
        let event = json!({
            "body": "Ym9keQ==",
            "isBase64Encoded": true,
            "image": "aW1hZ2U="
        });
        assert_eq!(
            Event::classify(&event),
            Some(Event::InlineImage {
                data: "Ym9keQ==".to_string()
            })
        );
    }

    #[test]
    fn test_unrecognized_shape_is_none() {
        assert_eq!(Event::classify(&json!({})), None);
        assert_eq!(Event::classify(&json!({"unrelated": 1})), None);
        assert_eq!(Event::classify(&json!("just a string")), None);
    }

    #[test]
    fn test_ill_typed_fields_are_none() {
        assert_eq!(
            Event::classify(&json!({"body": 42, "isBase64Encoded": true})),
            None
        );
        assert_eq!(Event::classify(&json!({"image": 42})), None);
    }

    #[test]
    fn test_s3_record_missing_object_details_is_none() {
        let event = json!({"Records": [{"eventSource": "aws:s3"}]});
        assert_eq!(Event::classify(&event), None);
    }
}
