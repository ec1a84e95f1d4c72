use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One framed message on the adapter wire.
#[derive(Debug, Serialize, Deserialize)]
pub struct WireMessage {
    pub seq: u64,
    #[serde(rename = "type")]
    pub msg_type: String,
    #[serde(flatten)]
    pub content: WireContent,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireContent {
    Request {
        command: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        arguments: Option<Value>,
    },
    Response {
        request_seq: u64,
        success: bool,
        command: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<Value>,
    },
    Event {
        event: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        body: Option<Value>,
    },
}
