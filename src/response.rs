use crate::coerce::{number_to_boolean, parse_number};
use crate::error::Result;
use roxmltree::{Document, Node};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use tracing::warn;

/// Wrapper element the camera puts around every control response.
pub const CGI_RESULT: &str = "CGI_Result";

/// Normalizes a camera response body.
///
/// - `None` gives `Value::Null` and an empty body is handed back as an empty string.
/// - Well-formed XML becomes nested objects keyed by tag name, with numeric
///   leaf text coerced to numbers. A `CGI_Result` root is unwrapped.
/// - Anything that fails to parse is returned as the original text.
pub fn parse_response(xml: Option<&str>) -> Value {
    let Some(xml) = xml else {
        return Value::Null;
    };
    if xml.is_empty() {
        return Value::String(String::new());
    }

    let doc = match Document::parse(xml) {
        Ok(doc) => doc,
        Err(err) => {
            warn!("Response is not XML ({}), returning raw text", err);
            return Value::String(xml.to_string());
        }
    };

    let root = doc.root_element();
    let content = element_value(root);
    if root.has_tag_name(CGI_RESULT) {
        return content;
    }

    let mut wrapped = Map::new();
    wrapped.insert(root.tag_name().name().to_string(), content);
    Value::Object(wrapped)
}

fn element_value(node: Node) -> Value {
    let mut children = node.children().filter(|n| n.is_element()).peekable();
    if children.peek().is_none() {
        let text: String = node
            .children()
            .filter(|n| n.is_text())
            .filter_map(|n| n.text())
            .collect();
        return parse_number(&text);
    }

    // Repeated tags are not part of the camera's vocabulary; the last one wins.
    let mut map = Map::new();
    for child in children {
        map.insert(child.tag_name().name().to_string(), element_value(child));
    }
    Value::Object(map)
}

/// Vendor status carried in the `result` field. Informational only: the client
/// hands every status back to the caller as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    MalformedRequest,
    WrongCredentials,
    AccessDenied,
    ExecutionFailed,
    Timeout,
    UnknownError,
    Other(i64),
}

impl From<i64> for ResultCode {
    fn from(code: i64) -> Self {
        match code {
            0 => ResultCode::Success,
            -1 => ResultCode::MalformedRequest,
            -2 => ResultCode::WrongCredentials,
            -3 => ResultCode::AccessDenied,
            -4 => ResultCode::ExecutionFailed,
            -5 => ResultCode::Timeout,
            -7 => ResultCode::UnknownError,
            other => ResultCode::Other(other),
        }
    }
}

/// Parsed response of a control command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandResponse(Value);

impl CommandResponse {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn from_xml(xml: &str) -> Self {
        Self(parse_response(Some(xml)))
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The raw `result` status code, if the response carries one.
    pub fn result(&self) -> Option<i64> {
        self.get("result").and_then(Value::as_i64)
    }

    pub fn result_code(&self) -> Option<ResultCode> {
        self.result().map(ResultCode::from)
    }

    pub fn is_success(&self) -> bool {
        self.result() == Some(0)
    }

    /// Turns each listed 0/1 field into a boolean.
    pub(crate) fn with_flags(mut self, keys: &[&str]) -> Self {
        for key in keys {
            number_to_boolean(&mut self.0, key);
        }
        self
    }

    /// Deserializes the response into a typed view.
    pub fn parse_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(T::deserialize(&self.0)?)
    }
}

impl From<Value> for CommandResponse {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl fmt::Display for CommandResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
