use serde::Serialize;

/// Wire payload for the task-create endpoint: `{"string": "<text>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    #[serde(rename = "string")]
    pub text: String,
}

impl Task {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self { text: text.into() }
    }
}
