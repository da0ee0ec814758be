use serde::{Deserialize, Serialize};

/// Request body for `POST <endpoint>`.
///
/// `hybrid` and `filter` are passed through as fixed values; the service
/// interprets them, we don't.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AskRequest<'a> {
    pub question: &'a str,
    pub hybrid: bool,
    pub filter: &'a str,
}

impl<'a> AskRequest<'a> {
    pub fn new(question: &'a str) -> Self {
        Self {
            question,
            hybrid: true,
            filter: "",
        }
    }
}

/// Response body. Any extra fields (sources, scores) are ignored.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct AskResponse {
    pub answer: String,
}
