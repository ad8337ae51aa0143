use serde::Deserialize;

/// Error body returned by the finance API.
///
/// `detail` is either a plain message or a list of validation issues.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: ErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Issues(Vec<ValidationIssue>),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValidationIssue {
    pub msg: String,
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
}

impl ErrorBody {
    pub fn message(&self) -> String {
        match &self.detail {
            ErrorDetail::Message(text) => text.clone(),
            ErrorDetail::Issues(issues) => issues
                .iter()
                .map(|issue| issue.msg.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Human readable message for a failed response.
///
/// Falls back to `HTTP {status}` when the body carries no usable `detail`.
pub fn server_message(status: u16, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|parsed| parsed.message())
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_detail() {
        let body = r#"{"detail":"Email já cadastrado"}"#;
        assert_eq!(server_message(400, body), "Email já cadastrado");
    }

    #[test]
    fn validation_detail_joins_messages() {
        let body = r#"{"detail":[
            {"loc":["body","amount"],"msg":"field required","type":"value_error.missing"},
            {"loc":["body","date"],"msg":"invalid date format","type":"value_error"}
        ]}"#;
        assert_eq!(
            server_message(422, body),
            "field required; invalid date format"
        );
    }

    #[test]
    fn falls_back_to_status() {
        assert_eq!(server_message(502, "<html>Bad gateway</html>"), "HTTP 502");
        assert_eq!(server_message(500, r#"{"error":"boom"}"#), "HTTP 500");
        assert_eq!(server_message(404, r#"{"detail":""}"#), "HTTP 404");
    }
}
