//! Deployment server response shapes and how they are rendered

use serde::Serialize;
use serde_json::Value;

/// Shown in place of any field the server left out
pub const PLACEHOLDER: &str = "N/D";

/// Number of commit hash characters shown to the user
pub const SHORT_COMMIT_LEN: usize = 7;

/// What the deployment server reports back on success
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeploymentResult {
    pub app_name: Option<String>,
    pub access_url: Option<String>,
    pub container_id: Option<String>,
    pub current_commit: Option<String>,
}

impl DeploymentResult {
    /// Pick the known fields out of a 2xx response body.
    /// Anything that is not an object yields an empty result.
    pub fn from_json(body: &Value) -> Self {
        Self {
            app_name: text_field(body, "app_name"),
            access_url: text_field(body, "access_url"),
            container_id: text_field(body, "container_id"),
            current_commit: text_field(body, "current_commit"),
        }
    }

    /// First seven characters of the commit hash, if there is one
    pub fn short_commit(&self) -> Option<String> {
        self.current_commit
            .as_ref()
            .map(|c| c.chars().take(SHORT_COMMIT_LEN).collect())
    }
}

/// The success panel exactly as it is displayed
#[derive(Debug, Clone, PartialEq)]
pub struct SuccessPanel {
    pub app_name: String,
    pub access_url: String,
    /// Link target; `None` means the link has no href
    pub access_href: Option<String>,
    pub container_id: String,
    pub commit: String,
}

impl From<&DeploymentResult> for SuccessPanel {
    fn from(result: &DeploymentResult) -> Self {
        let or_placeholder =
            |v: &Option<String>| v.clone().unwrap_or_else(|| PLACEHOLDER.to_string());

        Self {
            app_name: or_placeholder(&result.app_name),
            access_url: or_placeholder(&result.access_url),
            access_href: result.access_url.clone(),
            container_id: or_placeholder(&result.container_id),
            commit: result
                .short_commit()
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        }
    }
}

/// Derive the user-facing message from a non-2xx response body.
///
/// Priority: `detail`, then `message`, then the whole body dumped as JSON.
pub fn error_message(body: &Value) -> String {
    text_field(body, "detail")
        .or_else(|| text_field(body, "message"))
        .unwrap_or_else(|| body.to_string())
}

/// Read `key` as display text. Missing, null, false and empty strings count as absent;
/// other non-string values are rendered as JSON.
fn text_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_result_renders_placeholders() {
        let result = DeploymentResult::from_json(&json!({
            "app_name": "demo",
            "current_commit": "abcdef1234"
        }));
        let panel = SuccessPanel::from(&result);

        assert_eq!(panel.app_name, "demo");
        assert_eq!(panel.commit, "abcdef1");
        assert_eq!(panel.access_url, "N/D");
        assert_eq!(panel.access_href, None);
        assert_eq!(panel.container_id, "N/D");
    }

    #[test]
    fn full_result_keeps_link_target() {
        let result = DeploymentResult::from_json(&json!({
            "app_name": "shop",
            "access_url": "http://shop.apps.local",
            "container_id": "f00dbabe",
            "current_commit": "0123456789abcdef"
        }));
        let panel = SuccessPanel::from(&result);

        assert_eq!(panel.access_url, "http://shop.apps.local");
        assert_eq!(panel.access_href.as_deref(), Some("http://shop.apps.local"));
        assert_eq!(panel.container_id, "f00dbabe");
        assert_eq!(panel.commit, "0123456");
    }

    #[test]
    fn short_commit_is_left_whole() {
        let result = DeploymentResult {
            current_commit: Some("abc".into()),
            ..Default::default()
        };
        assert_eq!(result.short_commit().as_deref(), Some("abc"));
    }

    #[test]
    fn empty_and_null_fields_count_as_missing() {
        let result = DeploymentResult::from_json(&json!({
            "app_name": "",
            "container_id": null,
            "current_commit": 42
        }));
        assert_eq!(result.app_name, None);
        assert_eq!(result.container_id, None);
        assert_eq!(result.current_commit.as_deref(), Some("42"));
    }

    #[test]
    fn non_object_body_is_empty_result() {
        assert_eq!(
            DeploymentResult::from_json(&json!(["ok"])),
            DeploymentResult::default()
        );
    }

    #[test]
    fn error_message_prefers_detail() {
        let body = json!({"detail": "quota exceeded", "message": "ignored"});
        assert_eq!(error_message(&body), "quota exceeded");
    }

    #[test]
    fn error_message_falls_back_to_message_then_dump() {
        assert_eq!(error_message(&json!({"message": "bad repo"})), "bad repo");
        assert_eq!(
            error_message(&json!({"code": 7})),
            json!({"code": 7}).to_string()
        );
        assert_eq!(error_message(&json!({"detail": ""})), r#"{"detail":""}"#);
    }

    #[test]
    fn structured_detail_is_dumped() {
        let body = json!({"detail": [{"loc": ["body", "url"], "msg": "field required"}]});
        assert_eq!(
            error_message(&body),
            r#"[{"loc":["body","url"],"msg":"field required"}]"#
        );
    }
}
