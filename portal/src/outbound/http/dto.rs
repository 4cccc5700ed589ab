//! Wire representations for the profile API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{MenuAction, MenuItem};

/// Successful login body.
#[derive(Debug, Deserialize)]
pub(super) struct LoginResponseDto {
    #[serde(default)]
    pub(super) access_token: Option<String>,
}

/// One menu entry as sent by the server.
#[derive(Debug, Deserialize)]
pub(super) struct MenuItemDto {
    label: String,
    action_type: String,
    #[serde(default)]
    destination: Option<String>,
}

impl From<MenuItemDto> for MenuItem {
    fn from(value: MenuItemDto) -> Self {
        let MenuItemDto {
            label,
            action_type,
            destination,
        } = value;
        MenuItem::new(label, MenuAction::from_wire(&action_type, destination))
    }
}

/// Change-password request body.
#[derive(Debug, Serialize)]
pub(super) struct ChangePasswordRequestDto<'a> {
    pub(super) old_password: &'a str,
    pub(super) new_password: &'a str,
}

/// Error message carried by a response body, if any.
///
/// Bodies report errors under `error` or `detail` depending on the endpoint.
pub(super) fn error_detail(body: &Value) -> Option<String> {
    ["error", "detail"]
        .into_iter()
        .filter_map(|key| body.get(key))
        .find_map(detail_text)
}

/// Error message from raw body bytes; `None` when the body is not JSON.
pub(super) fn error_detail_from_bytes(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(error_detail)
}

fn detail_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) => {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        }
        Value::Array(entries) => {
            let parts: Vec<String> = entries.iter().filter_map(detail_text).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        Value::Object(fields) => ["msg", "message"]
            .into_iter()
            .filter_map(|key| fields.get(key))
            .find_map(detail_text)
            .or_else(|| Some(value.to_string())),
        other => Some(other.to_string()),
    }
}
