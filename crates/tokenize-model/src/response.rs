// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// The `{success, data, message}` envelope returned by every query endpoint.
///
/// `success` stays `true` for empty filter results; only transport-level
/// failures would flip it. `message` is `null` on non-empty results and a
/// human-readable explanation on empty filtered results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
        }
    }

    #[must_use]
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            message: Some(message.into()),
        }
    }
}
