// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use tokenize_model::{ApiResponse, Component};

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    "ok"
}

/// Full catalog in load order. `message` stays null even when the catalog is
/// empty (a failed load leaves an empty but well-formed surface).
pub(crate) async fn list_all_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.components.as_ref().clone()))
}

pub(crate) async fn list_by_main_type_handler(
    State(state): State<AppState>,
    Path(main_type): Path<String>,
) -> impl IntoResponse {
    let data = filter(&state.components, |c| c.main_type == main_type);
    let response = if data.is_empty() {
        ApiResponse::ok_with_message(data, format!("No components found for type: {main_type}"))
    } else {
        ApiResponse::ok(data)
    };
    Json(response)
}

pub(crate) async fn list_by_main_and_sub_type_handler(
    State(state): State<AppState>,
    Path((main_type, sub_type)): Path<(String, String)>,
) -> impl IntoResponse {
    let data = filter(&state.components, |c| {
        c.main_type == main_type && c.sub_type == sub_type
    });
    let response = if data.is_empty() {
        ApiResponse::ok_with_message(
            data,
            format!("No components found for type: {main_type} and subtype: {sub_type}"),
        )
    } else {
        ApiResponse::ok(data)
    };
    Json(response)
}

/// Single linear pass; the catalog is small enough that no index is kept.
fn filter(components: &[Component], pred: impl Fn(&Component) -> bool) -> Vec<Component> {
    components.iter().filter(|&c| pred(c)).cloned().collect()
}
