// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

//! Catalog model SSOT: the `Component` record and the response envelope
//! shared by every query endpoint.

mod component;
mod response;

pub const CRATE_NAME: &str = "tokenize-model";

pub use component::{
    Component, ComponentRow, COMPONENTS_HEADER, MAIN_TYPE_HEADER, SUB_TYPE_HEADER,
};
pub use response::ApiResponse;
