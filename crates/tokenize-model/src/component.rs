// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Source column label for the primary filter dimension.
pub const MAIN_TYPE_HEADER: &str = "Main Type";
/// Source column label for the secondary filter dimension.
pub const SUB_TYPE_HEADER: &str = "Sub Type";
/// Source column label for the free-text description.
pub const COMPONENTS_HEADER: &str = "Components";

/// One catalogued tokenization component.
///
/// `id` is a 1-based enumeration of emitted rows in source-file order. It is
/// stable for the process lifetime only; nothing persists across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: u32,
    pub main_type: String,
    pub sub_type: String,
    pub components: String,
}

/// A parsed source row before id assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComponentRow {
    pub main_type: String,
    pub sub_type: String,
    pub components: String,
}

impl ComponentRow {
    /// True for the defensive duplicate-header guard: a data row whose
    /// `main_type` value is literally the column label is a stray header
    /// copy and must not enter the catalog.
    #[must_use]
    pub fn is_stray_header(&self) -> bool {
        self.main_type == MAIN_TYPE_HEADER
    }

    #[must_use]
    pub fn into_component(self, id: u32) -> Component {
        Component {
            id,
            main_type: self.main_type,
            sub_type: self.sub_type,
            components: self.components,
        }
    }
}
