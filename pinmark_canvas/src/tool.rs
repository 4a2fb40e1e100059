// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use serde::{Deserialize, Serialize};

/// The tool that decides what a press on the canvas does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActiveTool {
    /// Drag markers; press on the background pans.
    #[default]
    Cursor,
    /// Click on the background adds a point; any press pans.
    AddPoint,
}

impl ActiveTool {
    /// Every tool, in toolbar order.
    pub const ALL: [Self; 2] = [Self::Cursor, Self::AddPoint];

    /// Human-readable name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::AddPoint => "Add Point",
        }
    }

    /// Returns `true` if markers can be dragged with this tool.
    #[must_use]
    pub const fn drags_markers(self) -> bool {
        matches!(self, Self::Cursor)
    }
}

impl fmt::Display for ActiveTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
