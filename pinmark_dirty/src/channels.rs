// Copyright 2025 the Pinmark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named state channels.

bitflags::bitflags! {
    /// One bit per observable state cell of the editor.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StateChannels: u8 {
        /// The content-to-device transform (pan, zoom, fit).
        const TRANSFORM      = 0b0000_0001;
        /// The annotation list: additions, removals, renames, moves.
        const ANNOTATIONS    = 0b0000_0010;
        /// The active tool.
        const ACTIVE_TOOL    = 0b0000_0100;
        /// The hovered/selected point.
        const ACTIVE_ELEMENT = 0b0000_1000;
        /// Display options such as label visibility.
        const CANVAS_OPTIONS = 0b0001_0000;
        /// Natural size of the loaded image.
        const FILE_INFO      = 0b0010_0000;
        /// The in-flight drag ghost moved. Never published to observers.
        const DRAG_PREVIEW   = 0b0100_0000;
    }
}

impl StateChannels {
    /// Channels whose change alters what the canvas shows.
    pub const VISUAL: Self = Self::TRANSFORM
        .union(Self::ANNOTATIONS)
        .union(Self::ACTIVE_ELEMENT)
        .union(Self::CANVAS_OPTIONS)
        .union(Self::FILE_INFO)
        .union(Self::DRAG_PREVIEW);

    /// Channels observers may subscribe to.
    pub const OBSERVABLE: Self = Self::all().difference(Self::DRAG_PREVIEW);

    /// Returns `true` if a change on these channels needs a redraw.
    #[must_use]
    pub const fn needs_redraw(self) -> bool {
        self.intersects(Self::VISUAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_change_alone_does_not_redraw() {
        assert!(!StateChannels::ACTIVE_TOOL.needs_redraw());
        assert!((StateChannels::ACTIVE_TOOL | StateChannels::TRANSFORM).needs_redraw());
        assert!(StateChannels::empty().is_empty());
    }

    #[test]
    fn drag_preview_is_visual_but_not_observable() {
        assert!(StateChannels::DRAG_PREVIEW.needs_redraw());
        assert!(!StateChannels::OBSERVABLE.contains(StateChannels::DRAG_PREVIEW));
        assert!(StateChannels::OBSERVABLE.contains(StateChannels::ANNOTATIONS));
    }
}
