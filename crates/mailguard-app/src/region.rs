//! Screen regions recorded by the renderer for mouse hit-testing.
//!
//! The TUI writes these after each frame; the mouse handler reads them. Kept
//! terminal-library independent so the app crate never depends on ratatui.

/// Axis-aligned cell rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the cell `(column, row)` lies inside this region
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Regions of the result popup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupRegions {
    /// The popup panel itself; clicks here never dismiss
    pub panel: Region,
    /// The close control inside the panel
    pub close_button: Region,
}

/// All clickable regions of the last rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitRegions {
    pub editor: Option<Region>,
    pub check_button: Option<Region>,
    pub popup: Option<PopupRegions>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Region::new(10, 5, 4, 2);
        assert!(r.contains(10, 5));
        assert!(r.contains(13, 6));
        assert!(!r.contains(14, 6));
        assert!(!r.contains(13, 7));
        assert!(!r.contains(9, 5));
        assert!(!r.contains(10, 4));
    }

    #[test]
    fn test_contains_does_not_overflow() {
        let r = Region::new(u16::MAX - 1, u16::MAX - 1, 10, 10);
        assert!(r.contains(u16::MAX, u16::MAX));
    }

    #[test]
    fn test_empty_region_contains_nothing() {
        let r = Region::new(3, 3, 0, 5);
        assert!(r.is_empty());
        assert!(!r.contains(3, 3));
    }
}
