//! Clickable regions recorded by the last render
//!
//! The renderer owns geometry; the update function owns meaning. Each frame
//! the view clears the map and registers tile and modal rectangles, and mouse
//! clicks are resolved against whatever was drawn last.

/// A rectangle in terminal cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
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

    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && row >= self.y
            && u32::from(column) < u32::from(self.x) + u32::from(self.width)
            && u32::from(row) < u32::from(self.y) + u32::from(self.height)
    }
}

/// Regions of one launch tile, keyed by flight number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    pub flight_number: u32,
    pub tile: Region,
    pub action: Region,
}

/// Regions of the details modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRegion {
    /// Dimmed backdrop covering the whole screen
    pub overlay: Region,
    /// The modal box itself; clicks here never dismiss
    pub content: Region,
    /// The `[×]` close control inside the content
    pub close: Region,
}

/// What a click landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ModalClose,
    ModalContent,
    ModalBackdrop,
    TileAction(u32),
    Tile(u32),
    Nothing,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    tiles: Vec<TileRegion>,
    modal: Option<ModalRegion>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        self.modal = None;
    }

    pub fn push_tile(&mut self, region: TileRegion) {
        self.tiles.push(region);
    }

    pub fn set_modal(&mut self, region: ModalRegion) {
        self.modal = Some(region);
    }

    pub fn tiles(&self) -> &[TileRegion] {
        &self.tiles
    }

    pub fn modal(&self) -> Option<&ModalRegion> {
        self.modal.as_ref()
    }

    /// Resolve a click. An open modal captures every click.
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        if let Some(modal) = &self.modal {
            return if modal.close.contains(column, row) {
                Hit::ModalClose
            } else if modal.content.contains(column, row) {
                Hit::ModalContent
            } else if modal.overlay.contains(column, row) {
                Hit::ModalBackdrop
            } else {
                Hit::Nothing
            };
        }

        for tile in &self.tiles {
            if tile.action.contains(column, row) {
                return Hit::TileAction(tile.flight_number);
            }
            if tile.tile.contains(column, row) {
                return Hit::Tile(tile.flight_number);
            }
        }

        Hit::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal_map() -> HitMap {
        let mut map = HitMap::new();
        map.push_tile(TileRegion {
            flight_number: 1,
            tile: Region::new(0, 0, 20, 7),
            action: Region::new(2, 5, 16, 1),
        });
        map.set_modal(ModalRegion {
            overlay: Region::new(0, 0, 80, 24),
            content: Region::new(20, 5, 40, 14),
            close: Region::new(55, 5, 3, 1),
        });
        map
    }

    #[test]
    fn test_region_contains_edges() {
        let region = Region::new(2, 3, 4, 2);
        assert!(region.contains(2, 3));
        assert!(region.contains(5, 4));
        assert!(!region.contains(6, 4));
        assert!(!region.contains(5, 5));
        assert!(!region.contains(1, 3));
    }

    #[test]
    fn test_region_at_u16_max_does_not_overflow() {
        let region = Region::new(u16::MAX - 1, 0, 10, 1);
        assert!(region.contains(u16::MAX, 0));
    }

    #[test]
    fn test_tile_action_takes_priority_over_tile_body() {
        let mut map = HitMap::new();
        map.push_tile(TileRegion {
            flight_number: 42,
            tile: Region::new(0, 0, 20, 7),
            action: Region::new(2, 5, 16, 1),
        });

        assert_eq!(map.hit(3, 5), Hit::TileAction(42));
        assert_eq!(map.hit(3, 1), Hit::Tile(42));
        assert_eq!(map.hit(30, 1), Hit::Nothing);
    }

    #[test]
    fn test_modal_captures_clicks_over_tiles() {
        let map = modal_map();
        // Over the tile's action control, but the modal backdrop is on top
        assert_eq!(map.hit(3, 5), Hit::ModalBackdrop);
    }

    #[test]
    fn test_modal_close_inside_content() {
        let map = modal_map();
        assert_eq!(map.hit(56, 5), Hit::ModalClose);
        assert_eq!(map.hit(30, 10), Hit::ModalContent);
    }

    #[test]
    fn test_clear_forgets_everything() {
        let mut map = modal_map();
        map.clear();
        assert!(map.tiles().is_empty());
        assert!(map.modal().is_none());
        assert_eq!(map.hit(56, 5), Hit::Nothing);
    }
}
