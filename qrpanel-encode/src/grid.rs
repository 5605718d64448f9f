use crate::error::EncodeError;

/// Smallest and largest supported symbol sides (versions 1..=11).
pub const MIN_SIDE: u32 = 21;
pub const MAX_SIDE: u32 = 61;

/// The logical screen the layout targets, in device pixels.
pub const SCREEN_WIDTH: u32 = 128;
pub const SCREEN_HEIGHT: u32 = 64;

/// A square matrix of QR modules, row-major, `true` meaning a dark cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleGrid {
    side: u32,
    modules: Vec<bool>,
}

impl ModuleGrid {
    /// Build a grid from row-major cells, validating the side length against
    /// the supported symbol sizes.
    pub fn new(side: u32, modules: Vec<bool>) -> crate::Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&side) || (side - MIN_SIDE) % 4 != 0 {
            return Err(EncodeError::InvalidGridSize(side));
        }
        if modules.len() != (side * side) as usize {
            return Err(EncodeError::InvalidGridSize(side));
        }
        Ok(Self { side, modules })
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Whether the module at `(x, y)` is dark. Out-of-range reads are light,
    /// matching the encoder's own convention.
    pub fn module(&self, x: u32, y: u32) -> bool {
        if x >= self.side || y >= self.side {
            return false;
        }
        self.modules[(y * self.side + x) as usize]
    }

    pub fn layout(&self) -> DisplayLayout {
        DisplayLayout::for_side(self.side)
    }
}

/// How a grid maps onto the screen: integer pixels per module and a fixed
/// top-left offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    pub scale: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl DisplayLayout {
    /// Pixels per module: 3 for the smallest symbol, 2 for the next two
    /// sizes, 1 for everything larger. Every supported side then fits the
    /// 64-pixel screen height together with the fixed 1-pixel offset.
    pub fn for_side(side: u32) -> Self {
        let scale = match side {
            21 => 3,
            25 | 29 => 2,
            _ => 1,
        };
        Self {
            scale,
            offset_x: 1,
            offset_y: 1,
        }
    }

    /// Edge length of the drawn symbol in device pixels.
    pub fn pixel_side(&self, side: u32) -> u32 {
        side * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(side: u32) -> ModuleGrid {
        ModuleGrid::new(side, vec![false; (side * side) as usize]).unwrap()
    }

    #[test]
    fn accepts_every_supported_side() {
        for side in (MIN_SIDE..=MAX_SIDE).step_by(4) {
            assert_eq!(grid_of(side).side(), side);
        }
    }

    #[test]
    fn rejects_unsupported_sides() {
        for side in [0, 17, 20, 22, 62, 65, 177] {
            assert!(
                ModuleGrid::new(side, vec![false; (side * side) as usize]).is_err(),
                "side {side} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_mismatched_cell_count() {
        assert!(ModuleGrid::new(21, vec![false; 21]).is_err());
    }

    #[test]
    fn module_indexing_is_row_major() {
        let side = 21;
        let mut modules = vec![false; (side * side) as usize];
        modules[(3 * side + 5) as usize] = true;
        let grid = ModuleGrid::new(side, modules).unwrap();
        assert!(grid.module(5, 3));
        assert!(!grid.module(3, 5));
    }

    #[test]
    fn out_of_range_modules_read_light() {
        let grid = grid_of(21);
        assert!(!grid.module(21, 0));
        assert!(!grid.module(0, 200));
    }

    #[test]
    fn layout_scale_follows_symbol_size() {
        assert_eq!(DisplayLayout::for_side(21).scale, 3);
        assert_eq!(DisplayLayout::for_side(25).scale, 2);
        assert_eq!(DisplayLayout::for_side(29).scale, 2);
        assert_eq!(DisplayLayout::for_side(33).scale, 1);
        assert_eq!(DisplayLayout::for_side(61).scale, 1);
    }

    #[test]
    fn every_layout_fits_the_screen() {
        for side in (MIN_SIDE..=MAX_SIDE).step_by(4) {
            let layout = DisplayLayout::for_side(side);
            let extent = layout.offset_y + layout.pixel_side(side);
            assert!(
                extent <= SCREEN_HEIGHT,
                "side {side} spills past the screen: {extent}"
            );
        }
    }
}
