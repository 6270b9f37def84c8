//! Terminal dimensions with a fallback and enforced minimums.

use crate::types::{FALLBACK_HEIGHT, FALLBACK_WIDTH};

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u16,
    pub height: u16,
}

impl Dimensions {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Grow each side up to its minimum.
    pub fn at_least(self, min_width: u16, min_height: u16) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(FALLBACK_WIDTH, FALLBACK_HEIGHT)
    }
}

/// Query the terminal, falling back to 80x24, then apply the minimums.
pub fn terminal_dimensions(min_width: u16, min_height: u16) -> Dimensions {
    let dims = match crossterm::terminal::size() {
        Ok((w, h)) => Dimensions::new(w, h),
        Err(e) => {
            log::warn!("terminal size unavailable ({}), assuming 80x24", e);
            Dimensions::default()
        }
    };
    dims.at_least(min_width, min_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_80x24() {
        assert_eq!(Dimensions::default(), Dimensions::new(80, 24));
    }

    #[test]
    fn minimums_only_grow() {
        assert_eq!(Dimensions::new(5, 3).at_least(20, 8), Dimensions::new(20, 8));
        assert_eq!(
            Dimensions::new(120, 40).at_least(20, 8),
            Dimensions::new(120, 40)
        );
        assert_eq!(Dimensions::new(0, 30).at_least(20, 8), Dimensions::new(20, 30));
    }
}
