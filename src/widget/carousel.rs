/// Viewport widths (in CSS pixels) at which the page size steps up.
pub const BREAKPOINTS: [(u32, usize); 3] = [(640, 1), (1024, 2), (1440, 4)];
pub const WIDE_PAGE_SIZE: usize = 5;

/// Number of cards shown side by side at a given viewport width.
pub fn page_size_for_width(width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .find(|(limit, _)| width < *limit)
        .map(|(_, size)| *size)
        .unwrap_or(WIDE_PAGE_SIZE)
}

/// Bounded paging over `len` cards.
///
/// The current page is always in `0..page_count()`, and the first visible
/// card never moves past `max_offset()`, so the last page is always full.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    page_size: usize,
    page: usize,
}

impl Carousel {
    pub fn new(len: usize, viewport_width: u32) -> Self {
        Self {
            len,
            page_size: page_size_for_width(viewport_width),
            page: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.len.div_ceil(self.page_size)
    }

    pub fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.page_size)
    }

    /// Index of the first visible card.
    pub fn offset(&self) -> usize {
        (self.page * self.page_size).min(self.max_offset())
    }

    /// Indices of the cards currently on screen.
    pub fn visible(&self) -> std::ops::Range<usize> {
        let start = self.offset();
        start..(start + self.page_size).min(self.len)
    }

    /// Whether prev/next controls and page indicators are shown.
    pub fn has_controls(&self) -> bool {
        self.page_count() > 1
    }

    pub fn next(&mut self) {
        let pages = self.page_count();
        self.page = if self.page + 1 >= pages { 0 } else { self.page + 1 };
    }

    pub fn previous(&mut self) {
        self.page = match self.page {
            0 => self.page_count().saturating_sub(1),
            p => p - 1,
        };
    }

    /// Jump to `page`, clamped to the last page.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    /// Auto-advance step. Returns whether the position changed.
    pub fn tick(&mut self) -> bool {
        if !self.has_controls() {
            return false;
        }
        self.next();
        true
    }

    /// Recompute the page size for a new viewport width, keeping the first
    /// visible card on screen. Returns whether anything changed.
    pub fn resize(&mut self, viewport_width: u32) -> bool {
        let page_size = page_size_for_width(viewport_width);
        if page_size == self.page_size {
            return false;
        }
        let offset = self.offset();
        self.page_size = page_size;
        self.go_to(offset / page_size);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_breakpoints() {
        assert_eq!(page_size_for_width(375), 1);
        assert_eq!(page_size_for_width(639), 1);
        assert_eq!(page_size_for_width(640), 2);
        assert_eq!(page_size_for_width(1023), 2);
        assert_eq!(page_size_for_width(1024), 4);
        assert_eq!(page_size_for_width(1439), 4);
        assert_eq!(page_size_for_width(1920), 5);
    }

    #[test]
    fn test_paging_wraps() {
        let mut carousel = Carousel::new(15, 1280);
        assert_eq!(carousel.page_size(), 4);
        assert_eq!(carousel.page_count(), 4);
        assert_eq!(carousel.max_offset(), 11);

        let offsets: Vec<_> = (0..5)
            .map(|_| {
                let offset = carousel.offset();
                carousel.next();
                offset
            })
            .collect();
        assert_eq!(offsets, [0, 4, 8, 11, 0]);

        carousel.go_to(0);
        carousel.previous();
        assert_eq!(carousel.page(), 3);
        assert_eq!(carousel.visible(), 11..15);
    }

    #[test]
    fn test_auto_advance_stays_in_bounds() {
        for len in 0..=20 {
            for width in [320, 800, 1200, 1600] {
                let mut carousel = Carousel::new(len, width);
                for _ in 0..50 {
                    carousel.tick();
                    assert!(carousel.offset() <= carousel.max_offset());
                    assert!(carousel.page() < carousel.page_count().max(1));
                    assert!(carousel.visible().end <= len);
                }
            }
        }
    }

    #[test]
    fn test_single_page_has_no_controls() {
        let mut carousel = Carousel::new(3, 1600);
        assert_eq!(carousel.max_offset(), 0);
        assert!(!carousel.has_controls());
        assert!(!carousel.tick());
        assert_eq!(carousel.offset(), 0);

        let empty = Carousel::new(0, 1600);
        assert!(empty.is_empty());
        assert_eq!(empty.page_count(), 0);
        assert_eq!(empty.visible(), 0..0);
    }

    #[test]
    fn test_go_to_clamps() {
        let mut carousel = Carousel::new(7, 800);
        carousel.go_to(99);
        assert_eq!(carousel.page(), 3);
        assert_eq!(carousel.offset(), 5);
    }

    #[test]
    fn test_resize_keeps_first_card_visible() {
        let mut carousel = Carousel::new(15, 375);
        carousel.go_to(9);
        assert_eq!(carousel.offset(), 9);

        assert!(carousel.resize(1280));
        assert_eq!(carousel.page_size(), 4);
        assert_eq!(carousel.page(), 2);
        assert!(carousel.visible().contains(&9));

        assert!(!carousel.resize(1300));
        assert!(carousel.resize(1920));
        assert!(carousel.offset() <= carousel.max_offset());
    }
}
