//! Slide deck data model: rows, slides, and the deck container.
//!
//! Rows and slides live in bounded storage with reject-on-overflow
//! semantics: pushing past capacity returns [`DeckError`] and leaves the
//! container untouched. A row's content and sizing policy are fixed at
//! construction; only its solved `actual` size mutates, rewritten in
//! full by every layout pass.

use crate::error::DeckError;
use crate::measure::{FontRef, Size, TextureRef};

/// Maximum rows per slide.
pub const ROW_CAPACITY: usize = 8;

/// Maximum slides per deck.
pub const SLIDE_CAPACITY: usize = 64;

/// How a row's height is derived from available viewport space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizePolicy {
    /// Height is the intrinsic pixel height, never rescaled.
    Fixed,
    /// Height is this fraction of the leftover height (viewport height
    /// minus the sum of all fixed rows' intrinsic heights).
    Fraction(f32),
    /// Height is an equal share of the leftover height divided among
    /// all non-fixed rows.
    Fill,
}

impl SizePolicy {
    /// Map the builder's signed scalar onto a policy.
    ///
    /// `0.0` means fixed, positive means a leftover fraction, negative
    /// means an equal fill share.
    pub fn from_factor(factor: f32) -> Self {
        if factor > 0.0 {
            Self::Fraction(factor)
        } else if factor < 0.0 {
            Self::Fill
        } else {
            Self::Fixed
        }
    }

    /// True for rows excluded from leftover-height distribution.
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Fixed)
    }
}

/// Row content discriminant.
///
/// Ordered so that the most visually significant kind compares highest;
/// chrome uses the maximum kind of a slide to pick its thumbnail icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RowKind {
    Empty,
    Text,
    Image,
}

/// Payload of one horizontal content band.
#[derive(Clone, Debug, PartialEq)]
pub enum RowContent {
    /// Spacer with no payload.
    Empty,
    /// Immutable text block; content is never re-measured after
    /// construction.
    Text { font: FontRef, text: String },
    /// Reference to an externally owned texture.
    Image { texture: TextureRef },
}

impl RowContent {
    /// Discriminant of this payload.
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Empty => RowKind::Empty,
            Self::Text { .. } => RowKind::Text,
            Self::Image { .. } => RowKind::Image,
        }
    }
}

/// One vertically stacked content band within a slide.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    content: RowContent,
    policy: SizePolicy,
    intrinsic: Size,
    actual: Size,
}

impl Row {
    pub(crate) fn new(content: RowContent, policy: SizePolicy, intrinsic: Size) -> Self {
        Self {
            content,
            policy,
            intrinsic,
            actual: Size::ZERO,
        }
    }

    pub fn content(&self) -> &RowContent {
        &self.content
    }

    pub fn kind(&self) -> RowKind {
        self.content.kind()
    }

    pub fn policy(&self) -> SizePolicy {
        self.policy
    }

    /// Natural, content-derived size measured at construction.
    pub fn intrinsic(&self) -> Size {
        self.intrinsic
    }

    /// Solved, viewport-fitted size from the most recent layout pass.
    ///
    /// Must never be read before the pass for the current frame has
    /// run; a viewport resize invalidates it.
    pub fn actual(&self) -> Size {
        self.actual
    }

    /// Overwrite the solved size. Called by the layout pass, for every
    /// row, every frame.
    pub fn set_actual(&mut self, actual: Size) {
        self.actual = actual;
    }
}

/// Ordered, bounded sequence of rows rendered top to bottom.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slide {
    rows: heapless::Vec<Row, ROW_CAPACITY>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most visually significant row kind, used for thumbnail icons.
    pub fn dominant_kind(&self) -> RowKind {
        self.rows
            .iter()
            .map(Row::kind)
            .max()
            .unwrap_or(RowKind::Empty)
    }

    pub(crate) fn push_row(&mut self, row: Row) -> Result<&mut Row, DeckError> {
        self.rows.push(row).map_err(|_| DeckError::RowCapacity {
            capacity: ROW_CAPACITY,
        })?;
        let last = self.rows.len() - 1;
        Ok(&mut self.rows[last])
    }
}

/// Ordered, bounded sequence of slides plus the current index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Deck {
    slides: heapless::Vec<Slide, SLIDE_CAPACITY>,
    current: usize,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a slide, rejecting on capacity overflow.
    pub fn push_slide(&mut self, slide: Slide) -> Result<&mut Slide, DeckError> {
        self.slides
            .push(slide)
            .map_err(|_| DeckError::SlideCapacity {
                capacity: SLIDE_CAPACITY,
            })?;
        let last = self.slides.len() - 1;
        Ok(&mut self.slides[last])
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Currently displayed slide index, always within bounds for a
    /// non-empty deck.
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index;
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    pub fn current_slide_mut(&mut self) -> Option<&mut Slide> {
        self.slides.get_mut(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spacer() -> Row {
        Row::new(RowContent::Empty, SizePolicy::Fill, Size::ZERO)
    }

    #[test]
    fn policy_from_factor_maps_sign_semantics() {
        assert_eq!(SizePolicy::from_factor(0.0), SizePolicy::Fixed);
        assert_eq!(SizePolicy::from_factor(0.35), SizePolicy::Fraction(0.35));
        assert_eq!(SizePolicy::from_factor(-1.0), SizePolicy::Fill);
    }

    #[test]
    fn ninth_row_is_rejected_and_count_unchanged() {
        let mut slide = Slide::new();
        for _ in 0..ROW_CAPACITY {
            slide.push_row(spacer()).unwrap();
        }
        assert_eq!(
            slide.push_row(spacer()).unwrap_err(),
            DeckError::RowCapacity {
                capacity: ROW_CAPACITY
            }
        );
        assert_eq!(slide.row_count(), ROW_CAPACITY);
    }

    #[test]
    fn slide_capacity_overflow_is_rejected() {
        let mut deck = Deck::new();
        for _ in 0..SLIDE_CAPACITY {
            deck.push_slide(Slide::new()).unwrap();
        }
        assert_eq!(
            deck.push_slide(Slide::new()).unwrap_err(),
            DeckError::SlideCapacity {
                capacity: SLIDE_CAPACITY
            }
        );
        assert_eq!(deck.slide_count(), SLIDE_CAPACITY);
    }

    #[test]
    fn dominant_kind_prefers_image_over_text() {
        let mut slide = Slide::new();
        slide
            .push_row(Row::new(
                RowContent::Text {
                    font: FontRef::new(0, 24.0),
                    text: "title".into(),
                },
                SizePolicy::Fixed,
                Size::new(50.0, 24.0),
            ))
            .unwrap();
        assert_eq!(slide.dominant_kind(), RowKind::Text);
        slide
            .push_row(Row::new(
                RowContent::Image {
                    texture: TextureRef::new(1),
                },
                SizePolicy::Fill,
                Size::new(320.0, 200.0),
            ))
            .unwrap();
        assert_eq!(slide.dominant_kind(), RowKind::Image);
    }
}
