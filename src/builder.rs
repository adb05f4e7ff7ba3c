//! Slide construction: row push operations and fixed slide recipes.
//!
//! All intrinsic sizes are computed here, once, through the supplied
//! [`Measurer`]. Layout later rescales heights per policy but never
//! re-measures content.

use crate::deck::{Deck, Row, RowContent, SizePolicy, Slide};
use crate::error::DeckError;
use crate::measure::{FontRef, Measurer, Size, TextureRef};

/// Text measurement behavior knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeasureConfig {
    /// Extra intrinsic height added per embedded newline in a text row.
    ///
    /// `0.0` reproduces the raw measured extent without per-line
    /// padding.
    pub newline_pad_px: f32,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self { newline_pad_px: 6.0 }
    }
}

impl Slide {
    /// Push an empty spacer row.
    pub fn push_empty(&mut self, factor: f32) -> Result<&mut Row, DeckError> {
        self.push_row(Row::new(
            RowContent::Empty,
            SizePolicy::from_factor(factor),
            Size::ZERO,
        ))
    }

    /// Push a text row, measuring its intrinsic extent at the font's
    /// configured point size.
    pub fn push_text(
        &mut self,
        measurer: &dyn Measurer,
        cfg: &MeasureConfig,
        font: FontRef,
        text: impl Into<String>,
        factor: f32,
    ) -> Result<&mut Row, DeckError> {
        let text = text.into();
        let mut intrinsic = measurer.measure_text(font, &text);
        if intrinsic.is_degenerate() && !text.is_empty() {
            log::warn!("font {} measured a zero extent for text row", font.id);
        }
        let newlines = text.matches('\n').count();
        intrinsic.height += cfg.newline_pad_px * newlines as f32;
        self.push_row(Row::new(
            RowContent::Text { font, text },
            SizePolicy::from_factor(factor),
            intrinsic,
        ))
    }

    /// Push an image row, taking the texture's native dimensions as its
    /// intrinsic size.
    pub fn push_image(
        &mut self,
        measurer: &dyn Measurer,
        texture: TextureRef,
        factor: f32,
    ) -> Result<&mut Row, DeckError> {
        let intrinsic = measurer.texture_size(texture);
        if intrinsic.is_degenerate() {
            log::warn!("texture {} has zero area; image row will not draw", texture.id);
        }
        self.push_row(Row::new(
            RowContent::Image { texture },
            SizePolicy::from_factor(factor),
            intrinsic,
        ))
    }
}

/// Title and subtitle fonts used by the slide recipes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSet {
    pub title: FontRef,
    pub subtitle: FontRef,
}

/// Deck construction context: the measurer, fonts, and measurement
/// configuration travel together so no ambient state is needed.
pub struct DeckBuilder<'m> {
    deck: Deck,
    measurer: &'m dyn Measurer,
    fonts: FontSet,
    measure: MeasureConfig,
}

impl<'m> DeckBuilder<'m> {
    pub fn new(measurer: &'m dyn Measurer, fonts: FontSet) -> Self {
        Self {
            deck: Deck::new(),
            measurer,
            fonts,
            measure: MeasureConfig::default(),
        }
    }

    /// Override the text measurement configuration.
    pub fn with_measure_config(mut self, measure: MeasureConfig) -> Self {
        self.measure = measure;
        self
    }

    /// Append a pre-built slide.
    pub fn push_slide(&mut self, slide: Slide) -> Result<&mut Slide, DeckError> {
        self.deck.push_slide(slide)
    }

    /// Centered text slide: spacer, title, optional subtitle, spacer.
    pub fn text_slide(&mut self, title: &str, subtitle: Option<&str>) -> Result<(), DeckError> {
        let mut slide = Slide::new();
        slide.push_empty(0.35)?;
        slide.push_text(self.measurer, &self.measure, self.fonts.title, title, 0.1)?;
        if let Some(subtitle) = subtitle {
            slide.push_text(self.measurer, &self.measure, self.fonts.subtitle, subtitle, 0.1)?;
        }
        slide.push_empty(0.45)?;
        self.deck.push_slide(slide)?;
        Ok(())
    }

    /// Image slide: title, dominant image band, optional subtitle.
    pub fn image_slide(
        &mut self,
        title: &str,
        texture: TextureRef,
        subtitle: Option<&str>,
    ) -> Result<(), DeckError> {
        let mut slide = Slide::new();
        slide.push_text(self.measurer, &self.measure, self.fonts.title, title, 0.1)?;
        slide.push_image(self.measurer, texture, 0.7)?;
        if let Some(subtitle) = subtitle {
            slide.push_text(self.measurer, &self.measure, self.fonts.subtitle, subtitle, 0.2)?;
        }
        self.deck.push_slide(slide)?;
        Ok(())
    }

    pub fn finish(self) -> Deck {
        self.deck
    }
}
