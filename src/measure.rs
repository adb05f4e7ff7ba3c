//! Measurement-provider contracts.
//!
//! Intrinsic row sizes are computed once, at construction time, through
//! a [`Measurer`] supplied by the rendering backend. The model never
//! loads fonts or textures itself; it holds opaque references and asks
//! the provider for pixel extents.

/// Fixed character spacing used for every text measurement and draw.
pub const TEXT_SPACING: f32 = 1.0;

/// A width/height pair in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero-area size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Opaque font handle plus its configured point size.
///
/// The point size doubles as the line height: the renderer advances the
/// vertical cursor by `size_px` after each drawn line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontRef {
    /// Backend-assigned font identifier.
    pub id: u32,
    /// Configured point size in pixels.
    pub size_px: f32,
}

impl FontRef {
    pub const fn new(id: u32, size_px: f32) -> Self {
        Self { id, size_px }
    }

    /// Vertical advance per text line.
    pub fn line_height(&self) -> f32 {
        self.size_px
    }
}

/// Opaque texture handle.
///
/// Texture data is owned by the asset-loading collaborator; rows only
/// reference it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureRef {
    /// Backend-assigned texture identifier.
    pub id: u32,
}

impl TextureRef {
    pub const fn new(id: u32) -> Self {
        Self { id }
    }
}

/// Pixel-extent provider for fonts and textures.
///
/// Implementations must be deterministic for a given input: the builder
/// measures text once at construction and the renderer re-measures
/// individual lines every draw, and the two must agree.
pub trait Measurer {
    /// Extent of the full (possibly multi-line) string rendered at
    /// `font.size_px` with [`TEXT_SPACING`].
    fn measure_text(&self, font: FontRef, text: &str) -> Size;

    /// Width of a single line of text.
    ///
    /// Default delegates to [`measure_text`](Self::measure_text).
    fn measure_line(&self, font: FontRef, line: &str) -> f32 {
        self.measure_text(font, line).width
    }

    /// Intrinsic pixel dimensions of a texture.
    ///
    /// A missing or failed texture reports [`Size::ZERO`]; callers
    /// treat that as a skip-draw condition, never an error.
    fn texture_size(&self, texture: TextureRef) -> Size;
}
