//! embedded-graphics backend for `slide-stream` frames.
//!
//! Provides the measurement side (a monospaced-font [`Measurer`] plus a
//! bounded texture registry) and the execution side (replaying a
//! [`SlideFrame`]'s draw commands onto any `DrawTarget<Color = Rgb888>`).

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

use core::fmt;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::geometry::{Point, Size as EgSize};
use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_6X9, FONT_8X13, FONT_9X15, FONT_9X18,
};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use embedded_graphics::primitives::{Primitive, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::{Drawable, Pixel};

use slide_stream::{FontRef, Measurer, Size, TextureRef};
use slide_stream_render::{
    DrawCommand, ImageCommand, RectCommand, Rgba, SlideFrame, TextCommand, TriangleCommand,
};

/// Pick the bundled monospaced face closest to a requested point size.
///
/// Mono glyph cells carry their own inter-character padding, which
/// stands in for the model's fixed character spacing.
pub fn font_for(size_px: f32) -> &'static MonoFont<'static> {
    if size_px <= 9.0 {
        &FONT_6X9
    } else if size_px <= 13.0 {
        &FONT_8X13
    } else if size_px <= 15.0 {
        &FONT_9X15
    } else if size_px <= 18.0 {
        &FONT_9X18
    } else {
        &FONT_10X20
    }
}

fn glyph_advance(font: &MonoFont<'_>) -> u32 {
    font.character_size.width + font.character_spacing
}

/// Limits for the texture registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextureLimits {
    /// Maximum number of registered textures.
    pub max_textures: usize,
    /// Maximum aggregate pixel count across all registered textures.
    pub max_total_pixels: usize,
}

impl Default for TextureLimits {
    fn default() -> Self {
        Self {
            max_textures: 64,
            max_total_pixels: 16 * 1024 * 1024,
        }
    }
}

/// Error returned when texture registration fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureRegistryError {
    ZeroDimension,
    DataSizeMismatch { expected: usize, actual: usize },
    MaxTexturesExceeded,
    MaxTotalPixelsExceeded,
}

impl fmt::Display for TextureRegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "texture has a zero dimension"),
            Self::DataSizeMismatch { expected, actual } => {
                write!(f, "texture data length {actual} does not match {expected}")
            }
            Self::MaxTexturesExceeded => write!(f, "texture slot limit reached"),
            Self::MaxTotalPixelsExceeded => write!(f, "texture pixel budget exhausted"),
        }
    }
}

impl std::error::Error for TextureRegistryError {}

/// One registered RGB888 bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbTexture {
    width: u32,
    height: u32,
    /// Row-major RGB bytes, 3 per pixel.
    data: Vec<u8>,
}

impl RgbTexture {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn sample(&self, x: u32, y: u32) -> Rgb888 {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        let offset = ((y * self.width + x) * 3) as usize;
        Rgb888::new(self.data[offset], self.data[offset + 1], self.data[offset + 2])
    }
}

/// Bounded in-memory texture store.
///
/// Registration assigns the [`TextureRef`] ids the deck references;
/// budget overruns are rejected, never silently evicted.
#[derive(Clone, Debug, Default)]
pub struct TextureRegistry {
    textures: Vec<RgbTexture>,
    limits: TextureLimits,
    total_pixels: usize,
}

impl TextureRegistry {
    pub fn new(limits: TextureLimits) -> Self {
        Self {
            textures: Vec::new(),
            limits,
            total_pixels: 0,
        }
    }

    /// Register an RGB888 bitmap and hand back its reference.
    pub fn register(
        &mut self,
        width: u32,
        height: u32,
        data: Vec<u8>,
    ) -> Result<TextureRef, TextureRegistryError> {
        if width == 0 || height == 0 {
            return Err(TextureRegistryError::ZeroDimension);
        }
        let expected = (width as usize) * (height as usize) * 3;
        if data.len() != expected {
            return Err(TextureRegistryError::DataSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        if self.textures.len() >= self.limits.max_textures {
            return Err(TextureRegistryError::MaxTexturesExceeded);
        }
        let pixels = (width as usize) * (height as usize);
        if self.total_pixels + pixels > self.limits.max_total_pixels {
            return Err(TextureRegistryError::MaxTotalPixelsExceeded);
        }
        self.total_pixels += pixels;
        self.textures.push(RgbTexture {
            width,
            height,
            data,
        });
        Ok(TextureRef::new((self.textures.len() - 1) as u32))
    }

    pub fn get(&self, texture: TextureRef) -> Option<&RgbTexture> {
        self.textures.get(texture.id as usize)
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

/// Monospaced [`Measurer`] backed by the bundled embedded-graphics
/// fonts and an optional texture registry.
#[derive(Clone, Copy, Debug, Default)]
pub struct EgMeasurer<'a> {
    registry: Option<&'a TextureRegistry>,
}

impl<'a> EgMeasurer<'a> {
    pub fn new(registry: &'a TextureRegistry) -> Self {
        Self {
            registry: Some(registry),
        }
    }

    /// Measurer without texture lookup; texture sizes report zero.
    pub fn text_only() -> Self {
        Self { registry: None }
    }
}

impl Measurer for EgMeasurer<'_> {
    fn measure_text(&self, font: FontRef, text: &str) -> Size {
        let face = font_for(font.size_px);
        let advance = glyph_advance(face);
        let widest = text
            .split('\n')
            .map(|line| line.chars().count() as u32 * advance)
            .max()
            .unwrap_or(0);
        let lines = text.split('\n').count();
        Size::new(widest as f32, lines as f32 * font.size_px)
    }

    fn texture_size(&self, texture: TextureRef) -> Size {
        match self.registry.and_then(|r| r.get(texture)) {
            Some(tex) => Size::new(tex.width() as f32, tex.height() as f32),
            None => {
                log::warn!("texture {} not registered; reporting zero size", texture.id);
                Size::ZERO
            }
        }
    }
}

fn to_color(color: Rgba) -> Rgb888 {
    Rgb888::new(color.r, color.g, color.b)
}

fn tint_channel(value: u8, tint: u8) -> u8 {
    ((value as u16 * tint as u16) / 255) as u8
}

fn draw_text<D>(display: &mut D, cmd: &TextCommand) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = MonoTextStyle::new(font_for(cmd.font.size_px), to_color(cmd.color));
    Text::with_baseline(
        &cmd.text,
        Point::new(cmd.x, cmd.y),
        style,
        Baseline::Top,
    )
    .draw(display)?;
    Ok(())
}

fn draw_rect<D>(display: &mut D, cmd: &RectCommand) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Rectangle::new(
        Point::new(cmd.x, cmd.y),
        EgSize::new(cmd.width, cmd.height),
    )
    .into_styled(PrimitiveStyle::with_fill(to_color(cmd.color)))
    .draw(display)
}

fn draw_triangle<D>(display: &mut D, cmd: &TriangleCommand) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Triangle::new(
        Point::new(cmd.p1.0, cmd.p1.1),
        Point::new(cmd.p2.0, cmd.p2.1),
        Point::new(cmd.p3.0, cmd.p3.1),
    )
    .into_styled(PrimitiveStyle::with_fill(to_color(cmd.color)))
    .draw(display)
}

fn draw_image<D>(
    display: &mut D,
    cmd: &ImageCommand,
    registry: &TextureRegistry,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let Some(tex) = registry.get(cmd.texture) else {
        log::warn!("texture {} not registered; skipping image draw", cmd.texture.id);
        return Ok(());
    };
    if cmd.width == 0 || cmd.height == 0 {
        return Ok(());
    }
    // Nearest-neighbor scale of the full source region into the dest
    // rectangle.
    let mut pixels = Vec::with_capacity((cmd.width * cmd.height) as usize);
    for dy in 0..cmd.height {
        let sy = dy * tex.height() / cmd.height;
        for dx in 0..cmd.width {
            let sx = dx * tex.width() / cmd.width;
            let sample = tex.sample(sx, sy);
            let color = Rgb888::new(
                tint_channel(sample.r(), cmd.tint.r),
                tint_channel(sample.g(), cmd.tint.g),
                tint_channel(sample.b(), cmd.tint.b),
            );
            pixels.push(Pixel(
                Point::new(cmd.x + dx as i32, cmd.y + dy as i32),
                color,
            ));
        }
    }
    display.draw_iter(pixels)
}

/// Replay one frame's commands onto a display, content layer first.
///
/// Blank-colored commands are skipped; draw errors from the target
/// propagate unchanged.
pub fn draw_frame<D>(
    display: &mut D,
    frame: &SlideFrame,
    registry: &TextureRegistry,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for cmd in frame.commands() {
        match cmd {
            DrawCommand::Text(text) => {
                if !text.color.is_blank() {
                    draw_text(display, text)?;
                }
            }
            DrawCommand::Rect(rect) => {
                if !rect.color.is_blank() {
                    draw_rect(display, rect)?;
                }
            }
            DrawCommand::Triangle(tri) => {
                if !tri.color.is_blank() {
                    draw_triangle(display, tri)?;
                }
            }
            DrawCommand::Image(image) => {
                if !image.tint.is_blank() {
                    draw_image(display, image, registry)?;
                }
            }
        }
    }
    Ok(())
}
