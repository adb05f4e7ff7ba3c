//! Backend-agnostic draw commands in integer pixel space.

use slide_stream::{FontRef, TextureRef};

/// An RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    /// Fully transparent; backends skip draws with zero alpha.
    pub const BLANK: Self = Self::new(0, 0, 0, 0);

    /// True when a backend can skip the draw entirely.
    pub fn is_blank(&self) -> bool {
        self.a == 0
    }
}

/// Draw a single line of text with its top-left corner at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub x: i32,
    pub y: i32,
    pub text: String,
    pub font: FontRef,
    pub color: Rgba,
}

/// Draw a filled axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectCommand {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub color: Rgba,
}

/// Draw a filled triangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriangleCommand {
    pub p1: (i32, i32),
    pub p2: (i32, i32),
    pub p3: (i32, i32),
    pub color: Rgba,
}

/// Draw a texture's full source region scaled into a destination
/// rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageCommand {
    pub texture: TextureRef,
    /// Source region width; always the intrinsic texture width.
    pub src_width: u32,
    /// Source region height; always the intrinsic texture height.
    pub src_height: u32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    pub tint: Rgba,
}

/// One backend-agnostic draw operation.
///
/// Commands are emitted in top-to-bottom, left-to-right order matching
/// row order within a slide.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Text(TextCommand),
    Rect(RectCommand),
    Triangle(TriangleCommand),
    Image(ImageCommand),
}

/// One frame's worth of draw commands, split into content and chrome
/// layers.
///
/// Content holds the current slide's rows; chrome holds the header bar
/// and footer thumbnail strip. Backends that want a single stream use
/// [`commands`](Self::commands), which yields content first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlideFrame {
    pub content_commands: Vec<DrawCommand>,
    pub chrome_commands: Vec<DrawCommand>,
}

impl SlideFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Combined command count across both layers.
    pub fn command_count(&self) -> usize {
        self.content_commands.len() + self.chrome_commands.len()
    }

    /// Iterate all commands without allocating, content layer first.
    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.content_commands.iter().chain(self.chrome_commands.iter())
    }
}
