//! Per-frame composition: chrome plus the current slide.
//!
//! The engine runs the layout solve and row rendering for the current
//! slide once per frame and, when enabled, surrounds it with header and
//! footer chrome (slide counter bar and thumbnail strip). Chrome
//! consumes layout output; it never feeds back into solving.

use slide_stream::{Deck, FontRef, Measurer, RowKind};

use crate::render_ir::{
    DrawCommand, RectCommand, Rgba, SlideFrame, TextCommand, TriangleCommand,
};
use crate::render_layout::{LayoutConfig, LayoutEngine, Viewport};

/// Header and footer chrome configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeConfig {
    /// Emit the header bar with the slide counter label.
    pub header_enabled: bool,
    /// Emit the footer thumbnail strip.
    pub footer_enabled: bool,
    /// Bar height and thumbnail box edge length.
    pub bar_px: f32,
    /// Inset of the thumbnail icon within its box.
    pub icon_margin_px: f32,
    /// Font for the header counter label.
    pub label_font: FontRef,
    pub bar_color: Rgba,
    pub label_color: Rgba,
    /// Thumbnail box color for the current slide.
    pub active_color: Rgba,
    /// Thumbnail box color for a hovered slide.
    pub hover_color: Rgba,
    /// Icon color for text-dominant slides.
    pub text_icon_color: Rgba,
    /// Icon color for image-dominant slides.
    pub image_icon_color: Rgba,
}

impl ChromeConfig {
    /// Chrome geometry and palette matching the classic presentation
    /// frame: 16px bars, 4px icon insets.
    pub fn with_label_font(label_font: FontRef) -> Self {
        Self {
            header_enabled: true,
            footer_enabled: true,
            bar_px: 16.0,
            icon_margin_px: 4.0,
            label_font,
            bar_color: Rgba::opaque(40, 40, 40),
            label_color: Rgba::WHITE,
            active_color: Rgba::opaque(0, 121, 241),
            hover_color: Rgba::opaque(102, 191, 255),
            text_icon_color: Rgba::opaque(200, 200, 200),
            image_icon_color: Rgba::opaque(200, 122, 255),
        }
    }

    /// No chrome: the slide gets the whole viewport.
    pub fn disabled() -> Self {
        Self {
            header_enabled: false,
            footer_enabled: false,
            ..Self::with_label_font(FontRef::new(0, 16.0))
        }
    }
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self::with_label_font(FontRef::new(0, 16.0))
    }
}

/// Frame-composition options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderEngineOptions {
    pub layout: LayoutConfig,
    pub chrome: ChromeConfig,
}

/// Composes one frame of draw commands per call.
#[derive(Clone, Copy, Debug, Default)]
pub struct RenderEngine {
    layout: LayoutEngine,
    chrome: ChromeConfig,
}

impl RenderEngine {
    pub fn new(options: RenderEngineOptions) -> Self {
        Self {
            layout: LayoutEngine::new(options.layout),
            chrome: options.chrome,
        }
    }

    pub fn layout_engine(&self) -> &LayoutEngine {
        &self.layout
    }

    /// Compose the current slide plus chrome for one frame.
    ///
    /// Layout is re-solved unconditionally; viewport changes between
    /// frames are picked up without any caller-side invalidation.
    /// `hover` marks the footer thumbnail under the pointer, if any.
    /// An empty deck yields chrome only.
    pub fn compose_frame(
        &self,
        deck: &mut Deck,
        viewport: Viewport,
        measurer: &dyn Measurer,
        hover: Option<usize>,
    ) -> SlideFrame {
        let mut frame = SlideFrame::new();
        let chrome = &self.chrome;

        let top = if chrome.header_enabled {
            chrome.label_font.size_px + 8.0
        } else {
            0.0
        };
        let bottom = if chrome.footer_enabled {
            viewport.height - chrome.bar_px
        } else {
            viewport.height
        };

        if chrome.header_enabled {
            self.push_header(&mut frame, deck, viewport);
        }
        if chrome.footer_enabled {
            self.push_footer(&mut frame, deck, viewport, hover);
        }

        let current = deck.current_index();
        if let Some(slide) = deck.current_slide_mut() {
            frame.content_commands =
                self.layout
                    .render_slide(slide, top, bottom - top, viewport.width, measurer);
        } else {
            log::debug!("empty deck; composing chrome only (index {current})");
        }
        frame
    }

    fn push_header(&self, frame: &mut SlideFrame, deck: &Deck, viewport: Viewport) {
        let chrome = &self.chrome;
        frame.chrome_commands.push(DrawCommand::Rect(RectCommand {
            x: 0,
            y: 0,
            width: viewport.width as u32,
            height: chrome.bar_px as u32,
            color: chrome.bar_color,
        }));
        let label = format!("{} of {}", deck.current_index() + 1, deck.slide_count());
        frame.chrome_commands.push(DrawCommand::Text(TextCommand {
            x: 4,
            y: 0,
            text: label,
            font: chrome.label_font,
            color: chrome.label_color,
        }));
    }

    fn push_footer(
        &self,
        frame: &mut SlideFrame,
        deck: &Deck,
        viewport: Viewport,
        hover: Option<usize>,
    ) {
        let chrome = &self.chrome;
        let bar = chrome.bar_px;
        let bar_y = viewport.height - bar;
        frame.chrome_commands.push(DrawCommand::Rect(RectCommand {
            x: 0,
            y: bar_y as i32,
            width: viewport.width as u32,
            height: bar as u32,
            color: chrome.bar_color,
        }));

        for (index, slide) in deck.slides().iter().enumerate() {
            let box_x = index as f32 * bar;
            let box_color = if index == deck.current_index() {
                chrome.active_color
            } else if hover == Some(index) {
                chrome.hover_color
            } else {
                Rgba::BLANK
            };
            if !box_color.is_blank() {
                frame.chrome_commands.push(DrawCommand::Rect(RectCommand {
                    x: box_x as i32,
                    y: bar_y as i32,
                    width: bar as u32,
                    height: bar as u32,
                    color: box_color,
                }));
            }

            let margin = chrome.icon_margin_px;
            match slide.dominant_kind() {
                RowKind::Empty => {}
                RowKind::Text => {
                    frame.chrome_commands.push(DrawCommand::Rect(RectCommand {
                        x: (box_x + margin) as i32,
                        y: (bar_y + margin) as i32,
                        width: (bar - margin * 2.0) as u32,
                        height: (bar - margin * 2.0) as u32,
                        color: chrome.text_icon_color,
                    }));
                }
                RowKind::Image => {
                    let p1 = ((box_x + margin) as i32, (bar_y + bar - margin) as i32);
                    let p2 = (
                        (box_x + bar - margin) as i32,
                        (bar_y + bar - margin) as i32,
                    );
                    let p3 = ((box_x + bar / 2.0) as i32, (bar_y + margin) as i32);
                    frame
                        .chrome_commands
                        .push(DrawCommand::Triangle(TriangleCommand {
                            p1,
                            p2,
                            p3,
                            color: chrome.image_icon_color,
                        }));
                }
            }
        }
    }
}
