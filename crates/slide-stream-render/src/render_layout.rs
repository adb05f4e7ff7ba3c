//! Row layout solving and row rendering.
//!
//! The solver converts a slide's declarative row list into concrete
//! pixel geometry for the current viewport; the renderer turns solved
//! geometry into draw commands. Solving is a single O(rows) pass with
//! independent per-row floor rounding and is cheap enough to re-run
//! every frame.

use smallvec::SmallVec;

use slide_stream::{Measurer, Row, RowContent, Size, SizePolicy, Slide};

use crate::render_ir::{DrawCommand, ImageCommand, Rgba, TextCommand};

/// Viewport rectangle available to a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Aspect-preserving containment policy for image rows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFitPolicy {
    /// Render at intrinsic size when it fits both axes; otherwise scale
    /// to the axis with the larger overflow and derive the other from
    /// the aspect ratio.
    #[default]
    OverflowCompare,
    /// Always scale so the image height equals the row's solved height,
    /// deriving width from the aspect ratio. No width clamp applies.
    HeightPriority,
}

/// Layout and row-rendering configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Image containment policy.
    pub image_fit: ImageFitPolicy,
    /// Color applied to text rows.
    pub text_color: Rgba,
    /// Tint applied to image rows.
    pub image_tint: Rgba,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            image_fit: ImageFitPolicy::default(),
            text_color: Rgba::WHITE,
            image_tint: Rgba::WHITE,
        }
    }
}

/// Deterministic solver and row renderer.
#[derive(Clone, Copy, Debug, Default)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
}

impl LayoutEngine {
    pub fn new(cfg: LayoutConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.cfg
    }

    /// Solve each row's actual size for the given available space,
    /// rewriting every row's solved geometry in place.
    ///
    /// Leftover height is the available height minus the intrinsic
    /// heights of all fixed rows. Fraction rows take their share of the
    /// raw leftover; fill rows take an equal split of the raw leftover
    /// among all non-fixed rows. Fraction shares are deliberately not
    /// subtracted from the fill divisor; see the layout regression
    /// tests pinning this behavior.
    pub fn solve(&self, slide: &mut Slide, height: f32, width: f32) {
        let mut leftover = height;
        let mut dynamic_rows = 0usize;
        for row in slide.rows() {
            if row.policy().is_fixed() {
                leftover -= row.intrinsic().height;
            } else {
                dynamic_rows += 1;
            }
        }

        let share = if dynamic_rows > 0 {
            leftover / dynamic_rows as f32
        } else {
            // No dynamic rows: fill shares are skipped entirely rather
            // than dividing by zero.
            log::debug!("slide has no dynamic rows; leftover {leftover}px unassigned");
            0.0
        };

        for row in slide.rows_mut() {
            let mut actual = row.intrinsic();
            if actual.width > width {
                actual.width = width;
            }
            match row.policy() {
                SizePolicy::Fixed => {}
                SizePolicy::Fraction(p) => actual.height = (leftover * p).floor(),
                SizePolicy::Fill => actual.height = share.floor(),
            }
            row.set_actual(actual);
        }
    }

    /// Render one row's solved geometry into draw commands.
    ///
    /// Consumes geometry only; the caller advances the vertical cursor
    /// by `row.actual().height` after each row.
    pub fn render_row(
        &self,
        row: &Row,
        origin_y: f32,
        viewport_width: f32,
        measurer: &dyn Measurer,
    ) -> SmallVec<[DrawCommand; 4]> {
        let mut out = SmallVec::new();
        match row.content() {
            RowContent::Empty => {}
            RowContent::Text { font, text } => {
                // Center the whole block vertically within the solved
                // height, then lay lines top to bottom.
                let mut y =
                    origin_y + ((row.actual().height - row.intrinsic().height) / 2.0).floor();
                for line in text.split('\n') {
                    if !line.is_empty() {
                        let line_width = measurer.measure_line(*font, line);
                        let x = (viewport_width / 2.0 - line_width / 2.0).floor();
                        out.push(DrawCommand::Text(TextCommand {
                            x: x as i32,
                            y: y as i32,
                            text: line.to_string(),
                            font: *font,
                            color: self.cfg.text_color,
                        }));
                    }
                    y += font.line_height();
                }
            }
            RowContent::Image { texture } => {
                let intrinsic = row.intrinsic();
                let actual = row.actual();
                if intrinsic.is_degenerate() {
                    log::warn!("texture {} has zero area; skipping image row", texture.id);
                    return out;
                }
                let dest = fit_image(intrinsic, actual, self.cfg.image_fit);
                let x = (viewport_width / 2.0 - dest.width / 2.0).floor();
                let mut y = origin_y;
                if dest.height < actual.height {
                    y += ((actual.height - dest.height) / 2.0).floor();
                }
                out.push(DrawCommand::Image(ImageCommand {
                    texture: *texture,
                    src_width: intrinsic.width as u32,
                    src_height: intrinsic.height as u32,
                    x: x as i32,
                    y: y as i32,
                    width: dest.width as u32,
                    height: dest.height as u32,
                    tint: self.cfg.image_tint,
                }));
            }
        }
        out
    }

    /// Solve a slide for the region starting at `top`, then render each
    /// row, advancing the cursor by the solved height after each one.
    ///
    /// A slide with no rows produces no commands.
    pub fn render_slide(
        &self,
        slide: &mut Slide,
        top: f32,
        height: f32,
        width: f32,
        measurer: &dyn Measurer,
    ) -> Vec<DrawCommand> {
        self.solve(slide, height, width);
        let mut commands = Vec::with_capacity(slide.row_count() * 2);
        let mut y = top;
        for row in slide.rows() {
            commands.extend(self.render_row(row, y, width, measurer));
            y += row.actual().height;
        }
        commands
    }
}

/// Aspect-preserving destination size for an image row.
fn fit_image(intrinsic: Size, actual: Size, policy: ImageFitPolicy) -> Size {
    let aspect = intrinsic.width / intrinsic.height;
    match policy {
        ImageFitPolicy::OverflowCompare => {
            if actual.width >= intrinsic.width && actual.height >= intrinsic.height {
                intrinsic
            } else {
                let overflow_x = intrinsic.width - actual.width;
                let overflow_y = intrinsic.height - actual.height;
                if overflow_x > overflow_y {
                    Size::new(actual.width.floor(), (actual.width / aspect).floor())
                } else {
                    Size::new((aspect * actual.height).floor(), actual.height.floor())
                }
            }
        }
        ImageFitPolicy::HeightPriority => {
            Size::new((aspect * actual.height).floor(), actual.height.floor())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_compare_keeps_intrinsic_when_it_fits() {
        let dest = fit_image(
            Size::new(100.0, 50.0),
            Size::new(400.0, 300.0),
            ImageFitPolicy::OverflowCompare,
        );
        assert_eq!(dest, Size::new(100.0, 50.0));
    }

    #[test]
    fn overflow_compare_scales_the_worse_axis() {
        // Width overflows by 200, height by 50: width wins.
        let dest = fit_image(
            Size::new(600.0, 300.0),
            Size::new(400.0, 250.0),
            ImageFitPolicy::OverflowCompare,
        );
        assert_eq!(dest, Size::new(400.0, 200.0));
    }

    #[test]
    fn height_priority_ignores_width_clamp() {
        let dest = fit_image(
            Size::new(600.0, 300.0),
            Size::new(100.0, 200.0),
            ImageFitPolicy::HeightPriority,
        );
        assert_eq!(dest, Size::new(400.0, 200.0));
    }
}
