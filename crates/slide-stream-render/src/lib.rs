//! Render IR, layout solver, and frame composition for `slide-stream`.

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

mod render_engine;
mod render_ir;
mod render_layout;

pub use slide_stream::{FontRef, Measurer, Size, TextureRef};

pub use render_engine::{ChromeConfig, RenderEngine, RenderEngineOptions};
pub use render_ir::{
    DrawCommand, ImageCommand, RectCommand, Rgba, SlideFrame, TextCommand, TriangleCommand,
};
pub use render_layout::{ImageFitPolicy, LayoutConfig, LayoutEngine, Viewport};
