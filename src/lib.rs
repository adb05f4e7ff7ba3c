//! Row-based slide deck model with policy-driven dynamic layout.
//!
//! A deck is an ordered, bounded sequence of slides; a slide is an
//! ordered, bounded sequence of rows (empty spacers, text blocks, or
//! images). Each row carries a sizing policy that the layout solver in
//! `slide-stream-render` turns into concrete pixel geometry for the
//! current viewport, once per frame.
//!
//! This crate holds the viewport-independent half: the data model, the
//! measurement-provider contract used to compute intrinsic row sizes at
//! construction time, the slide builder, and deck navigation.
//!
//! # Usage
//!
//! ```rust,no_run
//! use slide_stream::{DeckBuilder, FontRef, FontSet, Measurer, NavCommand};
//!
//! # fn example(measurer: &dyn Measurer) -> Result<(), slide_stream::DeckError> {
//! let fonts = FontSet {
//!     title: FontRef::new(0, 36.0),
//!     subtitle: FontRef::new(0, 24.0),
//! };
//! let mut builder = DeckBuilder::new(measurer, fonts);
//! builder.text_slide("A Story", Some("In three slides"))?;
//! builder.text_slide("The End.", None)?;
//! let mut deck = builder.finish();
//! deck.navigate(NavCommand::Next);
//! # Ok(())
//! # }
//! ```

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

mod builder;
mod deck;
mod error;
mod measure;
mod navigation;

pub use builder::{DeckBuilder, FontSet, MeasureConfig};
pub use deck::{Deck, Row, RowContent, RowKind, SizePolicy, Slide, ROW_CAPACITY, SLIDE_CAPACITY};
pub use error::DeckError;
pub use measure::{FontRef, Measurer, Size, TextureRef, TEXT_SPACING};
pub use navigation::NavCommand;
