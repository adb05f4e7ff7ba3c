//! Error types for deck construction.

use core::fmt;

/// Error returned when slide or deck construction fails.
///
/// All construction failures are local and non-fatal: a rejected push
/// simply yields fewer rows or slides, and the container keeps its
/// previous contents untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// A slide already holds its maximum number of rows.
    RowCapacity {
        /// Configured per-slide row capacity.
        capacity: usize,
    },
    /// A deck already holds its maximum number of slides.
    SlideCapacity {
        /// Configured per-deck slide capacity.
        capacity: usize,
    },
}

impl fmt::Display for DeckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowCapacity { capacity } => {
                write!(f, "slide row capacity exceeded (max {capacity})")
            }
            Self::SlideCapacity { capacity } => {
                write!(f, "deck slide capacity exceeded (max {capacity})")
            }
        }
    }
}

impl std::error::Error for DeckError {}

#[cfg(test)]
mod tests {
    use super::DeckError;

    #[test]
    fn display_names_the_exhausted_capacity() {
        let row = DeckError::RowCapacity { capacity: 8 };
        assert_eq!(row.to_string(), "slide row capacity exceeded (max 8)");
        let slide = DeckError::SlideCapacity { capacity: 64 };
        assert_eq!(slide.to_string(), "deck slide capacity exceeded (max 64)");
    }
}
