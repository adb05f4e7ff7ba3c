//! Deck navigation: clamped index movement.
//!
//! Input mapping (keys, wheel, clicks) belongs to the embedding driver;
//! this module owns only the index arithmetic. Every command clamps to
//! `[0, slide_count - 1]` and is idempotent at the boundaries.

use crate::deck::Deck;

/// Navigation command applied to a deck's current index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    JumpTo(usize),
}

impl Deck {
    /// Apply a navigation command, returning the resulting index.
    ///
    /// On an empty deck every command is a no-op at index zero.
    pub fn navigate(&mut self, cmd: NavCommand) -> usize {
        let count = self.slide_count();
        if count == 0 {
            return 0;
        }
        let last = count - 1;
        let current = self.current_index();
        let next = match cmd {
            NavCommand::Next => current.saturating_add(1).min(last),
            NavCommand::Previous => current.saturating_sub(1),
            NavCommand::First => 0,
            NavCommand::Last => last,
            NavCommand::JumpTo(index) => index.min(last),
        };
        self.set_current(next);
        next
    }
}
