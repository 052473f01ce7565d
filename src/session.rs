//! A caller-owned study session: a history tree plus the active node.
//!
//! There is no process-wide "current game" anywhere in this crate; each
//! session is an independent value, and concurrent use of one session must
//! be serialized by its owner like the [`History`] it wraps.

#[cfg(feature = "logging")]
use log::debug;

use crate::game::{Game, Move, MoveError, Promotion};
use crate::history::{History, NodeId};

/// Owns a [`History`] and tracks the node new moves are played from.
#[derive(Clone, Debug)]
pub struct GameSession {
    history: History,
    current: NodeId,
}

impl GameSession {
    /// A session rooted at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Self::from_game(Game::initial())
    }

    /// A session rooted at an arbitrary position.
    #[must_use]
    pub fn from_game(game: Game) -> Self {
        let history = History::new(game);
        let current = history.root();
        GameSession { history, current }
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The active node.
    #[inline]
    #[must_use]
    pub fn current(&self) -> NodeId {
        self.current
    }

    /// The position at the active node.
    #[must_use]
    pub fn game(&self) -> &Game {
        self.history.game(self.current)
    }

    /// Play a move from the active node.
    ///
    /// Generates the figurine notation (which also validates full
    /// legality), applies the move, attaches the resulting position as a
    /// child of the active node — reusing an existing sibling carrying the
    /// same notation — and advances the cursor to it.
    pub fn play(&mut self, mv: Move, promotion: Option<Promotion>) -> Result<NodeId, MoveError> {
        let notation = self.game().fan_for_move(mv, promotion)?;
        let next = self.game().apply_move(mv, promotion)?;

        #[cfg(feature = "logging")]
        debug!("playing {notation} from {:?}", self.current);

        let id = self.history.add_child(self.current, next, notation);
        self.current = id;
        Ok(id)
    }

    /// Move the cursor to another node.
    ///
    /// The id must reference a live node of this session's history.
    pub fn jump_to(&mut self, node: NodeId) {
        self.current = node;
    }

    /// Comment on the active node.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.history.set_comment(self.current, comment);
    }

    pub fn clear_comment(&mut self) {
        self.history.clear_comment(self.current);
    }

    /// Make the active node's line the main line at its branch point.
    pub fn promote_current_line(&mut self) {
        self.history.promote_line(self.current);
    }

    /// Delete the active node's line and fall back to the surviving branch
    /// point (or the root when the whole tree was cleared).
    pub fn delete_current_line(&mut self) {
        let line_root = self.history.line_root(self.current);
        let fallback = if self.history.parent(line_root).is_none() {
            self.history.root()
        } else {
            line_root
        };
        self.history.delete_line(self.current);
        self.current = fallback;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        GameSession::new()
    }
}
