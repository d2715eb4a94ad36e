//! Undo/Redo History
//!
//! A single bounded stack serves both undo and redo. Undo lowers the
//! logical top but leaves the undone action in its slot, so redo can grow
//! the top back over it. Slots above the top are only trusted while they
//! hold a value; adding a new action tombstones all of them, since a new
//! action is the only event that invalidates the redo path.

use std::sync::Arc;

use log::{debug, warn};
use uuid::Uuid;

use crate::action::PaintAction;
use crate::collections::ArrayStack;
use crate::error::Result;
use crate::grid::Grid;

/// Default maximum number of actions kept
pub const DEFAULT_HISTORY_CAPACITY: usize = 10_000;

/// A paint action shared between the history and its caller
pub type SharedAction = Arc<dyn PaintAction>;

/// Bounded undo/redo history of paint actions
///
/// When full, adding an action evicts the oldest one. The eviction is
/// returned to the caller and logged, and its id is kept.
#[derive(Debug)]
pub struct UndoTracker {
    history: ArrayStack<SharedAction>,
    /// Ids of actions evicted because the history was full, oldest first
    evicted_ids: Vec<Uuid>,
}

impl Default for UndoTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoTracker {
    /// Create a tracker holding up to `DEFAULT_HISTORY_CAPACITY` actions
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a tracker holding up to `capacity` actions
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: ArrayStack::new(capacity),
            evicted_ids: Vec::new(),
        }
    }

    /// Record a new action
    ///
    /// Discards any redo history, then pushes `action` as the newest entry.
    /// Returns the oldest action if it had to be evicted to make room.
    pub fn add_action(&mut self, action: SharedAction) -> Option<SharedAction> {
        let discarded = self.history.clear_tail();
        if discarded > 0 {
            debug!("Discarded {} redoable action(s)", discarded);
        }

        let evicted = self.history.push(action);
        if let Some(oldest) = &evicted {
            self.evicted_ids.push(oldest.id());
            warn!(
                "Undo history full ({} actions), evicted {} recorded at {}: {}",
                self.history.capacity(),
                oldest.id(),
                oldest.created_at().format("%H:%M:%S%.3f"),
                oldest.description()
            );
        }
        evicted
    }

    /// Undo the newest action against `grid`
    ///
    /// Returns `Ok(None)` if there is nothing to undo. If the action fails
    /// to apply, the error is returned and the history is unchanged.
    pub fn undo(&mut self, grid: &mut Grid) -> Result<Option<SharedAction>> {
        let Some(action) = self.history.peek().cloned() else {
            return Ok(None);
        };
        action.undo_apply(grid)?;
        self.history.pop();
        debug!("Undid {}: {}", action.id(), action.description());
        Ok(Some(action))
    }

    /// Redo the most recently undone action against `grid`
    ///
    /// Returns `Ok(None)` if the slot above the top is tombstoned or the
    /// history is full. If the action fails to apply, the error is returned
    /// and the history is unchanged.
    pub fn redo(&mut self, grid: &mut Grid) -> Result<Option<SharedAction>> {
        let Some(action) = self.history.peek_next().cloned() else {
            return Ok(None);
        };
        action.redo_apply(grid)?;
        self.history.reextend();
        debug!("Redid {}: {}", action.id(), action.description());
        Ok(Some(action))
    }

    /// Check if there is an action to undo
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Check if there is an action to redo
    pub fn can_redo(&self) -> bool {
        self.history.peek_next().is_some()
    }

    /// The action `undo` would reverse
    pub fn peek_undo(&self) -> Option<&SharedAction> {
        self.history.peek()
    }

    /// The action `redo` would replay
    pub fn peek_redo(&self) -> Option<&SharedAction> {
        self.history.peek_next()
    }

    /// Number of undoable actions
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Maximum number of actions kept
    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    /// How many actions were evicted because the history was full
    pub fn evicted_count(&self) -> u64 {
        self.evicted_ids.len() as u64
    }

    /// Ids of evicted actions, oldest first
    pub fn evicted_action_ids(&self) -> &[Uuid] {
        &self.evicted_ids
    }
}
