use crate::drawable::Drawable;

/// Committed drawables plus the stack of undone ones.
///
/// Classic two-stack undo: `undo` moves the newest committed drawable onto
/// the redo stack, `redo` moves it back. Committing anything new invalidates
/// the redo stack.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Visible drawables in z-order (first drawn at the back)
    committed: Vec<Drawable>,
    /// Drawables removed by undo, newest on top
    redo_stack: Vec<Drawable>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished drawable and drop the redo history
    pub fn commit(&mut self, drawable: Drawable) {
        log::debug!("Committing {} (#{})", drawable.kind(), self.committed.len());
        self.committed.push(drawable);
        self.redo_stack.clear();
    }

    /// Forget undone drawables; called when new work starts
    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
    }

    /// Returns true if the committed content changed
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo_stack.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Returns true if the committed content changed
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Wipe both the committed list and the redo stack.
    ///
    /// Clearing is not itself undoable. Returns true if anything was removed.
    pub fn clear(&mut self) -> bool {
        let changed = !self.committed.is_empty() || !self.redo_stack.is_empty();
        self.committed.clear();
        self.redo_stack.clear();
        changed
    }

    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }

    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawable::{Sticker, Stroke};
    use egui::pos2;

    fn stroke(x: f32) -> Drawable {
        Stroke::begin(pos2(x, x), 2.0).into()
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(history.committed().is_empty());
        assert!(history.redo_stack().is_empty());
    }

    #[test]
    fn test_redo_on_empty_is_noop() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        assert!(!history.redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_undo_moves_last_to_redo() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.commit(Sticker::place(pos2(5.0, 5.0), "⭐").into());

        assert!(history.undo());
        assert_eq!(history.committed(), &[stroke(1.0)]);
        assert_eq!(history.redo_stack().len(), 1);
        assert_eq!(history.redo_stack()[0].kind(), "sticker");
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.commit(stroke(2.0));
        history.undo();

        assert!(history.clear());
        assert!(history.is_empty());
        assert!(!history.can_redo());
        assert!(!history.clear());
    }

    #[test]
    fn test_clear_is_not_undoable() {
        let mut history = History::new();
        history.commit(stroke(1.0));
        history.clear();

        assert!(!history.undo());
        assert!(!history.redo());
        assert!(history.is_empty());
    }
}
