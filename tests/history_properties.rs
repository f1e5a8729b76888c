use egui::pos2;
use sketchpad::{Drawable, History, Sticker, Stroke};

// Distinct strokes so equality checks can tell them apart
fn strokes(n: usize) -> Vec<Drawable> {
    (0..n)
        .map(|i| {
            let mut stroke = Stroke::begin(pos2(i as f32, 0.0), 1.0 + i as f32);
            stroke.extend(pos2(i as f32, 10.0));
            Drawable::from(stroke)
        })
        .collect()
}

#[test]
fn test_n_commits_then_n_undos() {
    for n in 0..6 {
        let mut history = History::new();
        history.commit(Sticker::place(pos2(1.0, 1.0), "⭐").into());
        let before = history.committed().to_vec();

        let drawables = strokes(n);
        for drawable in &drawables {
            history.commit(drawable.clone());
        }
        for _ in 0..n {
            assert!(history.undo());
        }

        assert_eq!(history.committed(), before.as_slice());
        let expected_redo: Vec<Drawable> = drawables.iter().rev().cloned().collect();
        assert_eq!(history.redo_stack(), expected_redo.as_slice());
    }
}

#[test]
fn test_undo_then_redo_is_identity() {
    let mut history = History::new();
    for drawable in strokes(4) {
        history.commit(drawable);
    }
    history.undo();

    let committed = history.committed().to_vec();
    let redo = history.redo_stack().to_vec();

    assert!(history.undo());
    assert!(history.redo());

    assert_eq!(history.committed(), committed.as_slice());
    assert_eq!(history.redo_stack(), redo.as_slice());
}

#[test]
fn test_commit_after_undo_empties_redo() {
    let mut history = History::new();
    for drawable in strokes(3) {
        history.commit(drawable);
    }
    history.undo();
    history.undo();
    assert_eq!(history.redo_stack().len(), 2);

    history.commit(Sticker::place(pos2(0.0, 0.0), "🐲").into());
    assert!(history.redo_stack().is_empty());
    assert!(!history.redo());
}

#[test]
fn test_clear_then_undo_is_noop() {
    let mut history = History::new();
    for drawable in strokes(2) {
        history.commit(drawable);
    }
    history.undo();
    history.clear();

    assert!(!history.undo());
    assert!(!history.redo());
    assert!(history.committed().is_empty());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_no_coalescing() {
    let mut history = History::new();
    for drawable in strokes(3) {
        history.commit(drawable);
    }
    history.undo();
    assert_eq!(history.len(), 2);
}
