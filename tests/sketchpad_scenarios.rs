use egui::pos2;
use sketchpad::{Changes, Drawable, InputEvent, Preview, Sketchpad, SketchpadConfig, Tool};

fn draw_stroke(pad: &mut Sketchpad, x: f32) {
    pad.pointer_down(pos2(x, 0.0));
    pad.pointer_move(pos2(x, 5.0));
    pad.pointer_up(pos2(x, 5.0));
}

#[test]
fn test_stroke_scenario() {
    let mut pad = Sketchpad::default();
    let events = [
        InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
        InputEvent::PointerMove { pos: pos2(20.0, 10.0) },
        InputEvent::PointerMove { pos: pos2(20.0, 20.0) },
        InputEvent::PointerUp { pos: pos2(20.0, 20.0) },
    ];
    for event in &events {
        assert!(pad.handle(event).content);
    }

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 1);
    let stroke = committed[0].as_stroke().unwrap();
    assert_eq!(
        stroke.points(),
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
    );
    assert_eq!(stroke.width(), 2.0);
    assert!(!pad.is_drawing());
}

#[test]
fn test_sticker_placed_without_moving() {
    let mut pad = Sketchpad::default();
    let dragon = Tool::Sticker {
        glyph: "🐲".to_owned(),
    };
    pad.select_tool(dragon);
    pad.pointer_down(pos2(50.0, 50.0));
    pad.pointer_up(pos2(50.0, 50.0));

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 1);
    let sticker = committed[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(50.0, 50.0));
    assert_eq!(sticker.glyph(), "🐲");
}

#[test]
fn test_sticker_follows_drag() {
    let mut pad = Sketchpad::default();
    pad.add_custom_sticker(Some("🎈"));
    pad.pointer_down(pos2(5.0, 5.0));
    pad.pointer_move(pos2(30.0, 40.0));
    pad.pointer_up(pos2(30.0, 40.0));

    let sticker = pad.history().committed()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(30.0, 40.0));
    assert_eq!(sticker.glyph(), "🎈");
}

#[test]
fn test_three_strokes_two_undos_one_new() {
    let mut pad = Sketchpad::default();
    for x in [1.0, 2.0, 3.0] {
        draw_stroke(&mut pad, x);
    }
    let originals: Vec<Drawable> = pad.history().committed()[..2].to_vec();

    assert_eq!(pad.undo(), Changes::CONTENT);
    assert_eq!(pad.undo(), Changes::CONTENT);
    draw_stroke(&mut pad, 9.0);

    let committed = pad.history().committed();
    assert_eq!(committed.len(), 3);
    assert_eq!(&committed[..2], originals.as_slice());
    assert_eq!(committed[2].as_stroke().unwrap().points()[0], pos2(9.0, 0.0));
    assert!(pad.history().redo_stack().is_empty());
}

#[test]
fn test_press_invalidates_redo() {
    let mut pad = Sketchpad::default();
    draw_stroke(&mut pad, 1.0);
    pad.undo();
    assert!(pad.history().can_redo());

    pad.pointer_down(pos2(4.0, 4.0));
    assert!(!pad.history().can_redo());
}

#[test]
fn test_undo_redo_on_empty_report_nothing() {
    let mut pad = Sketchpad::default();
    assert_eq!(pad.undo(), Changes::NONE);
    assert_eq!(pad.redo(), Changes::NONE);
}

#[test]
fn test_clear_on_empty_still_reports_content() {
    let mut pad = Sketchpad::default();
    assert_eq!(pad.clear(), Changes::CONTENT);
    assert!(pad.history().is_empty());
}

#[test]
fn test_clear_then_undo_is_noop() {
    let mut pad = Sketchpad::default();
    draw_stroke(&mut pad, 1.0);
    draw_stroke(&mut pad, 2.0);
    pad.undo();

    assert_eq!(pad.clear(), Changes::CONTENT);
    assert_eq!(pad.undo(), Changes::NONE);
    assert_eq!(pad.redo(), Changes::NONE);
    assert!(pad.history().is_empty());
}

#[test]
fn test_preview_follows_tool() {
    let mut pad = Sketchpad::default();
    pad.pointer_move(pos2(8.0, 8.0));
    assert!(matches!(pad.preview(), Some(Preview::Dot { width, .. }) if *width == 2.0));

    // Switching tools drops the preview until the next move.
    let changes = pad.select_tool(Tool::Sticker {
        glyph: "🌵".to_owned(),
    });
    assert_eq!(changes, Changes::PREVIEW);
    assert!(pad.preview().is_none());

    pad.pointer_move(pos2(9.0, 9.0));
    assert_eq!(
        pad.preview(),
        Some(&Preview::Glyph {
            position: pos2(9.0, 9.0),
            glyph: "🌵".to_owned()
        })
    );
}

#[test]
fn test_preview_never_committed() {
    let mut pad = Sketchpad::default();
    pad.pointer_move(pos2(8.0, 8.0));
    pad.pointer_move(pos2(9.0, 8.0));
    assert!(pad.history().is_empty());
    assert!(pad.frame().preview.is_some());
}

#[test]
fn test_cancelled_prompt_changes_nothing() {
    let mut pad = Sketchpad::default();
    let palette = pad.tools().palette().len();
    let active = pad.tools().active().clone();

    assert_eq!(pad.add_custom_sticker(None), Changes::NONE);
    assert_eq!(pad.add_custom_sticker(Some("")), Changes::NONE);

    assert_eq!(pad.tools().palette().len(), palette);
    assert_eq!(pad.tools().active(), &active);
}

#[test]
fn test_config_palette_and_width() {
    let config = SketchpadConfig::from_json(r#"{ "pen_widths": [5.0], "stickers": [] }"#).unwrap();
    let mut pad = Sketchpad::new(&config);
    assert_eq!(pad.tools().palette(), &[Tool::Pen { width: 5.0 }]);

    draw_stroke(&mut pad, 1.0);
    assert_eq!(pad.history().committed()[0].as_stroke().unwrap().width(), 5.0);
}
