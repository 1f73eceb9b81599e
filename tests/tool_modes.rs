use egui::{Key, Modifiers, Pos2, pos2};
use sketch_paint::primitive::PrimitiveKind;
use sketch_paint::shapes::ShapeKind;
use sketch_paint::surface::DrawingSurface;
use sketch_paint::tools::{PointerInput, ToolKind};
use sketch_paint::{Command, EditorSession, InputEvent, InteractionMode, Rgb};

fn drag(session: &mut EditorSession, points: &[Pos2]) {
    session.pointer_down(PointerInput::primary(points[0]));
    for point in &points[1..] {
        session.pointer_move(PointerInput::primary(*point));
    }
    session.pointer_up(PointerInput::primary(points[points.len() - 1]));
}

#[test]
fn test_pencil_is_the_starting_tool() {
    let session = EditorSession::default();
    assert_eq!(session.tool_kind(), ToolKind::Pencil);
    assert_eq!(session.brush_size(), 2.0);
}

#[test]
fn test_pencil_stroke_is_one_polyline() {
    let mut session = EditorSession::default();
    session.set_color(Rgb::RED);
    session.set_brush_size(8.0);
    drag(
        &mut session,
        &[pos2(0.0, 0.0), pos2(10.0, 5.0), pos2(20.0, 15.0)],
    );

    assert_eq!(session.surface().len(), 1);
    let id = session.surface().ids()[0];
    let stroke = session.surface().primitive(id).unwrap();
    assert_eq!(stroke.kind(), PrimitiveKind::Line);
    assert_eq!(stroke.coords().len(), 3);
    assert_eq!(stroke.style().outline, Some(Rgb::RED));
    assert_eq!(stroke.style().width, 8.0);
    assert_eq!(session.history().undo_stack(), &[Command::AddStroke(id)]);
}

#[test]
fn test_click_without_motion_draws_nothing() {
    let mut session = EditorSession::default();
    drag(&mut session, &[pos2(5.0, 5.0)]);
    assert!(session.surface().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn test_eraser_paints_background_with_a_wider_brush() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Eraser);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(30.0, 30.0)]);

    let id = session.surface().ids()[0];
    let stroke = session.surface().primitive(id).unwrap();
    assert_eq!(stroke.style().outline, Some(session.config().background));
    assert_eq!(stroke.style().width, 2.0 * session.config().eraser_width_factor);

    assert!(session.undo());
    assert!(session.surface().is_empty());
}

#[test]
fn test_invalid_brush_size_is_ignored() {
    let mut session = EditorSession::default();
    session.set_brush_size(0.0);
    session.set_brush_size(-3.0);
    assert_eq!(session.brush_size(), 2.0);
}

#[test]
fn test_fill_recolors_closest_content_not_handles() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Shape);
    drag(&mut session, &[pos2(100.0, 100.0), pos2(200.0, 200.0)]);
    let group = session.groups().iter().next().unwrap().clone();

    session.set_color(Rgb::BLUE);
    session.set_tool(ToolKind::Fill);
    // right on top of a handle
    session.pointer_down(PointerInput::primary(pos2(200.0, 200.0)));

    let content = session.surface().primitive(group.content()).unwrap();
    assert_eq!(content.style().fill, Some(Rgb::BLUE));
    let handle = session.surface().primitive(group.handles()[2]).unwrap();
    assert_eq!(handle.style().fill, Some(session.config().handle_color));
    assert!(session.history().undo_stack().len() == 1);
}

#[test]
fn test_fill_recolors_a_line_stroke() {
    let mut session = EditorSession::default();
    drag(&mut session, &[pos2(0.0, 0.0), pos2(100.0, 0.0)]);
    session.set_color(Rgb::RED);
    session.set_tool(ToolKind::Fill);
    session.pointer_down(PointerInput::primary(pos2(50.0, 10.0)));

    let id = session.surface().ids()[0];
    let style = session.surface().primitive(id).unwrap().style().clone();
    assert_eq!(style.outline, Some(Rgb::RED));
    assert_eq!(style.fill, None);
}

#[test]
fn test_fill_on_empty_canvas_is_harmless() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Fill);
    session.pointer_down(PointerInput::primary(pos2(50.0, 50.0)));
    assert!(session.surface().is_empty());
}

#[test]
fn test_switching_tool_cancels_shape_preview() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Shape);
    session.pointer_down(PointerInput::primary(pos2(0.0, 0.0)));
    session.pointer_move(PointerInput::primary(pos2(40.0, 40.0)));
    assert_eq!(session.surface().len(), 1);

    session.set_tool(ToolKind::Pencil);
    assert!(session.surface().is_empty());

    // the release that follows belongs to no shape drag
    session.pointer_up(PointerInput::primary(pos2(40.0, 40.0)));
    assert!(session.surface().is_empty());
    assert!(session.history().is_empty());
}

#[test]
fn test_switching_tool_drops_in_progress_stroke() {
    let mut session = EditorSession::default();
    session.pointer_down(PointerInput::primary(pos2(0.0, 0.0)));
    session.pointer_move(PointerInput::primary(pos2(10.0, 10.0)));
    session.set_tool(ToolKind::Eraser);
    session.pointer_move(PointerInput::primary(pos2(20.0, 20.0)));
    session.pointer_up(PointerInput::primary(pos2(20.0, 20.0)));

    assert!(session.history().is_empty());
    let id = session.surface().ids()[0];
    assert_eq!(session.surface().coords(id).unwrap().len(), 2);
}

#[test]
fn test_leaving_select_mode_clears_the_selection() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Shape);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(60.0, 60.0)]);
    let group = session.groups().iter().next().unwrap().clone();

    session.set_tool(ToolKind::Select);
    session.pointer_down(PointerInput::primary(pos2(30.0, 30.0)));
    assert!(session.selection().selected().is_some());

    session.set_tool(ToolKind::Pencil);
    assert_eq!(session.selection().selected(), None);
    assert!(session.surface().primitive(group.bbox()).unwrap().is_hidden());
    let content = session.surface().primitive(group.content()).unwrap();
    assert_eq!(content.style().width, 1.0);

    // Delete has nothing to act on outside select mode
    assert!(!session.handle_key(Key::Delete, Modifiers::NONE));
    assert_eq!(session.surface().len(), 6);
}

#[test]
fn test_up_down_adjust_orientation_or_sides() {
    let mut session = EditorSession::default();
    assert!(session.handle_key(Key::ArrowUp, Modifiers::NONE));
    assert!(session.palette().is_reversed());
    assert!(session.handle_key(Key::ArrowDown, Modifiers::NONE));
    assert!(!session.palette().is_reversed());

    session.cycle_shape();
    session.cycle_shape();
    assert_eq!(session.cycle_shape(), ShapeKind::Polygon);
    session.handle_key(Key::ArrowUp, Modifiers::NONE);
    assert_eq!(session.palette().sides(), 6);
    for _ in 0..5 {
        session.handle_key(Key::ArrowDown, Modifiers::NONE);
    }
    assert_eq!(session.palette().sides(), 3);
    assert!(!session.palette().is_reversed());
}

#[test]
fn test_cycle_shape_activates_shape_tool() {
    let mut session = EditorSession::default();
    session.cycle_shape();
    assert_eq!(session.tool_kind(), ToolKind::Shape);
    assert_eq!(session.palette().kind(), ShapeKind::Triangle);
}

#[test]
fn test_double_click_switches_to_select_and_picks_the_group() {
    let mut session = EditorSession::default();
    session.set_tool(ToolKind::Shape);
    drag(&mut session, &[pos2(0.0, 0.0), pos2(60.0, 60.0)]);
    let group = session.groups().ids()[0];
    session.set_tool(ToolKind::Pencil);

    // the two clicks under it leave no stroke behind
    for _ in 0..2 {
        drag(&mut session, &[pos2(30.0, 30.0)]);
    }
    session.handle_input(InputEvent::DoubleClick {
        pos: pos2(30.0, 30.0),
    });

    assert_eq!(session.tool_kind(), ToolKind::Select);
    assert_eq!(session.selection().selected(), Some(group));
    assert_eq!(session.selection().mode(), InteractionMode::NormalMove);
    assert_eq!(session.surface().len(), 6);
}

#[test]
fn test_double_click_on_empty_canvas_only_switches_tool() {
    let mut session = EditorSession::default();
    session.double_click(pos2(30.0, 30.0));
    assert_eq!(session.tool_kind(), ToolKind::Select);
    assert_eq!(session.selection().selected(), None);
}
