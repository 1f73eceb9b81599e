use egui::{Key, Modifiers, PointerButton, Pos2, pos2};
use sketch_paint::geometry::Corner;
use sketch_paint::surface::DrawingSurface;
use sketch_paint::tools::{PointerInput, ToolKind};
use sketch_paint::{EditorSession, GroupId, InteractionMode};

fn assert_near(actual: Pos2, expected: Pos2) {
    assert!(
        (actual - expected).length() < 1e-2,
        "expected {expected:?}, got {actual:?}"
    );
}

fn draw_shape(session: &mut EditorSession, from: Pos2, to: Pos2) -> GroupId {
    session.set_tool(ToolKind::Shape);
    session.pointer_down(PointerInput::primary(from));
    session.pointer_move(PointerInput::primary(to));
    session.pointer_up(PointerInput::primary(to));
    *session.groups().ids().last().expect("a group was created")
}

fn circle_session() -> (EditorSession, GroupId) {
    let mut session = EditorSession::default();
    let id = draw_shape(&mut session, pos2(100.0, 100.0), pos2(200.0, 200.0));
    session.set_tool(ToolKind::Select);
    (session, id)
}

fn square_session() -> (EditorSession, GroupId) {
    let mut session = EditorSession::default();
    session.cycle_shape();
    session.cycle_shape(); // Square
    let id = draw_shape(&mut session, pos2(100.0, 100.0), pos2(200.0, 200.0));
    session.set_tool(ToolKind::Select);
    (session, id)
}

fn corners(session: &EditorSession, id: GroupId) -> [Pos2; 4] {
    session.groups().corners(id).unwrap().points()
}

fn content_coords(session: &EditorSession, id: GroupId) -> Vec<Pos2> {
    let content = session.groups().get(id).unwrap().content();
    session.surface().coords(content).unwrap()
}

#[test]
fn test_press_on_shape_selects_and_emphasizes_it() {
    let (mut session, id) = circle_session();
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));

    assert_eq!(session.selection().selected(), Some(id));
    assert_eq!(session.selection().mode(), InteractionMode::NormalMove);

    let group = session.groups().get(id).unwrap();
    assert!(!session.surface().primitive(group.bbox()).unwrap().is_hidden());
    let style = session.surface().primitive(group.content()).unwrap().style().clone();
    assert_eq!(style.width, 3.0);
    assert!(style.dash.is_some());
}

#[test]
fn test_press_on_empty_canvas_deselects() {
    let (mut session, id) = circle_session();
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));
    session.pointer_up(PointerInput::primary(pos2(150.0, 150.0)));

    session.pointer_down(PointerInput::primary(pos2(400.0, 400.0)));

    assert_eq!(session.selection().selected(), None);
    assert_eq!(session.selection().mode(), InteractionMode::Idle);
    let group = session.groups().get(id).unwrap();
    assert!(session.surface().primitive(group.bbox()).unwrap().is_hidden());
    let style = session.surface().primitive(group.content()).unwrap().style().clone();
    assert_eq!(style.width, 1.0);
    assert_eq!(style.dash, None);
}

#[test]
fn test_topmost_group_wins_the_hit() {
    let mut session = EditorSession::default();
    let bottom = draw_shape(&mut session, pos2(0.0, 0.0), pos2(100.0, 100.0));
    let top = draw_shape(&mut session, pos2(50.0, 50.0), pos2(150.0, 150.0));
    session.set_tool(ToolKind::Select);

    session.pointer_down(PointerInput::primary(pos2(75.0, 75.0)));
    assert_eq!(session.selection().selected(), Some(top));

    session.pointer_down(PointerInput::primary(pos2(20.0, 50.0)));
    assert_eq!(session.selection().selected(), Some(bottom));
}

#[test]
fn test_move_translates_group_and_corners() {
    let (mut session, id) = circle_session();
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));
    session.pointer_move(PointerInput::primary(pos2(175.0, 160.0)));
    session.pointer_move(PointerInput::primary(pos2(200.0, 180.0)));
    session.pointer_up(PointerInput::primary(pos2(200.0, 180.0)));

    assert_eq!(
        corners(&session, id),
        [
            pos2(150.0, 130.0),
            pos2(250.0, 130.0),
            pos2(250.0, 230.0),
            pos2(150.0, 230.0),
        ]
    );
    assert_eq!(
        content_coords(&session, id),
        vec![pos2(150.0, 130.0), pos2(250.0, 230.0)]
    );
    let group = session.groups().get(id).unwrap();
    let handle = session
        .surface()
        .primitive(group.handle(Corner::BottomRight))
        .unwrap();
    assert_eq!(handle.bounds().center(), pos2(250.0, 230.0));
    assert_eq!(session.selection().mode(), InteractionMode::NormalMove);
}

#[test]
fn test_secondary_press_on_corner_resizes() {
    let (mut session, id) = circle_session();
    let corner = pos2(200.0, 200.0);
    session.pointer_down(PointerInput::new(
        corner,
        PointerButton::Secondary,
        Modifiers::NONE,
    ));
    assert_eq!(session.selection().mode(), InteractionMode::Resize);

    let input = PointerInput::new(pos2(220.0, 230.0), PointerButton::Secondary, Modifiers::NONE);
    session.pointer_move(input);

    assert_eq!(
        content_coords(&session, id),
        vec![pos2(100.0, 100.0), pos2(220.0, 230.0)]
    );
    assert_eq!(
        corners(&session, id),
        [
            pos2(100.0, 100.0),
            pos2(220.0, 100.0),
            pos2(220.0, 230.0),
            pos2(100.0, 230.0),
        ]
    );
}

#[test]
fn test_shift_press_on_corner_resizes() {
    let (mut session, _) = circle_session();
    session.pointer_down(PointerInput::new(
        pos2(203.0, 197.0),
        PointerButton::Primary,
        Modifiers::SHIFT,
    ));
    assert_eq!(session.selection().mode(), InteractionMode::Resize);
}

#[test]
fn test_resize_scales_polygon_vertices_proportionally() {
    let (mut session, id) = square_session();
    session.pointer_down(PointerInput::new(
        pos2(200.0, 200.0),
        PointerButton::Secondary,
        Modifiers::NONE,
    ));
    // every drag event is measured from the press, not the last event
    for pos in [pos2(210.0, 210.0), pos2(250.0, 300.0)] {
        session.pointer_move(PointerInput::new(pos, PointerButton::Secondary, Modifiers::NONE));
    }

    assert_eq!(
        content_coords(&session, id),
        vec![
            pos2(100.0, 100.0),
            pos2(250.0, 100.0),
            pos2(250.0, 300.0),
            pos2(100.0, 300.0),
        ]
    );
}

#[test]
fn test_degenerate_resize_keeps_last_valid_geometry() {
    let (mut session, id) = circle_session();
    let secondary = |pos| PointerInput::new(pos, PointerButton::Secondary, Modifiers::NONE);
    session.pointer_down(secondary(pos2(200.0, 200.0)));
    session.pointer_move(secondary(pos2(180.0, 190.0)));
    let valid = content_coords(&session, id);
    assert_eq!(valid, vec![pos2(100.0, 100.0), pos2(180.0, 190.0)]);

    session.pointer_move(secondary(pos2(90.0, 250.0)));
    assert_eq!(content_coords(&session, id), valid);

    session.pointer_move(secondary(pos2(100.0, 100.0)));
    assert_eq!(content_coords(&session, id), valid);
    let rect = session.groups().corners(id).unwrap().rect();
    assert!(rect.width() > 0.0 && rect.height() > 0.0);
}

#[test]
fn test_primary_press_on_corner_rotates_to_pointer_angle() {
    let (mut session, id) = square_session();
    // top-right corner sits at -45 degrees from the center (150, 150)
    session.pointer_down(PointerInput::primary(pos2(200.0, 100.0)));
    assert_eq!(session.selection().mode(), InteractionMode::Rotate);

    // pointer straight right of the center: a 45 degree turn
    session.pointer_move(PointerInput::primary(pos2(230.0, 150.0)));
    let turned = content_coords(&session, id);
    assert_near(turned[0], pos2(150.0, 79.289));
    assert_near(turned[1], pos2(220.711, 150.0));

    // bbox bookkeeping and handles stay axis-aligned and untouched mid-drag
    assert_eq!(corners(&session, id)[0], pos2(100.0, 100.0));
    let handle = session.groups().get(id).unwrap().handle(Corner::TopLeft);
    let handle_center = |session: &EditorSession| {
        session.surface().primitive(handle).unwrap().bounds().center()
    };
    assert_near(handle_center(&session), pos2(100.0, 100.0));

    // angle is absolute: returning to the same pointer angle gives the same shape
    session.pointer_move(PointerInput::primary(pos2(150.0, 260.0)));
    session.pointer_move(PointerInput::primary(pos2(300.0, 150.0)));
    let again = content_coords(&session, id);
    for (a, b) in turned.iter().zip(&again) {
        assert_near(*a, *b);
    }

    session.pointer_up(PointerInput::primary(pos2(300.0, 150.0)));
    let rect = session.groups().corners(id).unwrap().rect();
    assert_near(rect.min, pos2(79.289, 79.289));
    assert_near(rect.max, pos2(220.711, 220.711));
    assert_near(handle_center(&session), rect.min);
    assert_eq!(session.selection().mode(), InteractionMode::NormalMove);
}

#[test]
fn test_rotating_a_circle_turns_it_in_place() {
    let (mut session, id) = circle_session();
    session.pointer_down(PointerInput::primary(pos2(200.0, 100.0)));
    session.pointer_move(PointerInput::primary(pos2(230.0, 150.0)));

    let content = session.groups().get(id).unwrap().content();
    let primitive = session.surface().primitive(content).unwrap();
    assert!((primitive.rotation() - std::f32::consts::FRAC_PI_4).abs() < 1e-4);
    assert_near(primitive.bounds().center(), pos2(150.0, 150.0));
}

#[test]
fn test_hover_highlights_only_the_handle_under_the_pointer() {
    let (mut session, id) = circle_session();
    let config = session.config().clone();

    session.hover(pos2(201.0, 199.0));
    let group = session.groups().get(id).unwrap().clone();
    for corner in Corner::ALL {
        let fill = session
            .surface()
            .primitive(group.handle(corner))
            .unwrap()
            .style()
            .fill;
        let expected = if corner == Corner::BottomRight {
            config.handle_highlight
        } else {
            config.handle_color
        };
        assert_eq!(fill, Some(expected), "{}", corner.as_str());
    }

    session.hover(pos2(10.0, 10.0));
    for handle in group.handles() {
        let fill = session.surface().primitive(handle).unwrap().style().fill;
        assert_eq!(fill, Some(config.handle_color));
    }
    assert_eq!(session.selection().selected(), None);
}

#[test]
fn test_delete_key_removes_the_selected_group() {
    let (mut session, _) = circle_session();
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));
    session.pointer_up(PointerInput::primary(pos2(150.0, 150.0)));

    assert!(session.handle_key(Key::Delete, Modifiers::NONE));

    assert!(session.surface().is_empty());
    assert!(session.groups().is_empty());
    assert_eq!(session.selection().selected(), None);
    assert!(!session.handle_key(Key::Backspace, Modifiers::NONE));
}

#[test]
fn test_drag_after_group_vanished_is_harmless() {
    let (mut session, _) = circle_session();
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));
    assert!(session.undo());

    session.pointer_move(PointerInput::primary(pos2(180.0, 180.0)));
    session.pointer_up(PointerInput::primary(pos2(180.0, 180.0)));
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));

    assert_eq!(session.selection().selected(), None);
    assert!(session.surface().is_empty());
}

#[test]
fn test_manual_rotation_refreshes_corners() {
    let (mut session, id) = square_session();
    session.pointer_down(PointerInput::primary(pos2(150.0, 150.0)));
    session.pointer_up(PointerInput::primary(pos2(150.0, 150.0)));

    assert!(session.rotate_right());

    // half-extent of a 100px square turned 15 degrees
    let half = 50.0 * (15f32.to_radians().cos() + 15f32.to_radians().sin());
    let rect = session.groups().corners(id).unwrap().rect();
    assert_near(rect.min, pos2(150.0 - half, 150.0 - half));
    assert_near(rect.max, pos2(150.0 + half, 150.0 + half));

    let group = session.groups().get(id).unwrap();
    let bbox = session.surface().primitive(group.bbox()).unwrap().bounds();
    assert_near(bbox.min, rect.min);

    assert!(session.rotate_left());
    let back = content_coords(&session, id);
    assert_near(back[0], pos2(100.0, 100.0));
}

#[test]
fn test_turned_ellipse_bbox_bounds_the_painted_outline() {
    let mut session = EditorSession::default();
    let id = draw_shape(&mut session, pos2(100.0, 100.0), pos2(300.0, 150.0));
    session.set_tool(ToolKind::Select);
    session.pointer_down(PointerInput::primary(pos2(200.0, 125.0)));
    session.pointer_up(PointerInput::primary(pos2(200.0, 125.0)));

    for _ in 0..6 {
        assert!(session.rotate_right());
    }

    let rect = session.groups().corners(id).unwrap().rect();
    assert_near(rect.min, pos2(175.0, 25.0));
    assert_near(rect.max, pos2(225.0, 225.0));

    let group = session.groups().get(id).unwrap();
    let painted = session.surface().primitive(group.content()).unwrap().outline();
    for point in painted {
        assert!(rect.expand(1e-2).contains(point), "{point:?} outside {rect:?}");
    }
    let handle = session.surface().primitive(group.handle(Corner::TopLeft)).unwrap();
    assert_near(handle.bounds().center(), rect.min);
}

#[test]
fn test_rotate_without_selection_does_nothing() {
    let (mut session, id) = square_session();
    let before = content_coords(&session, id);
    assert!(!session.rotate_left());
    assert_eq!(content_coords(&session, id), before);
}

#[test]
fn test_pencil_strokes_are_not_selectable() {
    let mut session = EditorSession::default();
    session.pointer_down(PointerInput::primary(pos2(0.0, 50.0)));
    session.pointer_move(PointerInput::primary(pos2(100.0, 50.0)));
    session.pointer_up(PointerInput::primary(pos2(100.0, 50.0)));

    session.set_tool(ToolKind::Select);
    session.pointer_down(PointerInput::primary(pos2(50.0, 50.0)));
    assert_eq!(session.selection().selected(), None);
}
