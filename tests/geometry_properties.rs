use egui::{Modifiers, PointerButton, Pos2, Rect, pos2, vec2};
use proptest::prelude::*;
use sketch_paint::geometry;
use sketch_paint::surface::DrawingSurface;
use sketch_paint::tools::{PointerInput, ToolKind};
use sketch_paint::{EditorSession, Rgb};

fn point() -> impl Strategy<Value = Pos2> {
    (-500.0f32..500.0, -500.0f32..500.0).prop_map(|(x, y)| pos2(x, y))
}

fn points() -> impl Strategy<Value = Vec<Pos2>> {
    prop::collection::vec(point(), 3..12)
}

fn close(a: Pos2, b: Pos2) -> bool {
    (a - b).length() < 1e-2
}

proptest! {
    #[test]
    fn rotation_preserves_pairwise_distances(points in points(), theta in -10.0f32..10.0) {
        let center = geometry::centroid(&points).unwrap();
        let rotated = geometry::rotate_points(&points, center, theta);
        for i in 0..points.len() {
            for j in i + 1..points.len() {
                let before = points[i].distance(points[j]);
                let after = rotated[i].distance(rotated[j]);
                prop_assert!((before - after).abs() < 1e-2, "{before} vs {after}");
            }
        }
    }

    #[test]
    fn rotations_about_one_center_compose(
        points in points(),
        center in point(),
        a in -std::f32::consts::PI..std::f32::consts::PI,
        b in -std::f32::consts::PI..std::f32::consts::PI,
    ) {
        let stepwise = geometry::rotate_points(&geometry::rotate_points(&points, center, a), center, b);
        let direct = geometry::rotate_points(&points, center, a + b);
        for (s, d) in stepwise.iter().zip(&direct) {
            prop_assert!(close(*s, *d), "{s:?} vs {d:?}");
        }
    }

    #[test]
    fn translations_compose(
        points in points(),
        dx1 in -100.0f32..100.0, dy1 in -100.0f32..100.0,
        dx2 in -100.0f32..100.0, dy2 in -100.0f32..100.0,
    ) {
        let mut stepwise = points.clone();
        geometry::translate_points(&mut stepwise, vec2(dx1, dy1));
        geometry::translate_points(&mut stepwise, vec2(dx2, dy2));
        let mut direct = points;
        geometry::translate_points(&mut direct, vec2(dx1 + dx2, dy1 + dy2));
        for (s, d) in stepwise.iter().zip(&direct) {
            prop_assert!(close(*s, *d));
        }
    }

    #[test]
    fn resized_extent_is_always_positive(
        width in 1.0f32..300.0, height in 1.0f32..300.0,
        dx in -400.0f32..400.0, dy in -400.0f32..400.0,
    ) {
        let rect = Rect::from_min_size(pos2(0.0, 0.0), vec2(width, height));
        match geometry::resized_extent(rect, vec2(dx, dy)) {
            Ok(size) => prop_assert!(size.x > 0.0 && size.y > 0.0),
            Err(err) => prop_assert!(width + dx <= 0.0 || height + dy <= 0.0, "{err}"),
        }
    }

    #[test]
    fn resize_drags_never_collapse_a_shape(
        drags in prop::collection::vec((-250.0f32..250.0, -250.0f32..250.0), 1..20),
    ) {
        let mut session = EditorSession::default();
        session.set_tool(ToolKind::Shape);
        session.pointer_down(PointerInput::primary(pos2(100.0, 100.0)));
        session.pointer_move(PointerInput::primary(pos2(200.0, 200.0)));
        session.pointer_up(PointerInput::primary(pos2(200.0, 200.0)));
        let id = session.groups().ids()[0];
        let content = session.groups().get(id).unwrap().content();

        session.set_tool(ToolKind::Select);
        let secondary = |pos| PointerInput::new(pos, PointerButton::Secondary, Modifiers::NONE);
        session.pointer_down(secondary(pos2(200.0, 200.0)));
        for (x, y) in drags {
            session.pointer_move(secondary(pos2(x, y)));
            let bounds = session.surface().primitive(content).unwrap().bounds();
            prop_assert!(bounds.width() > 0.0 && bounds.height() > 0.0);
        }
    }

    #[test]
    fn rgb_hex_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let color = Rgb::new(r, g, b);
        let hex = color.to_hex();
        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(Rgb::parse_hex(&hex).unwrap(), color);
        prop_assert_eq!(
            Rgb::from_text(&r.to_string(), &g.to_string(), &b.to_string()).unwrap(),
            color
        );
    }

    #[test]
    fn out_of_range_channels_are_rejected(value in prop_oneof![-10_000i64..0, 256i64..10_000]) {
        prop_assert!(Rgb::from_channels(value, 0, 0).is_err());
        prop_assert!(Rgb::from_channels(0, 0, value).is_err());

        let mut session = EditorSession::default();
        let before = session.color();
        prop_assert!(session.set_color_from_text("0", &value.to_string(), "0").is_err());
        prop_assert_eq!(session.color(), before);
    }
}
