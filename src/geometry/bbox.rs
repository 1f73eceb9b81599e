use egui::{Pos2, Rect, Vec2, pos2};

/// A corner of a group's bounding box, in clockwise order from the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomRight,
        Corner::BottomLeft,
    ];

    pub fn index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top_left",
            Corner::TopRight => "top_right",
            Corner::BottomRight => "bottom_right",
            Corner::BottomLeft => "bottom_left",
        }
    }
}

/// The four corners of a group's bounding box, clockwise from top-left.
///
/// Kept in sync with the content primitive: translated in place while the
/// group moves, rebuilt from the content's extrema after a resize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBoxCorners([Pos2; 4]);

impl BBoxCorners {
    pub fn from_rect(rect: Rect) -> Self {
        Self([
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ])
    }

    pub fn points(&self) -> [Pos2; 4] {
        self.0
    }

    pub fn get(&self, corner: Corner) -> Pos2 {
        self.0[corner.index()]
    }

    pub fn translate(&mut self, delta: Vec2) {
        for corner in &mut self.0 {
            *corner += delta;
        }
    }

    /// Midpoint of the top-left and bottom-right corners.
    pub fn center(&self) -> Pos2 {
        let [top_left, _, bottom_right, _] = self.0;
        pos2(
            (top_left.x + bottom_right.x) / 2.0,
            (top_left.y + bottom_right.y) / 2.0,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect::from_two_pos(self.0[0], self.0[2])
    }

    /// The first corner within `proximity` of `pos` on both axes.
    pub fn near(&self, pos: Pos2, proximity: f32) -> Option<Corner> {
        Corner::ALL.into_iter().find(|corner| {
            let point = self.get(*corner);
            (pos.x - point.x).abs() <= proximity && (pos.y - point.y).abs() <= proximity
        })
    }
}
