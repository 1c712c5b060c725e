//! Conversions between egui and controller geometry.

use eframe::egui;
use hovertip::{Point, Rect};

pub fn to_rect(rect: egui::Rect) -> Rect {
    Rect::new(rect.min.x, rect.min.y, rect.width(), rect.height())
}

pub fn to_point(pos: egui::Pos2) -> Point {
    Point::new(pos.x, pos.y)
}

pub fn to_pos2(point: Point) -> egui::Pos2 {
    egui::pos2(point.x, point.y)
}
