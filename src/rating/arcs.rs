//! Pie-chart geometry for grading breakdowns.
//!
//! Angles are in degrees, measured clockwise from 3 o'clock as in SVG screen
//! coordinates. The first arc starts at 12 o'clock (-90°). Arcs are sized
//! strictly by their stated percentage: a breakdown summing to 70 leaves a
//! gap and one summing to 130 runs past a full turn.

use serde::Serialize;

use crate::model::GradingItem;

pub const FULL_CIRCLE_DEG: f64 = 360.0;
pub const START_ANGLE_DEG: f64 = -90.0;

pub const PALETTE: &[&str] = &[
    "#4F86F7", "#F7A14F", "#5BC98C", "#E25C6B", "#9B6BD6", "#F2D04B",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradingArc {
    pub label: String,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: &'static str,
}

impl GradingArc {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= FULL_CIRCLE_DEG
    }
}

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

pub fn percentages_to_arcs(items: &[GradingItem]) -> Vec<GradingArc> {
    let mut arcs = Vec::with_capacity(items.len());
    let mut cumulative = 0.0f64;
    for (i, item) in items.iter().enumerate() {
        let start_angle = angle_at(cumulative);
        cumulative += item.percentage;
        let end_angle = angle_at(cumulative);
        arcs.push(GradingArc {
            label: item.label.clone(),
            percentage: item.percentage,
            start_angle,
            end_angle,
            color: palette_color(i),
        });
    }
    arcs
}

fn angle_at(cumulative_percentage: f64) -> f64 {
    START_ANGLE_DEG + FULL_CIRCLE_DEG * cumulative_percentage / 100.0
}

pub fn point_on_circle(cx: f64, cy: f64, r: f64, angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// SVG path data for one wedge.
///
/// A wedge whose start and end points coincide cannot be drawn with a
/// single arc command, so a full turn is emitted as two half circles.
pub fn arc_path(arc: &GradingArc, cx: f64, cy: f64, r: f64) -> String {
    let sweep = arc.sweep();
    let mut d = String::new();
    if sweep <= 0.0 {
        return d;
    }

    let (sx, sy) = point_on_circle(cx, cy, r, arc.start_angle);
    if arc.is_full_circle() {
        let (mx, my) = point_on_circle(cx, cy, r, arc.start_angle + FULL_CIRCLE_DEG / 2.0);
        d.push_str(&format!(
            "M {} {} A {r} {r} 0 1 1 {} {} A {r} {r} 0 1 1 {} {} Z",
            fmt_coord(sx),
            fmt_coord(sy),
            fmt_coord(mx),
            fmt_coord(my),
            fmt_coord(sx),
            fmt_coord(sy),
            r = fmt_coord(r),
        ));
        return d;
    }

    let (ex, ey) = point_on_circle(cx, cy, r, arc.end_angle);
    let large_arc = if sweep > FULL_CIRCLE_DEG / 2.0 { 1 } else { 0 };
    d.push_str(&format!(
        "M {} {} L {} {} A {r} {r} 0 {large_arc} 1 {} {} Z",
        fmt_coord(cx),
        fmt_coord(cy),
        fmt_coord(sx),
        fmt_coord(sy),
        fmt_coord(ex),
        fmt_coord(ey),
        r = fmt_coord(r),
    ));
    d
}

fn fmt_coord(v: f64) -> String {
    let s = format!("{:.3}", v);
    // normalise negative zero
    if s == "-0.000" {
        "0.000".to_string()
    } else {
        s
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/rating/arcs.rs"]
mod tests;
