//! Circular progress ring for the credit score chart.

use std::f64::consts::PI;

use super::score::ScoreBand;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RingSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl RingSize {
    /// `(radius, stroke width, font size)`
    pub fn preset(self) -> (f64, f64, f64) {
        match self {
            RingSize::Small => (40.0, 8.0, 16.0),
            RingSize::Medium => (60.0, 10.0, 24.0),
            RingSize::Large => (80.0, 12.0, 32.0),
        }
    }
}

/// Geometry of one rendered ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    pub radius: f64,
    pub stroke_width: f64,
    pub font_size: f64,
    pub circumference: f64,
    pub dash_offset: f64,
}

impl RingGeometry {
    /// `dash_offset = C - (score / 100) * C`. The score is used as given.
    pub fn new(size: RingSize, score: f64) -> Self {
        let (radius, stroke_width, font_size) = size.preset();
        let circumference = 2.0 * PI * radius;
        Self {
            radius,
            stroke_width,
            font_size,
            circumference,
            dash_offset: circumference - (score / 100.0) * circumference,
        }
    }

    /// Side of the square box that holds the ring and its stroke.
    pub fn box_size(&self) -> f64 {
        (self.radius + self.stroke_width) * 2.0
    }

    /// Standalone SVG: gray track, colored progress arc starting at 12
    /// o'clock, score in the middle.
    pub fn svg(&self, score: f64) -> String {
        let side = self.box_size();
        let c = side / 2.0;
        let color = ScoreBand::of(score).stroke_hex();
        format!(
            concat!(
                r#"<svg width="{side}" height="{side}" viewBox="0 0 {side} {side}">"#,
                r##"<circle cx="{c}" cy="{c}" r="{r}" fill="none" stroke="#E5E7EB" stroke-width="{w}"/>"##,
                r#"<circle cx="{c}" cy="{c}" r="{r}" fill="none" stroke="{color}" stroke-width="{w}" "#,
                r#"stroke-linecap="round" stroke-dasharray="{dash:.2}" stroke-dashoffset="{offset:.2}" "#,
                r#"transform="rotate(-90 {c} {c})"/>"#,
                r#"<text x="{c}" y="{c}" text-anchor="middle" dominant-baseline="central" "#,
                r#"font-size="{font}" fill="{color}">{label:.0}</text>"#,
                "</svg>"
            ),
            side = side,
            c = c,
            r = self.radius,
            w = self.stroke_width,
            color = color,
            dash = self.circumference,
            offset = self.dash_offset,
            font = self.font_size,
            label = score,
        )
    }
}
