//! SVG scatter plot of a 2D projection, colored by class label

use std::fmt::Write;

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, VoyageError};

/// Viridis control points, sampled evenly from 0 to 1
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 110.0;
const MARGIN_TOP: f64 = 40.0;
const MARGIN_BOTTOM: f64 = 60.0;
const N_TICKS: usize = 5;

/// Map `t` in [0, 1] onto the viridis ramp as a `#rrggbb` string
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let frac = scaled - lo as f64;
    let (a, b) = (VIRIDIS[lo], VIRIDIS[lo + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
    format!("#{:02x}{:02x}{:02x}", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Scatter plot renderer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPlot {
    pub width: f64,
    pub height: f64,
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    /// Marker radius in pixels
    pub point_radius: f64,
}

impl Default for ScatterPlot {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            title: None,
            x_label: "Principal Component 1".to_string(),
            y_label: "Principal Component 2".to_string(),
            point_radius: 4.0,
        }
    }
}

/// Linear map from data range to pixel range
struct Scale {
    d0: f64,
    d1: f64,
    p0: f64,
    p1: f64,
}

impl Scale {
    fn new(values: impl Iterator<Item = f64>, p0: f64, p1: f64) -> Self {
        let (mut lo, mut hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() || !hi.is_finite() {
            lo = 0.0;
            hi = 1.0;
        }
        if hi - lo < 1e-12 {
            lo -= 0.5;
            hi += 0.5;
        }
        let pad = (hi - lo) * 0.05;
        Self {
            d0: lo - pad,
            d1: hi + pad,
            p0,
            p1,
        }
    }

    fn map(&self, v: f64) -> f64 {
        self.p0 + (v - self.d0) / (self.d1 - self.d0) * (self.p1 - self.p0)
    }

    fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..N_TICKS).map(move |i| self.d0 + (self.d1 - self.d0) * i as f64 / (N_TICKS - 1) as f64)
    }
}

impl ScatterPlot {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render one circle per row of `points` (first two columns), colored by `labels`
    pub fn render(&self, points: &Array2<f64>, labels: &Array1<usize>) -> Result<String> {
        if points.ncols() < 2 {
            return Err(VoyageError::ShapeError {
                expected: "at least 2 columns".to_string(),
                actual: format!("{} columns", points.ncols()),
            });
        }
        if points.nrows() != labels.len() {
            return Err(VoyageError::ShapeError {
                expected: format!("{} labels", points.nrows()),
                actual: format!("{} labels", labels.len()),
            });
        }

        let plot_left = MARGIN_LEFT;
        let plot_right = self.width - MARGIN_RIGHT;
        let plot_top = MARGIN_TOP;
        let plot_bottom = self.height - MARGIN_BOTTOM;

        let xs = Scale::new(points.column(0).iter().copied(), plot_left, plot_right);
        // SVG y grows downward
        let ys = Scale::new(points.column(1).iter().copied(), plot_bottom, plot_top);

        let min_label = labels.iter().copied().min().unwrap_or(0);
        let max_label = labels.iter().copied().max().unwrap_or(0);
        let label_span = (max_label - min_label) as f64;
        let color_of = |label: usize| {
            if label_span > 0.0 {
                viridis((label - min_label) as f64 / label_span)
            } else {
                viridis(0.0)
            }
        };

        let mut svg = String::with_capacity(200 + points.nrows() * 90);
        // Writing into a String cannot fail
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="12">"#,
            w = self.width,
            h = self.height
        );
        let _ = writeln!(svg, r#"<rect width="100%" height="100%" fill="white"/>"#);

        if let Some(title) = &self.title {
            let _ = writeln!(
                svg,
                r#"<text x="{:.1}" y="24" text-anchor="middle" font-size="15">{}</text>"#,
                (plot_left + plot_right) / 2.0,
                escape(title)
            );
        }

        let _ = writeln!(
            svg,
            r##"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="#333"/>"##,
            plot_left,
            plot_top,
            plot_right - plot_left,
            plot_bottom - plot_top
        );

        for t in xs.ticks() {
            let px = xs.map(t);
            let _ = writeln!(
                svg,
                r##"<line x1="{px:.1}" y1="{b:.1}" x2="{px:.1}" y2="{b2:.1}" stroke="#333"/><text x="{px:.1}" y="{ty:.1}" text-anchor="middle">{label}</text>"##,
                px = px,
                b = plot_bottom,
                b2 = plot_bottom + 5.0,
                ty = plot_bottom + 18.0,
                label = format_tick(t)
            );
        }
        for t in ys.ticks() {
            let py = ys.map(t);
            let _ = writeln!(
                svg,
                r##"<line x1="{l2:.1}" y1="{py:.1}" x2="{l:.1}" y2="{py:.1}" stroke="#333"/><text x="{tx:.1}" y="{ty:.1}" text-anchor="end">{label}</text>"##,
                l = plot_left,
                l2 = plot_left - 5.0,
                py = py,
                tx = plot_left - 8.0,
                ty = py + 4.0,
                label = format_tick(t)
            );
        }

        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            (plot_left + plot_right) / 2.0,
            self.height - 15.0,
            escape(&self.x_label)
        );
        let _ = writeln!(
            svg,
            r#"<text x="18" y="{y:.1}" text-anchor="middle" transform="rotate(-90 18 {y:.1})">{}</text>"#,
            escape(&self.y_label),
            y = (plot_top + plot_bottom) / 2.0
        );

        let _ = writeln!(svg, "<g>");
        for (row, &label) in points.rows().into_iter().zip(labels.iter()) {
            let _ = writeln!(
                svg,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="0.8"/>"#,
                xs.map(row[0]),
                ys.map(row[1]),
                self.point_radius,
                color_of(label)
            );
        }
        let _ = writeln!(svg, "</g>");

        self.render_colorbar(&mut svg, min_label, max_label, plot_right, plot_top, plot_bottom);

        svg.push_str("</svg>\n");
        Ok(svg)
    }

    fn render_colorbar(
        &self,
        svg: &mut String,
        min_label: usize,
        max_label: usize,
        plot_right: f64,
        plot_top: f64,
        plot_bottom: f64,
    ) {
        let x = plot_right + 30.0;
        let bar_width = 16.0;

        let _ = writeln!(svg, r#"<defs><linearGradient id="viridis" x1="0" y1="1" x2="0" y2="0">"#);
        for i in 0..VIRIDIS.len() {
            let t = i as f64 / (VIRIDIS.len() - 1) as f64;
            let _ = writeln!(
                svg,
                r#"<stop offset="{:.3}" stop-color="{}"/>"#,
                t,
                viridis(t)
            );
        }
        let _ = writeln!(svg, "</linearGradient></defs>");

        let _ = writeln!(
            svg,
            r##"<rect class="colorbar" x="{:.1}" y="{:.1}" width="{}" height="{:.1}" fill="url(#viridis)" stroke="#333"/>"##,
            x,
            plot_top,
            bar_width,
            plot_bottom - plot_top
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
            x + bar_width + 6.0,
            plot_top + 10.0,
            max_label
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}">{}</text>"#,
            x + bar_width + 6.0,
            plot_bottom,
            min_label
        );
    }
}

fn format_tick(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    if v.abs() >= 1000.0 {
        format!("{:.0}", v)
    } else if v.abs() >= 10.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.2}", v)
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
