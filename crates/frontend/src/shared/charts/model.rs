//! Chart geometry: scales, ticks, paths and pie arcs in SVG user units.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Drawing surface with inner padding for the axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
    pub pad_left: f64,
    pub pad_right: f64,
    pub pad_top: f64,
    pub pad_bottom: f64,
}

impl Default for ChartArea {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 300.0,
            pad_left: 64.0,
            pad_right: 16.0,
            pad_top: 16.0,
            pad_bottom: 32.0,
        }
    }
}

impl ChartArea {
    pub fn plot_width(&self) -> f64 {
        (self.width - self.pad_left - self.pad_right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.pad_top - self.pad_bottom).max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.height - self.pad_bottom
    }

    pub fn right(&self) -> f64 {
        self.width - self.pad_right
    }

    /// Y coordinate of `value` on a `0..=max` axis. Values are clamped to the axis.
    pub fn y(&self, value: f64, max: f64) -> f64 {
        self.y_range(value, 0.0, max)
    }

    /// Y coordinate of `value` on a `min..=max` axis.
    pub fn y_range(&self, value: f64, min: f64, max: f64) -> f64 {
        if max <= min {
            return self.bottom();
        }
        let ratio = ((value - min) / (max - min)).clamp(0.0, 1.0);
        self.bottom() - ratio * self.plot_height()
    }

    /// X coordinate of point `index` of `count`, spread edge to edge.
    pub fn x_point(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.pad_left + self.plot_width() / 2.0;
        }
        self.pad_left + self.plot_width() * index as f64 / (count - 1) as f64
    }

    /// Band of category `index` of `count` for bar charts: (start x, width).
    pub fn band(&self, index: usize, count: usize) -> (f64, f64) {
        if count == 0 {
            return (self.pad_left, 0.0);
        }
        let width = self.plot_width() / count as f64;
        (self.pad_left + width * index as f64, width)
    }
}

/// Rounds `max` up to 1, 2, 2.5, 5 or 10 times a power of ten.
pub fn nice_max(max: f64) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(max.log10().floor());
    let fraction = max / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 2.5 {
        2.5
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// `intervals + 1` evenly spaced tick values from `min` to `max`.
pub fn ticks(min: f64, max: f64, intervals: usize) -> Vec<f64> {
    let intervals = intervals.max(1);
    (0..=intervals)
        .map(|i| min + (max - min) * i as f64 / intervals as f64)
        .collect()
}

/// Rounded axis bounds covering every value, zero always included.
pub fn axis_bounds(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    let min = if lo < 0.0 { -nice_max(-lo) } else { 0.0 };
    let max = if hi > 0.0 {
        nice_max(hi)
    } else if lo < 0.0 {
        0.0
    } else {
        1.0
    };
    (min, max)
}

/// Largest value across all series, never below zero.
pub fn series_max<'a>(series: impl IntoIterator<Item = &'a [f64]>) -> f64 {
    series
        .into_iter()
        .flat_map(|values| values.iter().copied())
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Show every n-th x label so that at most `max_labels` are drawn.
pub fn label_step(count: usize, max_labels: usize) -> usize {
    if max_labels == 0 || count <= max_labels {
        1
    } else {
        count.div_ceil(max_labels)
    }
}

/// `M x y L x y ...` through the given points.
pub fn line_path(points: &[(f64, f64)]) -> String {
    let mut path = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            path.push(' ');
        }
        path.push_str(&format!("{cmd}{x:.2},{y:.2}"));
    }
    path
}

/// Closed path of the line plus the baseline, for area fills.
pub fn area_path(points: &[(f64, f64)], baseline: f64) -> String {
    match (points.first(), points.last()) {
        (Some((first_x, _)), Some((last_x, _))) => format!(
            "{} L{last_x:.2},{baseline:.2} L{first_x:.2},{baseline:.2} Z",
            line_path(points)
        ),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieArc {
    pub start_angle: f64,
    pub end_angle: f64,
    pub path: String,
}

fn polar(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    // 0 rad at twelve o'clock, clockwise
    (cx + r * (angle - FRAC_PI_2).cos(), cy + r * (angle - FRAC_PI_2).sin())
}

fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let sweep = end - start;
    if sweep >= TAU - 1e-9 {
        // a single arc command cannot draw a full circle
        let (tx, ty) = polar(cx, cy, r, 0.0);
        let (bx, by) = polar(cx, cy, r, TAU / 2.0);
        return format!(
            "M{tx:.2},{ty:.2} A{r:.2},{r:.2} 0 1 1 {bx:.2},{by:.2} A{r:.2},{r:.2} 0 1 1 {tx:.2},{ty:.2} Z"
        );
    }
    let (sx, sy) = polar(cx, cy, r, start);
    let (ex, ey) = polar(cx, cy, r, end);
    let large = if sweep > TAU / 2.0 { 1 } else { 0 };
    format!("M{cx:.2},{cy:.2} L{sx:.2},{sy:.2} A{r:.2},{r:.2} 0 {large} 1 {ex:.2},{ey:.2} Z")
}

/// Pie segments sized by each share in percent, in the given order.
///
/// Shares are not normalised: a breakdown summing to 90 leaves a gap.
pub fn pie_arcs(percentages: &[f64], cx: f64, cy: f64, r: f64) -> Vec<PieArc> {
    let mut start = 0.0_f64;
    percentages
        .iter()
        .map(|pct| {
            let sweep = (pct.max(0.0) / 100.0 * TAU).min(TAU - start).max(0.0);
            let end = start + sweep;
            let arc = PieArc {
                start_angle: start,
                end_angle: end,
                path: arc_path(cx, cy, r, start, end),
            };
            start = end;
            arc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn nice_max_rounds_up() {
        assert_eq!(nice_max(4300.0), 5000.0);
        assert_eq!(nice_max(1000.0), 1000.0);
        assert_eq!(nice_max(1800.0), 2000.0);
        assert_eq!(nice_max(2400.0), 2500.0);
        assert_eq!(nice_max(7.0), 10.0);
        assert_eq!(nice_max(0.0), 1.0);
        assert_eq!(nice_max(f64::NAN), 1.0);
    }

    #[test]
    fn ticks_are_even() {
        assert_eq!(
            ticks(0.0, 5000.0, 5),
            vec![0.0, 1000.0, 2000.0, 3000.0, 4000.0, 5000.0]
        );
        assert_eq!(ticks(-100.0, 100.0, 2), vec![-100.0, 0.0, 100.0]);
        assert_eq!(ticks(0.0, 1.0, 0), vec![0.0, 1.0]);
    }

    #[test]
    fn bounds_include_zero() {
        assert_eq!(axis_bounds(&[20.0, -10.0, 90.0]), (-10.0, 100.0));
        assert_eq!(axis_bounds(&[300.0, 450.0]), (0.0, 500.0));
        assert_eq!(axis_bounds(&[-40.0]), (-50.0, 0.0));
        assert_eq!(axis_bounds(&[]), (0.0, 1.0));
    }

    #[test]
    fn scale_maps_into_plot() {
        let area = ChartArea::default();
        assert_eq!(area.y(0.0, 100.0), area.bottom());
        assert_eq!(area.y(100.0, 100.0), area.pad_top);
        assert_eq!(area.y(500.0, 100.0), area.pad_top);
        assert_eq!(area.y(50.0, 0.0), area.bottom());
        assert_eq!(area.y_range(0.0, -100.0, 100.0), area.pad_top + area.plot_height() / 2.0);
        assert_eq!(area.x_point(0, 3), area.pad_left);
        assert_eq!(area.x_point(2, 3), area.right());
    }

    #[test]
    fn bands_split_plot_width() {
        let area = ChartArea::default();
        let (x0, w) = area.band(0, 4);
        let (x3, _) = area.band(3, 4);
        assert_eq!(x0, area.pad_left);
        assert!((w * 4.0 - area.plot_width()).abs() < 1e-9);
        assert!((x3 + w - area.right()).abs() < 1e-9);
    }

    #[test]
    fn series_max_ignores_negative_and_nan() {
        let a = [1.0, 5.0, f64::NAN];
        let b = [-3.0, 2.0];
        assert_eq!(series_max([&a[..], &b[..]]), 5.0);
        assert_eq!(series_max(std::iter::empty::<&[f64]>()), 0.0);
    }

    #[test]
    fn label_step_thins_labels() {
        assert_eq!(label_step(10, 12), 1);
        assert_eq!(label_step(31, 10), 4);
        assert_eq!(label_step(5, 0), 1);
    }

    #[test]
    fn paths() {
        assert_eq!(line_path(&[]), "");
        assert_eq!(line_path(&[(0.0, 1.0), (2.0, 3.5)]), "M0.00,1.00 L2.00,3.50");
        assert_eq!(
            area_path(&[(0.0, 1.0), (2.0, 3.0)], 10.0),
            "M0.00,1.00 L2.00,3.00 L2.00,10.00 L0.00,10.00 Z"
        );
        assert_eq!(area_path(&[], 10.0), "");
    }

    #[test]
    fn pie_arcs_follow_percentages() {
        let arcs = pie_arcs(&[50.0, 25.0, 25.0], 100.0, 100.0, 80.0);
        assert_eq!(arcs.len(), 3);
        assert!((arcs[0].end_angle - PI).abs() < 1e-9);
        assert!((arcs[1].start_angle - PI).abs() < 1e-9);
        assert!((arcs[2].end_angle - TAU).abs() < 1e-9);
    }

    #[test]
    fn pie_arcs_do_not_overflow_circle() {
        let arcs = pie_arcs(&[70.0, 60.0], 0.0, 0.0, 10.0);
        assert!((arcs[1].end_angle - TAU).abs() < 1e-9);
        let short = pie_arcs(&[40.0, 50.0], 0.0, 0.0, 10.0);
        assert!((short[1].end_angle - 0.9 * TAU).abs() < 1e-9);
    }

    #[test]
    fn full_slice_is_a_circle() {
        let arcs = pie_arcs(&[100.0], 50.0, 50.0, 40.0);
        assert_eq!(arcs[0].path.matches('A').count(), 2);
    }
}
