use std::fmt::Write;

use crate::models::contribution::ContributionPoint;

use super::{empty_chart, escape_xml, AXIS_TEXT, GRID, LINE_COLOR};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 256;
const LEFT: f32 = 40.0;
const RIGHT: f32 = 20.0;
const TOP: f32 = 16.0;
const BOTTOM: f32 = 32.0;
const Y_TICKS: u64 = 4;
const MAX_X_LABELS: usize = 6;

/// Commits per day as a line with one dot per point.
pub fn render(points: &[ContributionPoint]) -> String {
    if points.is_empty() {
        return empty_chart(WIDTH, HEIGHT);
    }

    let plot_w = WIDTH as f32 - LEFT - RIGHT;
    let plot_h = HEIGHT as f32 - TOP - BOTTOM;
    let max = points.iter().map(|p| p.commits).max().unwrap_or(0);
    let step = ((max + Y_TICKS - 1) / Y_TICKS).max(1);
    let y_max = (step * Y_TICKS) as f32;

    let x_at = |i: usize| -> f32 {
        if points.len() == 1 {
            LEFT + plot_w / 2.0
        } else {
            LEFT + plot_w * i as f32 / (points.len() - 1) as f32
        }
    };
    let y_at = |commits: u64| -> f32 { TOP + plot_h - plot_h * commits as f32 / y_max };

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" class="chart chart-line" role="img">"#
    );

    for tick in 0..=Y_TICKS {
        let y = y_at(tick * step);
        let _ = write!(
            svg,
            r#"<line x1="{LEFT}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{GRID}" stroke-dasharray="3 3"/><text x="{tx:.1}" y="{ty:.1}" text-anchor="end" fill="{AXIS_TEXT}" font-size="11">{value}</text>"#,
            x2 = LEFT + plot_w,
            tx = LEFT - 6.0,
            ty = y + 4.0,
            value = tick * step,
        );
    }

    let label_every = (points.len() + MAX_X_LABELS - 1) / MAX_X_LABELS;
    for (i, point) in points.iter().enumerate() {
        if i % label_every != 0 {
            continue;
        }
        let _ = write!(
            svg,
            r#"<text x="{x:.1}" y="{y:.1}" text-anchor="middle" fill="{AXIS_TEXT}" font-size="11">{label}</text>"#,
            x = x_at(i),
            y = HEIGHT as f32 - BOTTOM + 18.0,
            label = point.date.format("%m/%d/%Y"),
        );
    }

    let path: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:.1},{:.1}", x_at(i), y_at(p.commits)))
        .collect();
    let _ = write!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
        path.join(" ")
    );

    for (i, point) in points.iter().enumerate() {
        let title = escape_xml(&format!("{}: {} commits", point.date, point.commits));
        let _ = write!(
            svg,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="3" fill="{LINE_COLOR}" stroke="{LINE_COLOR}" stroke-width="2"><title>{title}</title></circle>"#,
            x = x_at(i),
            y = y_at(point.commits),
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn point(d: u32, commits: u64) -> ContributionPoint {
        ContributionPoint {
            date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            commits,
        }
    }

    #[test]
    fn empty_series_renders_placeholder() {
        let svg = render(&[]);
        assert!(svg.contains("No data"));
        assert!(!svg.contains("<polyline"));
    }

    #[test]
    fn one_dot_per_point() {
        let svg = render(&[point(1, 2), point(2, 0), point(3, 7)]);

        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("2024-03-03: 7 commits"));
        assert!(svg.contains("03/01/2024"));
    }

    #[test]
    fn single_point_is_centered() {
        let svg = render(&[point(9, 1)]);
        assert!(svg.contains(r#"cx="330.0""#));
    }

    #[test]
    fn zero_commits_sit_on_baseline() {
        let svg = render(&[point(1, 0), point(2, 0)]);
        // TOP + plot height
        assert!(svg.contains(r#"cy="224.0""#));
    }
}
