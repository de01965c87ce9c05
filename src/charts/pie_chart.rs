use std::f32::consts::PI;
use std::fmt::Write;

use crate::models::language_share::LanguageShare;

use super::{empty_chart, escape_xml, palette_color};

const WIDTH: u32 = 320;
const HEIGHT: u32 = 256;
const RADIUS: f32 = 80.0;

/// One slice per language, sized by repository count.
pub fn render(shares: &[LanguageShare]) -> String {
    let total: u64 = shares.iter().map(|s| s.value).sum();
    if total == 0 {
        return empty_chart(WIDTH, HEIGHT);
    }

    let cx = WIDTH as f32 / 2.0;
    let cy = HEIGHT as f32 / 2.0;
    let point_at = |angle: f32| (cx + RADIUS * angle.cos(), cy + RADIUS * angle.sin());

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {WIDTH} {HEIGHT}" class="chart chart-pie" role="img">"#
    );

    // Start at twelve o'clock, sweep clockwise.
    let mut angle = -PI / 2.0;
    for (i, share) in shares.iter().enumerate() {
        let title = escape_xml(&format!("{}: {}", share.name, share.value));
        let color = palette_color(i);
        if share.value == total {
            let _ = write!(
                svg,
                r#"<circle cx="{cx}" cy="{cy}" r="{RADIUS}" fill="{color}"><title>{title}</title></circle>"#
            );
            break;
        }

        let sweep = 2.0 * PI * share.value as f32 / total as f32;
        let (x1, y1) = point_at(angle);
        let (x2, y2) = point_at(angle + sweep);
        let large_arc = if sweep > PI { 1 } else { 0 };
        let _ = write!(
            svg,
            r##"<path d="M{cx},{cy} L{x1:.2},{y1:.2} A{RADIUS},{RADIUS} 0 {large_arc} 1 {x2:.2},{y2:.2} Z" fill="{color}" stroke="#ffffff"><title>{title}</title></path>"##
        );
        angle += sweep;
    }

    svg.push_str("</svg>");
    svg
}
