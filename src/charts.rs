//! Inline SVG charts for the dashboard.

pub mod line_chart;
pub mod pie_chart;

/// Slice colors, assigned by index modulo the palette length.
pub const PALETTE: [&str; 5] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8"];

pub const LINE_COLOR: &str = "#8884d8";
const AXIS_TEXT: &str = "#888888";
const GRID: &str = "#cccccc";

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn empty_chart(width: u32, height: u32) -> String {
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" class="chart chart-empty" role="img"><text x="{x}" y="{y}" text-anchor="middle" fill="{AXIS_TEXT}" font-size="14">No data</text></svg>"##,
        x = width / 2,
        y = height / 2,
    )
}
