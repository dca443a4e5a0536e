//! Semicircular AQI gauge, rendered server-side as SVG.
//!
//! Geometry matches the page layout: a 250×250 viewport, the half-circle
//! track centered at (125, 125) with radius 80 and a 25-unit stroke. The
//! value arc sweeps `min(aqi, 300) / 300 × 180°` in the tier color; the
//! displayed number is never clamped, only the sweep is.

use crate::tier::AqiTier;

/// Sweep saturates at this AQI value.
pub const GAUGE_MAX_AQI: u32 = 300;

const CENTER: f64 = 125.0;
const RADIUS: f64 = 80.0;
const STROKE: f64 = 25.0;
const TRACK_COLOR: &str = "#eee";
const LABEL_COLOR: &str = "#555";

/// Angular sweep of the value arc, in degrees.
#[must_use]
pub fn sweep_degrees(aqi: u32) -> f64 {
    f64::from(aqi.min(GAUGE_MAX_AQI)) / f64::from(GAUGE_MAX_AQI) * 180.0
}

/// Endpoint of an arc starting at the left end of the track, after
/// sweeping `sweep_deg` degrees over the top of the half circle.
fn arc_endpoint(sweep_deg: f64) -> (f64, f64) {
    let rad = sweep_deg.to_radians();
    (CENTER - RADIUS * rad.cos(), CENTER - RADIUS * rad.sin())
}

/// Render the gauge for an AQI value as a standalone SVG document.
#[must_use]
pub fn render_svg(aqi: u32) -> String {
    let tier = AqiTier::for_value(aqi);
    let color = tier.color();
    let label = tier.label();

    let start_x = CENTER - RADIUS;
    let end_x = CENTER + RADIUS;
    let (value_x, value_y) = arc_endpoint(sweep_degrees(aqi));

    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 250 250" width="250" height="250">
  <path d="M {start_x} {CENTER} A {RADIUS} {RADIUS} 0 0 1 {end_x} {CENTER}" fill="none" stroke="{TRACK_COLOR}" stroke-width="{STROKE}"/>
  <path d="M {start_x} {CENTER} A {RADIUS} {RADIUS} 0 0 1 {value_x:.2} {value_y:.2}" fill="none" stroke="{color}" stroke-width="{STROKE}" stroke-linecap="round"/>
  <text x="{CENTER}" y="120" text-anchor="middle" font-family="Poppins, sans-serif" font-size="40" font-weight="bold" fill="{color}">{aqi}</text>
  <text x="{CENTER}" y="150" text-anchor="middle" font-family="Poppins, sans-serif" font-size="16" fill="{LABEL_COLOR}">{label}</text>
</svg>
"#
    )
}
