//! Donut and bar charts drawn on HTML5 Canvas.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::features::dashboard::services::Slice;

const FULL_TURN: f64 = std::f64::consts::PI * 2.0;

/// Angular extent of one donut segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Map slices to donut segments starting at twelve o'clock. Zero-valued
/// slices produce no segment; an all-zero series produces none at all.
pub fn donut_segments(slices: &[Slice]) -> Vec<(Segment, String)> {
    let total: u32 = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut angle = -std::f64::consts::FRAC_PI_2;
    for slice in slices {
        if slice.value == 0 {
            continue;
        }
        let sweep = (slice.value as f64 / total as f64) * FULL_TURN;
        segments.push((
            Segment {
                start_angle: angle,
                end_angle: angle + sweep,
            },
            slice.color.clone(),
        ));
        angle += sweep;
    }
    segments
}

/// Bar heights as fractions of the chart height, scaled to the tallest bar.
pub fn bar_heights(slices: &[Slice]) -> Vec<f64> {
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0);
    if max == 0 {
        return vec![0.0; slices.len()];
    }
    slices
        .iter()
        .map(|s| s.value as f64 / max as f64)
        .collect()
}

/// Donut chart with an HTML legend underneath.
#[component]
pub fn DonutChart(slices: Vec<Slice>) -> impl IntoView {
    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();

    let slices_for_draw = slices.clone();
    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_donut(&canvas, &slices_for_draw);
        }
    });

    view! {
        <div class="chart">
            <canvas node_ref=canvas_ref width="320" height="260" class="chart-canvas" />
            <div class="chart-legend">
                {slices
                    .iter()
                    .map(|slice| view! {
                        <div class="legend-item">
                            <span
                                class="legend-swatch"
                                style=format!("background-color: {}", slice.color)
                            />
                            <span class="legend-label">
                                {format!("{} ({})", slice.label, slice.value)}
                            </span>
                        </div>
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

/// Vertical bar chart with labels under each bar.
#[component]
pub fn BarChart(slices: Vec<Slice>) -> impl IntoView {
    let canvas_ref: NodeRef<leptos::html::Canvas> = NodeRef::new();

    Effect::new(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &slices);
        }
    });

    view! {
        <div class="chart">
            <canvas node_ref=canvas_ref width="420" height="260" class="chart-canvas" />
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_donut(canvas: &HtmlCanvasElement, slices: &[Slice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (width.min(height) / 2.0) - 30.0;

    let segments = donut_segments(slices);
    if segments.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Sem dados", cx - 32.0, cy);
        return;
    }

    ctx.set_line_width(26.0);
    for (segment, color) in &segments {
        ctx.begin_path();
        let _ = ctx.arc(cx, cy, radius, segment.start_angle, segment.end_angle);
        ctx.set_stroke_style_str(color);
        ctx.stroke();
    }
}

fn draw_bars(canvas: &HtmlCanvasElement, slices: &[Slice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.is_empty() {
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("Sem dados", width / 2.0 - 32.0, height / 2.0);
        return;
    }

    let margin_left = 34.0;
    let margin_bottom = 28.0;
    let margin_top = 14.0;
    let chart_width = width - margin_left - 10.0;
    let chart_height = height - margin_top - margin_bottom;

    // Horizontal grid lines
    ctx.set_stroke_style_str("#e5e7eb");
    ctx.set_line_width(1.0);
    let max = slices.iter().map(|s| s.value).max().unwrap_or(0).max(1);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - 10.0, y);
        ctx.stroke();

        let value = max as f64 * (1.0 - i as f64 / 4.0);
        ctx.set_fill_style_str("#9ca3af");
        ctx.set_font("11px sans-serif");
        let _ = ctx.fill_text(&format!("{:.0}", value), 4.0, y + 4.0);
    }

    let heights = bar_heights(slices);
    let slot = chart_width / slices.len() as f64;
    let bar_width = (slot * 0.55).min(56.0);

    for (i, (slice, fraction)) in slices.iter().zip(heights.iter()).enumerate() {
        let bar_height = fraction * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style_str(&slice.color);
        ctx.fill_rect(x, y, bar_width, bar_height);

        // Label under the bar
        ctx.set_fill_style_str("#6b7280");
        ctx.set_font("11px sans-serif");
        let label_x = margin_left + i as f64 * slot + slot / 2.0 - (slice.label.len() as f64 * 2.7);
        let _ = ctx.fill_text(&slice.label, label_x, height - 10.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slice(label: &str, value: u32) -> Slice {
        Slice {
            label: label.to_string(),
            value,
            color: "#3B82F6".to_string(),
        }
    }

    #[test]
    fn donut_segments_cover_the_full_circle() {
        let segments = donut_segments(&[slice("A Fazer", 2), slice("Em Progresso", 1), slice("Concluído", 3)]);
        assert_eq!(segments.len(), 3);

        let swept: f64 = segments
            .iter()
            .map(|(s, _)| s.end_angle - s.start_angle)
            .sum();
        assert!((swept - FULL_TURN).abs() < 1e-9);

        // Segments are contiguous
        for pair in segments.windows(2) {
            assert!((pair[0].0.end_angle - pair[1].0.start_angle).abs() < 1e-9);
        }
    }

    #[test]
    fn donut_skips_zero_valued_slices() {
        let segments = donut_segments(&[slice("A Fazer", 4), slice("Em Progresso", 0)]);
        assert_eq!(segments.len(), 1);
        let (only, _) = &segments[0];
        assert!((only.end_angle - only.start_angle - FULL_TURN).abs() < 1e-9);
    }

    #[test]
    fn donut_of_empty_snapshot_has_no_segments() {
        assert!(donut_segments(&[slice("A Fazer", 0), slice("Concluído", 0)]).is_empty());
    }

    #[test]
    fn bar_heights_scale_to_tallest() {
        let heights = bar_heights(&[slice("Baixa", 1), slice("Média", 3), slice("Alta", 2)]);
        assert_eq!(heights, vec![1.0 / 3.0, 1.0, 2.0 / 3.0]);
    }

    #[test]
    fn bar_heights_all_zero_is_flat() {
        assert_eq!(bar_heights(&[slice("Bugs", 0)]), vec![0.0]);
    }
}
