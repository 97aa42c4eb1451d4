//! Chart Component
//!
//! Sales line chart drawn on an HTML5 canvas. The component owns a
//! [`ChartHost`], so switching the period filter destroys the previous
//! drawing before the next one is made.

use brewtopia::dashboard::{
    curve_segments, ChartHost, ChartLayout, ChartPeriod, ChartRenderer, ChartSpec, CurveSegment,
    DashboardError, LegendPosition,
};
use brewtopia::notify::NoticeKind;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::global::GlobalState;

/// Canvas-backed chart instances
struct CanvasRenderer {
    canvas: NodeRef<html::Canvas>,
    generation: u32,
}

impl CanvasRenderer {
    fn context(&self) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), DashboardError> {
        let canvas: HtmlCanvasElement = self
            .canvas
            .get_untracked()
            .map(|c| (*c).clone())
            .ok_or_else(|| DashboardError::Renderer("canvas not mounted".to_string()))?;

        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or_else(|| DashboardError::Renderer("2d context unavailable".to_string()))?;

        Ok((canvas, ctx))
    }
}

impl ChartRenderer for CanvasRenderer {
    type Handle = u32;

    fn create(&mut self, spec: &ChartSpec) -> Result<u32, DashboardError> {
        let (canvas, ctx) = self.context()?;
        draw_chart(&canvas, &ctx, spec);
        self.generation += 1;
        Ok(self.generation)
    }

    fn destroy(&mut self, _handle: u32) {
        if let Ok((canvas, ctx)) = self.context() {
            ctx.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
        }
    }
}

/// Sales chart with its period filter
#[component]
pub fn SalesChart() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let host = store_value(ChartHost::new(CanvasRenderer {
        canvas: canvas_ref,
        generation: 0,
    }));

    let render = move |key: &str| {
        let result = host
            .try_update_value(|h| h.render_key(key).map(|_| ()))
            .unwrap_or(Ok(()));
        if let Err(e) = result {
            web_sys::console::error_1(&format!("Chart render failed: {}", e).into());
            state.notify(e.to_string(), NoticeKind::Error);
        }
    };

    // Initial render once the canvas is in the DOM
    canvas_ref.on_load(move |_| render(ChartPeriod::default().key()));

    view! {
        <div class="chart-card">
            <div class="chart-header">
                <h2>"Sales Overview"</h2>
                <select
                    id="chartFilter"
                    on:change=move |ev| render(&event_target_value(&ev))
                >
                    {ChartPeriod::all()
                        .iter()
                        .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <canvas id="salesChart" node_ref=canvas_ref width="800" height="400" />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d, spec: &ChartSpec) {
    let layout = ChartLayout::new(canvas.width() as f64, canvas.height() as f64);
    let points = layout.points(spec);
    let segments = curve_segments(&points, spec.tension);

    ctx.clear_rect(0.0, 0.0, layout.width, layout.height);

    // Grid lines and y-axis labels
    ctx.set_stroke_style(&"rgba(128, 128, 128, 0.2)".into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#6b7280".into());
    ctx.set_font("12px sans-serif");
    for tick in layout.y_ticks(spec, 5) {
        ctx.begin_path();
        ctx.move_to(layout.margin_left, tick.position);
        ctx.line_to(layout.width - layout.margin_right, tick.position);
        ctx.stroke();
        let _ = ctx.fill_text(&tick.label, 5.0, tick.position + 4.0);
    }

    // X-axis labels
    for tick in layout.x_ticks(spec) {
        let _ = ctx.fill_text(&tick.label, tick.position - 12.0, layout.height - 15.0);
    }

    let Some(first) = points.first() else {
        return;
    };

    // Filled area under the curve
    if spec.fill {
        ctx.begin_path();
        ctx.move_to(first.x, layout.baseline());
        ctx.line_to(first.x, first.y);
        trace_curve(ctx, &segments);
        if let Some(last) = points.last() {
            ctx.line_to(last.x, layout.baseline());
        }
        ctx.close_path();
        ctx.set_fill_style(&spec.background_color.into());
        ctx.fill();
    }

    // Line
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    trace_curve(ctx, &segments);
    ctx.set_stroke_style(&spec.border_color.into());
    ctx.set_line_width(spec.border_width);
    ctx.stroke();

    // Points
    ctx.set_fill_style(&spec.point_color.into());
    for point in &points {
        ctx.begin_path();
        let _ = ctx.arc(
            point.x,
            point.y,
            spec.point_radius,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.fill();
    }

    // Legend
    let legend_y = match spec.legend_position {
        LegendPosition::Top => 20.0,
        LegendPosition::Bottom => layout.height - 2.0,
    };
    let legend_x = layout.width / 2.0 - 30.0;
    ctx.set_fill_style(&spec.background_color.into());
    ctx.fill_rect(legend_x, legend_y - 10.0, 30.0, 10.0);
    ctx.set_stroke_style(&spec.border_color.into());
    ctx.stroke_rect(legend_x, legend_y - 10.0, 30.0, 10.0);
    ctx.set_fill_style(&"#6b7280".into());
    let _ = ctx.fill_text(spec.series_label, legend_x + 36.0, legend_y);
}

fn trace_curve(ctx: &CanvasRenderingContext2d, segments: &[CurveSegment]) {
    for s in segments {
        let (c1, c2) = (s.control1, s.control2);
        ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, s.to.x, s.to.y);
    }
}
