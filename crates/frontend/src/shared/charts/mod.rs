//! SVG charts for dashboards and the investments page.
//!
//! Components only draw; the geometry lives in [`model`] and colours in [`palette`].

pub mod area_chart;
pub mod bar_chart;
pub mod line_chart;
pub mod model;
pub mod palette;
pub mod pie_chart;

pub use area_chart::AreaChart;
pub use bar_chart::BarChart;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;

use crate::shared::number_format::format_compact_currency;
use leptos::prelude::*;
use model::{ticks, ChartArea};

/// One named line or bar series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub color: String,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(name: impl Into<String>, color: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            values,
        }
    }
}

/// One pie segment, sized by `percentage`.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub percentage: f64,
    pub total: f64,
    pub color: String,
}

const Y_INTERVALS: usize = 4;
const MAX_X_LABELS: usize = 10;

/// SVG attribute value for a coordinate.
fn px(value: f64) -> String {
    format!("{value:.2}")
}

fn view_box(area: ChartArea) -> String {
    format!("0 0 {} {}", area.width, area.height)
}

/// Horizontal grid lines with currency tick labels.
fn y_axis(area: ChartArea, min: f64, max: f64) -> impl IntoView {
    ticks(min, max, Y_INTERVALS)
        .into_iter()
        .map(|tick| {
            let y = area.y_range(tick, min, max);
            view! {
                <g class="chart__grid">
                    <line
                        x1=px(area.pad_left)
                        x2=px(area.right())
                        y1=px(y)
                        y2=px(y)
                        stroke="#e5e7eb"
                        stroke-dasharray="3 3"
                    />
                    <text
                        class="chart__tick"
                        x=px(area.pad_left - 8.0)
                        y=px(y + 4.0)
                        text-anchor="end"
                        font-size="11"
                    >
                        {format_compact_currency(tick)}
                    </text>
                </g>
            }
        })
        .collect_view()
}

/// Category labels under the plot; `xs` are the label centres.
fn x_labels(area: ChartArea, labels: Vec<String>, xs: Vec<f64>) -> impl IntoView {
    let step = model::label_step(labels.len(), MAX_X_LABELS);
    labels
        .into_iter()
        .zip(xs)
        .enumerate()
        .filter(move |(i, _)| i % step == 0)
        .map(|(_, (label, x))| {
            view! {
                <text
                    class="chart__tick"
                    x=px(x)
                    y=px(area.bottom() + 18.0)
                    text-anchor="middle"
                    font-size="11"
                >
                    {label}
                </text>
            }
        })
        .collect_view()
}

#[component]
fn ChartLegend(#[prop(into)] items: Signal<Vec<(String, String)>>) -> impl IntoView {
    view! {
        <div class="chart__legend">
            {move || {
                items
                    .get()
                    .into_iter()
                    .map(|(name, color)| {
                        view! {
                            <span class="chart__legend-item">
                                <span class="chart__swatch" style:background-color=color></span>
                                {name}
                            </span>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
