use super::model::{area_path, axis_bounds, line_path, ChartArea};
use super::palette::AREA_COLOR;
use super::{view_box, x_labels, y_axis};
use leptos::prelude::*;

/// Filled line over a single series (portfolio running balance).
#[component]
pub fn AreaChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] values: Signal<Vec<f64>>,
    #[prop(optional, into)] color: Option<String>,
) -> impl IntoView {
    let area = ChartArea::default();
    let color = color.unwrap_or_else(|| AREA_COLOR.to_string());
    let bounds = Memo::new(move |_| values.with(|v| axis_bounds(v)));

    view! {
        <div class="chart chart--area">
            <svg class="chart__svg" viewBox=view_box(area) width="100%" role="img">
                {move || {
                    let (min, max) = bounds.get();
                    y_axis(area, min, max)
                }}
                {move || {
                    let labels = labels.get();
                    let count = labels.len();
                    let xs = (0..count).map(|i| area.x_point(i, count)).collect();
                    x_labels(area, labels, xs)
                }}
                {move || {
                    let (min, max) = bounds.get();
                    let values = values.get();
                    let count = values.len();
                    let points: Vec<(f64, f64)> = values
                        .iter()
                        .enumerate()
                        .map(|(i, v)| (area.x_point(i, count), area.y_range(*v, min, max)))
                        .collect();
                    let baseline = area.y_range(0.0, min, max);
                    let color = color.clone();
                    view! {
                        <path
                            class="chart__area"
                            d=area_path(&points, baseline)
                            fill=color.clone()
                            fill-opacity="0.2"
                            stroke="none"
                        />
                        <path
                            class="chart__line"
                            d=line_path(&points)
                            fill="none"
                            stroke=color
                            stroke-width="2"
                        />
                    }
                }}
            </svg>
        </div>
    }
}
