use super::model::{line_path, nice_max, series_max, ChartArea};
use super::{view_box, x_labels, y_axis, ChartLegend, ChartSeries};
use leptos::prelude::*;

/// Line per series over shared x labels (cash flow by day).
#[component]
pub fn LineChart(
    #[prop(into)] labels: Signal<Vec<String>>,
    #[prop(into)] series: Signal<Vec<ChartSeries>>,
) -> impl IntoView {
    let area = ChartArea::default();
    let max = Memo::new(move |_| {
        series.with(|all| nice_max(series_max(all.iter().map(|s| s.values.as_slice()))))
    });
    let legend = Signal::derive(move || {
        series.with(|all| {
            all.iter()
                .map(|s| (s.name.clone(), s.color.clone()))
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="chart chart--line">
            <svg class="chart__svg" viewBox=view_box(area) width="100%" role="img">
                {move || y_axis(area, 0.0, max.get())}
                {move || {
                    let labels = labels.get();
                    let count = labels.len();
                    let xs = (0..count).map(|i| area.x_point(i, count)).collect();
                    x_labels(area, labels, xs)
                }}
                {move || {
                    let max = max.get();
                    series
                        .get()
                        .into_iter()
                        .map(|s| {
                            let count = s.values.len();
                            let points: Vec<(f64, f64)> = s
                                .values
                                .iter()
                                .enumerate()
                                .map(|(i, v)| (area.x_point(i, count), area.y(*v, max)))
                                .collect();
                            view! {
                                <path
                                    class="chart__line"
                                    d=line_path(&points)
                                    fill="none"
                                    stroke=s.color
                                    stroke-width="2"
                                    stroke-linejoin="round"
                                />
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <ChartLegend items=legend />
        </div>
    }
}
