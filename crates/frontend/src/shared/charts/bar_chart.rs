use super::model::{nice_max, series_max, ChartArea};
use super::{px, view_box, x_labels, y_axis, ChartLegend, ChartSeries};
use leptos::prelude::*;

/// Share of a band covered by its bar group.
const GROUP_FILL: f64 = 0.7;

/// Grouped bars, one group per label (monthly comparison).
#[component]
pub fn BarChart(
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
        <div class="chart chart--bar">
            <svg class="chart__svg" viewBox=view_box(area) width="100%" role="img">
                {move || y_axis(area, 0.0, max.get())}
                {move || {
                    let labels = labels.get();
                    let count = labels.len();
                    let xs = (0..count)
                        .map(|i| {
                            let (x, w) = area.band(i, count);
                            x + w / 2.0
                        })
                        .collect();
                    x_labels(area, labels, xs)
                }}
                {move || {
                    let max = max.get();
                    let count = labels.with(|l| l.len());
                    let all = series.get();
                    let per_group = all.len().max(1) as f64;
                    all.into_iter()
                        .enumerate()
                        .flat_map(|(k, s)| {
                            s.values
                                .into_iter()
                                .take(count)
                                .enumerate()
                                .map(move |(i, v)| (k, i, v, s.color.clone()))
                                .collect::<Vec<_>>()
                        })
                        .map(|(k, i, v, color)| {
                            let (band_x, band_w) = area.band(i, count);
                            let inner = band_w * GROUP_FILL;
                            let bar_w = inner / per_group;
                            let x = band_x + (band_w - inner) / 2.0 + bar_w * k as f64;
                            let y = area.y(v, max);
                            view! {
                                <rect
                                    class="chart__bar"
                                    x=px(x)
                                    y=px(y)
                                    width=px(bar_w)
                                    height=px(area.bottom() - y)
                                    rx="3"
                                    fill=color
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
