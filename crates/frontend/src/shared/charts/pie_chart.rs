use super::model::pie_arcs;
use super::PieSlice;
use crate::shared::number_format::{format_currency, format_percent};
use leptos::prelude::*;

const SIZE: f64 = 220.0;
const RADIUS: f64 = 100.0;

/// Proportional segments in server order with a legend.
#[component]
pub fn PieChart(#[prop(into)] slices: Signal<Vec<PieSlice>>) -> impl IntoView {
    let center = SIZE / 2.0;

    view! {
        <div class="chart chart--pie">
            <svg class="chart__svg" viewBox=format!("0 0 {SIZE} {SIZE}") width="100%" role="img">
                {move || {
                    let slices = slices.get();
                    let shares: Vec<f64> = slices.iter().map(|s| s.percentage).collect();
                    pie_arcs(&shares, center, center, RADIUS)
                        .into_iter()
                        .zip(slices)
                        .map(|(arc, slice)| {
                            view! {
                                <path
                                    class="chart__slice"
                                    d=arc.path
                                    fill=slice.color
                                    stroke="#fff"
                                    aria-label=slice.label
                                />
                            }
                        })
                        .collect_view()
                }}
            </svg>
            <div class="chart__legend chart__legend--column">
                {move || {
                    slices
                        .get()
                        .into_iter()
                        .map(|slice| {
                            view! {
                                <span class="chart__legend-item">
                                    <span class="chart__swatch" style:background-color=slice.color></span>
                                    {slice.label}
                                    <span class="chart__legend-value">
                                        {format!("{} · {}", format_currency(slice.total), format_percent(slice.percentage))}
                                    </span>
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
