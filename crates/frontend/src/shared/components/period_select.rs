use contracts::shared::period::PeriodPreset;
use leptos::prelude::*;
use thaw::*;

/// Dropdown of period presets bound to `preset`.
#[component]
pub fn PeriodSelect(preset: RwSignal<PeriodPreset>) -> impl IntoView {
    let select_value = RwSignal::new(preset.get_untracked().key().to_string());

    Effect::new(move |_| {
        let chosen = PeriodPreset::from_key(&select_value.get());
        if preset.get_untracked() != chosen {
            preset.set(chosen);
        }
    });

    view! {
        <Select value=select_value>
            {PeriodPreset::ALL
                .iter()
                .map(|p| view! { <option value=p.key()>{p.label()}</option> })
                .collect_view()}
        </Select>
    }
}
