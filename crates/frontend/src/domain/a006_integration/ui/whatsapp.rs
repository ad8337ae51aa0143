use contracts::domain::a006_integration::{WhatsAppSettings, WhatsAppSettingsUpdate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_integration::api;
use crate::domain::a006_integration::view_model::contact_update;
use crate::shared::dialogs::alert;
use crate::shared::icons::icon;
use crate::shared::number_format::format_decimal;

/// Each toggle saves immediately with a one-field `PUT`.
#[component]
pub fn WhatsAppSection(settings: RwSignal<Option<WhatsAppSettings>>) -> impl IntoView {
    let phone = RwSignal::new(String::new());
    let threshold = RwSignal::new(String::new());

    Effect::new(move |_| {
        settings.with(|s| {
            if let Some(s) = s {
                phone.set(s.phone_number.clone().unwrap_or_default());
                threshold.set(
                    s.high_expense_threshold
                        .map(|t| format_decimal(t, 2))
                        .unwrap_or_default(),
                );
            }
        });
    });

    let save = move |update: WhatsAppSettingsUpdate| {
        spawn_local(async move {
            match api::update_whatsapp(&update).await {
                Ok(saved) => settings.set(Some(saved)),
                Err(e) => {
                    log::error!("Failed to update WhatsApp settings: {}", e);
                    alert(&e.to_string());
                }
            }
        });
    };

    let save_contact = move || match contact_update(&phone.get_untracked(), &threshold.get_untracked()) {
        Ok(update) => save(update),
        Err(message) => alert(&message),
    };

    let is_active = move || settings.with(|s| s.as_ref().is_some_and(|s| s.is_active));
    let flag = move |pick: fn(&WhatsAppSettings) -> bool| {
        move || settings.with(|s| s.as_ref().is_some_and(pick))
    };

    let toggle_row = move |icon_name: &'static str,
                           title: &'static str,
                           hint: &'static str,
                           checked: fn(&WhatsAppSettings) -> bool,
                           update: fn(bool) -> WhatsAppSettingsUpdate| {
        view! {
            <label class="toggle-row">
                <div class="toggle-row__text">
                    {icon(icon_name)}
                    <div>
                        <p class="toggle-row__title">{title}</p>
                        <p class="toggle-row__hint">{hint}</p>
                    </div>
                </div>
                <input
                    type="checkbox"
                    class="toggle-row__input"
                    prop:checked=flag(checked)
                    on:change=move |ev| save(update(event_target_checked(&ev)))
                />
            </label>
        }
    };

    view! {
        <section class="integration-section">
            <div class="integration-section__header">
                <div class="integration-section__icon integration-section__icon--whatsapp">
                    {icon("message-circle")}
                </div>
                <div>
                    <h2 class="integration-section__title">"WhatsApp"</h2>
                    <p class="integration-section__hint">
                        "Receba alertas e resumos financeiros no seu WhatsApp"
                    </p>
                </div>
            </div>
            <div class="card">
                <div class="form__row">
                    <div class="form__group">
                        <label class="form__label">"Número do WhatsApp"</label>
                        <Input value=phone placeholder="+55 11 99999-9999" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Limite para alerta"</label>
                        <Input value=threshold placeholder="0,00" />
                    </div>
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| save_contact()>
                        "Salvar"
                    </Button>
                </div>

                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <span class="form__label">"Status"</span>
                    {move || {
                        let (color, label) = if is_active() {
                            (BadgeColor::Success, "Ativo")
                        } else {
                            (BadgeColor::Subtle, "Inativo")
                        };
                        view! {
                            <Badge appearance=BadgeAppearance::Tint color=color>{label}</Badge>
                        }
                    }}
                    <Button
                        appearance=move || {
                            if is_active() { ButtonAppearance::Secondary } else { ButtonAppearance::Primary }
                        }
                        on_click=move |_| save(WhatsAppSettingsUpdate {
                            is_active: Some(!is_active()),
                            ..Default::default()
                        })
                    >
                        {move || if is_active() { "Desativar" } else { "Ativar" }}
                    </Button>
                </Flex>

                <div class="toggle-list">
                    <h3 class="toggle-list__title">"Configurações de Alertas"</h3>
                    {toggle_row(
                        "activity",
                        "Alerta de gastos altos",
                        "Notificar quando uma despesa for acima do limite",
                        |s| s.alert_on_high_expense,
                        |on| WhatsAppSettingsUpdate { alert_on_high_expense: Some(on), ..Default::default() },
                    )}
                    {toggle_row(
                        "layout-dashboard",
                        "Resumo diário",
                        "Receber resumo das finanças todos os dias",
                        |s| s.daily_summary,
                        |on| WhatsAppSettingsUpdate { daily_summary: Some(on), ..Default::default() },
                    )}
                    {toggle_row(
                        "layout-dashboard",
                        "Resumo semanal",
                        "Receber resumo das finanças toda semana",
                        |s| s.weekly_summary,
                        |on| WhatsAppSettingsUpdate { weekly_summary: Some(on), ..Default::default() },
                    )}
                </div>
            </div>
        </section>
    }
}
