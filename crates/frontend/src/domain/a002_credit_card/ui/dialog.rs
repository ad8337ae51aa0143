use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_credit_card::api;
use crate::domain::a002_credit_card::form::CardForm;
use crate::shared::components::FormError;

#[component]
pub fn CardDialog(open: RwSignal<bool>, on_saved: Callback<()>) -> impl IntoView {
    let defaults = CardForm::default();
    let name = RwSignal::new(String::new());
    let institution = RwSignal::new(String::new());
    let limit = RwSignal::new(String::new());
    let closing_day = RwSignal::new(defaults.closing_day.clone());
    let due_day = RwSignal::new(defaults.due_day.clone());
    let color = RwSignal::new(defaults.color.clone());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);
    let defaults = StoredValue::new(defaults);

    let reset = move || {
        defaults.with_value(|d| {
            name.set(d.name.clone());
            institution.set(d.institution.clone());
            limit.set(d.limit.clone());
            closing_day.set(d.closing_day.clone());
            due_day.set(d.due_day.clone());
            color.set(d.color.clone());
        });
        error.set(None);
    };

    let submit = move || {
        let form = CardForm {
            name: name.get_untracked(),
            institution: institution.get_untracked(),
            limit: limit.get_untracked(),
            closing_day: closing_day.get_untracked(),
            due_day: due_day.get_untracked(),
            color: color.get_untracked(),
        };
        let create = match form.to_create() {
            Ok(create) => create,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        saving.set(true);
        spawn_local(async move {
            match api::create_card(&create).await {
                Ok(card) => {
                    log::info!("Created credit card {}", card.id);
                    reset();
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create credit card: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Novo Cartão"</DialogTitle>
                    <DialogContent>
                        <FormError message=error />
                        <div class="form">
                            <div class="form__group">
                                <label class="form__label">"Nome do Cartão"</label>
                                <Input value=name placeholder="Ex: Nubank Platinum" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Banco Emissor"</label>
                                <Input value=institution placeholder="Ex: Nubank" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Limite"</label>
                                <Input value=limit placeholder="0,00" />
                            </div>
                            <div class="form__row">
                                <div class="form__group">
                                    <label class="form__label">"Dia Fechamento"</label>
                                    <input type="number" min="1" max="31" class="form__input" bind:value=closing_day />
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Dia Vencimento"</label>
                                    <input type="number" min="1" max="31" class="form__input" bind:value=due_day />
                                </div>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Cor"</label>
                                <input type="color" class="form__color" bind:value=color />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                reset();
                                open.set(false);
                            }
                        >
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=move |_| submit()
                        >
                            "Criar Cartão"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
