use contracts::domain::a005_investment::EntryType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use uuid::Uuid;

use crate::domain::a005_investment::api;
use crate::domain::a005_investment::form::{EntryForm, PortfolioForm};
use crate::shared::components::FormError;
use crate::shared::date_utils::today;

#[component]
pub fn PortfolioDialog(open: RwSignal<bool>, on_saved: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let portfolio_type = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let close = move || {
        name.set(String::new());
        portfolio_type.set(String::new());
        description.set(String::new());
        error.set(None);
        open.set(false);
    };

    let submit = move || {
        let form = PortfolioForm {
            name: name.get_untracked(),
            portfolio_type: portfolio_type.get_untracked(),
            description: description.get_untracked(),
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
            match api::create_portfolio(&create).await {
                Ok(portfolio) => {
                    log::info!("Created portfolio {}", portfolio.id);
                    close();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create portfolio: {}", e);
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
                    <DialogTitle>"Nova Carteira"</DialogTitle>
                    <DialogContent>
                        <FormError message=error />
                        <div class="form">
                            <div class="form__group">
                                <label class="form__label">"Nome"</label>
                                <Input value=name placeholder="Ex: Tesouro Selic" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Tipo"</label>
                                <Input value=portfolio_type placeholder="Ex: Renda Fixa, Ações, Misto" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Descrição (opcional)"</label>
                                <Input value=description />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close()>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=move |_| submit()
                        >
                            "Criar Carteira"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

/// Deposit or withdrawal for the selected portfolio.
#[component]
pub fn EntryDialog(
    open: RwSignal<bool>,
    #[prop(into)] portfolio_id: Signal<Option<Uuid>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = EntryForm::new(today());
    let entry_type = RwSignal::new(initial.entry_type);
    let amount = RwSignal::new(String::new());
    let date = RwSignal::new(initial.date);
    let description = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let close = move || {
        let fresh = EntryForm::new(today());
        entry_type.set(fresh.entry_type);
        amount.set(String::new());
        date.set(fresh.date);
        description.set(String::new());
        error.set(None);
        open.set(false);
    };

    let submit = move || {
        let Some(portfolio) = portfolio_id.get_untracked() else {
            return;
        };
        let form = EntryForm {
            entry_type: entry_type.get_untracked(),
            amount: amount.get_untracked(),
            date: date.get_untracked(),
            description: description.get_untracked(),
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
            match api::create_entry(portfolio, &create).await {
                Ok(entry) => {
                    log::info!("Registered entry {} on portfolio {}", entry.id, portfolio);
                    close();
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to register entry: {}", e);
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
                    <DialogTitle>"Registrar Movimentação"</DialogTitle>
                    <DialogContent>
                        <FormError message=error />
                        <div class="form">
                            <div class="segmented">
                                {EntryType::ALL.iter().map(|&kind| view! {
                                    <button
                                        type="button"
                                        class="segmented__item"
                                        class:segmented__item--active=move || entry_type.get() == kind.code()
                                        on:click=move |_| entry_type.set(kind.code().to_string())
                                    >
                                        {kind.label()}
                                    </button>
                                }).collect_view()}
                            </div>
                            <div class="form__row">
                                <div class="form__group">
                                    <label class="form__label">"Valor"</label>
                                    <Input value=amount placeholder="0,00" />
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Data"</label>
                                    <input type="date" class="form__input" bind:value=date />
                                </div>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Descrição (opcional)"</label>
                                <Input value=description />
                            </div>
                        </div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| close()>
                            "Cancelar"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=move |_| submit()
                        >
                            "Registrar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
