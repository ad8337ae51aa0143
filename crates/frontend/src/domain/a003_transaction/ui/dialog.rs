use contracts::domain::a001_account::Account;
use contracts::domain::a002_credit_card::CreditCard;
use contracts::domain::a003_transaction::{TransactionStatus, TransactionType};
use contracts::domain::a004_category::{categories_for, Category};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_transaction::api;
use crate::domain::a003_transaction::form::{Source, TransactionForm};
use crate::domain::a004_category::ui::CategoryDialog;
use crate::shared::components::FormError;
use crate::shared::date_utils::today;
use crate::shared::icons::icon;

/// "Novo Lançamento" dialog. Categories are limited to the chosen type and
/// cards are only offered for expenses.
#[component]
pub fn TransactionDialog(
    open: RwSignal<bool>,
    categories: RwSignal<Vec<Category>>,
    #[prop(into)] accounts: Signal<Vec<Account>>,
    #[prop(into)] cards: Signal<Vec<CreditCard>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let initial = TransactionForm::new(today());
    let kind = RwSignal::new(initial.kind.clone());
    let description = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let date = RwSignal::new(initial.date.clone());
    let status = RwSignal::new(initial.status.clone());
    let source = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let is_recurring = RwSignal::new(false);
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);
    let category_dialog = RwSignal::new(false);

    let kind_value =
        Signal::derive(move || TransactionType::from_code(&kind.get()).unwrap_or_default());
    let kind_categories = Memo::new(move |_| categories.with(|all| categories_for(all, kind_value.get())));

    // A category of the other type can't stay selected
    Effect::new(move |_| {
        kind.track();
        category.set(String::new());
    });

    let reset = move || {
        let fresh = TransactionForm::new(today());
        kind.set(fresh.kind);
        description.set(String::new());
        amount.set(String::new());
        date.set(fresh.date);
        status.set(fresh.status);
        source.set(String::new());
        category.set(String::new());
        is_recurring.set(false);
        notes.set(String::new());
        error.set(None);
    };

    let submit = move || {
        let form = TransactionForm {
            kind: kind.get_untracked(),
            description: description.get_untracked(),
            amount: amount.get_untracked(),
            date: date.get_untracked(),
            status: status.get_untracked(),
            source: source.get_untracked(),
            category: category.get_untracked(),
            is_recurring: is_recurring.get_untracked(),
            notes: notes.get_untracked(),
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
            match api::create_transaction(&create).await {
                Ok(transaction) => {
                    log::info!("Created transaction {}", transaction.id);
                    reset();
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create transaction: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            saving.set(false);
        });
    };

    let on_category_created = Callback::new(move |created: Category| {
        let id = created.id.to_string();
        categories.update(|all| all.push(created));
        category.set(id);
    });

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Novo Lançamento"</DialogTitle>
                    <DialogContent>
                        <FormError message=error />
                        <div class="form">
                            <div class="form__row">
                                <div class="form__group">
                                    <label class="form__label">"Tipo"</label>
                                    <Select value=kind>
                                        {TransactionType::ALL
                                            .iter()
                                            .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                            .collect_view()}
                                    </Select>
                                </div>
                                <div class="form__group">
                                    <label class="form__label">"Status"</label>
                                    <Select value=status>
                                        {TransactionStatus::ALL
                                            .iter()
                                            .map(|s| view! { <option value=s.code()>{s.label()}</option> })
                                            .collect_view()}
                                    </Select>
                                </div>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Descrição"</label>
                                <Input value=description placeholder="Ex: Almoço no restaurante" />
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
                                <label class="form__label">"Conta"</label>
                                <Select value=source>
                                    <option value="">"Selecione uma conta"</option>
                                    <optgroup label="Contas">
                                        {move || accounts.get().into_iter().map(|a| {
                                            view! { <option value=Source::Account(a.id).key()>{a.name}</option> }
                                        }).collect_view()}
                                    </optgroup>
                                    <Show when=move || kind_value.get() == TransactionType::Expense>
                                        <optgroup label="Cartões">
                                            {move || cards.get().into_iter().map(|c| {
                                                view! { <option value=Source::Card(c.id).key()>{c.name}</option> }
                                            }).collect_view()}
                                        </optgroup>
                                    </Show>
                                </Select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Categoria"</label>
                                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                                    <Select value=category>
                                        <option value="">"Selecione uma categoria"</option>
                                        {move || kind_categories.get().into_iter().map(|c| {
                                            view! { <option value=c.id.to_string()>{c.name}</option> }
                                        }).collect_view()}
                                    </Select>
                                    <button
                                        type="button"
                                        class="button button--ghost"
                                        title="Nova categoria"
                                        on:click=move |_| category_dialog.set(true)
                                    >
                                        {icon("plus")}
                                    </button>
                                </Flex>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Observações"</label>
                                <Input value=notes />
                            </div>
                            <Checkbox checked=is_recurring label="Lançamento recorrente" />
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
                            "Salvar"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>

        <CategoryDialog open=category_dialog kind=kind_value on_created=on_category_created />
    }
}
