use contracts::domain::a001_account::AccountType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_account::api;
use crate::domain::a001_account::form::{AccountForm, DEFAULT_COLOR};
use crate::shared::components::FormError;

/// "Nova Conta" dialog. Closes and fires `on_saved` after a successful create.
#[component]
pub fn AccountDialog(open: RwSignal<bool>, on_saved: Callback<()>) -> impl IntoView {
    let defaults = AccountForm::default();
    let name = RwSignal::new(String::new());
    let account_type = RwSignal::new(defaults.account_type);
    let institution = RwSignal::new(String::new());
    let initial_balance = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_COLOR.to_string());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        account_type.set(AccountType::default().code().to_string());
        institution.set(String::new());
        initial_balance.set(String::new());
        color.set(DEFAULT_COLOR.to_string());
        error.set(None);
    };

    let submit = move || {
        let form = AccountForm {
            name: name.get_untracked(),
            account_type: account_type.get_untracked(),
            institution: institution.get_untracked(),
            initial_balance: initial_balance.get_untracked(),
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
            match api::create_account(&create).await {
                Ok(account) => {
                    log::info!("Created account {}", account.id);
                    reset();
                    open.set(false);
                    on_saved.run(());
                }
                Err(e) => {
                    log::error!("Failed to create account: {}", e);
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
                    <DialogTitle>"Nova Conta"</DialogTitle>
                    <DialogContent>
                        <FormError message=error />
                        <div class="form">
                            <div class="form__group">
                                <label class="form__label">"Nome"</label>
                                <Input value=name placeholder="Ex: Nubank" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Tipo"</label>
                                <Select value=account_type>
                                    {AccountType::ALL
                                        .iter()
                                        .map(|t| view! { <option value=t.code()>{t.label()}</option> })
                                        .collect_view()}
                                </Select>
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Instituição"</label>
                                <Input value=institution placeholder="Ex: Nu Pagamentos" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Saldo Inicial"</label>
                                <Input value=initial_balance placeholder="0,00" />
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
                            "Criar Conta"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
