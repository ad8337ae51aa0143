use contracts::system::users::ProfileUpdate;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::context::{set_current_user, use_auth};
use crate::system::users::api;
use crate::system::users::validation::validate_password_change;

#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Success(String),
    Error(String),
}

/// Profile name and password change
#[component]
pub fn SettingsPage() -> impl IntoView {
    let (auth_state, set_auth_state) = use_auth();

    let (name, set_name) = signal(auth_state.with_untracked(|s| s.user_name()));
    let (current_password, set_current_password) = signal(String::new());
    let (new_password, set_new_password) = signal(String::new());
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (notice, set_notice) = signal(Option::<Notice>::None);
    let (is_saving, set_is_saving) = signal(false);

    let on_profile_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let update = ProfileUpdate {
            name: Some(name.get_untracked().trim().to_string()),
            ..Default::default()
        };

        set_is_saving.set(true);
        set_notice.set(None);

        spawn_local(async move {
            match api::update_profile(&update).await {
                Ok(user) => {
                    set_name.set(user.name.clone());
                    set_current_user(set_auth_state, user);
                    set_notice.set(Some(Notice::Success(
                        "Perfil atualizado com sucesso!".to_string(),
                    )));
                }
                Err(e) => {
                    log::error!("Profile update failed: {}", e);
                    set_notice.set(Some(Notice::Error(e.to_string())));
                }
            }
            set_is_saving.set(false);
        });
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_password_change(
            &current_password.get_untracked(),
            &new_password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(request) => request,
            Err(e) => {
                set_notice.set(Some(Notice::Error(e.to_string())));
                return;
            }
        };

        set_is_saving.set(true);
        set_notice.set(None);

        spawn_local(async move {
            match api::change_password(&request).await {
                Ok(_) => {
                    set_current_password.set(String::new());
                    set_new_password.set(String::new());
                    set_confirm_password.set(String::new());
                    set_notice.set(Some(Notice::Success(
                        "Senha alterada com sucesso!".to_string(),
                    )));
                }
                Err(e) => {
                    log::error!("Password change failed: {}", e);
                    set_notice.set(Some(Notice::Error(e.to_string())));
                }
            }
            set_is_saving.set(false);
        });
    };

    let email = move || {
        auth_state
            .get()
            .user
            .map(|u| u.email)
            .unwrap_or_default()
    };

    view! {
        <PageFrame page_id="sys_settings--system" category=PAGE_CAT_SYSTEM title="Configurações">
            {move || {
                notice.get().map(|n| match n {
                    Notice::Success(text) => {
                        view! { <div class="alert alert--success">{text}</div> }.into_any()
                    }
                    Notice::Error(text) => {
                        view! { <div class="alert alert--error">{text}</div> }.into_any()
                    }
                })
            }}

            <div class="page__content settings-grid">
                <div class="card">
                    <h3 class="card__title">"Perfil"</h3>
                    <p class="card__subtitle">"Atualize suas informações pessoais"</p>
                    <form on:submit=on_profile_submit>
                        <div class="form-group">
                            <label for="settings-name">"Nome"</label>
                            <input
                                type="text"
                                id="settings-name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="settings-email">"Email"</label>
                            <input type="email" id="settings-email" prop:value=email disabled />
                            <small class="form-help">"O email não pode ser alterado"</small>
                        </div>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            "Salvar Alterações"
                        </button>
                    </form>
                </div>

                <div class="card">
                    <h3 class="card__title">"Segurança"</h3>
                    <p class="card__subtitle">"Altere sua senha de acesso"</p>
                    <form on:submit=on_password_submit>
                        <div class="form-group">
                            <label for="settings-current">"Senha Atual"</label>
                            <input
                                type="password"
                                id="settings-current"
                                prop:value=move || current_password.get()
                                on:input=move |ev| set_current_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="settings-new">"Nova Senha"</label>
                            <input
                                type="password"
                                id="settings-new"
                                prop:value=move || new_password.get()
                                on:input=move |ev| set_new_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <div class="form-group">
                            <label for="settings-confirm">"Confirmar Nova Senha"</label>
                            <input
                                type="password"
                                id="settings-confirm"
                                prop:value=move || confirm_password.get()
                                on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                                required
                                disabled=move || is_saving.get()
                            />
                        </div>
                        <button type="submit" class="btn-primary" disabled=move || is_saving.get()>
                            "Alterar Senha"
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}
