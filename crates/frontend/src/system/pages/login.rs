use contracts::system::auth::RegisterRequest;
use contracts::system::users::MIN_PASSWORD_LEN;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_login, do_register, use_auth};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (mode, set_mode) = signal(Mode::Login);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        let current_mode = mode.get_untracked();

        if current_mode == Mode::Register && password_val.encode_utf16().count() < MIN_PASSWORD_LEN {
            set_error_message.set(Some(format!(
                "A senha deve ter no mínimo {} caracteres",
                MIN_PASSWORD_LEN
            )));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            // Success flips the auth state, which swaps this page for the main layout
            let result = match current_mode {
                Mode::Login => do_login(set_auth_state, email_val, password_val).await,
                Mode::Register => {
                    let request = RegisterRequest {
                        email: email_val,
                        password: password_val,
                        name: name.get_untracked().trim().to_string(),
                    };
                    do_register(set_auth_state, request).await
                }
            };
            if let Err(e) = result {
                log::warn!("Authentication failed: {}", e);
                set_error_message.set(Some(e.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    let toggle_mode = move |_| {
        set_error_message.set(None);
        set_mode.update(|m| {
            *m = match m {
                Mode::Login => Mode::Register,
                Mode::Register => Mode::Login,
            }
        });
    };

    let is_register = move || mode.get() == Mode::Register;

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Finanças Pessoais"</h1>
                <h2>{move || if is_register() { "Criar conta" } else { "Bem-vindo de volta!" }}</h2>
                <p class="login-subtitle">
                    {move || if is_register() {
                        "Preencha os dados para começar"
                    } else {
                        "Entre na sua conta para continuar"
                    }}
                </p>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <Show when=is_register>
                        <div class="form-group">
                            <label for="name">"Nome"</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="Seu nome"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                required
                                disabled=move || is_loading.get()
                            />
                        </div>
                    </Show>

                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="seu@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="••••••••"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || match (is_loading.get(), is_register()) {
                            (true, _) => "Aguarde...",
                            (false, true) => "Criar conta",
                            (false, false) => "Entrar",
                        }}
                    </button>
                </form>

                <p class="login-info">
                    {move || if is_register() { "Já tem uma conta? " } else { "Não tem uma conta? " }}
                    <a href="#" on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        toggle_mode(());
                    }>
                        {move || if is_register() { "Entrar" } else { "Criar conta" }}
                    </a>
                </p>
            </div>
        </div>
    }
}
