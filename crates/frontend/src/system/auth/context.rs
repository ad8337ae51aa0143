use contracts::system::auth::RegisterRequest;
use contracts::system::users::User;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cell::Cell;

use super::{api, storage};
use crate::shared::api_utils::{ApiError, ApiResult};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    fn from_storage() -> Self {
        match storage::get_access_token() {
            Some(token) => Self {
                access_token: Some(token),
                user: storage::get_user(),
            },
            None => Self::default(),
        }
    }

    pub fn user_name(&self) -> String {
        self.user
            .as_ref()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    }
}

thread_local! {
    // Setter of the mounted provider, so the HTTP layer can end the session on 401.
    static SESSION_SETTER: Cell<Option<WriteSignal<AuthState>>> = const { Cell::new(None) };
}

/// Drops the in-memory session; storage is cleared by the caller.
pub fn notify_session_expired() {
    if let Some(set_auth_state) = SESSION_SETTER.with(Cell::get) {
        set_auth_state.set(AuthState::default());
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_storage());
    SESSION_SETTER.with(|cell| cell.set(Some(set_auth_state)));
    on_cleanup(|| SESSION_SETTER.with(|cell| cell.set(None)));

    // Validate restored token once, refreshing the cached profile
    if auth_state.with_untracked(|s| s.access_token.is_some()) {
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user) => {
                    storage::save_user(&user);
                    set_auth_state.update(|s| s.user = Some(user));
                }
                Err(ApiError::Unauthorized) => {
                    log::info!("Stored token rejected, session cleared");
                }
                Err(e) => {
                    // offline or server trouble: keep the cached profile
                    log::warn!("Could not validate stored session: {}", e);
                }
            }
        });
    }

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> ApiResult<()> {
    let response = api::login(email, password).await?;

    storage::save_access_token(&response.access_token);
    storage::save_user(&response.user);
    log::info!("Signed in as {}", response.user.email);

    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user: Some(response.user),
    });

    Ok(())
}

/// Helper: Create the account, then sign in with the same credentials
pub async fn do_register(
    set_auth_state: WriteSignal<AuthState>,
    request: RegisterRequest,
) -> ApiResult<()> {
    api::register(&request).await?;
    do_login(set_auth_state, request.email, request.password).await
}

/// Helper: Replace the cached profile after an update
pub fn set_current_user(set_auth_state: WriteSignal<AuthState>, user: User) {
    storage::save_user(&user);
    set_auth_state.update(|s| s.user = Some(user));
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
