use contracts::domain::a003_transaction::TransactionType;
use contracts::domain::a004_category::{Category, CategoryCreate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_category::api;
use crate::shared::charts::palette::NEUTRAL_COLOR;
use crate::shared::components::FormError;

/// Creates a user category of `kind` and hands it back through `on_created`.
#[component]
pub fn CategoryDialog(
    open: RwSignal<bool>,
    #[prop(into)] kind: Signal<TransactionType>,
    on_created: Callback<Category>,
) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let color = RwSignal::new(NEUTRAL_COLOR.to_string());
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let close = move || {
        name.set(String::new());
        color.set(NEUTRAL_COLOR.to_string());
        error.set(None);
        open.set(false);
    };

    let submit = move || {
        let trimmed = name.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            error.set(Some("Informe o nome da categoria".to_string()));
            return;
        }
        let create = CategoryCreate {
            name: trimmed,
            category_type: kind.get_untracked(),
            icon: None,
            color: Some(color.get_untracked()),
        };
        saving.set(true);
        spawn_local(async move {
            match api::create_category(&create).await {
                Ok(category) => {
                    log::info!("Created category {}", category.id);
                    close();
                    on_created.run(category);
                }
                Err(e) => {
                    log::error!("Failed to create category: {}", e);
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
                    <DialogTitle>
                        {move || format!("Nova categoria de {}", kind.get().label().to_lowercase())}
                    </DialogTitle>
                    <DialogContent>
                        <FormError message=error />
                        <div class="form">
                            <div class="form__group">
                                <label class="form__label">"Nome"</label>
                                <Input value=name placeholder="Ex: Academia" />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Cor"</label>
                                <input type="color" class="form__color" bind:value=color />
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
                            "Criar Categoria"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
