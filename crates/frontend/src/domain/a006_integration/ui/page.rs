use contracts::domain::a006_integration::{BankIntegration, BankProvider, WhatsAppSettings};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a006_integration::api;
use crate::domain::a006_integration::ui::banks::BankSection;
use crate::domain::a006_integration::ui::whatsapp::WhatsAppSection;
use crate::shared::api_utils::ApiError;
use crate::shared::components::LoadingState;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;

#[component]
pub fn IntegrationsPage() -> impl IntoView {
    let loading = RwSignal::new(true);
    let providers = RwSignal::new(Vec::<BankProvider>::new());
    let integrations = RwSignal::new(Vec::<BankIntegration>::new());
    let whatsapp = RwSignal::new(Option::<WhatsAppSettings>::None);

    // Providers, bank links and WhatsApp settings land together or not at all
    let load = move || {
        spawn_local(async move {
            let result = async {
                let providers = api::list_providers().await?;
                let integrations = api::list_banks().await?;
                let whatsapp = api::get_whatsapp().await?;
                Ok::<_, ApiError>((providers, integrations, whatsapp))
            }
            .await;
            match result {
                Ok((p, i, w)) => {
                    providers.set(p);
                    integrations.set(i);
                    whatsapp.set(Some(w));
                }
                Err(e) => log::error!("Failed to load integrations: {}", e),
            }
            loading.set(false);
        });
    };

    load();

    view! {
        <PageFrame
            page_id="a006_integration--system"
            category=PAGE_CAT_SYSTEM
            title="Integrações"
            subtitle="Bancos e notificações"
        >
            <div class="page__content">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingState /> }>
                    <BankSection
                        providers=providers
                        integrations=integrations
                        on_changed=Callback::new(move |_: ()| load())
                    />
                    <WhatsAppSection settings=whatsapp />
                </Show>
            </div>
        </PageFrame>
    }
}
