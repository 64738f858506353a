use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::config::AppConfig;
use crate::shared::dialogs::{NotificationHost, NotificationService};
use crate::shared::modal_stack::{ModalHost, ModalStackService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_env();
    log::info!("ClassicModels CMS, backend at {}", config.api_base);
    provide_context(config);

    // Active section and sidebar, restored from the URL query
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    provide_context(ModalStackService::new());
    provide_context(NotificationService::new());

    view! {
        <Shell />
        <ModalHost />
        <NotificationHost />
    }
}
