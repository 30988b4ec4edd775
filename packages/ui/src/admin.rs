//! Console-wide context: the loaded configuration and the users backend.

use api::{api_url_from_env, Backend};
use dioxus::prelude::*;
use store::AdminConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct AdminContext {
    pub config: AdminConfig,
    pub backend: Backend,
}

impl AdminContext {
    /// Parse `admin.toml`, apply the `API_URL` override and pick a backend.
    pub fn load(toml: &str) -> Result<Self, String> {
        let config = AdminConfig::from_toml(toml)
            .map_err(|e| e.to_string())?
            .with_base_url(api_url_from_env().as_deref())
            .map_err(|e| e.to_string())?;
        let backend = Backend::from_config(&config).map_err(|e| e.to_string())?;
        Ok(Self { config, backend })
    }
}

pub fn use_admin() -> AdminContext {
    use_context::<AdminContext>()
}

/// Makes `admin` available to every view below it.
#[component]
pub fn AdminProvider(admin: AdminContext, children: Element) -> Element {
    use_context_provider(move || admin);
    rsx! { {children} }
}

/// Shown instead of the console when the configuration cannot be used.
#[component]
pub fn ConfigErrorView(message: String) -> Element {
    rsx! {
        div { class: "max-w-xl mx-auto my-16 p-6 rounded-lg border border-red-200 bg-red-50 text-red-800",
            h2 { class: "m-0 mb-2 text-lg font-semibold", "The console could not start" }
            p { class: "m-0 text-sm", "{message}" }
        }
    }
}
