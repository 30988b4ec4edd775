use dioxus::prelude::*;
use ui::views::AdminLayoutView;
use ui::{AdminContext, AdminProvider, ConfigErrorView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[layout(AdminLayout)]
        #[route("/users")]
        Users {},
        #[route("/users/managers")]
        Managers {},
        #[route("/users/executives")]
        Executives {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/users-registrations")]
        Registrations {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const ADMIN_TOML: &str = include_str!("../admin.toml");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let admin = use_hook(|| AdminContext::load(ADMIN_TOML));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::TAILWIND_CSS }
        document::Link { rel: "stylesheet", href: ui::DX_COMPONENTS_CSS }
        match admin {
            Ok(admin) => rsx! {
                AdminProvider { admin: admin,
                    ui::components::ToastProvider {
                        Router::<Route> {}
                    }
                }
            },
            Err(message) => {
                tracing::error!(%message, "invalid {}", store::AdminConfig::filename());
                rsx! { ConfigErrorView { message: message } }
            }
        }
    }
}

/// Redirect `/` to `/users`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Users {});
    rsx! {}
}

#[component]
fn AdminLayout() -> Element {
    let route = use_route::<Route>();
    let nav = use_navigator();

    rsx! {
        AdminLayoutView {
            pathname: route.to_string(),
            on_navigate: move |href: String| match href.parse::<Route>() {
                Ok(target) => {
                    nav.push(target);
                }
                Err(_) => tracing::warn!(%href, "unknown route"),
            },
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Users() -> Element {
    rsx! { ui::views::UsersListView {} }
}

#[component]
fn Managers() -> Element {
    rsx! { ui::views::SectionPlaceholder { title: "Managers" } }
}

#[component]
fn Executives() -> Element {
    rsx! { ui::views::SectionPlaceholder { title: "Executives" } }
}

#[component]
fn Dashboard() -> Element {
    rsx! { ui::views::SectionPlaceholder { title: "Dashboard" } }
}

#[component]
fn Registrations() -> Element {
    rsx! { ui::views::SectionPlaceholder { title: "Users Registrations" } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { ui::views::NotFoundView { path: path } }
}
