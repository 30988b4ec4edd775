use dioxus::prelude::*;
use store::{breadcrumb, home_routes, Breadcrumb};

use crate::components::sidebar::{SidebarInset, SidebarProvider, SidebarTrigger};
use crate::icons::FaChevronRight;
use crate::{use_admin, AppSidebar, Icon};

/// Shared console shell: sidebar navigation, header with breadcrumb, and the
/// routed page as children.
///
/// Platform packages pass the current path and a navigation callback so this
/// crate stays router-agnostic.
#[component]
pub fn AdminLayoutView(
    /// Current location, e.g. "/users/managers".
    pathname: String,
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let admin = use_admin();
    let role = admin.config.session.role;
    let groups = home_routes(&pathname, role);
    let crumb = breadcrumb(&pathname, role);

    rsx! {
        SidebarProvider {
            AppSidebar { groups: groups, on_navigate: on_navigate }
            SidebarInset {
                header { class: "flex items-center gap-2 h-14 px-4 border-b border-neutral-200 shrink-0",
                    SidebarTrigger {}
                    span { class: "w-px h-4 bg-neutral-200" }
                    BreadcrumbTrail { crumb: crumb }
                }
                div { class: "flex-1 overflow-y-auto p-6", {children} }
            }
        }
    }
}

#[component]
fn BreadcrumbTrail(crumb: Breadcrumb) -> Element {
    rsx! {
        nav { class: "flex items-center gap-2 text-sm text-neutral-500", "aria-label": "breadcrumb",
            match crumb {
                Breadcrumb::Page(label) => rsx! {
                    span { class: "font-medium text-neutral-800", "{label}" }
                },
                Breadcrumb::Nested { parent, child } => rsx! {
                    span { "{parent}" }
                    span { class: "inline-flex",
                        Icon { icon: FaChevronRight, width: 10, height: 10 }
                    }
                    span { class: "font-medium text-neutral-800", "{child}" }
                },
                Breadcrumb::Home => rsx! {
                    span { class: "font-medium text-neutral-800", "Home" }
                },
            }
        }
    }
}
