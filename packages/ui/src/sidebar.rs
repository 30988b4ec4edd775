use dioxus::prelude::*;
use store::{NavIcon, RouteGroup, RouteItem};

use crate::components::sidebar::{
    use_sidebar, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel,
    SidebarHeader, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarMenuSub,
    SidebarMenuSubButton,
};
use crate::icons::{FaChevronRight, FaGaugeHigh, FaUserCheck, FaUsers};
use crate::Icon;

/// Navigation sidebar built from the role-filtered route groups.
#[component]
pub fn AppSidebar(groups: Vec<RouteGroup>, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        Sidebar {
            SidebarHeader {
                div { class: "flex items-center gap-2",
                    div { class: "grid place-items-center w-8 h-8 rounded-lg bg-neutral-900 text-white font-bold", "A" }
                    span { class: "font-semibold", "Admin Console" }
                }
            }
            SidebarContent {
                for group in groups {
                    SidebarGroup { key: "{group.label}",
                        SidebarGroupLabel { "{group.label}" }
                        SidebarMenu {
                            for route in group.routes {
                                NavEntry { key: "{route.href}", route: route.clone(), on_navigate: on_navigate }
                            }
                        }
                    }
                }
            }
            SidebarFooter {
                span { class: "text-xs text-neutral-500", "Users administration" }
            }
        }
    }
}

#[component]
fn NavEntry(route: RouteItem, on_navigate: EventHandler<String>) -> Element {
    let mut expanded = use_signal(|| route.active);
    let sidebar = use_sidebar();

    let navigate = move |href: &'static str| {
        sidebar.set_open_mobile(false);
        on_navigate.call(href.to_string());
    };

    if route.sub_items.is_empty() {
        let href = route.href;
        return rsx! {
            SidebarMenuItem {
                SidebarMenuButton {
                    active: route.active,
                    onclick: move |_| navigate(href),
                    NavGlyph { icon: route.icon }
                    span { "{route.label}" }
                }
            }
        };
    }

    rsx! {
        SidebarMenuItem {
            SidebarMenuButton {
                active: route.active,
                onclick: move |_| expanded.set(!expanded()),
                NavGlyph { icon: route.icon }
                span { "{route.label}" }
                span {
                    class: "sidebar-chevron",
                    "data-open": expanded(),
                    Icon { icon: FaChevronRight, width: 10, height: 10 }
                }
            }
            if expanded() {
                SidebarMenuSub {
                    for sub in route.sub_items {
                        SidebarMenuSubButton {
                            key: "{sub.href}",
                            href: sub.href,
                            active: sub.active,
                            onclick: move |_| navigate(sub.href),
                            "{sub.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NavGlyph(icon: Option<NavIcon>) -> Element {
    match icon {
        Some(NavIcon::Dashboard) => rsx! { Icon { icon: FaGaugeHigh, width: 14, height: 14 } },
        Some(NavIcon::Users) => rsx! { Icon { icon: FaUsers, width: 14, height: 14 } },
        Some(NavIcon::Approvals) => rsx! { Icon { icon: FaUserCheck, width: 14, height: 14 } },
        None => rsx! {},
    }
}
