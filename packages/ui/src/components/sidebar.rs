//! Collapsible application sidebar.
//!
//! [`SidebarProvider`] owns the open/closed state and shares it through
//! [`use_sidebar`]. On narrow screens the sidebar is an off-canvas sheet
//! driven by `open_mobile` instead.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct SidebarContext {
    open: Signal<bool>,
    open_mobile: Signal<bool>,
}

impl SidebarContext {
    pub fn open(&self) -> bool {
        (self.open)()
    }

    pub fn open_mobile(&self) -> bool {
        (self.open_mobile)()
    }

    pub fn set_open(&self, open: bool) {
        let mut signal = self.open;
        signal.set(open);
    }

    pub fn set_open_mobile(&self, open: bool) {
        let mut signal = self.open_mobile;
        signal.set(open);
    }

    /// Flip both the desktop and the mobile state.
    pub fn toggle(&self) {
        self.set_open(!self.open());
        self.set_open_mobile(!self.open_mobile());
    }

    fn state(&self) -> &'static str {
        if self.open() {
            "expanded"
        } else {
            "collapsed"
        }
    }
}

pub fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>()
}

#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let open = use_signal(move || default_open);
    let open_mobile = use_signal(|| false);
    let ctx = use_context_provider(|| SidebarContext { open, open_mobile });

    rsx! {
        div { class: "sidebar-wrapper", "data-state": ctx.state(), {children} }
    }
}

#[component]
pub fn Sidebar(children: Element) -> Element {
    let ctx = use_sidebar();
    rsx! {
        if ctx.open_mobile() {
            div {
                class: "sidebar-mobile-backdrop",
                onclick: move |_| ctx.set_open_mobile(false),
            }
        }
        aside {
            class: "sidebar",
            "data-state": ctx.state(),
            "data-mobile-open": ctx.open_mobile(),
            {children}
        }
    }
}

#[component]
pub fn SidebarHeader(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-header", {children} }
    }
}

#[component]
pub fn SidebarContent(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-content", {children} }
    }
}

#[component]
pub fn SidebarFooter(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-footer", {children} }
    }
}

#[component]
pub fn SidebarGroup(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group", {children} }
    }
}

#[component]
pub fn SidebarGroupLabel(children: Element) -> Element {
    rsx! {
        div { class: "sidebar-group-label", {children} }
    }
}

#[component]
pub fn SidebarMenu(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu", {children} }
    }
}

#[component]
pub fn SidebarMenuItem(children: Element) -> Element {
    rsx! {
        li { class: "sidebar-menu-item", {children} }
    }
}

#[component]
pub fn SidebarMenuButton(
    #[props(default)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "sidebar-menu-button",
            r#type: "button",
            "data-active": active,
            onclick: move |evt| onclick.call(evt),
            {children}
        }
    }
}

#[component]
pub fn SidebarMenuSub(children: Element) -> Element {
    rsx! {
        ul { class: "sidebar-menu-sub", {children} }
    }
}

/// A link-styled sub entry. `href` is kept on the element so the browser
/// shows the target; navigation goes through `onclick`.
#[component]
pub fn SidebarMenuSubButton(
    #[props(into)] href: String,
    #[props(default)] active: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        li { class: "sidebar-menu-sub-item",
            a {
                class: "sidebar-menu-sub-button",
                href: "{href}",
                "data-active": active,
                onclick: move |evt: MouseEvent| {
                    evt.prevent_default();
                    onclick.call(evt);
                },
                {children}
            }
        }
    }
}

/// The main column next to the sidebar.
#[component]
pub fn SidebarInset(children: Element) -> Element {
    rsx! {
        main { class: "sidebar-inset", {children} }
    }
}

#[component]
pub fn SidebarTrigger() -> Element {
    let ctx = use_sidebar();
    rsx! {
        button {
            class: "sidebar-trigger",
            r#type: "button",
            "aria-label": "Toggle Sidebar",
            onclick: move |_| ctx.toggle(),
            crate::Icon { icon: crate::icons::FaBars, width: 16, height: 16 }
        }
    }
}
