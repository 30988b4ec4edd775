//! This crate contains all shared UI for the admin console.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const DX_COMPONENTS_CSS: Asset = asset!("/assets/dx-components-theme.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

mod admin;
pub use admin::{use_admin, AdminContext, AdminProvider, ConfigErrorView};

mod timer;

mod sidebar;
pub use sidebar::AppSidebar;

mod users_table;
pub use users_table::{RowAction, UsersTable};

mod action_dialog;
pub use action_dialog::ConfirmActionDialog;

mod user_form_dialog;
pub use user_form_dialog::{FormMode, UserFormDialog};

mod user_drawer;
pub use user_drawer::UserDetailDrawer;

// Re-export key sidebar component types for convenience
pub use components::sidebar::{
    use_sidebar, Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel,
    SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarMenuSub, SidebarMenuSubButton, SidebarProvider, SidebarTrigger,
};
