//! Styled building blocks shared by every view. Styles live in
//! `assets/dx-components-theme.css`.

pub mod alert_dialog;
pub mod badge;
pub mod button;
pub mod drawer;
pub mod dropdown_menu;
pub mod input;
pub mod label;
pub mod select;
pub mod sidebar;
pub mod toast;

pub use alert_dialog::{
    AlertDialog, AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogDescription,
    AlertDialogTitle,
};
pub use badge::Badge;
pub use button::{Button, ButtonVariant};
pub use drawer::Drawer;
pub use dropdown_menu::{DropdownMenu, DropdownMenuItem, DropdownMenuLabel, DropdownMenuSeparator};
pub use input::Input;
pub use label::{FieldError, Label};
pub use select::{Select, SelectOption};
pub use toast::{use_notify, ToastProvider};
