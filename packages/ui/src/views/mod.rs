mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod admin_layout;
pub use admin_layout::AdminLayoutView;

mod users_list;
pub use users_list::UsersListView;

mod section_placeholder;
pub use section_placeholder::{NotFoundView, SectionPlaceholder};
