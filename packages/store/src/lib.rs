//! Client-side state and logic for the users console: the data model, the
//! search filter and debouncer, the form schema, the table model, navigation
//! metadata and configuration. Nothing here touches the network or the DOM.

pub mod config;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod models;
pub mod routes;
pub mod table;
pub mod users;

pub use config::{AdminConfig, ApiConfig, ConfigError, SearchConfig, SessionConfig, UsersConfig};
pub use debounce::{Debouncer, Ticket, SEARCH_DEBOUNCE};
pub use filter::{filter_users, SearchFilter, StatusFilter};
pub use form::{FieldErrors, FormField, UserForm};
pub use models::{
    ActionResponse, ApiResponse, RoleOption, Sex, UserPayload, UserRecord, UserStatus,
    ROLE_OPTIONS,
};
pub use routes::{breadcrumb, home_routes, Breadcrumb, NavIcon, RouteGroup, RouteItem, SubItem};
pub use table::{PageInfo, SortDirection, SortKey, TableRow, TableState, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use users::{status_tone, ActionKind, ColumnDef, UserList, USER_COLUMNS};
