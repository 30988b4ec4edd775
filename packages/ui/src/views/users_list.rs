use api::{load_users, run_action};
use dioxus::prelude::*;
use store::{ActionKind, Debouncer, StatusFilter, UserList, UserRecord};

use crate::components::{use_notify, Button, ButtonVariant, Input, Select, SelectOption};
use crate::icons::{FaMagnifyingGlass, FaPlus, FaSpinner};
use crate::timer::sleep;
use crate::users_table::{RowAction, UsersTable};
use crate::{use_admin, ConfirmActionDialog, FormMode, Icon, UserDetailDrawer, UserFormDialog};

/// The users page: fetches the working set once, filters it locally and
/// hosts every dialog that changes it.
#[component]
pub fn UsersListView() -> Element {
    let admin = use_admin();
    let notify = use_notify();
    let users_config = admin.config.users.clone();
    let debounce = admin.config.search.debounce();

    let mut list = use_signal(|| {
        let mut list = UserList::default();
        list.start_loading();
        list
    });
    let mut reloads = use_signal(|| 0u32);

    let mut search = use_signal(String::new);
    let mut term = use_signal(String::new);
    let mut debouncer = use_signal(Debouncer::<String>::new);
    let mut status = use_signal(|| StatusFilter::All);

    let mut form_mode = use_signal(|| Option::<FormMode>::None);
    let mut pending = use_signal(|| Option::<(ActionKind, UserRecord)>::None);
    let mut viewing = use_signal(|| Option::<UserRecord>::None);

    let loader_backend = admin.backend.clone();
    let _loader = use_resource(move || {
        let backend = loader_backend.clone();
        let config = users_config.clone();
        let generation = reloads();
        async move {
            list.write().start_loading();
            tracing::info!(generation, "loading users");
            match load_users(&backend, &config).await {
                Ok(users) => list.write().replace(users),
                Err(message) => list.write().fail(message),
            }
        }
    });

    let on_search = move |evt: FormEvent| {
        let value = evt.value();
        search.set(value.clone());
        let ticket = debouncer.write().push(value);
        spawn(async move {
            sleep(debounce).await;
            if let Some(settled) = debouncer.write().settle(ticket) {
                term.set(settled);
            }
        });
    };

    let on_row_action = move |action: RowAction| match action {
        RowAction::View(user) => viewing.set(Some(user)),
        RowAction::Edit(user) => form_mode.set(Some(FormMode::Edit(user))),
        RowAction::Confirm(kind, user) => pending.set(Some((kind, user))),
    };

    let action_backend = admin.backend.clone();
    let on_confirm = move |(kind, id): (ActionKind, String)| {
        pending.set(None);
        let backend = action_backend.clone();
        spawn(async move {
            let outcome = run_action(&backend, kind, &id).await;
            notify.call(outcome.notice);
            if outcome.reload {
                reloads += 1;
            }
        });
    };

    let on_saved = move |saved: Option<UserRecord>| {
        let mode = form_mode();
        form_mode.set(None);
        match (mode, saved) {
            (Some(FormMode::Edit(_)), Some(user)) => {
                if !list.write().patch(user) {
                    reloads += 1;
                }
            }
            (Some(FormMode::Create), Some(user)) => list.write().append(user),
            _ => reloads += 1,
        }
    };

    let settling = debouncer.read().is_pending();
    let snapshot = list.read();
    let visible = snapshot.filtered(&term(), status());
    let status_options: Vec<SelectOption> = StatusFilter::ALL
        .into_iter()
        .map(|s| SelectOption::new(s.value(), s.label()))
        .collect();

    rsx! {
        div {
            div { class: "flex items-start justify-between mb-5",
                div {
                    h1 { class: "m-0 text-2xl font-semibold text-neutral-900", "Users" }
                    p { class: "mt-1 mb-0 text-sm text-neutral-500", "Manage accounts, roles and access." }
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| form_mode.set(Some(FormMode::Create)),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    span { "Create User" }
                }
            }

            div { class: "flex gap-3 mb-4",
                div { class: "relative flex-1 max-w-sm",
                    span { class: "absolute left-2.5 top-1/2 -translate-y-1/2 inline-flex text-neutral-400",
                        if settling {
                            span { class: "inline-flex animate-spin",
                                Icon { icon: FaSpinner, width: 12, height: 12 }
                            }
                        } else {
                            Icon { icon: FaMagnifyingGlass, width: 12, height: 12 }
                        }
                    }
                    Input {
                        id: "users-search",
                        class: "pl-8",
                        r#type: "search",
                        placeholder: "Search by name or code...",
                        value: search(),
                        oninput: on_search,
                    }
                }
                Select {
                    id: "users-status",
                    class: "w-40",
                    value: status().value(),
                    options: status_options,
                    onchange: move |value: String| status.set(StatusFilter::from_value(&value)),
                }
            }

            if let Some(ref message) = snapshot.error {
                div {
                    class: "p-4 rounded-lg border border-red-200 bg-red-50 text-red-800",
                    role: "alert",
                    p { class: "m-0 mb-1 font-semibold", "Could not load users" }
                    p { class: "m-0 text-sm", "{message}" }
                }
            } else {
                UsersTable {
                    users: visible,
                    loading: snapshot.loading,
                    page_size: admin.config.users.page_size,
                    on_action: on_row_action,
                }
            }
        }

        if let Some(mode) = form_mode() {
            UserFormDialog {
                mode: mode,
                on_saved: on_saved,
                on_close: move |_| form_mode.set(None),
            }
        }
        if let Some((kind, user)) = pending() {
            ConfirmActionDialog {
                kind: kind,
                user: user,
                on_confirm: on_confirm,
                on_close: move |_| pending.set(None),
            }
        }
        if let Some(user) = viewing() {
            UserDetailDrawer {
                user: user,
                on_close: move |_| viewing.set(None),
            }
        }
    }
}
