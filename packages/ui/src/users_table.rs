use dioxus::prelude::*;
use store::{
    status_tone, ActionKind, ColumnDef, SortDirection, TableState, UserRecord, PAGE_SIZE_OPTIONS,
    USER_COLUMNS,
};

use crate::components::{
    Badge, Button, ButtonVariant, DropdownMenu, DropdownMenuItem, DropdownMenuLabel,
    DropdownMenuSeparator,
};
use crate::icons::{
    FaArrowDown, FaArrowUp, FaBoxArchive, FaEllipsis, FaEye, FaPen, FaRotateLeft, FaSort,
    FaSpinner, FaTableColumns, FaTrash,
};
use crate::Icon;

/// A row action picked from the per-row menu.
#[derive(Clone, Debug, PartialEq)]
pub enum RowAction {
    View(UserRecord),
    Edit(UserRecord),
    Confirm(ActionKind, UserRecord),
}

/// Users table: sortable headers, column toggles, row selection and
/// pagination over an already filtered slice.
#[component]
pub fn UsersTable(
    users: Vec<UserRecord>,
    #[props(default)] loading: bool,
    page_size: usize,
    on_action: EventHandler<RowAction>,
) -> Element {
    let mut table = use_signal(move || TableState::with_page_size(page_size));

    let total = users.len();
    // Filtering may have shrunk the input under the current page.
    let mut state = table.read().clone();
    state.clamp_page(total);
    state.retain_selection(&users);

    let info = state.page_info(total);
    let rows: Vec<UserRecord> = state.page(&users).into_iter().cloned().collect();
    let columns: Vec<ColumnDef> = USER_COLUMNS
        .iter()
        .filter(|c| state.is_column_visible(c.id))
        .copied()
        .collect();
    let span = columns.len() + 1;
    let selected = state.selected_ids().count();

    rsx! {
        div {
            div { class: "flex justify-end mb-2",
                DropdownMenu {
                    label: "Columns",
                    trigger: rsx! {
                        Icon { icon: FaTableColumns, width: 12, height: 12 }
                        span { "Columns" }
                    },
                    DropdownMenuLabel { "Toggle columns" }
                    DropdownMenuSeparator {}
                    for (index, column) in USER_COLUMNS.into_iter().filter(|c| !c.header.is_empty()).enumerate() {
                        DropdownMenuItem {
                            key: "{column.id}",
                            index: index,
                            on_select: move |_| table.write().toggle_column(column.id),
                            input {
                                r#type: "checkbox",
                                checked: state.is_column_visible(column.id),
                                tabindex: "-1",
                            }
                            span { "{column.header}" }
                        }
                    }
                }
            }

            div { class: "overflow-x-auto rounded-lg border border-neutral-200",
                table { class: "w-full border-collapse text-sm",
                    thead {
                        tr { class: "border-b border-neutral-200",
                            th { class: "w-8 px-3 h-10" }
                            for column in columns.iter().copied() {
                                th {
                                    key: "{column.id}",
                                    class: "px-3 h-10 text-left font-medium text-neutral-500 whitespace-nowrap",
                                    if column.sortable {
                                        button {
                                            class: "inline-flex items-center gap-1.5 p-0 border-0 bg-transparent font-[inherit] text-inherit cursor-pointer",
                                            r#type: "button",
                                            onclick: move |_| table.write().toggle_sort(column.id),
                                            "{column.header}"
                                            SortGlyph { direction: state.sort_direction(column.id) }
                                        }
                                    } else {
                                        "{column.header}"
                                    }
                                }
                            }
                        }
                    }
                    tbody {
                        if loading {
                            tr {
                                td { class: "h-24 text-center text-neutral-500", colspan: "{span}",
                                    span { class: "inline-flex animate-spin",
                                        Icon { icon: FaSpinner, width: 14, height: 14 }
                                    }
                                    " Loading users..."
                                }
                            }
                        } else if rows.is_empty() {
                            tr {
                                td { class: "h-24 text-center text-neutral-500", colspan: "{span}", "No results found." }
                            }
                        } else {
                            for user in rows {
                                UserRow {
                                    key: "{user.id}",
                                    selected: state.is_selected(&user.id),
                                    columns: columns.clone(),
                                    on_toggle: move |id: String| table.write().toggle_row(&id),
                                    on_action: on_action,
                                    user: user.clone(),
                                }
                            }
                        }
                    }
                }
            }

            div { class: "flex items-center justify-between gap-4 pt-3 text-sm",
                span { class: "text-neutral-500",
                    "{selected} of {total} row(s) selected."
                }
                div { class: "flex items-center gap-3",
                    label { class: "flex items-center gap-2",
                        "Rows per page"
                        select {
                            class: "h-8 px-2 rounded border border-neutral-300 bg-white font-[inherit]",
                            value: "{state.page_size}",
                            onchange: move |evt| {
                                if let Ok(size) = evt.value().parse::<usize>() {
                                    table.write().set_page_size(size);
                                }
                            },
                            for size in PAGE_SIZE_OPTIONS {
                                option {
                                    key: "{size}",
                                    value: "{size}",
                                    selected: size == state.page_size,
                                    "{size}"
                                }
                            }
                        }
                    }
                    span {
                        "{info.first}-{info.last} of {info.total}"
                    }
                    span { "Page {info.page} of {info.page_count}" }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !state.can_previous(),
                        onclick: move |_| {
                            let mut t = table.write();
                            t.clamp_page(total);
                            t.previous_page();
                        },
                        "Previous"
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: !state.can_next(total),
                        onclick: move |_| {
                            let mut t = table.write();
                            t.clamp_page(total);
                            t.next_page(total);
                        },
                        "Next"
                    }
                }
            }
        }
    }
}

#[component]
fn SortGlyph(direction: Option<SortDirection>) -> Element {
    match direction {
        Some(SortDirection::Asc) => rsx! { Icon { icon: FaArrowUp, width: 10, height: 10 } },
        Some(SortDirection::Desc) => rsx! { Icon { icon: FaArrowDown, width: 10, height: 10 } },
        None => rsx! {
            span { class: "inline-flex opacity-40",
                Icon { icon: FaSort, width: 10, height: 10 }
            }
        },
    }
}

#[component]
fn UserRow(
    user: UserRecord,
    columns: Vec<ColumnDef>,
    selected: bool,
    on_toggle: EventHandler<String>,
    on_action: EventHandler<RowAction>,
) -> Element {
    let id = user.id.clone();
    rsx! {
        tr { class: if selected { "border-b border-neutral-200 bg-neutral-100" } else { "border-b border-neutral-200 hover:bg-neutral-50" },
            td { class: "w-8 px-3 py-2.5",
                input {
                    r#type: "checkbox",
                    "aria-label": "Select row",
                    checked: selected,
                    onchange: move |_| on_toggle.call(id.clone()),
                }
            }
            for column in columns {
                td { key: "{column.id}", class: "px-3 py-2.5 whitespace-nowrap",
                    UserCell { column: column.id, user: user.clone(), on_action: on_action }
                }
            }
        }
    }
}

#[component]
fn UserCell(column: &'static str, user: UserRecord, on_action: EventHandler<RowAction>) -> Element {
    match column {
        "FullName" => {
            let name = user.full_name();
            rsx! {
                button {
                    class: "p-0 border-0 bg-transparent font-[inherit] font-medium text-inherit cursor-pointer hover:underline",
                    r#type: "button",
                    onclick: move |_| on_action.call(RowAction::View(user.clone())),
                    "{name}"
                }
            }
        }
        "Status" => {
            let label = user.status.map(|s| s.label()).unwrap_or("Unknown");
            rsx! {
                Badge { variant: status_tone(user.status), "{label}" }
            }
        }
        "actions" => rsx! { RowActions { user: user, on_action: on_action } },
        _ => {
            let text = cell_text(&user, column);
            rsx! { "{text}" }
        }
    }
}

fn cell_text(user: &UserRecord, column: &str) -> String {
    let text = match column {
        "UserId" => user.user_id.map(|n| n.to_string()),
        "UserCode" => Some(user.code.clone()),
        "Sex" => user.sex.map(|s| s.label().to_string()),
        "Role" => Some(user.role.clone()),
        "Email" => user.email.clone(),
        "PhoneNumber" => user.phone_number.clone(),
        _ => None,
    };
    text.filter(|t| !t.is_empty()).unwrap_or_else(|| "-".to_string())
}

#[component]
fn RowActions(user: UserRecord, on_action: EventHandler<RowAction>) -> Element {
    let soft = ActionKind::soft_action_for(&user);
    let view = user.clone();
    let edit = user.clone();
    let archive = user.clone();
    let delete = user;

    rsx! {
        DropdownMenu {
            label: "Open menu",
            trigger: rsx! { Icon { icon: FaEllipsis, width: 14, height: 14 } },
            DropdownMenuLabel { "Actions" }
            DropdownMenuItem {
                index: 0usize,
                on_select: move |_| on_action.call(RowAction::View(view.clone())),
                Icon { icon: FaEye, width: 12, height: 12 }
                span { "View" }
            }
            DropdownMenuItem {
                index: 1usize,
                on_select: move |_| on_action.call(RowAction::Edit(edit.clone())),
                Icon { icon: FaPen, width: 12, height: 12 }
                span { "Edit" }
            }
            DropdownMenuItem {
                index: 2usize,
                on_select: move |_| on_action.call(RowAction::Confirm(soft, archive.clone())),
                if soft == ActionKind::Archive {
                    Icon { icon: FaBoxArchive, width: 12, height: 12 }
                } else {
                    Icon { icon: FaRotateLeft, width: 12, height: 12 }
                }
                span { "{soft.label()}" }
            }
            DropdownMenuSeparator {}
            DropdownMenuItem {
                index: 3usize,
                class: "destructive",
                on_select: move |_| on_action.call(RowAction::Confirm(ActionKind::Delete, delete.clone())),
                Icon { icon: FaTrash, width: 12, height: 12 }
                span { "Delete" }
            }
        }
    }
}
