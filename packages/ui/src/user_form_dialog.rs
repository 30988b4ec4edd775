use api::{submit_create, submit_edit, SubmitOutcome};
use dioxus::prelude::*;
use store::{FieldErrors, FormField, Sex, UserForm, UserRecord, ROLE_OPTIONS};

use crate::components::{
    use_notify, Button, ButtonVariant, FieldError, Input, Label, Select, SelectOption,
};
use crate::use_admin;
use crate::views::ModalOverlay;

#[derive(Clone, Debug, PartialEq)]
pub enum FormMode {
    Create,
    Edit(UserRecord),
}

impl FormMode {
    fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create User",
            FormMode::Edit(_) => "Edit User",
        }
    }

    fn submit_label(&self, submitting: bool) -> &'static str {
        match (self, submitting) {
            (FormMode::Create, false) => "Create",
            (FormMode::Create, true) => "Creating...",
            (FormMode::Edit(_), false) => "Edit",
            (FormMode::Edit(_), true) => "Editing...",
        }
    }
}

/// Create or edit a user.
///
/// Fields are validated before anything is sent. On success the saved record
/// is handed to `on_saved` (`None` when the backend returned no record) and
/// the dialog expects to be closed by its parent. Rejections keep it open.
#[component]
pub fn UserFormDialog(
    mode: FormMode,
    on_saved: EventHandler<Option<UserRecord>>,
    on_close: EventHandler<()>,
) -> Element {
    let admin = use_admin();
    let notify = use_notify();
    let initial = match &mode {
        FormMode::Create => UserForm::default(),
        FormMode::Edit(user) => UserForm::from_record(user),
    };
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);

    let title = mode.title();
    let submit_label = mode.submit_label(submitting());

    let mut update = move |field: FormField, value: String| {
        form.write().set(field, value);
        errors.write().clear(field);
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let current = form();
        let backend = admin.backend.clone();
        let mode = mode.clone();
        submitting.set(true);
        spawn(async move {
            let outcome = match &mode {
                FormMode::Create => submit_create(&backend, &current).await,
                FormMode::Edit(user) => submit_edit(&backend, user, &current).await,
            };
            submitting.set(false);
            match outcome {
                SubmitOutcome::Invalid(found) => errors.set(found),
                SubmitOutcome::Rejected(notice) | SubmitOutcome::Failed(notice) => {
                    notify.call(notice)
                }
                SubmitOutcome::Saved { user, notice } => {
                    notify.call(notice);
                    form.set(UserForm::default());
                    errors.set(FieldErrors::default());
                    on_saved.call(user);
                }
            }
        });
    };

    let f = form();
    let errs = errors();
    let busy = submitting();
    let sex_options: Vec<SelectOption> = Sex::ALL
        .into_iter()
        .map(|s| SelectOption::new(s.label(), s.label()))
        .collect();
    let role_options: Vec<SelectOption> = ROLE_OPTIONS
        .into_iter()
        .map(|r| SelectOption::new(r.label, r.label))
        .collect();

    rsx! {
        ModalOverlay { on_close: on_close,
            form { class: "p-6", novalidate: true, onsubmit: onsubmit,
                h2 { class: "text-lg font-semibold mb-4", "{title}" }

                div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-first-name", "First Name" }
                        Input {
                            id: "user-first-name",
                            placeholder: "Juan",
                            value: f.first_name.clone(),
                            invalid: errs.get(FormField::FirstName).is_some(),
                            oninput: move |evt: FormEvent| update(FormField::FirstName, evt.value()),
                        }
                        FieldError { message: errs.get(FormField::FirstName) }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-middle-name", "Middle Name" }
                        Input {
                            id: "user-middle-name",
                            placeholder: "Optional",
                            value: f.middle_name.clone(),
                            oninput: move |evt: FormEvent| update(FormField::MiddleName, evt.value()),
                        }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-last-name", "Last Name" }
                        Input {
                            id: "user-last-name",
                            placeholder: "Dela Cruz",
                            value: f.last_name.clone(),
                            invalid: errs.get(FormField::LastName).is_some(),
                            oninput: move |evt: FormEvent| update(FormField::LastName, evt.value()),
                        }
                        FieldError { message: errs.get(FormField::LastName) }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-sex", "Sex" }
                        Select {
                            id: "user-sex",
                            placeholder: "Select sex",
                            value: f.sex.clone(),
                            options: sex_options,
                            invalid: errs.get(FormField::Sex).is_some(),
                            onchange: move |value: String| update(FormField::Sex, value),
                        }
                        FieldError { message: errs.get(FormField::Sex) }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-role", "Role" }
                        Select {
                            id: "user-role",
                            placeholder: "Select role",
                            value: f.role.clone(),
                            options: role_options,
                            invalid: errs.get(FormField::Role).is_some(),
                            onchange: move |value: String| update(FormField::Role, value),
                        }
                        FieldError { message: errs.get(FormField::Role) }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-dob", "Date of Birth" }
                        Input {
                            id: "user-dob",
                            r#type: "date",
                            value: f.date_of_birth.clone(),
                            invalid: errs.get(FormField::DateOfBirth).is_some(),
                            oninput: move |evt: FormEvent| update(FormField::DateOfBirth, evt.value()),
                        }
                        FieldError { message: errs.get(FormField::DateOfBirth) }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-email", "Email" }
                        Input {
                            id: "user-email",
                            r#type: "email",
                            placeholder: "juan@example.com",
                            value: f.email.clone(),
                            invalid: errs.get(FormField::Email).is_some(),
                            oninput: move |evt: FormEvent| update(FormField::Email, evt.value()),
                        }
                        FieldError { message: errs.get(FormField::Email) }
                    }
                    div { class: "flex flex-col gap-1.5",
                        Label { html_for: "user-phone", "Phone Number" }
                        Input {
                            id: "user-phone",
                            r#type: "tel",
                            placeholder: "09171234567",
                            value: f.phone_number.clone(),
                            invalid: errs.get(FormField::PhoneNumber).is_some(),
                            oninput: move |evt: FormEvent| update(FormField::PhoneNumber, evt.value()),
                        }
                        FieldError { message: errs.get(FormField::PhoneNumber) }
                    }
                }

                div { class: "flex justify-end gap-2 mt-6",
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: busy,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: busy,
                        "{submit_label}"
                    }
                }
            }
        }
    }
}
