use crate::{
    config::PageConfig,
    data::{
        roster::Roster,
        student::{RegistrationForm, StudentCard, YearOfStudy, remove_button},
    },
    maud_conveniences::{
        form_element, form_submit_button, simple_form_element, subtitle, table, title,
    },
    registrar::{Status, Submission},
    state::EnrolState,
    validation::{Field, FieldErrors},
};
use axum::{Form, extract::State};
use maud::{Markup, html};

pub fn registration_form(
    config: &PageConfig,
    form: &RegistrationForm,
    errors: &FieldErrors,
) -> Markup {
    let input_class = "shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600";
    let chosen_year = form.year.as_deref();

    html! {
        section id="registration-form" class="bg-gray-800 p-8 rounded shadow-md w-full" {
            (title("Register a Student"))

            form id="regForm" hx-post="/internal/students" hx-trigger="submit" hx-target="#registration-form" hx-swap="outerHTML" novalidate {
                div class="grid grid-cols-1 md:grid-cols-2 gap-x-4" {
                    (simple_form_element(Field::FirstName.name(), "First Name", true, None, &form.first_name, &errors.message(Field::FirstName)))
                    (simple_form_element(Field::LastName.name(), "Last Name", true, None, &form.last_name, &errors.message(Field::LastName)))
                }
                (simple_form_element(Field::Email.name(), "Email", true, Some("email"), &form.email, &errors.message(Field::Email)))

                (form_element(Field::Programme.name(), "Programme", &errors.message(Field::Programme), html! {
                    select id=(Field::Programme.name()) name=(Field::Programme.name()) required class=(input_class) {
                        option value="" {"Select a programme"}
                        @for programme in &config.programmes {
                            option value=(programme) selected[form.programme == *programme] {(programme)}
                        }
                    }
                }))

                fieldset class="mb-4" {
                    legend class="block text-sm font-bold mb-2 text-gray-300" {"Year of Study"}
                    div class="flex flex-row space-x-4" {
                        @for year in YearOfStudy::ALL {
                            label class="text-gray-300 cursor-pointer" {
                                input type="radio" name=(Field::Year.name()) value=(year.value()) checked[chosen_year == Some(year.value())] class="mr-2";
                                (year.ordinal())
                            }
                        }
                    }
                    p id="err-year" class="error text-red-400 text-sm mt-1" {(errors.message(Field::Year))}
                }

                (simple_form_element(Field::Interests.name(), "Interests (comma separated, optional)", false, None, &form.interests, &errors.message(Field::Interests)))
                (simple_form_element(Field::Photo.name(), "Photo URL (optional)", false, Some("url"), &form.photo, &errors.message(Field::Photo)))

                (form_submit_button(Some("Register")))
            }
        }
    }
}

/// The one element whose text changes get announced.
pub fn live_region(status: Option<Status>, out_of_band: bool) -> Markup {
    html! {
        div id="live" role="status" aria-live="polite" hx-swap-oob=[out_of_band.then_some("true")] class="text-center text-gray-200 min-h-6" {
            @if let Some(status) = status {
                (status.to_string())
            }
        }
    }
}

/// Cards and summary table, both newest first.
pub fn roster_section(roster: &Roster, out_of_band: bool) -> Markup {
    let rows: Vec<_> = roster
        .list()
        .iter()
        .rev()
        .map(|student| {
            [
                html! {(student)},
                html! {(student.programme)},
                html! {(student.year.to_string())},
                html! {(student.interests_or("None"))},
                remove_button(student.id),
            ]
        })
        .collect();

    html! {
        section id="roster" hx-swap-oob=[out_of_band.then_some("true")] class="bg-gray-800 p-8 rounded shadow-md w-full flex flex-col space-y-8" {
            (title("Registered Students"))
            @if roster.is_empty() {
                p class="italic text-gray-400" {"No students registered yet."}
            } @else {
                div id="cards" class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    @for student in roster.list().iter().rev() {
                        (StudentCard(student))
                    }
                }
                (table(
                    subtitle("Summary"),
                    ["Name", "Programme", "Year", "Interests", ""],
                    rows,
                ))
            }
        }
    }
}

pub async fn internal_post_student(
    State(state): State<EnrolState>,
    Form(form): Form<RegistrationForm>,
) -> Markup {
    let mut registrar = state.registrar().await;

    //a successful submission gets a blank form back, like a reset
    let form = match registrar.submit(form) {
        Submission::Accepted(_) => registration_form(
            state.page_config(),
            &RegistrationForm::default(),
            &FieldErrors::new(),
        ),
        Submission::Rejected { form, errors } => {
            registration_form(state.page_config(), &form, &errors)
        }
    };

    html! {
        (form)
        (live_region(registrar.status(), true))
        (roster_section(registrar.roster(), true))
    }
}
