use crate::{
    data::student::RegistrationForm,
    routes::{
        removal::removal_dialog,
        students::{live_region, registration_form, roster_section},
    },
    state::EnrolState,
    validation::FieldErrors,
};
use axum::extract::State;
use maud::{Markup, html};

pub async fn get_index_route(State(state): State<EnrolState>) -> Markup {
    let registrar = state.registrar().await;

    state.render(html! {
        main class="w-full max-w-5xl flex flex-col space-y-8 px-4" {
            (registration_form(state.page_config(), &RegistrationForm::default(), &FieldErrors::new()))
            (live_region(registrar.status(), false))
            (roster_section(registrar.roster(), false))
            (removal_dialog(registrar.pending_removal(), false))
        }
    })
}
