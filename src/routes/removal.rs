use crate::{
    data::{IdForm, student::StudentRecord},
    error::{EnrolResult, ParseUuidSnafu},
    routes::students::{live_region, roster_section},
    state::EnrolState,
};
use axum::{Form, extract::State};
use maud::{Markup, html};
use snafu::ResultExt;
use uuid::Uuid;

/// The confirmation dialog, or an empty slot when nothing is pending.
pub fn removal_dialog(pending: Option<&StudentRecord>, out_of_band: bool) -> Markup {
    html! {
        div id="dialog" hx-swap-oob=[out_of_band.then_some("true")] {
            @if let Some(student) = pending {
                //clicking the backdrop or pressing escape dismisses it
                div class="fixed inset-0 bg-black/60 flex items-center justify-center" hx-post="/internal/removal/cancel" hx-trigger="click[target==this], keyup[key=='Escape'] from:body" hx-target="#dialog" hx-swap="outerHTML" {
                    div role="dialog" aria-modal="true" aria-labelledby="dialog-title" class="bg-gray-800 p-6 rounded shadow-md max-w-sm w-full" {
                        h2 id="dialog-title" class="text-xl font-semibold mb-4" {"Remove " (student) "?"}
                        p class="text-gray-300 mb-6" {"They will disappear from the cards and the summary table."}
                        div class="flex flex-row justify-end space-x-4" {
                            button type="button" class="bg-gray-600 hover:bg-gray-500 font-bold py-2 px-4 rounded" hx-post="/internal/removal/cancel" hx-target="#dialog" hx-swap="outerHTML" autofocus {
                                "Cancel"
                            }
                            button type="button" class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" hx-post="/internal/removal/confirm" hx-target="#roster" hx-swap="outerHTML" {
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}

pub async fn internal_post_removal_request(
    State(state): State<EnrolState>,
    Form(IdForm { id }): Form<IdForm>,
) -> EnrolResult<Markup> {
    let id = Uuid::try_parse(&id).context(ParseUuidSnafu { original: id })?;

    let mut registrar = state.registrar().await;
    let dialog = removal_dialog(registrar.request_removal(id), false);

    Ok(html! {
        (dialog)
        (live_region(registrar.status(), true))
    })
}

pub async fn internal_post_removal_confirm(State(state): State<EnrolState>) -> Markup {
    let mut registrar = state.registrar().await;
    registrar.confirm_removal();

    html! {
        (roster_section(registrar.roster(), false))
        (live_region(registrar.status(), true))
        (removal_dialog(None, true))
    }
}

pub async fn internal_post_removal_cancel(State(state): State<EnrolState>) -> Markup {
    state.registrar().await.cancel_removal();

    removal_dialog(None, false)
}
