use crate::{
    config::{PageConfig, RuntimeConfiguration},
    registrar::Registrar,
};
use maud::{DOCTYPE, Markup, html};
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Clone, Debug)]
pub struct EnrolState {
    page_config: Arc<PageConfig>,
    registrar: Arc<Mutex<Registrar>>,
}

impl EnrolState {
    pub fn new(config: &RuntimeConfiguration) -> Self {
        Self::from_page_config(config.page_config())
    }

    pub fn from_page_config(page_config: Arc<PageConfig>) -> Self {
        let registrar = Registrar::new(page_config.placeholder_photo.clone());

        Self {
            page_config,
            registrar: Arc::new(Mutex::new(registrar)),
        }
    }

    pub fn page_config(&self) -> &PageConfig {
        &self.page_config
    }

    /// Held for the whole of each operation, so submissions and removals never interleave.
    pub async fn registrar(&self) -> MutexGuard<'_, Registrar> {
        self.registrar.lock().await
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://unpkg.com/htmx.org@2.0.4" integrity="sha384-HGfztofotfshcF7+8n44JQL2oJmowVChPTg48S+jvZoztPfvwD79OC/LTtG6dMp+" crossorigin="anonymous" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Student Registration" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white py-8" {
                    (markup)
                }
            }
        }
    }
}
