use crate::{
    config::RuntimeConfiguration,
    data::{StudentStore, postgres_store::PostgresStudentStore},
    error::RosterResult,
};
use maud::{DOCTYPE, Markup, html};
use sqlx::postgres::PgPoolOptions;
use std::{ops::Deref, sync::Arc};

#[derive(Clone, Debug)]
pub struct RosterState {
    store: Arc<dyn StudentStore>,
}

impl RosterState {
    pub async fn connect(options: PgPoolOptions, config: &RuntimeConfiguration) -> RosterResult<Self> {
        let store = PostgresStudentStore::connect(options, &config.db_config()).await?;
        Ok(Self::new(Arc::new(store)))
    }

    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    #[allow(clippy::unused_self)] //in case self is ever needed :)
    pub fn render(&self, page_title: &str, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { (page_title) " - Roster" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    nav class="w-full bg-gray-800 p-4 mb-8 flex flex-row space-x-4" {
                        a href="/" class="font-bold hover:text-gray-300" {"Students"}
                        a href="/create" class="hover:text-gray-300" {"Add Student"}
                    }
                    (markup)
                }
            }
        }
    }

    pub async fn sensible_shutdown(&self) {
        self.store.close().await;
    }
}

impl Deref for RosterState {
    type Target = dyn StudentStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}
