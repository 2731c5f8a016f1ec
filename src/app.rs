use budgetbook_core::config::{ClientConfig, Preferences};
use budgetbook_core::ApiClient;
use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;
use wasm_bindgen_futures::spawn_local;

use crate::browser::{self, LocalStorage};
use crate::commands;
use crate::components::header::Header;
use crate::pages::assistant::AssistantPage;
use crate::pages::history::HistoryPage;
use crate::pages::ledger::LedgerPage;
use crate::state::LedgerState;
use crate::theme::{apply_theme, ThemeContext};

#[component]
pub fn App() -> impl IntoView {
    let prefs = Preferences::load(&LocalStorage);
    let config = match ClientConfig::resolve(&browser::origin(), &LocalStorage) {
        Ok(config) => config,
        Err(e) => {
            browser::log_error("Invalid API configuration", &e);
            return view! {
                <div class="fatal-error">
                    <h2>"Budgetbook can't start"</h2>
                    <p>{e.to_string()}</p>
                </div>
            }
            .into_any();
        }
    };

    let api = ApiClient::new(config.api_base);
    let state = LedgerState::new(prefs.currency, config.min_year);
    let (theme, set_theme) = signal(prefs.theme);
    provide_context(api.clone());
    provide_context(state);
    provide_context(ThemeContext { theme, set_theme });

    // Apply and persist preferences whenever they change
    Effect::new(move |_| {
        let prefs = Preferences {
            theme: theme.get(),
            currency: state.currency.get(),
        };
        apply_theme(prefs.theme);
        prefs.save(&LocalStorage);
    });

    // Load the month whenever the selection changes; the summary only once
    Effect::new(move |prev: Option<()>| {
        state.period.track();
        let api = api.clone();
        spawn_local(async move {
            if prev.is_none() {
                commands::reload_summary(&api, state).await;
            }
            commands::reload_costs(&api, state).await;
            commands::reload_budget(&api, state).await;
        });
    });

    view! {
        <Router>
            <div class="app-layout">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LedgerPage />
                        <Route path=path!("/history") view=HistoryPage />
                        <Route path=path!("/assistant") view=AssistantPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
    .into_any()
}
