use budgetbook_core::Currency;
use leptos::prelude::*;

use crate::components::month_picker::MonthPicker;
use crate::state::use_ledger;
use crate::theme::{toggle_icon, ThemeContext};

#[component]
pub fn Header() -> impl IntoView {
    let state = use_ledger();
    let ThemeContext { theme, set_theme } = expect_context::<ThemeContext>();
    let (picker_open, set_picker_open) = signal(false);

    let on_currency_change = move |ev: leptos::ev::Event| {
        if let Ok(currency) = event_target_value(&ev).parse::<Currency>() {
            state.currency.set(currency);
        }
    };

    view! {
        <header class="app-header">
            <div class="header-brand">
                <h1 class="app-title">"Budgetbook"</h1>
                <nav class="nav-list">
                    <a href="/" class="nav-link">"Ledger"</a>
                    <a href="/history" class="nav-link">"History"</a>
                    <a href="/assistant" class="nav-link">"Assistant"</a>
                </nav>
            </div>
            <div class="header-controls">
                <button
                    id="date-picker-toggle-btn"
                    class="btn btn-secondary"
                    on:click=move |_| set_picker_open.set(true)
                >
                    {move || state.period.get().label()}
                </button>
                <select class="input currency-selector" on:change=on_currency_change>
                    {Currency::ALL
                        .iter()
                        .map(|c| {
                            let code = c.code();
                            let c = *c;
                            view! {
                                <option value=code prop:selected=move || state.currency.get() == c>
                                    {code}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button
                    class="btn btn-icon theme-toggle"
                    aria-label="Toggle theme"
                    on:click=move |_| set_theme.update(|t| *t = t.toggle())
                >
                    {move || toggle_icon(theme.get())}
                </button>
            </div>
            <Show when=move || picker_open.get()>
                <MonthPicker on_close=Callback::new(move |_| set_picker_open.set(false)) />
            </Show>
        </header>
    }
}
