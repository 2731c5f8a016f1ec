//! Modal month/year picker.
//!
//! Opens on the selected year. The arrows only change the year on display;
//! picking a cell changes the selected month, which triggers the refetch.

use budgetbook_core::picker::{marker_set, MonthGrid};
use budgetbook_core::Period;
use leptos::prelude::*;

use crate::state::use_ledger;

#[component]
pub fn MonthPicker(
    /// Invoked when the picker should disappear.
    on_close: Callback<()>,
) -> impl IntoView {
    let state = use_ledger();
    let (displayed_year, set_displayed_year) = signal(state.period.get_untracked().year);

    let grid = Memo::new(move |_| {
        let markers = state.markers.with(|m| marker_set(m));
        MonthGrid::build(
            displayed_year.get(),
            Period::current(),
            state.period.get(),
            &markers,
            state.min_year,
        )
    });

    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    let select = move |period: Period| {
        state.period.set(period);
        on_close.run(());
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())></div>
        <div class="date-picker-modal" role="dialog">
            <div class="picker-header">
                <button
                    class="btn btn-icon"
                    aria-label="Previous year"
                    disabled=move || !grid.get().can_go_back
                    on:click=move |_| set_displayed_year.update(|y| *y -= 1)
                >
                    "\u{2039}"
                </button>
                <span class="displayed-year">{move || displayed_year.get()}</span>
                <button
                    class="btn btn-icon"
                    aria-label="Next year"
                    disabled=move || !grid.get().can_go_forward
                    on:click=move |_| set_displayed_year.update(|y| *y += 1)
                >
                    "\u{203A}"
                </button>
            </div>
            <div class="month-grid">
                {move || {
                    grid.get()
                        .cells
                        .into_iter()
                        .map(|cell| {
                            let period = cell.period;
                            let class = format!(
                                "month-cell{}{}",
                                if cell.has_data { " has-data" } else { "" },
                                if cell.is_selected { " is-selected" } else { "" },
                            );
                            view! {
                                <div
                                    class=class
                                    on:click=move |_| select(period)
                                >
                                    {cell.label}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
