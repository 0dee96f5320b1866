use leptos::prelude::*;
use qualboard_core::{
    ColumnKey, FetchGuard, Grade, LeaderboardEntry, Qualification, SortDirection, ViewAction,
    ViewState,
};

use crate::api;
use crate::components::notice::{Notice, NoticeBar};

/// Public leaderboard: filters, column visibility, tri-state column sort.
/// All view-state transitions go through the pure reducer in
/// `qualboard-core`; this component only wires events and the fetch effect.
#[component]
pub fn LeaderboardPage() -> impl IntoView {
    let (state, set_state) = signal(ViewState::default());
    let (rows, set_rows) = signal(Vec::<LeaderboardEntry>::new());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);
    let guard = StoredValue::new(FetchGuard::new());

    // Exactly one sequence-tagged fetch per filter change; a response is
    // applied only while its ticket is still the latest issued.
    let do_fetch = move || {
        let query = state.get_untracked().query();
        let mut ticket = None;
        guard.update_value(|g| ticket = Some(g.begin()));
        let Some(ticket) = ticket else { return };
        set_loading.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_leaderboard(&query).await;
            if !guard.with_value(|g| g.is_current(ticket)) {
                // Superseded while in flight; a newer fetch owns the view.
                return;
            }
            match result {
                Ok(fetched) => set_rows.set(fetched),
                Err(e) => set_notice.set(Some(Notice::error(e.to_string()))),
            }
            set_loading.set(false);
        });
    };

    let dispatch = move |action: ViewAction| {
        let refetch = action.triggers_fetch();
        set_state.update(|s| *s = s.apply(&action));
        if refetch {
            do_fetch();
        }
    };

    // Initial load.
    Effect::new(move || {
        do_fetch();
    });

    view! {
        <div class="page leaderboard-page">
            <NoticeBar notice=notice set_notice=set_notice />

            <div class="filter-bar">
                <div class="form-group">
                    <label>"Grade"</label>
                    <select
                        prop:value=move || state.get().grade.label().to_string()
                        on:change=move |ev| {
                            dispatch(ViewAction::SetGrade(Grade::from_label(&event_target_value(&ev))));
                        }
                    >
                        {Grade::all().iter().map(|g| {
                            view! { <option value=g.label()>{g.label()}</option> }
                        }).collect::<Vec<_>>()}
                    </select>
                </div>

                <div class="form-group">
                    <label>"Region"</label>
                    <input
                        type="text"
                        placeholder="e.g. Colorado"
                        prop:value=move || state.get().region
                        on:input=move |ev| {
                            dispatch(ViewAction::SetRegion(event_target_value(&ev)));
                        }
                    />
                </div>

                <div class="form-group">
                    <label>"Exclude Statuses"</label>
                    <div class="checkbox-row">
                        {Qualification::all().iter().map(|q| {
                            let q = *q;
                            view! {
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || state.get().excluded.contains(&q)
                                        on:change=move |_| dispatch(ViewAction::ToggleExcluded(q))
                                    />
                                    {q.label()}
                                </label>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>

                <div class="form-group">
                    <label>"Columns"</label>
                    <div class="checkbox-row">
                        {ColumnKey::all().iter().map(|col| {
                            let col = *col;
                            view! {
                                <label class="checkbox-label">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || !state.get().hidden.contains(&col)
                                        on:change=move |_| dispatch(ViewAction::ToggleColumn(col))
                                    />
                                    {col.label()}
                                </label>
                            }
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>

            <div class="table-wrapper">
                <table class="leaderboard-table">
                    <thead>
                        <tr>
                            {move || {
                                let s = state.get();
                                s.visible_columns().into_iter().map(|col| {
                                    let indicator = if s.sort_key == col {
                                        match s.sort_direction {
                                            SortDirection::Ascending => " \u{25b2}",
                                            SortDirection::Descending => " \u{25bc}",
                                            SortDirection::Unsorted => "",
                                        }
                                    } else {
                                        ""
                                    };
                                    view! {
                                        <th
                                            class="sortable"
                                            on:click=move |_| dispatch(ViewAction::SortBy(col))
                                        >
                                            {col.label()}{indicator}
                                        </th>
                                    }
                                }).collect::<Vec<_>>()
                            }}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let s = state.get();
                            let cols = s.visible_columns();
                            let span = cols.len().to_string();
                            if loading.get() {
                                view! {
                                    <tr><td colspan=span class="placeholder">"Loading..."</td></tr>
                                }.into_any()
                            } else {
                                let projected = s.project(&rows.get());
                                if projected.is_empty() {
                                    view! {
                                        <tr><td colspan=span class="placeholder">"No teams found"</td></tr>
                                    }.into_any()
                                } else {
                                    projected.into_iter().map(|row| {
                                        view! {
                                            <tr>
                                                {cols.iter().map(|col| {
                                                    view! { <td>{col.display(&row)}</td> }
                                                }).collect::<Vec<_>>()}
                                            </tr>
                                        }
                                    }).collect::<Vec<_>>().into_any()
                                }
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <div class="table-footer">
                {move || format!("Showing {} teams", rows.get().len())}
            </div>
        </div>
    }
}
