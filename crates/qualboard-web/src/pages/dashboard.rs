use leptos::prelude::*;
use qualboard_core::{QualboardError, Qualification, QualificationRow};

use crate::api::{self, SessionUser};
use crate::components::notice::{Notice, NoticeBar};
use crate::components::sign_in::SignIn;

/// Session-gated dashboard. Shows the sign-in card until the auth provider
/// reports a session, then the qualifications table and the manual
/// adjustment form.
#[component]
pub fn DashboardPage() -> impl IntoView {
    // None = probing, Some(None) = signed out, Some(Some(_)) = signed in.
    let (session, set_session) = signal(None::<Option<SessionUser>>);
    let (session_refresh, set_session_refresh) = signal(0u32);

    Effect::new(move || {
        session_refresh.get();
        wasm_bindgen_futures::spawn_local(async move {
            let user = api::get_session().await;
            set_session.set(Some(user));
        });
    });

    view! {
        {move || match session.get() {
            None => view! { <p class="placeholder">"Loading..."</p> }.into_any(),
            Some(None) => view! { <SignIn set_session_refresh=set_session_refresh /> }.into_any(),
            Some(Some(user)) => view! {
                <Dashboard user=user set_session_refresh=set_session_refresh />
            }.into_any(),
        }}
    }
}

#[component]
fn Dashboard(user: SessionUser, set_session_refresh: WriteSignal<u32>) -> impl IntoView {
    let (refresh, set_refresh) = signal(0u32);
    let (quals, set_quals) = signal(Vec::<QualificationRow>::new());
    let (notice, set_notice) = signal(None::<Notice>);

    // Refetch the listing whenever the refresh counter bumps; only a
    // confirmed update success bumps it, there is no optimistic update.
    Effect::new(move || {
        refresh.get();
        wasm_bindgen_futures::spawn_local(async move {
            let token = match api::get_jwt().await {
                Ok(token) => token,
                // Not authenticated: skip silently, the gate handles it.
                Err(_) => return,
            };
            match api::fetch_qualifications(&token).await {
                Ok(rows) => set_quals.set(rows),
                Err(e) => set_notice.set(Some(Notice::error(e.to_string()))),
            }
        });
    });

    let sign_out = move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            let _ = api::sign_out().await;
            set_session_refresh.update(|n| *n += 1);
        });
    };

    let greeting = match user.name {
        Some(name) => format!("Welcome, {}!", name),
        None => format!("Welcome, {}!", user.email),
    };

    view! {
        <div class="page dashboard-page">
            <div class="dashboard-header">
                <h2>{greeting}</h2>
                <button class="sign-out-btn" on:click=sign_out>"sign out"</button>
            </div>
            <NoticeBar notice=notice set_notice=set_notice />
            <QualsInput set_refresh=set_refresh set_notice=set_notice />
            <QualsTable quals=quals />
        </div>
    }
}

/// Manual qualification adjustment form. Submitting with an empty team or a
/// missing token is a silent no-op.
#[component]
fn QualsInput(
    set_refresh: WriteSignal<u32>,
    set_notice: WriteSignal<Option<Notice>>,
) -> impl IntoView {
    let (team, set_team) = signal(String::new());
    let (status, set_status) = signal(Qualification::Regionals);
    let (submitting, set_submitting) = signal(false);

    let submit = move |selected: Qualification| {
        set_status.set(selected);
        let team = team.get();
        if team.is_empty() {
            return;
        }
        set_submitting.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = async {
                let token = api::get_jwt().await?;
                api::update_qualification(&token, &team, selected).await
            }
            .await;
            match outcome {
                Ok(()) => {
                    set_refresh.update(|n| *n += 1);
                    set_notice.set(Some(Notice::info("qualification updated")));
                }
                // Not authenticated: skip silently.
                Err(QualboardError::Unauthorized) => {}
                Err(e) => set_notice.set(Some(Notice::error(e.to_string()))),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="quals-input">
            <span class="quals-input-caption">"manual qualification adjustment"</span>
            <div class="form-group">
                <label>"Team"</label>
                <input
                    type="text"
                    placeholder="86868R"
                    prop:value=team
                    on:input=move |ev| set_team.set(event_target_value(&ev).to_uppercase())
                />
            </div>
            <div class="form-group">
                <label>"Qualification status"</label>
                <select
                    disabled=submitting
                    prop:value=move || status.get().label().to_string()
                    on:change=move |ev| submit(Qualification::from_label(&event_target_value(&ev)))
                >
                    {Qualification::all().iter().map(|q| {
                        view! { <option value=q.label()>{q.label()}</option> }
                    }).collect::<Vec<_>>()}
                </select>
            </div>
        </div>
    }
}

#[component]
fn QualsTable(quals: ReadSignal<Vec<QualificationRow>>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="quals-table">
                <thead>
                    <tr>
                        <th>"Team"</th>
                        <th>"Organization"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let rows = quals.get();
                        if rows.is_empty() {
                            view! {
                                <tr><td colspan="3" class="placeholder">"No qualifications yet"</td></tr>
                            }.into_any()
                        } else {
                            rows.into_iter().map(|row| {
                                view! {
                                    <tr>
                                        <td class="team-number">{row.number}</td>
                                        <td>{row.organization}</td>
                                        <td>{row.status.label()}</td>
                                    </tr>
                                }
                            }).collect::<Vec<_>>().into_any()
                        }
                    }}
                </tbody>
            </table>
        </div>
    }
}
