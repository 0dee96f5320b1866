use leptos::prelude::*;

use crate::api;
use crate::components::notice::{Notice, NoticeBar};

/// Email/password sign-in card. On success the parent's session refresh
/// counter is bumped so the gate re-queries the auth provider.
#[component]
pub fn SignIn(set_session_refresh: WriteSignal<u32>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let submit = move |_| {
        if loading.get() {
            return;
        }
        set_loading.set(true);
        set_notice.set(None);
        let email = email.get();
        let password = password.get();

        wasm_bindgen_futures::spawn_local(async move {
            match api::sign_in(&email, &password).await {
                Ok(()) => set_session_refresh.update(|n| *n += 1),
                Err(e) => set_notice.set(Some(Notice::error(e.to_string()))),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="sign-in-wrapper">
            <div class="sign-in-card">
                <h2>"Sign In"</h2>
                <p class="sign-in-hint">"enter your email to sign in (devs only)"</p>
                <NoticeBar notice=notice set_notice=set_notice />
                <div class="form-group">
                    <label>"Email"</label>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        placeholder="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button class="sign-in-btn" disabled=loading on:click=submit>
                    {move || if loading.get() {
                        view! { <span class="loading"><span class="spinner"></span>" Signing in..."</span> }.into_any()
                    } else {
                        view! { <span>"Login"</span> }.into_any()
                    }}
                </button>
            </div>
        </div>
    }
}
