use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <A href="/" attr:class="wordmark">"amiqualled?"</A>
            <A href="/dash" attr:class="dash-link">"open dashboard"</A>
        </header>
    }
}
