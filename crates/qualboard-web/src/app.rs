use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::header::Header;
use crate::pages::{dashboard::DashboardPage, leaderboard::LeaderboardPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app">
                <Header />
                <main class="content">
                    <Routes fallback=|| view! { <p>"Page not found"</p> }>
                        <Route path=path!("/") view=LeaderboardPage />
                        <Route path=path!("/dash") view=DashboardPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
