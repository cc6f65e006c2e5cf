use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::{Footer, Header};
use crate::pages::create_event::CreateEventPage;
use crate::pages::explore::ExplorePage;
use crate::pages::home::HomePage;
use crate::pages::profile::ProfilePage;
use crate::pages::sign_in::SignInPage;
use crate::pages::sign_up::SignUpPage;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Header />
            <Routes fallback=|| view! { <main class="page"><p class="empty-state">"Page not found."</p></main> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/explore") view=ExplorePage />
                <Route path=path!("/sign-in") view=SignInPage />
                <Route path=path!("/sign-up") view=SignUpPage />
                <Route path=path!("/events/create") view=CreateEventPage />
                <Route path=path!("/profile") view=ProfilePage />
            </Routes>
            <Footer />
        </Router>
    }
}
