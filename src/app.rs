//! Sawan Guide Frontend App
//!
//! Root component: provides the navigation context and renders the screen
//! stack (splash, place list, place detail).

use leptos::prelude::*;

use crate::components::{DetailScreen, HomeScreen, SplashScreen};
use crate::context::{NavContext, Screen};

#[component]
pub fn App() -> impl IntoView {
    let (screen, set_screen) = signal(Screen::Splash);

    // Provide context to all children
    provide_context(NavContext::new((screen, set_screen)));

    view! {
        <div class="app-root">
            {move || match screen.get() {
                Screen::Splash => view! { <SplashScreen /> }.into_any(),
                Screen::Home => view! { <HomeScreen /> }.into_any(),
                Screen::Detail(params) => view! { <DetailScreen params=params /> }.into_any(),
            }}
        </div>
    }
}
