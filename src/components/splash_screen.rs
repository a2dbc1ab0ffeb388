//! Splash Screen
//!
//! Landing screen shown on launch; auto-navigates to the place list after a
//! fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{NavContext, Screen};

/// Delay before the list screen replaces the splash
const SPLASH_MILLIS: u32 = 3_000;

#[component]
pub fn SplashScreen() -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext should be provided");

    Effect::new(move |_| {
        spawn_local(async move {
            TimeoutFuture::new(SPLASH_MILLIS).await;
            nav.replace(Screen::Home);
        });
    });

    view! {
        <div class="splash-container">
            <h1 class="splash-title">"NAKHON SAWAN"</h1>
            <p class="splash-caption">"เมืองสี่แคว แห่มังกร"</p>
            <p class="splash-caption">"พักผ่อนบึงบอระเพ็ด ปลารสเด็ดปากน้ำโพ"</p>
        </div>
    }
}
