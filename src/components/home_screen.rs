//! Home Screen
//!
//! Scrollable place list with a category filter bar. Fetches the full place
//! list once on mount; filtering is purely client-side and never re-fetches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::PlaceCard;
use crate::filter::{derive_categories, filter_by_category, ALL_CATEGORY};
use crate::models::Place;

#[component]
pub fn HomeScreen() -> impl IntoView {
    let (places, set_places) = signal(Vec::<Place>::new());
    let (selected_category, set_selected_category) = signal(ALL_CATEGORY.to_string());
    let (is_loading, set_is_loading) = signal(true);

    // Fetch all places on mount
    Effect::new(move |_| {
        spawn_local(async move {
            set_is_loading.set(true);
            match commands::list_places().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[HOME] Loaded {} places", loaded.len()).into(),
                    );
                    set_places.set(loaded);
                    set_is_loading.set(false);
                }
                Err(_) => {
                    // Degrade to an empty list; the alert is non-blocking
                    set_places.set(Vec::new());
                    set_is_loading.set(false);
                    let _ = commands::show_message(
                        "เกิดข้อผิดพลาด",
                        "ไม่สามารถดึงข้อมูลสถานที่ได้ กรุณาลองใหม่อีกครั้ง",
                    )
                    .await;
                }
            }
        });
    });

    // Derived from current state on every render, no independent storage
    let categories = Memo::new(move |_| derive_categories(&places.get()));
    let filtered_places =
        Memo::new(move |_| filter_by_category(&places.get(), &selected_category.get()));

    view! {
        <div class="home-container">
            <header class="home-header">
                <h1 class="home-title">"สถานที่ท่องเที่ยว"</h1>
                <p class="home-subtitle">"ค้นหาสถานที่ที่คุณอยากไป"</p>
            </header>

            <div class="category-bar">
                <For
                    each=move || categories.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let label = category.clone();
                        let is_active = {
                            let category = category.clone();
                            move || selected_category.get() == category
                        };
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "category-btn active" } else { "category-btn" }
                                }
                                on:click=move |_| set_selected_category.set(category.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>

            {move || {
                if is_loading.get() {
                    view! {
                        <div class="loading-container">
                            <div class="spinner"></div>
                            <p class="loading-text">"กำลังโหลดข้อมูล..."</p>
                        </div>
                    }
                        .into_any()
                } else if filtered_places.get().is_empty() {
                    view! {
                        <div class="empty-container">
                            <p class="empty-text">"ไม่พบสถานที่ในหมวดหมู่นี้"</p>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="place-list">
                            <For
                                each=move || filtered_places.get()
                                key=|place| place.id.clone()
                                children=move |place| view! { <PlaceCard place=place /> }
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
