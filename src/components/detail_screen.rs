//! Detail Screen
//!
//! Full attributes of one place, fetched by id on mount, with two outbound
//! actions: open an external map application and dial the place's phone
//! number. Both actions use the freshly fetched record, not the navigation
//! parameters.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::context::{DetailParams, NavContext};
use crate::models::Place;

#[derive(Clone, Debug, PartialEq)]
enum DetailState {
    /// Navigation parameters carried no id
    InvalidRoute,
    Loading,
    Ready(Place),
}

#[component]
pub fn DetailScreen(params: DetailParams) -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext should be provided");

    let initial = if params.id.is_empty() {
        DetailState::InvalidRoute
    } else {
        DetailState::Loading
    };
    let (state, set_state) = signal(initial);

    // Fetch by id on mount; failure alerts and navigates back
    let id = params.id.clone();
    Effect::new(move |_| {
        if id.is_empty() {
            return;
        }
        let id = id.clone();
        spawn_local(async move {
            match commands::get_place(&id).await {
                Ok(place) => set_state.set(DetailState::Ready(place)),
                Err(_) => {
                    let _ = commands::show_message(
                        "เกิดข้อผิดพลาด",
                        "ไม่สามารถโหลดข้อมูลสถานที่นี้ได้",
                    )
                    .await;
                    nav.back();
                }
            }
        });
    });

    let open_map = move |place: &Place| {
        let latitude = place.latitude;
        let longitude = place.longitude;
        spawn_local(async move {
            if commands::open_map(latitude, longitude).await.is_err() {
                let _ = commands::show_message("ขออภัย", "ไม่สามารถเปิดแอปแผนที่ได้").await;
            }
        });
    };

    let call_phone = move |place: &Place| {
        match place.phone_number() {
            Some(number) => {
                let number = number.to_string();
                spawn_local(async move {
                    let _ = commands::dial_phone(&number).await;
                });
            }
            None => {
                spawn_local(async move {
                    let _ = commands::show_message("ขออภัย", "ไม่มีข้อมูลเบอร์โทรศัพท์").await;
                });
            }
        }
    };

    // Route snapshot doubles as the pre-fetch display fallback
    let snapshot = params.as_snapshot();

    view! {
        <div class="detail-container">
            {move || match state.get() {
                DetailState::InvalidRoute => {
                    view! {
                        <div class="detail-error">
                            <p class="error-text">"ไม่พบรหัสสถานที่"</p>
                            <button class="back-btn" on:click=move |_| nav.back()>
                                "กลับ"
                            </button>
                        </div>
                    }
                        .into_any()
                }
                DetailState::Loading => {
                    let snapshot = snapshot.clone();
                    view! {
                        <div class="loading-container">
                            <div class="spinner"></div>
                            <p class="loading-text">"กำลังโหลดข้อมูล..."</p>
                            <p class="loading-text">{snapshot.name.clone()}</p>
                            <p class="loading-text">{snapshot.category.clone()}</p>
                        </div>
                    }
                        .into_any()
                }
                DetailState::Ready(place) => {
                    let map_place = place.clone();
                    let call_place = place.clone();
                    let phone_label = place
                        .phone_number()
                        .map(str::to_string)
                        .unwrap_or_else(|| "ไม่มีข้อมูลเบอร์โทรศัพท์".to_string());
                    let description = place
                        .description_text()
                        .map(str::to_string)
                        .unwrap_or_else(|| "ไม่มีรายละเอียดสำหรับสถานที่นี้".to_string());
                    view! {
                        <div class="detail-content">
                            <div class="detail-image-wrap">
                                <img
                                    class="detail-image"
                                    src=place.image_url.clone()
                                    alt=place.name.clone()
                                />
                                <button class="back-btn" on:click=move |_| nav.back()>
                                    "‹"
                                </button>
                            </div>
                            <span class="category-badge">{place.category.clone()}</span>
                            <h1 class="detail-title">{place.name.clone()}</h1>
                            <p class="detail-address">{place.address.clone()}</p>
                            <p class="detail-phone" on:click=move |_| call_phone(&call_place)>
                                {phone_label}
                            </p>
                            <h2 class="section-title">"รายละเอียด"</h2>
                            <p class="detail-description">{description}</p>
                            <div class="bottom-bar">
                                <button class="map-btn" on:click=move |_| open_map(&map_place)>
                                    "ดูเส้นทางบนแผนที่"
                                </button>
                            </div>
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
