//! Place Card
//!
//! One row of the home screen list; clicking navigates to the detail screen
//! with the place's full attribute set as navigation parameters.

use leptos::prelude::*;

use crate::context::{DetailParams, NavContext};
use crate::models::Place;

#[component]
pub fn PlaceCard(place: Place) -> impl IntoView {
    let nav = use_context::<NavContext>().expect("NavContext should be provided");

    let params = DetailParams::from_place(&place);

    view! {
        <div class="place-card" on:click=move |_| nav.push_detail(params.clone())>
            <img class="card-image" src=place.image_url.clone() alt=place.name.clone() />
            <div class="card-content">
                <p class="card-category">{place.category.clone()}</p>
                <p class="card-name">{place.name.clone()}</p>
                <p class="card-address">{place.address.clone()}</p>
            </div>
            <span class="card-chevron">"›"</span>
        </div>
    }
}
