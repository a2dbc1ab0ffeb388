//! Navigation Context
//!
//! Three-screen stack (Splash → Home → Detail) held in a single signal and
//! shared via the Leptos Context API.

use leptos::prelude::*;

use crate::models::Place;

/// Navigation parameters carried from the list to the detail screen.
///
/// String-typed like the route params they replace; the id drives the detail
/// fetch, the rest is a pre-fetch display fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailParams {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub address: String,
    pub latitude: String,
    pub longitude: String,
    pub image_url: String,
    pub phone: String,
}

impl DetailParams {
    pub fn from_place(place: &Place) -> Self {
        Self {
            id: place.id.clone(),
            name: place.name.clone(),
            description: place.description.clone().unwrap_or_default(),
            category: place.category.clone(),
            address: place.address.clone(),
            latitude: place.latitude.to_string(),
            longitude: place.longitude.to_string(),
            image_url: place.image_url.clone(),
            phone: place.phone.clone().unwrap_or_default(),
        }
    }

    /// Best-effort Place built back from the route snapshot, shown while the
    /// authoritative record is being fetched.
    pub fn as_snapshot(&self) -> Place {
        Place {
            id: self.id.clone(),
            name: self.name.clone(),
            description: (!self.description.is_empty()).then(|| self.description.clone()),
            category: self.category.clone(),
            address: self.address.clone(),
            latitude: self.latitude.parse().unwrap_or_default(),
            longitude: self.longitude.parse().unwrap_or_default(),
            image_url: self.image_url.clone(),
            phone: (!self.phone.is_empty()).then(|| self.phone.clone()),
        }
    }
}

/// Addressable screens
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Splash,
    Home,
    Detail(DetailParams),
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
}

impl NavContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Replace the current screen (no back entry)
    pub fn replace(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Navigate from the list to a place's detail screen
    pub fn push_detail(&self, params: DetailParams) {
        self.set_screen.set(Screen::Detail(params));
    }

    /// Return from the detail screen
    pub fn back(&self) {
        self.set_screen.set(Screen::Home);
    }
}
