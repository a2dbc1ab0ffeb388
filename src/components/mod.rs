//! UI Components

mod splash_screen;
mod home_screen;
mod place_card;
mod detail_screen;

pub use detail_screen::DetailScreen;
pub use home_screen::HomeScreen;
pub use place_card::PlaceCard;
pub use splash_screen::SplashScreen;
