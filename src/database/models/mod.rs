pub mod restaurant;

pub use restaurant::{NewRestaurant, Restaurant, RestaurantChanges};
