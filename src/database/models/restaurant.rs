use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored restaurant. `owner` is fixed at creation; timestamps are managed
/// by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: Uuid,
    pub name: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub owner: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for a create.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub location: String,
    pub image_url: Option<String>,
    pub link: Option<String>,
    pub owner: Uuid,
}

/// Field-by-field overwrite applied by an update. `None` leaves the stored
/// value untouched. Ownership cannot be changed through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantChanges {
    pub name: Option<String>,
    pub location: Option<String>,
    pub image_url: Option<String>,
    pub link: Option<String>,
}

impl RestaurantChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.location.is_none() && self.image_url.is_none() && self.link.is_none()
    }

    /// Shallow merge onto an existing record.
    pub fn apply_to(self, restaurant: &mut Restaurant) {
        if let Some(name) = self.name {
            restaurant.name = name;
        }
        if let Some(location) = self.location {
            restaurant.location = location;
        }
        if let Some(image_url) = self.image_url {
            restaurant.image_url = Some(image_url);
        }
        if let Some(link) = self.link {
            restaurant.link = Some(link);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Restaurant {
        let now = Utc::now();
        Restaurant {
            id: Uuid::new_v4(),
            name: "Taco Spot".to_string(),
            location: "5th Ave".to_string(),
            image_url: None,
            link: Some("https://tacos.example".to_string()),
            owner: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let restaurant = sample();
        let value = serde_json::to_value(&restaurant).unwrap();

        assert_eq!(value["name"], json!("Taco Spot"));
        assert_eq!(value["owner"], json!(restaurant.owner));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("imageUrl").is_none(), "absent optionals are omitted");
        assert_eq!(value["link"], json!("https://tacos.example"));
    }

    #[test]
    fn changes_overwrite_only_present_fields() {
        let mut restaurant = sample();
        let owner = restaurant.owner;

        RestaurantChanges {
            location: Some("6th Ave".to_string()),
            image_url: Some("https://img.example/taco.png".to_string()),
            ..Default::default()
        }
        .apply_to(&mut restaurant);

        assert_eq!(restaurant.name, "Taco Spot");
        assert_eq!(restaurant.location, "6th Ave");
        assert_eq!(restaurant.image_url.as_deref(), Some("https://img.example/taco.png"));
        assert_eq!(restaurant.link.as_deref(), Some("https://tacos.example"));
        assert_eq!(restaurant.owner, owner);
    }

    #[test]
    fn empty_changes() {
        assert!(RestaurantChanges::default().is_empty());
        assert!(!RestaurantChanges {
            link: Some("x".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
