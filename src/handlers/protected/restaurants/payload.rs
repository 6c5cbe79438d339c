use serde::Deserialize;
use uuid::Uuid;

use crate::database::{NewRestaurant, RestaurantChanges};
use crate::error::ApiError;

/// Request body for create and update: `{ "restaurant": { ... } }`
#[derive(Debug, Default, Deserialize)]
pub struct RestaurantBody {
    #[serde(default)]
    pub restaurant: Option<RestaurantFields>,
}

/// Client-writable fields. There is no `owner` field: a client-supplied
/// owner is dropped during deserialization and never reaches the store.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFields {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "imgUrl")]
    pub image_url: Option<String>,
    pub link: Option<String>,
}

impl RestaurantBody {
    pub fn into_fields(self) -> Result<RestaurantFields, ApiError> {
        self.restaurant.ok_or_else(|| ApiError::required("restaurant"))
    }
}

impl RestaurantFields {
    /// Create input owned by `owner`. `name` and `location` must be present
    /// and non-empty; empty optional fields are stored as absent.
    pub fn into_new(self, owner: Uuid) -> Result<NewRestaurant, ApiError> {
        let name = non_empty(self.name).ok_or_else(|| ApiError::required("name"))?;
        let location = non_empty(self.location).ok_or_else(|| ApiError::required("location"))?;

        Ok(NewRestaurant {
            name,
            location,
            image_url: non_empty(self.image_url),
            link: non_empty(self.link),
            owner,
        })
    }

    /// Update input. An empty string means "leave this field alone", not
    /// "clear it", so optional fields cannot be cleared through an update.
    pub fn into_changes(self) -> RestaurantChanges {
        RestaurantChanges {
            name: non_empty(self.name),
            location: non_empty(self.location),
            image_url: non_empty(self.image_url),
            link: non_empty(self.link),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> RestaurantFields {
        serde_json::from_value::<RestaurantBody>(value).unwrap().into_fields().unwrap()
    }

    #[test]
    fn client_owner_is_discarded() {
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();

        let new = fields(json!({ "restaurant": { "name": "Taco Spot", "location": "5th Ave", "owner": intruder } }))
            .into_new(owner)
            .unwrap();

        assert_eq!(new.owner, owner);
    }

    #[test]
    fn create_requires_name() {
        let err = fields(json!({ "restaurant": { "location": "5th Ave" } }))
            .into_new(Uuid::new_v4())
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.message(), "name is required");
    }

    #[test]
    fn create_treats_empty_location_as_missing() {
        let err = fields(json!({ "restaurant": { "name": "Taco Spot", "location": "" } }))
            .into_new(Uuid::new_v4())
            .unwrap_err();
        assert_eq!(err.message(), "location is required");
    }

    #[test]
    fn missing_envelope_is_a_validation_error() {
        let err = serde_json::from_value::<RestaurantBody>(json!({ "name": "Taco Spot" }))
            .unwrap()
            .into_fields()
            .unwrap_err();
        assert_eq!(err.message(), "restaurant is required");
    }

    #[test]
    fn accepts_legacy_img_url_key() {
        let new = fields(json!({ "restaurant": { "name": "A", "location": "B", "imgUrl": "https://img" } }))
            .into_new(Uuid::new_v4())
            .unwrap();
        assert_eq!(new.image_url.as_deref(), Some("https://img"));
    }

    #[test]
    fn update_drops_empty_strings_and_owner() {
        let changes = fields(json!({
            "restaurant": { "name": "", "location": "6th Ave", "link": "", "owner": Uuid::new_v4() }
        }))
        .into_changes();

        assert_eq!(
            changes,
            RestaurantChanges {
                location: Some("6th Ave".to_string()),
                ..Default::default()
            }
        );
    }
}
