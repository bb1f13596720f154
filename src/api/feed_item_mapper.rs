use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};
use url::Url;
use uuid::Uuid;

use crate::domain::{FeedItem, LoadFeedResult};
use crate::errors::RemoteFeedLoaderError;

#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(deserialize_with = "deserialize_hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

/// Only the 36-character hyphenated form is a valid id. The simple, braced
/// and URN forms that `Uuid` would otherwise accept are rejected.
fn deserialize_hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    if raw.len() != 36 {
        return Err(D::Error::custom(format!("invalid UUID '{}'", raw)));
    }

    Uuid::try_parse(&raw).map_err(D::Error::custom)
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.id, item.image)
            .with_description(item.description)
            .with_location(item.location)
    }
}

/// Turns a raw feed response into domain items.
pub struct FeedItemMapper;

impl FeedItemMapper {
    /// Anything but 200 is rejected without looking at the body. Decoding is
    /// all-or-nothing: one bad item rejects the whole payload.
    pub fn map(data: &[u8], status: StatusCode) -> LoadFeedResult {
        if status != StatusCode::OK {
            return Err(RemoteFeedLoaderError::InvalidData);
        }

        let root: Root =
            serde_json::from_slice(data).map_err(|_| RemoteFeedLoaderError::InvalidData)?;

        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    fn item_json(item: &FeedItem) -> Value {
        let mut value = json!({
            "id": item.id.to_string(),
            "image": item.image_url.as_str(),
        });
        if let Some(description) = &item.description {
            value["description"] = json!(description);
        }
        if let Some(location) = &item.location {
            value["location"] = json!(location);
        }
        value
    }

    fn items_json(items: &[FeedItem]) -> Vec<u8> {
        let items: Vec<Value> = items.iter().map(item_json).collect();
        serde_json::to_vec(&json!({ "items": items })).unwrap()
    }

    fn status(code: u16) -> StatusCode {
        StatusCode::from_u16(code).unwrap()
    }

    #[test]
    fn test_non_200_is_invalid_data_even_with_valid_body() {
        let body = items_json(&[]);

        for code in [199, 201, 300, 400, 500] {
            assert_eq!(
                FeedItemMapper::map(&body, status(code)),
                Err(RemoteFeedLoaderError::InvalidData),
                "status {} should be rejected",
                code
            );
        }
    }

    #[test]
    fn test_non_json_body_is_invalid_data() {
        assert_eq!(
            FeedItemMapper::map(b"Invalid JSON", StatusCode::OK),
            Err(RemoteFeedLoaderError::InvalidData)
        );
    }

    #[test]
    fn test_empty_items_is_success() {
        assert_eq!(
            FeedItemMapper::map(&items_json(&[]), StatusCode::OK),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_missing_items_key_is_invalid_data() {
        assert_eq!(
            FeedItemMapper::map(br#"{"feed": []}"#, StatusCode::OK),
            Err(RemoteFeedLoaderError::InvalidData)
        );
    }

    #[test]
    fn test_invalid_uuid_rejects_whole_payload() {
        let body = json!({
            "items": [
                { "id": Uuid::from_u128(1).to_string(), "image": "http://a-url.com" },
                { "id": "not-a-uuid", "image": "http://a-url.com" },
            ]
        });

        assert_eq!(
            FeedItemMapper::map(&serde_json::to_vec(&body).unwrap(), StatusCode::OK),
            Err(RemoteFeedLoaderError::InvalidData)
        );
    }

    #[test]
    fn test_non_hyphenated_uuid_forms_are_invalid_data() {
        let id = Uuid::from_u128(0x6e2a1f4c_8f0e_4b8a_9d7c_2d1f0e3b4a5c);
        let forms = [
            id.simple().to_string(),
            id.braced().to_string(),
            id.urn().to_string(),
        ];

        for form in forms {
            let body = json!({ "items": [{ "id": &form, "image": "http://a-url.com" }] });
            assert_eq!(
                FeedItemMapper::map(&serde_json::to_vec(&body).unwrap(), StatusCode::OK),
                Err(RemoteFeedLoaderError::InvalidData),
                "id '{}' should be rejected",
                form
            );
        }
    }

    #[test]
    fn test_hyphenated_uuid_is_accepted() {
        let id = Uuid::from_u128(0x6e2a1f4c_8f0e_4b8a_9d7c_2d1f0e3b4a5c);
        let body = json!({
            "items": [{ "id": id.hyphenated().to_string(), "image": "http://a-url.com" }]
        });

        let data = serde_json::to_vec(&body).unwrap();
        let items = FeedItemMapper::map(&data, StatusCode::OK).unwrap();
        assert_eq!(items[0].id, id);
    }

    #[test]
    fn test_invalid_image_url_is_invalid_data() {
        let body = json!({
            "items": [{ "id": Uuid::from_u128(1).to_string(), "image": "not a url" }]
        });

        assert_eq!(
            FeedItemMapper::map(&serde_json::to_vec(&body).unwrap(), StatusCode::OK),
            Err(RemoteFeedLoaderError::InvalidData)
        );
    }

    #[test]
    fn test_missing_image_is_invalid_data() {
        let body = json!({ "items": [{ "id": Uuid::from_u128(1).to_string() }] });

        assert_eq!(
            FeedItemMapper::map(&serde_json::to_vec(&body).unwrap(), StatusCode::OK),
            Err(RemoteFeedLoaderError::InvalidData)
        );
    }

    #[test]
    fn test_extra_fields_and_null_optionals_are_accepted() {
        let id = Uuid::from_u128(42);
        let body = json!({
            "version": 3,
            "items": [{
                "id": id.to_string().to_uppercase(),
                "description": null,
                "location": "Lisbon",
                "image": "https://a-url.com/image.png",
                "likes": 12,
            }]
        });

        let data = serde_json::to_vec(&body).unwrap();
        let items = FeedItemMapper::map(&data, StatusCode::OK).unwrap();

        assert_eq!(
            items,
            vec![FeedItem::new(id, Url::parse("https://a-url.com/image.png").unwrap())
                .with_location(Some("Lisbon".to_string()))]
        );
    }

    fn feed_item() -> impl Strategy<Value = FeedItem> {
        (
            any::<u128>(),
            proptest::option::of(".*"),
            proptest::option::of(".*"),
            "[a-z]{1,12}",
            "[a-z0-9]{0,12}",
        )
            .prop_map(|(id, description, location, host, path)| {
                let url = Url::parse(&format!("https://{}.com/{}", host, path)).unwrap();
                FeedItem::new(Uuid::from_u128(id), url)
                    .with_description(description)
                    .with_location(location)
            })
    }

    proptest! {
        #[test]
        fn test_encoded_items_map_back_unchanged(
            items in proptest::collection::vec(feed_item(), 0..8)
        ) {
            let mapped = FeedItemMapper::map(&items_json(&items), StatusCode::OK);
            prop_assert_eq!(mapped, Ok(items));
        }
    }
}
