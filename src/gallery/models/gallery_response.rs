use serde::{Deserialize, Deserializer, Serialize};

/// Generated image urls, newest first. Paths are relative to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
}

// `{"images": null}` is an empty gallery, same as a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_null_images_decode_as_empty() {
        for body in ["{}", r#"{"images":null}"#] {
            let gallery: GalleryResponse = serde_json::from_str(body).unwrap();

            assert!(gallery.images.is_empty(), "{}", body);
        }
    }

    #[test]
    fn non_list_images_still_fail() {
        assert!(serde_json::from_str::<GalleryResponse>(r#"{"images":"a.jpg"}"#).is_err());
    }
}
