use serde::{Deserialize, Serialize};

/// One movie or series row as stored in the catalog tables.
///
/// Optional image and stream fields are left out of the JSON object when
/// absent, but an explicit empty string is sent as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub year: i32,
    pub rating: f64,
    #[serde(default)]
    pub genre: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
    /// Natural key; the store resolves conflicts on this column.
    pub tmdb_id: i64,
    pub status: String,
}

/// Column the store deduplicates rows on.
pub const CONFLICT_COLUMN: &str = "tmdb_id";

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record() -> MediaRecord {
        MediaRecord {
            title: "Exemplo".into(),
            description: "Teste".into(),
            poster: Some("https://img.example.com/p.png".into()),
            backdrop: None,
            logo_url: Some(String::new()),
            year: 2022,
            rating: 7.2,
            genre: vec!["Drama".into(), "Aventura".into()],
            stream_url: None,
            tmdb_id: 1000001,
            status: "published".into(),
        }
    }

    #[test]
    fn test_serializes_present_fields_only() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(
            value,
            json!({
                "title": "Exemplo",
                "description": "Teste",
                "poster": "https://img.example.com/p.png",
                "logo_url": "",
                "year": 2022,
                "rating": 7.2,
                "genre": ["Drama", "Aventura"],
                "tmdb_id": 1000001,
                "status": "published",
            })
        );
    }

    #[test]
    fn test_genre_order_preserved() {
        let value = serde_json::to_value(record()).unwrap();
        assert_eq!(value["genre"][0], "Drama");
        assert_eq!(value["genre"][1], "Aventura");
    }

    #[test]
    fn test_missing_optional_fields_deserialize() {
        let parsed: MediaRecord = serde_json::from_value(json!({
            "title": "Só o básico",
            "description": "",
            "year": 2024,
            "rating": 7.9,
            "tmdb_id": 2000002,
            "status": "published",
        }))
        .unwrap();
        assert!(parsed.poster.is_none());
        assert!(parsed.stream_url.is_none());
        assert!(parsed.genre.is_empty());
    }
}
