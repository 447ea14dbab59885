use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SeedError;
use crate::models::MediaRecord;

const BUILTIN_CATALOG: &str = include_str!("../../../fixtures/catalog.toml");

/// The record collections to seed, one per target table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub movies: Vec<MediaRecord>,
    #[serde(default)]
    pub series: Vec<MediaRecord>,
}

/// A named collection borrowed from a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    pub table: &'static str,
    pub records: &'a [MediaRecord],
}

impl Catalog {
    /// The sample catalog bundled with the binary.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Load a catalog fixture. `.json` files are read as JSON, anything else as TOML.
    pub fn load(path: &Path) -> Result<Self, SeedError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SeedError::Catalog(format!("failed to read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let catalog = if is_json {
            Self::from_json(&content)
        } else {
            Self::from_toml(&content)
        }?;

        tracing::debug!(
            path = %path.display(),
            movies = catalog.movies.len(),
            series = catalog.series.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    pub fn from_toml(content: &str) -> Result<Self, SeedError> {
        toml::from_str(content).map_err(|e| SeedError::Catalog(e.to_string()))
    }

    pub fn from_json(content: &str) -> Result<Self, SeedError> {
        serde_json::from_str(content).map_err(|e| SeedError::Catalog(e.to_string()))
    }

    /// Collections in seeding order: movies first, then series.
    pub fn collections(&self) -> [Collection<'_>; 2] {
        [
            Collection {
                table: "movies",
                records: &self.movies,
            },
            Collection {
                table: "series",
                records: &self.series,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.movies.len(), 2);
        assert_eq!(catalog.series.len(), 2);

        let first = &catalog.movies[0];
        assert_eq!(first.title, "Exemplo Filme 2022");
        assert_eq!(first.tmdb_id, 1000001);
        assert_eq!(first.logo_url.as_deref(), Some(""));
        assert_eq!(first.genre, vec!["Drama", "Aventura"]);

        let last = &catalog.series[1];
        assert_eq!(last.tmdb_id, 2000002);
        assert!(last.stream_url.is_none());
        assert!(catalog
            .movies
            .iter()
            .chain(&catalog.series)
            .all(|r| r.status == "published"));
    }

    #[test]
    fn test_builtin_ids_unique_per_table() {
        let catalog = Catalog::builtin().unwrap();
        for collection in catalog.collections() {
            let mut ids: Vec<i64> = collection.records.iter().map(|r| r.tmdb_id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), collection.records.len(), "{}", collection.table);
        }
    }

    #[test]
    fn test_collections_order() {
        let catalog = Catalog::builtin().unwrap();
        let tables: Vec<_> = catalog.collections().iter().map(|c| c.table).collect();
        assert_eq!(tables, ["movies", "series"]);
    }

    #[test]
    fn test_load_json_fixture() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{"movies": [{{"title": "Solo", "description": "d", "year": 2020,
                "rating": 5.5, "tmdb_id": 42, "status": "draft"}}]}}"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert_eq!(catalog.movies.len(), 1);
        assert_eq!(catalog.movies[0].tmdb_id, 42);
        assert!(catalog.series.is_empty());
    }

    #[test]
    fn test_load_toml_fixture() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "[[series]]\ntitle = \"Only\"\ndescription = \"\"\nyear = 2021\n\
             rating = 9.0\ngenre = [\"Drama\"]\ntmdb_id = 7\nstatus = \"published\"\n"
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).unwrap();
        assert!(catalog.movies.is_empty());
        assert_eq!(catalog.series[0].title, "Only");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, SeedError::Catalog(_)));
        assert!(err.to_string().contains("absent.toml"));
    }

    #[test]
    fn test_malformed_fixture() {
        let err = Catalog::from_toml("[[movies]]\ntitle = 3\n").unwrap_err();
        assert!(matches!(err, SeedError::Catalog(_)));
    }
}
