use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod genre;
pub mod mood;

pub use genre::{genre_id, Genre};
pub use mood::{genres_for, mood_names};

/// A catalog field that may be missing from the upstream record.
///
/// Jikan distinguishes a key that is absent from one that is `null`; clients
/// of this API see `"N/A"` for the former and `null` for the latter.
#[derive(Debug, Clone, PartialEq)]
pub enum Reported<T> {
    Missing,
    Value(Option<T>),
}

impl<T> Default for Reported<T> {
    fn default() -> Self {
        Reported::Missing
    }
}

impl<T> From<T> for Reported<T> {
    fn from(value: T) -> Self {
        Reported::Value(Some(value))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Reported<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Reported::Value)
    }
}

impl<T: Serialize> Serialize for Reported<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Reported::Missing => serializer.serialize_str("N/A"),
            Reported::Value(value) => value.serialize(serializer),
        }
    }
}

// ============================================================================
// Jikan API Types
// ============================================================================

/// Envelope returned by GET /anime
#[derive(Debug, Clone, Deserialize)]
pub struct ApiAnimeList {
    #[serde(default)]
    pub data: Vec<CatalogItem>,
}

/// One anime record as returned by the catalog
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub mal_id: u64,
    pub title: String,
    #[serde(default)]
    pub synopsis: Option<String>,
    #[serde(default)]
    pub images: ApiImages,
    #[serde(default)]
    pub score: Reported<f64>,
    #[serde(default)]
    pub episodes: Reported<u32>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiImages {
    #[serde(default)]
    pub jpg: Option<ApiImageSet>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiImageSet {
    #[serde(default)]
    pub image_url: Option<String>,
}

impl CatalogItem {
    pub fn image_url(&self) -> Option<&str> {
        self.images.jpg.as_ref()?.image_url.as_deref()
    }
}

// ============================================================================
// Public Response Types
// ============================================================================

/// The single item handed back to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub synopsis: Option<String>,
    pub image_url: Option<String>,
    pub mal_id: u64,
    pub score: Reported<f64>,
    pub episodes: Reported<u32>,
}

impl From<CatalogItem> for Recommendation {
    fn from(item: CatalogItem) -> Self {
        let image_url = item.image_url().map(str::to_string);
        Recommendation {
            title: item.title,
            synopsis: item.synopsis,
            image_url,
            mal_id: item.mal_id,
            score: item.score,
            episodes: item.episodes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendation: Recommendation,
}

#[derive(Debug, Serialize)]
pub struct MoodEntry {
    pub mood: &'static str,
    pub genres: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct MoodsResponse {
    pub moods: Vec<MoodEntry>,
}

impl MoodsResponse {
    pub fn all() -> Self {
        let moods = mood::all_moods()
            .iter()
            .map(|&(mood, genres)| MoodEntry { mood, genres })
            .collect();
        MoodsResponse { moods }
    }
}
