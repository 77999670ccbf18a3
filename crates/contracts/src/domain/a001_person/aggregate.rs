use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Movie associated with a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    /// Release date as supplied by the source; not every record carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,
}

/// Person record as served by the people endpoint.
///
/// All date fields stay unformatted strings; the UI renders them verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    pub show: String,
    pub actor: String,
    pub dob: String,
    pub movies: Vec<Movie>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: String,
}

impl Person {
    /// Create a new person from the create form. Mints a fresh id and stamps
    /// `updatedAt`; the record is never sent anywhere.
    pub fn new_for_create(
        name: String,
        show: String,
        actor: String,
        dob: String,
        movies: Vec<Movie>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            show,
            actor,
            dob,
            movies,
            updated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Comma-joined movie titles for the Movies column.
    pub fn movie_titles(&self) -> String {
        self.movies
            .iter()
            .map(|m| m.title.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
