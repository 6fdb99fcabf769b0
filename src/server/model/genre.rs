//! Genre domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::server::util::validate::{Rule, Submission, Validator};

/// Genre stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    /// Display URL of the genre's detail page.
    pub fn url(&self) -> String {
        format!("/catalog/genre/{}", self.id)
    }

    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_view(self) -> GenreView {
        GenreView {
            url: self.url(),
            id: self.id,
            name: self.name,
        }
    }
}

/// Validated genre fields used to create or fully replace a genre.
#[derive(Debug, Clone, PartialEq)]
pub struct GenreParam {
    pub name: String,
}

/// Raw genre form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreInput {
    #[serde(default)]
    pub name: String,
}

impl GenreInput {
    pub fn validate(self, id: Option<i32>) -> Submission<GenreForm> {
        let mut validator = Validator::new();

        let name = validator.text(
            "name",
            &self.name,
            &[Rule::MinLength(
                3,
                "Genre name must contain at least 3 characters",
            )],
        );

        validator.finish(GenreForm { id, name })
    }
}

/// Candidate genre used to pre-fill the genre form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GenreForm {
    pub id: Option<i32>,
    pub name: String,
}

impl GenreForm {
    pub fn from_genre(genre: &Genre) -> Self {
        Self {
            id: Some(genre.id),
            name: genre.name.clone(),
        }
    }

    pub fn into_param(self) -> GenreParam {
        GenreParam { name: self.name }
    }
}

/// Genre as rendered by templates.
#[derive(Debug, Clone, Serialize)]
pub struct GenreView {
    pub id: i32,
    pub name: String,
    pub url: String,
}

/// Genre delete confirmation form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreDeleteInput {
    #[serde(default)]
    pub genreid: Option<String>,
}
