//! Author domain models and parameters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::server::{
    model::format_date,
    util::validate::{Rule, Submission, Validator},
};

/// Author stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Display URL of the author's detail page.
    pub fn url(&self) -> String {
        format!("/catalog/author/{}", self.id)
    }

    /// Full name as `"family, first"`, or empty when either part is missing.
    pub fn name(&self) -> String {
        if self.first_name.is_empty() || self.family_name.is_empty() {
            return String::new();
        }
        format!("{}, {}", self.family_name, self.first_name)
    }

    /// Formatted birth and death dates joined by `" - "`, or empty when both are unknown.
    pub fn lifespan(&self) -> String {
        if self.date_of_birth.is_none() && self.date_of_death.is_none() {
            return String::new();
        }
        format!(
            "{} - {}",
            format_date(self.date_of_birth),
            format_date(self.date_of_death)
        )
    }

    /// Converts an entity model to an author domain model at the repository boundary.
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            family_name: entity.family_name,
            date_of_birth: entity.date_of_birth,
            date_of_death: entity.date_of_death,
        }
    }

    /// Converts the author into the shape rendered by templates.
    pub fn into_view(self) -> AuthorView {
        AuthorView {
            url: self.url(),
            name: self.name(),
            lifespan: self.lifespan(),
            date_of_birth_formatted: format_date(self.date_of_birth),
            date_of_death_formatted: format_date(self.date_of_death),
            id: self.id,
            first_name: self.first_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

/// Validated author fields used to create or fully replace an author.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorParam {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

/// Raw author form as submitted by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(default)]
    pub date_of_death: String,
}

impl AuthorInput {
    /// Validates and sanitizes the submitted fields.
    ///
    /// # Arguments
    /// - `id` - Id of the author being updated, `None` when creating
    ///
    /// # Returns
    /// - `Submission<AuthorForm>` - Sanitized candidate with every violation found
    pub fn validate(self, id: Option<i32>) -> Submission<AuthorForm> {
        let mut validator = Validator::new();

        let first_name = validator.text(
            "first_name",
            &self.first_name,
            &[
                Rule::MinLength(1, "First name must be specified"),
                Rule::Alphanumeric("First name has non-alphanumeric characters."),
            ],
        );
        let family_name = validator.text(
            "family_name",
            &self.family_name,
            &[
                Rule::MinLength(1, "Family name must be specified"),
                Rule::Alphanumeric("Family name has non-alphanumeric characters."),
            ],
        );
        let date_of_birth =
            validator.optional_date("date_of_birth", &self.date_of_birth, "Invalid date of birth");
        let date_of_death =
            validator.optional_date("date_of_death", &self.date_of_death, "Invalid date of death");

        validator.finish(AuthorForm {
            id,
            first_name,
            family_name,
            date_of_birth,
            date_of_death,
        })
    }
}

/// Candidate author used to pre-fill the author form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AuthorForm {
    pub id: Option<i32>,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl AuthorForm {
    pub fn from_author(author: &Author) -> Self {
        Self {
            id: Some(author.id),
            first_name: author.first_name.clone(),
            family_name: author.family_name.clone(),
            date_of_birth: author.date_of_birth,
            date_of_death: author.date_of_death,
        }
    }

    pub fn into_param(self) -> AuthorParam {
        AuthorParam {
            first_name: self.first_name,
            family_name: self.family_name,
            date_of_birth: self.date_of_birth,
            date_of_death: self.date_of_death,
        }
    }
}

/// Author as rendered by templates, including derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorView {
    pub id: i32,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
    pub name: String,
    pub url: String,
    pub lifespan: String,
    pub date_of_birth_formatted: String,
    pub date_of_death_formatted: String,
}

/// Author delete confirmation form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorDeleteInput {
    #[serde(default)]
    pub authorid: Option<String>,
}
