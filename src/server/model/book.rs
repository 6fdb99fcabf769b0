//! Book domain models and parameters.
//!
//! Books are the dependents of authors and genres: a book references at most one author
//! and any number of genres.

use serde::{Deserialize, Serialize};

use crate::server::{
    model::{author::Author, genre::Genre},
    util::validate::{Rule, Submission, Validator},
};

/// Book stored in the catalog, with the ids of its genres.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i32>,
}

impl Book {
    /// Display URL of the book's detail page.
    pub fn url(&self) -> String {
        format!("/catalog/book/{}", self.id)
    }

    /// Converts an entity model and its genre links to a book domain model.
    pub fn from_entity(entity: entity::book::Model, genre_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            author_id: entity.author_id,
            summary: entity.summary,
            isbn: entity.isbn,
            genre_ids,
        }
    }

    pub fn into_view(self) -> BookView {
        BookView {
            url: self.url(),
            id: self.id,
            title: self.title,
            summary: self.summary,
            isbn: self.isbn,
        }
    }
}

/// Validated book fields used to create or fully replace a book.
#[derive(Debug, Clone, PartialEq)]
pub struct BookParam {
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i32>,
}

/// Raw book form as submitted by the browser.
///
/// `genre` is a repeated field (one value per checked box), so the input is collected from
/// the decoded key/value pairs rather than derived.
#[derive(Debug, Clone, Default)]
pub struct BookInput {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub isbn: String,
    pub genre: Vec<String>,
}

impl BookInput {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut input = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "title" => input.title = value,
                "author" => input.author = value,
                "summary" => input.summary = value,
                "isbn" => input.isbn = value,
                "genre" => input.genre.push(value),
                _ => {}
            }
        }

        input
    }

    pub fn validate(self, id: Option<i32>) -> Submission<BookForm> {
        let mut validator = Validator::new();

        let title = validator.text(
            "title",
            &self.title,
            &[Rule::MinLength(1, "Title must not be empty.")],
        );
        let author_id = validator.optional_id("author", &self.author, "Invalid author.");
        let summary = validator.text(
            "summary",
            &self.summary,
            &[Rule::MinLength(1, "Summary must not be empty.")],
        );
        let isbn = validator.text(
            "isbn",
            &self.isbn,
            &[Rule::MinLength(1, "ISBN must not be empty.")],
        );
        let genre_ids = validator.ids("genre", &self.genre, "Invalid genre.");

        validator.finish(BookForm {
            id,
            title,
            author_id,
            summary,
            isbn,
            genre_ids,
        })
    }
}

/// Candidate book used to pre-fill the book form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookForm {
    pub id: Option<i32>,
    pub title: String,
    pub author_id: Option<i32>,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i32>,
}

impl BookForm {
    pub fn from_book(book: &Book) -> Self {
        Self {
            id: Some(book.id),
            title: book.title.clone(),
            author_id: book.author_id,
            summary: book.summary.clone(),
            isbn: book.isbn.clone(),
            genre_ids: book.genre_ids.clone(),
        }
    }

    pub fn into_param(self) -> BookParam {
        BookParam {
            title: self.title,
            author_id: self.author_id,
            summary: self.summary,
            isbn: self.isbn,
            genre_ids: self.genre_ids,
        }
    }

    /// Author choices for the form's select box, marking the candidate's author.
    pub fn author_options(&self, authors: Vec<Author>) -> Vec<AuthorOption> {
        authors
            .into_iter()
            .map(|author| AuthorOption {
                selected: self.author_id == Some(author.id),
                name: author.name(),
                id: author.id,
            })
            .collect()
    }

    /// Genre choices for the form's checkboxes, marking the candidate's genres.
    pub fn genre_options(&self, genres: Vec<Genre>) -> Vec<GenreOption> {
        genres
            .into_iter()
            .map(|genre| GenreOption {
                checked: self.genre_ids.contains(&genre.id),
                id: genre.id,
                name: genre.name,
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorOption {
    pub id: i32,
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenreOption {
    pub id: i32,
    pub name: String,
    pub checked: bool,
}

/// Book as rendered by templates.
#[derive(Debug, Clone, Serialize)]
pub struct BookView {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub isbn: String,
    pub url: String,
}

/// Row of the book list: the book with its author's display name.
#[derive(Debug, Clone, Serialize)]
pub struct BookListItem {
    pub title: String,
    pub url: String,
    pub author_name: String,
}

/// Book delete confirmation form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookDeleteInput {
    #[serde(default)]
    pub bookid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(values: &[(&str, &str)]) -> Vec<(String, String)> {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn collects_repeated_genres_from_pairs() {
        let input = BookInput::from_pairs(pairs(&[
            ("title", "Dune"),
            ("genre", "1"),
            ("genre", "4"),
            ("unknown", "ignored"),
        ]));

        assert_eq!(input.title, "Dune");
        assert_eq!(input.genre, vec!["1".to_string(), "4".to_string()]);
    }

    #[test]
    fn validates_required_fields() {
        let submission = BookInput::from_pairs(pairs(&[("title", " "), ("isbn", "123")]))
            .validate(None);

        let messages: Vec<_> = submission.violations.iter().map(|v| v.msg.as_str()).collect();
        assert_eq!(
            messages,
            vec!["Title must not be empty.", "Summary must not be empty."]
        );
    }

    #[test]
    fn marks_selected_options() {
        let form = BookForm {
            author_id: Some(2),
            genre_ids: vec![5],
            ..Default::default()
        };
        let authors = vec![
            Author {
                id: 1,
                first_name: "A".to_string(),
                family_name: "B".to_string(),
                date_of_birth: None,
                date_of_death: None,
            },
            Author {
                id: 2,
                first_name: "C".to_string(),
                family_name: "D".to_string(),
                date_of_birth: None,
                date_of_death: None,
            },
        ];
        let genres = vec![
            Genre {
                id: 5,
                name: "Poetry".to_string(),
            },
            Genre {
                id: 6,
                name: "Drama".to_string(),
            },
        ];

        let authors = form.author_options(authors);
        let genres = form.genre_options(genres);

        assert!(!authors[0].selected);
        assert!(authors[1].selected);
        assert_eq!(authors[1].name, "D, C");
        assert!(genres[0].checked);
        assert!(!genres[1].checked);
    }
}
