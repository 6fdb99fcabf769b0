use std::collections::HashMap;

use serde_json::json;

use crate::server::{
    data::Gateway,
    error::AppError,
    model::{
        author::Author,
        book::{BookDeleteInput, BookForm, BookInput, BookListItem},
        genre::{Genre, GenreView},
    },
    service::delete_target,
    util::validate::{Submission, Violation},
    view::Outcome,
};

pub struct BookService<'a> {
    gateway: &'a Gateway,
}

impl<'a> BookService<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Lists all books ordered by title, each with its author's name
    pub async fn list(&self) -> Result<Outcome, AppError> {
        let (books, authors) = tokio::try_join!(
            self.gateway.books.find_all(),
            self.gateway.authors.find_all(),
        )?;

        let names: HashMap<i32, String> = authors.iter().map(|a| (a.id, a.name())).collect();
        let book_list: Vec<BookListItem> = books
            .into_iter()
            .map(|book| BookListItem {
                url: book.url(),
                author_name: book
                    .author_id
                    .and_then(|id| names.get(&id).cloned())
                    .unwrap_or_default(),
                title: book.title,
            })
            .collect();

        Ok(Outcome::render(
            "book_list.html",
            json!({ "title": "Book List", "book_list": book_list }),
        ))
    }

    /// Shows a book with its author and genres
    pub async fn detail(&self, id: i32) -> Result<Outcome, AppError> {
        let (book, genres) = tokio::try_join!(
            self.gateway.books.find_by_id(id),
            self.gateway.genres.find_all(),
        )?;

        let Some(book) = book else {
            tracing::debug!("book {} not found", id);
            return Err(AppError::NotFound("Book not found".to_string()));
        };

        let author = match book.author_id {
            Some(author_id) => self.gateway.authors.find_by_id(author_id).await?,
            None => None,
        };
        let book_genres: Vec<GenreView> = genres
            .into_iter()
            .filter(|genre| book.genre_ids.contains(&genre.id))
            .map(|genre| genre.into_view())
            .collect();
        let title = book.title.clone();

        Ok(Outcome::render(
            "book_detail.html",
            json!({
                "title": title,
                "book": book.into_view(),
                "author": author.map(|a| a.into_view()),
                "genres": book_genres,
            }),
        ))
    }

    pub async fn create_form(&self) -> Result<Outcome, AppError> {
        let (authors, genres) = self.choices().await?;

        Ok(Self::form(
            "Create Book",
            BookForm::default(),
            authors,
            genres,
            Vec::new(),
        ))
    }

    /// Validates a submitted book and saves it.
    ///
    /// Besides the field rules, the selected author and genres must exist.
    pub async fn create(&self, input: BookInput) -> Result<Outcome, AppError> {
        let (authors, genres) = self.choices().await?;

        let mut submission = input.validate(None);
        check_references(&mut submission, &authors, &genres);

        let form = match submission.into_result() {
            Ok(form) => form,
            Err((candidate, errors)) => {
                tracing::debug!("invalid book submission: {} violation(s)", errors.len());
                return Ok(Self::form("Create Book", candidate, authors, genres, errors));
            }
        };

        let book = self.gateway.books.save(form.into_param()).await?;
        tracing::info!("created book {}", book.id);

        Ok(Outcome::redirect(book.url()))
    }

    pub async fn delete_form(&self, id: i32) -> Result<Outcome, AppError> {
        let Some(book) = self.gateway.books.find_by_id(id).await? else {
            return Ok(Outcome::redirect("/catalog/books"));
        };

        let author = match book.author_id {
            Some(author_id) => self.gateway.authors.find_by_id(author_id).await?,
            None => None,
        };

        Ok(Outcome::render(
            "book_delete.html",
            json!({
                "title": "Delete Book",
                "book": book.into_view(),
                "author": author.map(|a| a.into_view()),
            }),
        ))
    }

    /// Removes a book. Books have no dependents, so removal is never blocked.
    pub async fn delete(&self, id: i32, input: BookDeleteInput) -> Result<Outcome, AppError> {
        let id = delete_target(id, input.bookid.as_deref())?;

        if self.gateway.books.remove_by_id(id).await? {
            tracing::info!("deleted book {}", id);
        }

        Ok(Outcome::redirect("/catalog/books"))
    }

    pub async fn update_form(&self, id: i32) -> Result<Outcome, AppError> {
        let (book, authors, genres) = tokio::try_join!(
            self.gateway.books.find_by_id(id),
            self.gateway.authors.find_all(),
            self.gateway.genres.find_all(),
        )?;

        let Some(book) = book else {
            tracing::debug!("book {} not found on update", id);
            return Err(AppError::NotFound("Book not found".to_string()));
        };

        Ok(Self::form(
            "Update Book",
            BookForm::from_book(&book),
            authors,
            genres,
            Vec::new(),
        ))
    }

    pub async fn update(&self, id: i32, input: BookInput) -> Result<Outcome, AppError> {
        let (authors, genres) = self.choices().await?;

        let mut submission = input.validate(Some(id));
        check_references(&mut submission, &authors, &genres);

        let form = match submission.into_result() {
            Ok(form) => form,
            Err((candidate, errors)) => {
                tracing::debug!("invalid book update: {} violation(s)", errors.len());
                return Ok(Self::form("Update Book", candidate, authors, genres, errors));
            }
        };

        let Some(book) = self
            .gateway
            .books
            .update_by_id(id, form.into_param())
            .await?
        else {
            return Err(AppError::NotFound("Book not found".to_string()));
        };
        tracing::info!("updated book {}", book.id);

        Ok(Outcome::redirect(book.url()))
    }

    async fn choices(&self) -> Result<(Vec<Author>, Vec<Genre>), AppError> {
        Ok(tokio::try_join!(
            self.gateway.authors.find_all(),
            self.gateway.genres.find_all(),
        )?)
    }

    fn form(
        title: &str,
        book: BookForm,
        authors: Vec<Author>,
        genres: Vec<Genre>,
        errors: Vec<Violation>,
    ) -> Outcome {
        let authors = book.author_options(authors);
        let genres = book.genre_options(genres);

        Outcome::render(
            "book_form.html",
            json!({
                "title": title,
                "book": book,
                "authors": authors,
                "genres": genres,
                "errors": errors,
            }),
        )
    }
}

/// Records a violation for a selected author or genre that does not exist.
fn check_references(submission: &mut Submission<BookForm>, authors: &[Author], genres: &[Genre]) {
    if let Some(author_id) = submission.candidate.author_id {
        if !authors.iter().any(|author| author.id == author_id) {
            submission.violations.push(Violation {
                field: "author",
                msg: "Invalid author.".to_string(),
            });
        }
    }

    let already_flagged = submission.violations.iter().any(|v| v.field == "genre");
    let unknown_genre = submission
        .candidate
        .genre_ids
        .iter()
        .any(|id| !genres.iter().any(|genre| genre.id == *id));
    if unknown_genre && !already_flagged {
        submission.violations.push(Violation {
            field: "genre",
            msg: "Invalid genre.".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::model::{author::AuthorParam, book::BookParam, genre::GenreParam};

    fn pairs(values: &[(&str, &str)]) -> BookInput {
        BookInput::from_pairs(
            values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    async fn seed(gateway: &Gateway) -> (i32, i32) {
        let author = gateway
            .authors
            .save(AuthorParam {
                first_name: "Frank".to_string(),
                family_name: "Herbert".to_string(),
                date_of_birth: None,
                date_of_death: None,
            })
            .await
            .unwrap();
        let genre = gateway
            .genres
            .save(GenreParam {
                name: "Science Fiction".to_string(),
            })
            .await
            .unwrap();

        (author.id, genre.id)
    }

    /// Tests creating a book with an author and a genre.
    ///
    /// Expected: Book saved with its references and redirect to its detail page
    #[tokio::test]
    async fn creates_book_with_references() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);
        let (author_id, genre_id) = seed(&gateway).await;

        let outcome = service
            .create(pairs(&[
                ("title", "Dune"),
                ("author", &author_id.to_string()),
                ("summary", "Spice"),
                ("isbn", "9780441013593"),
                ("genre", &genre_id.to_string()),
            ]))
            .await
            .unwrap();

        let books = gateway.books.find_all().await.unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].author_id, Some(author_id));
        assert_eq!(books[0].genre_ids, vec![genre_id]);
        assert!(matches!(outcome, Outcome::Redirect(url) if url == books[0].url()));
    }

    /// Tests creating a book with empty required fields.
    ///
    /// Verifies that the selected genre stays checked on the re-rendered form.
    ///
    /// Expected: Form with the required-field messages and nothing saved
    #[tokio::test]
    async fn rerenders_form_with_selections_kept() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);
        let (_, genre_id) = seed(&gateway).await;

        let outcome = service
            .create(pairs(&[("title", ""), ("genre", &genre_id.to_string())]))
            .await
            .unwrap();

        let Outcome::Render(view) = outcome else {
            panic!("expected the form");
        };
        let messages: Vec<_> = view.context["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["msg"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(
            messages,
            vec![
                "Title must not be empty.",
                "Summary must not be empty.",
                "ISBN must not be empty."
            ]
        );
        assert_eq!(view.context["genres"][0]["checked"], true);
        assert_eq!(gateway.books.count().await.unwrap(), 0);
    }

    /// Tests creating a book that references an unknown author.
    ///
    /// Expected: Form with "Invalid author." and nothing saved
    #[tokio::test]
    async fn unknown_author_is_a_violation() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);

        let outcome = service
            .create(pairs(&[
                ("title", "Dune"),
                ("author", "77"),
                ("summary", "Spice"),
                ("isbn", "1"),
            ]))
            .await
            .unwrap();

        let Outcome::Render(view) = outcome else {
            panic!("expected the form");
        };
        assert_eq!(view.context["errors"][0]["msg"], "Invalid author.");
        assert_eq!(gateway.books.count().await.unwrap(), 0);
    }

    /// Tests the list view's author names.
    ///
    /// Expected: Book rows carry "family, first" or an empty name without an author
    #[tokio::test]
    async fn lists_books_with_author_names() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);
        let (author_id, _) = seed(&gateway).await;
        for (title, author_id) in [("Dune", Some(author_id)), ("Anonymous", None)] {
            gateway
                .books
                .save(BookParam {
                    title: title.to_string(),
                    author_id,
                    summary: "S".to_string(),
                    isbn: "1".to_string(),
                    genre_ids: Vec::new(),
                })
                .await
                .unwrap();
        }

        let Outcome::Render(view) = service.list().await.unwrap() else {
            panic!("expected the list");
        };

        assert_eq!(view.context["book_list"][0]["title"], "Anonymous");
        assert_eq!(view.context["book_list"][0]["author_name"], "");
        assert_eq!(view.context["book_list"][1]["author_name"], "Herbert, Frank");
    }

    /// Tests deleting a book and the detail of a missing one.
    ///
    /// Expected: Redirect to the book list, then NotFound for the removed book
    #[tokio::test]
    async fn deletes_book() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);
        let book = gateway
            .books
            .save(BookParam {
                title: "Dune".to_string(),
                author_id: None,
                summary: "S".to_string(),
                isbn: "1".to_string(),
                genre_ids: Vec::new(),
            })
            .await
            .unwrap();

        let outcome = service
            .delete(book.id, BookDeleteInput::default())
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Redirect(url) if url == "/catalog/books"));
        assert!(matches!(
            service.detail(book.id).await,
            Err(AppError::NotFound(msg)) if msg == "Book not found"
        ));
    }

    /// Tests updating a book with an empty title.
    ///
    /// Verifies that the form keeps the book id and selections and the stored book is
    /// untouched.
    ///
    /// Expected: Update form with "Title must not be empty." and the book unchanged
    #[tokio::test]
    async fn update_with_empty_title_rerenders_form() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);
        let (author_id, genre_id) = seed(&gateway).await;
        let book = gateway
            .books
            .save(BookParam {
                title: "Dune".to_string(),
                author_id: Some(author_id),
                summary: "Spice".to_string(),
                isbn: "1".to_string(),
                genre_ids: vec![genre_id],
            })
            .await
            .unwrap();

        let outcome = service
            .update(
                book.id,
                pairs(&[
                    ("title", ""),
                    ("author", &author_id.to_string()),
                    ("summary", "Spice"),
                    ("isbn", "1"),
                    ("genre", &genre_id.to_string()),
                ]),
            )
            .await
            .unwrap();

        let Outcome::Render(view) = outcome else {
            panic!("expected the form");
        };
        assert_eq!(view.template, "book_form.html");
        assert_eq!(view.context["title"], "Update Book");
        assert_eq!(view.context["book"]["id"], book.id);
        assert_eq!(view.context["errors"][0]["msg"], "Title must not be empty.");
        assert_eq!(view.context["authors"][0]["selected"], true);
        let stored = gateway.books.find_by_id(book.id).await.unwrap().unwrap();
        assert_eq!(stored, book);
    }

    /// Tests updating a book with valid input.
    ///
    /// Expected: Redirect to the book with the new title and genres stored
    #[tokio::test]
    async fn update_replaces_book() {
        let gateway = Gateway::in_memory();
        let service = BookService::new(&gateway);
        let (_, genre_id) = seed(&gateway).await;
        let book = gateway
            .books
            .save(BookParam {
                title: "Dune".to_string(),
                author_id: None,
                summary: "Spice".to_string(),
                isbn: "1".to_string(),
                genre_ids: Vec::new(),
            })
            .await
            .unwrap();

        let outcome = service
            .update(
                book.id,
                pairs(&[
                    ("title", "Dune Messiah"),
                    ("summary", "Spice"),
                    ("isbn", "2"),
                    ("genre", &genre_id.to_string()),
                ]),
            )
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Redirect(url) if url == book.url()));
        let stored = gateway.books.find_by_id(book.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "Dune Messiah");
        assert_eq!(stored.genre_ids, vec![genre_id]);
    }
}
