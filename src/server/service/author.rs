use serde_json::json;

use crate::server::{
    data::Gateway,
    error::AppError,
    model::{
        author::{AuthorDeleteInput, AuthorForm, AuthorInput, AuthorView},
        book::{Book, BookView},
    },
    service::delete_target,
    util::validate::Violation,
    view::Outcome,
};

pub struct AuthorService<'a> {
    gateway: &'a Gateway,
}

impl<'a> AuthorService<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Lists all authors ordered by family name
    pub async fn list(&self) -> Result<Outcome, AppError> {
        let authors = self.gateway.authors.find_all().await?;

        let author_list: Vec<_> = authors.into_iter().map(|a| a.into_view()).collect();

        Ok(Outcome::render(
            "author_list.html",
            json!({ "title": "List of Authors", "author_list": author_list }),
        ))
    }

    /// Shows an author with all of their books
    pub async fn detail(&self, id: i32) -> Result<Outcome, AppError> {
        let (author, books) = tokio::try_join!(
            self.gateway.authors.find_by_id(id),
            self.gateway.books.find_by_author(id),
        )?;

        let Some(author) = author else {
            tracing::debug!("author {} not found", id);
            return Err(AppError::NotFound("Author not found".to_string()));
        };

        let author_books: Vec<BookView> = books.into_iter().map(|b| b.into_view()).collect();

        Ok(Outcome::render(
            "author_detail.html",
            json!({
                "title": "Author Detail",
                "author": author.into_view(),
                "author_books": author_books,
            }),
        ))
    }

    pub fn create_form(&self) -> Outcome {
        Self::form("Create Author", AuthorForm::default(), Vec::new())
    }

    /// Validates a submitted author and saves it.
    ///
    /// # Returns
    /// - `Outcome::Redirect` - To the new author's detail page
    /// - `Outcome::Render` - The form again with the submitted values and violations
    pub async fn create(&self, input: AuthorInput) -> Result<Outcome, AppError> {
        let form = match input.validate(None).into_result() {
            Ok(form) => form,
            Err((candidate, errors)) => {
                tracing::debug!("invalid author submission: {} violation(s)", errors.len());
                return Ok(Self::form("Create Author", candidate, errors));
            }
        };

        let author = self.gateway.authors.save(form.into_param()).await?;
        tracing::info!("created author {}", author.id);

        Ok(Outcome::redirect(author.url()))
    }

    /// Shows the delete confirmation page.
    ///
    /// A missing author is not an error; the request ends at the author list.
    pub async fn delete_form(&self, id: i32) -> Result<Outcome, AppError> {
        let (author, books) = tokio::try_join!(
            self.gateway.authors.find_by_id(id),
            self.gateway.books.find_by_author(id),
        )?;

        let Some(author) = author else {
            return Ok(Outcome::redirect("/catalog/authors"));
        };

        Ok(Self::delete_page(author.into_view(), books))
    }

    /// Removes an author unless books still reference them.
    ///
    /// # Returns
    /// - `Outcome::Redirect` - To the author list after removal, or when the author is gone
    /// - `Outcome::Render` - The confirmation page listing the blocking books
    /// - `Err(AppError::BadRequest)` - The confirmation names a different author
    pub async fn delete(&self, id: i32, input: AuthorDeleteInput) -> Result<Outcome, AppError> {
        let id = delete_target(id, input.authorid.as_deref())?;

        let (author, books) = tokio::try_join!(
            self.gateway.authors.find_by_id(id),
            self.gateway.books.find_by_author(id),
        )?;

        let Some(author) = author else {
            return Ok(Outcome::redirect("/catalog/authors"));
        };

        if !books.is_empty() {
            tracing::debug!("author {} still has {} book(s)", id, books.len());
            return Ok(Self::delete_page(author.into_view(), books));
        }

        self.gateway.authors.remove_by_id(id).await?;
        tracing::info!("deleted author {}", id);

        Ok(Outcome::redirect("/catalog/authors"))
    }

    pub async fn update_form(&self, id: i32) -> Result<Outcome, AppError> {
        let Some(author) = self.gateway.authors.find_by_id(id).await? else {
            tracing::debug!("author {} not found on update", id);
            return Err(AppError::NotFound("Author not found".to_string()));
        };

        Ok(Self::form(
            "Update Author",
            AuthorForm::from_author(&author),
            Vec::new(),
        ))
    }

    /// Validates a submitted author and replaces the stored record.
    pub async fn update(&self, id: i32, input: AuthorInput) -> Result<Outcome, AppError> {
        let form = match input.validate(Some(id)).into_result() {
            Ok(form) => form,
            Err((candidate, errors)) => {
                tracing::debug!("invalid author update: {} violation(s)", errors.len());
                return Ok(Self::form("Update Author", candidate, errors));
            }
        };

        let Some(author) = self
            .gateway
            .authors
            .update_by_id(id, form.into_param())
            .await?
        else {
            return Err(AppError::NotFound("Author not found".to_string()));
        };
        tracing::info!("updated author {}", author.id);

        Ok(Outcome::redirect(author.url()))
    }

    fn form(title: &str, author: AuthorForm, errors: Vec<Violation>) -> Outcome {
        Outcome::render(
            "author_form.html",
            json!({ "title": title, "author": author, "errors": errors }),
        )
    }

    fn delete_page(author: AuthorView, books: Vec<Book>) -> Outcome {
        let author_books: Vec<BookView> = books.into_iter().map(|b| b.into_view()).collect();

        Outcome::render(
            "author_delete.html",
            json!({
                "title": "Delete Author",
                "author": author,
                "author_books": author_books,
            }),
        )
    }
}
