use serde_json::json;

use crate::server::{
    data::Gateway,
    error::AppError,
    model::{
        book::{Book, BookView},
        genre::{GenreDeleteInput, GenreForm, GenreInput, GenreView},
    },
    service::delete_target,
    util::validate::Violation,
    view::Outcome,
};

pub struct GenreService<'a> {
    gateway: &'a Gateway,
}

impl<'a> GenreService<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Lists all genres ordered by name
    pub async fn list(&self) -> Result<Outcome, AppError> {
        let genres = self.gateway.genres.find_all().await?;

        let genre_list: Vec<_> = genres.into_iter().map(|g| g.into_view()).collect();

        Ok(Outcome::render(
            "genre_list.html",
            json!({ "title": "Genre List", "genre_list": genre_list }),
        ))
    }

    /// Shows a genre with every book filed under it
    pub async fn detail(&self, id: i32) -> Result<Outcome, AppError> {
        let (genre, books) = tokio::try_join!(
            self.gateway.genres.find_by_id(id),
            self.gateway.books.find_by_genre(id),
        )?;

        let Some(genre) = genre else {
            tracing::debug!("genre {} not found", id);
            return Err(AppError::NotFound("Genre not found".to_string()));
        };

        let genre_books: Vec<BookView> = books.into_iter().map(|b| b.into_view()).collect();

        Ok(Outcome::render(
            "genre_detail.html",
            json!({
                "title": "Genre Detail",
                "genre": genre.into_view(),
                "genre_books": genre_books,
            }),
        ))
    }

    pub fn create_form(&self) -> Outcome {
        Self::form("Create Genre", GenreForm::default(), Vec::new())
    }

    /// Validates a submitted genre and saves it unless the name is already taken.
    ///
    /// # Returns
    /// - `Outcome::Redirect` - To the new genre, or to the existing genre with the same name
    /// - `Outcome::Render` - The form again with the submitted name and violations
    pub async fn create(&self, input: GenreInput) -> Result<Outcome, AppError> {
        let form = match input.validate(None).into_result() {
            Ok(form) => form,
            Err((candidate, errors)) => {
                tracing::debug!("invalid genre submission: {} violation(s)", errors.len());
                return Ok(Self::form("Create Genre", candidate, errors));
            }
        };

        if let Some(existing) = self.gateway.genres.find_by_name(&form.name).await? {
            tracing::debug!("genre {:?} already exists as {}", form.name, existing.id);
            return Ok(Outcome::redirect(existing.url()));
        }

        let genre = self.gateway.genres.save(form.into_param()).await?;
        tracing::info!("created genre {}", genre.id);

        Ok(Outcome::redirect(genre.url()))
    }

    pub async fn delete_form(&self, id: i32) -> Result<Outcome, AppError> {
        let (genre, books) = tokio::try_join!(
            self.gateway.genres.find_by_id(id),
            self.gateway.books.find_by_genre(id),
        )?;

        let Some(genre) = genre else {
            return Ok(Outcome::redirect("/catalog/genres"));
        };

        Ok(Self::delete_page(genre.into_view(), books))
    }

    /// Removes a genre unless books are still filed under it.
    pub async fn delete(&self, id: i32, input: GenreDeleteInput) -> Result<Outcome, AppError> {
        let id = delete_target(id, input.genreid.as_deref())?;

        let (genre, books) = tokio::try_join!(
            self.gateway.genres.find_by_id(id),
            self.gateway.books.find_by_genre(id),
        )?;

        let Some(genre) = genre else {
            return Ok(Outcome::redirect("/catalog/genres"));
        };

        if !books.is_empty() {
            tracing::debug!("genre {} still has {} book(s)", id, books.len());
            return Ok(Self::delete_page(genre.into_view(), books));
        }

        self.gateway.genres.remove_by_id(id).await?;
        tracing::info!("deleted genre {}", id);

        Ok(Outcome::redirect("/catalog/genres"))
    }

    pub async fn update_form(&self, id: i32) -> Result<Outcome, AppError> {
        let Some(genre) = self.gateway.genres.find_by_id(id).await? else {
            tracing::debug!("genre {} not found on update", id);
            return Err(AppError::NotFound("Genre not found".to_string()));
        };

        Ok(Self::form(
            "Update Genre",
            GenreForm::from_genre(&genre),
            Vec::new(),
        ))
    }

    /// Validates a submitted genre and replaces the stored record.
    ///
    /// Renaming is not de-duplicated; only creation redirects to an existing name.
    pub async fn update(&self, id: i32, input: GenreInput) -> Result<Outcome, AppError> {
        let form = match input.validate(Some(id)).into_result() {
            Ok(form) => form,
            Err((candidate, errors)) => {
                tracing::debug!("invalid genre update: {} violation(s)", errors.len());
                return Ok(Self::form("Update Genre", candidate, errors));
            }
        };

        let Some(genre) = self
            .gateway
            .genres
            .update_by_id(id, form.into_param())
            .await?
        else {
            return Err(AppError::NotFound("Genre not found".to_string()));
        };
        tracing::info!("updated genre {}", genre.id);

        Ok(Outcome::redirect(genre.url()))
    }

    fn form(title: &str, genre: GenreForm, errors: Vec<Violation>) -> Outcome {
        Outcome::render(
            "genre_form.html",
            json!({ "title": title, "genre": genre, "errors": errors }),
        )
    }

    fn delete_page(genre: GenreView, books: Vec<Book>) -> Outcome {
        let genre_books: Vec<BookView> = books.into_iter().map(|b| b.into_view()).collect();

        Outcome::render(
            "genre_delete.html",
            json!({
                "title": "Genre Delete",
                "genre": genre,
                "genre_books": genre_books,
            }),
        )
    }
}
