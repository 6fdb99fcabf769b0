//! Server-side HTML rendering.
//!
//! Templates are embedded at compile time and registered with a single Tera instance at
//! startup. Services never touch HTTP: they return an [`Outcome`] that is turned into a
//! response by [`Views::respond`].

use axum::response::{Html, IntoResponse, Redirect, Response};
use serde_json::json;
use tera::{Context, Tera};

use crate::server::error::{AppError, ErrorPage};

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../../templates/base.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("error.html", include_str!("../../templates/error.html")),
    (
        "author_list.html",
        include_str!("../../templates/author_list.html"),
    ),
    (
        "author_detail.html",
        include_str!("../../templates/author_detail.html"),
    ),
    (
        "author_form.html",
        include_str!("../../templates/author_form.html"),
    ),
    (
        "author_delete.html",
        include_str!("../../templates/author_delete.html"),
    ),
    (
        "genre_list.html",
        include_str!("../../templates/genre_list.html"),
    ),
    (
        "genre_detail.html",
        include_str!("../../templates/genre_detail.html"),
    ),
    (
        "genre_form.html",
        include_str!("../../templates/genre_form.html"),
    ),
    (
        "genre_delete.html",
        include_str!("../../templates/genre_delete.html"),
    ),
    ("book_list.html", include_str!("../../templates/book_list.html")),
    (
        "book_detail.html",
        include_str!("../../templates/book_detail.html"),
    ),
    ("book_form.html", include_str!("../../templates/book_form.html")),
    (
        "book_delete.html",
        include_str!("../../templates/book_delete.html"),
    ),
];

/// A named template together with the data it is rendered with.
#[derive(Debug, Clone)]
pub struct View {
    pub template: &'static str,
    pub context: serde_json::Value,
}

impl View {
    pub fn new(template: &'static str, context: serde_json::Value) -> Self {
        Self { template, context }
    }
}

/// Result of a controller flow: either a page to render or a location to go to.
#[derive(Debug, Clone)]
pub enum Outcome {
    Render(View),
    Redirect(String),
}

impl Outcome {
    pub fn render(template: &'static str, context: serde_json::Value) -> Self {
        Self::Render(View::new(template, context))
    }

    pub fn redirect(location: impl Into<String>) -> Self {
        Self::Redirect(location.into())
    }
}

/// Registered templates.
pub struct Views {
    tera: Tera,
}

impl Views {
    /// Parses every embedded template.
    ///
    /// # Returns
    /// - `Ok(Views)` - All templates parsed and inheritance resolved
    /// - `Err(AppError::TemplateErr)` - A template failed to parse
    pub fn new() -> Result<Self, AppError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;

        Ok(Self { tera })
    }

    pub fn render(&self, view: &View) -> Result<String, tera::Error> {
        let context = Context::from_serialize(&view.context)?;

        self.tera.render(view.template, &context)
    }

    /// Converts an outcome into an HTTP response.
    ///
    /// Redirects use 303 See Other so that a POST is followed by a GET.
    pub fn respond(&self, outcome: Outcome) -> Result<Response, AppError> {
        match outcome {
            Outcome::Render(view) => Ok(Html(self.render(&view)?).into_response()),
            Outcome::Redirect(location) => Ok(Redirect::to(&location).into_response()),
        }
    }

    pub fn render_error(&self, page: &ErrorPage) -> Result<String, tera::Error> {
        self.render(&View::new(
            "error.html",
            json!({
                "title": "Error",
                "message": page.message,
                "status": page.status.as_u16(),
            }),
        ))
    }
}
