//! Server-rendered catalog of authors, genres, and books.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers extracting path ids and form bodies
//! - **Service Layer** (`service/`) - Validate, persist, and redirect flows per entity
//! - **Data Layer** (`data/`) - Persistence gateway traits with SeaORM and in-memory stores
//! - **Model Layer** (`model/`) - Domain records, form candidates, and view models
//! - **View Layer** (`view`) - Tera templates and outcome-to-response conversion
//! - **Error Layer** (`error/`) - Application error types and the error page middleware
//!
//! # Request Flow
//!
//! 1. **Router** matches the route and passes the request to a controller
//! 2. **Controller** extracts the id and form input and calls the service
//! 3. **Service** validates input, queries the gateway, and returns an `Outcome`
//! 4. **View** renders the outcome's template or issues a 303 redirect
//! 5. **Error middleware** renders the error page for any `AppError` response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod view;
