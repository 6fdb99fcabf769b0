//! HTTP request handlers.
//!
//! Handlers extract the path id and form body, hand them to the entity service, and render
//! the returned outcome. They hold no catalog logic of their own.

pub mod author;
pub mod book;
pub mod catalog;
pub mod genre;

#[cfg(test)]
mod test;
