//! Service layer for the catalog flows.
//!
//! Each entity service implements the same request flows on top of the persistence
//! gateway: list, detail, create, delete, and update. Services validate and persist but do
//! not build HTTP responses; every flow returns an [`Outcome`](crate::server::view::Outcome)
//! that the controller hands to the view renderer.
//!
//! Validation failures are data, not errors. A flow that finds violations returns the form
//! view again with the candidate and the ordered list of messages.

pub mod author;
pub mod book;
pub mod catalog;
pub mod genre;

use crate::server::{error::AppError, util::parse::parse_id};

/// Resolves the id a delete confirmation acts on.
///
/// The route id is authoritative. A body id that is present must name the same record.
///
/// # Returns
/// - `Ok(id)` - The route id
/// - `Err(AppError::BadRequest)` - The body id is not a number or differs from the route id
pub(crate) fn delete_target(route_id: i32, body_id: Option<&str>) -> Result<i32, AppError> {
    let Some(raw) = body_id.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(route_id);
    };

    match parse_id(raw) {
        Some(id) if id == route_id => Ok(route_id),
        _ => Err(AppError::BadRequest(format!(
            "Delete target {} does not match {}",
            raw, route_id
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_missing_or_matching_body_id() {
        assert_eq!(delete_target(7, None).unwrap(), 7);
        assert_eq!(delete_target(7, Some("")).unwrap(), 7);
        assert_eq!(delete_target(7, Some(" 7 ")).unwrap(), 7);
    }

    #[test]
    fn rejects_mismatched_body_id() {
        assert!(matches!(
            delete_target(7, Some("8")),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            delete_target(7, Some("seven")),
            Err(AppError::BadRequest(_))
        ));
    }
}
