use super::*;

/// Tests creating an author through the form and following the redirect.
///
/// Expected: 303 to the author's page, which shows "family, first"
#[tokio::test]
async fn creates_author_and_shows_detail() {
    let gateway = Gateway::in_memory();
    let app = app(&gateway);

    let created = send(
        &app,
        post_form(
            "/catalog/author/create",
            "first_name=Jane&family_name=Doe&date_of_birth=&date_of_death=",
        ),
    )
    .await;

    assert_eq!(created.status, StatusCode::SEE_OTHER);
    assert!(created.location().starts_with("/catalog/author/"));

    let detail = send(&app, get(created.location())).await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.contains("Doe, Jane"));
}

/// Tests submitting an author with empty names.
///
/// Expected: 200 OK with the form and both messages, nothing stored
#[tokio::test]
async fn invalid_author_rerenders_form() {
    let gateway = Gateway::in_memory();
    let app = app(&gateway);

    let response = send(
        &app,
        post_form("/catalog/author/create", "first_name=&family_name="),
    )
    .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("First name must be specified"));
    assert!(response.body.contains("Family name must be specified"));
    assert_eq!(gateway.authors.count().await.unwrap(), 0);
}

/// Tests the detail page of an author that does not exist.
///
/// Expected: 404 Not Found with the message on the error page
#[tokio::test]
async fn missing_author_is_not_found() {
    let gateway = Gateway::in_memory();
    let app = app(&gateway);

    let response = send(&app, get("/catalog/author/999")).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(response.body.contains("Author not found"));
}

/// Tests a non-numeric author id.
///
/// Expected: 400 Bad Request from the path extractor
#[tokio::test]
async fn non_numeric_id_is_rejected() {
    let gateway = Gateway::in_memory();
    let app = app(&gateway);

    let response = send(&app, get("/catalog/author/abc")).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

/// Tests deleting an author against the SQLite repositories.
///
/// Verifies that an author with a book is kept and listed as blocked, and that removing
/// the book lets the author be deleted.
///
/// Expected: 200 confirmation page first, then 303 to `/catalog/authors`
#[tokio::test]
async fn author_delete_is_blocked_until_books_are_removed() {
    use test_utils::{builder::TestBuilder, factory};

    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let author = factory::create_author(db).await.unwrap();
    let book = factory::book::BookFactory::new(db)
        .title("Blocking Book")
        .author(author.id)
        .build()
        .await
        .unwrap();

    let gateway = Gateway::from_database(db);
    let app = app(&gateway);
    let uri = format!("/catalog/author/{}/delete", author.id);
    let body = format!("authorid={}", author.id);

    let blocked = send(&app, post_form(&uri, &body)).await;
    assert_eq!(blocked.status, StatusCode::OK);
    assert!(blocked.body.contains("Blocking Book"));
    assert!(gateway.authors.find_by_id(author.id).await.unwrap().is_some());

    let book_delete = send(
        &app,
        post_form(
            &format!("/catalog/book/{}/delete", book.id),
            &format!("bookid={}", book.id),
        ),
    )
    .await;
    assert_eq!(book_delete.location(), "/catalog/books");

    let deleted = send(&app, post_form(&uri, &body)).await;
    assert_eq!(deleted.status, StatusCode::SEE_OTHER);
    assert_eq!(deleted.location(), "/catalog/authors");
    assert!(gateway.authors.find_by_id(author.id).await.unwrap().is_none());
}
