//! Full lifecycle test against a live server over real HTTP.
//!
//! Boots the application router on an ephemeral port, then exercises every
//! client operation end-to-end: the same flow the browser UI performs.

use biblio_client::{ApiClient, ApiError, NewBook, NewUser};
use biblio_kernel::settings::Settings;

async fn start_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = biblio_app::app(&Settings::default());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/api")
}

#[tokio::test]
async fn lifecycle_over_real_http() {
    let base = start_server().await;
    let client = ApiClient::new(&base);

    // Fresh server: nothing registered.
    assert!(client.list_books().await.unwrap().is_empty());
    assert!(client.list_users().await.unwrap().is_empty());

    // Register a book and a user.
    let created = client
        .create_book(&NewBook {
            id: "b1".to_string(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "b1");
    assert!(created.available);

    let user = client
        .create_user(&NewUser {
            id: "u1".to_string(),
            name: "Ana".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(user.name, "Ana");

    // Borrow flips availability.
    let status = client.borrow("u1", "b1").await.unwrap();
    assert_eq!(status.status, "borrowed");
    let books = client.list_books().await.unwrap();
    assert_eq!(books.len(), 1);
    assert!(!books[0].available);

    // A second borrow fails; the raw server message is the error body.
    let err = client.borrow("u1", "b1").await.unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 409);
            assert_eq!(body, "book not available");
        }
        other => panic!("expected HTTP error, got: {other}"),
    }

    // Return restores availability.
    let status = client.return_book("u1", "b1").await.unwrap();
    assert_eq!(status.status, "returned");
    assert!(client.list_books().await.unwrap()[0].available);

    // Returning an available book fails.
    let err = client.return_book("u1", "b1").await.unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "loan not found");
        }
        other => panic!("expected HTTP error, got: {other}"),
    }

    // Search: substring hit, empty query identity, no match.
    let hits = client.search_books("dun").await.unwrap();
    assert_eq!(hits.len(), 1);
    let all = client.search_books("").await.unwrap();
    assert_eq!(all, client.list_books().await.unwrap());
    let none = client.search_books("tolstoy & sons").await.unwrap();
    assert!(none.is_empty());

    // Deletion clears both listings.
    let status = client.delete_book("b1").await.unwrap();
    assert_eq!(status.status, "deleted");
    assert!(client.list_books().await.unwrap().is_empty());

    let status = client.delete_user("u1").await.unwrap();
    assert_eq!(status.status, "deleted");
    assert!(client.list_users().await.unwrap().is_empty());
}

#[tokio::test]
async fn missing_entities_surface_server_messages() {
    let base = start_server().await;
    let client = ApiClient::new(&base);

    let err = client.delete_book("nope").await.unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "book not found");
        }
        other => panic!("expected HTTP error, got: {other}"),
    }

    let err = client.borrow("ghost", "nope").await.unwrap_err();
    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "user not found");
        }
        other => panic!("expected HTTP error, got: {other}"),
    }
}
