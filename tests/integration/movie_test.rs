//! Integration tests for the movie catalog.

use http::StatusCode;

use crate::helpers::TestApp;

async fn logged_in_app() -> (TestApp, String) {
    let app = TestApp::new().await;
    app.create_test_user("curator", "password123").await;
    let cookie = app.login("curator", "password123").await;
    (app, cookie)
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_requires_session() {
    let app = TestApp::new().await;

    let response = app
        .multipart_request("POST", "/api/movies", &[("title", "Alien")], None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Authentication required. Please log in."
    );
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_and_fetch_movie() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[
                ("title", "Alien"),
                ("genre", "Horror"),
                ("release_year", "1979"),
                ("rating", "9"),
            ],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    assert_eq!(response.body["message"], "Movie created successfully!");
    assert_eq!(response.body["movie"]["title"], "Alien");
    assert_eq!(response.body["movie"]["release_year"], 1979);
    let id = response.body["movie"]["id"].as_i64().unwrap();

    // Reads are public.
    let detail = app
        .request("GET", &format!("/api/movies/{id}"), None, None)
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert_eq!(detail.body["rating"], 9);

    let list = app.request("GET", "/api/movies", None, None).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_list_is_ordered_by_title() {
    let (app, cookie) = logged_in_app().await;

    for title in ["Zodiac", "Alien", "Memento"] {
        let response = app
            .multipart_request(
                "POST",
                "/api/movies",
                &[("title", title)],
                None,
                Some(&cookie),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let list = app.request("GET", "/api/movies", None, None).await;
    let titles: Vec<&str> = list
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect();

    assert_eq!(titles, ["Alien", "Memento", "Zodiac"]);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_without_title() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("genre", "Horror")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Title is required");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_create_rating_out_of_range() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien"), ("rating", "11")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Rating must be between 1 and 10");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_non_digit_year_becomes_null() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien"), ("release_year", "nineteen79")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["movie"]["release_year"].is_null());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_partial_update_keeps_other_fields() {
    let (app, cookie) = logged_in_app().await;

    let created = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien"), ("genre", "Horror"), ("rating", "9")],
            None,
            Some(&cookie),
        )
        .await;
    let id = created.body["movie"]["id"].as_i64().unwrap();

    let updated = app
        .multipart_request(
            "POST",
            &format!("/api/movies/{id}"),
            &[("genre", "Sci-Fi")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK, "{:?}", updated.body);
    assert_eq!(updated.body["message"], "Movie updated successfully!");
    assert_eq!(updated.body["movie"]["genre"], "Sci-Fi");
    assert_eq!(updated.body["movie"]["title"], "Alien");
    assert_eq!(updated.body["movie"]["rating"], 9);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_missing_movie() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .multipart_request(
            "POST",
            "/api/movies/999999",
            &[("genre", "Sci-Fi")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Movie not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_poster_upload_and_replacement() {
    let (app, cookie) = logged_in_app().await;

    let created = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien")],
            Some(("poster", "alien.jpg", b"first poster")),
            Some(&cookie),
        )
        .await;

    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let first_path = created.body["movie"]["poster_path"].as_str().unwrap();
    assert!(first_path.starts_with("postersMovie/"));
    assert!(first_path.ends_with(".jpg"));
    assert!(
        created.body["movie"]["poster_url"]
            .as_str()
            .unwrap()
            .contains("/static/postersMovie/")
    );

    let id = created.body["movie"]["id"].as_i64().unwrap();
    assert!(app.upload_exists(first_path));

    // Replacing the poster stores a new file and removes the old one.
    let updated = app
        .multipart_request(
            "POST",
            &format!("/api/movies/{id}"),
            &[],
            Some(("poster", "alien-v2.png", b"second poster")),
            Some(&cookie),
        )
        .await;

    assert_eq!(updated.status, StatusCode::OK);
    let second_path = updated.body["movie"]["poster_path"].as_str().unwrap();
    assert_ne!(first_path, second_path);
    assert!(second_path.ends_with(".png"));
    assert!(app.upload_exists(second_path));
    assert!(!app.upload_exists(first_path));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_movie() {
    let (app, cookie) = logged_in_app().await;

    let created = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien")],
            Some(("poster", "alien.jpg", b"poster bytes")),
            Some(&cookie),
        )
        .await;
    let id = created.body["movie"]["id"].as_i64().unwrap();
    let poster_path = created.body["movie"]["poster_path"].as_str().unwrap();
    assert!(app.upload_exists(poster_path));

    let response = app
        .request("DELETE", &format!("/api/movies/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let detail = app
        .request("GET", &format!("/api/movies/{id}"), None, None)
        .await;
    assert_eq!(detail.status, StatusCode::NOT_FOUND);

    // The poster file went with the row.
    assert!(!app.upload_exists(poster_path));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_nonexistent_movie() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .request("DELETE", "/api/movies/424242", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Movie not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_non_numeric_id_gets_structured_error() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/movies/not-a-number", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].is_string());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_duplicate_title_is_conflict() {
    let (app, cookie) = logged_in_app().await;

    let first = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien")],
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(first.status, StatusCode::CREATED);

    let second = app
        .multipart_request(
            "POST",
            "/api/movies",
            &[("title", "Alien")],
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(second.status, StatusCode::CONFLICT);
}
