//! Integration tests for user profiles and account deletion.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_get_profile_is_public() {
    let app = TestApp::new().await;
    let id = app.create_test_user("alice", "password123").await;

    let response = app
        .request("GET", &format!("/api/user/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["username"], "alice");
    assert_eq!(response.body["email"], "alice@test.com");
    assert!(response.body.get("password_hash").is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_get_missing_profile() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/user/999999", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_requires_session() {
    let app = TestApp::new().await;
    let id = app.create_test_user("bob", "password123").await;

    let response = app
        .multipart_request(
            "POST",
            &format!("/api/user/{id}"),
            &[("bio", "hello")],
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_other_user_is_forbidden() {
    let app = TestApp::new().await;
    app.create_test_user("carol", "password123").await;
    let other_id = app.create_test_user("dave", "password123").await;
    let cookie = app.login("carol", "password123").await;

    let response = app
        .multipart_request(
            "POST",
            &format!("/api/user/{other_id}"),
            &[("bio", "hijacked")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_own_profile() {
    let app = TestApp::new().await;
    let id = app.create_test_user("erin", "password123").await;
    let cookie = app.login("erin", "password123").await;

    let response = app
        .multipart_request(
            "POST",
            &format!("/api/user/{id}"),
            &[("bio", "movie buff")],
            Some(("photo", "me.png", b"portrait")),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    assert_eq!(response.body["message"], "Profile updated successfully!");
    assert_eq!(response.body["user"]["bio"], "movie buff");

    let photo = response.body["user"]["profile_photo"].as_str().unwrap();
    assert!(photo.starts_with("profile_pics/"));
    assert!(app.upload_exists(photo));
    assert!(
        response.body["user"]["profile_url"]
            .as_str()
            .unwrap()
            .contains("/static/profile_pics/")
    );

    // Username and email were untouched.
    assert_eq!(response.body["user"]["username"], "erin");
    assert_eq!(response.body["user"]["email"], "erin@test.com");

    // Replacing the photo removes the old file.
    let replaced = app
        .multipart_request(
            "POST",
            &format!("/api/user/{id}"),
            &[],
            Some(("photo", "me-v2.png", b"new portrait")),
            Some(&cookie),
        )
        .await;

    assert_eq!(replaced.status, StatusCode::OK);
    let new_photo = replaced.body["user"]["profile_photo"].as_str().unwrap();
    assert_ne!(photo, new_photo);
    assert!(app.upload_exists(new_photo));
    assert!(!app.upload_exists(photo));
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_update_to_taken_username_is_conflict() {
    let app = TestApp::new().await;
    app.create_test_user("frank", "password123").await;
    let id = app.create_test_user("grace", "password123").await;
    let cookie = app.login("grace", "password123").await;

    let response = app
        .multipart_request(
            "POST",
            &format!("/api/user/{id}"),
            &[("username", "frank")],
            None,
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_other_user_is_forbidden() {
    let app = TestApp::new().await;
    app.create_test_user("heidi", "password123").await;
    let other_id = app.create_test_user("ivan", "password123").await;
    let cookie = app.login("heidi", "password123").await;

    let response = app
        .request("DELETE", &format!("/api/user/{other_id}"), None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires PostgreSQL"]
async fn test_delete_own_account() {
    let app = TestApp::new().await;
    let id = app.create_test_user("judy", "password123").await;
    let cookie = app.login("judy", "password123").await;

    // Give the account a photo so deletion has a file to clean up.
    let updated = app
        .multipart_request(
            "POST",
            &format!("/api/user/{id}"),
            &[],
            Some(("photo", "judy.png", b"portrait")),
            Some(&cookie),
        )
        .await;
    let photo = updated.body["user"]["profile_photo"].as_str().unwrap();
    assert!(app.upload_exists(photo));

    // A second login gives the account more than one live session.
    let other_cookie = app.login("judy", "password123").await;

    let response = app
        .request("DELETE", &format!("/api/user/{id}"), None, Some(&cookie))
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    // Profile, photo file, and every session are gone.
    let profile = app
        .request("GET", &format!("/api/user/{id}"), None, None)
        .await;
    assert_eq!(profile.status, StatusCode::NOT_FOUND);
    assert!(!app.upload_exists(photo));

    for dead_cookie in [&cookie, &other_cookie] {
        let check = app
            .request("GET", "/api/check_auth", None, Some(dead_cookie))
            .await;
        assert_eq!(check.body["isAuthenticated"], false);
    }
}
