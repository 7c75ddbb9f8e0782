//! Upload API integration tests.
//!
//! Run with: `cargo test -p vidshelf-api --test upload_test`

mod helpers;

use axum::http::StatusCode;
use helpers::fakes::{InMemoryVideoRepository, MemoryStorage, FAKE_BUCKET_URL};
use helpers::fixtures::{fake_video, video_form, video_form_with_field, MIB};
use axum_test::multipart::MultipartForm;
use helpers::{setup_local_storage_app, setup_test_app, setup_test_app_with};
use bytes::Bytes;
use serde_json::Value;

const UPLOAD: &str = "/api/upload";

#[tokio::test]
async fn test_upload_stores_object_then_record() {
    let app = setup_test_app();
    let data = fake_video(10 * MIB);

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("clip.mp4", "video/mp4", data.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["message"], "Video uploaded successfully!");
    let file_path = body["filePath"].as_str().unwrap().to_string();
    assert_eq!(body.as_object().unwrap().len(), 2);

    // One object under "{millis}_clip.mp4" with the declared type.
    let keys = app.storage.keys();
    assert_eq!(keys.len(), 1);
    let key = &keys[0];
    let (millis, name) = key.split_once('_').unwrap();
    assert!(millis.parse::<i64>().is_ok());
    assert_eq!(name, "clip.mp4");

    let object = app.storage.object(key).unwrap();
    assert_eq!(object.data, data);
    assert_eq!(object.content_type, "video/mp4");

    // The record points at the address the object store returned.
    assert_eq!(file_path, format!("{}/{}", FAKE_BUCKET_URL, key));
    let records = app.videos.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "clip.mp4");
    assert_eq!(records[0].url, file_path);
}

#[tokio::test]
async fn test_upload_without_video_field() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_text("title", "holiday");
    let response = app.client().post(UPLOAD).multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No video file uploaded.");
    assert_eq!(response.header("x-error-code"), "MISSING_FILE");
    assert_eq!(app.storage.put_calls(), 0);
    assert_eq!(app.videos.insert_calls(), 0);
}

#[tokio::test]
async fn test_upload_with_wrong_field_name() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form_with_field(
            "file",
            "clip.mp4",
            "video/mp4",
            fake_video(1024),
        ))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No video file uploaded.");
    assert_eq!(app.storage.put_calls(), 0);
}

#[tokio::test]
async fn test_upload_video_field_without_filename_is_not_a_file() {
    let app = setup_test_app();

    let form = MultipartForm::new().add_text("video", "not a file");
    let response = app.client().post(UPLOAD).multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No video file uploaded.");
}

#[tokio::test]
async fn test_upload_without_multipart_body() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(UPLOAD)
        .json(&serde_json::json!({ "video": "clip.mp4" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "No video file uploaded.");
    assert_eq!(app.storage.put_calls(), 0);
}

#[tokio::test]
async fn test_upload_malformed_multipart_is_client_error() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(UPLOAD)
        .content_type("multipart/form-data; boundary=vidshelf-boundary")
        .bytes(Bytes::from_static(b"--vidshelf-boundary\r\nthis is not a part header"))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(app.storage.put_calls(), 0);
    assert_eq!(app.videos.insert_calls(), 0);
}

#[tokio::test]
async fn test_upload_rejects_disallowed_content_types() {
    let app = setup_test_app();

    for (file_name, mime_type) in [
        ("doc.pdf", "application/pdf"),
        ("clip.mov", "video/quicktime"),
        ("clip.mkv", "video/x-matroska"),
        ("image.png", "image/png"),
    ] {
        let response = app
            .client()
            .post(UPLOAD)
            .multipart(video_form(file_name, mime_type, fake_video(1024)))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", mime_type);
        assert_eq!(
            response.text(),
            "Invalid file type. Only MP4, MKV, and AVI are allowed."
        );
    }

    assert_eq!(app.storage.put_calls(), 0);
    assert_eq!(app.videos.insert_calls(), 0);
}

#[tokio::test]
async fn test_upload_accepts_every_allowed_type() {
    let app = setup_test_app();

    for (file_name, mime_type) in [
        ("a.mp4", "video/mp4"),
        ("b.mkv", "video/mkv"),
        ("c.avi", "video/avi"),
    ] {
        let response = app
            .client()
            .post(UPLOAD)
            .multipart(video_form(file_name, mime_type, fake_video(1024)))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK, "{}", mime_type);
    }

    assert_eq!(app.storage.put_calls(), 3);
    assert_eq!(app.videos.records().len(), 3);
}

#[tokio::test]
async fn test_upload_over_default_limit_is_rejected() {
    let app = setup_test_app();

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("huge.mkv", "video/mkv", fake_video(60 * MIB)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "File size exceeds 50MB limit.");
    assert_eq!(app.storage.put_calls(), 0);
    assert_eq!(app.videos.insert_calls(), 0);
}

#[tokio::test]
async fn test_upload_size_ceiling_is_inclusive() {
    let app = setup_test_app_with(
        &[("MAX_UPLOAD_SIZE_MB", "1")],
        MemoryStorage::new(),
        InMemoryVideoRepository::new(),
    );

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("exact.mp4", "video/mp4", fake_video(MIB)))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("over.mp4", "video/mp4", fake_video(MIB + 1)))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "File size exceeds 1MB limit.");

    assert_eq!(app.storage.put_calls(), 1);
    assert_eq!(app.videos.records().len(), 1);
}

#[tokio::test]
async fn test_upload_over_request_body_limit_reports_size_ceiling() {
    // Default body limit is four times the ceiling: 4 MiB here.
    let app = setup_test_app_with(
        &[("MAX_UPLOAD_SIZE_MB", "1")],
        MemoryStorage::new(),
        InMemoryVideoRepository::new(),
    );

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("huge.mkv", "video/mkv", fake_video(5 * MIB)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "File size exceeds 1MB limit.");
    assert_eq!(app.storage.put_calls(), 0);
    assert_eq!(app.videos.insert_calls(), 0);
}

#[tokio::test]
async fn test_upload_over_explicit_request_body_limit() {
    let app = setup_test_app_with(
        &[("MAX_UPLOAD_SIZE_MB", "1"), ("MAX_REQUEST_BODY_MB", "2")],
        MemoryStorage::new(),
        InMemoryVideoRepository::new(),
    );

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("huge.avi", "video/avi", fake_video(3 * MIB)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.text(), "File size exceeds 1MB limit.");
    assert_eq!(app.storage.put_calls(), 0);
}

#[tokio::test]
async fn test_type_is_checked_before_size() {
    let app = setup_test_app_with(
        &[("MAX_UPLOAD_SIZE_MB", "1")],
        MemoryStorage::new(),
        InMemoryVideoRepository::new(),
    );

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("big.pdf", "application/pdf", fake_video(2 * MIB)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.text(),
        "Invalid file type. Only MP4, MKV, and AVI are allowed."
    );
}

#[tokio::test]
async fn test_object_store_failure_writes_no_record() {
    let app = setup_test_app_with(
        &[],
        MemoryStorage::failing(),
        InMemoryVideoRepository::new(),
    );

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("clip.mp4", "video/mp4", fake_video(1024)))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Error uploading video to S3.");
    assert_eq!(app.storage.put_calls(), 1);
    assert_eq!(app.videos.insert_calls(), 0);

    let listing: Vec<Value> = app.client().get("/api/videos").await.json();
    assert!(listing.is_empty());
}

#[tokio::test]
async fn test_metadata_failure_leaves_object_in_place() {
    let app = setup_test_app_with(
        &[],
        MemoryStorage::new(),
        InMemoryVideoRepository::failing_writes(),
    );
    let data = fake_video(2048);

    let response = app
        .client()
        .post(UPLOAD)
        .multipart(video_form("clip.mp4", "video/mp4", data.clone()))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.text(), "Failed to save video metadata.");
    assert_eq!(app.videos.insert_calls(), 1);

    let keys = app.storage.keys();
    assert_eq!(keys.len(), 1);
    assert_eq!(app.storage.object(&keys[0]).unwrap().data, data);
}

#[tokio::test]
async fn test_same_filename_uploaded_twice_creates_two_records() {
    let app = setup_test_app();

    for _ in 0..2 {
        let response = app
            .client()
            .post(UPLOAD)
            .multipart(video_form("clip.mp4", "video/mp4", fake_video(16)))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let records = app.videos.records();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.name == "clip.mp4"));
}

#[tokio::test]
async fn test_local_storage_upload_is_served_back() {
    let (server, videos, dir) = setup_local_storage_app().await;
    let data = fake_video(4096);

    let response = server
        .post(UPLOAD)
        .multipart(video_form("local.avi", "video/avi", data.clone()))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let file_path = body["filePath"].as_str().unwrap();
    let path = file_path
        .strip_prefix("http://localhost:5000")
        .expect("local URL uses the configured base");
    assert!(path.starts_with("/uploads/"));

    let key = path.trim_start_matches("/uploads/");
    assert_eq!(std::fs::read(dir.path().join(key)).unwrap(), data);

    let served = server.get(path).await;
    assert_eq!(served.status_code(), StatusCode::OK);
    assert_eq!(served.as_bytes(), &data);

    assert_eq!(videos.records()[0].url, file_path);
}
