#![allow(dead_code)]

//! Test infrastructure for kg-server API tests

use kg_classifier::{Classifier, ClassifierResult, ImageTensor, KneeClassifier};
use kg_server::AppState;

use std::io::Cursor;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

pub const BOUNDARY: &str = "kg-test-boundary";

/// Scores the VGG16 stub returns: class 2, "Mild"
pub const VGG16_SCORES: [f32; 5] = [0.05, 0.1, 0.7, 0.1, 0.05];
/// Scores the MobileNetV2 stub returns: class 4, "Severe"
pub const MOBILENET_SCORES: [f32; 5] = [0.0, 0.0, 0.1, 0.2, 0.7];

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    kg_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Returns fixed scores and counts how often it was asked
pub struct StubClassifier {
    name: &'static str,
    scores: Vec<f32>,
    calls: AtomicUsize,
}

impl StubClassifier {
    pub fn new(name: &'static str, scores: &[f32]) -> Self {
        Self {
            name,
            scores: scores.to_vec(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Classifier for StubClassifier {
    fn name(&self) -> &str {
        self.name
    }

    async fn predict(&self, _input: &ImageTensor) -> ClassifierResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.scores.clone())
    }
}

/// App state wired to stub classifiers and a throwaway upload directory
pub struct TestApp {
    pub state: AppState,
    pub vgg16: Arc<StubClassifier>,
    pub mobilenet_v2: Arc<StubClassifier>,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = create_test_pool().await;
        let upload_dir = TempDir::new().expect("Failed to create upload dir");

        let vgg16 = Arc::new(StubClassifier::new("vgg16-stub", &VGG16_SCORES));
        let mobilenet_v2 = Arc::new(StubClassifier::new("mobilenet-stub", &MOBILENET_SCORES));
        let classifier = Arc::new(KneeClassifier::new(
            vgg16.clone(),
            mobilenet_v2.clone(),
            32,
        ));

        let state = AppState {
            pool,
            classifier,
            upload_dir: upload_dir.path().to_path_buf(),
        };

        Self {
            state,
            vgg16,
            mobilenet_v2,
            upload_dir,
        }
    }

    pub fn router(&self) -> axum::Router {
        kg_server::build_router(self.state.clone())
    }

    pub fn uploaded_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.upload_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// Encode a solid-colour PNG
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = RgbImage::from_pixel(width, height, Rgb([120, 120, 120]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

/// Hand-assembled multipart/form-data body using [`BOUNDARY`]
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();

    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, bytes) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n",
                        name, filename
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(bytes);
            }
        }
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn submit_request(parts: &[Part<'_>]) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/submit")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap()
}

pub fn json_request(uri: &str, json: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
