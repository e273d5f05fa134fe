// file: tests/common/mod.rs
// description: in-process mock of the generation and speech backends
// reference: axum router bound to an ephemeral port

#![allow(dead_code)]

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const MODEL: &str = "test-model";

#[derive(Clone)]
struct MockBackend {
    science: Arc<Value>,
    speech_calls: Arc<AtomicUsize>,
}

pub fn science_items() -> Value {
    json!([
        {
            "type": "multiple-choice",
            "question": "What do plants need to make food?",
            "questionES": "¿Qué necesitan las plantas para hacer comida?",
            "options": ["Sunlight", "Sand", "Plastic", "Music"],
            "correctAnswer": 0,
            "explanation": "Plants use sunlight.",
            "explanationES": "Las plantas usan la luz del sol."
        },
        {
            "type": "true-false",
            "question": "Roots take in water.",
            "correctAnswer": "T"
        }
    ])
}

fn vocabulary_items() -> Value {
    json!([
        {
            "word": "seed",
            "spanish": "semilla",
            "sentenceEN": "The seed grows.",
            "sentenceES": "La semilla crece.",
            "options": [
                {"emoji": "🌱", "isCorrect": true},
                {"emoji": "🪨", "isCorrect": false},
                {"emoji": "🐟", "isCorrect": false},
                {"emoji": "☁️", "isCorrect": false}
            ]
        },
        {
            "word": "root",
            "spanish": "raíz",
            "sentenceEN": "Roots drink water.",
            "sentenceES": "Las raíces beben agua.",
            "options": [
                {"emoji": "🌰", "isCorrect": false},
                {"emoji": "🌿", "isCorrect": true},
                {"emoji": "🔥", "isCorrect": false},
                {"emoji": "🚗", "isCorrect": false}
            ]
        }
    ])
}

fn definition_items() -> Value {
    let options = |correct: usize| {
        ["seed", "root", "leaf", "flower"]
            .iter()
            .enumerate()
            .map(|(i, word)| json!({"word": word, "isCorrect": i == correct}))
            .collect::<Vec<_>>()
    };
    json!([
        {
            "question": "The small part of a plant that grows into a new plant.",
            "correctAnswer": "seed",
            "options": options(0)
        },
        {
            "question": "The part that takes in water from the soil.",
            "correctAnswer": "stem",
            "options": options(1)
        }
    ])
}

async fn tags() -> Json<Value> {
    Json(json!({"models": [{"name": MODEL}, {"name": "other:latest"}]}))
}

async fn generate(State(mock): State<MockBackend>, Json(body): Json<Value>) -> Json<Value> {
    let prompt = body["prompt"].as_str().unwrap_or_default();

    let items = if prompt.contains("SCIENCE QUIZ") {
        (*mock.science).clone()
    } else if prompt.contains("VOCABULARY CARDS") {
        vocabulary_items()
    } else if prompt.contains("DEFINITION QUIZ") {
        definition_items()
    } else {
        json!([])
    };

    let reply = format!("Here is the content:\n```json\n{}\n```", items);
    Json(json!({"model": MODEL, "response": reply, "done": true}))
}

async fn speech(State(mock): State<MockBackend>) -> Vec<u8> {
    mock.speech_calls.fetch_add(1, Ordering::SeqCst);
    b"ID3mock".to_vec()
}

pub async fn spawn_backend(science: Value) -> (String, Arc<AtomicUsize>) {
    let speech_calls = Arc::new(AtomicUsize::new(0));
    let mock = MockBackend {
        science: Arc::new(science),
        speech_calls: Arc::clone(&speech_calls),
    };

    let app = Router::new()
        .route("/api/tags", get(tags))
        .route("/api/generate", post(generate))
        .route("/v1/audio/speech", post(speech))
        .with_state(mock);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), speech_calls)
}

pub fn write_document(dir: &Path) -> PathBuf {
    let path = dir.join("plants.txt");
    fs::write(
        &path,
        "Plants need sunlight to make food.\r\nRoots take in water from the soil.\n\n\n\nSeeds grow into new plants.",
    )
    .unwrap();
    path
}
