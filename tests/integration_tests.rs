//! Integration tests for the MedNutro landing service
//!
//! These tests run the HTTP surface against a stubbed Gemini endpoint and
//! exercise the localization store end to end.

use mednutro_landing::{
    config::Config,
    encoding,
    gemini::{GeminiClient, UNAVAILABLE_FALLBACK},
    i18n::{self, Catalog, Language, LanguageStore, StoreError},
    server::{self, AppState, LabResponse, LanguageBody},
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ==================== Test Helpers ====================

const IMAGE_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";
const TEXT_PATH: &str = "/models/gemini-3-flash-preview:generateContent";
const TEST_API_KEY: &str = "test-gemini-key";

/// Start the app on an ephemeral port, pointed at `gemini_url`
async fn spawn_app(gemini_url: &str) -> String {
    let config = Config::with_api_url(gemini_url, TEST_API_KEY);
    let app = server::router(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has an address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

async fn set_language(client: &reqwest::Client, base: &str, code: &str) -> reqwest::Response {
    client
        .put(format!("{}/api/language", base))
        .json(&json!({ "language": code }))
        .send()
        .await
        .expect("Request failed")
}

async fn get_json(client: &reqwest::Client, url: String) -> Value {
    client
        .get(url)
        .send()
        .await
        .expect("Request failed")
        .json()
        .await
        .expect("Body should be JSON")
}

async fn mount_failing_gemini(server: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(server)
        .await;
}

// ==================== Localization Tests ====================

#[tokio::test]
async fn test_second_language_origin_label_end_to_end() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    let response = set_language(&client, &base, "CN").await;
    assert!(response.status().is_success());
    let body: LanguageBody = response.json().await.expect("Should parse");
    assert_eq!(body.language, Language::Cn);

    let value = get_json(&client, format!("{}/api/t/nav.origin", base)).await;
    assert_eq!(value["value"], "品牌起源");
    assert_ne!(value["value"], "Origin");
}

#[tokio::test]
async fn test_default_language_is_english() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    let value = get_json(&client, format!("{}/api/language", base)).await;
    assert_eq!(value["language"], "EN");

    let value = get_json(&client, format!("{}/api/t/hero.cta", base)).await;
    assert_eq!(value["value"], "Explore The Science");
}

#[tokio::test]
async fn test_missing_key_is_returned_verbatim() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    set_language(&client, &base, "HK").await;
    let value = get_json(&client, format!("{}/api/t/hero.not_a_key", base)).await;
    assert_eq!(value["key"], "hero.not_a_key");
    assert_eq!(value["value"], "hero.not_a_key");
}

#[tokio::test]
async fn test_unknown_language_is_rejected_and_selection_kept() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    set_language(&client, &base, "HK").await;
    let response = set_language(&client, &base, "FR").await;
    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);

    let value = get_json(&client, format!("{}/api/language", base)).await;
    assert_eq!(value["language"], "HK");
}

#[tokio::test]
async fn test_languages_listing() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    let value = get_json(&client, format!("{}/api/languages", base)).await;
    assert_eq!(value["active"], "EN");
    let codes: Vec<_> = value["languages"]
        .as_array()
        .expect("Should be an array")
        .iter()
        .map(|lang| lang["code"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(codes, vec!["EN", "CN", "HK"]);
}

#[tokio::test]
async fn test_dictionary_and_page_follow_active_language() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    set_language(&client, &base, "hk").await;

    let dictionary = get_json(&client, format!("{}/api/dictionary", base)).await;
    let expected_len = Catalog::global()
        .dictionary(Language::Hk)
        .map(|d| d.len())
        .unwrap_or_default();
    assert_eq!(dictionary.as_object().map(|o| o.len()), Some(expected_len));
    assert_eq!(dictionary["footer.subscribe"], "訂閱");

    let page = get_json(&client, format!("{}/api/page", base)).await;
    assert_eq!(page["language"], "HK");
    assert_eq!(page["html_lang"], "zh-HK");
    assert_eq!(page["global"]["title"], "環球引擎");
}

#[tokio::test]
async fn test_health() {
    let gemini = MockServer::start().await;
    let base = spawn_app(&gemini.uri()).await;

    let body = reqwest::get(format!("{}/health", base))
        .await
        .expect("Request failed")
        .text()
        .await
        .expect("Body should be text");
    assert_eq!(body, "ok");
}

// ==================== AI Lab Tests ====================

#[tokio::test]
async fn test_edit_image_returns_png_data_uri() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgoAAAANSUhEUg==" } }
            ]}}]
        })))
        .expect(1)
        .mount(&gemini)
        .await;

    let base = spawn_app(&gemini.uri()).await;
    let image = encoding::to_data_uri("image/jpeg", &encoding::encode_bytes_to_base64(b"jpeg"));

    let response = reqwest::Client::new()
        .post(format!("{}/api/lab/edit-image", base))
        .json(&json!({ "image": image, "instruction": "make it blue" }))
        .send()
        .await
        .expect("Request failed");

    assert!(response.status().is_success());
    let body: LabResponse = response.json().await.expect("Should parse");
    assert_eq!(body.result, "data:image/png;base64,iVBORw0KGgoAAAANSUhEUg==");
}

#[tokio::test]
async fn test_failing_gemini_chat_absorbs_and_edit_reports_localized_error() {
    let gemini = MockServer::start().await;
    mount_failing_gemini(&gemini).await;

    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{}/api/lab/ask", base))
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .expect("Request failed");
    assert!(response.status().is_success());
    let body: LabResponse = response.json().await.expect("Should parse");
    assert_eq!(body.result, UNAVAILABLE_FALLBACK);

    set_language(&client, &base, "HK").await;
    let response = client
        .post(format!("{}/api/lab/edit-image", base))
        .json(&json!({ "image": "QUJD", "instruction": "x" }))
        .send()
        .await
        .expect("Request failed");
    assert_eq!(response.status(), reqwest::StatusCode::BAD_GATEWAY);
    let body: Value = response.json().await.expect("Should parse");
    assert_eq!(body["error"], "圖片編輯失敗，請確保描述清晰。");
}

#[tokio::test]
async fn test_empty_prompt_is_bad_request() {
    let gemini = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&gemini)
        .await;

    let base = spawn_app(&gemini.uri()).await;
    let response = reqwest::Client::new()
        .post(format!("{}/api/lab/ask", base))
        .json(&json!({ "prompt": "" }))
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.expect("Should parse");
    assert_eq!(body["error"], "Please provide an image and a prompt.");
}

#[tokio::test]
async fn test_metrics_count_remote_calls() {
    let gemini = MockServer::start().await;
    mount_failing_gemini(&gemini).await;

    let base = spawn_app(&gemini.uri()).await;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/api/lab/ask", base))
        .json(&json!({ "prompt": "hello" }))
        .send()
        .await
        .expect("Request failed");

    let metrics = get_json(&client, format!("{}/api/metrics", base)).await;
    assert!(metrics["remote_calls"].as_u64().unwrap_or_default() >= 1);
    assert!(metrics["remote_failures"].as_u64().unwrap_or_default() >= 1);
}

// ==================== Library-Level Tests ====================

#[test]
fn test_store_outside_scope_is_a_hard_error() {
    assert_eq!(i18n::t("nav.origin"), Err(StoreError::NotInitialized));
}

#[test]
fn test_round_trip_switch_preserves_every_translation() {
    let store = LanguageStore::new(Language::Hk);
    store.clone().sync_scope(|| {
        let keys: Vec<&str> = Catalog::global()
            .dictionary(Language::Hk)
            .map(|d| d.keys().copied().collect())
            .unwrap_or_default();

        let before: Vec<String> = keys.iter().map(|k| i18n::t(k).map(str::to_string)).collect::<Result<_, _>>()?;
        i18n::set_active_language(Language::En)?;
        i18n::set_active_language(Language::Hk)?;
        let after: Vec<String> = keys.iter().map(|k| i18n::t(k).map(str::to_string)).collect::<Result<_, _>>()?;

        assert_eq!(before, after);
        Ok::<_, StoreError>(())
    })
    .expect("Store should be in scope");
}

#[tokio::test]
async fn test_client_against_failing_stub_is_asymmetric() {
    let gemini = MockServer::start().await;
    mount_failing_gemini(&gemini).await;

    let client = GeminiClient::new(&Config::with_api_url(&gemini.uri(), TEST_API_KEY));
    assert_eq!(client.ask_text("hello").await, UNAVAILABLE_FALLBACK);
    assert!(client.edit_image("QUJD", "x").await.is_err());
}
