//! End-to-end run of the AI client, sanitizer and output stage against a
//! mocked completion endpoint. Local file extraction is exercised by its
//! own unit tests; here the pipeline starts from already-extracted text.

use chartlift::domain::ports::Pipeline;
use chartlift::{ChartError, DocumentPipeline, GeminiClient, LocalStorage};
use httpmock::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

mod common {
    use chartlift::domain::ports::ConfigProvider;

    pub struct TestConfig {
        pub output_path: String,
    }

    impl ConfigProvider for TestConfig {
        fn api_base(&self) -> &str {
            "http://localhost"
        }

        fn api_key(&self) -> &str {
            "test-key"
        }

        fn model(&self) -> &str {
            "gemini-2.5-flash"
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }
    }
}

fn mock_model_response(server: &MockServer, text: &str) {
    let text = text.to_string();
    server.mock(move |when, then| {
        when.method(POST)
            .path("/v1beta/models/gemini-2.5-flash:generateContent");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "candidates": [{ "content": { "parts": [{ "text": text }] } }]
            }));
    });
}

#[tokio::test]
async fn test_interpret_and_load_against_mocked_endpoint() {
    let server = MockServer::start();
    mock_model_response(
        &server,
        "Here you go:\n{\"chartData\":[{\"Item\":\"Widget\",\"Price\":\"$10.50\"},{\"Item\":\"Gadget\",\"Price\":\"20\"}],\"nameKey\":\"Item\",\"dataKeys\":[\"Price\"]}",
    );

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let storage = LocalStorage::new(output_path.clone());
    let config = common::TestConfig {
        output_path: output_path.clone(),
    };
    let client = GeminiClient::new(server.base_url(), "test-key", "gemini-2.5-flash");
    let pipeline = DocumentPipeline::new(storage, config, client);

    let file = PathBuf::from("report.pdf");
    let record = pipeline
        .interpret(&file, "Item,Price\nWidget,$10.50\nGadget,20")
        .await
        .unwrap();
    let output = pipeline.load(&file, &record).await.unwrap();

    assert!(output.ends_with("report.chart.json"));

    let written = std::fs::read_to_string(temp_dir.path().join("report.chart.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["nameKey"], "Item");
    assert_eq!(value["dataKeys"], serde_json::json!(["Price"]));
    assert_eq!(value["chartData"][0]["Price"], serde_json::json!(10.5));
    assert_eq!(value["chartData"][1]["Price"], serde_json::json!(20));
}

#[tokio::test]
async fn test_no_data_response_surfaces_file_name() {
    let server = MockServer::start();
    mock_model_response(&server, "{\"chartData\": [], \"nameKey\": \"\", \"dataKeys\": []}");

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let pipeline = DocumentPipeline::new(
        LocalStorage::new(output_path.clone()),
        common::TestConfig { output_path },
        GeminiClient::new(server.base_url(), "test-key", "gemini-2.5-flash"),
    );

    let err = pipeline
        .interpret(&PathBuf::from("budget.xlsx"), "nothing tabular here")
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::NoChartableData { ref file } if file == "budget.xlsx"));
    assert!(err.user_friendly_message().contains("budget.xlsx"));
}

#[tokio::test]
async fn test_model_transport_failure_is_network_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST);
        then.status(503);
    });

    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let pipeline = DocumentPipeline::new(
        LocalStorage::new(output_path.clone()),
        common::TestConfig { output_path },
        GeminiClient::new(server.base_url(), "test-key", "gemini-2.5-flash"),
    );

    let err = pipeline
        .interpret(&PathBuf::from("report.pdf"), "Item,Price\nA,1")
        .await
        .unwrap_err();

    assert!(matches!(err, ChartError::Network(_)));
}
