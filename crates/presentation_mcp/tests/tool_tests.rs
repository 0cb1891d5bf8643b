//! `get_forecast` tool tests against a mock NWS server

use std::sync::Arc;

use application::ForecastService;
use infrastructure::WeatherAdapter;
use integration_weather::WeatherConfig;
use presentation_mcp::{ForecastRequest, WeatherMcpServer};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Build the MCP server over the real adapter pointed at `mock_server`
///
/// # Panics
///
/// Panics if the HTTP client cannot be created.
fn create_server(mock_server: &MockServer) -> WeatherMcpServer {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
        ..Default::default()
    };
    #[allow(clippy::expect_used)]
    let adapter = Arc::new(WeatherAdapter::new(config).expect("Failed to create adapter"));
    WeatherMcpServer::new(ForecastService::new(adapter.clone(), adapter))
}

fn text_of(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.as_text().map(|t| t.text.clone()))
        .collect()
}

fn request(latitude: f64, longitude: f64) -> Parameters<ForecastRequest> {
    Parameters(ForecastRequest {
        latitude,
        longitude,
    })
}

async fn mount_linn_points(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/points/39.7456,-97.0892"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": { "gridId": "TOP", "gridX": 31, "gridY": 80 }
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn tool_returns_forecast_text() {
    let mock_server = MockServer::start().await;
    mount_linn_points(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/gridpoints/TOP/31,80/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "properties": { "periods": [
                {
                    "name": "This Afternoon",
                    "temperature": 75,
                    "temperatureUnit": "F",
                    "shortForecast": "Sunny",
                    "detailedForecast": "Sunny, with a high near 75."
                },
                {
                    "name": "Tonight",
                    "temperature": 52,
                    "temperatureUnit": "F",
                    "shortForecast": "Mostly Clear",
                    "detailedForecast": ""
                }
            ] }
        })))
        .mount(&mock_server)
        .await;

    let result = create_server(&mock_server)
        .get_forecast(request(39.7456, -97.0892))
        .await
        .expect("tool result");

    assert_eq!(result.is_error, Some(false));
    assert_eq!(
        text_of(&result),
        "This Afternoon:\nSunny, with a high near 75.\n---\n\nTonight:\nMostly Clear\n---"
    );
}

#[tokio::test]
async fn tool_flags_upstream_failure() {
    let mock_server = MockServer::start().await;
    mount_linn_points(&mock_server).await;
    Mock::given(method("GET"))
        .and(path("/gridpoints/TOP/31,80/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let result = create_server(&mock_server)
        .get_forecast(request(39.7456, -97.0892))
        .await
        .expect("tool result");

    assert_eq!(result.is_error, Some(true));
    assert_eq!(
        text_of(&result),
        "Unable to fetch forecast data: forecast endpoint returned HTTP 503"
    );
}

#[tokio::test]
async fn tool_passes_unresolvable_coordinates_upstream() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/points/123,0"))
        .respond_with(ResponseTemplate::new(400))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = create_server(&mock_server)
        .get_forecast(request(123.0, 0.0))
        .await
        .expect("tool result");

    assert_eq!(result.is_error, Some(true));
    assert!(text_of(&result).starts_with("Unable to resolve a forecast station"));
}
