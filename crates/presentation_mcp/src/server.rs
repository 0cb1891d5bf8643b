//! MCP server exposing the `get_forecast` tool

use application::ForecastService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Deserialize;
use tracing::info;

/// Arguments of the `get_forecast` tool
#[derive(Debug, Clone, Copy, Deserialize, schemars::JsonSchema)]
pub struct ForecastRequest {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// MCP handler wrapping the forecast service
#[derive(Clone)]
pub struct WeatherMcpServer {
    service: ForecastService,
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for WeatherMcpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherMcpServer")
            .field("service", &self.service)
            .finish_non_exhaustive()
    }
}

#[tool_router]
impl WeatherMcpServer {
    /// Create a server answering with the given service
    #[must_use]
    pub fn new(service: ForecastService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    /// Forecast text for a coordinate pair
    ///
    /// Pipeline failures come back as tool content with `isError` set, never
    /// as protocol errors.
    #[tool(description = "Get the weather forecast for a location in the United States \
                          (National Weather Service coverage) given its latitude and \
                          longitude. Returns up to five forecast periods. Locations outside \
                          that coverage return an error message.")]
    pub async fn get_forecast(
        &self,
        Parameters(request): Parameters<ForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = self
            .service
            .forecast_text(request.latitude, request.longitude)
            .await;
        info!(
            lat = request.latitude,
            lon = request.longitude,
            is_error = outcome.is_err(),
            "Forecast tool call finished"
        );

        Ok(match outcome {
            Ok(text) => CallToolResult::success(vec![Content::text(text)]),
            Err(message) => CallToolResult::error(vec![Content::text(message)]),
        })
    }
}

#[tool_handler]
impl ServerHandler for WeatherMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "weather-mcp".to_string(),
                title: Some("Weather Forecast MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Weather forecasts from the US National Weather Service. Coverage is \
                 limited to the United States and its territories; other locations \
                 return an error. Call get_forecast with a latitude and longitude."
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
