// SPDX-FileCopyrightText: 2026 Intervu Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weather lookup tool backed by an Open-Meteo style forecast endpoint.
//!
//! The base URL is injected from configuration so tests can point it at a
//! local mock server. A failed fetch becomes an error payload in the tool
//! result; it never aborts the agent turn.

use async_trait::async_trait;
use intervu_core::IntervuError;

use crate::tool::{Tool, ToolOutput};

pub struct WeatherTool {
    client: reqwest::Client,
    base_url: String,
}

impl WeatherTool {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Tool for WeatherTool {
    fn name(&self) -> &str {
        "get_weather"
    }

    fn description(&self) -> &str {
        "Get the current weather at a location"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "latitude": {
                    "type": "number",
                    "description": "Latitude of the location"
                },
                "longitude": {
                    "type": "number",
                    "description": "Longitude of the location"
                }
            },
            "required": ["latitude", "longitude"]
        })
    }

    async fn invoke(&self, input: serde_json::Value) -> Result<ToolOutput, IntervuError> {
        let latitude = match input["latitude"].as_f64() {
            Some(v) => v,
            None => return Ok(ToolOutput::error("missing required 'latitude' parameter")),
        };
        let longitude = match input["longitude"].as_f64() {
            Some(v) => v,
            None => return Ok(ToolOutput::error("missing required 'longitude' parameter")),
        };

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current", "temperature_2m".to_string()),
                ("hourly", "temperature_2m".to_string()),
                ("daily", "sunrise,sunset".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await;

        let response = match response {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "weather fetch failed");
                return Ok(ToolOutput::error(format!("weather request failed: {e}")));
            }
        };

        if !response.status().is_success() {
            return Ok(ToolOutput::error(format!(
                "weather service returned HTTP {}",
                response.status()
            )));
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => Ok(ToolOutput::ok(body)),
            Err(e) => Ok(ToolOutput::error(format!(
                "weather response was not valid JSON: {e}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn fetches_forecast_for_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current": { "temperature_2m": 18.3 }
            })))
            .mount(&server)
            .await;

        let tool = WeatherTool::new(server.uri());
        let output = tool
            .invoke(serde_json::json!({"latitude": 52.52, "longitude": 13.41}))
            .await
            .unwrap();
        assert!(!output.is_error);
        assert_eq!(output.content["current"]["temperature_2m"], 18.3);
    }

    #[tokio::test]
    async fn missing_coordinates_is_an_error_payload() {
        let tool = WeatherTool::new("http://localhost:1");
        let output = tool.invoke(serde_json::json!({})).await.unwrap();
        assert!(output.is_error);
    }

    #[tokio::test]
    async fn upstream_failure_is_an_error_payload_not_an_err() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let tool = WeatherTool::new(server.uri());
        let result = tool
            .invoke(serde_json::json!({"latitude": 1.0, "longitude": 2.0}))
            .await;
        let output = result.unwrap();
        assert!(output.is_error);
        assert!(output.content["error"].as_str().unwrap().contains("503"));
    }
}
