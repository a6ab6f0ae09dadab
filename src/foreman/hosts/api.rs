//! Host API operations

use crate::config::api;
use crate::error::Result;
use crate::foreman::ForemanClient;

use super::models::{Host, HostsResponse};

impl ForemanClient {
    /// Get all hosts of one environment in a single large-page request.
    ///
    /// The request URL is built by concatenating the configured base URL,
    /// the environment ID and the fixed hosts suffix. There is no
    /// pagination loop.
    pub async fn get_hosts(&self, environment_id: &str) -> Result<Vec<Host>> {
        let url = format!(
            "{}{}/hosts?per_page={}",
            self.base_url(),
            environment_id,
            api::HOSTS_PER_PAGE
        );

        let context = format!("hosts for environment '{}'", environment_id);
        let response: HostsResponse = self.get_json(&url, &context).await?;
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ForemanError;
    use crate::foreman::ForemanClient;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_hosts_success() {
        let mock_server = MockServer::start().await;
        let base_url = format!("{}/api/environments/", mock_server.uri());
        let client = ForemanClient::test_client(&base_url);

        Mock::given(method("GET"))
            .and(path("/api/environments/2/hosts"))
            .and(query_param("per_page", "100000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "results": [
                    {"hostgroup_title": "web", "name": "h1"},
                    {"hostgroup_title": "db", "name": "h2"},
                    {"hostgroup_title": "web", "name": "h3"}
                ]
            })))
            .mount(&mock_server)
            .await;

        let hosts = client.get_hosts("2").await.unwrap();
        assert_eq!(hosts.len(), 3);
        assert_eq!(hosts[0].name, "h1");
        assert_eq!(hosts[2].hostgroup_title, "web");
    }

    #[tokio::test]
    async fn test_get_hosts_empty_results() {
        let mock_server = MockServer::start().await;
        let base_url = format!("{}/api/environments/", mock_server.uri());
        let client = ForemanClient::test_client(&base_url);

        Mock::given(method("GET"))
            .and(path("/api/environments/9/hosts"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"results": []})),
            )
            .mount(&mock_server)
            .await;

        let hosts = client.get_hosts("9").await.unwrap();
        assert!(hosts.is_empty());
    }

    #[tokio::test]
    async fn test_get_hosts_not_found() {
        let mock_server = MockServer::start().await;
        let base_url = format!("{}/api/environments/", mock_server.uri());
        let client = ForemanClient::test_client(&base_url);

        Mock::given(method("GET"))
            .and(path("/api/environments/99/hosts"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = client.get_hosts("99").await;
        match result {
            Err(ForemanError::HttpStatus { status, context }) => {
                assert_eq!(status, 404);
                assert!(context.contains("99"));
            }
            _ => panic!("Expected ForemanError::HttpStatus"),
        }
    }
}
