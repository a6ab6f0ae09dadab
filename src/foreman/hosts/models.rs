//! Host data models

use serde::Deserialize;

/// Response wrapper for the per-environment hosts endpoint
#[derive(Deserialize, Debug)]
pub struct HostsResponse {
    pub results: Vec<Host>,
}

/// One host in an environment, already a member of a Foreman host group
#[derive(Deserialize, Debug, Clone)]
pub struct Host {
    pub hostgroup_title: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_deserialization() {
        let json = r#"{"hostgroup_title": "web/frontend", "name": "web01.example.com"}"#;
        let host: Host = serde_json::from_str(json).unwrap();
        assert_eq!(host.hostgroup_title, "web/frontend");
        assert_eq!(host.name, "web01.example.com");
    }

    #[test]
    fn test_hosts_response_deserialization() {
        let json = r#"{
            "results": [
                {"hostgroup_title": "web", "name": "h1"},
                {"hostgroup_title": "db", "name": "h2"}
            ]
        }"#;

        let response: HostsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].hostgroup_title, "db");
    }

    #[test]
    fn test_hosts_response_ignores_extra_fields() {
        let json = r#"{
            "total": 1,
            "per_page": 100000,
            "results": [{"hostgroup_title": "web", "name": "h1", "ip": "10.0.0.1"}]
        }"#;

        let response: HostsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 1);
    }

    #[test]
    fn test_hosts_response_missing_results_fails() {
        assert!(serde_json::from_str::<HostsResponse>(r#"{"total": 0}"#).is_err());
    }
}
