//! Typed proxy configuration for the W3C `proxy` capability.

use serde_json::Value;

use crate::capabilities::CapabilityMap;

/// Proxy selection modes, written to the wire as lowercase tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyType {
    Direct,
    Manual,
    Pac,
    Autodetect,
    System,
}

impl ProxyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Manual => "manual",
            Self::Pac => "pac",
            Self::Autodetect => "autodetect",
            Self::System => "system",
        }
    }
}

/// The W3C `proxy` capability. Only fields that are set appear on the
/// wire, with a fixed key order so payloads stay reproducible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Proxy {
    pub proxy_type: Option<ProxyType>,
    pub http_proxy: Option<String>,
    pub ssl_proxy: Option<String>,
    pub no_proxy: Option<Vec<String>>,
    pub proxy_autoconfig_url: Option<String>,
    pub socks_proxy: Option<String>,
    pub socks_version: Option<u8>,
}

impl Proxy {
    pub fn new(proxy_type: ProxyType) -> Self {
        Self {
            proxy_type: Some(proxy_type),
            ..Self::default()
        }
    }

    /// Manually configured proxy hosts.
    pub fn manual() -> Self {
        Self::new(ProxyType::Manual)
    }

    /// Proxy configured by an autoconfig script at `url`.
    pub fn pac(url: impl Into<String>) -> Self {
        Self {
            proxy_type: Some(ProxyType::Pac),
            proxy_autoconfig_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_http_proxy(mut self, host: impl Into<String>) -> Self {
        self.http_proxy = Some(host.into());
        self
    }

    pub fn with_ssl_proxy(mut self, host: impl Into<String>) -> Self {
        self.ssl_proxy = Some(host.into());
        self
    }

    pub fn with_no_proxy(mut self, hosts: Vec<String>) -> Self {
        self.no_proxy = Some(hosts);
        self
    }

    pub fn with_socks_proxy(mut self, host: impl Into<String>) -> Self {
        self.socks_proxy = Some(host.into());
        self
    }

    pub fn with_socks_version(mut self, version: u8) -> Self {
        self.socks_version = Some(version);
        self
    }

    /// Render as the value of the `proxy` capability.
    pub fn to_capability(&self) -> Value {
        let mut caps = CapabilityMap::new();
        if let Some(proxy_type) = self.proxy_type {
            caps.insert(
                "proxyType".to_string(),
                Value::String(proxy_type.as_str().to_string()),
            );
        }
        if let Some(host) = &self.http_proxy {
            caps.insert("httpProxy".to_string(), Value::String(host.clone()));
        }
        if let Some(host) = &self.ssl_proxy {
            caps.insert("sslProxy".to_string(), Value::String(host.clone()));
        }
        if let Some(hosts) = &self.no_proxy {
            let hosts = hosts.iter().map(|h| Value::String(h.clone())).collect();
            caps.insert("noProxy".to_string(), Value::Array(hosts));
        }
        if let Some(url) = &self.proxy_autoconfig_url {
            caps.insert("proxyAutoconfigUrl".to_string(), Value::String(url.clone()));
        }
        if let Some(host) = &self.socks_proxy {
            caps.insert("socksProxy".to_string(), Value::String(host.clone()));
        }
        if let Some(version) = self.socks_version {
            caps.insert("socksVersion".to_string(), Value::Number(version.into()));
        }
        Value::Object(caps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manual_proxy_capability() {
        let proxy = Proxy::manual().with_http_proxy("foo");
        assert_eq!(
            proxy.to_capability(),
            json!({ "proxyType": "manual", "httpProxy": "foo" })
        );
    }

    #[test]
    fn test_pac_proxy_capability() {
        let proxy = Proxy::pac("http://example.com/proxy.pac");
        assert_eq!(
            proxy.to_capability(),
            json!({
                "proxyType": "pac",
                "proxyAutoconfigUrl": "http://example.com/proxy.pac",
            })
        );
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        assert_eq!(Proxy::default().to_capability(), json!({}));
    }

    #[test]
    fn test_ssl_socks_and_bypass_fields() {
        let proxy = Proxy::manual()
            .with_ssl_proxy("localhost:8443")
            .with_socks_proxy("localhost:1080")
            .with_socks_version(5)
            .with_no_proxy(vec!["localhost".to_string(), "127.0.0.1".to_string()]);
        assert_eq!(
            proxy.to_capability(),
            json!({
                "proxyType": "manual",
                "sslProxy": "localhost:8443",
                "noProxy": ["localhost", "127.0.0.1"],
                "socksProxy": "localhost:1080",
                "socksVersion": 5,
            })
        );
    }

    #[test]
    fn test_type_tags_are_lowercase() {
        for (proxy_type, tag) in [
            (ProxyType::Direct, "direct"),
            (ProxyType::Manual, "manual"),
            (ProxyType::Pac, "pac"),
            (ProxyType::Autodetect, "autodetect"),
            (ProxyType::System, "system"),
        ] {
            assert_eq!(proxy_type.as_str(), tag);
        }
    }
}
