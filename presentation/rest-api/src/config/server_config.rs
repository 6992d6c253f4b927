use super::{env_lookup, var_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub ip: String,
    pub port: String,
}

impl ServerConfig {
    /// Load server configuration from environment variables
    ///
    /// Environment variables:
    /// - HOST: IP address to bind (default: "127.0.0.1")
    /// - PORT: Port to bind (default: "8080")
    pub fn from_env() -> Self {
        Self::from_lookup(&env_lookup)
    }

    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let ip = var_or(lookup, "HOST", "127.0.0.1");
        let port = var_or(lookup, "PORT", "8080");

        Self { ip, port }
    }

    /// Get the bind address as "ip:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.ip, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_bind_address_from_ip_and_port() {
        // Arrange
        let config = ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: "8080".to_string(),
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_read_host_and_port_when_set() {
        // Arrange
        let lookup = |name: &str| match name {
            "HOST" => Some("0.0.0.0".to_string()),
            "PORT" => Some("3000".to_string()),
            _ => None,
        };

        // Act
        let config = ServerConfig::from_lookup(&lookup);

        // Assert
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn should_fall_back_to_defaults_when_unset() {
        let config = ServerConfig::from_lookup(&|_: &str| None);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
