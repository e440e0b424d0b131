//! 환경변수 기반 설정 모듈.

use std::net::SocketAddr;
use std::time::Duration;

/// API 서버 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩할 호스트 주소
    pub host: String,
    /// 바인딩할 포트
    pub port: u16,
    /// 응답 전 인공 지연 (밀리초, 0이면 비활성화)
    pub response_delay_ms: u64,
    /// 기동 시 데모 관심기업 시드 여부
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            response_delay_ms: 500,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// 환경변수에서 설정 로드.
    ///
    /// | 변수 | 기본값 | 설명 |
    /// |------|--------|------|
    /// | `API_HOST` | `127.0.0.1` | 바인딩 호스트 |
    /// | `API_PORT` | `8080` | 바인딩 포트 |
    /// | `RESPONSE_DELAY_MS` | `500` | 응답 전 지연 (0이면 끔) |
    /// | `ENABLE_SEED_DATA` | `true` | 데모 시드 여부 |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: std::env::var("API_HOST").unwrap_or(defaults.host),
            port: env_var_parse("API_PORT", defaults.port),
            response_delay_ms: env_var_parse("RESPONSE_DELAY_MS", defaults.response_delay_ms),
            seed_demo_data: env_var_bool("ENABLE_SEED_DATA", defaults.seed_demo_data),
        }
    }

    /// 바인딩할 소켓 주소
    ///
    /// # Errors
    /// `host:port` 조합이 유효한 주소가 아니면 `AddrParseError`를 반환합니다.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }

    /// 인공 지연을 `Duration`으로 반환.
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

/// 환경변수에서 값을 파싱 (없거나 파싱 실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// 환경변수에서 bool 값 파싱 ("true"/"1"은 참, "false"/"0"은 거짓)
fn env_var_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(value) => matches!(value.to_lowercase().as_str(), "true" | "1"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.response_delay_ms, 500);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_socket_addr_formats_host_and_port() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            ..ServerConfig::default()
        };

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_socket_addr_rejects_invalid_host() {
        let config = ServerConfig {
            host: "not-an-address".to_string(),
            ..ServerConfig::default()
        };

        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn test_response_delay_conversion() {
        let config = ServerConfig {
            response_delay_ms: 0,
            ..ServerConfig::default()
        };

        assert!(config.response_delay().is_zero());
        assert_eq!(ServerConfig::default().response_delay(), Duration::from_millis(500));
    }
}
