pub mod config;
pub mod error;
pub mod logging;

pub use self::config::*;
pub use self::error::*;
pub use self::logging::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 8083);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.reference.workbook_path, "hazard_code.xlsx");
    }

    #[test]
    fn test_error_handling() {
        let error = HazSheetError::validation("file", "only PDF uploads are accepted");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
        assert_eq!(error.http_status_code(), 400);
    }
}
