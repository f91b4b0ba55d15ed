pub type ApiUrl = String;
pub type CronSecret = String;

pub const API_URL_ENV: &str = "API_URL";
pub const CRON_SECRET_ENV: &str = "CRON_SECRET";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_CRON_SECRET: &str = "secret";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ApiData {
    pub base_url: ApiUrl,
    pub cron_secret: CronSecret,
}

impl ApiData {
    /// Reads the configuration from the environment once; everything
    /// deeper in the call path receives this value object instead of
    /// touching the environment itself.
    pub fn from_env() -> Self {
        Self {
            base_url: dotenv::var(API_URL_ENV).unwrap_or_else(|_| String::from(DEFAULT_API_URL)),
            cron_secret: dotenv::var(CRON_SECRET_ENV)
                .unwrap_or_else(|_| String::from(DEFAULT_CRON_SECRET)),
        }
    }
}

impl Default for ApiData {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_API_URL),
            cron_secret: String::from(DEFAULT_CRON_SECRET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    // defaults and overrides are checked in a single test fn because
    // the environment is process-global and tests run in parallel
    #[test]
    fn should_apply_the_defaults_and_the_env_overrides() {
        env::remove_var(API_URL_ENV);
        env::remove_var(CRON_SECRET_ENV);

        let api_data = ApiData::from_env();

        assert_eq!(api_data.base_url, DEFAULT_API_URL);
        assert_eq!(api_data.cron_secret, DEFAULT_CRON_SECRET);

        env::set_var(API_URL_ENV, "https://example.com");
        env::set_var(CRON_SECRET_ENV, "abc123");

        let api_data = ApiData::from_env();

        assert_eq!(api_data.base_url, "https://example.com");
        assert_eq!(api_data.cron_secret, "abc123");

        env::remove_var(API_URL_ENV);
        env::remove_var(CRON_SECRET_ENV);
    }
}
