use std::time::Duration;

use anyhow::{Context, Result};

use base::requests::api::SyncHttpRequest;
use base::requests::entities::{HttpRequestData, HttpRequestMethod, HttpResponseData};

use crate::api::CronApi;
use crate::entities::ApiData;
use crate::helpers::{log_message, LogLevel};

pub const RENEW_SUBSCRIPTIONS_PATH: &str = "/cron/renew-subscriptions";
pub const HEALTH_PATH: &str = "/health";

pub const CRON_SECRET_HEADER: &str = "X-Cron-Secret";
const CONTENT_TYPE_HEADER: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

const RENEWAL_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);
const HEALTH_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub type LoggerTarget = String;

pub struct RenewalTriggerApi<R>
where
    R: SyncHttpRequest,
{
    api_data: ApiData,
    logger_target: Option<LoggerTarget>,
    request_api: R,
}

impl<R> RenewalTriggerApi<R>
where
    R: SyncHttpRequest,
{
    pub fn new(
        api_data: ApiData,
        logger_target: Option<LoggerTarget>,
        request_api: R,
    ) -> RenewalTriggerApi<R> {
        Self {
            api_data,
            logger_target,
            request_api,
        }
    }

    fn log(&self, message: &str, log_level: LogLevel) {
        log_message(message, log_level, self.logger_target.as_deref());
    }
}

impl<R> CronApi for RenewalTriggerApi<R>
where
    R: SyncHttpRequest,
{
    fn check_health(&self) -> Result<bool> {
        let url = format!("{}{}", self.api_data.base_url, HEALTH_PATH);

        self.log(
            &format!("checking the API health at {}", url),
            LogLevel::Info,
        );

        let req =
            HttpRequestData::new(HttpRequestMethod::Get, &url).with_timeout(HEALTH_REQUEST_TIMEOUT);

        match self.request_api.call(req) {
            Ok(response) if response.status_code == 200 => {
                self.log("the API is up and running", LogLevel::Info);
                Ok(true)
            }
            Ok(response) => {
                self.log(
                    &format!("the API returned a status {}", response.status_code),
                    LogLevel::Warn,
                );
                Ok(false)
            }
            Err(e) => {
                self.log(&format!("the API is unreachable: {:?}", e), LogLevel::Error);
                Ok(false)
            }
        }
    }

    fn trigger_renewal(&self) -> Result<HttpResponseData> {
        let url = format!("{}{}", self.api_data.base_url, RENEW_SUBSCRIPTIONS_PATH);

        self.log(&format!("triggering the renewal at {}", url), LogLevel::Info);

        let req = HttpRequestData::new(HttpRequestMethod::Post, &url)
            .with_header(CRON_SECRET_HEADER, &self.api_data.cron_secret)
            .with_header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
            .with_timeout(RENEWAL_REQUEST_TIMEOUT);

        let response = self
            .request_api
            .call(req)
            .context("an error occurred on triggering the renewal")?;

        match response.status_code {
            200 => self.log(
                &format!("the renewal succeeded: {}", response.body),
                LogLevel::Info,
            ),
            403 => self.log(
                &format!("forbidden: an invalid cron secret: {}", response.body),
                LogLevel::Error,
            ),
            status => self.log(
                &format!(
                    "the renewal failed with a status {}: {}",
                    status, response.body
                ),
                LogLevel::Error,
            ),
        }

        Ok(response)
    }
}
