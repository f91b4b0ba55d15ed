use anyhow::Result;
use base::requests::entities::HttpResponseData;

pub trait CronApi {
    fn check_health(&self) -> Result<bool>;
    fn trigger_renewal(&self) -> Result<HttpResponseData>;
}
