use crate::requests::entities::{HttpRequestData, HttpResponseData};
use anyhow::Result;

pub trait SyncHttpRequest {
    fn call(&self, req: HttpRequestData) -> Result<HttpResponseData>;
}
