use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::{HttpRequestData, HttpRequestMethod, HttpResponseData};
use anyhow::{bail, Context, Result};
use ureq::Error;

#[derive(Default)]
pub struct UreqRequestApi {}

impl UreqRequestApi {
    pub fn new() -> Self {
        Default::default()
    }
}

impl SyncHttpRequest for UreqRequestApi {
    fn call(&self, req: HttpRequestData) -> Result<HttpResponseData> {
        let req_fn = match req.method {
            HttpRequestMethod::Get => ureq::get,
            HttpRequestMethod::Post => ureq::post,
        };

        let mut request = req_fn(&req.url);
        if let Some(headers) = &req.headers {
            for (header, value) in headers {
                request = request.set(header, value);
            }
        }

        if let Some(timeout) = req.timeout {
            request = request.timeout(timeout);
        }

        match request.call() {
            Ok(response) => Ok(HttpResponseData {
                status_code: response.status(),
                body: response
                    .into_string()
                    .context("an error occurred on reading the response body")?,
            }),
            // a non-2xx response still carries a body the caller wants to see,
            // so it is surfaced as a regular response rather than an error
            Err(Error::Status(code, response)) => Ok(HttpResponseData {
                status_code: code,
                body: response
                    .into_string()
                    .context("an error occurred on reading the error response body")?,
            }),
            Err(e) => bail!(e),
        }
    }
}
