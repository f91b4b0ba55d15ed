pub mod api;
pub mod entities;
pub mod helpers;
pub mod renewal_trigger_api;

pub use crate::api::CronApi;
pub use crate::renewal_trigger_api::RenewalTriggerApi;
