use anyhow::{bail, Result};
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use base::requests::ureq::UreqRequestApi;
use cron_apis::entities::ApiData;
use cron_apis::{CronApi, RenewalTriggerApi};

const LOG_LINE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} | {l:<8} | {t} | {m}{n}";

fn init_logger() -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(LOG_LINE_PATTERN)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;

    Ok(())
}

fn main() -> Result<()> {
    // the .env file is optional for a cron invocation
    let _ = dotenv::dotenv();

    init_logger()?;

    let api_data = ApiData::from_env();
    let request_api = UreqRequestApi::new();

    let cron_api = RenewalTriggerApi::new(api_data, None, request_api);

    if !cron_api.check_health()? {
        bail!("aborting the renewal because the API is unavailable");
    }

    cron_api.trigger_renewal()?;

    log::info!("the renewal trigger completed");

    Ok(())
}
