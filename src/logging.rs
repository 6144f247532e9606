//! Logger setup.
//!
//! Logs always go to stderr so stdout carries only addresses. `--verbose`
//! forces TRACE level; otherwise a log4rs YAML file is used when present
//! (`IPENUM_LOG_CONFIG`, default `log4rs.yml`), else WARN to stderr.

use std::error::Error;
use std::path::Path;

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use crate::config::Options;

pub const DEFAULT_CONFIG_FILE: &str = "log4rs.yml";
pub const CONFIG_ENV: &str = "IPENUM_LOG_CONFIG";

const PATTERN: &str = "{d(%H:%M:%S%.3f)} {h({l:5})} {M} - {m}{n}";

pub fn init(options: &Options) -> Result<(), Box<dyn Error>> {
    if options.verbose {
        return init_stderr(LevelFilter::Trace);
    }
    let file = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    if Path::new(&file).exists() {
        log4rs::init_file(&file, Default::default())?;
        log::debug!("logging configured from {file}");
        Ok(())
    } else {
        init_stderr(LevelFilter::Warn)
    }
}

fn init_stderr(level: LevelFilter) -> Result<(), Box<dyn Error>> {
    log4rs::init_config(stderr_config(level)?)?;
    Ok(())
}

fn stderr_config(level: LevelFilter) -> Result<Config, Box<dyn Error>> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    Ok(config)
}
