use anyhow::Result;
use simple_logger::SimpleLogger;

pub fn init(level: log::Level) -> Result<()> {
    SimpleLogger::new()
        .with_level(level.to_level_filter())
        // hyper and reqwest are chatty at debug
        .with_module_level("hyper", log::LevelFilter::Warn)
        .with_module_level("reqwest", log::LevelFilter::Warn)
        .init()?;

    Ok(())
}
