//! stderr logging shared by the binaries. The library itself never logs.

use {
	anyhow::anyhow,
	log::LevelFilter,
	log4rs::{
		append::console::{ConsoleAppender, Target},
		config::{Appender, Config, Root},
		encode::pattern::PatternEncoder,
	},
};

const APPENDER: &str = "stderr";

/// `Info` when `verbose`, `Warn` otherwise.
pub fn init(verbose: bool) -> anyhow::Result<()> {
	let level = if verbose { LevelFilter::Info } else { LevelFilter::Warn };
	let stderr = ConsoleAppender::builder()
		.target(Target::Stderr)
		.encoder(Box::new(PatternEncoder::new("{l}: {m}{n}")))
		.build();
	let config = Config::builder()
		.appender(Appender::builder().build(APPENDER, Box::new(stderr)))
		.build(Root::builder().appender(APPENDER).build(level))
		.map_err(|err| anyhow!("{err}"))?;
	log4rs::init_config(config)?;
	Ok(())
}
