use std::io;

use sgtest::config::HarnessConfig;
use sgtest::harness::Harness;
use sgtest::logger::init_logger;

use anyhow::Error;
use clap::{App, Arg};

fn main() -> Result<(), Error> {
    let matches = App::new("sgtest")
        .arg(
            Arg::with_name("config")
                .help("config file path")
                .long("config")
                .required(false)
                .takes_value(true),
        )
        .get_matches();

    let _guard = init_logger();
    let config = match matches.value_of("config") {
        Some(config_file) => HarnessConfig::load_config(config_file)?,
        None => HarnessConfig::default(),
    };
    let harness = Harness::new(&config.provisioner);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    harness.run(&mut out)
}
