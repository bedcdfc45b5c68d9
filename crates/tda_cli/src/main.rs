use clap::Parser;
use daycaptain::client::DayCaptain;
use daycaptain::config::{self, ServiceConfig};
use daycaptain::error::DcError;
use daycaptain::model::Task;
use daycaptain::schedule;
use tda_cli::cli::Cli;
use time::{Date, OffsetDateTime, UtcOffset};

fn local_today() -> Date {
    let local_offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    OffsetDateTime::now_utc().to_offset(local_offset).date()
}

fn run(cli: &Cli, config: ServiceConfig) -> Result<(), DcError> {
    let target = schedule::resolve(&cli.scheduling_options(), local_today())?;
    let client = DayCaptain::new(config);
    client.new_task(&Task::new(cli.task.as_str()), &target)
}

fn main() {
    let cli = Cli::parse();

    let token = config::resolve_token(cli.token.as_deref()).unwrap_or_default();
    if token.is_empty() {
        eprintln!("Token is mandatory");
        std::process::exit(2);
    }

    let config = ServiceConfig::new(config::base_url_from_env(), token);
    if let Err(err) = run(&cli, config) {
        eprintln!("ERROR: {}", err);
        std::process::exit(2);
    }

    println!("OK");
}
