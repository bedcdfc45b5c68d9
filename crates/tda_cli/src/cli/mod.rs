use clap::Parser;
use daycaptain::schedule::SchedulingOptions;

const TOKEN_HELP: &str = "\
Token can be either specified via the --token flag, via the $DC_API_TOKEN
environment variable, or via the $DC_API_TOKEN_COMMAND environment variable.
The last option is useful when the token is stored in a command line tool, e.g.

    export DC_API_TOKEN_COMMAND=\"pass some/key\"";

/// Adds a task to DayCaptain
#[derive(Parser, Debug)]
#[command(name = "tda", version, about, after_help = TOKEN_HELP)]
pub struct Cli {
    /// The task name
    #[arg(value_name = "TASK")]
    pub task: String,

    /// Add the task to today's tasks
    #[arg(short = 't', long)]
    pub today: bool,

    /// Add the task to tomorrow's tasks
    #[arg(short = 'm', long)]
    pub tomorrow: bool,

    /// Add the task to DATE (formatted by ISO-8601, e.g. 2021-01-31)
    #[arg(short = 'd', long, value_name = "DATE")]
    pub date: Option<String>,

    /// Add the task to this week
    #[arg(short = 'W', long = "this-week")]
    pub this_week: bool,

    /// Add the task to WEEK (formatted by ISO-8601, e.g. 2021-W07)
    #[arg(short = 'w', long, value_name = "WEEK")]
    pub week: Option<String>,

    /// Add the task to the backlog inbox (default)
    #[arg(short = 'i', long)]
    pub inbox: bool,

    /// API token, defaults to $DC_API_TOKEN or $DC_API_TOKEN_COMMAND
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}

impl Cli {
    /// The scheduling intents carried by the parsed flags. Mutual exclusion
    /// is deliberately left to the resolver rather than to clap, so conflicts
    /// surface as a single deterministic error.
    pub fn scheduling_options(&self) -> SchedulingOptions {
        SchedulingOptions {
            today: self.today,
            tomorrow: self.tomorrow,
            date: self.date.clone(),
            this_week: self.this_week,
            week: self.week.clone(),
            inbox: self.inbox,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::Cli;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_map_onto_scheduling_options() {
        let cli = Cli::try_parse_from(["tda", "-t", "hello world"]).unwrap();
        let options = cli.scheduling_options();
        assert!(options.today);
        assert!(!options.tomorrow);
        assert_eq!(options.date, None);
        assert!(!options.this_week);
        assert_eq!(options.week, None);
        assert_eq!(cli.task, "hello world");
    }

    #[test]
    fn long_flags_are_accepted() {
        let cli = Cli::try_parse_from([
            "tda",
            "--week",
            "2021-W7",
            "--token",
            "secret",
            "hello world",
        ])
        .unwrap();
        assert_eq!(cli.week.as_deref(), Some("2021-W7"));
        assert_eq!(cli.token.as_deref(), Some("secret"));
    }

    #[test]
    fn task_name_is_required() {
        assert!(Cli::try_parse_from(["tda", "-t"]).is_err());
    }

    #[test]
    fn extra_positionals_are_rejected() {
        assert!(Cli::try_parse_from(["tda", "hello", "world"]).is_err());
    }
}
