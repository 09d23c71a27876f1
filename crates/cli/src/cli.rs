use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// How command results are printed.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Short human-readable summary.
    Text,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        self == Self::Json
    }
}

/// Command-line interface for the `careerpath` engine.
#[derive(Debug, Parser)]
#[command(
    name = "careerpath",
    about = "Career-development recommendations and skill-gap analysis"
)]
pub struct Cli {
    /// JSON dataset with employees, courses, enrollments, projects and saved recommendations.
    #[arg(long, global = true, env = "CAREERPATH_DATA", value_name = "FILE")]
    pub data: Option<PathBuf>,
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
    #[command(subcommand)]
    pub command: Commands,
}

/// Available `careerpath` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scores courses, mentors and projects for an employee.
    Recommend {
        /// Employee id.
        #[arg(long)]
        employee: u64,
        /// Writes the generated recommendations back into the dataset file.
        #[arg(long, default_value_t = false)]
        save: bool,
    },
    /// Lists the recommendations stored for an employee.
    List {
        /// Employee id.
        #[arg(long)]
        employee: u64,
    },
    /// Marks a stored recommendation as accepted and updates the dataset file.
    Accept {
        /// Recommendation id.
        #[arg(long)]
        recommendation: u64,
    },
    /// Analyzes the skill gaps between an employee and a target position.
    Gaps {
        /// Employee id.
        #[arg(long)]
        employee: u64,
        /// Target position, for example "Senior Software Engineer".
        #[arg(long)]
        target: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_gaps_command() {
        let cli = Cli::parse_from([
            "careerpath",
            "--data",
            "data.json",
            "gaps",
            "--employee",
            "7",
            "--target",
            "Tech Lead",
        ]);
        assert_eq!(cli.data, Some(PathBuf::from("data.json")));
        assert!(cli.format.is_json());
        match cli.command {
            Commands::Gaps { employee, target } => {
                assert_eq!(employee, 7);
                assert_eq!(target, "Tech Lead");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "careerpath",
            "recommend",
            "--employee",
            "1",
            "--save",
            "--format",
            "text",
        ]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(matches!(
            cli.command,
            Commands::Recommend {
                employee: 1,
                save: true
            }
        ));
    }
}
