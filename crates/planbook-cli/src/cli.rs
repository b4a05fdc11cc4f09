use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "planbook",
    about = "Plan documents with a merge-safe spec checklist",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace root holding docs/plans and docs/specs
    #[arg(short = 'C', long, global = true, default_value = ".")]
    pub directory: String,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Create a plan with an empty spec checklist
    NewPlan(NewPlanArgs),
    /// Create a spec document
    NewSpec(NewSpecArgs),
    /// Append a spec entry to a plan's checklist
    Append(AppendArgs),
    /// List plan documents
    Plans(PlansArgs),
    /// Show the spec entries of a plan
    Specs(SpecsArgs),
    /// Update a plan's status
    Status(StatusArgs),
}

#[derive(Args)]
pub struct NewPlanArgs {
    /// Plan name: letters, numbers, and hyphens, max 3 words
    pub name: String,
    /// Short description (3 to 10 words)
    #[arg(short, long)]
    pub description: String,
    /// Detailed idea behind the plan
    #[arg(short, long)]
    pub idea: String,
    /// Implementation step; repeat for each (at least 5)
    #[arg(short, long = "step")]
    pub steps: Vec<String>,
}

#[derive(Args)]
pub struct NewSpecArgs {
    pub name: String,
    #[arg(long, value_enum, default_value = "feature")]
    pub scope: SpecScope,
    #[arg(short, long, default_value = "")]
    pub content: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum SpecScope {
    Repo,
    Feature,
}

impl SpecScope {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Repo => "repo",
            Self::Feature => "feature",
        }
    }
}

#[derive(Args)]
pub struct AppendArgs {
    /// Plan whose checklist receives the entry
    pub plan: String,
    /// Spec entry to append
    pub entry: String,
}

#[derive(Args)]
pub struct PlansArgs {}

#[derive(Args)]
pub struct SpecsArgs {
    pub plan: String,
}

#[derive(Args)]
pub struct StatusArgs {
    pub plan: String,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_new_plan() {
        let cli = Cli::try_parse_from([
            "planbook", "new-plan", "user-auth",
            "--description", "secure login for users",
            "--idea", "Add login.",
            "--step", "one", "--step", "two",
        ])
        .unwrap();
        if let Command::NewPlan(args) = cli.command {
            assert_eq!(args.name, "user-auth");
            assert_eq!(args.steps, vec!["one", "two"]);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_new_spec_scope() {
        let cli = Cli::try_parse_from(["planbook", "new-spec", "api", "--scope", "repo"]).unwrap();
        if let Command::NewSpec(args) = cli.command {
            assert_eq!(args.scope, SpecScope::Repo);
            assert_eq!(args.content, "");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn new_spec_defaults_to_feature_scope() {
        let cli = Cli::try_parse_from(["planbook", "new-spec", "login"]).unwrap();
        if let Command::NewSpec(args) = cli.command {
            assert_eq!(args.scope, SpecScope::Feature);
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_append() {
        let cli = Cli::try_parse_from(["planbook", "append", "user-auth", "api"]).unwrap();
        if let Command::Append(args) = cli.command {
            assert_eq!(args.plan, "user-auth");
            assert_eq!(args.entry, "api");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_plans() {
        let cli = Cli::try_parse_from(["planbook", "plans"]).unwrap();
        assert!(matches!(cli.command, Command::Plans(_)));
    }

    #[test]
    fn parse_specs() {
        let cli = Cli::try_parse_from(["planbook", "specs", "user-auth"]).unwrap();
        assert!(matches!(cli.command, Command::Specs(_)));
    }

    #[test]
    fn parse_status() {
        let cli = Cli::try_parse_from(["planbook", "status", "user-auth", "done"]).unwrap();
        if let Command::Status(args) = cli.command {
            assert_eq!(args.status, "done");
        } else {
            panic!("wrong command");
        }
    }

    #[test]
    fn parse_global_directory() {
        let cli = Cli::try_parse_from(["planbook", "plans", "-C", "/tmp/ws"]).unwrap();
        assert_eq!(cli.directory, "/tmp/ws");
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["planbook", "--format", "json", "plans"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["planbook", "--verbose", "plans"]).unwrap();
        assert!(cli.verbose);
    }
}
