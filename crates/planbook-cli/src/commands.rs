use anyhow::bail;
use colored::Colorize;
use serde_json::json;

use planbook_docs::{
    format_plan, format_spec, list_plans, list_repo_specs, normalize_frontmatter,
    parse_frontmatter, plan_key, spec_key, validate_description, validate_plan_name,
    validate_steps,
};
use planbook_merge::{merge_entry, MergeOutcome};
use planbook_section::{decode_entries, locate};
use planbook_store::{DocumentStore, FsDocumentStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        directory,
        format,
        ..
    } = cli;
    let store = FsDocumentStore::new(directory);
    let json = matches!(format, OutputFormat::Json);

    match command {
        Command::NewPlan(args) => cmd_new_plan(&store, json, args),
        Command::NewSpec(args) => cmd_new_spec(&store, json, args),
        Command::Append(args) => cmd_append(&store, json, args),
        Command::Plans(_) => cmd_plans(&store, json),
        Command::Specs(args) => cmd_specs(&store, json, args),
        Command::Status(args) => cmd_status(&store, json, args),
    }
}

fn cmd_new_plan(store: &FsDocumentStore, json: bool, args: NewPlanArgs) -> anyhow::Result<()> {
    validate_plan_name(&args.name)?;
    validate_description(&args.description)?;
    validate_steps(&args.steps)?;

    let key = plan_key(&args.name)?;
    if store.exists(&key)? {
        bail!("plan '{}' already exists; use a unique name", args.name);
    }

    let content = format_plan(&args.name, &args.description, &args.idea, &args.steps);
    let bytes = store.write(&key, &content)?;
    if bytes == 0 {
        bail!("failed to write plan '{}'", args.name);
    }

    let repo_specs = list_repo_specs(store.root())?;
    if json {
        println!(
            "{}",
            json!({ "plan": args.name, "path": key, "repo_specs": repo_specs })
        );
    } else {
        println!(
            "{} Created plan {} at {}",
            "✓".green().bold(),
            args.name.yellow(),
            key.bold()
        );
        if !repo_specs.is_empty() {
            println!(
                "  Append each repo spec: {}",
                repo_specs.join(", ").cyan()
            );
        }
    }
    Ok(())
}

fn cmd_new_spec(store: &FsDocumentStore, json: bool, args: NewSpecArgs) -> anyhow::Result<()> {
    let key = spec_key(&args.name)?;
    if store.exists(&key)? {
        bail!("spec '{}' already exists; use a unique name", args.name);
    }

    let content = format_spec(&args.name, args.scope.as_str(), &args.content);
    store.write(&key, &content)?;

    if json {
        println!(
            "{}",
            json!({ "spec": args.name, "path": key, "scope": args.scope.as_str() })
        );
    } else {
        println!(
            "{} Created {} spec {} at {}",
            "✓".green().bold(),
            args.scope.as_str(),
            args.name.yellow(),
            key.bold()
        );
    }
    Ok(())
}

fn cmd_append(store: &FsDocumentStore, json: bool, args: AppendArgs) -> anyhow::Result<()> {
    let key = plan_key(&args.plan)?;
    let outcome = merge_entry(store, &key, &args.entry)?;

    if json {
        println!("{}", serde_json::to_string(&outcome)?);
        return Ok(());
    }
    match outcome {
        MergeOutcome::AlreadyPresent => println!(
            "{} {} already listed in {}",
            "✓".green(),
            args.entry.cyan(),
            args.plan.yellow()
        ),
        MergeOutcome::Merged { attempts } if attempts > 1 => println!(
            "{} Appended {} to {} ({} attempts)",
            "✓".green().bold(),
            args.entry.cyan(),
            args.plan.yellow(),
            attempts
        ),
        MergeOutcome::Merged { .. } => println!(
            "{} Appended {} to {}",
            "✓".green().bold(),
            args.entry.cyan(),
            args.plan.yellow()
        ),
    }
    Ok(())
}

fn cmd_plans(store: &FsDocumentStore, json: bool) -> anyhow::Result<()> {
    let plans = list_plans(store.root());
    if json {
        println!("{}", json!(plans));
    } else if plans.is_empty() {
        println!("No plans.");
    } else {
        for plan in plans {
            println!("{plan}");
        }
    }
    Ok(())
}

fn cmd_specs(store: &FsDocumentStore, json: bool, args: SpecsArgs) -> anyhow::Result<()> {
    let key = plan_key(&args.plan)?;
    let Some(doc) = store.read(&key)? else {
        bail!("plan '{}' not found", args.plan);
    };
    let Some(section) = locate(&doc) else {
        bail!("plan '{}' has no spec checklist section", args.plan);
    };

    let entries = decode_entries(&section.middle);
    if json {
        println!("{}", json!(entries));
    } else if entries.is_empty() {
        println!("No specs listed.");
    } else {
        for entry in entries {
            println!("- {entry}");
        }
    }
    Ok(())
}

fn cmd_status(store: &FsDocumentStore, json: bool, args: StatusArgs) -> anyhow::Result<()> {
    let key = plan_key(&args.plan)?;
    let Some(doc) = store.read(&key)? else {
        bail!("plan '{}' not found", args.plan);
    };
    let Some(meta) = parse_frontmatter(&doc) else {
        bail!("plan '{}' has no frontmatter", args.plan);
    };

    let updated = normalize_frontmatter(&doc, &meta.name, &meta.description, &args.status);
    store.write(&key, &updated)?;

    if json {
        println!("{}", json!({ "plan": args.plan, "status": args.status }));
    } else {
        println!(
            "{} Plan {} is now {}",
            "✓".green().bold(),
            args.plan.yellow(),
            args.status.cyan()
        );
    }
    Ok(())
}
