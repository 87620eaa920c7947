//! Monster Scroll - Entry Point
//!
//! Loads the monster, action and trait catalogs and prints the Maverick
//! skills each selected monster gains from its teammates.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use serde::Serialize;

use monster_scroll::catalog::{Catalog, Monster};
use monster_scroll::core::error::Result;
use monster_scroll::core::{GroupingStrategy, ScrollConfig};
use monster_scroll::team::{get_monster_skills, organize, Party, SkillGroup, SkillQuery};

/// Monster Scroll - search for Maverick skills
#[derive(Parser, Debug)]
#[command(name = "monster-scroll")]
#[command(about = "Show which Maverick skills a party unlocks for each monster")]
struct Args {
    /// Party members as slugs: `Name` or `Name-shifted` (1 to 3)
    party: Vec<String>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding monsters.json, actions.json and traits.json
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Include single-type skills as well as Maverick skills
    #[arg(long)]
    all_skills: bool,

    /// How to group skills
    #[arg(long, value_enum)]
    grouping: Option<GroupingArg>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// List every monster in the catalog and exit
    #[arg(long)]
    list: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum GroupingArg {
    Shared,
    PerMonster,
}

impl From<GroupingArg> for GroupingStrategy {
    fn from(arg: GroupingArg) -> Self {
        match arg {
            GroupingArg::Shared => GroupingStrategy::Shared,
            GroupingArg::PerMonster => GroupingStrategy::PerMonster,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

/// JSON output for one party member
#[derive(Serialize)]
struct MonsterReport {
    monster: String,
    types: Vec<String>,
    elements: Vec<String>,
    groups: Vec<GroupReport>,
}

#[derive(Serialize)]
struct GroupReport {
    category: &'static str,
    enablers: Vec<String>,
    actions: Vec<String>,
    traits: Vec<String>,
}

impl GroupReport {
    fn from_group(group: &SkillGroup<'_>) -> Self {
        Self {
            category: group.category.label(),
            enablers: group.enablers.iter().map(|m| m.slug()).collect(),
            actions: group.actions().map(|s| s.skill.name.clone()).collect(),
            traits: group.traits().map(|s| s.skill.name.clone()).collect(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_directive = if args.verbose {
        "monster_scroll=debug"
    } else {
        "monster_scroll=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => ScrollConfig::load(path)?,
        None => ScrollConfig::default(),
    };
    if let Some(dir) = &args.data_dir {
        config.data_dir = dir.clone();
    }
    if args.all_skills {
        config.show_all_skills = true;
    }
    if let Some(grouping) = args.grouping {
        config.grouping = grouping.into();
    }

    let catalog = Catalog::load(&config)?;

    if args.list {
        print_monster_list(&catalog);
        return Ok(());
    }

    let party = Party::from_slugs(&catalog, args.party.as_slice())?;
    let query = if config.show_all_skills {
        SkillQuery::all_skills()
    } else {
        SkillQuery::maverick_only()
    };

    let mut reports = Vec::with_capacity(party.len());
    for &target in party.members() {
        let skills = get_monster_skills(
            target,
            party.members(),
            catalog.actions(),
            catalog.traits(),
            query,
        )?;
        let groups = organize(config.grouping, &skills, target);

        match args.format {
            Format::Text => print_monster_groups(target, &groups),
            Format::Json => reports.push(MonsterReport {
                monster: target.slug(),
                types: target.types.iter().map(|t| t.to_string()).collect(),
                elements: target.elements.iter().map(|e| e.to_string()).collect(),
                groups: groups.iter().map(GroupReport::from_group).collect(),
            }),
        }
    }

    if args.format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn print_monster_list(catalog: &Catalog) {
    for monster in catalog.monsters() {
        let types: Vec<&str> = monster.types.iter().map(|t| t.as_str()).collect();
        let elements: Vec<&str> = monster.elements.iter().map(|e| e.as_str()).collect();
        println!(
            "{:<24} [{}] ({})",
            monster.slug(),
            types.join(", "),
            elements.join("/")
        );
    }
}

fn print_monster_groups(target: &Monster, groups: &[SkillGroup<'_>]) {
    let types: Vec<&str> = target.types.iter().map(|t| t.as_str()).collect();
    println!();
    println!("=== {} [{}] ===", target, types.join(", "));

    if groups.is_empty() {
        println!("  No maverick skills available for this team composition");
        return;
    }

    for group in groups {
        let enablers: Vec<String> = group.enablers.iter().map(|m| m.to_string()).collect();
        println!("  [{}] enabled by {}", group.category.label(), enablers.join(" & "));

        let actions: Vec<_> = group.actions().collect();
        if !actions.is_empty() {
            println!("    Actions ({})", actions.len());
            for enabled in actions {
                let cost: Vec<&str> = enabled.skill.mana_cost.iter().map(|e| e.as_str()).collect();
                println!("      - {} ({})", enabled.skill.name, cost.join("/"));
            }
        }

        let traits: Vec<_> = group.traits().collect();
        if !traits.is_empty() {
            println!("    Traits ({})", traits.len());
            for enabled in traits {
                println!("      - {}", enabled.skill.name);
            }
        }
    }
}
