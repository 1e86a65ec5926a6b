//! CLI command implementations.

use colored::Colorize;
use lineage_core::{Ledger, LineageConfig, CONFIG_DIR, CONFIG_FILE};
use lineage_graph::{
    Container, GraphSnapshot, HoverState, Pointer, PointerEvent, Role, Stats, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use std::fs;
use std::path::Path;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Pointer position and container size for `hover`.
pub struct HoverArgs {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Loads the config from an explicit path, or discovers it in the
/// current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<LineageConfig> {
    let config = match explicit {
        Some(path) => LineageConfig::from_path(path)?,
        None => LineageConfig::discover(std::env::current_dir()?)?,
    };
    debug!("Using config: {:?}", config);
    Ok(config)
}

/// Initialize Lineage in a directory.
pub fn init(path: &Path) -> Result<()> {
    let config_dir = path.join(CONFIG_DIR);
    let ledger_path = path.join("ledger.json");

    if config_dir.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(&config_dir)?;
    LineageConfig::default().save(config_dir.join(CONFIG_FILE))?;

    if !ledger_path.exists() {
        fs::write(&ledger_path, Ledger::sample().to_json_pretty()?)?;
        println!("{} Wrote sample ledger to {}", "✓".green(), ledger_path.display());
    }

    println!("{} Initialized Lineage in {}", "✓".green(), path.display());
    println!("  Run {} to view the lineage", "lineage graph".cyan());

    Ok(())
}

/// Build the lineage graph and print it.
pub fn graph(ledger_path: &Path, config: &LineageConfig, json_output: bool) -> Result<()> {
    let ledger = Ledger::from_path(ledger_path)?;
    let snapshot = GraphSnapshot::from_ledger(&ledger, config)?;

    if json_output {
        let output = serde_json::json!({
            "canvas": { "width": CANVAS_WIDTH, "height": CANVAS_HEIGHT },
            "summary": snapshot.summary(),
            "nodes": snapshot.nodes.iter().map(|node| serde_json::json!({
                "address": node.address,
                "label": snapshot.label(&node.address),
                "level": node.level,
                "role": node.role,
                "color": node.role.color(),
                "x": node.x,
                "y": node.y,
                "displayTitle": node.display_title
            })).collect::<Vec<_>>(),
            "edges": snapshot.edge_segments(),
            "maxLevel": snapshot.max_level,
            "rootCount": snapshot.root_count
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let summary = snapshot.summary();
    println!("{}", "Lineage Graph".cyan().bold());
    println!(
        "{} nodes, {} links, {} generations, {} chains",
        summary.total_nodes.to_string().bold(),
        summary.total_links,
        summary.max_depth,
        summary.chains
    );
    println!();

    for (level, nodes) in snapshot.level_groups() {
        println!("{}", format!("Level {}:", level).yellow());
        for node in nodes {
            let label = snapshot.label(&node.address).unwrap_or_default();
            println!(
                "  [{}] {} {} {}",
                label.bold(),
                node.address.cyan(),
                format!("({})", role_name(node.role)).dimmed(),
                format!("@ {:.1},{:.1}", node.x, node.y).dimmed()
            );
            println!("      {}", node.display_title);
        }
    }

    let segments = snapshot.edge_segments();
    if !segments.is_empty() {
        println!();
        println!("{}", "Links:".yellow());
        for segment in segments {
            println!(
                "  {} → {}",
                snapshot.label(&segment.from_address).unwrap_or_default(),
                snapshot.label(&segment.to_address).unwrap_or_default()
            );
        }
    }

    println!();
    for role in [Role::Root, Role::Intermediate, Role::Leaf] {
        println!("  {} {}", "●".dimmed(), role.legend());
    }

    Ok(())
}

/// Show transfer statistics for an address.
pub fn stats(
    ledger_path: &Path,
    subject: Option<&str>,
    config: &LineageConfig,
    json_output: bool,
) -> Result<()> {
    let subject = resolve_subject(subject, config)?;
    let ledger = Ledger::from_path(ledger_path)?;
    let stats = Stats::for_ledger(&ledger, &subject);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{} {}", "Stats for".cyan().bold(), subject.cyan());
    println!();
    println!("  {} {}", "Total:".dimmed(), stats.total);
    println!("  {} {}", "Sent:".dimmed(), stats.sent);
    println!("  {} {}", "Received:".dimmed(), stats.received);
    println!("  {} {}", "Active chains:".dimmed(), stats.active_chains);

    Ok(())
}

/// Show the tooltip a renderer would display for a pointer over `address`.
pub fn hover(
    ledger_path: &Path,
    address: &str,
    args: HoverArgs,
    config: &LineageConfig,
    json_output: bool,
) -> Result<()> {
    let ledger = Ledger::from_path(ledger_path)?;
    let snapshot = GraphSnapshot::from_ledger(&ledger, config)?;

    let container = Container {
        width: args.width,
        height: args.height,
    };
    let event = PointerEvent::Enter {
        address: address.to_string(),
        pointer: Pointer {
            x: args.x,
            y: args.y,
        },
    };

    let mut state = HoverState::new();
    let Some(tooltip) = state.handle(&snapshot, event, container)? else {
        return Ok(());
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(tooltip)?);
        return Ok(());
    }

    println!(
        "{} [{}]",
        tooltip.title.cyan().bold(),
        tooltip.label.bold()
    );
    println!("{}", tooltip.description);
    println!("  {} {}", "Wallet:".dimmed(), tooltip.address);
    println!("  {} {}", "Stewarded Secret:".dimmed(), tooltip.display_title);
    println!(
        "  {} left {:.1}, top {:.1}",
        "Anchor:".dimmed(),
        tooltip.anchor.left,
        tooltip.anchor.top
    );

    Ok(())
}

fn resolve_subject(flag: Option<&str>, config: &LineageConfig) -> Result<String> {
    flag.map(str::to_string)
        .or_else(|| config.subject.clone())
        .ok_or_else(|| "no subject address: pass --subject or set \"subject\" in the config".into())
}

fn role_name(role: Role) -> String {
    match role {
        Role::Root => role.to_string().blue().to_string(),
        Role::Intermediate => role.to_string().magenta().to_string(),
        Role::Leaf => role.to_string().green().to_string(),
    }
}
