use clap::Parser;
use colored::Colorize;
use refiners_core::*;
use std::cell::RefCell;
use std::process;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

/// Search Refiners Panel - Replay panel interactions against a refiner file
///
/// Examples:
///   # Show the panel with every group collapsed
///   refiners_cli refiners.json
///
///   # Expand a group and check two values
///   refiners_cli refiners.json --expand Color --select red --select blue
///
///   # Check a value, then clear the selection
///   refiners_cli refiners.json --select red --remove-all
///
///   # Check a value, then start a new query
///   refiners_cli refiners.json --select red --new-query
#[derive(Parser, Debug)]
#[command(name = "refiners_cli")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Replay Order:\n  \
    - Groups named by --expand are expanded first\n  \
    - Values named by --select are checked in the order given\n  \
    - --unselect values are unchecked afterwards\n  \
    - --remove-all and --new-query run last\n\n\
Every selection change is printed as the panel reports it to its parent.")]
struct Cli {
    /// Path to the refiner JSON file
    #[arg(value_name = "FILE")]
    file: String,

    /// Expand the group for this refiner name (can be specified multiple times)
    #[arg(short, long = "expand", value_name = "REFINER")]
    expand: Vec<String>,

    /// Check the value with this refinement token (can be specified multiple times)
    #[arg(short, long = "select", value_name = "TOKEN")]
    select: Vec<String>,

    /// Uncheck the value with this refinement token (can be specified multiple times)
    #[arg(short, long = "unselect", value_name = "TOKEN")]
    unselect: Vec<String>,

    /// Click "remove all" after the selections
    #[arg(long)]
    remove_all: bool,

    /// Signal a new search query after the selections
    #[arg(long)]
    new_query: bool,

    /// Print notifications as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let document = load_refiners(&cli.file).unwrap_or_else(|err| {
        eprintln!("{} {}", "Error:".red().bold(), err);
        process::exit(1);
    });

    if let Err(problems) = validate_refiners(&document) {
        eprintln!("{}", "Warnings:".yellow().bold());
        for (i, problem) in problems.iter().enumerate() {
            eprintln!("  {}. {}", i + 1, problem);
        }
        eprintln!();
    }

    let notifications = Rc::new(RefCell::new(Vec::new()));
    let sink = notifications.clone();
    let mut panel = FilterPanel::mount(PanelProps::from(document.clone()), move |selected: &[RefinementFilter]| {
        sink.borrow_mut().push(selected.to_vec())
    })
    .with_placeholder("_No refiners available._");

    replay(&mut panel, &document, &cli);

    println!("# Refiners\n");
    print_notifications(&notifications.borrow(), &document, cli.json);
    print_panel(&panel.view());
}

fn replay(panel: &mut FilterPanel, document: &RefinerDocument, cli: &Cli) {
    for name in &cli.expand {
        if !document.available_filters.iter().any(|f| &f.filter_name == name) {
            eprintln!("{} unknown refiner '{}'", "Warning:".yellow(), name);
        }
        panel.toggle_group_named(name);
    }

    for (token, checked) in cli
        .select
        .iter()
        .map(|token| (token, true))
        .chain(cli.unselect.iter().map(|token| (token, false)))
    {
        match find_refinement(document, token) {
            Some(filter) => panel.toggle_filter(filter, checked),
            None => eprintln!("{} unknown token '{}'", "Warning:".yellow(), token),
        }
    }

    if cli.remove_all {
        panel.remove_all();
    }

    if cli.new_query {
        let mut props = PanelProps::from(document.clone());
        props.reset_selected_filters = true;
        panel.set_props(props);
    }
}

fn find_refinement(document: &RefinerDocument, token: &str) -> Option<RefinementFilter> {
    document.available_filters.iter().find_map(|filter| {
        filter
            .values
            .iter()
            .position(|value| value.token == token)
            .and_then(|index| filter.refinement(index))
    })
}

fn print_notifications(
    notifications: &[Vec<RefinementFilter>],
    document: &RefinerDocument,
    json: bool,
) {
    if notifications.is_empty() {
        return;
    }

    println!("## Notifications\n");

    for (i, selected) in notifications.iter().enumerate() {
        if json {
            match serde_json::to_string(selected) {
                Ok(line) => println!("{}. `{}`", i + 1, line),
                Err(err) => eprintln!("{} {}", "Error:".red().bold(), err),
            }
        } else if selected.is_empty() {
            println!("{}. _no filters_", i + 1);
        } else {
            println!(
                "{}. {}",
                i + 1,
                format_active_filters(selected, &document.refiners_configuration)
            );
        }
    }
    println!();
}

fn print_panel(view: &PanelView) {
    if let Some(placeholder) = &view.placeholder {
        println!("{}\n", placeholder);
    }

    for group in &view.groups {
        let chevron = if group.is_collapsed { "▸" } else { "▾" };
        println!("## {} {}\n", chevron, group.name);

        if group.is_collapsed {
            continue;
        }

        for item in &group.items {
            let mark = if item.checked { "x" } else { " " };
            println!("- [{}] {}", mark, item.label);
        }
        println!();
    }

    if view.show_remove_all {
        println!("**Remove all filters** ({} checked)", view.checked_count());
    }
}
