use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use lead_ranker::filter::{distinct_values, filter_leads, LeadFilter};
use lead_ranker::leads::CanonicalField;
use lead_ranker::outreach::LinkTarget;
use lead_ranker::scoring::ScoredLead;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_BROWSER: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Args, Debug, Clone)]
struct FilterArgs {
    /// Only show leads in this industry (exact match)
    #[arg(long)]
    industry: Option<String>,

    /// Only show leads in this city (exact match)
    #[arg(long)]
    city: Option<String>,
}

impl From<FilterArgs> for LeadFilter {
    fn from(args: FilterArgs) -> Self {
        LeadFilter {
            industry: args.industry,
            city: args.city,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Target {
    Website,
    Linkedin,
    Map,
}

impl From<Target> for LinkTarget {
    fn from(target: Target) -> Self {
        match target {
            Target::Website => LinkTarget::Website,
            Target::Linkedin => LinkTarget::Linkedin,
            Target::Map => LinkTarget::Map,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List leads ranked by score
    List {
        /// Lead spreadsheet (.csv or .json)
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show one lead in detail, with an outreach email draft
    Show {
        file: PathBuf,
        /// Index number of the lead (1-based, as shown in list)
        index: usize,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Open a lead's website, LinkedIn page or map in the browser
    Open {
        file: PathBuf,
        /// Index number of the lead (1-based, as shown in list)
        index: usize,
        #[arg(long, value_enum, default_value = "website")]
        target: Target,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// List the industries and cities present, for use with --industry/--city
    Facets { file: PathBuf },
    /// Write the default configuration file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "lead-ranker")]
#[command(about = "Normalize a lead spreadsheet and rank leads for outreach", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lead-ranker/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    lead_ranker::logging::init_logging(cli.verbose);
    let start_time = Instant::now();
    let config_path = cli.config.map(PathBuf::from);

    if let Commands::Init { force } = cli.command {
        match lead_ranker::config::write_default_config(config_path, force) {
            Ok(path) => {
                println!("Config written to {}", path.display());
                std::process::exit(EXIT_SUCCESS);
            }
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
    }

    // Load config
    let config = match lead_ranker::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    let options = match lead_ranker::config::validate_config(&config)
        .and_then(|()| config.normalize_options())
    {
        Ok(options) => options,
        Err(errors) => {
            eprintln!("Config errors:");
            for error in errors {
                eprintln!("  - {}", error);
            }
            std::process::exit(EXIT_CONFIG);
        }
    };
    let scoring = config.effective_scoring();

    let file = match &cli.command {
        Commands::List { file, .. }
        | Commands::Show { file, .. }
        | Commands::Open { file, .. }
        | Commands::Facets { file } => file.clone(),
        Commands::Init { .. } => unreachable!("init handled above"),
    };

    let ranked = match lead_ranker::rank_file(&file, &options, &scoring) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Failed to read {}: {}", file.display(), e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if cli.verbose {
        for note in &ranked.notes {
            eprintln!("  {}", note);
        }
        eprintln!(
            "Ranked {} leads in {:?}",
            ranked.leads.len(),
            start_time.elapsed()
        );
    }

    let use_colors = lead_ranker::output::should_use_colors();
    let leads = ranked.leads.leads();

    match cli.command {
        Commands::List { filter, .. } => {
            let selected = filter_leads(leads, &filter.into());
            println!(
                "{}",
                lead_ranker::output::format_scored_table(&selected, use_colors)
            );
        }
        Commands::Show { index, filter, .. } => {
            let selected = filter_leads(leads, &filter.into());
            let lead = select(&selected, index);
            println!(
                "{}",
                lead_ranker::output::format_lead_detail(lead, scoring.max_score(), use_colors)
            );
            if let Some(draft) = lead_ranker::outreach::draft_email(&lead.record) {
                println!();
                println!("Draft email:");
                println!();
                println!("{}", draft);
            }
        }
        Commands::Open {
            index,
            target,
            filter,
            ..
        } => {
            let selected = filter_leads(leads, &filter.into());
            let lead = select(&selected, index);
            let Some(url) = lead_ranker::outreach::link_for(&lead.record, target.into()) else {
                eprintln!("Lead #{} has no {:?} link.", index, target);
                std::process::exit(EXIT_INPUT);
            };

            // Open in browser
            if let Err(e) = lead_ranker::browser::open_url(&url) {
                eprintln!("Failed to open browser: {}", e);
                std::process::exit(EXIT_BROWSER);
            }

            println!("Opening lead #{} in browser: {}", index, url);
        }
        Commands::Facets { .. } => {
            let industries = distinct_values(ranked.leads.records(), CanonicalField::Industry);
            let cities = distinct_values(ranked.leads.records(), CanonicalField::City);
            println!(
                "{}",
                lead_ranker::output::format_facets(&industries, &cities)
            );
        }
        Commands::Init { .. } => unreachable!("init handled above"),
    }

    std::process::exit(EXIT_SUCCESS);
}

/// Pick the lead at a 1-based index, exiting when out of range
fn select<'a>(leads: &[&'a ScoredLead], index: usize) -> &'a ScoredLead {
    if index < 1 || index > leads.len() {
        eprintln!(
            "Invalid index {}. Must be between 1 and {}.",
            index,
            leads.len()
        );
        std::process::exit(EXIT_INPUT);
    }
    leads[index - 1]
}
