use clap::Parser;

use docsearch::{CategoryFlags, SearchOptions};

#[derive(Debug, Parser)]
#[command(name = "docsearch", version)]
#[command(about = "Search cheats, links and glossary entries across YAML topic files.")]
#[command(after_help = "Search roots are read from DOCSEARCH_PATH (':'-separated).")]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct Cli {
    /// Restrict search on cheats matches
    #[arg(short = 'C', long)]
    pub(crate) cheats: bool,

    /// Restrict search on glossary matches
    #[arg(short = 'G', long)]
    pub(crate) glossary: bool,

    /// Restrict search on links matches
    #[arg(short = 'L', long)]
    pub(crate) links: bool,

    /// Enable colored output
    #[arg(short = 'c', long)]
    pub(crate) colored: bool,

    /// Show used DOCSEARCH_* environment variables
    #[arg(short = 'e', long)]
    pub(crate) env: bool,

    /// List all topics
    #[arg(short = 'i', long)]
    pub(crate) inventory: bool,

    /// JSON output, one object per line
    #[arg(short = 'j', long)]
    pub(crate) json: bool,

    /// Colorize matched terms
    #[arg(short = 'm', long)]
    pub(crate) matched: bool,

    /// Show topic file paths instead of their content
    #[arg(short = 'p', long)]
    pub(crate) pwd: bool,

    /// Keyword or term to search in entry descriptions
    #[arg(short = 's', long, value_name = "TERM")]
    pub(crate) search: Option<String>,

    /// Search on a specific topic
    #[arg(short = 't', long, value_name = "NAME")]
    pub(crate) topic: Option<String>,
}

impl From<Cli> for SearchOptions {
    fn from(cli: Cli) -> Self {
        Self {
            categories: CategoryFlags {
                links: cli.links,
                cheats: cli.cheats,
                glossary: cli.glossary,
            },
            colored: cli.colored,
            env: cli.env,
            inventory: cli.inventory,
            json: cli.json,
            matched: cli.matched,
            pwd: cli.pwd,
            search: cli.search,
            topic: cli.topic,
        }
    }
}
