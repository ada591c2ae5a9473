use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storctl")]
#[command(about = "Inspect and list objects of a storage cluster", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Cluster data file (defaults to $STORCTL_DATA, then cluster.json in the config dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data: Option<PathBuf>,

    /// Config directory (defaults to $STORCTL_CONFIG_DIR, then the platform config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage nodes
    Node {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage volumes
    Volume {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage policies
    Policy {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Manage namespaces
    Namespace {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., volumes-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value; empty clears it)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ResourceAction {
    /// List objects
    #[command(alias = "list")]
    Ls {
        /// Only display the identifying field
        #[arg(short, long)]
        quiet: bool,

        /// Pretty-print using a template, or `table`, `raw`, `table <template>`
        #[arg(long)]
        format: Option<String>,
    },

    /// Display detailed information on one or more objects
    Inspect {
        /// Format the output using the given template (JSON when omitted).
        /// Fields use the stored JSON names, e.g. `{{ name }}` or `{{ .mountedBy }}`,
        /// not the column names `ls --format` accepts
        #[arg(short, long)]
        format: Option<String>,

        /// References (id, name; `namespace/name` for volumes)
        #[arg(required = true, num_args = 1..)]
        refs: Vec<String>,
    },
}
