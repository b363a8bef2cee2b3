//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use devassist_assistants::AssistantKind;

/// devassist - kickstart new Python projects
#[derive(Parser, Debug)]
#[command(name = "devassist")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to a devassist config file (default: ~/.devassistant/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Python assistants
    #[command(subcommand)]
    Python(PythonCommands),

    /// List available assistants
    List,

    /// Show how an existing project was generated
    Inspect(InspectArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

// Python assistants
#[derive(Subcommand, Debug)]
pub enum PythonCommands {
    /// Django Assistant lets you create a Django project.
    Django(ProjectArgs),

    /// Flask Assistant lets you create a Flask project.
    Flask(ProjectArgs),

    /// Python Library Assistant lets you create a custom python library.
    Lib(LibraryArgs),
}

impl PythonCommands {
    /// Selected assistant and the supplied name
    pub fn into_parts(self) -> (AssistantKind, String) {
        match self {
            Self::Django(args) => (AssistantKind::Django, args.name),
            Self::Flask(args) => (AssistantKind::Flask, args.name),
            Self::Lib(args) => (AssistantKind::Library, args.name),
        }
    }
}

#[derive(Args, Debug)]
pub struct ProjectArgs {
    /// Name of the project (can also be full or relative path)
    #[arg(short, long)]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct LibraryArgs {
    /// Name of the library (can also be full or relative path)
    #[arg(short, long)]
    pub name: String,
}

// Inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Project directory
    #[arg(default_value = ".")]
    pub path: Utf8PathBuf,
}

// Config commands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show resolved configuration
    Show,
}
