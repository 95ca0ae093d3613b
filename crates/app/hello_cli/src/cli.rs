use clap::{Parser, Subcommand};

/// Greets people by name.
#[derive(Parser, Debug)]
#[command(name = "hello", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a greeting for each name, one per line.
    Greet {
        /// Names to greet.
        names: Vec<String>,

        /// Name greeted when no names are given.
        #[arg(long, env = "HELLO_NAME", default_value = "world")]
        default_name: String,
    },
    /// Print version information.
    Version,
}

impl Commands {
    /// Names to greet, falling back to the default name when none were given.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Commands::Greet {
                names,
                default_name,
            } if names.is_empty() => vec![default_name.as_str()],
            Commands::Greet { names, .. } => names.iter().map(String::as_str).collect(),
            Commands::Version => Vec::new(),
        }
    }
}
