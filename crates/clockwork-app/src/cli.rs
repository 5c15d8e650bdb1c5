use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Clockwork: chat with an agent that knows how to look up the time.
#[derive(Parser, Debug)]
#[command(name = "clockwork", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error) or a full
    /// filter directive such as `clockwork_ai=debug`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the web chat (default).
    Serve {
        /// Address to bind, overriding `server.host`.
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on, overriding `server.port`.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Chat with the agent in the terminal.
    Chat,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve {
            host: None,
            port: None,
        })
    }

    /// Filter directive for the log subscriber.
    pub fn log_directive(&self, configured: &str) -> String {
        match self.log_level.as_deref() {
            Some(level) if level.contains('=') => level.to_string(),
            Some(level) => format!("clockwork={level}"),
            None => configured.to_string(),
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
