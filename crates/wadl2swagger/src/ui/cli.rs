use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "wadl2swagger")]
#[command(author, version, about = "WADL to Swagger 2.0 converter")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Convert a WADL document to Swagger 2.0 JSON
  Convert(ConvertCommand),
  /// List information from a WADL document
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
}

#[derive(Args, Debug)]
pub struct ConvertCommand {
  /// Path to the WADL XML file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the Swagger JSON will be written (stdout when omitted)
  #[arg(short, long, value_name = "FILE")]
  pub output: Option<PathBuf>,

  /// Emit minified JSON instead of pretty-printed
  #[arg(long, default_value_t = false)]
  pub compact: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List all operations the converted document exposes
  Operations {
    /// Path to the WADL XML file
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
