use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use wadl2swagger::converter;
use wadl2swagger::utils::WadlLoader;

use crate::ui::{Colors, ConvertCommand};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

pub async fn convert_document(command: ConvertCommand, colors: &Colors) -> anyhow::Result<()> {
  let loader = WadlLoader::open(&command.input).await?;
  let swagger = converter::convert(&loader.parse()?)?;

  let json = if command.compact {
    serde_json::to_string(&swagger)?
  } else {
    serde_json::to_string_pretty(&swagger)?
  };

  match &command.output {
    Some(path) => {
      if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
      }
      tokio::fs::write(path, &json).await?;

      if !command.quiet {
        println!(
          "{} {}",
          format_timestamp().with(colors.timestamp()),
          format!(
            "Converted {} paths ({} operations) to {}",
            swagger.paths.len(),
            swagger.operation_count(),
            path.display()
          )
          .with(colors.success())
        );
      }
    }
    None => println!("{json}"),
  }

  Ok(())
}
