use std::io::{self, Write};

use crate::config::Config;
use crate::error::{PoiError, Result};
use crate::types::IssueState;

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("Poi Configuration");
    println!("=================\n");

    let member = prompt("Enter your member id: ")?;
    if member.is_empty() {
        return Err(PoiError::MissingMember);
    }

    let tracker = prompt("Enter tracker file path [optional]: ")?;

    let active: Vec<&str> = IssueState::ACTIVE.iter().map(|s| s.as_str()).collect();
    let open_states = prompt(&format!(
        "Enter open states, comma separated [{}]: ",
        active.join(", ")
    ))?;

    let config = Config {
        member: Some(member),
        tracker: (!tracker.is_empty()).then(|| tracker.into()),
        open_states: (!open_states.is_empty()).then(|| {
            open_states
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        }),
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| PoiError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let contents = toml::to_string(&config).map_err(|e| {
        PoiError::Io(io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    })?;
    std::fs::write(&config_path, contents).map_err(|e| PoiError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'poi' commands!");

    Ok(())
}
