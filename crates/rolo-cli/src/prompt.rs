//! Interactive-input collaborator: blocking stdin prompts for free text,
//! yes/no confirmation and enumerated choice.

use anyhow::Result;
use rolo_core::Chooser;
use std::io::{self, BufRead, Write};

/// Reads one line after printing `label`. `None` on EOF.
pub fn read_line(label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut buffer = String::new();
    let read = io::stdin().lock().read_line(&mut buffer)?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buffer.trim_end_matches(['\n', '\r']).to_string()))
}

/// Free-text prompt with an optional suggested value; an empty answer takes
/// the suggestion. `None` on EOF or when there is neither answer nor default.
pub fn ask_text(label: &str, default: Option<&str>) -> Result<Option<String>> {
    let full = match default {
        Some(value) => format!("{} [{}]: ", label, value),
        None => format!("{}: ", label),
    };
    match read_line(&full)? {
        None => Ok(None),
        Some(line) => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                Ok(default.map(str::to_string))
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
    }
}

pub fn confirm(label: &str) -> Result<bool> {
    match read_line(&format!("{} (y/n): ", label))? {
        Some(answer) => {
            let answer = answer.trim().to_lowercase();
            Ok(answer == "y" || answer == "yes")
        }
        None => Ok(false),
    }
}

/// Stdin-backed chooser for the selection protocol: prints the enumerated
/// options and reads an index; an empty answer cancels.
pub struct StdinChooser;

impl Chooser for StdinChooser {
    fn choose(&mut self, prompt: &str, options: &[String]) -> Option<usize> {
        println!("{}:", prompt);
        for (index, option) in options.iter().enumerate() {
            println!("  {}: {}", index, option);
        }
        let answer = read_line("index (empty to cancel): ").ok()??;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return None;
        }
        trimmed.parse::<usize>().ok()
    }
}
