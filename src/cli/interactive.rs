// src/cli/interactive.rs
use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use tracing::{debug, info};

use crate::error::{ReconError, ReconResult};

pub const AUTHORIZATION_PROMPT: &str = "Do you have proper authorization to proceed? (yes/no)";

pub const BANNER: &str = "
ENHANCED OSINT RECONNAISSANCE TOOL
==================================
LEGAL DISCLAIMER:
This tool is for AUTHORIZED penetration testing and security research ONLY.
Ensure you have explicit permission before using this tool.
Misuse may violate privacy laws and regulations.
";

pub fn print_banner() {
    println!("{}", BANNER);
}

/// Only a literal "yes", in any letter case, counts as consent.
pub fn is_affirmative(answer: &str) -> bool {
    answer.to_lowercase() == "yes"
}

/// Ask the operator to confirm authorization before anything else runs
pub fn confirm_authorization() -> ReconResult<()> {
    let answer = if io::stdin().is_terminal() {
        Input::<String>::new()
            .with_prompt(AUTHORIZATION_PROMPT)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ReconError::UnexpectedError(format!("Input error: {}", e)))?
    } else {
        debug!("stdin is not a terminal, reading answer line");
        read_piped_answer()
            .map_err(|e| ReconError::UnexpectedError(format!("Input error: {}", e)))?
    };

    if is_affirmative(&answer) {
        info!("Authorization confirmed by operator");
        Ok(())
    } else {
        println!("Exiting. Only use with proper authorization.");
        Err(ReconError::AuthorizationDeclined)
    }
}

fn read_piped_answer() -> io::Result<String> {
    print!("{}: ", AUTHORIZATION_PROMPT);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
