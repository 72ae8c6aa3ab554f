//! Shell completion generation for tabsh
//!
//! This module generates shell completion scripts for bash, zsh, fish, and
//! PowerShell. For bash, the script is extended so that the PREFIX argument
//! of `tabsh complete` is itself completed from the effective vocabulary
//! (via `tabsh vocab`).

use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io;

use crate::cli::CliArgs;
use crate::error::{ConfigError, Result, TabshError};

/// Generate shell completion script
///
/// # Arguments
/// * `shell_name` - Shell type (bash, zsh, fish, powershell)
///
/// # Returns
/// * `Result<()>` - Success or error
pub fn generate_completion(shell_name: &str) -> Result<()> {
    let shell = parse_shell(shell_name)?;

    match shell {
        Shell::Bash => generate_bash_completion(),
        _ => {
            let mut cmd = CliArgs::command();
            generate(shell, &mut cmd, "tabsh", &mut io::stdout());
            Ok(())
        }
    }
}

/// Parse shell name string to Shell enum
fn parse_shell(shell_name: &str) -> Result<Shell> {
    match shell_name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "powershell" => Ok(Shell::PowerShell),
        _ => Err(TabshError::Config(ConfigError::Generic(format!(
            "Unsupported shell: {shell_name}. Supported shells: bash, zsh, fish, powershell"
        )))),
    }
}

/// Generate Bash completion with dynamic vocabulary support
fn generate_bash_completion() -> Result<()> {
    let mut cmd = CliArgs::command();
    let mut buffer = Vec::new();
    generate(Shell::Bash, &mut cmd, "tabsh", &mut buffer);

    let basic_completion = String::from_utf8_lossy(&buffer);

    // Complete the PREFIX argument of `tabsh complete` from the vocabulary
    let custom_completion = format!(
        r#"{basic_completion}

# Custom completion for command keywords
_tabsh_list_vocab() {{
    tabsh vocab 2>/dev/null
}}

_tabsh_enhanced() {{
    local cur prev words cword
    _init_completion || return

    if [[ "${{words[1]}}" == "complete" && $cword -eq 2 ]]; then
        COMPREPLY=($(compgen -W "$(_tabsh_list_vocab)" -- "$cur"))
        return 0
    fi

    _tabsh "$@"
}}

complete -F _tabsh_enhanced tabsh
"#
    );

    print!("{custom_completion}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_shell() {
        assert!(matches!(parse_shell("bash"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("fish"), Ok(Shell::Fish)));
        assert!(matches!(parse_shell("powershell"), Ok(Shell::PowerShell)));
        assert!(parse_shell("invalid").is_err());
    }

    #[test]
    fn test_parse_shell_case_insensitive() {
        assert!(matches!(parse_shell("BASH"), Ok(Shell::Bash)));
        assert!(matches!(parse_shell("Zsh"), Ok(Shell::Zsh)));
        assert!(matches!(parse_shell("FiSh"), Ok(Shell::Fish)));
    }
}
