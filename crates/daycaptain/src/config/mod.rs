use std::process::Command;

pub const DEFAULT_URL: &str = "https://daycaptain.com";
pub const URL_ENV_VAR: &str = "DAYCAPTAIN_URL";
pub const TOKEN_ENV_VAR: &str = "DC_API_TOKEN";
pub const TOKEN_CMD_ENV_VAR: &str = "DC_API_TOKEN_COMMAND";

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub base_url: String,
    pub token: String,
}

impl ServiceConfig {
    pub fn new<U: Into<String>, T: Into<String>>(base_url: U, token: T) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
        }
    }
}

pub fn base_url_from_env() -> String {
    std::env::var(URL_ENV_VAR)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_URL.to_string())
}

/// Resolves the API token: explicit flag value first, then `$DC_API_TOKEN`,
/// then the captured stdout of the command named in `$DC_API_TOKEN_COMMAND`.
pub fn resolve_token(flag_value: Option<&str>) -> Option<String> {
    if let Some(value) = flag_value.filter(|value| !value.is_empty()) {
        return Some(value.to_string());
    }
    if let Ok(value) = std::env::var(TOKEN_ENV_VAR) {
        return Some(value);
    }
    let command = std::env::var(TOKEN_CMD_ENV_VAR).ok()?;
    run_token_command(&command)
}

fn run_token_command(command: &str) -> Option<String> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    let output = Command::new(program).args(parts).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(strip_trailing_newline(stdout))
}

fn strip_trailing_newline(mut value: String) -> String {
    if value.ends_with('\n') {
        value.pop();
        if value.ends_with('\r') {
            value.pop();
        }
    }
    value
}
