use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported host platform")]
    UnsupportedHost,

    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => {
                Some("Check your sdk.toml (or sdk.json / sdk.yaml) for syntax errors or unknown fields.".to_string())
            }
            CliError::UnsupportedHost => {
                Some("Pass --platform Win64, Linux or Mac explicitly.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}
