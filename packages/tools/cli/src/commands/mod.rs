//! CLI 명령어 구현

pub mod auth;
pub mod config;
pub mod http;
pub mod notes;
pub mod profile;

#[cfg(test)]
mod testing;

/// 출력 형식
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// JSON 형식이면 출력하고 true
    pub fn print_json<T: serde::Serialize>(&self, value: &T) -> anyhow::Result<bool> {
        if *self != OutputFormat::Json {
            return Ok(false);
        }
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(true)
    }
}
