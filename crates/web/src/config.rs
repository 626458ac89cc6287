use anyhow::{Context, Result, bail};
use storage::dto::{athlete::UPDATABLE_FIELDS, common::DEFAULT_MAX_LIMIT};

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MUTABLE_FIELDS: &str = "nome,idade";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub max_page_limit: u32,
    pub athlete_mutable_fields: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections: optional_number(
                "DATABASE_MAX_CONNECTIONS",
                DEFAULT_MAX_CONNECTIONS,
            )?,
            max_page_limit: optional_number("MAX_PAGE_LIMIT", DEFAULT_MAX_LIMIT)?,
            athlete_mutable_fields: parse_mutable_fields(
                &std::env::var("ATHLETE_MUTABLE_FIELDS")
                    .unwrap_or_else(|_| DEFAULT_MUTABLE_FIELDS.to_string()),
            )?,
        })
    }
}

fn optional_number(key: &str, default: u32) -> Result<u32> {
    match std::env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("{key} must be a number")),
        Err(_) => Ok(default),
    }
}

/// Parses a comma separated list of athlete JSON field names, rejecting names
/// a partial update cannot carry.
pub fn parse_mutable_fields(raw: &str) -> Result<Vec<String>> {
    let fields: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect();

    if let Some(unknown) = fields.iter().find(|f| !UPDATABLE_FIELDS.contains(&f.as_str())) {
        bail!(
            "ATHLETE_MUTABLE_FIELDS contains unknown field '{}', expected any of {:?}",
            unknown,
            UPDATABLE_FIELDS
        );
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mutable_fields() {
        let fields = parse_mutable_fields(DEFAULT_MUTABLE_FIELDS).unwrap();
        assert_eq!(fields, vec!["nome", "idade"]);
    }

    #[test]
    fn test_mutable_fields_are_trimmed() {
        let fields = parse_mutable_fields(" nome , peso,,altura ").unwrap();
        assert_eq!(fields, vec!["nome", "peso", "altura"]);
    }

    #[test]
    fn test_unknown_mutable_field_is_rejected() {
        let err = parse_mutable_fields("nome,categoria").unwrap_err();
        assert!(err.to_string().contains("categoria"));
    }
}
