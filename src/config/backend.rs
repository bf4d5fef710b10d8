//! Database backend selected by the connection URL scheme.

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backend {
    Postgres,
    Sqlite,
}

impl Backend {
    pub fn from_url(url: &str) -> Result<Self, ConfigError> {
        let scheme = url.split(':').next().unwrap_or("").to_ascii_lowercase();
        match scheme.as_str() {
            "postgres" | "postgresql" => Ok(Backend::Postgres),
            "sqlite" => Ok(Backend::Sqlite),
            _ => Err(ConfigError::UnsupportedDatabaseUrl(scheme)),
        }
    }

    /// Whether `url` names a private in-memory SQLite database.
    pub fn is_in_memory(self, url: &str) -> bool {
        self == Backend::Sqlite && (url.contains(":memory:") || url.contains("mode=memory"))
    }

    /// DDL for the `animal` table. Key generation never hands out a deleted id again.
    /// The `Any` driver cannot carry SQLite's BOOLEAN, so `disponivel` is stored as 0/1 there.
    pub fn create_animal_table_sql(self) -> &'static str {
        match self {
            Backend::Postgres => {
                r#"
                CREATE TABLE IF NOT EXISTS animal (
                    id BIGSERIAL PRIMARY KEY,
                    nome VARCHAR(255) NOT NULL,
                    especie VARCHAR(255) NOT NULL,
                    idade BIGINT NOT NULL,
                    disponivel BOOLEAN NOT NULL DEFAULT TRUE
                )
                "#
            }
            Backend::Sqlite => {
                r#"
                CREATE TABLE IF NOT EXISTS animal (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    nome VARCHAR(255) NOT NULL,
                    especie VARCHAR(255) NOT NULL,
                    idade INTEGER NOT NULL,
                    disponivel INTEGER NOT NULL DEFAULT 1
                )
                "#
            }
        }
    }
}
