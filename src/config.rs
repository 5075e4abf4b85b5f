//! Runtime configuration.
//!
//! Values come from command-line flags first, then environment variables
//! (a `.env` file in the working directory is loaded if present), then
//! defaults.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{BookError, BookResult};
use crate::storage::{BookStore, JsonFileStore, SqliteStore};

pub const ENV_FILE: &str = "ADDRESSBOOK_FILE";
pub const ENV_BACKEND: &str = "ADDRESSBOOK_BACKEND";
pub const ENV_LOG: &str = "ADDRESSBOOK_LOG";

const DATA_DIR: &str = ".data";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where the address book is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Json,
    Sqlite,
}

impl Backend {
    fn default_file_name(&self) -> &'static str {
        match self {
            Backend::Json => "addressbook.json",
            Backend::Sqlite => "addressbook.db",
        }
    }

    /// Guess the backend from a file extension.
    fn infer(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Backend::Json),
            "db" | "sqlite" | "sqlite3" => Some(Backend::Sqlite),
            _ => None,
        }
    }
}

impl FromStr for Backend {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Backend::Json),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(BookError::Config {
                reason: format!("unknown backend '{}', expected json or sqlite", other),
            }),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Json => f.write_str("json"),
            Backend::Sqlite => f.write_str("sqlite"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_path: PathBuf,
    pub backend: Backend,
    pub log_level: String,
    /// JSON file to import into the SQLite store instead of starting the REPL.
    pub import_path: Option<PathBuf>,
}

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Reads flags from `args` (without the program name) and the process
    /// environment.
    pub fn load<I>(args: I) -> BookResult<Invocation>
    where
        I: IntoIterator<Item = String>,
    {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// Same as `load`, with environment lookups supplied by the caller.
    pub fn resolve<I, F>(args: I, env_var: F) -> BookResult<Invocation>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut args = args.into_iter();
        let mut data_path: Option<PathBuf> = None;
        let mut backend: Option<Backend> = None;
        let mut import_path: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--file" | "-f" => {
                    data_path = Some(PathBuf::from(required_value(&mut args, "--file", "a path")?));
                }
                "--backend" | "-b" => {
                    backend = Some(required_value(&mut args, "--backend", "json or sqlite")?.parse()?);
                }
                "--import" => {
                    import_path = Some(PathBuf::from(required_value(&mut args, "--import", "a JSON file path")?));
                }
                "--help" | "-h" => return Ok(Invocation::Help),
                other => {
                    return Err(BookError::Config {
                        reason: format!("unknown argument: {}", other),
                    })
                }
            }
        }

        let data_path = data_path.or_else(|| env_var(ENV_FILE).filter(|s| !s.trim().is_empty()).map(PathBuf::from));
        let backend = match backend {
            Some(b) => Some(b),
            None => env_var(ENV_BACKEND).map(|s| s.parse::<Backend>()).transpose()?,
        };

        let backend = backend
            .or_else(|| data_path.as_deref().and_then(Backend::infer))
            .unwrap_or(if import_path.is_some() {
                Backend::Sqlite
            } else {
                Backend::Json
            });

        if import_path.is_some() && backend != Backend::Sqlite {
            return Err(BookError::Config {
                reason: "--import writes to a sqlite store; use --backend sqlite".into(),
            });
        }

        let data_path =
            data_path.unwrap_or_else(|| PathBuf::from(DATA_DIR).join(backend.default_file_name()));
        let log_level = env_var(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Invocation::Run(Config {
            data_path,
            backend,
            log_level,
            import_path,
        }))
    }

    pub fn open_store(&self) -> Box<dyn BookStore> {
        match self.backend {
            Backend::Json => Box::new(JsonFileStore::new(&self.data_path)),
            Backend::Sqlite => Box::new(SqliteStore::new(&self.data_path)),
        }
    }
}

fn required_value<I>(args: &mut I, flag: &str, what: &str) -> BookResult<String>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or_else(|| BookError::Config {
        reason: format!("{} requires {}", flag, what),
    })
}

pub const USAGE: &str = "\
Address Book

Usage: addressbook [OPTIONS]

Options:
  -f, --file <PATH>        Address book file (default: .data/addressbook.json)
  -b, --backend <KIND>     Storage backend: json or sqlite (default: json)
  --import <JSON_PATH>     Import a JSON address book into a sqlite file
  -h, --help               Show this help

Environment:
  ADDRESSBOOK_FILE, ADDRESSBOOK_BACKEND, ADDRESSBOOK_LOG (or RUST_LOG)";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(args: &[&str], env: &[(&str, &str)]) -> BookResult<Invocation> {
        let env: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::resolve(args.iter().map(|s| s.to_string()), |k| env.get(k).cloned())
    }

    fn run_config(args: &[&str], env: &[(&str, &str)]) -> Config {
        match resolve(args, env).unwrap() {
            Invocation::Run(c) => c,
            Invocation::Help => panic!("expected run"),
        }
    }

    #[test]
    fn defaults_to_json_in_data_dir() {
        let c = run_config(&[], &[]);
        assert_eq!(c.backend, Backend::Json);
        assert_eq!(c.data_path, PathBuf::from(".data/addressbook.json"));
        assert_eq!(c.log_level, "warn");
        assert!(c.import_path.is_none());
    }

    #[test]
    fn sqlite_backend_changes_default_file() {
        let c = run_config(&["--backend", "sqlite"], &[]);
        assert_eq!(c.data_path, PathBuf::from(".data/addressbook.db"));
    }

    #[test]
    fn flags_override_environment() {
        let c = run_config(
            &["-f", "mine.json"],
            &[(ENV_FILE, "theirs.json"), (ENV_LOG, "debug")],
        );
        assert_eq!(c.data_path, PathBuf::from("mine.json"));
        assert_eq!(c.log_level, "debug");
    }

    #[test]
    fn backend_is_inferred_from_extension() {
        let c = run_config(&["--file", "book.db"], &[]);
        assert_eq!(c.backend, Backend::Sqlite);
    }

    #[test]
    fn environment_backend_is_used() {
        let c = run_config(&[], &[(ENV_BACKEND, "SQLite")]);
        assert_eq!(c.backend, Backend::Sqlite);
    }

    #[test]
    fn import_defaults_to_sqlite() {
        let c = run_config(&["--import", "old.json"], &[]);
        assert_eq!(c.backend, Backend::Sqlite);
        assert_eq!(c.import_path, Some(PathBuf::from("old.json")));
    }

    #[test]
    fn import_into_json_is_rejected() {
        assert!(resolve(&["--import", "old.json", "--backend", "json"], &[]).is_err());
    }

    #[test]
    fn help_flag() {
        assert_eq!(resolve(&["-h"], &[]).unwrap(), Invocation::Help);
    }

    #[test]
    fn missing_flag_value_and_unknown_flag_fail() {
        assert!(resolve(&["--file"], &[]).is_err());
        assert!(resolve(&["--verbose"], &[]).is_err());
        assert!(resolve(&["--backend", "xml"], &[]).is_err());
    }
}
