use chrono::{DateTime, Local};
use std::env;
use std::path::PathBuf;

/// Live shell state consumed during segment evaluation. Segments only see
/// this trait, so tests can substitute fixed values.
pub trait Environment {
    fn working_dir(&self) -> Option<PathBuf>;

    fn home_dir(&self) -> Option<PathBuf>;

    fn var(&self, key: &str) -> Option<String>;

    /// Exit code of the last command the shell ran.
    fn last_exit_code(&self) -> i32;

    /// Short name of the invoking shell, e.g. "zsh".
    fn shell(&self) -> String;

    fn now(&self) -> DateTime<Local>;
}

/// Environment backed by the real process state, with optional overrides
/// passed in from the command line.
#[derive(Debug, Default)]
pub struct ShellEnvironment {
    pub pwd: Option<PathBuf>,
    pub exit_code: i32,
    pub shell: Option<String>,
}

impl Environment for ShellEnvironment {
    fn working_dir(&self) -> Option<PathBuf> {
        self.pwd.clone().or_else(|| env::current_dir().ok())
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn last_exit_code(&self) -> i32 {
        self.exit_code
    }

    fn shell(&self) -> String {
        self.shell.clone().unwrap_or_else(|| {
            env::var("SHELL")
                .ok()
                .and_then(|path| {
                    PathBuf::from(path)
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                })
                .unwrap_or_else(|| "shell".to_string())
        })
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}
