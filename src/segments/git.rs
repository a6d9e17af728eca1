use crate::environment::Environment;
use crate::segments::{bool_property, string_property, Properties, SegmentError, SegmentSource};
use crate::utils::debug_with_context;

#[derive(Debug, Clone, Default)]
struct GitInfo {
    branch: Option<String>,
    sha: Option<String>,
}

/// Git branch segment backed by gix. Disabled outside a repository.
pub struct GitSource {
    branch_icon: String,
    show_sha: bool,
    info: GitInfo,
}

impl GitSource {
    pub fn new(properties: &Properties) -> Self {
        Self {
            branch_icon: string_property(properties, "branch_icon", "\u{e0a0} "),
            show_sha: bool_property(properties, "show_sha", false),
            info: GitInfo::default(),
        }
    }

    fn load_info(&self, repo: gix::Repository) -> Result<GitInfo, SegmentError> {
        let mut info = GitInfo::default();

        match repo.head_ref() {
            Ok(Some(reference)) => {
                info.branch = Some(reference.name().shorten().to_string());
            }
            Ok(None) => {
                // detached HEAD, fall back to the short SHA below
                info.branch = Some("HEAD".to_string());
            }
            Err(err) => return Err(SegmentError::Git(err.to_string())),
        }

        if let Ok(head) = repo.head_commit() {
            info.sha = Some(head.id().to_hex_with_len(7).to_string());
        }

        Ok(info)
    }
}

impl SegmentSource for GitSource {
    fn enabled(&mut self, env: &dyn Environment) -> Result<bool, SegmentError> {
        let Some(cwd) = env.working_dir() else {
            return Ok(false);
        };
        match gix::discover(&cwd) {
            Ok(repo) => {
                self.info = self.load_info(repo)?;
                Ok(self.info.branch.is_some())
            }
            Err(_) => {
                debug_with_context("git", "not in a git repository");
                Ok(false)
            }
        }
    }

    fn text(&self, _env: &dyn Environment) -> String {
        let mut text = String::new();
        if let Some(branch) = &self.info.branch {
            text.push_str(&self.branch_icon);
            text.push_str(branch);
        }
        if self.show_sha {
            if let Some(sha) = &self.info.sha {
                text.push_str(&format!(" {}", sha));
            }
        }
        text
    }
}
