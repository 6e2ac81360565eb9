use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A git repository with one commit containing `files`.
pub(crate) fn create_test_repo(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);
    // Keep output stable regardless of the user's global git config.
    git(path, &["config", "core.autocrlf", "false"]);
    git(path, &["config", "diff.renames", "true"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    write_files(path, files);
    commit_all(path, "Initial commit");

    temp_dir
}

/// Write files relative to the repo root, creating parent directories.
pub(crate) fn write_files(repo_dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        let file_path = repo_dir.join(name);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(file_path, content).unwrap();
    }
}

pub(crate) fn commit_all(repo_dir: &Path, message: &str) {
    git(repo_dir, &["add", "-A"]);
    git(repo_dir, &["commit", "-m", message]);
}

/// Run git and return its stdout untouched (no trimming, NULs preserved).
pub(crate) fn git_stdout(repo_dir: &Path, args: &[&str]) -> String {
    let output = git(repo_dir, args);
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn git(repo_dir: &Path, args: &[&str]) -> std::process::Output {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    output
}
