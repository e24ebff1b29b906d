//! Sandbox with fake node tooling on `PATH` for driving the binary.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

pub struct Sandbox {
    _root: TempDir,
    pub bin: PathBuf,
    pub home: PathBuf,
    pub work: PathBuf,
    pub log: PathBuf,
}

impl Sandbox {
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        let bin = root.path().join("bin");
        let home = root.path().join("home");
        let work = root.path().join("work");
        for dir in [&bin, &home, &work] {
            fs::create_dir_all(dir).unwrap();
        }
        let log = root.path().join("tools.log");
        fs::write(&log, "").unwrap();

        Self {
            _root: root,
            bin,
            home,
            work,
            log,
        }
    }

    /// `git --version` succeeds, `git init` creates `.git/`.
    pub fn with_git(self) -> Self {
        self.tool(
            "git",
            r#"case "$1" in
  --version) echo "git version 2.45.0" ;;
  init) mkdir -p .git ;;
esac"#,
        )
    }

    /// `npm init` writes a minimal manifest, `npm install` only logs.
    pub fn with_npm(self) -> Self {
        self.tool("npm", NODE_MANAGER)
    }

    pub fn with_yarn(self) -> Self {
        self.tool("yarnpkg", NODE_MANAGER)
    }

    /// npm whose install step exits 1.
    pub fn with_broken_npm(self) -> Self {
        self.tool(
            "npm",
            r#"case "$1" in
  --version) echo "10.8.0" ;;
  init) printf '{\n  "name": "myapp"\n}\n' > package.json ;;
  install) echo "npm ERR! network" >&2; exit 1 ;;
esac"#,
        )
    }

    /// `gitignore-dot-io node <platform>` writes `.gitignore`.
    pub fn with_gitignore_generator(self) -> Self {
        self.tool(
            "gitignore-dot-io",
            r##"case "$1" in
  --help) echo "usage: gitignore-dot-io <types...>" ;;
  *) echo "# $*" > .gitignore ;;
esac"##,
        )
    }

    /// Write an executable shell script that logs every call.
    pub fn tool(self, name: &str, body: &str) -> Self {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let path = self.bin.join(name);
            let script = format!(
                "#!/bin/sh\nPATH=/usr/bin:/bin\necho \"{name} $*\" >> '{}'\n{body}\n",
                self.log.display()
            );
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
        self
    }

    pub fn project(&self, name: &str) -> PathBuf {
        self.work.join(name)
    }

    /// Every tool invocation so far, one per line.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(&self.log)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The binary with a clean environment: only the fake tools are on
    /// `PATH` and the user's config directory is empty.
    pub fn cmd(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("czinit");
        cmd.env_clear()
            .env("PATH", &self.bin)
            .env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", self.home.join(".config"))
            .current_dir(&self.work);
        cmd
    }

    pub fn read_json(&self, path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }
}

const NODE_MANAGER: &str = r#"case "$1" in
  --version) echo "10.8.0" ;;
  init) printf '{\n  "name": "myapp",\n  "version": "1.0.0"\n}\n' > package.json ;;
  install|add) ;;
esac"#;
