#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FAKE_TOOLS: &[&str] = &["go", "gofmt", "goimports", "golangci-lint"];

/// A throwaway Go module with fake tool binaries that record their argv
pub struct TestEnv {
    _tmp: TempDir,
    pub module: PathBuf,
    pub bin: PathBuf,
    pub log: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_tools(FAKE_TOOLS)
    }

    pub fn with_tools(tools: &[&str]) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let module = tmp.path().join("module");
        let bin = tmp.path().join("bin");
        fs::create_dir_all(&module).expect("create module dir");
        fs::create_dir_all(&bin).expect("create bin dir");
        fs::write(module.join("go.mod"), "module example.com/demo\n\ngo 1.22\n")
            .expect("write go.mod");

        for tool in tools {
            write_fake_tool(&bin, tool);
        }

        let log = tmp.path().join("calls.log");
        Self {
            _tmp: tmp,
            module,
            bin,
            log,
        }
    }

    /// `gotask` rooted at the module, with the fake tools first on PATH
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("gotask").expect("gotask binary");
        let path = format!(
            "{}:{}",
            self.bin.display(),
            std::env::var("PATH").unwrap_or_default()
        );
        cmd.env("PATH", path)
            .env("GOTASK_FAKE_LOG", &self.log)
            .env_remove("GOTASK_FAKE_FAIL")
            .env_remove("GOTASK_FAKE_CODE")
            .env_remove("GOTASK_LOG")
            .arg("--workspace")
            .arg(&self.module);
        cmd
    }

    /// Command lines recorded by the fake tools, in invocation order
    pub fn calls(&self) -> Vec<String> {
        match fs::read_to_string(&self.log) {
            Ok(content) => content.lines().map(str::to_string).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn write_config(&self, yaml: &str) {
        let dir = self.module.join(".gotask");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("workspace.yml"), yaml).expect("write config");
    }
}

/// Fake tool: appends "<name> <args>" to $GOTASK_FAKE_LOG and exits with
/// $GOTASK_FAKE_CODE (default 1) when "<name> <first arg>" equals $GOTASK_FAKE_FAIL
pub fn write_fake_tool(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    let script = format!(
        "#!/bin/sh\n\
         echo \"{name} $*\" >> \"$GOTASK_FAKE_LOG\"\n\
         if [ \"{name} $1\" = \"$GOTASK_FAKE_FAIL\" ]; then\n\
         \x20 exit \"${{GOTASK_FAKE_CODE:-1}}\"\n\
         fi\n\
         exit 0\n"
    );
    fs::write(&path, script).expect("write fake tool");
    let mut perms = fs::metadata(&path).expect("stat fake tool").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod fake tool");
    path
}
