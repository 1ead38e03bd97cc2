use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub fn app_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_monkey-app"))
}

/// Command for the app with a clean `MONKEY_APP_*` environment.
pub fn app_command() -> Command {
    let mut cmd = Command::new(app_binary());
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("MONKEY_APP_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env("MONKEY_APP_NO_ART", "1");
    cmd
}

/// Run a scripted session, feeding `script` on stdin.
pub fn run_session(mut cmd: Command, script: &str) -> Result<Output> {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn {:?}", cmd))?;
    {
        let mut stdin = child.stdin.take().context("stdin not captured")?;
        // The app may exit before reading (start-up failures, --help).
        if let Err(err) = stdin.write_all(script.as_bytes()) {
            if err.kind() != std::io::ErrorKind::BrokenPipe {
                return Err(err.into());
            }
        }
    }
    child
        .wait_with_output()
        .context("failed to collect session output")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}
