//! Server-launch command construction.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ServerSection;
use crate::environment::Interpreter;

/// `<interpreter> -m <module> <app> --reload --host <host> --port <port> --app-dir <base>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerCommand {
    program: PathBuf,
    args: Vec<OsString>,
    working_dir: PathBuf,
}

impl ServerCommand {
    pub fn new(interpreter: &Interpreter, base: &Path, server: &ServerSection) -> Self {
        let mut args: Vec<OsString> = vec![
            "-m".into(),
            server.module.clone().into(),
            server.app.clone().into(),
        ];
        if server.reload {
            args.push("--reload".into());
        }
        args.extend([
            "--host".into(),
            server.host.clone().into(),
            "--port".into(),
            server.port.to_string().into(),
            "--app-dir".into(),
            base.as_os_str().to_owned(),
        ]);

        Self {
            program: interpreter.program().to_path_buf(),
            args,
            working_dir: base.to_path_buf(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Arguments as display strings (lossy for non-UTF-8 paths).
    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    pub fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.working_dir);
        cmd
    }
}

impl fmt::Display for ServerCommand {
    /// Shell-style rendering for `--dry-run`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", quote(self.program.as_os_str()))?;
        for arg in &self.args {
            write!(f, " {}", quote(arg))?;
        }
        Ok(())
    }
}

fn quote(s: &OsStr) -> String {
    let s = s.to_string_lossy();
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if plain {
        s.into_owned()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_command() -> ServerCommand {
        ServerCommand::new(
            &Interpreter::Venv(PathBuf::from("/w/.venv/bin/python")),
            Path::new("/w/repo/backend"),
            &ServerSection::default(),
        )
    }

    #[test]
    fn test_fixed_arguments() {
        let cmd = default_command();
        assert_eq!(cmd.program(), Path::new("/w/.venv/bin/python"));
        assert_eq!(
            cmd.args_lossy(),
            vec![
                "-m",
                "uvicorn",
                "app.main:app",
                "--reload",
                "--host",
                "0.0.0.0",
                "--port",
                "8000",
                "--app-dir",
                "/w/repo/backend",
            ]
        );
        assert_eq!(cmd.working_dir(), Path::new("/w/repo/backend"));
    }

    #[test]
    fn test_same_arguments_for_ambient_interpreter() {
        let venv = default_command();
        let ambient = ServerCommand::new(
            &Interpreter::Ambient(PathBuf::from("/usr/bin/python3")),
            Path::new("/w/repo/backend"),
            &ServerSection::default(),
        );
        assert_eq!(ambient.program(), Path::new("/usr/bin/python3"));
        assert_eq!(ambient.args(), venv.args());
    }

    #[test]
    fn test_reload_can_be_disabled() {
        let server = ServerSection {
            reload: false,
            ..Default::default()
        };
        let cmd = ServerCommand::new(
            &Interpreter::Ambient(PathBuf::from("python")),
            Path::new("/b"),
            &server,
        );
        assert!(!cmd.args_lossy().contains(&"--reload".to_string()));
    }

    #[test]
    fn test_to_command_sets_working_dir() {
        let cmd = default_command().to_command();
        assert_eq!(cmd.get_program(), OsStr::new("/w/.venv/bin/python"));
        assert_eq!(cmd.get_current_dir(), Some(Path::new("/w/repo/backend")));
        assert_eq!(cmd.get_args().count(), 10);
    }

    #[test]
    fn test_display_quotes_spaces() {
        let cmd = ServerCommand::new(
            &Interpreter::Ambient(PathBuf::from("python")),
            Path::new("/home/me/my project"),
            &ServerSection::default(),
        );
        assert_eq!(
            cmd.to_string(),
            "python -m uvicorn app.main:app --reload --host 0.0.0.0 --port 8000 \
             --app-dir '/home/me/my project'"
        );
    }
}
