use crate::error::BuildError;
use std::io::{self, ErrorKind, Read};
use std::path::PathBuf;
use std::process::{Command, Stdio};

/// The external build tool, seen as opaque "run this, get text back" calls.
///
/// Every call blocks until the tool exits and returns its stdout and
/// stderr merged in write order. There is no timeout.
pub trait BuildSystem {
    fn clean(&mut self) -> Result<String, BuildError>;

    fn build_all(&mut self) -> Result<String, BuildError>;

    /// Best-effort removal of a cached result. Never fails the run.
    fn invalidate(&mut self, check_id: &str, location: &str);

    fn run_check(&mut self, check_id: &str, location: &str) -> Result<String, BuildError>;
}

pub fn result_target(check_id: &str, location: &str) -> String {
    format!("{location}{check_id}.result")
}

/// Drives `make clean`, `make all` and `make <location><check>.result`.
pub struct MakeBuild {
    program: String,
    dir: PathBuf,
}

impl MakeBuild {
    pub fn new(program: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            dir: dir.into(),
        }
    }

    /// Runs the tool with stdout and stderr sharing one pipe, so the text
    /// comes back interleaved in the order the tool wrote it.
    fn invoke(&self, arg: &str) -> Result<String, BuildError> {
        tracing::debug!(program = %self.program, arg, dir = %self.dir.display(), "invoking build tool");
        let spawn = |source| BuildError::Spawn {
            program: self.program.clone(),
            arg: arg.to_string(),
            source,
        };
        let capture = |source| BuildError::Capture {
            program: self.program.clone(),
            arg: arg.to_string(),
            source,
        };

        let (mut reader, writer) = io::pipe().map_err(spawn)?;
        let mut child = Command::new(&self.program)
            .arg(arg)
            .current_dir(&self.dir)
            .stdin(Stdio::null())
            .stdout(writer.try_clone().map_err(spawn)?)
            .stderr(writer)
            .spawn()
            .map_err(spawn)?;

        // Both write ends now live only in the child; EOF arrives when it exits.
        let mut raw = Vec::new();
        reader.read_to_end(&mut raw).map_err(capture)?;
        let status = child.wait().map_err(capture)?;
        tracing::debug!(arg, status = ?status.code(), "build tool finished");
        Ok(String::from_utf8_lossy(&raw).into_owned())
    }
}

impl BuildSystem for MakeBuild {
    fn clean(&mut self) -> Result<String, BuildError> {
        self.invoke("clean")
    }

    fn build_all(&mut self) -> Result<String, BuildError> {
        self.invoke("all")
    }

    fn invalidate(&mut self, check_id: &str, location: &str) {
        let path = self.dir.join(result_target(check_id, location));
        match std::fs::remove_file(&path) {
            Ok(()) => tracing::debug!(path = %path.display(), "removed stale result"),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no stale result to remove")
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "could not remove stale result"),
        }
    }

    fn run_check(&mut self, check_id: &str, location: &str) -> Result<String, BuildError> {
        self.invoke(&result_target(check_id, location))
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::{BuildSystem, MakeBuild};
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn fake_make(dir: &TempDir) -> String {
        let script = dir.path().join("fake-make");
        fs::write(&script, "#!/bin/sh\necho \"out $1\"\necho \"err $1\" >&2\n").expect("write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");
        script.to_string_lossy().to_string()
    }

    #[test]
    fn captures_stdout_and_stderr() {
        let dir = TempDir::new().expect("temp dir");
        let mut build = MakeBuild::new(fake_make(&dir), dir.path());
        let out = build.run_check("alarm-zero", "build/tests/threads/").expect("run");
        assert!(out.contains("out build/tests/threads/alarm-zero.result"));
        assert!(out.contains("err build/tests/threads/alarm-zero.result"));
    }

    #[test]
    fn merges_streams_in_write_order() {
        let dir = TempDir::new().expect("temp dir");
        let script = dir.path().join("noisy-make");
        fs::write(
            &script,
            "#!/bin/sh\necho \"compiling $1\"\necho \"thread.c:9: warning: unused\" >&2\necho done\n",
        )
        .expect("write script");
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).expect("chmod");

        let mut build = MakeBuild::new(script.to_string_lossy(), dir.path());
        let out = build.build_all().expect("run");
        assert_eq!(out, "compiling all\nthread.c:9: warning: unused\ndone\n");
    }

    #[test]
    fn invalidate_removes_artifact_and_tolerates_absence() {
        let dir = TempDir::new().expect("temp dir");
        let location = dir.path().join("build/tests/threads");
        fs::create_dir_all(&location).expect("mkdir");
        let artifact = location.join("alarm-zero.result");
        fs::write(&artifact, "PASS").expect("write artifact");

        let mut build = MakeBuild::new("make", dir.path());
        build.invalidate("alarm-zero", "build/tests/threads/");
        assert!(!artifact.exists());
        build.invalidate("alarm-zero", "build/tests/threads/");
    }

    #[test]
    fn missing_tool_is_a_spawn_error() {
        let dir = TempDir::new().expect("temp dir");
        let mut build = MakeBuild::new("definitely-not-a-build-tool", dir.path());
        let err = build.build_all().unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-build-tool all"));
    }
}
