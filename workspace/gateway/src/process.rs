use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use serde_json::Value;
use tokio::process::Command;
use tracing::{debug, info, instrument, trace};

use crate::error::{GatewayError, Result};
use crate::task::PredictorTask;
use crate::{classify_outcome, Predictor, ProcessOutcome};

/// Predictor backed by an external executable, one child process per task.
///
/// The child is launched as `program [args...] <task-json>`. Both output
/// streams are drained to completion before the exit status is inspected.
/// There is no timeout and no way to cancel a running child: if the caller
/// drops the future, the process is left to finish on its own.
#[derive(Debug, Clone)]
pub struct ProcessPredictor {
    program: OsString,
    args: Vec<OsString>,
    working_dir: Option<PathBuf>,
}

impl ProcessPredictor {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
        }
    }

    /// Predictor running a Python script.
    ///
    /// When `interpreter` is `None` the interpreter is resolved with
    /// [`resolve_interpreter`] relative to `project_root`.
    pub fn python_script(
        interpreter: Option<PathBuf>,
        script: impl AsRef<Path>,
        project_root: impl AsRef<Path>,
    ) -> Self {
        let project_root = project_root.as_ref();
        let interpreter = interpreter.unwrap_or_else(|| resolve_interpreter(project_root));
        let script = project_root.join(script.as_ref());
        Self::new(interpreter).arg(script)
    }

    /// Append a fixed argument placed before the task JSON
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    async fn execute(&self, argument: String) -> Result<ProcessOutcome> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg(argument)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        trace!("Spawning predictor: {:?}", command);
        let child = command.spawn()?;

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| GatewayError::Execution {
                code: None,
                stderr: format!("Failed to collect predictor output: {}", e),
            })?;

        debug!(
            "Predictor finished with {:?} ({} bytes stdout, {} bytes stderr)",
            output.status.code(),
            output.stdout.len(),
            output.stderr.len()
        );

        Ok(ProcessOutcome {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[async_trait]
impl Predictor for ProcessPredictor {
    #[instrument(skip(self), fields(task = task.name()))]
    async fn run(&self, task: &PredictorTask) -> Result<Value> {
        info!("Invoking predictor for task '{}'", task.name());
        let argument = task.to_argument()?;
        let outcome = self.execute(argument).await?;
        classify_outcome(outcome)
    }

    fn describe(&self) -> String {
        let mut parts = vec![self.program.to_string_lossy().into_owned()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// Pick the Python interpreter for the predictor script.
///
/// A project-local virtualenv wins when present, otherwise the platform's
/// default interpreter name is looked up on `PATH`.
pub fn resolve_interpreter(project_root: &Path) -> PathBuf {
    let candidates = [
        project_root.join(".venv").join("bin").join("python"),
        project_root.join(".venv").join("Scripts").join("python.exe"),
    ];
    for candidate in candidates {
        if candidate.is_file() {
            debug!("Using virtualenv interpreter at {}", candidate.display());
            return candidate;
        }
    }

    if cfg!(windows) {
        PathBuf::from("python")
    } else {
        PathBuf::from("python3")
    }
}
