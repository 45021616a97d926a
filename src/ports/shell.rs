//! Shell executor port for running external commands.

/// The output of a command execution.
#[derive(Debug, Clone)]
pub struct ShellOutput {
    /// The exit code of the process.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl ShellOutput {
    /// Returns `true` if the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external programs such as source formatters.
pub trait ShellExecutor: Send + Sync {
    /// Runs `program` with `args` and returns its output.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned.
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>>;
}
