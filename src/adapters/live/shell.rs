//! Live shell executor using `std::process::Command`.

use std::process::Command;

use crate::ports::shell::{ShellExecutor, ShellOutput};

/// Executor that spawns real processes.
pub struct ProcessExecutor;

impl ShellExecutor for ProcessExecutor {
    fn run(
        &self,
        program: &str,
        args: &[String],
    ) -> Result<ShellOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|e| format!("failed to run {program}: {e}"))?;
        Ok(ShellOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_program_with_args() {
        let result = ProcessExecutor.run("echo", &["hello".to_string()]).unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "hello");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn captures_exit_code() {
        let args = vec!["-c".to_string(), "exit 42".to_string()];
        let result = ProcessExecutor.run("sh", &args).unwrap();

        assert_eq!(result.exit_code, 42);
        assert!(!result.success());
    }

    #[test]
    fn missing_program_is_an_error() {
        let err = ProcessExecutor.run("pgstructgen-no-such-program", &[]).unwrap_err();
        assert!(err.to_string().contains("pgstructgen-no-such-program"));
    }
}
