use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// Rendered query output on stdout. Fails the process when any query
    /// slot failed or the input did not parse.
    pub fn rendered(rendered: String, succeeded: bool) -> Self {
        Self {
            exit_code: if succeeded {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            },
            stderr: None,
            stdout: Some(rendered.trim_end_matches('\n').to_string()),
        }
    }
}
