use implot_error::Error as ParseError;

/// Utility enum to package errors that can occur while processing an expression.
#[derive(Debug)]
pub enum Error {
    /// The expression could not be parsed.
    Parse(ParseError),

    /// The output could not be serialized to JSON.
    Json(serde_json::Error),
}

impl Error {
    /// Report the error to stderr.
    ///
    /// Parse errors are rendered with `ariadne`, pointing into the given input.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::Parse(err) => {
                if let Err(io_err) = err.report_to_stderr("input", input) {
                    eprintln!("failed to report error: {}", io_err);
                }
            },
            Self::Json(err) => eprintln!("failed to serialize output: {}", err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
