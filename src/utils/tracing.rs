/// Log an error as a full snafu report instead of only its top-level
/// message.
#[macro_export]
macro_rules! tracing_report {
    ($error:expr) => {
        tracing::error!(err = %snafu::Report::from_error(&$error));
    };
}
