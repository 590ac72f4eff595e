/// ProgressReporter port for user-facing status messages
///
/// Kept separate from diagnostic logging: these lines are meant for the
/// person running the tool and go to stderr so stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
