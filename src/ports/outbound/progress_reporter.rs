/// ProgressReporter port for user feedback during operations
///
/// Everything reported here is diagnostic; rendered output goes through
/// [`OutputPresenter`](super::OutputPresenter) instead.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Signals that a network request has started
    ///
    /// Implementations may show a spinner until the next
    /// `report_completion` or `report_error` call.
    fn report_loading(&self, message: &str);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
