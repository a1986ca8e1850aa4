/// Browser affordances the dashboard relies on.
///
/// `alert` and `confirm` block until the user answers; `navigate` leaves the
/// current view.
pub trait Interaction {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
    fn navigate(&self, path: &str);
}
