/// User-visible notices outside the normal value flow, like the
/// confirmation shown after a successful tool probe. Rendering them is the
/// host's concern.
pub trait Messenger: Send + Sync {
    fn notify(&self, message: &str);
}
