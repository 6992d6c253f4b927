/// Logging port used by the application layer.
///
/// Keeps use cases free of any concrete logging backend; the delivery layer
/// injects an adapter at startup.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
