/// User-facing acknowledgment surface. One call per acknowledgment, the
/// way a page pops an alert box.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Prints acknowledgments to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("🔔 {}", message);
    }
}
