/// Blocking user dialogs.
pub trait Notifier {
    fn alert(&self, message: &str);
}

/// Prints alerts to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn alert(&self, message: &str) {
        println!("{message}");
    }
}
