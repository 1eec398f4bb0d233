use std::sync::atomic::{AtomicU64, Ordering};

static GLOBAL: InstanceCounter = InstanceCounter::new();

/// Counts successfully constructed accounts of every kind.
///
/// Constructors that take no counter use [`InstanceCounter::global`], which
/// lives for the whole process and is never reset. Pass a local counter to the
/// `open` constructors when a scope needs its own tally.
#[derive(Debug, Default)]
pub struct InstanceCounter {
    count: AtomicU64,
}

impl InstanceCounter {
    pub const fn new() -> Self {
        Self {
            count: AtomicU64::new(0),
        }
    }

    pub fn global() -> &'static InstanceCounter {
        &GLOBAL
    }

    pub fn increment(&self) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::InstanceCounter;

    #[test]
    fn starts_at_zero_and_counts_up() {
        let counter = InstanceCounter::new();
        assert_eq!(counter.get(), 0);
        counter.increment();
        counter.increment();
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn global_is_shared() {
        let before = InstanceCounter::global().get();
        InstanceCounter::global().increment();
        assert!(InstanceCounter::global().get() > before);
    }
}
