use crate::domain::model::Schedule;

/// Run settings resolved at the CLI boundary.
pub trait ConfigProvider: Send + Sync {
    /// `None` lets the pool use its default size.
    fn threads(&self) -> Option<usize>;
    fn schedule(&self) -> Schedule;
    fn monitor(&self) -> bool;
    fn warmup(&self) -> bool;
}

pub trait Counter: Send + Sync {
    /// Number of primes in `[2, limit)`.
    fn count(&self, limit: i64) -> u64;

    /// Workers actually used by `count`.
    fn threads(&self) -> usize;

    fn schedule(&self) -> Schedule;
}
