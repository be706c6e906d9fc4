pub mod redis;

pub use redis::RedisSnapshotStore;
