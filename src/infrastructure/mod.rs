// Platform infrastructure (durable storage)
pub mod storage;
