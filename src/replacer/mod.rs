mod fifo;
mod lru;
mod optimal;

pub use {fifo::FifoCache, lru::LruCache, optimal::OptimalCache};
