pub mod queue;

pub use queue::PriorityQueue;
