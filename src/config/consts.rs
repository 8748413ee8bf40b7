/// Upper bound on the capacity a configuration may pre-allocate
pub const MAX_INITIAL_CAPACITY: usize = 1 << 24;
/// Capacity used when a configuration does not name one
pub const DEFAULT_INITIAL_CAPACITY: usize = 0;
