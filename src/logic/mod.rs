pub mod companion;
pub mod neighbors;
pub mod optimizer;
pub mod schedule;

#[cfg(test)]
pub(crate) mod fixtures;
