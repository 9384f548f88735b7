//! Cross-module flows through the public `mirror-core` API.

pub mod fixtures;

#[cfg(test)]
mod concurrency;
#[cfg(test)]
mod transitions;
