//! Two-proportion significance testing for A/B experiments, plus the
//! channel terminology and data model shared with the `abcalc` binary.

pub mod channel;
pub mod model;
pub mod stats;
