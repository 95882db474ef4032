//! Standalone judge solutions: one binary per problem under `src/bin/`,
//! all running through the batch driver and run-environment plumbing in
//! [`judge`].

pub mod judge;
pub mod problems;
