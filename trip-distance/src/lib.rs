//! Trip distance computation.
//!
//! Answers: "How far does the vehicle travel between these two stops of
//! this trip?" by summing great-circle distances hop by hop over the
//! stops in between.

pub mod distance;
pub mod domain;
pub mod snapshot;
