//! Integration test suite for skylift.
//!
//! These tests exercise the full launch pipeline from task file to the
//! remote execution command, verifying stage ordering, fail-fast
//! aborts, and the exact subprocess commands the pipeline constructs.
//!
//! # Test Categories
//!
//! - `launch_e2e`: Full launch scenarios against a recording runner
//! - `stage_abort`: Failure propagation and aborted-stage assertions
//!
//! # CI Compatibility
//!
//! All external commands go through a recording test double; no real
//! provisioner is invoked and no cloud credentials are needed.

mod fixtures;

mod stage_abort;
