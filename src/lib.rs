//! FIFO, LIFO and priority queue disciplines behind one interface.
//!
//! The [`queue`] module is the library proper. The remaining modules back
//! the `qdisc` command-line driver.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod queue;
