//! mplot-cli: command line driver for the mplot range/grid helpers and the
//! demonstration plots rendered through plotly.
pub mod cli;
pub mod demo;
pub mod util;
