//! Application layer: the scripted scenario for each pattern.
//!
//! Every demo builds its objects, runs them once, and hands back the
//! results for the interface layer to print.

pub mod demo;
