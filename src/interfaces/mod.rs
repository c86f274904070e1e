//! Output side of the showcase: turns demo results into console text or
//! JSON lines.

pub mod report;
