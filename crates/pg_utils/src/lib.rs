//! Small macro utilities shared by the workspace crates.
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod range_invoke;
