//! Auto Driving Car Simulation Library
//!
//! Simulates vehicles executing command strings on a bounded grid, with a
//! console front end that can be driven from any reader/writer pair.

pub mod simulation;

pub mod console;
