//! Integration tests for formgate-validator.

mod callbacks;
mod config;
mod latch;
mod scenario;
