//! Tests for the verification store

#[cfg(test)]
mod reaper_tests;
