//! Motion controller: двухсостоянийный автомат поверх SightGate
//!
//! Moving ⇄ Stopped, переключение только от значения gate. Все side effects
//! уходят во внешние коллабораторы (MotionHooks) и level-triggered:
//! пере-эмитятся каждый тик соответствующей ветки.

pub mod controller;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod controller_tests;

pub use controller::{drive_motion, follow_destination};
