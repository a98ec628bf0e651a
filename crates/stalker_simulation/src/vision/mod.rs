//! Visibility gate: line-of-sight пробы против статической layer-топологии
//!
//! Каждый тик: для каждой пробы rig'а луч к anchor, nearest hit в пределах
//! block ∪ unblock, классификация nearest-hit-wins. Aggregate пишется
//! в SightGate для motion-контроллера (система идёт следом в chain).

pub mod gate;


pub use gate::{classify_ray, update_sight_gate};
