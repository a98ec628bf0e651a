//! ECS Components для stalker-агента
//!
//! Организация по доменам:
//! - vision: sight rig и классификация лучей (SightProbe, SightAnchor,
//!   SightRig, SightFilter, RayVerdict, SightGate)
//! - motion: состояние движения и преследуемая цель (MotionState, FollowTarget)

pub mod motion;
pub mod vision;

// Re-exports для удобного импорта
pub use motion::*;
pub use vision::*;
