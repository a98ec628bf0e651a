//! Ошибки конфигурации (fail fast до первого тика)

use bevy::prelude::*;
use thiserror::Error;

/// Нарушение precondition конфигурации
///
/// Любая из этих ошибок означает что тикать нельзя: `validate_stalker_setup`
/// логирует каждую и не вставляет `StalkerReady`, поэтому tick-системы
/// не запускаются вовсе (никакого частично-определённого поведения).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no stalker entity with SightRig + SightFilter + FollowTarget was spawned")]
    NoStalker,

    #[error("sight rig has no probes configured")]
    NoProbes,

    #[error("sight probe entity {0:?} has no Transform")]
    MissingProbe(Entity),

    #[error("sight anchor entity {0:?} has no Transform")]
    MissingAnchor(Entity),

    #[error("follow target entity {0:?} has no Transform")]
    MissingFollowTarget(Entity),

    #[error("MotionHooks resource is not installed")]
    MissingHooks,
}
