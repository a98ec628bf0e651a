//! Конфигурация и fail-fast валидация (до первого тика)

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;
use serde::{Deserialize, Serialize};

use crate::components::{FollowTarget, SightFilter, SightRig};
use crate::error::ConfigError;
use crate::hooks::MotionHooks;

/// Resource-маркер: конфигурация валидна, tick-системы можно запускать
///
/// Вставляется `validate_stalker_setup` только если нарушений нет;
/// gate/motion системы гейтятся на его существовании.
#[derive(Resource, Debug, Default)]
pub struct StalkerReady;

/// Host-facing настройки (plain data, serde-friendly)
///
/// Маски — сырые биты rapier `Group`; конвертация в typed компоненты
/// через `sight_filter()`. Пересечение block/unblock легально, но
/// валидация логирует warning (почти наверняка misconfiguration).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StalkerSettings {
    /// Биты block-маски
    pub block_mask: u32,
    /// Биты unblock-маски
    pub unblock_mask: u32,
    /// Отступ до цели (метры, >= 0)
    pub offset_distance: f32,
}

impl Default for StalkerSettings {
    fn default() -> Self {
        Self {
            block_mask: Group::GROUP_1.bits(),
            unblock_mask: Group::GROUP_2.bits(),
            offset_distance: 2.0,
        }
    }
}

impl StalkerSettings {
    pub fn sight_filter(&self) -> SightFilter {
        SightFilter {
            block: Group::from_bits_truncate(self.block_mask),
            unblock: Group::from_bits_truncate(self.unblock_mask),
        }
    }
}

/// Система (Startup): проверка всех preconditions разом
///
/// Не останавливается на первой ошибке — логирует каждую, чтобы хост
/// увидел полный список недостающих зависимостей. При любой ошибке
/// StalkerReady не вставляется и симуляция отказывается тикать.
pub fn validate_stalker_setup(
    mut commands: Commands,
    stalkers: Query<(&SightRig, &SightFilter, &FollowTarget)>,
    transforms: Query<&Transform>,
    hooks: Option<Res<MotionHooks>>,
) {
    let mut errors: Vec<ConfigError> = Vec::new();

    if hooks.is_none() {
        errors.push(ConfigError::MissingHooks);
    }

    if stalkers.is_empty() {
        errors.push(ConfigError::NoStalker);
    }

    for (rig, filter, follow) in stalkers.iter() {
        if rig.probes.is_empty() {
            errors.push(ConfigError::NoProbes);
        }
        for &probe in &rig.probes {
            if transforms.get(probe).is_err() {
                errors.push(ConfigError::MissingProbe(probe));
            }
        }
        if transforms.get(rig.anchor).is_err() {
            errors.push(ConfigError::MissingAnchor(rig.anchor));
        }
        if transforms.get(follow.target).is_err() {
            errors.push(ConfigError::MissingFollowTarget(follow.target));
        }

        if filter.block.intersects(filter.unblock) {
            crate::log_warning(&format!(
                "block/unblock маски пересекаются ({:?}) — nearest-hit всё равно решает детерминированно, но это похоже на misconfiguration",
                filter.block & filter.unblock
            ));
        }
    }

    if errors.is_empty() {
        commands.insert_resource(StalkerReady);
    } else {
        for error in &errors {
            crate::log_error(&format!("config: {}", error));
        }
        crate::log_error("stalker simulation refuses to tick: fix configuration");
    }
}
