//! Motion компоненты: состояние движения, преследуемая цель

use bevy::prelude::*;

/// Маркер stalker-агента (один на симуляцию)
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Stalker;

/// Состояние motion-контроллера
///
/// Владеет только `drive_motion`; переживает тики. Начальное значение —
/// Stopped, но первый тик всегда переоценивает gate и эмитит команды,
/// так что начальное значение снаружи не наблюдаемо.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
#[reflect(Component)]
pub enum MotionState {
    /// Gate чист — агент идёт к offset-destination
    Moving,
    /// Gate заблокирован — path-follower остановлен
    #[default]
    Stopped,
}

/// Преследуемая цель + отступ
///
/// Destination считается только в Moving: не доходим `offset_distance`
/// метров до цели вдоль оси цель→агент.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FollowTarget {
    /// Подвижная цель (entity с Transform)
    pub target: Entity,
    /// Насколько не доходить до цели (метры, >= 0)
    pub offset_distance: f32,
}
