//! Capability-интерфейсы внешних коллабораторов motion-контроллера
//!
//! Архитектура:
//! - ECS решает ЧТО делать (gate → motion state → команды)
//! - Хост исполняет КАК (pathfinding, анимации, blackboard) — вне scope
//! - Все три интерфейса — boxed trait objects в ресурсе MotionHooks,
//!   внедряются до первого тика (тот же паттерн, что глобальный LogPrinter)
//!
//! Отсутствие ресурса — ConfigError::MissingHooks, симуляция не тикает.

use bevy::prelude::*;

/// Внешний path-follower (opaque mover)
///
/// Вычисление пути вне scope этого crate: мы только отдаём destination
/// и halt/resume. Вызовы синхронные, реализация не должна блокировать.
pub trait NavigationAgent: Send + Sync {
    /// Новая цель движения (world coordinates)
    fn set_destination(&mut self, target: Vec3);
    /// Возобновить движение по текущему пути
    fn resume(&mut self);
    /// Остановиться немедленно
    fn halt(&mut self);
    /// Сбросить текущий путь
    fn clear_path(&mut self);
}

/// Notification sink: started/stopped
///
/// ВАЖНО: вызывается каждый тик соответствующей ветки (level-triggered),
/// не только на переходах. Подписчики не должны блокировать.
pub trait MotionSignals: Send + Sync {
    fn on_started(&mut self);
    fn on_stopped(&mut self);
}

/// Внешняя shared-ячейка «агент движется»
///
/// Write-only с нашей стороны (read-back не нужен, синхронизация —
/// забота владельца ячейки).
pub trait MovingFlag: Send + Sync {
    fn set_value(&mut self, value: bool);
}

/// Resource с коллабораторами motion-контроллера
#[derive(Resource)]
pub struct MotionHooks {
    pub navigation: Box<dyn NavigationAgent>,
    pub signals: Box<dyn MotionSignals>,
    pub moving_flag: Box<dyn MovingFlag>,
}

impl MotionHooks {
    pub fn new(
        navigation: Box<dyn NavigationAgent>,
        signals: Box<dyn MotionSignals>,
        moving_flag: Box<dyn MovingFlag>,
    ) -> Self {
        Self {
            navigation,
            signals,
            moving_flag,
        }
    }
}
