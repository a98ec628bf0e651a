//! STALKER Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: одиночный агент преследует подвижную цель,
//! движение разрешено только пока visibility gate чист (все sight-пробы
//! доводят луч до опорной точки, не упираясь в block-слой; более близкая
//! unblock-поверхность на том же луче снимает блок).
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (gate, motion state, destination math)
//! - Хост = tactical layer (pathfinding, физика движения, анимации) —
//!   подключается через capability-хуки (MotionHooks)

use bevy::prelude::*;

// Публичные модули
pub mod components;
pub mod error;
pub mod hooks;
pub mod logger;
pub mod motion;
pub mod setup;
pub mod vision;

// Re-export базовых типов для удобства
pub use components::*;
pub use error::ConfigError;
pub use hooks::{MotionHooks, MotionSignals, MovingFlag, NavigationAgent};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger,
    set_logger_if_needed, LogLevel, LogPrinter,
};
pub use motion::{drive_motion, follow_destination};
pub use setup::{validate_stalker_setup, StalkerReady, StalkerSettings};
pub use vision::{classify_ray, update_sight_gate};

/// Главный plugin симуляции
///
/// Порядок выполнения (FixedUpdate, chain для детерминизма):
/// 1. update_sight_gate — пересчёт gate по свежим позициям
/// 2. drive_motion — state transition + команды коллабораторам
///
/// Startup: validate_stalker_setup — fail fast, без StalkerReady
/// tick-системы не запускаются вовсе.
pub struct StalkerPlugin;

impl Plugin for StalkerPlugin {
    fn build(&self, app: &mut App) {
        // Fixed timestep 60Hz для simulation tick (легче считать интервалы)
        app.insert_resource(Time::<Fixed>::from_hz(60.0));

        app.add_systems(Startup, setup::validate_stalker_setup);

        app.add_systems(
            FixedUpdate,
            (vision::update_sight_gate, motion::drive_motion)
                .chain() // Последовательное выполнение: gate до motion
                .run_if(resource_exists::<setup::StalkerReady>),
        );
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// MinimalPlugins + transforms + rapier + StalkerPlugin; сцену и
/// MotionHooks добавляет вызывающий ДО первого update (валидация
/// срабатывает в Startup).
pub fn create_headless_app() -> App {
    use bevy_rapier3d::prelude::{NoUserData, RapierPhysicsPlugin};

    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .add_plugins(bevy::transform::TransformPlugin)
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(StalkerPlugin);

    app
}
