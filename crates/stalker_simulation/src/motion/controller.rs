//! Drive-система motion-контроллера + destination math

use bevy::prelude::*;

use crate::components::{FollowTarget, MotionState, SightGate, Stalker};
use crate::hooks::MotionHooks;

/// Destination с отступом: не доходим `offset_distance` метров до цели
/// вдоль оси цель→агент
///
/// Совпадающие позиции: направление не определено → идём в саму цель
/// (нулевой отступ, без NaN).
pub fn follow_destination(target: Vec3, seeker: Vec3, offset_distance: f32) -> Vec3 {
    let toward = (target - seeker).normalize_or_zero();
    target - toward * offset_distance
}

/// Система: gate → MotionState + команды коллабораторам
///
/// Каждый тик (после update_sight_gate, chain):
/// - gate clear → Moving: resume + set_destination(offset destination),
///   flag = true, on_started
/// - gate blocked → Stopped: clear_path + halt, flag = false, on_stopped
///
/// ВАЖНО: команды/flag/notifications эмитятся КАЖДЫЙ тик ветки, не только
/// на переходах — хост-сторона (blackboard, анимации) рассчитывает на
/// ежетиковую запись. Лог — только на переходах, иначе спам.
pub fn drive_motion(
    mut hooks: ResMut<MotionHooks>,
    mut stalkers: Query<
        (&SightGate, &FollowTarget, &GlobalTransform, &mut MotionState),
        With<Stalker>,
    >,
    transforms: Query<&GlobalTransform>,
) {
    for (gate, follow, transform, mut state) in stalkers.iter_mut() {
        if gate.all_clear {
            let Ok(target_transform) = transforms.get(follow.target) else {
                // Цель пропала из мира — валидация такое не пускает, skip
                continue;
            };

            let destination = follow_destination(
                target_transform.translation(),
                transform.translation(),
                follow.offset_distance,
            );

            if *state != MotionState::Moving {
                crate::log(&format!("🏃 stalker resumed → destination {:?}", destination));
            }
            *state = MotionState::Moving;

            hooks.navigation.resume();
            hooks.navigation.set_destination(destination);
            hooks.moving_flag.set_value(true);
            hooks.signals.on_started();
        } else {
            if *state != MotionState::Stopped {
                crate::log("✋ stalker halted (sight gate blocked)");
            }
            *state = MotionState::Stopped;

            hooks.navigation.clear_path();
            hooks.navigation.halt();
            hooks.moving_flag.set_value(false);
            hooks.signals.on_stopped();
        }
    }
}
