//! Headless симуляция STALKER
//!
//! Запускает Bevy App без рендера: агент, цель, две sight-пробы и стена
//! в block-слое. В середине прогона стена убирается — gate открывается
//! и агент получает resume + destination.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use stalker_simulation::*;

/// Хост-заглушка path-follower'а: реальный NavigationAgent живёт на стороне
/// хоста, здесь только считаем команды
struct CountingNavigation {
    destinations: Arc<AtomicUsize>,
}

impl NavigationAgent for CountingNavigation {
    fn set_destination(&mut self, _target: Vec3) {
        self.destinations.fetch_add(1, Ordering::Relaxed);
    }
    fn resume(&mut self) {}
    fn halt(&mut self) {}
    fn clear_path(&mut self) {}
}

struct SilentSignals;

impl MotionSignals for SilentSignals {
    fn on_started(&mut self) {}
    fn on_stopped(&mut self) {}
}

struct SilentFlag;

impl MovingFlag for SilentFlag {
    fn set_value(&mut self, _value: bool) {}
}

fn main() {
    let mut app = create_headless_app();
    log_info("Starting STALKER headless simulation");

    let destinations = Arc::new(AtomicUsize::new(0));
    app.insert_resource(MotionHooks::new(
        Box::new(CountingNavigation {
            destinations: destinations.clone(),
        }),
        Box::new(SilentSignals),
        Box::new(SilentFlag),
    ));

    let settings = StalkerSettings::default();
    let world = app.world_mut();

    // Сцена: anchor в origin, пробы на +Z, цель на +X
    let anchor = world
        .spawn((Transform::from_xyz(0.0, 1.0, 0.0), SightAnchor))
        .id();
    let probes = vec![
        world
            .spawn((Transform::from_xyz(-1.0, 1.0, 10.0), SightProbe { order: 0 }))
            .id(),
        world
            .spawn((Transform::from_xyz(1.0, 1.0, 10.0), SightProbe { order: 1 }))
            .id(),
    ];
    let target = world.spawn(Transform::from_xyz(12.0, 0.0, 0.0)).id();

    world.spawn((
        Stalker,
        Transform::from_xyz(0.0, 0.0, 20.0),
        SightRig { probes, anchor },
        settings.sight_filter(),
        SightGate::default(),
        MotionState::default(),
        FollowTarget {
            target,
            offset_distance: settings.offset_distance,
        },
    ));

    // Стена в block-слое между пробами и anchor
    let wall = world
        .spawn((
            Transform::from_xyz(0.0, 1.0, 5.0),
            Collider::cuboid(4.0, 2.0, 0.1),
            CollisionGroups::new(
                Group::from_bits_truncate(settings.block_mask),
                Group::ALL,
            ),
        ))
        .id();

    for tick in 0..300 {
        app.update();

        if tick == 150 {
            // Стена убрана — gate откроется на следующей оценке
            app.world_mut().despawn(wall);
            log_info("wall removed at tick 150");
        }
    }

    log_info(&format!(
        "Simulation complete: {} set_destination calls",
        destinations.load(Ordering::Relaxed)
    ));
}
