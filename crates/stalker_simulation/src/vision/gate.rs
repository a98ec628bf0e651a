//! Оценка sight gate: raycast + двухслойная классификация

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::components::{RayVerdict, SightFilter, SightGate, SightRig};

/// Классифицирует один луч probe → anchor против текущего физического мира
///
/// Единственная точка классификации: её используют и gate-система, и
/// внешний debug-рендер гизмо (никакой дублирующей логики).
///
/// - нулевая длина (проба совпала с anchor) → Clear, без ошибки
/// - нет попадания в пределах длины → Clear
/// - ближайшее попадание в unblock-слой → Unblocked (снимает блок даже
///   если дальше по лучу есть block-поверхность)
/// - иначе → Blocked
pub fn classify_ray(
    context: &RapierContext,
    collision_groups: &Query<&CollisionGroups>,
    origin: Vec3,
    anchor: Vec3,
    filter: &SightFilter,
) -> RayVerdict {
    let delta = anchor - origin;
    let length = delta.length();

    // Направление не определено — zero-length cast
    if length <= f32::EPSILON {
        return RayVerdict::Clear;
    }
    let direction = delta / length;

    // Луч видит только block ∪ unblock; прочие слои для него не существуют
    let ray_groups = CollisionGroups::new(Group::ALL, filter.union());
    let ray_filter = QueryFilter::default().groups(ray_groups);

    match context.cast_ray(origin, direction, length, true, ray_filter) {
        None => RayVerdict::Clear,
        Some((hit, _toi)) => {
            verdict_for_membership(hit_membership(hit, collision_groups), filter)
        }
    }
}

/// Membership попавшегося коллайдера
///
/// Коллайдер без CollisionGroups у rapier состоит во всех группах.
fn hit_membership(hit: Entity, collision_groups: &Query<&CollisionGroups>) -> Group {
    collision_groups
        .get(hit)
        .map(|groups| groups.memberships)
        .unwrap_or(Group::ALL)
}

/// nearest-hit-wins: unblock проверяется первым по membership попадания
///
/// Сюда попадают только hit'ы внутри block ∪ unblock (маска луча),
/// поэтому «не unblock» означает block.
pub(crate) fn verdict_for_membership(memberships: Group, filter: &SightFilter) -> RayVerdict {
    if memberships.intersects(filter.unblock) {
        RayVerdict::Unblocked
    } else {
        RayVerdict::Blocked
    }
}

/// Система: пересчёт SightGate
///
/// Позиции проб и anchor читаются заново каждый тик (никакого кэша),
/// aggregate short-circuit'ится на первом Blocked луче — хвост проб
/// не кастится (порядок = порядок проб в rig).
pub fn update_sight_gate(
    rapier: ReadRapierContext,
    mut stalkers: Query<(&SightRig, &SightFilter, &mut SightGate)>,
    transforms: Query<&GlobalTransform>,
    collision_groups: Query<&CollisionGroups>,
) {
    // Physics context ещё не поднят (первые тики bootstrap) — gate остаётся
    // в прежнем (консервативном) значении
    let Ok(context) = rapier.single() else {
        return;
    };

    for (rig, filter, mut gate) in stalkers.iter_mut() {
        let Ok(anchor_transform) = transforms.get(rig.anchor) else {
            // Валидация не должна была пустить нас сюда
            continue;
        };
        let anchor = anchor_transform.translation();

        gate.verdicts.clear();
        gate.all_clear = true;

        for &probe in &rig.probes {
            let Ok(origin) = transforms.get(probe) else {
                // Проба из rig пропала после Startup-валидации — деградация
                // rig'а не должна молча тянуть aggregate к CLEAR
                crate::log_warning(&format!(
                    "sight probe {:?} из rig не резолвится (despawned?) — луч пропущен",
                    probe
                ));
                continue;
            };

            let verdict =
                classify_ray(&context, &collision_groups, origin.translation(), anchor, filter);
            gate.verdicts.push(verdict);

            if !verdict.permits_motion() {
                gate.all_clear = false;
                break; // short-circuit
            }
        }
    }
}
