//! Vision компоненты: sight rig, пробы, layer-фильтр, gate

use bevy::prelude::*;
use bevy_rapier3d::prelude::Group;

/// Проба обзора (observation point) — origin одного sight-луча
///
/// Отдельная entity с Transform (обычно child агента или точка уровня).
/// Позиция читается заново каждый тик, ничего не кэшируется.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct SightProbe {
    /// Порядок в rig — только для debug-вывода (гизмо), на aggregate не влияет
    pub order: u32,
}

/// Маркер опорной точки (reference point) — к ней кастятся все лучи rig'а
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct SightAnchor;

/// Sight rig агента: фиксированный набор проб + anchor
///
/// Конфигурируется один раз до первого тика; `validate_stalker_setup`
/// проверяет что probes непуст и все entity имеют Transform.
#[derive(Component, Debug, Clone)]
pub struct SightRig {
    /// Пробы в debug-порядке (aggregate short-circuit идёт по этому списку)
    pub probes: Vec<Entity>,
    /// Опорная точка лучей
    pub anchor: Entity,
}

/// Пара layer-масок для классификации поверхностей
///
/// Нарочно две независимые маски, а не единый enum приоритетов:
/// побеждает БЛИЖАЙШЕЕ попадание, и только его membership решает исход.
#[derive(Component, Debug, Clone, Copy)]
pub struct SightFilter {
    /// Слои, останавливающие движение
    pub block: Group,
    /// Слои, снимающие блок если задеты ближе block-поверхности
    pub unblock: Group,
}

impl SightFilter {
    /// Объединённая маска raycast'а (block ∪ unblock) — прочие слои луч игнорирует
    pub fn union(&self) -> Group {
        self.block | self.unblock
    }
}

/// Вердикт одного sight-луча
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum RayVerdict {
    /// Ничего не задето в пределах длины луча (или нулевая длина)
    Clear,
    /// Ближайшее попадание в unblock-слой — блок снят
    Unblocked,
    /// Ближайшее попадание в block-слой — движение запрещено
    Blocked,
}

impl RayVerdict {
    /// Разрешает ли этот луч движение (Clear и Unblocked эквивалентны для aggregate)
    pub fn permits_motion(&self) -> bool {
        !matches!(self, RayVerdict::Blocked)
    }
}

/// Aggregate gate: пересчитывается каждый тик с нуля (без гистерезиса)
///
/// `verdicts` — последние пер-луч вердикты в порядке rig, для внешнего
/// debug-рендера. При short-circuit хвост после первого Blocked не
/// оценивается и в списке отсутствует.
///
/// Default = blocked: до первой реальной оценки (physics context ещё не
/// поднят) консервативно считаем движение запрещённым.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct SightGate {
    /// true = все лучи не Blocked, движение разрешено
    pub all_clear: bool,
    /// Пер-луч вердикты последней оценки (порядок rig)
    pub verdicts: Vec<RayVerdict>,
}
