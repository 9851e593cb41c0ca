use farcall_shared::EntityId;

use crate::{
    entity::{AutoArchive, Entity, EntityRegistry},
    server_config::ServerConfig,
};

/// Spreads entity persistence over the archive period instead of bursting
/// every write into a single tick.
///
/// Once per period the eligible entities are snapshotted and shuffled; each
/// tick then archives one slice of the snapshot, sized so that the whole
/// table is covered exactly once per period.
pub struct Archiver {
    period_ticks: u32,
    cursor: u32,
    candidate_ids: Vec<EntityId>,
}

impl Archiver {
    pub fn new(period_ticks: u32) -> Self {
        Self {
            period_ticks,
            // past the period, so the first tick rebuilds the table
            cursor: u32::MAX,
            candidate_ids: Vec::new(),
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(config.archive_period_ticks)
    }

    /// Runs once per server heartbeat tick.
    pub fn tick(&mut self, registry: &mut dyn EntityRegistry) {
        if self.period_ticks == 0 {
            // archiving disabled
            return;
        }

        if self.cursor >= self.period_ticks {
            self.rebuild(registry);
        }

        // size * k / period boundaries partition [0, size) exactly across
        // one period: start of tick k equals end of tick k-1, and the final
        // end is size.
        let size = self.candidate_ids.len();
        let start = size * self.cursor as usize / self.period_ticks as usize;
        self.cursor += 1;
        let end = size * self.cursor as usize / self.period_ticks as usize;

        for &entity_id in &self.candidate_ids[start..end] {
            let Some(entity) = registry.find_entity_mut(entity_id) else {
                // destroyed mid-period; the next rebuild reconsiders it
                continue;
            };

            // eligibility can change between snapshot and tick
            if entity.has_db() {
                Self::archive(entity);
            }
        }
    }

    fn archive(entity: &mut dyn Entity) {
        entity.write_to_db();

        if entity.auto_archive() == AutoArchive::OnceThenNever {
            entity.set_auto_archive(AutoArchive::Never);
        }
    }

    fn rebuild(&mut self, registry: &dyn EntityRegistry) {
        self.cursor = 0;
        self.candidate_ids.clear();

        for entity_id in registry.entity_ids() {
            let Some(entity) = registry.find_entity(entity_id) else {
                continue;
            };
            if entity.has_db() && entity.auto_archive().is_enabled() {
                self.candidate_ids.push(entity_id);
            }
        }

        // spread write load across the period; not an ordering guarantee
        fastrand::shuffle(&mut self.candidate_ids);
    }
}
