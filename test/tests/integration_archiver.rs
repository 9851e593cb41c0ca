/// Integration tests for the time-sliced archiver: slice sizing over a
/// period, candidate eligibility, and the one-shot auto-archive mode.
use farcall_server::{Archiver, AutoArchive, Entity, ServerConfig};
use farcall_test::{avatar_module, TestEntity, TestRegistry};

fn registry_with_archivable(count: i32) -> TestRegistry {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    for id in 1..=count {
        registry.insert(TestEntity::new(id, schema.clone()).with_db(AutoArchive::Always));
    }
    registry
}

#[test]
fn ten_entities_over_four_ticks_follow_the_slice_boundaries() {
    let mut registry = registry_with_archivable(10);
    let mut archiver = Archiver::new(4);

    // boundaries at 10*k/4 = 0, 2, 5, 7, 10
    let expected_cumulative = [2, 5, 7, 10];

    for expected in expected_cumulative {
        archiver.tick(&mut registry);
        assert_eq!(registry.total_writes(), expected);
    }
}

#[test]
fn each_entity_is_archived_exactly_once_per_period() {
    let mut registry = registry_with_archivable(10);
    let mut archiver = Archiver::new(4);

    for _ in 0..4 {
        archiver.tick(&mut registry);
    }

    for id in 1..=10 {
        assert_eq!(registry.get(id).unwrap().write_count(), 1);
    }
}

#[test]
fn zero_period_disables_archiving() {
    let mut registry = registry_with_archivable(5);
    let mut archiver = Archiver::from_config(&ServerConfig {
        archive_period_ticks: 0,
    });

    for _ in 0..20 {
        archiver.tick(&mut registry);
    }

    assert_eq!(registry.total_writes(), 0);
}

#[test]
fn entities_without_auto_archive_never_become_candidates() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(1, schema.clone()).with_db(AutoArchive::Always));
    // has a database row, but auto-archive is off
    registry.insert(TestEntity::new(2, schema.clone()).with_db(AutoArchive::Never));
    // no database row at all
    registry.insert(TestEntity::new(3, schema));

    let mut archiver = Archiver::new(2);
    for _ in 0..4 {
        archiver.tick(&mut registry);
    }

    assert_eq!(registry.get(1).unwrap().write_count(), 2);
    assert_eq!(registry.get(2).unwrap().write_count(), 0);
    assert_eq!(registry.get(3).unwrap().write_count(), 0);
}

#[test]
fn one_shot_mode_archives_once_then_reverts_to_never() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(1, schema).with_db(AutoArchive::OnceThenNever));

    let mut archiver = Archiver::new(1);

    archiver.tick(&mut registry);
    assert_eq!(registry.get(1).unwrap().write_count(), 1);
    assert_eq!(registry.get(1).unwrap().auto_archive(), AutoArchive::Never);

    // later periods must not pick it up again
    for _ in 0..3 {
        archiver.tick(&mut registry);
    }
    assert_eq!(registry.get(1).unwrap().write_count(), 1);
}

#[test]
fn entities_destroyed_mid_period_are_skipped_not_retried() {
    let mut registry = registry_with_archivable(4);
    let mut archiver = Archiver::new(2);

    archiver.tick(&mut registry);
    assert_eq!(registry.total_writes(), 2);

    // everything disappears before the second slice runs
    for id in 1..=4 {
        registry.remove(id);
    }

    archiver.tick(&mut registry);
    assert_eq!(registry.total_writes(), 0);
}

#[test]
fn db_eligibility_is_rechecked_at_archive_time() {
    let mut registry = registry_with_archivable(2);
    let mut archiver = Archiver::new(2);

    archiver.tick(&mut registry);
    assert_eq!(registry.total_writes(), 1);

    // the not-yet-visited entity loses its database row mid-period
    for id in 1..=2 {
        let entity = registry.get_mut(id).unwrap();
        if entity.write_count() == 0 {
            entity.drop_db();
        }
    }

    archiver.tick(&mut registry);
    assert_eq!(registry.total_writes(), 1);
}
