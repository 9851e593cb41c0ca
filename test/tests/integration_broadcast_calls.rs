/// Integration tests for broadcast-to-clients calls: the authoritative
/// instance gate and the other-clients flag.
use farcall_server::{
    BroadcastClientsCall, CallRoute, EntityCall, EntityCallError, Resolved,
};
use farcall_test::{avatar_module, TestEntity, TestRegistry};

#[test]
fn broadcast_resolves_client_methods_on_the_real_entity() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(5, schema.clone()));

    let call = BroadcastClientsCall::new(5, false, schema);
    match call.resolve_attribute(&registry, "show_damage") {
        Ok(Resolved::Method(method)) => assert_eq!(method.method().name(), "show_damage"),
        _ => panic!("expected a bound method"),
    }
}

#[test]
fn shadow_instances_may_not_broadcast() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(5, schema.clone()).shadow());

    let call = BroadcastClientsCall::new(5, false, schema);
    let error = call.resolve_attribute(&registry, "show_damage").err().unwrap();
    assert_eq!(error, EntityCallError::TargetNotAuthoritative { entity_id: 5 });
}

#[test]
fn missing_broadcast_target_is_target_not_found() {
    let schema = avatar_module();
    let registry = TestRegistry::new();

    let call = BroadcastClientsCall::new(5, false, schema);
    let error = call.resolve_attribute(&registry, "show_damage").err().unwrap();
    assert_eq!(error, EntityCallError::TargetNotFound { entity_id: 5 });
}

#[test]
fn destroyed_broadcast_target_is_target_destroyed() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(5, schema.clone()));
    registry.get_mut(5).unwrap().destroy();

    let call = BroadcastClientsCall::new(5, false, schema);
    let error = call.resolve_attribute(&registry, "show_damage").err().unwrap();
    assert_eq!(error, EntityCallError::TargetDestroyed { entity_id: 5 });
}

#[test]
fn other_clients_flag_is_stamped_on_the_route() {
    let schema = avatar_module();

    let call = BroadcastClientsCall::new(5, true, schema);
    assert_eq!(
        call.route(),
        CallRoute::Broadcast {
            entity_id: 5,
            other_clients: true,
        }
    );
}

#[test]
fn broadcast_chains_into_component_scope() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(5, schema.clone()));

    let call = BroadcastClientsCall::new(5, false, schema);
    let component = match call.resolve_attribute(&registry, "inventory") {
        Ok(Resolved::Component(component)) => component,
        _ => panic!("expected a component-scoped call"),
    };

    match component.resolve_attribute(&registry, "recharge") {
        Ok(Resolved::Method(method)) => assert_eq!(method.method().id(), 21),
        _ => panic!("expected the component's client method"),
    }

    // the owner's own client method is invisible in component scope
    assert!(matches!(
        component.resolve_attribute(&registry, "show_damage"),
        Ok(Resolved::Miss)
    ));
}

#[test]
fn shadow_gate_applies_to_component_broadcasts_too() {
    let schema = avatar_module();
    let mut registry = TestRegistry::new();
    registry.insert(TestEntity::new(5, schema.clone()));

    let call = BroadcastClientsCall::new(5, false, schema);
    let component = match call.resolve_attribute(&registry, "inventory") {
        Ok(Resolved::Component(component)) => component,
        _ => panic!("expected a component-scoped call"),
    };

    // the entity loses authority after the component call was created
    registry.remove(5);
    let shadow_schema = avatar_module();
    registry.insert(TestEntity::new(5, shadow_schema).shadow());

    let error = component
        .resolve_attribute(&registry, "recharge")
        .err()
        .unwrap();
    assert_eq!(error, EntityCallError::TargetNotAuthoritative { entity_id: 5 });
}
