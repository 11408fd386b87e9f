use casa_configurator::adapters::navigator::PrintNavigator;
use casa_configurator::core::Category;
use casa_configurator::{
    Catalog, ConfiguratorError, ConfiguratorSession, LinkGenerator, SelectionStore,
    SubmitChannel, View,
};

#[test]
fn test_switches_and_thermostat_counts() {
    let mut store = SelectionStore::new(Catalog::builtin());
    store.increment("switch_1").unwrap();
    store.increment("switch_1").unwrap();
    store.increment("thermostat").unwrap();

    assert_eq!(store.total_count(), 3);
    assert_eq!(store.category_count(Category::Lighting), 2);
    assert_eq!(store.category_count(Category::Climate), 1);
}

#[test]
fn test_socket_add_then_remove_leaves_no_entry() {
    let mut store = SelectionStore::new(Catalog::builtin());
    store.increment("socket").unwrap();
    store.decrement("socket").unwrap();

    assert!(!store.contains("socket"));
    assert_eq!(store.total_count(), 0);
    assert!(store.grouped_summary().is_empty());
}

#[test]
fn test_total_matches_category_sum_for_every_device() {
    let catalog = Catalog::builtin();
    let mut store = SelectionStore::new(catalog);

    // 每個設備加上不同數量，再減掉一部分
    for (i, device) in catalog.devices().iter().enumerate() {
        for _ in 0..(i % 4) {
            store.increment(device.id).unwrap();
        }
        if i % 3 == 0 {
            store.decrement(device.id).unwrap();
        }
    }

    let by_category: u32 = catalog
        .categories()
        .iter()
        .map(|c| store.category_count(c.id))
        .sum();
    assert_eq!(store.total_count(), by_category);

    for group in store.grouped_summary() {
        assert!(!group.items.is_empty());
        assert!(group.items.iter().all(|(_, quantity)| *quantity > 0));

        let catalog_order: Vec<&str> = catalog
            .devices_in(group.category.id)
            .map(|d| d.id)
            .filter(|id| store.contains(id))
            .collect();
        let summary_order: Vec<&str> = group.items.iter().map(|(d, _)| d.id).collect();
        assert_eq!(summary_order, catalog_order);
    }
}

#[test]
fn test_complete_session_round() {
    let mut session = ConfiguratorSession::new(Catalog::builtin(), LinkGenerator::default());
    let mut navigator = PrintNavigator::new(Vec::new());

    session.view_summary().unwrap();
    assert!(session.is_review_empty());
    assert!(matches!(
        session.submit(SubmitChannel::Email, &mut navigator),
        Err(ConfiguratorError::EmptySelection)
    ));

    session.back().unwrap();
    session.selection_mut().increment("central_hub").unwrap();
    session.selection_mut().increment("mesh_point_1").unwrap();
    session.selection_mut().contact_mut().switch_brand = "Jung LS990".to_string();
    session.view_summary().unwrap();
    assert!(session.can_submit());

    let link = session
        .submit(SubmitChannel::Whatsapp, &mut navigator)
        .unwrap();
    assert!(link.contains("Hub%20Central"));
    assert_eq!(session.view(), View::Submitted);

    session.start_new().unwrap();
    assert_eq!(session.view(), View::Configuring);
    assert_eq!(session.selection().total_count(), 0);
    assert!(session.selection().contact().switch_brand.is_empty());
}
