use slotmap::SlotMap;
use super::*;

#[test]
fn test_render_view_empty() {
    let view = RenderView::new(Vec::new(), Vec::new(), 0, 0);

    assert_eq!(view.visible_count(), 0);
    assert!(view.visible_nodes().is_empty());
    assert_eq!(view.statistics(), DrawStatistics::default());
}

#[test]
fn test_in_frustum_counts_visible_entities() {
    let mut keys: SlotMap<EntityKey, ()> = SlotMap::with_key();
    let a = keys.insert(());
    let b = keys.insert(());

    let view = RenderView::new(vec![0, 2], vec![a, b], 10, 7);

    assert_eq!(view.visible_entities(), &[a, b]);
    assert_eq!(view.visible_nodes(), &[0, 2]);
    assert_eq!(view.statistics(), DrawStatistics {
        total: 10,
        in_frustum: 2,
        in_frustum_checks: 7,
    });
}
