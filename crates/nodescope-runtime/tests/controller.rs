use nodescope_engine::derive_page;
use nodescope_runtime::{Error, ManualClock, ViewController, ViewOptions};
use nodescope_testing::assertions::operators;
use nodescope_testing::fixtures::{generated_nodes, reference_nodes};
use nodescope_types::{PageSize, SortConfig, SortDirection, SortKey};
use std::time::Duration;

const DEBOUNCE: Duration = Duration::from_millis(300);

fn controller() -> (ViewController<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let controller = ViewController::with_clock(clock.clone(), ViewOptions::default());
    (controller, clock)
}

#[test]
fn test_initial_view_before_load_is_empty() {
    let (controller, _) = controller();
    let view = controller.view();

    assert!(view.rows.is_empty());
    assert_eq!(view.page.page, 1);
    assert_eq!(view.page.total_pages, 1);
    assert_eq!(view.stats.total_nodes, 0);
    assert_eq!(view.stats.avg_uptime, 0.0);
    assert!(view.histogram.is_empty());
}

#[test]
fn test_reference_end_to_end() {
    let (mut controller, clock) = controller();
    let view = controller.load(reference_nodes()).unwrap();

    assert_eq!(operators(&view.rows), vec!["0xAAA", "0xCCC", "0xBBB"]);
    assert_eq!(view.stats.total_nodes, 3);
    assert_eq!(view.stats.active_nodes, 2);
    assert_eq!(view.stats.avg_uptime, 74.92);
    assert_eq!(view.stats.avg_fee, 3.0);
    let labels: Vec<_> = view
        .histogram
        .iter()
        .map(|b| (b.fee_label.as_str(), b.count))
        .collect();
    assert_eq!(labels, vec![("2%", 2), ("5%", 1)]);

    let view = controller.sort_by(SortKey::Fee);
    assert_eq!(
        view.state.sort,
        SortConfig::new(SortKey::Fee, SortDirection::Asc)
    );
    assert_eq!(operators(&view.rows), vec!["0xAAA", "0xBBB", "0xCCC"]);

    controller.request_search("bbb");
    clock.advance(DEBOUNCE);
    let view = controller.tick().expect("search should fire");
    assert_eq!(operators(&view.rows), vec!["0xBBB"]);
    assert_eq!(view.page.total_count, 1);
    assert_eq!(view.stats.total_nodes, 3);
}

#[test]
fn test_search_waits_for_quiet_period() {
    let (mut controller, clock) = controller();
    controller.load(reference_nodes()).unwrap();

    controller.request_search("a");
    clock.advance(Duration::from_millis(150));
    assert!(controller.tick().is_none());

    controller.request_search("ccc");
    clock.advance(Duration::from_millis(250));
    assert!(controller.tick().is_none());
    assert_eq!(controller.pending_search(), Some("ccc"));
    assert_eq!(controller.view().rows.len(), 3);

    clock.advance(Duration::from_millis(50));
    let view = controller.tick().expect("last term should fire");
    assert_eq!(operators(&view.rows), vec!["0xCCC"]);
    assert_eq!(view.state.search_term, "ccc");
    assert_eq!(view.pending_search, None);

    clock.advance(DEBOUNCE);
    assert!(controller.tick().is_none());
}

#[test]
fn test_superseded_search_never_fires() {
    let (mut controller, clock) = controller();
    controller.load(reference_nodes()).unwrap();

    let first = controller.request_search("aaa");
    let _second = controller.request_search("bbb");
    assert!(!controller.cancel_search_handle(first));

    clock.advance(DEBOUNCE);
    let view = controller.tick().unwrap();
    assert_eq!(operators(&view.rows), vec!["0xBBB"]);
}

#[test]
fn test_cancelled_search_leaves_view_alone() {
    let (mut controller, clock) = controller();
    controller.load(reference_nodes()).unwrap();

    controller.request_search("zzz");
    assert!(controller.cancel_search());
    assert!(!controller.cancel_search());

    clock.advance(DEBOUNCE);
    assert!(controller.tick().is_none());
    assert_eq!(controller.view().rows.len(), 3);
}

#[test]
fn test_flush_applies_immediately() {
    let (mut controller, _) = controller();
    controller.load(reference_nodes()).unwrap();

    controller.request_search("AAA");
    let view = controller.flush_search();
    assert_eq!(operators(&view.rows), vec!["0xAAA"]);
    assert!(controller.next_deadline().is_none());
}

#[test]
fn test_search_keeps_sort_and_resets_page() {
    let (mut controller, clock) = controller();
    controller.load(generated_nodes(500)).unwrap();
    controller.sort_by(SortKey::Operator);
    controller.set_page(4);
    assert_eq!(controller.state().page, 4);

    controller.request_search("0x");
    clock.advance(DEBOUNCE);
    let view = controller.tick().unwrap();

    assert_eq!(view.state.page, 1);
    assert_eq!(view.state.sort.key, SortKey::Operator);
    assert!(view.rows.windows(2).all(|w| w[0].operator <= w[1].operator));
}

#[test]
fn test_search_back_to_applied_term_keeps_page() {
    let (mut controller, clock) = controller();
    controller.load(generated_nodes(200)).unwrap();
    controller.set_page(3);

    controller.request_search("a");
    controller.request_search("");
    clock.advance(DEBOUNCE);
    let view = controller.tick().expect("pending term should fire");

    assert_eq!(view.state.search_term, "");
    assert_eq!(view.state.page, 3);
    assert_eq!(view.page.start_index, 100);

    controller.request_search("");
    let view = controller.flush_search();
    assert_eq!(view.state.page, 3);
}

#[test]
fn test_memoized_pages_match_one_shot_pipeline() {
    let (mut controller, _) = controller();
    controller.load(generated_nodes(230)).unwrap();
    controller.request_search("a");
    controller.flush_search();
    controller.sort_by(SortKey::Fee);

    let total_pages = controller.view().page.total_pages;
    for n in 1..=total_pages {
        controller.set_page(n);
        let view = controller.view();
        let (rows, info) = derive_page(controller.store().get_all(), &view.state);
        assert_eq!(view.page, info);
        assert_eq!(operators(&view.rows), operators(&rows));
    }
}

#[test]
fn test_sort_toggle_round_trip() {
    let (mut controller, _) = controller();
    controller.load(generated_nodes(120)).unwrap();

    let asc = operators(&controller.sort_by(SortKey::Uptime).rows);
    let desc = operators(&controller.sort_by(SortKey::Uptime).rows);
    let asc_again = operators(&controller.sort_by(SortKey::Uptime).rows);

    assert_ne!(asc, desc);
    assert_eq!(asc, asc_again);
}

#[test]
fn test_unknown_sort_token_is_rejected() {
    let (mut controller, _) = controller();
    controller.load(reference_nodes()).unwrap();

    let err = controller.sort_by_token("latency").unwrap_err();
    assert!(matches!(
        err,
        Error::View(nodescope_types::Error::UnknownSortKey(_))
    ));
    assert_eq!(controller.state().sort, SortConfig::default());

    let view = controller.sort_by_token("status").unwrap();
    assert_eq!(view.state.sort.key, SortKey::Status);
}

#[test]
fn test_page_size_change_on_page_three_resets() {
    let (mut controller, _) = controller();
    controller.load(generated_nodes(250)).unwrap();

    let view = controller.set_page(3);
    assert_eq!((view.page.page, view.page.total_pages), (3, 5));

    let view = controller.set_page_size(PageSize::Hundred);
    assert_eq!((view.page.page, view.page.total_pages), (1, 3));
    assert_eq!(view.rows.len(), 100);
}

#[test]
fn test_invalid_page_size_is_rejected() {
    let (mut controller, _) = controller();
    assert!(controller.set_page_size_value(30).is_err());
    assert_eq!(controller.state().page_size, PageSize::Fifty);
    assert!(controller.set_page_size_value(200).is_ok());
}

#[test]
fn test_page_number_is_clamped() {
    let (mut controller, _) = controller();
    controller.load(generated_nodes(120)).unwrap();

    let view = controller.set_page(99);
    assert_eq!(view.page.page, 3);
    assert_eq!(view.state.page, 3);
    assert_eq!(view.rows.len(), 20);

    let view = controller.next_page();
    assert_eq!(view.page.page, 3);

    controller.set_page(1);
    let view = controller.prev_page();
    assert_eq!(view.page.page, 1);
}

#[test]
fn test_stale_page_clamped_after_search_shrinks_results() {
    let (mut controller, _) = controller();
    controller.load(generated_nodes(300)).unwrap();
    controller.set_page(6);

    controller.request_search("0x");
    let view = controller.flush_search();
    assert_eq!(view.page.page, 1);

    let view = controller.set_page(6);
    assert_eq!(view.page.page, 6);
    controller.request_search("zzzz");
    let view = controller.flush_search();
    assert!(view.rows.is_empty());
    assert_eq!((view.page.page, view.page.total_pages), (1, 1));
}

#[test]
fn test_duplicate_operators_rejected_at_load() {
    let (mut controller, _) = controller();
    let mut nodes = reference_nodes();
    nodes.push(nodes[0].clone());

    assert!(matches!(
        controller.load(nodes),
        Err(Error::DuplicateOperator(_))
    ));
    assert!(controller.store().is_empty());
}
