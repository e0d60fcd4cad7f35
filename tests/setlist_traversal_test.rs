use gigbinder::setlist_manager::{ActivePosition, SetlistManager};
use gigbinder::test_utils::MockViewer;
use gigbinder::viewer::DocumentViewer;

/// Build a manager with one setlist: A.pdf (3 pages) followed by
/// B.pdf (2 pages).
fn two_song_set() -> (SetlistManager, MockViewer) {
    let mut manager = SetlistManager::new();
    let index = manager.create_setlist("Gig");
    let setlist = manager.setlist_mut(index).unwrap();
    assert!(setlist.add_item("A.pdf", "/charts/A.pdf"));
    assert!(setlist.add_item("B.pdf", "/charts/B.pdf"));

    let viewer = MockViewer::new()
        .with_document("/charts/A.pdf", 3)
        .with_document("/charts/B.pdf", 2);
    (manager, viewer)
}

#[test]
fn traversal_crosses_file_boundaries_both_ways() {
    let (mut manager, mut viewer) = two_song_set();

    assert!(manager.activate_setlist(0, &mut viewer));
    assert_eq!(viewer.filename(), "A.pdf");
    assert_eq!(viewer.current_page(), 0);

    // Two steps stay inside A.pdf.
    assert!(manager.next(&mut viewer));
    assert!(manager.next(&mut viewer));
    assert_eq!(viewer.filename(), "A.pdf");
    assert_eq!(viewer.current_page(), 2);

    // Third step crosses into B.pdf at its first page.
    assert!(manager.next(&mut viewer));
    assert_eq!(viewer.filename(), "B.pdf");
    assert_eq!(viewer.current_page(), 0);
    assert_eq!(
        manager.active_position(),
        Some(ActivePosition { setlist: 0, item: 1 })
    );

    // Stepping back lands on the *last* page of A.pdf.
    assert!(manager.previous(&mut viewer));
    assert_eq!(viewer.filename(), "A.pdf");
    assert_eq!(viewer.current_page(), 2);
    assert_eq!(
        manager.active_position(),
        Some(ActivePosition { setlist: 0, item: 0 })
    );
}

#[test]
fn next_walks_every_page_exactly_once() {
    let (mut manager, mut viewer) = two_song_set();
    assert!(manager.activate_setlist(0, &mut viewer));

    // 3 + 2 pages total: sum - 1 successful steps from page 0.
    for _ in 0..4 {
        assert!(manager.next(&mut viewer));
    }
    assert_eq!(viewer.filename(), "B.pdf");
    assert_eq!(viewer.current_page(), 1);

    assert!(!manager.can_go_next(&viewer));
    assert!(!manager.next(&mut viewer));
    // A failed step changes nothing.
    assert_eq!(viewer.current_page(), 1);
    assert_eq!(
        manager.active_position(),
        Some(ActivePosition { setlist: 0, item: 1 })
    );
}

#[test]
fn previous_stops_at_the_very_first_page() {
    let (mut manager, mut viewer) = two_song_set();
    assert!(manager.activate_setlist(0, &mut viewer));

    assert!(!manager.can_go_previous(&viewer));
    assert!(!manager.previous(&mut viewer));
    assert_eq!(viewer.filename(), "A.pdf");
    assert_eq!(viewer.current_page(), 0);
}

#[test]
fn jump_then_traverse_backwards_through_the_whole_set() {
    let (mut manager, mut viewer) = two_song_set();

    // Start from the last page of the last item.
    assert!(manager.jump_to_item(0, 1, &mut viewer));
    viewer.go_to_page(1);

    for _ in 0..4 {
        assert!(manager.previous(&mut viewer));
    }
    assert_eq!(viewer.filename(), "A.pdf");
    assert_eq!(viewer.current_page(), 0);
    assert!(!manager.previous(&mut viewer));
}

#[test]
fn single_page_documents_cross_on_every_step() {
    let mut manager = SetlistManager::new();
    let index = manager.create_setlist("Singles");
    let setlist = manager.setlist_mut(index).unwrap();
    for name in ["x", "y", "z"] {
        assert!(setlist.add_item(name, &format!("/charts/{name}.pdf")));
    }
    let mut viewer = MockViewer::new()
        .with_document("/charts/x.pdf", 1)
        .with_document("/charts/y.pdf", 1)
        .with_document("/charts/z.pdf", 1);

    assert!(manager.activate_setlist(0, &mut viewer));
    assert!(manager.next(&mut viewer));
    assert_eq!(viewer.filename(), "y.pdf");
    assert!(manager.next(&mut viewer));
    assert_eq!(viewer.filename(), "z.pdf");
    assert!(!manager.next(&mut viewer));

    assert!(manager.previous(&mut viewer));
    assert_eq!(viewer.filename(), "y.pdf");
    // One-page document: arriving from the end still lands on its only page.
    assert_eq!(viewer.current_page(), 0);
}
