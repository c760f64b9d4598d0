mod common;

use quickqr_core::session::{DisplayImage, QrSession};

// ---------------------------------------------------------------------------
// Empty text short circuit
// ---------------------------------------------------------------------------

#[test]
fn test_new_session_shows_placeholder() {
    let session = QrSession::new();
    assert_eq!(*session.display(), DisplayImage::Placeholder);
    assert!(!session.is_fetching());
}

#[test]
fn test_empty_commit_issues_no_fetch() {
    let mut session = QrSession::new();
    assert!(session.commit("").is_none());
    assert_eq!(*session.display(), DisplayImage::Placeholder);
    assert!(!session.is_fetching());
}

#[test]
fn test_empty_commit_resets_generated_display() {
    let mut session = QrSession::new();
    let ticket = session.commit("https://example.com").unwrap();
    assert!(session.settle(ticket.seq, Some(common::qr_image(8, 8, 0))));
    assert!(matches!(session.display(), DisplayImage::Generated(_)));

    assert!(session.commit("").is_none());
    assert_eq!(*session.display(), DisplayImage::Placeholder);
}

// ---------------------------------------------------------------------------
// Commit / settle
// ---------------------------------------------------------------------------

#[test]
fn test_commit_carries_text_and_marks_fetching() {
    let mut session = QrSession::new();
    let ticket = session.commit("https://example.com").unwrap();
    assert_eq!(ticket.text, "https://example.com");
    assert_eq!(session.target_text(), "https://example.com");
    assert!(session.is_fetching());
}

#[test]
fn test_successful_settle_displays_fetched_bytes() {
    let mut session = QrSession::new();
    let ticket = session.commit("hello").unwrap();

    let image = common::qr_image(16, 16, 40);
    assert!(session.settle(ticket.seq, Some(image.clone())));
    assert!(!session.is_fetching());

    // The display reads back exactly the settled bytes.
    assert_eq!(session.display().image().bytes, image.bytes);
}

#[test]
fn test_failed_settle_falls_back_to_placeholder() {
    let mut session = QrSession::new();
    let ticket = session.commit("hello").unwrap();
    assert!(session.settle(ticket.seq, None));
    assert_eq!(*session.display(), DisplayImage::Placeholder);
    assert!(!session.is_fetching());
}

#[test]
fn test_failure_after_success_replaces_generated_image() {
    let mut session = QrSession::new();
    let t1 = session.commit("first").unwrap();
    assert!(session.settle(t1.seq, Some(common::qr_image(8, 8, 10))));

    let t2 = session.commit("second").unwrap();
    assert!(session.settle(t2.seq, None));
    assert_eq!(*session.display(), DisplayImage::Placeholder);
}

#[test]
fn test_sequence_numbers_increase_per_commit() {
    let mut session = QrSession::new();
    let a = session.commit("a").unwrap();
    let b = session.commit("b").unwrap();
    assert!(b.seq > a.seq);
}

// ---------------------------------------------------------------------------
// Idempotence
// ---------------------------------------------------------------------------

#[test]
fn test_repeated_commit_settle_cycles_are_stable() {
    let mut session = QrSession::new();
    let image = common::qr_image(8, 8, 99);

    for _ in 0..2 {
        assert!(session.commit("").is_none());
        assert_eq!(*session.display(), DisplayImage::Placeholder);

        let ticket = session.commit("same text").unwrap();
        assert!(session.settle(ticket.seq, Some(image.clone())));
        assert_eq!(session.display().image().bytes, image.bytes);
    }
}

// ---------------------------------------------------------------------------
// Race property: last issued wins
// ---------------------------------------------------------------------------

#[test]
fn test_stale_success_is_discarded() {
    let mut session = QrSession::new();
    let t1 = session.commit("t1").unwrap();
    let t2 = session.commit("t2").unwrap();

    // t1 settles late with a success; it must not apply.
    assert!(!session.settle(t1.seq, Some(common::qr_image(8, 8, 1))));
    assert_eq!(*session.display(), DisplayImage::Placeholder);
    assert!(session.is_fetching());

    let t2_image = common::qr_image(8, 8, 2);
    assert!(session.settle(t2.seq, Some(t2_image.clone())));
    assert_eq!(session.display().image().bytes, t2_image.bytes);
}

#[test]
fn test_stale_failure_does_not_clobber_newer_success() {
    let mut session = QrSession::new();
    let t1 = session.commit("t1").unwrap();
    let t2 = session.commit("t2").unwrap();

    let t2_image = common::qr_image(8, 8, 2);
    assert!(session.settle(t2.seq, Some(t2_image.clone())));

    // t1 fails even later; the t2 result must survive.
    assert!(!session.settle(t1.seq, None));
    assert_eq!(session.display().image().bytes, t2_image.bytes);
}

#[test]
fn test_settle_after_empty_commit_is_stale() {
    let mut session = QrSession::new();
    let t1 = session.commit("t1").unwrap();
    assert!(session.commit("").is_none());

    assert!(!session.settle(t1.seq, Some(common::qr_image(8, 8, 1))));
    assert_eq!(*session.display(), DisplayImage::Placeholder);
}

#[test]
fn test_double_settle_is_ignored() {
    let mut session = QrSession::new();
    let ticket = session.commit("once").unwrap();
    let image = common::qr_image(8, 8, 3);
    assert!(session.settle(ticket.seq, Some(image.clone())));
    assert!(!session.settle(ticket.seq, None));
    assert_eq!(session.display().image().bytes, image.bytes);
}
