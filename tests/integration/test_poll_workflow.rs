//! End-to-end poll workflow tests.

use convene::{ScheduleError, ScheduleStore};

/// Store seeded the way an organizer would set it up.
fn seeded_store() -> ScheduleStore {
    let mut store = ScheduleStore::new();
    store.add_categories(["engineering", "design", "all-hands"]);
    store
}

#[test]
fn full_workflow_from_categories_to_winner() {
    let mut store = seeded_store();

    let meeting = store
        .add_meeting("Architecture sync", "service boundaries", "engineering")
        .unwrap();
    assert_eq!(meeting, "1");
    assert_eq!(store.meeting_title(&meeting).unwrap(), "Architecture sync");
    assert_eq!(store.meeting_topic(&meeting).unwrap(), "service boundaries");

    // Propose slots across two days; input padding is irrelevant.
    store.add_option(&meeting, "2024-3-5", "9:00", "10:00").unwrap();
    store.add_option(&meeting, "2024-03-05", "14:00", "15:30").unwrap();
    store.add_option(&meeting, "2024-03-06", "09:00", "10:00").unwrap();

    let slots = store.show_slots(&meeting).unwrap();
    assert_eq!(slots["2024-03-05"], vec!["09:00-10:00", "14:00-15:30"]);
    assert_eq!(slots["2024-03-06"], vec!["09:00-10:00"]);

    store.open_poll(&meeting).unwrap();
    store
        .select_preference("ada@example.com", "Ada", "Lovelace", &meeting, "2024-03-05", "14:00-15:30")
        .unwrap();
    store
        .select_preference("alan@example.com", "Alan", "Turing", &meeting, "2024-03-05", "14:00-15:30")
        .unwrap();
    store
        .select_preference("grace@example.com", "Grace", "Hopper", &meeting, "2024-03-06", "09:00-10:00")
        .unwrap();

    let winners = store.close_poll(&meeting).unwrap();
    assert_eq!(winners, vec!["2024-03-05T14:00-15:30=2"]);
}

#[test]
fn preferences_are_isolated_per_meeting() {
    let mut store = seeded_store();

    let eng = store.add_meeting("Standup", "daily", "engineering").unwrap();
    let design = store.add_meeting("Critique", "mocks", "design").unwrap();

    // The same date and time range can be proposed for both meetings.
    store.add_option(&eng, "2024-04-01", "10:00", "10:30").unwrap();
    store.add_option(&design, "2024-04-01", "10:00", "10:30").unwrap();

    store.open_poll(&eng).unwrap();
    store.open_poll(&design).unwrap();

    let count = store
        .select_preference("ada@example.com", "Ada", "Lovelace", &eng, "2024-04-01", "10:00-10:30")
        .unwrap();
    assert_eq!(count, 1);

    // Voting in one meeting never leaks into the other.
    let counts = store.preference_count();
    assert_eq!(counts[&eng], 1);
    assert_eq!(counts[&design], 0);

    assert!(store.list_preferences(&design).unwrap().is_empty());
    assert_eq!(
        store.list_preferences(&eng).unwrap(),
        vec!["2024-04-01T10:00-10:30=ada@example.com"]
    );
}

#[test]
fn grouped_counts_agree_with_totals() {
    let mut store = seeded_store();
    let meeting = store.add_meeting("Town hall", "Q3", "all-hands").unwrap();

    store.add_option(&meeting, "2024-05-02", "11:00", "12:00").unwrap();
    store.add_option(&meeting, "2024-05-03", "11:00", "12:00").unwrap();
    store.open_poll(&meeting).unwrap();

    let voters = [
        ("a@example.com", "2024-05-02", "11:00-12:00"),
        ("b@example.com", "2024-05-02", "11:00-12:00"),
        ("c@example.com", "2024-05-03", "11:00-12:00"),
        ("d@example.com", "2024-05-03", "11:00-12:00"),
        ("e@example.com", "2024-05-03", "11:00-12:00"),
    ];
    for (email, date, label) in voters {
        store
            .select_preference(email, "Given", "Family", &meeting, date, label)
            .unwrap();
    }

    let grouped = store.meeting_preferences(&meeting).unwrap();
    assert_eq!(grouped["2024-05-02"], vec!["11:00-12:00=2"]);
    assert_eq!(grouped["2024-05-03"], vec!["11:00-12:00=3"]);

    let grouped_total: usize = grouped
        .values()
        .flatten()
        .filter_map(|entry| entry.rsplit_once('=')?.1.parse::<usize>().ok())
        .sum();
    assert_eq!(grouped_total, store.preference_count()[&meeting]);

    // Both days tie would be reported together; here the winner is unique.
    let winners = store.close_poll(&meeting).unwrap();
    assert_eq!(winners, vec!["2024-05-03T11:00-12:00=3"]);
}

#[test]
fn failed_operations_leave_the_store_unchanged() {
    let mut store = seeded_store();

    // Meeting creation against an unknown category allocates no id.
    assert!(matches!(
        store.add_meeting("Ghost", "none", "missing"),
        Err(ScheduleError::CategoryNotFound(_))
    ));
    let meeting = store.add_meeting("Real", "topic", "design").unwrap();
    assert_eq!(meeting, "1");

    // A rejected overlapping slot is not stored.
    store.add_option(&meeting, "2024-06-10", "09:00", "10:00").unwrap();
    assert!(matches!(
        store.add_option(&meeting, "2024-06-10", "09:30", "10:30"),
        Err(ScheduleError::SlotOverlap { .. })
    ));
    let slots = store.show_slots(&meeting).unwrap();
    assert_eq!(slots["2024-06-10"].len(), 1);

    // A vote rejected by the closed poll is not recorded.
    assert!(matches!(
        store.select_preference("a@example.com", "A", "B", &meeting, "2024-06-10", "09:00-10:00"),
        Err(ScheduleError::PollNotOpen(_))
    ));
    assert_eq!(store.preference_count()[&meeting], 0);

    let stats = store.stats();
    assert_eq!(stats.meetings, 1);
    assert_eq!(stats.slots, 1);
    assert_eq!(stats.preferences, 0);
}
