use poi::store::TrackerStore;
use poi::{Issue, MemberId, NewIssue, OpenStates, PoiError, Responsible, Tracker, Transition};

const DEFAULT_USER: &str = "test_user_1_";

fn member(id: &str) -> MemberId {
    MemberId::from(id)
}

/// Files an issue as `creator` and has the first manager fire `transition` on it.
fn add_issue(
    tracker: &mut Tracker,
    creator: &str,
    title: &str,
    responsible: Responsible,
    transition: Transition,
) {
    let id = tracker
        .create_issue(&member(creator), NewIssue::titled(title).responsible(responsible))
        .expect("file issue");
    let manager = tracker.managers()[0].clone();
    tracker
        .do_action_for(id, transition, &manager)
        .expect("manager fires transition");
}

fn assigned(id: &str) -> Responsible {
    Responsible::Member(member(id))
}

/// Six issues covering every ownership combination.
fn fixture() -> Tracker {
    let mut tracker = Tracker::new(
        "issue-tracker",
        vec![member("member1"), member("member2"), member(DEFAULT_USER)],
    );
    let accept = Transition::AcceptUnconfirmed;

    // Filed by the default user
    add_issue(&mut tracker, DEFAULT_USER, "A:member1", assigned("member1"), accept);
    add_issue(&mut tracker, DEFAULT_USER, "A:member2", assigned("member2"), accept);

    // Filed by member1
    add_issue(&mut tracker, "member1", "C:member1", Responsible::Unassigned, accept);
    add_issue(&mut tracker, "member1", "A:default", assigned(DEFAULT_USER), accept);

    // Filed by member3, who does not manage the tracker
    add_issue(&mut tracker, "member3", "C:member3", Responsible::Unassigned, accept);

    // Wrong state
    add_issue(
        &mut tracker,
        DEFAULT_USER,
        "S:rejected",
        assigned(DEFAULT_USER),
        Transition::RejectUnconfirmed,
    );

    tracker
}

fn sorted_ids(issues: Vec<&Issue>) -> Vec<u32> {
    let mut ids: Vec<u32> = issues.into_iter().map(|i| i.id).collect();
    ids.sort();
    ids
}

#[test]
fn my_issues_match_creator_or_responsible() {
    let tracker = fixture();
    let open = OpenStates::default();

    assert_eq!(sorted_ids(tracker.my_issues(&member(DEFAULT_USER), &open)), vec![1, 2, 4]);
    assert_eq!(sorted_ids(tracker.my_issues(&member("member1"), &open)), vec![1, 3, 4]);
    assert_eq!(sorted_ids(tracker.my_issues(&member("member3"), &open)), vec![5]);
}

#[test]
fn my_issues_respect_open_states() {
    let tracker = fixture();

    let closed = OpenStates::from_names(["closed"]);
    assert!(tracker.my_issues(&member(DEFAULT_USER), &closed).is_empty());

    let rejected = OpenStates::from_names(["rejected"]);
    let found = tracker.my_issues(&member(DEFAULT_USER), &rejected);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 6);
}

#[test]
fn orphaned_issues_are_unassigned_and_filed_by_others() {
    let tracker = fixture();
    let open = OpenStates::default();

    assert_eq!(
        sorted_ids(tracker.orphaned_issues(&member(DEFAULT_USER), &open)),
        vec![3, 5]
    );
    assert_eq!(sorted_ids(tracker.orphaned_issues(&member("member1"), &open)), vec![5]);

    let found = tracker.orphaned_issues(&member("member3"), &open);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 3);

    let closed = OpenStates::from_names(["closed"]);
    assert!(tracker.orphaned_issues(&member(DEFAULT_USER), &closed).is_empty());
}

#[test]
fn every_orphan_is_unassigned_open_and_not_self_filed() {
    let tracker = fixture();
    let open = OpenStates::default();

    for who in [DEFAULT_USER, "member1", "member2", "member3", "nobody"] {
        let who = member(who);
        for issue in tracker.orphaned_issues(&who, &open) {
            assert!(issue.responsible.is_unassigned());
            assert!(open.contains(issue.state));
            assert_ne!(issue.creator(), &who);
        }
        for issue in tracker.my_issues(&who, &open) {
            assert!(open.contains(issue.state));
            assert!(issue.creator() == &who || issue.responsible.is(&who));
        }
    }
}

#[test]
fn unknown_member_has_no_issues() {
    let tracker = fixture();
    assert!(tracker
        .my_issues(&member("stranger"), &OpenStates::default())
        .is_empty());
}

#[test]
fn queries_are_idempotent() {
    let tracker = fixture();
    let open = OpenStates::default();
    let me = member(DEFAULT_USER);

    let first: Vec<u32> = tracker.my_issues(&me, &open).iter().map(|i| i.id).collect();
    let second: Vec<u32> = tracker.my_issues(&me, &open).iter().map(|i| i.id).collect();
    assert_eq!(first, second);
}

#[test]
fn views_follow_reassignment() {
    let mut tracker = fixture();
    let open = OpenStates::default();

    tracker
        .assign(3, assigned("member2"), &member("member1"))
        .expect("manager assigns");

    assert_eq!(
        sorted_ids(tracker.orphaned_issues(&member(DEFAULT_USER), &open)),
        vec![5]
    );
    assert_eq!(sorted_ids(tracker.my_issues(&member("member2"), &open)), vec![2, 3]);
}

#[test]
fn non_manager_cannot_transition() {
    let mut tracker = fixture();

    let err = tracker
        .do_action_for(5, Transition::Resolve, &member("member3"))
        .unwrap_err();
    assert!(matches!(err, PoiError::PermissionDenied { .. }));
}

#[test]
fn views_survive_store_round_trip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = TrackerStore::new(dir.path().join("tracker.json"));

    store.save(&fixture()).expect("save tracker");
    let tracker = store.load().expect("load tracker");

    let open = OpenStates::default();
    assert_eq!(sorted_ids(tracker.my_issues(&member(DEFAULT_USER), &open)), vec![1, 2, 4]);
    assert_eq!(
        sorted_ids(tracker.orphaned_issues(&member(DEFAULT_USER), &open)),
        vec![3, 5]
    );
}
