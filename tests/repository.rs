mod helpers;

use feasibility::storage::{
    Author, Department, FixedClock, Priority, ProjectId, ProjectPatch, ProjectQuery,
    ProjectRepository, RepositoryChange, Status, UpdateOutcome,
};
use helpers::{date, new_project};

fn empty_repo() -> (ProjectRepository, FixedClock) {
    let clock = FixedClock::new(date(2026, 1, 15));
    let repo = ProjectRepository::with_clock(3, clock.clone());
    (repo, clock)
}

#[test]
fn test_ids_strictly_increase_from_first_id() {
    let (mut repo, _) = empty_repo();
    let ids: Vec<ProjectId> = (0..5)
        .map(|i| repo.add(new_project(&format!("Part {i}"), "Acme")))
        .collect();

    assert_eq!(ids.first(), Some(&ProjectId(3)));
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_sample_data_continues_after_seed_ids() {
    let mut repo = ProjectRepository::with_sample_data(FixedClock::new(date(2026, 1, 15)));
    assert_eq!(repo.len(), 2);
    assert_eq!(repo.add(new_project("Bracket", "Acme")), ProjectId(3));
}

#[test]
fn test_add_stamps_created_and_updated_with_today() {
    let (mut repo, _) = empty_repo();
    let id = repo.add(new_project("Bracket", "Acme"));
    let project = repo.get(id).unwrap();
    assert_eq!(project.created_date, date(2026, 1, 15));
    assert_eq!(project.last_updated, date(2026, 1, 15));
    assert_eq!(project.status, Status::New);
}

#[test]
fn test_empty_patch_only_touches_last_updated() {
    let (mut repo, clock) = empty_repo();
    let id = repo.add(new_project("Bracket", "Acme"));
    let before = repo.get(id).unwrap().clone();

    clock.advance_days(3);
    assert_eq!(
        repo.update(id, ProjectPatch::default()),
        UpdateOutcome::Applied
    );

    let mut after = repo.get(id).unwrap().clone();
    assert_eq!(after.last_updated, date(2026, 1, 18));
    after.last_updated = before.last_updated;
    assert_eq!(after, before);
}

#[test]
fn test_update_merges_only_present_fields() {
    let (mut repo, _) = empty_repo();
    let id = repo.add(new_project("Bracket", "Acme"));

    let patch = ProjectPatch {
        status: Some(Status::Feasible),
        feasibility_score: Some(90),
        ..ProjectPatch::default()
    };
    let _ = repo.update(id, patch);

    let project = repo.get(id).unwrap();
    assert_eq!(project.status, Status::Feasible);
    assert_eq!(project.feasibility_score, 90);
    assert_eq!(project.name, "Bracket");
    assert_eq!(project.customer_name, "Acme");
}

#[test]
fn test_unknown_id_update_is_a_no_op() {
    let (mut repo, clock) = empty_repo();
    repo.add(new_project("Bracket", "Acme"));
    let _ = repo.drain_changes();
    let before = repo.projects().to_vec();

    clock.advance_days(1);
    let patch = ProjectPatch {
        name: Some("Renamed".to_string()),
        ..ProjectPatch::default()
    };
    assert_eq!(repo.update(ProjectId(999), patch), UpdateOutcome::NotFound);

    assert_eq!(repo.projects(), before.as_slice());
    assert!(repo.drain_changes().is_empty());
}

#[test]
fn test_unknown_id_comment_is_a_no_op() {
    let (mut repo, _) = empty_repo();
    repo.add(new_project("Bracket", "Acme"));
    let before = repo.projects().to_vec();

    assert_eq!(
        repo.add_comment(ProjectId(42), "hello"),
        UpdateOutcome::NotFound
    );
    assert_eq!(repo.projects(), before.as_slice());
}

#[test]
fn test_query_all_returns_insertion_order() {
    let (mut repo, _) = empty_repo();
    for name in ["Zeta", "Alpha", "Mid"] {
        repo.add(new_project(name, "Acme"));
    }
    let names: Vec<_> = repo
        .query(&ProjectQuery::all())
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_status_filter_returns_only_that_status() {
    let mut repo = ProjectRepository::with_sample_data(FixedClock::new(date(2026, 1, 15)));
    repo.add(new_project("Bracket", "Acme"));

    for status in Status::ALL {
        let results = repo.query(&ProjectQuery::all().with_status(*status));
        assert!(results.iter().all(|p| p.status == *status));
    }
    let under_review = repo.query(&ProjectQuery::all().with_status(Status::UnderReview));
    assert_eq!(under_review.len(), 1);
    assert_eq!(under_review[0].name, "Honda Automotive Components");
}

#[test]
fn test_combined_filters_are_subset_of_each() {
    let (mut repo, _) = empty_repo();
    let mut high = new_project("Lucid Atlas IM", "Lucid");
    high.priority = Priority::High;
    repo.add(high);
    let mut low = new_project("Atlas bracket", "Rivian");
    low.priority = Priority::Low;
    repo.add(low);
    repo.add(new_project("Hinge", "Lucid"));

    let by_priority = repo.query(&ProjectQuery::all().with_priority(Priority::High));
    let by_search = repo.query(&ProjectQuery::all().with_search("atlas"));
    let combined = repo.query(
        &ProjectQuery::all()
            .with_priority(Priority::High)
            .with_search("atlas"),
    );

    assert_eq!(combined.len(), 1);
    for project in &combined {
        assert!(by_priority.iter().any(|p| p.id == project.id));
        assert!(by_search.iter().any(|p| p.id == project.id));
    }
}

#[test]
fn test_search_is_case_insensitive_on_name_and_customer() {
    let (mut repo, _) = empty_repo();
    repo.add(new_project("LUCID ATLAS IM", "Tier One"));
    repo.add(new_project("Door hinge", "Lucid Motors"));
    repo.add(new_project("Seat rail", "Rivian"));

    let count = |term: &str| repo.query(&ProjectQuery::all().with_search(term)).len();
    assert_eq!(count("lucid"), 2);
    assert_eq!(count("ATLAS"), 1);
    assert_eq!(count("im"), 1);
    assert_eq!(count("rivian"), 1);
    assert_eq!(count("nothing"), 0);
}

#[test]
fn test_status_change_moves_project_between_filters() {
    let (mut repo, _) = empty_repo();
    let p1 = repo.add(new_project("P1", "Acme"));

    let patch = ProjectPatch {
        status: Some(Status::Approved),
        ..ProjectPatch::default()
    };
    let _ = repo.update(p1, patch);

    let approved = repo.query(&ProjectQuery::all().with_status(Status::Approved));
    assert_eq!(approved.len(), 1);
    assert_eq!(approved[0].id, p1);
    assert!(
        repo.query(&ProjectQuery::all().with_status(Status::New))
            .is_empty()
    );
}

#[test]
fn test_add_comment_appends_and_touches_last_updated() {
    let mut repo = ProjectRepository::with_sample_data(FixedClock::new(date(2026, 1, 15)));
    repo.set_author(Author {
        name: "Ana Garcia".to_string(),
        department: Some(Department::Sales),
    });
    let before = repo.get(ProjectId(1)).unwrap().clone();

    assert_eq!(
        repo.add_comment(ProjectId(1), "Tooling quote received"),
        UpdateOutcome::Applied
    );

    let after = repo.get(ProjectId(1)).unwrap();
    assert_eq!(after.comments.len(), before.comments.len() + 1);
    assert_eq!(after.comments[..before.comments.len()], before.comments[..]);
    assert_ne!(after.last_updated, before.last_updated);
    assert_eq!(after.last_updated, date(2026, 1, 15));

    let comment = after.comments.last().unwrap();
    assert_eq!(comment.text, "Tooling quote received");
    assert_eq!(comment.date, date(2026, 1, 15));
    assert_eq!(
        comment.author.as_ref().map(|a| a.name.as_str()),
        Some("Ana Garcia")
    );
}

#[test]
fn test_mutations_are_recorded_as_changes() {
    let (mut repo, _) = empty_repo();
    let id = repo.add(new_project("Bracket", "Acme"));
    let _ = repo.update(id, ProjectPatch::default());
    let _ = repo.add_comment(id, "note");

    assert_eq!(
        repo.drain_changes(),
        vec![
            RepositoryChange::Added(id),
            RepositoryChange::Updated(id),
            RepositoryChange::Commented(id),
        ]
    );
}

#[test]
fn test_stats_ignore_filters_and_average_scores() {
    let mut repo = ProjectRepository::with_sample_data(FixedClock::new(date(2026, 1, 15)));
    let stats = repo.stats();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.count(Status::Feasible), 1);
    assert_eq!(stats.count(Status::UnderReview), 1);
    assert!((stats.average_score - 80.0).abs() < f64::EPSILON);

    let mut low = new_project("Bracket", "Acme");
    low.feasibility_score = 20;
    repo.add(low);
    let stats = repo.stats();
    assert_eq!(stats.total, 3);
    assert!((stats.average_score - 60.0).abs() < f64::EPSILON);
}

#[test]
fn test_highest_seed_keeps_assigning_ids() {
    let mut repo = ProjectRepository::with_clock(u32::MAX, FixedClock::new(date(2026, 1, 15)));
    let first = repo.add(new_project("Bracket", "Acme"));
    let second = repo.add(new_project("Hinge", "Acme"));

    assert_eq!(first, ProjectId(u64::from(u32::MAX)));
    assert_eq!(second, ProjectId(u64::from(u32::MAX) + 1));
    assert_eq!(repo.len(), 2);
}
