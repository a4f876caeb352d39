//! Repository-level CRUD tests against a real Postgres database.

use resolveit_db::models::complaint::{CreateComplaint, UpdateComplaint};
use resolveit_db::models::feedback::CreateFeedback;
use resolveit_db::models::user::CreateUser;
use resolveit_db::repositories::{ComplaintRepo, FeedbackRepo, UserRepo};
use sqlx::PgPool;

fn sample_complaint(subject: &str, citizen: &str) -> CreateComplaint {
    CreateComplaint {
        subject: subject.to_string(),
        description: "A description".to_string(),
        category: "Roads".to_string(),
        priority: "High".to_string(),
        citizen_name: citizen.to_string(),
        status: "Under Review".to_string(),
        assigned_staff: "Not assigned".to_string(),
        created_at: "2026-01-01T00:00:00.000".to_string(),
        updated_at: "2026-01-01T00:00:00.000".to_string(),
        image_path: None,
    }
}

// ---------------------------------------------------------------------------
// Complaints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn create_and_find_complaint(pool: PgPool) {
    let created = ComplaintRepo::create(&pool, &sample_complaint("Pothole", "Alice"))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.status.as_deref(), Some("Under Review"));
    assert!(created.is_escalated.is_none());

    let found = ComplaintRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found.subject, "Pothole");
    assert_eq!(found.citizen_name.as_deref(), Some("Alice"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn find_missing_complaint_is_none(pool: PgPool) {
    assert!(ComplaintRepo::find_by_id(&pool, 999_999)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_merges_only_present_fields(pool: PgPool) {
    let created = ComplaintRepo::create(&pool, &sample_complaint("Lamp", "Bob"))
        .await
        .unwrap();

    let input = UpdateComplaint {
        status: Some("Resolved".to_string()),
        ..Default::default()
    };
    let updated = ComplaintRepo::update(&pool, created.id, &input, "2026-01-02T00:00:00.000")
        .await
        .unwrap()
        .expect("row should exist");

    assert_eq!(updated.status.as_deref(), Some("Resolved"));
    assert_eq!(updated.updated_at.as_deref(), Some("2026-01-02T00:00:00.000"));
    // Everything not present in the payload is untouched.
    assert_eq!(updated.subject, "Lamp");
    assert_eq!(updated.priority.as_deref(), Some("High"));
    assert_eq!(updated.assigned_staff.as_deref(), Some("Not assigned"));
    assert_eq!(updated.created_at.as_deref(), Some("2026-01-01T00:00:00.000"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn empty_update_still_stamps_updated_at(pool: PgPool) {
    let created = ComplaintRepo::create(&pool, &sample_complaint("Noise", "Cara"))
        .await
        .unwrap();

    let updated = ComplaintRepo::update(
        &pool,
        created.id,
        &UpdateComplaint::default(),
        "2026-03-01T12:00:00.000",
    )
    .await
    .unwrap()
    .expect("row should exist");

    assert_eq!(updated.updated_at.as_deref(), Some("2026-03-01T12:00:00.000"));
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.deadline, created.deadline);
}

#[sqlx::test(migrations = "../../migrations")]
async fn list_all_is_ascending_by_id(pool: PgPool) {
    for subject in ["c1", "c2", "c3"] {
        ComplaintRepo::create(&pool, &sample_complaint(subject, "Dave"))
            .await
            .unwrap();
    }
    let all = ComplaintRepo::list_all(&pool).await.unwrap();
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn citizen_and_officer_filters_are_exact(pool: PgPool) {
    ComplaintRepo::create(&pool, &sample_complaint("A", "Erin"))
        .await
        .unwrap();
    let mine = ComplaintRepo::create(&pool, &sample_complaint("B", "Frank"))
        .await
        .unwrap();
    ComplaintRepo::assign(
        &pool,
        mine.id,
        &resolveit_db::models::complaint::AssignComplaint {
            assigned_staff: Some("Officer Grace".to_string()),
            deadline: None,
            deadline_iso: None,
        },
        "2026-01-02T00:00:00.000",
    )
    .await
    .unwrap();

    let by_citizen = ComplaintRepo::list_by_citizen(&pool, "Frank").await.unwrap();
    assert_eq!(by_citizen.len(), 1);
    assert_eq!(by_citizen[0].subject, "B");

    let by_officer = ComplaintRepo::list_by_assigned_staff(&pool, "Officer Grace")
        .await
        .unwrap();
    assert_eq!(by_officer.len(), 1);
    assert_eq!(by_officer[0].id, mine.id);

    // Partial names do not match.
    assert!(ComplaintRepo::list_by_citizen(&pool, "Fran")
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn delete_is_row_only_and_leaves_feedback(pool: PgPool) {
    let created = ComplaintRepo::create(&pool, &sample_complaint("Gone", "Hana"))
        .await
        .unwrap();
    FeedbackRepo::create(
        &pool,
        &CreateFeedback {
            complaint_id: created.id,
            citizen_name: Some("Hana".to_string()),
            rating: 4,
            comments: None,
            created_at: "2026-01-03T00:00:00.000".to_string(),
        },
    )
    .await
    .unwrap();

    assert!(ComplaintRepo::delete(&pool, created.id).await.unwrap());
    assert!(!ComplaintRepo::delete(&pool, created.id).await.unwrap());

    // Feedback rows are orphaned on purpose: no cascade.
    let orphaned = FeedbackRepo::list_by_complaint(&pool, created.id)
        .await
        .unwrap();
    assert_eq!(orphaned.len(), 1);
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn multiple_feedback_rows_per_complaint_are_allowed(pool: PgPool) {
    for rating in [2, 5] {
        FeedbackRepo::create(
            &pool,
            &CreateFeedback {
                complaint_id: 77,
                citizen_name: None,
                rating,
                comments: Some("ok".to_string()),
                created_at: "2026-01-03T00:00:00.000".to_string(),
            },
        )
        .await
        .unwrap();
    }
    let rows = FeedbackRepo::list_by_complaint(&pool, 77).await.unwrap();
    assert_eq!(rows.len(), 2);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn username_lookup_and_existence(pool: PgPool) {
    let input = CreateUser {
        name: "Ivy".to_string(),
        username: "ivy".to_string(),
        email: "ivy@resolveit.local".to_string(),
        password: "pw".to_string(),
        role: "CITIZEN".to_string(),
    };
    let created = UserRepo::create(&pool, &input).await.unwrap();
    assert!(created.id > 0);

    assert!(UserRepo::exists_by_username(&pool, "ivy").await.unwrap());
    assert!(!UserRepo::exists_by_username(&pool, "nobody").await.unwrap());

    let found = UserRepo::find_by_username(&pool, "ivy")
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(found.email, "ivy@resolveit.local");
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    let input = CreateUser {
        name: "Jo".to_string(),
        username: "jo".to_string(),
        email: "jo@resolveit.local".to_string(),
        password: "pw".to_string(),
        role: "ADMIN".to_string(),
    };
    UserRepo::create(&pool, &input).await.unwrap();

    let dup = CreateUser {
        email: "jo2@resolveit.local".to_string(),
        ..input
    };
    let err = UserRepo::create(&pool, &dup).await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_users_username"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}
