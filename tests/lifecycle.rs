//! End-to-end lifecycle tests against a live Postgres database.
//!
//! `#[sqlx::test]` provisions an isolated database per test and applies the
//! migrations in `./migrations` before each one runs.

use sqlx::PgPool;

use givebridge::{
    db::repositories::TaskRepository,
    error::AppError,
    middleware::auth::AuthenticatedUser,
    models::{
        Badge, DonationStatus, NewDonation, NewRequest, RequestStatus, Role, TaskStatus, User,
    },
    services::{
        match_service::MatchListing, AuthService, DonationService, MatchService, RequestService,
        StatsService, TaskService,
    },
};

fn actor(user: &User) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        name: user.name.clone(),
        role: user.role,
    }
}

async fn register(pool: &PgPool, name: &str, role: &str, location: &str) -> User {
    AuthService::register(
        pool,
        name,
        &format!("{name}@example.com"),
        "Password123",
        role,
        location,
        None,
    )
    .await
    .expect("registration failed")
}

fn new_donation(item_type: &str, quantity: i32, location: &str) -> NewDonation {
    NewDonation {
        item_type: item_type.to_string(),
        quantity,
        condition: Some("good".to_string()),
        description: None,
        location: location.to_string(),
        pickup_address: None,
        expiry_date: None,
    }
}

fn new_request(item_type: &str, quantity: i32, location: &str) -> NewRequest {
    NewRequest {
        item_type: item_type.to_string(),
        quantity,
        urgency: Some("normal".to_string()),
        description: None,
        location: location.to_string(),
        delivery_address: None,
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn donation_creation_awards_points_and_spawns_task(pool: PgPool) {
    let donor = register(&pool, "alice", "donor", "Springfield").await;

    let (donation, task, donor) =
        DonationService::create_donation(&pool, &actor(&donor), new_donation("food", 5, ""))
            .await
            .unwrap();

    assert_eq!(donation.status, DonationStatus::Available);
    // Location defaulted to the donor's own
    assert_eq!(donation.location, "Springfield");
    assert_eq!(task.status, TaskStatus::Created);
    assert_eq!(task.donation_id, donation.id);
    assert!(task.volunteer_id.is_none());
    assert_eq!(donor.points, 10);
    assert_eq!(donor.badges(), vec![Badge::BronzeHelper]);
}

#[sqlx::test(migrations = "./migrations")]
async fn full_delivery_scenario(pool: PgPool) {
    let donor = register(&pool, "alice", "donor", "Springfield").await;
    let receiver = register(&pool, "carol", "receiver", "Springfield").await;
    let volunteer = register(&pool, "bob", "volunteer", "Springfield").await;

    let (donation, task, _) =
        DonationService::create_donation(&pool, &actor(&donor), new_donation("food", 5, ""))
            .await
            .unwrap();
    let request =
        RequestService::create_request(&pool, &actor(&receiver), new_request("food", 5, ""))
            .await
            .unwrap();

    // Connect reuses the donation's existing task and marks both sides matched
    let (task2, donation2, request2) =
        MatchService::connect(&pool, &actor(&donor), &donation.id, &request.id)
            .await
            .unwrap();
    assert_eq!(task2.id, task.id);
    assert_eq!(task2.request_id, Some(request.id));
    assert_eq!(donation2.status, DonationStatus::Matched);
    assert_eq!(request2.status, RequestStatus::Matched);

    // Volunteer accepts and drives the task to delivery
    let task3 = TaskService::accept_task(&pool, &actor(&volunteer), &task.id)
        .await
        .unwrap();
    assert_eq!(task3.status, TaskStatus::Assigned);
    assert_eq!(task3.volunteer_id, Some(volunteer.id));
    assert!(task3.assigned_at.is_some());

    let task4 = TaskService::update_status(&pool, &actor(&volunteer), &task.id, "picked_up")
        .await
        .unwrap();
    assert_eq!(task4.status, TaskStatus::PickedUp);

    let task5 = TaskService::update_status(&pool, &actor(&volunteer), &task.id, "delivered")
        .await
        .unwrap();
    assert_eq!(task5.status, TaskStatus::Delivered);

    // Timestamps stamped in order
    assert!(task5.assigned_at.unwrap() <= task5.picked_up_at.unwrap());
    assert!(task5.picked_up_at.unwrap() <= task5.delivered_at.unwrap());

    // Delivery completes the donation, fulfills the request, awards points
    let donation_after = givebridge::db::repositories::DonationRepository::find_by_id(
        &pool,
        &donation.id,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(donation_after.status, DonationStatus::Completed);

    let request_after =
        givebridge::db::repositories::RequestRepository::find_by_id(&pool, &request.id)
            .await
            .unwrap()
            .unwrap();
    assert_eq!(request_after.status, RequestStatus::Fulfilled);

    let volunteer_after = AuthService::get_user_by_id(&pool, &volunteer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(volunteer_after.points, 15);
    assert_eq!(volunteer_after.badges(), vec![Badge::BronzeHelper]);

    // Audit trail: one row per action, in creation order
    let (_, logs) = TaskService::task_detail(&pool, &actor(&volunteer), &task.id)
        .await
        .unwrap();
    assert_eq!(logs.len(), 5);
    assert!(logs.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));

    // Stats see exactly the delivered donation
    let stats = StatsService::platform_stats(&pool).await.unwrap();
    assert_eq!(stats.completed_deliveries, 1);
    assert_eq!(stats.items_donated, 5);
}

#[sqlx::test(migrations = "./migrations")]
async fn accept_task_is_first_caller_wins(pool: PgPool) {
    let donor = register(&pool, "alice", "donor", "Springfield").await;
    let first = register(&pool, "bob", "volunteer", "Springfield").await;
    let second = register(&pool, "dave", "volunteer", "Springfield").await;

    let (_, task, _) =
        DonationService::create_donation(&pool, &actor(&donor), new_donation("books", 3, ""))
            .await
            .unwrap();

    TaskService::accept_task(&pool, &actor(&first), &task.id)
        .await
        .unwrap();

    let err = TaskService::accept_task(&pool, &actor(&second), &task.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AlreadyAssigned));

    // Only the first caller's id persists
    let task_after = TaskRepository::find_by_id(&pool, &task.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(task_after.volunteer_id, Some(first.id));
}

#[sqlx::test(migrations = "./migrations")]
async fn update_task_rejects_non_owner_and_bad_status(pool: PgPool) {
    let donor = register(&pool, "alice", "donor", "Springfield").await;
    let owner = register(&pool, "bob", "volunteer", "Springfield").await;
    let other = register(&pool, "dave", "volunteer", "Springfield").await;

    let (_, task, _) =
        DonationService::create_donation(&pool, &actor(&donor), new_donation("toys", 2, ""))
            .await
            .unwrap();

    TaskService::accept_task(&pool, &actor(&owner), &task.id)
        .await
        .unwrap();

    let err = TaskService::update_status(&pool, &actor(&other), &task.id, "picked_up")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotOwner));

    // Unrecognized status strings are a no-op rejection
    let err = TaskService::update_status(&pool, &actor(&owner), &task.id, "verified")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus(_)));

    // Skipping a step is rejected too
    let err = TaskService::update_status(&pool, &actor(&owner), &task.id, "delivered")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidStatus(_)));

    let task_after = TaskRepository::find_by_id(&pool, &task.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(task_after.status, TaskStatus::Assigned);
}

#[sqlx::test(migrations = "./migrations")]
async fn matching_requires_exact_location_and_item_type(pool: PgPool) {
    let donor = register(&pool, "alice", "donor", "Springfield").await;
    let receiver = register(&pool, "carol", "receiver", "Springfield").await;
    let far_receiver = register(&pool, "erin", "receiver", "Shelbyville").await;

    DonationService::create_donation(&pool, &actor(&donor), new_donation("food", 5, "Springfield"))
        .await
        .unwrap();
    let request =
        RequestService::create_request(&pool, &actor(&receiver), new_request("food", 2, "Springfield"))
            .await
            .unwrap();
    // Same item type, different location: excluded
    RequestService::create_request(
        &pool,
        &actor(&far_receiver),
        new_request("food", 2, "Shelbyville"),
    )
    .await
    .unwrap();
    // Same location, different item type: excluded
    RequestService::create_request(&pool, &actor(&receiver), new_request("books", 1, "Springfield"))
        .await
        .unwrap();

    // Donor sees exactly the one matching request
    match MatchService::list_matches(&pool, &actor(&donor)).await.unwrap() {
        MatchListing::Donor(groups) => {
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].requests.len(), 1);
            assert_eq!(groups[0].requests[0].id, request.id);
        }
        MatchListing::Receiver(_) => panic!("expected donor listing"),
    }

    // Receiver sees the donation from their own side
    match MatchService::list_matches(&pool, &actor(&receiver)).await.unwrap() {
        MatchListing::Receiver(groups) => {
            // One group per pending request with a counterpart
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].donations.len(), 1);
        }
        MatchListing::Donor(_) => panic!("expected receiver listing"),
    }

    // The far receiver has no matches
    match MatchService::list_matches(&pool, &actor(&far_receiver)).await.unwrap() {
        MatchListing::Receiver(groups) => assert!(groups.is_empty()),
        MatchListing::Donor(_) => panic!("expected receiver listing"),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn role_gates_deny_cross_role_actions(pool: PgPool) {
    let receiver = register(&pool, "carol", "receiver", "Springfield").await;
    let volunteer = register(&pool, "bob", "volunteer", "Springfield").await;

    let err =
        DonationService::create_donation(&pool, &actor(&receiver), new_donation("food", 1, ""))
            .await
            .unwrap_err();
    assert!(matches!(err, AppError::AccessDenied(Role::Receiver)));

    let err = RequestService::create_request(&pool, &actor(&volunteer), new_request("food", 1, ""))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AccessDenied(Role::Volunteer)));

    // Volunteers consume tasks, they do not match
    let err = MatchService::list_matches(&pool, &actor(&volunteer))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AccessDenied(Role::Volunteer)));
}

#[sqlx::test(migrations = "./migrations")]
async fn stats_count_only_delivered_donations(pool: PgPool) {
    let donor = register(&pool, "alice", "donor", "Springfield").await;
    let volunteer = register(&pool, "bob", "volunteer", "Springfield").await;

    let (_, delivered_task, _) =
        DonationService::create_donation(&pool, &actor(&donor), new_donation("food", 7, ""))
            .await
            .unwrap();
    // A second donation that never gets delivered
    DonationService::create_donation(&pool, &actor(&donor), new_donation("clothes", 4, ""))
        .await
        .unwrap();

    TaskService::accept_task(&pool, &actor(&volunteer), &delivered_task.id)
        .await
        .unwrap();
    TaskService::update_status(&pool, &actor(&volunteer), &delivered_task.id, "picked_up")
        .await
        .unwrap();
    TaskService::update_status(&pool, &actor(&volunteer), &delivered_task.id, "delivered")
        .await
        .unwrap();

    let stats = StatsService::platform_stats(&pool).await.unwrap();
    assert_eq!(stats.total_donations, 2);
    assert_eq!(stats.completed_deliveries, 1);
    assert_eq!(stats.total_users, 2);
    assert_eq!(stats.total_volunteers, 1);
    // In-progress donations never count toward items donated
    assert_eq!(stats.items_donated, 7);
}

#[sqlx::test(migrations = "./migrations")]
async fn registration_rejects_duplicates_and_unknown_roles(pool: PgPool) {
    register(&pool, "alice", "donor", "Springfield").await;

    let err = AuthService::register(
        &pool,
        "alice2",
        "alice@example.com",
        "Password123",
        "donor",
        "Springfield",
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists(_)));

    let err = AuthService::register(
        &pool,
        "mallory",
        "mallory@example.com",
        "Password123",
        "admin",
        "Springfield",
        None,
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
