//! Regression coverage for the assignment service.

use std::sync::Arc;

use chrono::NaiveDate;
use mockall::predicate::eq;
use rstest::rstest;
use uuid::Uuid;

use crate::domain::ports::{
    AssignmentCommand, AssignmentQuery, AssignmentRepositoryError, CreateAssignmentRequest,
    MockAssignmentRepository, MockProjectRepository, MockWorkerRepository,
};
use crate::domain::{
    Assignment, DateInterval, EmailAddress, ErrorCode, Principal, Project, ProjectName, Role,
    Username, Worker, WorkerId,
};

fn service(
    workers: MockWorkerRepository,
    projects: MockProjectRepository,
    assignments: MockAssignmentRepository,
) -> super::AssignmentService<MockWorkerRepository, MockProjectRepository, MockAssignmentRepository>
{
    super::AssignmentService::new(Arc::new(workers), Arc::new(projects), Arc::new(assignments))
}

fn manager() -> Principal {
    Principal::new(WorkerId::random(), Role::ProjectManager)
}

fn date(value: &str) -> NaiveDate {
    value.parse().expect("valid fixture date")
}

fn interval(start: &str, end: &str) -> DateInterval {
    DateInterval::new(date(start), date(end))
}

fn stored_worker(id: WorkerId) -> Worker {
    Worker::new(
        id,
        Username::new("ada").expect("fixture username"),
        EmailAddress::new("ada@example.com").expect("fixture email"),
        Role::Employee,
    )
}

fn stored_project(id: Uuid) -> Project {
    Project::new(
        id,
        ProjectName::new("Apollo").expect("fixture name"),
        WorkerId::random(),
    )
}

fn create_request(
    project_id: Uuid,
    worker_id: WorkerId,
    start: &str,
    end: &str,
) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        project_id,
        worker_id,
        start_date: date(start),
        end_date: date(end),
    }
}

fn sample_assignment(worker_id: WorkerId) -> Assignment {
    Assignment::new(
        Uuid::new_v4(),
        interval("2024-03-01", "2024-03-15"),
        Uuid::new_v4(),
        worker_id,
    )
}

#[rstest]
#[tokio::test]
async fn create_assigns_an_available_worker() {
    let worker_id = WorkerId::random();
    let project_id = Uuid::new_v4();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_intervals_for_worker()
        .with(eq(worker_id))
        .returning(|_| Ok(vec![]));
    assignments
        .expect_insert()
        .withf(move |assignment| {
            assignment.worker_id() == worker_id && assignment.project_id() == project_id
        })
        .returning(|_| Ok(()));

    let mut workers = MockWorkerRepository::new();
    workers
        .expect_find_by_id()
        .with(eq(worker_id))
        .returning(move |_| Ok(Some(stored_worker(worker_id))));

    let mut projects = MockProjectRepository::new();
    projects
        .expect_find_by_id()
        .with(eq(project_id))
        .returning(move |_| Ok(Some(stored_project(project_id))));

    let created = service(workers, projects, assignments)
        .create_assignment(
            manager(),
            create_request(project_id, worker_id, "2024-01-01", "2024-01-31"),
        )
        .await
        .expect("creation succeeds");

    assert_eq!(created.interval(), interval("2024-01-01", "2024-01-31"));
    assert_eq!(created.worker_id(), worker_id);
}

// A candidate overlapping an existing interval is rejected before any
// worker or project lookup happens.
#[rstest]
#[tokio::test]
async fn create_rejects_an_unavailable_worker_without_further_lookups() {
    let worker_id = WorkerId::random();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_intervals_for_worker()
        .returning(|_| Ok(vec![interval("2024-01-01", "2024-01-31")]));

    let err = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        assignments,
    )
    .create_assignment(
        manager(),
        create_request(Uuid::new_v4(), worker_id, "2024-01-15", "2024-02-15"),
    )
    .await
    .expect_err("conflicting candidate fails");

    assert_eq!(err.code(), ErrorCode::WorkerNotAvailable);
}

// Back-to-back assignments share a boundary date and are accepted.
#[rstest]
#[tokio::test]
async fn create_accepts_a_candidate_sharing_a_boundary() {
    let worker_id = WorkerId::random();
    let project_id = Uuid::new_v4();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_intervals_for_worker()
        .returning(|_| Ok(vec![interval("2024-01-01", "2024-01-31")]));
    assignments.expect_insert().returning(|_| Ok(()));

    let mut workers = MockWorkerRepository::new();
    workers
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored_worker(worker_id))));

    let mut projects = MockProjectRepository::new();
    projects
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored_project(project_id))));

    let created = service(workers, projects, assignments)
        .create_assignment(
            manager(),
            create_request(project_id, worker_id, "2024-01-31", "2024-02-28"),
        )
        .await
        .expect("boundary candidate succeeds");

    assert_eq!(created.interval(), interval("2024-01-31", "2024-02-28"));
}

#[rstest]
#[tokio::test]
async fn create_requires_a_manager_or_administrator() {
    let principal = Principal::new(WorkerId::random(), Role::Employee);
    let err = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        MockAssignmentRepository::new(),
    )
    .create_assignment(
        principal,
        create_request(Uuid::new_v4(), WorkerId::random(), "2024-01-01", "2024-01-31"),
    )
    .await
    .expect_err("employee creation fails");

    assert_eq!(err.code(), ErrorCode::RoleNotAllowed);
}

#[rstest]
#[tokio::test]
async fn create_rejects_a_missing_worker() {
    let worker_id = WorkerId::random();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_intervals_for_worker()
        .returning(|_| Ok(vec![]));

    let mut workers = MockWorkerRepository::new();
    workers
        .expect_find_by_id()
        .with(eq(worker_id))
        .returning(|_| Ok(None));

    let err = service(workers, MockProjectRepository::new(), assignments)
        .create_assignment(
            manager(),
            create_request(Uuid::new_v4(), worker_id, "2024-01-01", "2024-01-31"),
        )
        .await
        .expect_err("missing worker fails");

    assert_eq!(err.code(), ErrorCode::WorkerNotFound);
}

#[rstest]
#[tokio::test]
async fn create_rejects_a_missing_project() {
    let worker_id = WorkerId::random();
    let project_id = Uuid::new_v4();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_intervals_for_worker()
        .returning(|_| Ok(vec![]));

    let mut workers = MockWorkerRepository::new();
    workers
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored_worker(worker_id))));

    let mut projects = MockProjectRepository::new();
    projects
        .expect_find_by_id()
        .with(eq(project_id))
        .returning(|_| Ok(None));

    let err = service(workers, projects, assignments)
        .create_assignment(
            manager(),
            create_request(project_id, worker_id, "2024-01-01", "2024-01-31"),
        )
        .await
        .expect_err("missing project fails");

    assert_eq!(err.code(), ErrorCode::ProjectNotFound);
}

// The availability check and the insert are not covered by a transaction.
// Two creates that both read the pre-insert interval set both succeed,
// even though the second would conflict with the first.
#[rstest]
#[tokio::test]
async fn concurrent_creates_can_both_pass_the_availability_check() {
    let worker_id = WorkerId::random();
    let project_id = Uuid::new_v4();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_intervals_for_worker()
        .times(2)
        .returning(|_| Ok(vec![]));
    assignments.expect_insert().times(2).returning(|_| Ok(()));

    let mut workers = MockWorkerRepository::new();
    workers
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored_worker(worker_id))));

    let mut projects = MockProjectRepository::new();
    projects
        .expect_find_by_id()
        .returning(move |_| Ok(Some(stored_project(project_id))));

    let service = service(workers, projects, assignments);
    for _ in 0..2 {
        service
            .create_assignment(
                manager(),
                create_request(project_id, worker_id, "2024-01-10", "2024-01-20"),
            )
            .await
            .expect("both interleaved creates succeed");
    }
}

#[rstest]
#[case(Role::Admin)]
#[case(Role::ProjectManager)]
#[tokio::test]
async fn unrestricted_principals_list_every_assignment(#[case] role: Role) {
    let roster = vec![sample_assignment(WorkerId::random())];
    let returned = roster.clone();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_all()
        .returning(move || Ok(returned.clone()));

    let listed = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        assignments,
    )
    .list_assignments(Principal::new(WorkerId::random(), role))
    .await
    .expect("list succeeds");

    assert_eq!(listed, roster);
}

#[rstest]
#[tokio::test]
async fn employees_list_only_their_own_assignments() {
    let employee = WorkerId::random();
    let owned = vec![sample_assignment(employee)];
    let returned = owned.clone();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_list_for_worker()
        .with(eq(employee))
        .returning(move |_| Ok(returned.clone()));

    let listed = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        assignments,
    )
    .list_assignments(Principal::new(employee, Role::Employee))
    .await
    .expect("list succeeds");

    assert_eq!(listed, owned);
}

#[rstest]
#[tokio::test]
async fn employees_cannot_observe_unowned_assignments() {
    let employee = WorkerId::random();
    let id = Uuid::new_v4();

    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_find_for_worker()
        .with(eq(employee), eq(id))
        .returning(|_, _| Ok(None));

    let err = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        assignments,
    )
    .get_assignment(Principal::new(employee, Role::Employee), id)
    .await
    .expect_err("unowned assignment reads as absent");

    assert_eq!(err.code(), ErrorCode::AssignmentNotFound);
}

#[rstest]
#[tokio::test]
async fn missing_assignment_lookups_always_report_assignment_not_found() {
    let id = Uuid::new_v4();
    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_find_by_id()
        .with(eq(id))
        .times(2)
        .returning(|_| Ok(None));

    let service = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        assignments,
    );

    for _ in 0..2 {
        let err = service
            .get_assignment(manager(), id)
            .await
            .expect_err("absent assignment fails");
        assert_eq!(err.code(), ErrorCode::AssignmentNotFound);
    }
}

#[rstest]
#[tokio::test]
async fn store_failures_surface_as_store_errors() {
    let mut assignments = MockAssignmentRepository::new();
    assignments
        .expect_find_by_id()
        .returning(|_| Err(AssignmentRepositoryError::connection("pool exhausted")));

    let err = service(
        MockWorkerRepository::new(),
        MockProjectRepository::new(),
        assignments,
    )
    .get_assignment(manager(), Uuid::new_v4())
    .await
    .expect_err("store failure fails the lookup");

    assert_eq!(err.code(), ErrorCode::Store);
}
