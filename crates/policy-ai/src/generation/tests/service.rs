use std::sync::Arc;

use super::common::*;
use crate::generation::domain::PolicyId;
use crate::generation::repository::{PolicyRepository, RepositoryError};
use crate::generation::service::{PolicyService, PolicyServiceError};
use crate::generation::validation::ValidationError;

#[test]
fn generate_persists_the_assembled_document() {
    let (service, repository) = build_service();

    let document = service.generate(finance_raw()).expect("generation succeeds");

    let stored = repository
        .fetch(&document.id)
        .expect("fetch succeeds")
        .expect("document stored");
    assert_eq!(stored, document);
}

#[test]
fn generate_propagates_validation_failures() {
    let (service, repository) = build_service();

    let mut raw = finance_raw();
    raw.jurisdiction = Some("Mars".to_string());

    match service.generate(raw) {
        Err(PolicyServiceError::Validation(ValidationError::InvalidEnum {
            field: "jurisdiction",
            ..
        })) => {}
        other => panic!("expected a validation error, got {other:?}"),
    }
    assert_eq!(repository.len(), 0, "nothing may be stored on rejection");
}

#[test]
fn preview_does_not_persist() {
    let (service, repository) = build_service();

    let summary = service.preview(finance_raw()).expect("preview succeeds");

    assert!(summary.word_count >= 8000);
    assert_eq!(summary.reference_count, 5);
    assert_eq!(repository.len(), 0);
}

#[test]
fn generate_propagates_repository_conflicts() {
    let service = PolicyService::new(Arc::new(ConflictRepository));

    match service.generate(finance_raw()) {
        Err(PolicyServiceError::Repository(RepositoryError::Conflict)) => {}
        other => panic!("expected a conflict, got {other:?}"),
    }
}

#[test]
fn generate_propagates_unavailable_stores() {
    let service = PolicyService::new(Arc::new(UnavailableRepository));

    match service.generate(finance_raw()) {
        Err(PolicyServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected an unavailable store, got {other:?}"),
    }
}

#[test]
fn get_propagates_not_found() {
    let (service, _) = build_service();

    match service.get(&PolicyId("missing".to_string())) {
        Err(PolicyServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found, got {other:?}"),
    }
}

#[test]
fn delete_removes_exactly_once() {
    let (service, _) = build_service();
    let document = service.generate(finance_raw()).expect("generation succeeds");

    service.delete(&document.id).expect("first delete succeeds");

    match service.delete(&document.id) {
        Err(PolicyServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found on second delete, got {other:?}"),
    }
}

#[test]
fn list_returns_summaries_oldest_first() {
    let (service, _) = build_service();
    let first = service.generate(finance_raw()).expect("generation succeeds");
    let second = service
        .generate(public_sector_raw())
        .expect("generation succeeds");

    let summaries = service.list().expect("list succeeds");

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].policy_id, first.id);
    assert_eq!(summaries[1].policy_id, second.id);
    assert!(summaries[0].sections.contains(&"Executive Summary"));
}
