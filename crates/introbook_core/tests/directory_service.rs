use introbook_core::{
    DirectoryError, DirectoryService, Household, HouseholdListQuery, InMemoryHouseholdDirectory,
    Member, Person, RebaseError, RelationLabel, ServiceError,
};
use uuid::Uuid;

fn patel_household() -> (Household, Member, Member, Member) {
    let mina = Member::new(RelationLabel::Spouse, Person::new("Patel", "Mina"));
    let raj = Member::new(RelationLabel::Son, Person::new("Patel", "Raj"));
    let kiran = Member::new(RelationLabel::Daughter, Person::new("Patel", "Kiran"));
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![mina.clone(), raj.clone(), kiran.clone()],
    );
    (household, mina, raj, kiran)
}

fn service_with(household: &Household) -> DirectoryService<InMemoryHouseholdDirectory> {
    let mut service = DirectoryService::new(InMemoryHouseholdDirectory::new());
    service
        .register_household(household)
        .expect("registration should succeed");
    service
}

#[test]
fn register_and_get_roundtrip() {
    let (household, ..) = patel_household();
    let service = service_with(&household);

    let loaded = service.household(household.id).expect("household should exist");
    assert_eq!(loaded, household);
}

#[test]
fn get_unknown_household_is_rejected() {
    let service = DirectoryService::new(InMemoryHouseholdDirectory::new());
    let err = service
        .household(Uuid::new_v4())
        .expect_err("unknown id must be rejected");
    assert!(matches!(err, ServiceError::HouseholdNotFound(_)));
}

#[test]
fn eligibility_reports_members_with_promotable_flags() {
    let (mut household, _, raj, _) = patel_household();
    household
        .members
        .push(Member::new(RelationLabel::Cousin, Person::new("Patel", "Jay")));
    let service = service_with(&household);

    let report = service
        .eligibility(household.id)
        .expect("probe should succeed");
    assert!(report.can_rebase);
    assert_eq!(report.eligible_members.len(), 4);

    let raj_row = report
        .eligible_members
        .iter()
        .find(|row| row.id == raj.id)
        .expect("son should be listed");
    assert_eq!(raj_row.full_name, "Patel Raj");
    assert_eq!(raj_row.relation, "Son");
    assert!(raj_row.promotable);

    let jay_row = report
        .eligible_members
        .iter()
        .find(|row| row.full_name == "Patel Jay")
        .expect("cousin should be listed");
    assert!(!jay_row.promotable);
}

#[test]
fn eligibility_with_parent_label_lists_no_members() {
    let father = Member::new(RelationLabel::Father, Person::new("Patel", "Amrut"));
    let household = Household::new(Person::new("Patel", "Raj"), vec![father]);
    let service = service_with(&household);

    let report = service
        .eligibility(household.id)
        .expect("probe should succeed");
    assert!(!report.can_rebase);
    assert!(report.eligible_members.is_empty());
}

#[test]
fn promote_commits_the_swap_and_audit_record() {
    let (household, _, raj, _) = patel_household();
    let mut service = service_with(&household);

    let outcome = service
        .promote(household.id, raj.id)
        .expect("promotion should succeed");

    assert_eq!(outcome.record.retired_household, household.id);
    assert_eq!(outcome.record.replacement_household, outcome.household.id);
    assert_eq!(outcome.record.promoted_member, raj.id);
    assert_eq!(outcome.household.head.full_name(), "Patel Raj");

    let replacement = service
        .household(outcome.household.id)
        .expect("replacement should be active");
    assert_eq!(replacement, outcome.household);

    let err = service
        .household(household.id)
        .expect_err("retired household must not be served as active");
    assert!(matches!(err, ServiceError::HouseholdNotFound(_)));

    assert_eq!(service.promotion_records(), vec![outcome.record]);
}

#[test]
fn retired_households_stay_listed_as_tombstones() {
    let (household, _, raj, _) = patel_household();
    let mut service = service_with(&household);
    service
        .promote(household.id, raj.id)
        .expect("promotion should succeed");

    let active = service
        .list_households(&HouseholdListQuery::default())
        .expect("listing should succeed");
    assert_eq!(active.len(), 1);
    assert!(active[0].is_active());

    let all = service
        .list_households(&HouseholdListQuery {
            include_retired: true,
            ..HouseholdListQuery::default()
        })
        .expect("listing should succeed");
    assert_eq!(all.len(), 2);
    let tombstone = all
        .iter()
        .find(|h| h.id == household.id)
        .expect("retired aggregate should remain");
    assert!(tombstone.retired);
    assert_eq!(tombstone.head.full_name(), "Patel Amrut");
}

#[test]
fn promote_rejects_ineligible_household_without_state_change() {
    let father = Member::new(RelationLabel::Father, Person::new("Patel", "Amrut"));
    let raj = Member::new(RelationLabel::Son, Person::new("Patel", "Kirit"));
    let household = Household::new(Person::new("Patel", "Raj"), vec![father, raj.clone()]);
    let mut service = service_with(&household);

    let err = service
        .promote(household.id, raj.id)
        .expect_err("parent label must block promotion");
    assert!(matches!(err, ServiceError::NotEligible(_)));

    let unchanged = service.household(household.id).expect("still active");
    assert_eq!(unchanged, household);
    assert!(service.promotion_records().is_empty());
}

#[test]
fn promote_rejects_unknown_member_without_state_change() {
    let (household, ..) = patel_household();
    let mut service = service_with(&household);

    let err = service
        .promote(household.id, Uuid::new_v4())
        .expect_err("unknown member must be rejected");
    assert!(matches!(
        err,
        ServiceError::Rebase(RebaseError::MemberNotFound(_))
    ));

    let unchanged = service.household(household.id).expect("still active");
    assert_eq!(unchanged, household);
}

#[test]
fn second_promotion_on_a_retired_household_is_rejected() {
    let (household, mina, raj, _) = patel_household();
    let mut service = service_with(&household);
    service
        .promote(household.id, raj.id)
        .expect("first promotion should succeed");

    let err = service
        .promote(household.id, mina.id)
        .expect_err("racing promotion must lose");
    assert!(matches!(err, ServiceError::HouseholdNotFound(_)));
    assert_eq!(service.promotion_records().len(), 1);
}

#[test]
fn duplicate_registration_surfaces_directory_error() {
    let (household, ..) = patel_household();
    let mut service = service_with(&household);

    let err = service
        .register_household(&household)
        .expect_err("duplicate must be rejected");
    assert!(matches!(
        err,
        ServiceError::Directory(DirectoryError::DuplicateHousehold(_))
    ));
}
