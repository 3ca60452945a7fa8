use introbook_core::kinship::matrix;
use introbook_core::{
    can_rebase, rebase, Household, Member, MemberRelation, Person, RebaseError, RelationCategory,
    RelationLabel,
};
use uuid::Uuid;

fn member(relation: RelationLabel, surname: &str, name: &str) -> Member {
    Member::new(relation, Person::new(surname, name))
}

#[test]
fn matrix_self_perspective_is_identity() {
    assert_eq!(
        matrix::resolve(RelationCategory::Head, RelationCategory::Head),
        "Self"
    );
}

#[test]
fn promoting_the_son_relabels_the_whole_household() {
    let mina = member(RelationLabel::Spouse, "Patel", "Mina");
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let kiran = member(RelationLabel::Daughter, "Patel", "Kiran");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![mina.clone(), raj.clone(), kiran.clone()],
    );

    let rebased = rebase(&household, raj.id).expect("promotion should succeed");

    assert_eq!(rebased.head.full_name(), "Patel Raj");
    assert_eq!(rebased.members.len(), 3);

    let labels: Vec<(String, String)> = rebased
        .members
        .iter()
        .map(|m| (m.person.full_name(), m.relation.display().to_string()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Patel Amrut".to_string(), "Father".to_string()),
            ("Patel Mina".to_string(), "Mother".to_string()),
            ("Patel Kiran".to_string(), "Sister".to_string()),
        ]
    );
}

#[test]
fn sibling_collapse_overrides_the_self_cell() {
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let kirit = member(RelationLabel::Son, "Patel", "Kirit");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![raj.clone(), kirit.clone()],
    );

    let rebased = rebase(&household, raj.id).expect("promotion should succeed");

    let kirit_after = rebased
        .member(kirit.id)
        .expect("sibling should be carried through");
    assert_eq!(
        kirit_after.relation,
        MemberRelation::Label(RelationLabel::Brother)
    );
    assert_eq!(
        rebased.members[0].relation,
        MemberRelation::Label(RelationLabel::Father)
    );
}

#[test]
fn sibling_collapse_covers_daughter_ties() {
    let kiran = member(RelationLabel::Daughter, "Patel", "Kiran");
    let sita = member(RelationLabel::Daughter, "Patel", "Sita");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![kiran.clone(), sita.clone()],
    );

    let rebased = rebase(&household, kiran.id).expect("promotion should succeed");

    let sita_after = rebased.member(sita.id).expect("sister should be present");
    assert_eq!(
        sita_after.relation,
        MemberRelation::Label(RelationLabel::Sister)
    );
}

#[test]
fn brother_label_counts_as_a_son_generation_tie() {
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let bharat = member(RelationLabel::Brother, "Patel", "Bharat");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![raj.clone(), bharat.clone()],
    );

    let rebased = rebase(&household, raj.id).expect("promotion should succeed");

    let bharat_after = rebased.member(bharat.id).expect("brother should be present");
    assert_eq!(
        bharat_after.relation,
        MemberRelation::Label(RelationLabel::Brother)
    );
}

#[test]
fn grandchild_ties_fall_through_to_the_raw_matrix() {
    let arya = member(RelationLabel::Grandson, "Patel", "Arya");
    let dev = member(RelationLabel::Grandson, "Patel", "Dev");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![arya.clone(), dev.clone()],
    );

    let rebased = rebase(&household, arya.id).expect("promotion should succeed");

    let dev_after = rebased.member(dev.id).expect("grandson should be present");
    assert_eq!(
        dev_after.relation,
        MemberRelation::Compound("Self/Cousin-brother".to_string())
    );
}

#[test]
fn unmapped_labels_pass_through_unchanged() {
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let jay = member(RelationLabel::Cousin, "Patel", "Jay");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![raj.clone(), jay.clone()],
    );

    let rebased = rebase(&household, raj.id).expect("one unmapped label must not abort");

    let jay_after = rebased.member(jay.id).expect("cousin should be present");
    assert_eq!(
        jay_after.relation.as_label().map(RelationLabel::as_str),
        Some("cousin")
    );
}

#[test]
fn spouse_promotion_round_trips_to_the_original_labels() {
    let mina = member(RelationLabel::Spouse, "Patel", "Mina");
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![mina.clone(), raj.clone()],
    );

    let once = rebase(&household, mina.id).expect("first promotion should succeed");
    assert_eq!(once.head.full_name(), "Patel Mina");
    let amrut_member = once.members[0].clone();
    assert_eq!(
        amrut_member.relation,
        MemberRelation::Label(RelationLabel::Spouse)
    );

    let twice = rebase(&once, amrut_member.id).expect("promotion back should succeed");
    assert_eq!(twice.head.full_name(), "Patel Amrut");

    let mina_after = twice.members[0].clone();
    assert_eq!(mina_after.person.full_name(), "Patel Mina");
    assert_eq!(
        mina_after.relation,
        MemberRelation::Label(RelationLabel::Spouse)
    );
    let raj_after = twice.member(raj.id).expect("son should be carried through");
    assert_eq!(raj_after.relation, MemberRelation::Label(RelationLabel::Son));
}

#[test]
fn attributes_are_carried_through_unchanged() {
    let mut person = Person::new("Patel", "Mina");
    person.mobile_number = "9876500000".to_string();
    person.city = "Ahmedabad".to_string();
    person
        .extra
        .insert("bloodGroup".to_string(), "B+".to_string());
    let mina = Member::new(RelationLabel::Spouse, person.clone());
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let household = Household::new(Person::new("Patel", "Amrut"), vec![mina.clone(), raj.clone()]);

    let rebased = rebase(&household, raj.id).expect("promotion should succeed");

    let mina_after = rebased.member(mina.id).expect("spouse should be present");
    assert_eq!(mina_after.person, person);
}

#[test]
fn failed_promotion_leaves_the_input_untouched() {
    let raj = member(RelationLabel::Son, "Patel", "Raj");
    let household = Household::new(Person::new("Patel", "Amrut"), vec![raj]);
    let snapshot = household.clone();

    let err = rebase(&household, Uuid::new_v4()).expect_err("unknown member must be rejected");
    assert!(matches!(err, RebaseError::MemberNotFound(_)));
    assert_eq!(household, snapshot);
}

#[test]
fn unsupported_promotion_names_the_relation() {
    let jay = member(RelationLabel::Cousin, "Patel", "Jay");
    let household = Household::new(Person::new("Patel", "Amrut"), vec![jay.clone()]);
    let snapshot = household.clone();

    let err = rebase(&household, jay.id).expect_err("cousin promotion must be rejected");
    match err {
        RebaseError::UnsupportedRelation { member, relation } => {
            assert_eq!(member, jay.id);
            assert_eq!(relation, "Cousin");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(household, snapshot);
}

#[test]
fn eligibility_gate_blocks_each_parent_class_label() {
    for label in [
        RelationLabel::Father,
        RelationLabel::Mother,
        RelationLabel::FatherInLaw,
        RelationLabel::MotherInLaw,
    ] {
        let parent = member(label, "Patel", "Elder");
        let household = Household::new(Person::new("Patel", "Raj"), vec![parent]);
        assert!(!can_rebase(&household), "{label:?} should block re-basing");
    }
}

#[test]
fn eligibility_holds_without_parent_labels() {
    let mina = member(RelationLabel::Spouse, "Patel", "Mina");
    let jay = member(RelationLabel::Cousin, "Patel", "Jay");
    let household = Household::new(Person::new("Patel", "Amrut"), vec![mina, jay]);
    assert!(can_rebase(&household));

    let empty = Household::new(Person::new("Patel", "Amrut"), Vec::new());
    assert!(can_rebase(&empty));
}

#[test]
fn daughter_in_law_promotion_uses_in_law_labels() {
    let mina = member(RelationLabel::Spouse, "Patel", "Mina");
    let lila = member(RelationLabel::DaughterInLaw, "Patel", "Lila");
    let kiran = member(RelationLabel::Daughter, "Patel", "Kiran");
    let household = Household::new(
        Person::new("Patel", "Amrut"),
        vec![mina.clone(), lila.clone(), kiran.clone()],
    );

    let rebased = rebase(&household, lila.id).expect("promotion should succeed");

    assert_eq!(
        rebased.members[0].relation,
        MemberRelation::Label(RelationLabel::FatherInLaw)
    );
    let mina_after = rebased.member(mina.id).expect("spouse should be present");
    assert_eq!(
        mina_after.relation,
        MemberRelation::Label(RelationLabel::MotherInLaw)
    );
    let kiran_after = rebased.member(kiran.id).expect("daughter should be present");
    assert_eq!(
        kiran_after.relation,
        MemberRelation::Compound("Sister-in-law(Nanand)".to_string())
    );
}
