use medibook_core::{
    Address, Email, InMemoryPersonRepository, Name, Person, PersonDetails, PersonRepository,
    PersonType, Phone, RepoError, SearchPredicate, Specialty, Tag,
};

fn patient(name: &str, phone: &str) -> Person {
    Person::patient(PersonDetails::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse("patient@example.com").unwrap(),
        Address::parse("Toa Payoh").unwrap(),
        Vec::<Tag>::new(),
    ))
}

fn specialist(name: &str, phone: &str) -> Person {
    Person::specialist(
        PersonDetails::new(
            Name::parse(name).unwrap(),
            Phone::parse(phone).unwrap(),
            Email::parse("doctor@example.com").unwrap(),
            Address::parse("Novena").unwrap(),
            Vec::<Tag>::new(),
        ),
        Specialty::parse("Dermatology").unwrap(),
    )
}

#[test]
fn new_repository_shows_everything() {
    let repo =
        InMemoryPersonRepository::with_persons([patient("Ann", "911"), specialist("Ben", "922")])
            .unwrap();
    assert_eq!(repo.filtered_persons().len(), 2);
    assert_eq!(repo.active_predicate(), &SearchPredicate::show_all());
}

#[test]
fn add_rejects_same_identity_even_across_variants() {
    let mut repo = InMemoryPersonRepository::new();
    repo.add_person(patient("Ann", "911")).unwrap();
    let err = repo.add_person(specialist("Ann", "911")).unwrap_err();
    assert_eq!(err, RepoError::DuplicatePerson);
    assert!(repo.has_person(&specialist("Ann", "911")));
    assert!(!repo.has_person(&patient("Ann", "912")));
}

#[test]
fn set_person_replaces_single_slot_in_place() {
    let mut repo = InMemoryPersonRepository::with_persons([
        patient("Ann", "911"),
        patient("Bea", "922"),
        patient("Cal", "933"),
    ])
    .unwrap();

    repo.set_person(&patient("Bea", "922"), patient("Bea", "999"))
        .unwrap();

    let phones = repo
        .persons()
        .iter()
        .map(|person| person.phone().to_string())
        .collect::<Vec<_>>();
    assert_eq!(phones, vec!["911", "999", "933"]);
}

#[test]
fn set_person_guards_identity_and_presence() {
    let mut repo =
        InMemoryPersonRepository::with_persons([patient("Ann", "911"), patient("Bea", "922")])
            .unwrap();

    let err = repo
        .set_person(&patient("Bea", "922"), patient("Ann", "911"))
        .unwrap_err();
    assert_eq!(err, RepoError::DuplicatePerson);

    let err = repo
        .set_person(&patient("Zed", "000"), patient("Zed", "001"))
        .unwrap_err();
    assert_eq!(err, RepoError::NotFound);
    assert_eq!(repo.persons()[1], patient("Bea", "922"));
}

#[test]
fn filtered_view_follows_store_changes() {
    let mut repo =
        InMemoryPersonRepository::with_persons([patient("Ann", "911"), specialist("Ben", "922")])
            .unwrap();
    repo.update_filtered_persons(SearchPredicate::for_type(PersonType::Specialist));
    assert_eq!(repo.filtered_persons(), vec![&specialist("Ben", "922")]);

    repo.add_person(specialist("Cho", "933")).unwrap();
    assert_eq!(repo.filtered_persons().len(), 2);

    repo.delete_person(&specialist("Ben", "922")).unwrap();
    assert_eq!(repo.filtered_persons(), vec![&specialist("Cho", "933")]);
}
