use medibook_core::{
    parse_command, Address, Command, Email, InMemoryPersonRepository, Name, Person,
    PersonDetails, PersonRepository, PersonType, Phone, Specialty, Tag,
};

fn details(name: &str, phone: &str, tags: &[&str]) -> PersonDetails {
    PersonDetails::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse("contact@example.com").unwrap(),
        Address::parse("Outram Road").unwrap(),
        tags.iter().map(|tag| Tag::parse(tag).unwrap()),
    )
}

fn specialist(name: &str, phone: &str, specialty: &str, tags: &[&str]) -> Person {
    Person::specialist(
        details(name, phone, tags),
        Specialty::parse(specialty).unwrap(),
    )
}

fn sample_repo() -> InMemoryPersonRepository {
    InMemoryPersonRepository::with_persons([
        Person::patient(details("Alice Tan", "91234567", &["urgent"])),
        specialist("Benson Lee", "81111111", "Oncology", &["urgent"]),
        specialist("Carl Kurz", "82222222", "Oncology", &["urgent", "senior"]),
        specialist("Daniel Meier", "83333333", "Cardiology", &["urgent"]),
        specialist("Elle Meyer", "84444444", "Oncology", &[]),
        Person::patient(details("Fiona Kunz", "95555555", &[])),
    ])
    .unwrap()
}

fn run_find(repo: &mut InMemoryPersonRepository, input: &str) -> Vec<String> {
    match parse_command(input).expect("find should parse") {
        Command::Find(find) => {
            find.execute(repo);
        }
        other => panic!("expected find command, got {other:?}"),
    }
    repo.filtered_persons()
        .into_iter()
        .map(|person| person.name().to_string())
        .collect()
}

#[test]
fn specialty_and_tag_clauses_are_combined_with_and() {
    let mut repo = sample_repo();
    let names = run_find(&mut repo, "find -sp s/Oncology t/urgent");
    assert_eq!(names, vec!["Benson Lee".to_string()]);
}

#[test]
fn zero_clauses_match_type_discriminator_only() {
    let mut repo = sample_repo();
    let specialists = run_find(&mut repo, "find -sp");
    assert_eq!(specialists.len(), 4);

    let patients = run_find(&mut repo, "find -pa");
    assert_eq!(
        patients,
        vec!["Alice Tan".to_string(), "Fiona Kunz".to_string()]
    );
}

#[test]
fn empty_tag_clause_matches_only_untagged_records() {
    let mut repo = sample_repo();
    let names = run_find(&mut repo, "find -sp t/");
    assert_eq!(names, vec!["Elle Meyer".to_string()]);
}

#[test]
fn name_keywords_match_any_whole_word() {
    let mut repo = sample_repo();
    let names = run_find(&mut repo, "find -sp n/meier KURZ");
    assert_eq!(
        names,
        vec!["Carl Kurz".to_string(), "Daniel Meier".to_string()]
    );

    let names = run_find(&mut repo, "find -sp n/Mei");
    assert!(names.is_empty());
}

#[test]
fn exact_field_clauses_never_match_other_variant() {
    let mut repo = sample_repo();
    let names = run_find(&mut repo, "find -sp p/91234567");
    assert!(names.is_empty(), "patient phone must not match a specialist find");
}

#[test]
fn patient_find_ignores_filter_arguments() {
    let mut repo = sample_repo();
    let names = run_find(&mut repo, "find -pa n/Nobody t/missing");
    assert_eq!(
        names,
        vec!["Alice Tan".to_string(), "Fiona Kunz".to_string()]
    );
}

#[test]
fn find_reports_listed_count() {
    let mut repo = sample_repo();
    let command = parse_command("find -sp s/Cardiology").unwrap();
    let result = command.execute(&mut repo).unwrap();
    assert_eq!(result.feedback, "1 persons listed!");
    assert_eq!(
        repo.active_predicate().kind(),
        Some(PersonType::Specialist)
    );
}
