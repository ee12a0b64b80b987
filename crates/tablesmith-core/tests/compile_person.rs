use pretty_assertions::assert_eq;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std_util::{assert_err, assert_ok};
use tablesmith_core::{
    compile_model,
    registry::{Enum, FieldType, Model, Registry, RelationType},
    schema::db::{Column, ForeignKey, Index, ReferentialAction, Table, Type},
    CompileConfig, Config, Hooks,
};

fn company() -> Model {
    Model::new("Company")
        .field("ID", FieldType::AutoIncrement)
        .field("Name", FieldType::String)
        .identifier("primary", ["ID"])
}

fn person() -> Model {
    Model::new("Person")
        .field("ID", FieldType::AutoIncrement)
        .field("Email", FieldType::String)
        .field("LastName", FieldType::String)
        .field("Nationality", "Nationality")
        .identifier("primary", ["ID"])
        .related("Company", RelationType::ForOne)
}

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.insert_enum(
        Enum::new("Nationality", FieldType::String)
            .entry("US", "American")
            .entry("DE", "German"),
    );
    registry.insert_model(company());
    registry.insert_model(person());
    registry
}

fn config() -> CompileConfig {
    CompileConfig::new(Config::new("public"))
}

fn cascade(name: &str, column: &str, ref_table: &str, ref_column: &str) -> ForeignKey {
    ForeignKey {
        schema: "public".to_string(),
        name: name.to_string(),
        table_name: "people".to_string(),
        columns: vec![column.to_string()],
        ref_table_name: ref_table.to_string(),
        ref_columns: vec![ref_column.to_string()],
        on_delete: Some(ReferentialAction::Cascade),
        on_update: None,
    }
}

fn index(name: &str, column: &str) -> Index {
    Index {
        name: name.to_string(),
        table_name: "people".to_string(),
        columns: vec![column.to_string()],
        unique: false,
    }
}

#[test]
fn person_compiles_to_people() {
    let registry = registry();
    let tables = assert_ok!(compile_model(&config(), &registry, &person()));

    let mut expect = Table::new("public", "people");
    expect.columns = vec![
        Column::new("email", Type::Text),
        Column::new("id", Type::Serial).primary_key(true),
        Column::new("last_name", Type::Text),
        Column::new("nationality_id", Type::Integer).not_null(),
        Column::new("company_id", Type::Integer).not_null(),
    ];
    expect.foreign_keys = vec![
        cascade(
            "fk_people_nationality_id",
            "nationality_id",
            "nationalities",
            "id",
        ),
        cascade("fk_people_company_id", "company_id", "companies", "id"),
    ];
    expect.indices = vec![
        index("idx_people_nationality_id", "nationality_id"),
        index("idx_people_company_id", "company_id"),
    ];

    assert_eq!(tables, vec![expect]);
}

#[test]
fn compiling_twice_is_identical() {
    let registry = registry();

    let first = assert_ok!(compile_model(&config(), &registry, &person()));
    let second = assert_ok!(compile_model(&config(), &registry, &person()));

    assert_eq!(first, second);
}

#[test]
fn declaration_order_does_not_matter() {
    let registry = registry();

    let reversed = Model::new("Person")
        .related("Company", RelationType::ForOne)
        .field("Nationality", "Nationality")
        .field("LastName", FieldType::String)
        .field("Email", FieldType::String)
        .field("ID", FieldType::AutoIncrement)
        .identifier("primary", ["ID"]);

    let expect = assert_ok!(compile_model(&config(), &registry, &person()));
    let actual = assert_ok!(compile_model(&config(), &registry, &reversed));

    assert_eq!(actual, expect);
}

#[test]
fn only_primary_fields_are_primary_keys() {
    let registry = registry();
    let model = Model::new("Membership")
        .field("PersonID", FieldType::Integer)
        .field("GroupID", FieldType::Integer)
        .field("Since", FieldType::Date)
        .identifier("primary", ["PersonID", "GroupID"]);

    let tables = assert_ok!(compile_model(&config(), &registry, &model));
    let table = &tables[0];

    let primary: Vec<_> = table
        .primary_key_columns()
        .map(|column| column.name.as_str())
        .collect();
    assert_eq!(primary, ["group_id", "person_id"]);
    assert!(!table.column("since").unwrap().primary_key);
}

#[test]
fn non_primary_identifiers_get_unique_indices() {
    let registry = registry();
    let model = person()
        .field("FirstName", FieldType::String)
        .identifier("name", ["FirstName", "LastName"])
        .identifier("email", ["Email"]);

    let tables = assert_ok!(compile_model(&config(), &registry, &model));
    let table = &tables[0];

    let unique: Vec<_> = table
        .indices
        .iter()
        .filter(|index| index.unique)
        .map(|index| (index.name.as_str(), index.columns.clone()))
        .collect();

    assert_eq!(
        unique,
        [
            ("uidx_people_email", vec!["email".to_string()]),
            (
                "uidx_people_first_name_last_name",
                vec!["first_name".to_string(), "last_name".to_string()]
            ),
        ]
    );
}

#[test]
fn every_primitive_maps_to_a_storage_type() {
    let registry = registry();
    let model = Model::new("Sample")
        .field("Key", FieldType::UUID)
        .field("Label", FieldType::String)
        .field("Count", FieldType::Integer)
        .field("Ratio", FieldType::Float)
        .field("SeenAt", FieldType::Time)
        .field("Born", FieldType::Date)
        .field("Active", FieldType::Boolean)
        .field("Password", FieldType::Protected)
        .field("Secret", FieldType::Sealed)
        .identifier("primary", ["Key"]);

    let tables = assert_ok!(compile_model(&config(), &registry, &model));
    let columns: Vec<_> = tables[0]
        .columns
        .iter()
        .map(|column| (column.name.as_str(), column.ty))
        .collect();

    assert_eq!(
        columns,
        [
            ("active", Type::Boolean),
            ("born", Type::Date),
            ("count", Type::Integer),
            ("key", Type::Uuid),
            ("label", Type::Text),
            ("password", Type::Text),
            ("ratio", Type::DoublePrecision),
            ("secret", Type::Text),
            ("seen_at", Type::TimestampTz),
        ]
    );
}

#[test]
fn field_clashing_with_relation_column() {
    let registry = registry();
    let model = person().field("CompanyID", FieldType::Integer);

    let err = assert_err!(
        compile_model(&config(), &registry, &model),
        is_invalid_schema
    );
    assert_eq!(
        err.to_string(),
        "invalid schema: duplicate column `company_id` on table `people`"
    );
}

#[test]
fn name_clash_goes_through_failure_hook() {
    let registry = registry();
    let model = person().field("CompanyID", FieldType::Integer);

    let called = Arc::new(AtomicBool::new(false));
    let hooks = Hooks::new().on_failure({
        let called = called.clone();
        move |_, model, err| {
            assert_eq!(model.name, "Person");
            assert!(err.is_invalid_schema());
            called.store(true, Ordering::SeqCst);
            err
        }
    });
    let config = CompileConfig::new(Config::new("public")).hooks(hooks);

    assert_err!(compile_model(&config, &registry, &model), is_invalid_schema);
    assert!(called.load(Ordering::SeqCst));
}

#[test]
fn identifiers_over_the_same_fields_share_an_index() {
    let registry = registry();
    let model = person()
        .identifier("email", ["Email"])
        .identifier("login", ["Email"]);

    let tables = assert_ok!(compile_model(&config(), &registry, &model));

    let unique: Vec<_> = tables[0]
        .indices
        .iter()
        .filter(|index| index.unique)
        .map(|index| index.name.as_str())
        .collect();
    assert_eq!(unique, ["uidx_people_email"]);
}
