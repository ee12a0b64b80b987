use pretty_assertions::assert_eq;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std_util::{assert_err, assert_ok};
use tablesmith_core::{
    compile_all,
    registry::{Enum, FieldType, Model, Registry, RelationType},
    schema::db::Type,
    CompileConfig, Config, Hooks,
};

fn model(name: &str) -> Model {
    Model::new(name)
        .field("ID", FieldType::AutoIncrement)
        .identifier("primary", ["ID"])
}

fn registry(models: impl IntoIterator<Item = Model>) -> Registry {
    let mut registry = Registry::new();
    for model in models {
        registry.insert_model(model);
    }
    registry
}

#[test]
fn compiles_every_model() {
    let registry = registry([
        model("Tag"),
        model("Company"),
        model("Person")
            .related("Company", RelationType::ForOne)
            .related("Tag", RelationType::ForMany),
    ]);
    let config = CompileConfig::new(Config::new("public"));

    let compiled = assert_ok!(compile_all(&config, &registry));

    let summary: Vec<_> = compiled
        .models
        .iter()
        .map(|(model, tables)| {
            let names: Vec<_> = tables.iter().map(|table| table.name.clone()).collect();
            (model.as_str(), names)
        })
        .collect();

    assert_eq!(
        summary,
        [
            ("Company", vec!["companies".to_string()]),
            (
                "Person",
                vec!["people".to_string(), "person_tags".to_string()]
            ),
            ("Tag", vec!["tags".to_string()]),
        ]
    );
}

#[test]
fn empty_registry() {
    let config = CompileConfig::new(Config::new("public"));
    let compiled = assert_ok!(compile_all(&config, &Registry::new()));
    assert!(compiled.is_empty());
}

#[test]
fn first_failure_aborts_the_batch() {
    let started = Arc::new(AtomicUsize::new(0));

    let hooks = Hooks::new().on_start({
        let started = started.clone();
        move |config, model| {
            started.fetch_add(1, Ordering::SeqCst);
            Ok((config, model))
        }
    });

    let registry = registry([
        model("Alpha"),
        Model::new("Broken").field("Name", FieldType::String),
        model("Zed"),
    ]);
    let config = CompileConfig::new(Config::new("public")).hooks(hooks);

    let err = assert_err!(compile_all(&config, &registry));
    assert!(err.is_missing_primary_identifier());
    assert_eq!(started.load(Ordering::SeqCst), 2);
}

#[test]
fn big_serial_widens_keys_and_references() {
    let registry = registry([
        model("Tag"),
        model("Company"),
        model("Person")
            .related("Company", RelationType::ForOne)
            .related("Tag", RelationType::ForMany),
    ]);
    let config = CompileConfig::new(Config::new("public").use_big_serial(true));

    let compiled = assert_ok!(compile_all(&config, &registry));
    let person = &compiled.models["Person"];

    let people = &person[0];
    assert_eq!(people.column("id").unwrap().ty, Type::BigSerial);
    assert_eq!(people.column("company_id").unwrap().ty, Type::BigInt);

    let junction = &person[1];
    let types: Vec<_> = junction.columns.iter().map(|column| column.ty).collect();
    assert_eq!(types, [Type::BigSerial, Type::BigInt, Type::BigInt]);
}

#[test]
fn enums_compile_before_models() {
    let mut registry = registry([model("Person").field("Nationality", "Nationality")]);
    registry.insert_enum(Enum::new("Nationality", FieldType::String).entry("US", "American"));

    let config = CompileConfig::new(Config::new("public"));
    let compiled = assert_ok!(compile_all(&config, &registry));

    assert_eq!(compiled.enums["Nationality"][0].name, "nationalities");

    let names: Vec<_> = compiled.tables().iter().map(|table| table.name.as_str()).collect();
    assert_eq!(names, ["nationalities", "people"]);

    let fk = &compiled.models["Person"][0].foreign_keys[0];
    assert_eq!(fk.ref_table_name, "nationalities");
}

#[test]
fn junction_declared_from_both_sides_is_listed_once() {
    let registry = registry([
        model("Person").related("Tag", RelationType::ForMany),
        model("Tag").related("Person", RelationType::ForMany),
    ]);
    let config = CompileConfig::new(Config::new("public"));

    let compiled = assert_ok!(compile_all(&config, &registry));
    assert_eq!(compiled.models["Person"][1], compiled.models["Tag"][1]);

    let names: Vec<_> = compiled.tables().iter().map(|table| table.name.as_str()).collect();
    assert_eq!(names, ["people", "person_tags", "tags"]);
}

#[test]
fn model_table_clashing_with_junction() {
    let registry = registry([
        model("Tag"),
        model("Person").related("Tag", RelationType::ForMany),
        model("PersonTag").field("Label", FieldType::String),
    ]);
    let config = CompileConfig::new(Config::new("public"));

    let err = assert_err!(compile_all(&config, &registry), is_invalid_schema);
    assert_eq!(
        err.to_string(),
        "invalid schema: table `person_tags` is produced by both `Person` and `PersonTag`"
    );
}

#[test]
fn flattened_junction_names_clash() {
    let registry = registry([
        model("X"),
        model("TagX"),
        model("Person").related("TagX", RelationType::ForMany),
        model("PersonTag").related("X", RelationType::ForMany),
    ]);
    let config = CompileConfig::new(Config::new("public"));

    let err = assert_err!(compile_all(&config, &registry), is_invalid_schema);
    assert!(err
        .to_string()
        .ends_with("is produced by both `Person` and `PersonTag`"));
}
