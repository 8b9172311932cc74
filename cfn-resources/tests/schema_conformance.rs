//! The checked-in modules against the registry schemas they are generated from

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use cfn_codegen::{CodegenConfig, ResourceModel, load_model, render};
use cfn_core::schema::{AttributeType, PropertyTypeSchema, ResourceSchema, UpdateBehavior};
use cfn_resources::catalog;
use serde_json::Value as Json;

fn manifest_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn schema_dir() -> PathBuf {
    manifest_dir().join("../schemas")
}

/// Registry schemas keyed by type name
fn registry_schemas() -> BTreeMap<String, Json> {
    let mut schemas = BTreeMap::new();
    for entry in fs::read_dir(schema_dir()).unwrap() {
        let path = entry.unwrap().path();
        if path.extension().is_some_and(|ext| ext == "json") {
            let json: Json = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
            let type_name = json["typeName"].as_str().unwrap().to_string();
            schemas.insert(type_name, json);
        }
    }
    schemas
}

fn models() -> Vec<ResourceModel> {
    let mut paths: Vec<PathBuf> = fs::read_dir(schema_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    paths
        .iter()
        .map(|path| load_model(&fs::read_to_string(path).unwrap()).unwrap())
        .collect()
}

fn catalog_schema(type_name: &str) -> ResourceSchema {
    let catalog = catalog();
    let entry = catalog
        .get(type_name)
        .unwrap_or_else(|| panic!("{} is not in the catalog", type_name));
    (entry.schema)()
}

fn read_generated(name: &str) -> String {
    let path = manifest_dir().join("src/generated").join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn regenerating_is_byte_identical() {
    let files = render(&models(), &CodegenConfig::default()).unwrap();
    assert_eq!(files.len(), 7);
    for (name, code) in &files {
        assert!(
            read_generated(name) == *code,
            "{} is out of date; run `cfn-codegen sync`",
            name
        );
    }
}

#[test]
fn catalog_covers_every_schema() {
    let registry: Vec<String> = registry_schemas().into_keys().collect();
    let catalogued: Vec<&str> = catalog().type_names().collect();
    assert_eq!(registry, catalogued);
}

#[test]
fn emitted_schema_matches_model() {
    for model in models() {
        assert_eq!(
            catalog_schema(&model.type_name),
            model.to_resource_schema(),
            "{}",
            model.type_name
        );
    }
}

#[test]
fn required_flags_follow_registry() {
    for (type_name, registry) in registry_schemas() {
        let schema = catalog_schema(&type_name);
        let required: Vec<&str> = registry["required"]
            .as_array()
            .map(|names| names.iter().filter_map(Json::as_str).collect())
            .unwrap_or_default();

        for (name, attribute) in &schema.attributes {
            assert_eq!(
                attribute.required,
                required.contains(&name.as_str()),
                "{}.{}",
                type_name,
                name
            );
        }

        for (key, definition) in &schema.definitions {
            let registry_required: Vec<&str> = registry["definitions"][key]["required"]
                .as_array()
                .map(|names| names.iter().filter_map(Json::as_str).collect())
                .unwrap_or_default();
            for (name, attribute) in &definition.attributes {
                assert_eq!(
                    attribute.required,
                    registry_required.contains(&name.as_str()),
                    "{}.{}.{}",
                    type_name,
                    key,
                    name
                );
            }
        }
    }
}

#[test]
fn read_only_properties_are_not_settable() {
    for (type_name, registry) in registry_schemas() {
        let schema = catalog_schema(&type_name);
        let pointers = registry["readOnlyProperties"].as_array().cloned().unwrap_or_default();
        for pointer in &pointers {
            let name = pointer.as_str().unwrap().trim_start_matches("/properties/");
            assert!(schema.read_only.iter().any(|r| r == name), "{}", name);
            assert!(!schema.attributes.contains_key(name), "{}", name);
        }
    }
}

/// Registry enum list for a property, looking through `$ref` and `items`
fn registry_enum<'a>(registry: &'a Json, property: &'a Json) -> Option<Vec<&'a str>> {
    let property = match property["$ref"].as_str() {
        Some(reference) => &registry["definitions"][reference.trim_start_matches("#/definitions/")],
        None => property,
    };
    if let Some(values) = property["enum"].as_array() {
        return Some(values.iter().filter_map(Json::as_str).collect());
    }
    if property["type"] == "array" {
        return registry_enum(registry, &property["items"]);
    }
    None
}

fn enum_values(attr_type: &AttributeType) -> Option<&[String]> {
    match attr_type {
        AttributeType::Enum { values, .. } => Some(values),
        AttributeType::List(inner) => enum_values(inner),
        _ => None,
    }
}

#[test]
fn allowed_values_follow_registry() {
    let mut checked = 0;
    for (type_name, registry) in registry_schemas() {
        let schema = catalog_schema(&type_name);
        let mut pairs = Vec::new();
        for (name, attribute) in &schema.attributes {
            pairs.push((&registry["properties"][name], attribute));
        }
        for (key, definition) in &schema.definitions {
            for (name, attribute) in &definition.attributes {
                pairs.push((&registry["definitions"][key]["properties"][name], attribute));
            }
        }

        for (property, attribute) in pairs {
            let expected = registry_enum(&registry, property);
            let actual = enum_values(&attribute.attr_type)
                .map(|values| values.iter().map(String::as_str).collect::<Vec<_>>());
            assert_eq!(actual, expected, "{}.{}", type_name, attribute.name);
            checked += usize::from(actual.is_some());
        }
    }
    assert!(checked > 20);
}

#[test]
fn tag_is_identical_across_sagemaker_modules() {
    let tags: Vec<_> = catalog()
        .schemas()
        .into_iter()
        .filter(|schema| schema.type_name.starts_with("AWS::SageMaker::"))
        .map(|schema| schema.definitions["Tag"].clone())
        .collect();
    assert_eq!(tags.len(), 4);
    assert!(tags.windows(2).all(|pair| pair[0] == pair[1]));

    let key = &tags[0].attributes["Key"];
    assert!(key.required);
    assert_eq!(key.constraints.max_length, Some(128));
}

/// Definition name a registry property points at, directly or through `items`
fn registry_definition(property: &Json) -> Option<&str> {
    property["$ref"]
        .as_str()
        .or_else(|| property["items"]["$ref"].as_str())
        .and_then(|r| r.strip_prefix("#/definitions/"))
}

/// `(definition, field)` pairs named by nested create-only pointers
fn nested_create_only(registry: &Json) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for pointer in registry["createOnlyProperties"].as_array().into_iter().flatten() {
        let segments: Vec<&str> = pointer
            .as_str()
            .unwrap()
            .trim_start_matches("/properties/")
            .split('/')
            .filter(|segment| *segment != "*")
            .collect();
        if segments.len() < 2 {
            continue;
        }
        let mut property = &registry["properties"][segments[0]];
        let mut owner = "";
        for segment in &segments[1..] {
            owner = registry_definition(property).unwrap();
            property = &registry["definitions"][owner]["properties"][*segment];
        }
        pairs.push((owner.to_string(), segments[segments.len() - 1].to_string()));
    }
    pairs
}

#[test]
fn nested_create_only_fields_require_replacement() {
    let mut seen = 0;
    for (type_name, registry) in registry_schemas() {
        let schema = catalog_schema(&type_name);
        for (definition, field) in nested_create_only(&registry) {
            let attribute = &schema.definitions[&definition].attributes[&field];
            assert_eq!(
                attribute.update,
                UpdateBehavior::Replacement,
                "{} {}.{}",
                type_name,
                definition,
                field
            );
            seen += 1;
        }
    }
    assert_eq!(seen, 3);

    let domain = catalog_schema("AWS::SageMaker::Domain");
    assert_eq!(
        domain.definitions["RStudioServerProDomainSettings"].attributes["DefaultResourceSpec"].update,
        UpdateBehavior::Replacement
    );
    assert_eq!(
        domain.definitions["RStudioServerProDomainSettings"].attributes["DomainExecutionRoleArn"].update,
        UpdateBehavior::NoInterruption
    );
}

#[test]
fn shared_property_types_agree_between_domain_and_user_profile() {
    let domain = catalog_schema("AWS::SageMaker::Domain");
    let profile = catalog_schema("AWS::SageMaker::UserProfile");

    // Update behaviour follows the owning resource's create-only pointers
    let settings = "RStudioServerProAppSettings";
    for field in ["AccessStatus", "UserGroup"] {
        assert_eq!(
            domain.definitions[settings].attributes[field].update,
            UpdateBehavior::NoInterruption
        );
        assert_eq!(
            profile.definitions[settings].attributes[field].update,
            UpdateBehavior::Replacement
        );
    }

    let shape = |definition: Option<&PropertyTypeSchema>| {
        definition.cloned().map(|mut definition| {
            for attribute in definition.attributes.values_mut() {
                attribute.update = UpdateBehavior::default();
            }
            definition
        })
    };
    for key in profile.definitions.keys() {
        assert_eq!(
            shape(domain.definitions.get(key)),
            shape(profile.definitions.get(key)),
            "{}",
            key
        );
    }
}

#[test]
fn every_skeleton_parses_into_its_declaration() {
    let catalog = catalog();
    for entry in catalog.entries() {
        let skeleton = (entry.schema)().skeleton();
        assert!(
            entry.check_properties(&skeleton).is_ok(),
            "{}: {:?}",
            entry.type_name,
            entry.check_properties(&skeleton)
        );
    }
}
