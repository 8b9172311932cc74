use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use cfn_core::catalog::{Catalog, Diagnostic, ResourceTypeEntry, Severity};
use cfn_core::schema::{AttributeSchema, AttributeType, ResourceSchema};
use cfn_core::template::{Template, TemplateResource};

#[derive(Parser)]
#[command(name = "cfn-types")]
#[command(about = "Typed catalogue of CloudFormation resource types", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every catalogued resource type
    List,
    /// Show the properties of a resource type
    Describe {
        /// Resource type name (e.g., AWS::KMS::Key)
        type_name: String,

        /// Print the schema as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a template declaring one resource with its required properties
    Skeleton {
        /// Resource type name (e.g., AWS::SageMaker::Domain)
        type_name: String,

        /// Logical ID of the resource (defaults to the last part of the type name)
        #[arg(long)]
        logical_id: Option<String>,
    },
    /// Check a JSON template against the catalogue
    Check {
        /// Path to the template
        #[arg(default_value = "template.json")]
        file: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let catalog = cfn_resources::catalog();

    let result = match cli.command {
        Commands::List => run_list(&catalog),
        Commands::Describe { type_name, json } => run_describe(&catalog, &type_name, json),
        Commands::Skeleton {
            type_name,
            logical_id,
        } => run_skeleton(&catalog, &type_name, logical_id.as_deref()),
        Commands::Check { file } => run_check(&catalog, &file),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

/// Find a resource type, ignoring ASCII case when there is no exact match
fn lookup<'a>(catalog: &'a Catalog, type_name: &str) -> Result<&'a ResourceTypeEntry, String> {
    catalog
        .get(type_name)
        .or_else(|| {
            catalog
                .entries()
                .find(|e| e.type_name.eq_ignore_ascii_case(type_name))
        })
        .ok_or_else(|| {
            format!(
                "Unknown resource type '{}'. Run `cfn-types list` to see the catalogue.",
                type_name
            )
        })
}

fn run_list(catalog: &Catalog) -> Result<(), String> {
    for schema in catalog.schemas() {
        match &schema.description {
            Some(description) => println!("{}  {}", schema.type_name.cyan(), description.dimmed()),
            None => println!("{}", schema.type_name.cyan()),
        }
    }
    println!();
    println!("{}", format!("{} resource types.", catalog.len()).bold());
    Ok(())
}

fn run_describe(catalog: &Catalog, type_name: &str, json: bool) -> Result<(), String> {
    let schema = (lookup(catalog, type_name)?.schema)();
    if json {
        let out = serde_json::to_string_pretty(&schema)
            .map_err(|e| format!("Failed to serialize schema: {}", e))?;
        println!("{}", out);
    } else {
        print!("{}", describe(&schema));
    }
    Ok(())
}

/// Text description of a schema: properties first, then property types
fn describe(schema: &ResourceSchema) -> String {
    let mut out = format!("{}\n", schema.type_name.bold());
    if let Some(description) = &schema.description {
        out.push_str(&format!("  {}\n", description));
    }
    out.push('\n');

    if !schema.primary_identifier.is_empty() {
        out.push_str(&format!(
            "Primary identifier: {}\n",
            schema.primary_identifier.join(", ")
        ));
    }
    out.push_str(&format!(
        "Taggable: {}\n",
        if schema.taggable { "yes" } else { "no" }
    ));
    if !schema.read_only.is_empty() {
        out.push_str(&format!("Return values: {}\n", schema.read_only.join(", ")));
    }

    out.push_str(&format!("\n{}\n", "Properties:".cyan()));
    for attribute in schema.attributes.values() {
        describe_attribute(&mut out, attribute, true);
    }

    for definition in schema.definitions.values() {
        out.push_str(&format!("\n{}\n", format!("{}:", definition.name).cyan()));
        for attribute in definition.attributes.values() {
            describe_attribute(&mut out, attribute, false);
        }
    }
    out
}

fn describe_attribute(out: &mut String, attribute: &AttributeSchema, top_level: bool) {
    let mut flags = Vec::new();
    if attribute.required {
        flags.push("required".to_string());
    }
    if top_level {
        flags.push(format!("update: {}", attribute.update));
    }
    if flags.is_empty() {
        out.push_str(&format!("  {}: {}\n", attribute.name, attribute.attr_type));
    } else {
        out.push_str(&format!(
            "  {}: {} ({})\n",
            attribute.name,
            attribute.attr_type,
            flags.join(", ")
        ));
    }

    if let Some(values) = allowed_values(&attribute.attr_type) {
        out.push_str(&format!("      one of: {}\n", values.join(" | ")));
    }
    let constraints = attribute.constraints.describe();
    if !constraints.is_empty() {
        out.push_str(&format!("      {}\n", constraints.join(", ")));
    }
}

fn allowed_values(attr_type: &AttributeType) -> Option<&[String]> {
    match attr_type {
        AttributeType::Enum { values, .. } => Some(values),
        AttributeType::List(inner) => allowed_values(inner),
        _ => None,
    }
}

fn run_skeleton(
    catalog: &Catalog,
    type_name: &str,
    logical_id: Option<&str>,
) -> Result<(), String> {
    let entry = lookup(catalog, type_name)?;
    println!("{}", skeleton_template(entry, logical_id)?);
    Ok(())
}

fn skeleton_template(entry: &ResourceTypeEntry, logical_id: Option<&str>) -> Result<String, String> {
    let logical_id = logical_id
        .or_else(|| entry.type_name.rsplit("::").next())
        .unwrap_or("Resource");

    let mut template = Template::new();
    template
        .insert_resource(
            logical_id,
            TemplateResource {
                type_name: entry.type_name.to_string(),
                properties: Some((entry.schema)().skeleton()),
                attributes: Default::default(),
            },
        )
        .map_err(|e| e.to_string())?;
    template
        .to_json_pretty()
        .map_err(|e| format!("Failed to serialize template: {}", e))
}

fn check_file(catalog: &Catalog, file: &Path) -> Result<(usize, Vec<Diagnostic>), String> {
    let content = fs::read_to_string(file)
        .map_err(|e| format!("Failed to read {}: {}", file.display(), e))?;
    let template = Template::from_json(&content)
        .map_err(|e| format!("Failed to parse {}: {}", file.display(), e))?;
    log::info!("Checking {} resources", template.resources.len());
    Ok((template.resources.len(), catalog.check_template(&template)))
}

fn run_check(catalog: &Catalog, file: &Path) -> Result<(), String> {
    println!("{}", "Checking...".cyan());
    let (resources, diagnostics) = check_file(catalog, file)?;

    for diagnostic in &diagnostics {
        let severity = match diagnostic.severity {
            Severity::Error => "error".red().bold(),
            Severity::Warning => "warning".yellow().bold(),
        };
        println!("{}: {}: {}", severity, diagnostic.logical_id.bold(), diagnostic.message);
    }

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    if errors > 0 {
        return Err(format!("{} error(s) found in {}", errors, file.display()));
    }

    println!(
        "{}",
        format!("✓ {} resources checked successfully.", resources)
            .green()
            .bold()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_color() {
        colored::control::set_override(false);
    }

    #[test]
    fn lookup_ignores_case_as_a_fallback() {
        let catalog = cfn_resources::catalog();
        assert_eq!(lookup(&catalog, "AWS::KMS::Key").unwrap().type_name, "AWS::KMS::Key");
        assert_eq!(
            lookup(&catalog, "aws::sagemaker::domain").unwrap().type_name,
            "AWS::SageMaker::Domain"
        );
        let err = lookup(&catalog, "AWS::S3::Bucket").unwrap_err();
        assert!(err.contains("Unknown resource type 'AWS::S3::Bucket'"));
    }

    #[test]
    fn describe_lists_properties_and_property_types() {
        no_color();
        let catalog = cfn_resources::catalog();
        let schema = (lookup(&catalog, "AWS::SageMaker::Domain").unwrap().schema)();
        let text = describe(&schema);

        assert!(text.starts_with("AWS::SageMaker::Domain\n"));
        assert!(text.contains("Primary identifier: DomainId\n"));
        assert!(text.contains("Taggable: yes\n"));
        assert!(text.contains("Return values: DomainArn, Url,"));
        assert!(text.contains("  AuthMode: AuthMode (required, update: Replacement)\n      one of: SSO | IAM\n"));
        assert!(text.contains("  SubnetIds: List<String> (required, update: No interruption)\n"));
        assert!(text.contains("\nUserSettings:\n"));
        assert!(text.contains("  ExecutionRole: String (required)\n      min length 20, max length 2048,"));
    }

    #[test]
    fn skeletons_check_clean() {
        let catalog = cfn_resources::catalog();
        for entry in catalog.entries() {
            let json = skeleton_template(entry, None).unwrap();
            let template = Template::from_json(&json).unwrap();
            assert_eq!(template.resources.len(), 1);
            assert!(catalog.check_template(&template).is_empty(), "{}", entry.type_name);
        }
    }

    #[test]
    fn skeleton_logical_id() {
        let catalog = cfn_resources::catalog();
        let entry = lookup(&catalog, "AWS::SageMaker::UserProfile").unwrap();

        let default = Template::from_json(&skeleton_template(entry, None).unwrap()).unwrap();
        assert!(default.resources.contains_key("UserProfile"));

        let named = Template::from_json(&skeleton_template(entry, Some("Profile")).unwrap()).unwrap();
        assert!(named.resources.contains_key("Profile"));

        assert!(skeleton_template(entry, Some("user-profile")).is_err());
    }

    #[test]
    fn check_reports_errors() {
        no_color();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("template.json");
        fs::write(
            &file,
            r#"{
                "Resources": {
                    "Key": {"Type": "AWS::KMS::Key", "Properties": {"KeyUsage": "ENCRYPT"}},
                    "Alias": {
                        "Type": "AWS::KMS::Alias",
                        "Properties": {"AliasName": "alias/app", "TargetKeyId": {"Ref": "Key"}}
                    }
                }
            }"#,
        )
        .unwrap();

        let catalog = cfn_resources::catalog();
        let (resources, diagnostics) = check_file(&catalog, &file).unwrap();
        assert_eq!(resources, 2);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].logical_id, "Key");
        assert!(diagnostics[0].message.starts_with("Properties.KeyUsage: invalid value 'ENCRYPT'"));

        let err = run_check(&catalog, &file).unwrap_err();
        assert_eq!(err, format!("1 error(s) found in {}", file.display()));
    }

    #[test]
    fn check_passes_with_warnings_only() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("template.json");
        fs::write(&file, r#"{"Resources": {"Queue": {"Type": "AWS::SQS::Queue"}}}"#).unwrap();

        let catalog = cfn_resources::catalog();
        let (_, diagnostics) = check_file(&catalog, &file).unwrap();
        assert_eq!(diagnostics[0].severity, Severity::Warning);
        assert!(run_check(&catalog, &file).is_ok());
    }

    #[test]
    fn unreadable_templates_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = cfn_resources::catalog();
        let missing = dir.path().join("missing.json");
        assert!(check_file(&catalog, &missing).unwrap_err().starts_with("Failed to read"));

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, "{").unwrap();
        assert!(check_file(&catalog, &invalid).unwrap_err().starts_with("Failed to parse"));
    }
}
