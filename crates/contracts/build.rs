//! Build script for generating entity schema statics from metadata.json
//!
//! This script scans the domain directory for metadata.json files and generates
//! corresponding `{entity}_metadata.rs` files in OUT_DIR with static Rust constants.
//! Each domain module pulls its file in with `include!`.

use serde::Deserialize;
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=src/domain");

    let domain_dir = Path::new("src/domain");
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is not set"));

    if !domain_dir.exists() {
        println!("cargo:warning=Domain directory not found, skipping metadata generation");
        return;
    }

    for entry in fs::read_dir(domain_dir).expect("Failed to read domain directory") {
        let path = entry.expect("Failed to read entry").path();
        if !path.is_dir() {
            continue;
        }

        let dir_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .expect("Domain directory name is not valid UTF-8")
            .to_string();
        if dir_name == "common" {
            continue;
        }

        let metadata_json = path.join("metadata.json");
        if metadata_json.exists() {
            println!("cargo:rerun-if-changed={}", metadata_json.display());

            let output_rs = out_dir.join(format!("{}_metadata.rs", dir_name));
            if let Err(e) = generate_metadata(&metadata_json, &output_rs) {
                panic!("Failed to generate metadata for {}: {}", dir_name, e);
            }
        }
    }
}

// ============================================================================
// JSON Schema Types (owned Strings for serde deserialization)
// ============================================================================

#[derive(Debug, Deserialize)]
struct MetadataJson {
    schema_version: String,
    entity_name: String,
    entity_index: String,
    collection_name: String,
    id_prefix: String,
    search_field: String,
    ui: UiMetadataJson,
    fields: Vec<FieldJson>,
}

#[derive(Debug, Deserialize)]
struct UiMetadataJson {
    element_name: String,
    list_name: String,
    icon: Option<String>,
    group: String,
}

#[derive(Debug, Deserialize)]
struct FieldJson {
    name: String,
    field_type: String,
    ui: FieldUiJson,
    #[serde(default)]
    validation: ValidationJson,
    #[serde(default)]
    searchable: bool,
    #[serde(default)]
    filterable: bool,
    enum_values: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Default)]
struct FieldUiJson {
    #[serde(default)]
    label: String,
    placeholder: Option<String>,
    hint: Option<String>,
    #[serde(default = "default_true")]
    visible_in_list: bool,
    #[serde(default = "default_true")]
    visible_in_form: bool,
    widget: Option<String>,
    column_width: Option<u32>,
}

#[derive(Debug, Deserialize, Default)]
struct ValidationJson {
    #[serde(default)]
    required: bool,
    min: Option<f64>,
    max: Option<f64>,
    max_length: Option<usize>,
}

fn default_true() -> bool {
    true
}

const FIELD_TYPES: &[&str] = &["string", "number", "enum", "date", "boolean"];

// ============================================================================
// Code Generation
// ============================================================================

fn generate_metadata(
    json_path: &Path,
    output_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_content = fs::read_to_string(json_path)?;
    let metadata: MetadataJson = serde_json::from_str(&json_content)?;

    let mut seen = HashSet::new();
    for field in &metadata.fields {
        if !FIELD_TYPES.contains(&field.field_type.as_str()) {
            return Err(format!(
                "field '{}' has unknown field_type '{}'",
                field.name, field.field_type
            )
            .into());
        }
        if !seen.insert(field.name.as_str()) {
            return Err(format!("field '{}' is declared twice", field.name).into());
        }
    }

    let code = generate_rust_code(&metadata);
    fs::write(output_path, code)?;

    Ok(())
}

fn generate_rust_code(meta: &MetadataJson) -> String {
    let mut code = String::new();

    code.push_str(
        "// ============================================================================\n\
         // AUTO-GENERATED FROM metadata.json - DO NOT EDIT MANUALLY\n\
         // ============================================================================\n\n",
    );

    code.push_str(
        "use crate::shared::metadata::{\n\
         \x20   EntityMetadataInfo, EntitySchema, EntityUiMetadata, FieldMetadata, FieldType,\n\
         \x20   FieldUiMetadata, ValidationRules,\n\
         };\n\n",
    );

    code.push_str(&generate_entity_metadata(meta));
    code.push_str("\n\n");

    code.push_str(&generate_fields_array(&meta.fields));
    code.push('\n');

    code.push_str(
        "/// Schema combining entity and field metadata\n\
         pub static SCHEMA: EntitySchema = EntitySchema::new(&ENTITY_METADATA, FIELDS);\n",
    );

    code
}

fn generate_entity_metadata(meta: &MetadataJson) -> String {
    format!(
        "/// Entity metadata for {}\n\
         pub static ENTITY_METADATA: EntityMetadataInfo = EntityMetadataInfo {{\n\
         \x20   schema_version: \"{}\",\n\
         \x20   entity_name: \"{}\",\n\
         \x20   entity_index: \"{}\",\n\
         \x20   collection_name: \"{}\",\n\
         \x20   id_prefix: \"{}\",\n\
         \x20   search_field: \"{}\",\n\
         \x20   ui: EntityUiMetadata {{\n\
         \x20       element_name: \"{}\",\n\
         \x20       list_name: \"{}\",\n\
         \x20       icon: {},\n\
         \x20       group: \"{}\",\n\
         \x20   }},\n\
         }};",
        meta.entity_name,
        escape_string(&meta.schema_version),
        escape_string(&meta.entity_name),
        escape_string(&meta.entity_index),
        escape_string(&meta.collection_name),
        escape_string(&meta.id_prefix),
        escape_string(&meta.search_field),
        escape_string(&meta.ui.element_name),
        escape_string(&meta.ui.list_name),
        option_str(&meta.ui.icon),
        escape_string(&meta.ui.group),
    )
}

fn generate_fields_array(fields: &[FieldJson]) -> String {
    let mut code = String::from("/// Field metadata array\npub const FIELDS: &[FieldMetadata] = &[\n");

    for field in fields {
        code.push_str(&generate_field_metadata(field, 1));
        code.push_str(",\n");
    }

    code.push_str("];\n");
    code
}

fn generate_field_metadata(field: &FieldJson, indent: usize) -> String {
    let i = "    ".repeat(indent);
    format!(
        "{i}FieldMetadata {{\n\
         {i}    name: \"{}\",\n\
         {i}    field_type: FieldType::{},\n\
         {i}    ui: FieldUiMetadata {{\n\
         {i}        label: \"{}\",\n\
         {i}        placeholder: {},\n\
         {i}        hint: {},\n\
         {i}        visible_in_list: {},\n\
         {i}        visible_in_form: {},\n\
         {i}        widget: {},\n\
         {i}        column_width: {},\n\
         {i}    }},\n\
         {i}    validation: ValidationRules {{\n\
         {i}        required: {},\n\
         {i}        min: {},\n\
         {i}        max: {},\n\
         {i}        max_length: {},\n\
         {i}    }},\n\
         {i}    searchable: {},\n\
         {i}    filterable: {},\n\
         {i}    enum_values: {},\n\
         {i}}}",
        escape_string(&field.name),
        to_pascal_case(&field.field_type),
        escape_string(&field.ui.label),
        option_str(&field.ui.placeholder),
        option_str(&field.ui.hint),
        field.ui.visible_in_list,
        field.ui.visible_in_form,
        option_str(&field.ui.widget),
        option_u32(field.ui.column_width),
        field.validation.required,
        option_f64(field.validation.min),
        option_f64(field.validation.max),
        option_usize(field.validation.max_length),
        field.searchable,
        field.filterable,
        option_str_array(&field.enum_values),
        i = i
    )
}

// ============================================================================
// Helper functions
// ============================================================================

fn to_pascal_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

fn option_str(opt: &Option<String>) -> String {
    match opt {
        Some(s) => format!("Some(\"{}\")", escape_string(s)),
        None => "None".to_string(),
    }
}

fn option_u32(opt: Option<u32>) -> String {
    match opt {
        Some(v) => format!("Some({})", v),
        None => "None".to_string(),
    }
}

fn option_f64(opt: Option<f64>) -> String {
    match opt {
        Some(v) => format!("Some({:?})", v),
        None => "None".to_string(),
    }
}

fn option_usize(opt: Option<usize>) -> String {
    match opt {
        Some(v) => format!("Some({})", v),
        None => "None".to_string(),
    }
}

fn option_str_array(opt: &Option<Vec<String>>) -> String {
    match opt {
        Some(arr) => format!("Some(&[{}])", string_array(arr)),
        None => "None".to_string(),
    }
}

fn string_array(arr: &[String]) -> String {
    arr.iter()
        .map(|s| format!("\"{}\"", escape_string(s)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
