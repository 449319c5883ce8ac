use anyhow::Result;
use pyreadme::{
    extract, prepare_payload, prepare_payload_with, ChatMessage, DeclarationKind,
    GeneratorOptions, PayloadMode, ReadmeGenerator, TextGenerator, PLACEHOLDER_DESCRIPTION,
};
use std::cell::RefCell;
use std::fs;

/// A module with one class holding one method, one free function, and enough
/// padding to cross the summary threshold.
fn large_module() -> String {
    let mut source = String::from(
        "\"\"\"Inventory helpers.\"\"\"\n\
         import json\n\
         \n\
         class Inventory:\n\
         \x20   \"\"\"Tracks stock levels.\"\"\"\n\
         \n\
         \x20   # Add units of an item.\n\
         \x20   def add(self, item, count=1):\n\
         \x20       self.items[item] = self.items.get(item, 0) + count\n\
         \n\
         \n\
         # Serialize an inventory.\n\
         # Output is JSON.\n\
         def dump(inventory, indent=2):\n\
         \x20   return json.dumps(inventory.items, indent=indent)\n\
         \n",
    );
    for i in 0..200 {
        source.push_str(&format!("CONSTANT_{i:03} = {i}  # padding line\n"));
    }
    assert!(source.chars().count() > 4000);
    source
}

#[test]
fn test_large_module_yields_three_records() {
    let records = extract(&large_module()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].kind, DeclarationKind::Class);
    assert_eq!(records[0].name, "Inventory");
    assert_eq!(records[0].description, "Tracks stock levels.");
    assert_eq!(records[1].signature.as_deref(), Some("def add(self, item, count):"));
    assert_eq!(records[1].description, "Add units of an item.");
    assert_eq!(records[2].signature.as_deref(), Some("def dump(inventory, indent):"));
    assert_eq!(records[2].description, "Serialize an inventory.\nOutput is JSON.");
}

#[test]
fn test_large_module_payload_is_summary() {
    let payload = prepare_payload(&large_module()).unwrap();
    assert_eq!(
        payload,
        "class Inventory:\n    Tracks stock levels.\n\n\
         def add(self, item, count):\nAdd units of an item.\n\n\
         def dump(inventory, indent):\nSerialize an inventory.\nOutput is JSON.\n\n"
    );
}

#[test]
fn test_short_file_without_classes_is_sent_raw() {
    let source = "# Say hi.\ndef hello(name):\n    print('hi', name)\n";
    let payload = prepare_payload_with(source, &GeneratorOptions::default()).unwrap();
    assert_eq!(payload.mode, PayloadMode::Raw);
    assert_eq!(payload.text.as_bytes(), source.as_bytes());
}

#[test]
fn test_exactly_threshold_is_raw() {
    let source = "#".repeat(4000);
    assert_eq!(prepare_payload(&source).unwrap(), source);
}

#[test]
fn test_undocumented_function_gets_placeholder() {
    let records = extract("# header\n\ndef bare(x):\n    return x\n").unwrap();
    assert_eq!(records[0].description, PLACEHOLDER_DESCRIPTION);
}

struct EchoModel {
    calls: RefCell<usize>,
}

impl TextGenerator for EchoModel {
    fn generate(&self, messages: &[ChatMessage]) -> Result<String> {
        *self.calls.borrow_mut() += 1;
        let payload = &messages.last().unwrap().content;
        Ok(format!("# Project\n\n```\n{payload}```\n"))
    }
}

#[test]
fn test_project_readme_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("pkg")).unwrap();
    fs::write(dir.path().join("pkg/inventory.py"), large_module()).unwrap();
    fs::write(dir.path().join("main.py"), "def main():\n    pass\n").unwrap();

    let model = EchoModel {
        calls: RefCell::new(0),
    };
    let readme = ReadmeGenerator::new(&model, GeneratorOptions::default())
        .generate_for_path(dir.path())
        .unwrap();

    assert_eq!(*model.calls.borrow(), 1);
    let written = fs::read_to_string(readme).unwrap();
    assert!(written.starts_with("# Project"));
    assert!(written.contains("def main():\nNo docstring provided."));
    assert!(written.contains("class Inventory:\n    Tracks stock levels."));
}
