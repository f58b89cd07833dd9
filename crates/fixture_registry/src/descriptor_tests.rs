use super::*;

#[test]
fn test_new_stores_fields() {
    let descriptor = ModuleDescriptor::new("vcs-github", "GitHub CI/CD & Actions");
    assert_eq!(descriptor.module_id, "vcs-github");
    assert_eq!(descriptor.module_name, "GitHub CI/CD & Actions");
}

#[test]
fn test_serializes_camel_case() {
    let descriptor = ModuleDescriptor::new("vcs-github", "GitHub CI/CD & Actions");
    let json = serde_json::to_value(&descriptor).unwrap();
    assert_eq!(json["moduleId"], "vcs-github");
    assert_eq!(json["moduleName"], "GitHub CI/CD & Actions");
}

#[test]
fn test_deserializes_camel_case() {
    let descriptor: ModuleDescriptor = serde_json::from_str(
        r#"{"moduleId": "vcs-github", "moduleName": "GitHub CI/CD & Actions"}"#,
    )
    .unwrap();
    assert_eq!(descriptor.module_id, "vcs-github");
}
