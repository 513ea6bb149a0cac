//! Integration tests: manifest through the default condition registry.

use apigate_core::{ConditionRegistry, FixedPlatformVersion, Manifest};

const MANIFEST: &str = r#"
{
  "classes": [
    {
      "name": "CameraTest",
      "disabled_on_api": { "max": 23 },
      "methods": [
        { "name": "capture", "disabled_on_api": { "min": 26 } },
        { "name": "preview" },
        { "name": "hdr", "enabled_on_api": { "min": 28 } }
      ]
    },
    {
      "name": "BrokenTest",
      "methods": [{ "name": "nothing", "disabled_on_api": {} }]
    }
  ]
}
"#;

fn report_for(api: u32) -> Vec<(String, Option<bool>)> {
    let manifest = Manifest::from_json_str(MANIFEST).unwrap();
    let elements = manifest.elements();
    ConditionRegistry::with_defaults()
        .evaluate_all(&elements, &FixedPlatformVersion::new(api))
        .into_iter()
        .map(|r| (r.element, r.verdict.map(|v| v.is_disabled())))
        .collect()
}

#[test]
fn test_old_platform_skips_class_declared_range() {
    let report = report_for(22);
    assert_eq!(report[0], ("CameraTest".to_string(), Some(true)));
    // capture overrides the class range with its own
    assert_eq!(report[1], ("CameraTest::capture".to_string(), Some(false)));
    assert_eq!(report[2], ("CameraTest::preview".to_string(), Some(true)));
    assert_eq!(report[3], ("CameraTest::hdr".to_string(), Some(true)));
}

#[test]
fn test_new_platform_runs_everything_but_capture() {
    let report = report_for(30);
    assert_eq!(report[0].1, Some(false));
    assert_eq!(report[1].1, Some(true));
    assert_eq!(report[2].1, Some(false));
    assert_eq!(report[3].1, Some(false));
}

#[test]
fn test_empty_declaration_reported_as_configuration_error() {
    let manifest = Manifest::from_json_str(MANIFEST).unwrap();
    let elements = manifest.elements();
    let reports =
        ConditionRegistry::with_defaults().evaluate_all(&elements, &FixedPlatformVersion::new(24));

    let broken = reports
        .iter()
        .find(|r| r.element == "BrokenTest::nothing")
        .unwrap();
    assert!(broken.configuration_error);
    assert!(broken.verdict.is_none());
    assert!(
        broken
            .error
            .as_deref()
            .unwrap()
            .contains("declared on method BrokenTest::nothing")
    );

    // The enclosing class itself carries no declaration
    let class = reports.iter().find(|r| r.element == "BrokenTest").unwrap();
    assert_eq!(class.verdict.as_ref().map(|v| v.is_disabled()), Some(false));
}
