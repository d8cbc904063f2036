use super::*;
use serde_json::json;

fn explicit_record() -> serde_json::Value {
    json!({
        "id": "toolbox",
        "name": "Toolbox",
        "url": "http://localhost:8000/asd/toolbox",
        "type": "api",
        "maxInstances": 2,
        "config": {"minColumns": 1, "maxColumns": 4, "minRows": 1, "maxRows": 4}
    })
}

#[test]
fn decodes_explicit_bounds() {
    let service: Service = serde_json::from_value(explicit_record()).unwrap();
    assert_eq!(service.service_type, ServiceType::Api);
    assert_eq!(service.template(), None);
    let bounds = service.bounds().expect("explicit bounds");
    assert_eq!(bounds.columns(), 1..=4);
    assert_eq!(bounds.rows(), 1..=4);
}

#[test]
fn decodes_template_with_empty_config() {
    let service: Service = serde_json::from_value(json!({
        "id": "templated",
        "name": "Templated",
        "url": "http://localhost:8000/asd/templated",
        "type": "web",
        "maxInstances": 1,
        "template": "twoByTwo",
        "config": {}
    }))
    .unwrap();
    assert_eq!(service.sizing, Sizing::Template("twoByTwo".to_string()));
    assert!(service.bounds().is_none());
}

#[test]
fn template_wins_over_stray_bounds() {
    let service: Service = serde_json::from_value(json!({
        "id": "templated",
        "name": "Templated",
        "url": "http://localhost:8000/asd/templated",
        "type": "web",
        "maxInstances": 1,
        "template": "twoByTwo",
        "config": {"minColumns": 9, "maxColumns": 1}
    }))
    .unwrap();
    assert_eq!(service.template(), Some("twoByTwo"));

    let encoded = serde_json::to_value(&service).unwrap();
    assert_eq!(encoded["config"], json!({}));
}

#[test]
fn rejects_missing_bound_without_template() {
    let mut record = explicit_record();
    record["config"].as_object_mut().unwrap().remove("maxRows");
    let err = serde_json::from_value::<Service>(record).unwrap_err();
    assert!(err.to_string().contains("maxRows"), "got {err}");
}

#[test]
fn rejects_inverted_columns() {
    let mut record = explicit_record();
    record["config"]["minColumns"] = json!(5);
    let err = serde_json::from_value::<Service>(record).unwrap_err();
    assert!(err.to_string().contains("columns"), "got {err}");
}

#[test]
fn rejects_unknown_service_type() {
    let mut record = explicit_record();
    record["type"] = json!("grpc");
    assert!(serde_json::from_value::<Service>(record).is_err());
}

#[test]
fn rejects_negative_max_instances() {
    let mut record = explicit_record();
    record["maxInstances"] = json!(-1);
    assert!(serde_json::from_value::<Service>(record).is_err());
}

#[test]
fn rejects_empty_template_name() {
    let record = ServiceRecord {
        id: "blank".to_string(),
        name: "Blank".to_string(),
        url: "http://localhost:8000/asd/blank".to_string(),
        service_type: ServiceType::Web,
        max_instances: 1,
        template: Some("  ".to_string()),
        config: BoundsRecord::default(),
    };
    assert_eq!(
        Service::try_from(record).unwrap_err(),
        ServiceError::EmptyTemplate
    );
}

#[test]
fn rejects_empty_name() {
    let mut record = explicit_record();
    record["name"] = json!(" ");
    let err = serde_json::from_value::<Service>(record).unwrap_err();
    assert!(err.to_string().contains("name cannot be empty"), "got {err}");
}

#[test]
fn bounds_record_emptiness() {
    assert!(BoundsRecord::default().is_empty());
    let partial = BoundsRecord {
        max_rows: Some(2),
        ..BoundsRecord::default()
    };
    assert!(!partial.is_empty());
    assert!(!BoundsRecord::from(GridBounds::new(1, 2, 1, 2)).is_empty());
}

#[test]
fn zero_instances_means_disabled() {
    let mut record = explicit_record();
    record["maxInstances"] = json!(0);
    let service: Service = serde_json::from_value(record).unwrap();
    assert!(!service.is_enabled());
}

#[test]
fn encodes_wire_shape() {
    let service: Service = serde_json::from_value(explicit_record()).unwrap();
    let encoded = serde_json::to_value(&service).unwrap();
    assert_eq!(encoded, explicit_record());
    assert!(encoded.get("template").is_none());
}

#[test]
fn grid_bounds_contains_is_inclusive() {
    let bounds = GridBounds::new(2, 6, 2, 6);
    assert!(bounds.contains(2, 2));
    assert!(bounds.contains(6, 6));
    assert!(!bounds.contains(1, 4));
    assert!(!bounds.contains(4, 7));
}

#[test]
fn grid_bounds_try_new_reports_axis() {
    let err = GridBounds::try_new(1, 2, 4, 3).unwrap_err();
    assert_eq!(
        err,
        ServiceError::InvertedBounds {
            axis: "rows".to_string(),
            min: 4,
            max: 3
        }
    );
}

#[test]
#[should_panic(expected = "minColumns exceeds maxColumns")]
fn grid_bounds_new_panics_on_inverted_literal() {
    let (min, max) = (3, 1);
    let _ = GridBounds::new(min, max, 1, 1);
}
