#[test]
fn registry_from_proto()
{
    use protoenum::schema::{Schema, SchemaValue};
    use protoenum::{Entry, ProtoEnum, Registry};

    let schema = Schema::parse(&[r#"
      syntax = "proto3";
      package status;
      option go_package = "example.com/protos/status;status";

      import "google/protobuf/empty.proto";

      // Status of an operation.
      enum StatusEnum {
          UNKNOWN = 0;
          SUCCESS = 1; // Completed
          FAILURE = 2;
      }

      message Response {
          StatusEnum status = 1;
          map<string, string> labels = 2;
      }

      service Status {
          rpc Get(google.protobuf.Empty) returns (Response) {
              option deprecated = true;
          }
      }
    "#])
    .unwrap();

    assert_eq!(schema.enums().count(), 1);
    let status = schema.get_enum("status.StatusEnum").unwrap();
    assert_eq!(status.name, "StatusEnum");
    assert_eq!(status.get_value("FAILURE").unwrap().number(), 2);
    assert!(status.get_value("PENDING").is_none());

    let registry = status.to_registry(|v| v.name().to_lowercase()).unwrap();
    assert_eq!(registry.list_plains(), vec!["unknown", "success", "failure"]);
    assert_eq!(
        registry.get_by_code(999).unwrap().source(),
        &SchemaValue::new("UNKNOWN", 0)
    );

    // Descriptions come from the caller.
    let described = Registry::new(status.values.iter().map(|v| {
        let desc = match v.name() {
            "SUCCESS" => "Completed",
            "FAILURE" => "Failed",
            _ => "Unknown",
        };
        Entry::with_desc(v.clone(), v.number(), desc)
    }))
    .unwrap();
    assert_eq!(described.get_by_plain(&1).unwrap().desc(), "Completed");
    assert_eq!(described.get_by_desc("Failed").unwrap().name(), "FAILURE");
}

#[test]
fn multiple_files()
{
    use protoenum::schema::Schema;

    let schema = Schema::parse(&[
        "package first; enum Kind { FIRST_A = 0; }",
        "package second; enum Kind { SECOND_A = 0; SECOND_B = 1; }",
        "enum Kind { ANONYMOUS = 0; }",
    ])
    .unwrap();

    let names: Vec<_> = schema.enums().map(|e| e.full_name.clone()).collect();
    assert_eq!(names, vec!["first.Kind", "second.Kind", "Kind"]);
    assert_eq!(schema.get_enum("second.Kind").unwrap().values.len(), 2);
    assert!(schema.get_enum("third.Kind").is_none());
}
