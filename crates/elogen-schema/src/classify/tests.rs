use super::*;

fn column(name: &str, type_str: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        type_str: type_str.to_string(),
        primary_key: false,
        auto_increment: false,
        comment: String::new(),
    }
}

fn pk_column(name: &str, type_str: &str, auto_increment: bool) -> ColumnDescriptor {
    ColumnDescriptor {
        primary_key: true,
        auto_increment,
        ..column(name, type_str)
    }
}

fn commented(name: &str, type_str: &str, comment: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        comment: comment.to_string(),
        ..column(name, type_str)
    }
}

fn posts_columns() -> Vec<ColumnDescriptor> {
    vec![
        pk_column("id", "int(10) unsigned", true),
        column("title", "varchar(255)"),
        column("status", "enum('draft','published')"),
        column("created_at", "timestamp"),
        column("updated_at", "timestamp"),
        commented("secret_token", "varchar(64)", "secret api token"),
        column("user_id", "int(10) unsigned"),
    ]
}

fn posts_partition() -> ForeignKeyPartition {
    let catalog = vec![ForeignKeyEdge {
        source_table: "posts".to_string(),
        source_column: "user_id".to_string(),
        target_table: "users".to_string(),
        target_column: "id".to_string(),
    }];

    ForeignKeyPartition::split(&catalog, "posts")
}

#[test]
fn posts_scenario_classifies_as_expected() {
    let model = classify(
        "posts",
        &posts_columns(),
        "Model",
        posts_partition(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.table_name, "posts");
    assert_eq!(model.class_name, "Posts");
    assert_eq!(model.primary_key, "id");
    assert!(model.incrementing);
    assert!(model.timestamps);
    assert_eq!(
        model.enums,
        vec![(
            "status".to_string(),
            vec!["draft".to_string(), "published".to_string()]
        )]
    );
    assert_eq!(model.hidden, vec!["secret_token"]);
    assert_eq!(model.fillable, vec!["title", "status"]);
    assert!(model.casts.is_empty());
    assert!(model.dates.is_empty());
}

#[test]
fn primary_key_short_circuits_all_other_rules() {
    // A primary key whose type and comment would otherwise match every rule.
    let columns = vec![ColumnDescriptor {
        comment: "hidden".to_string(),
        ..pk_column("code", "enum('a','b')", false)
    }];

    let model = classify(
        "items",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.primary_key, "code");
    assert!(!model.incrementing);
    assert!(model.enums.is_empty());
    assert!(model.hidden.is_empty());
    assert!(model.fillable.is_empty());
}

#[test]
fn timestamp_columns_are_excluded_from_dates_and_fillable() {
    let columns = vec![
        column("created_at", "datetime"),
        column("deleted_at", "datetime"),
        column("published_on", "date"),
    ];

    let model = classify(
        "posts",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert!(model.timestamps);
    assert_eq!(model.dates, vec!["published_on"]);
    assert_eq!(model.fillable, vec!["published_on"]);
}

#[test]
fn custom_base_class_timestamp_names_are_honored() {
    let mut lookup = TimestampLookup::default();
    lookup.insert(
        "LegacyModel",
        TimestampFields {
            created_at: "creation_date".to_string(),
            updated_at: "change_date".to_string(),
            deleted_at: "removal_date".to_string(),
        },
    );

    let columns = vec![
        column("creation_date", "datetime"),
        column("created_at", "datetime"),
    ];

    let model = classify(
        "orders",
        &columns,
        "LegacyModel",
        ForeignKeyPartition::default(),
        &lookup,
    )
    .unwrap();

    // `created_at` is an ordinary date column under LegacyModel's names.
    assert!(model.timestamps);
    assert_eq!(model.dates, vec!["created_at"]);
    assert_eq!(model.fillable, vec!["created_at"]);
}

#[test]
fn overlays_stack_on_a_hidden_column() {
    let columns = vec![commented("payload", "json", "hidden internals")];

    let model = classify(
        "events",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.hidden, vec!["payload"]);
    assert_eq!(model.casts, vec![("payload".to_string(), "json".to_string())]);
    assert!(model.fillable.is_empty());
}

#[test]
fn overlays_stack_on_a_fillable_column() {
    let columns = vec![column("scheduled_at", "datetime")];

    let model = classify(
        "jobs",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.dates, vec!["scheduled_at"]);
    assert_eq!(model.fillable, vec!["scheduled_at"]);
}

#[test]
fn foreign_key_source_column_is_excluded_everywhere() {
    let model = classify(
        "posts",
        &posts_columns(),
        "Model",
        posts_partition(),
        &TimestampLookup::default(),
    )
    .unwrap();

    for list in [&model.fillable, &model.hidden, &model.dates] {
        assert!(!list.contains(&"user_id".to_string()));
    }
    assert!(model.casts.iter().all(|(name, _)| name != "user_id"));
}

#[test]
fn foreign_key_overlays_still_apply() {
    // An FK source column with a date type keeps its date overlay even
    // though it is excluded from fillable.
    let catalog = vec![ForeignKeyEdge {
        source_table: "logs".to_string(),
        source_column: "day_id".to_string(),
        target_table: "days".to_string(),
        target_column: "id".to_string(),
    }];
    let columns = vec![column("day_id", "date")];

    let model = classify(
        "logs",
        &columns,
        "Model",
        ForeignKeyPartition::split(&catalog, "logs"),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.dates, vec!["day_id"]);
    assert!(model.fillable.is_empty());
}

#[test]
fn fillable_preserves_column_order() {
    let columns = vec![
        column("zebra", "varchar(10)"),
        column("apple", "varchar(10)"),
        column("mango", "varchar(10)"),
    ];

    let model = classify(
        "fruit",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.fillable, vec!["zebra", "apple", "mango"]);
}

#[test]
fn enum_literals_are_trimmed_and_ordered() {
    let columns = vec![column("state", "enum('new', 'in progress' ,'done')")];

    let model = classify(
        "tickets",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(
        model.enums,
        vec![(
            "state".to_string(),
            vec![
                "new".to_string(),
                "in progress".to_string(),
                "done".to_string()
            ]
        )]
    );
}

#[test]
fn malformed_enum_missing_paren_is_an_error() {
    let columns = vec![column("state", "enum('a','b'")];

    let err = classify(
        "tickets",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ClassifyError::MalformedEnum {
            column: "state".to_string(),
            type_str: "enum('a','b'".to_string(),
        }
    );
}

#[test]
fn malformed_enum_empty_body_is_an_error() {
    let columns = vec![column("state", "enum()")];

    let err = classify(
        "tickets",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap_err();

    assert!(matches!(err, ClassifyError::MalformedEnum { .. }));
}

#[test]
fn no_primary_key_leaves_conventional_default() {
    let columns = vec![column("title", "varchar(255)")];

    let model = classify(
        "notes",
        &columns,
        "Model",
        ForeignKeyPartition::default(),
        &TimestampLookup::default(),
    )
    .unwrap();

    assert_eq!(model.primary_key, "id");
    assert!(!model.incrementing);
}
