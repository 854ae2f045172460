//! Both compiler directions driven through the batch entry points.

use pretty_assertions::assert_eq;
use weavec::weave_diagnostic::ErrorCode;
use weavec::weave_ir::{
    EmissionStrategy, LogAttribute, LogLevel, MethodDecl, Parameter, Span, TypeRef, TypeTable,
    WellKnownType,
};
use weavec::weave_migrate::{CallArgument, InMemoryStore, LegacyCall, TableModel};
use weavec::weave_rt::{FieldValue, StructuredFieldList};
use weavec::{compile_batch, migrate_batch, CompilerOptions, ContainerInput};

fn logger() -> Parameter {
    Parameter::new("logger", "ILogger")
}

fn legacy(method: &str, arguments: Vec<CallArgument>) -> LegacyCall {
    LegacyCall::new(method, CallArgument::new("_logger", "ILogger"), arguments)
}

#[test]
fn hello_debug_takes_the_fast_path() {
    let decl = MethodDecl::stub(
        "M1",
        LogAttribute::new(5, Some(LogLevel::Debug), "Hello {arg1}"),
        vec![logger(), Parameter::new("arg1", "string")],
    );
    let out = compile_batch(
        &[ContainerInput::new("Log", vec![decl])],
        &TypeTable::with_defaults(),
        &CompilerOptions::default(),
    );

    assert!(out.diagnostics.is_empty());
    let method = &out.containers[0].methods[0];
    assert_eq!(
        method.strategy,
        EmissionStrategy::FixedArityFastPath([TypeRef::new("string")].into_iter().collect())
    );
    assert_eq!(method.descriptor.event_id, 5);
    assert!(method.fields.is_none());
}

#[test]
fn seven_arguments_use_the_field_list() {
    let mut params = vec![logger()];
    params.extend((1..=7).map(|i| Parameter::new(format!("a{i}"), "int")));
    let decl = MethodDecl::stub(
        "M2",
        LogAttribute::new(2, Some(LogLevel::Debug), "M2 {A1} {a2} {A3} {a4} {A5} {a6} {A7}"),
        params,
    );
    let out = compile_batch(
        &[ContainerInput::new("Log", vec![decl])],
        &TypeTable::with_defaults(),
        &CompilerOptions::default(),
    );

    assert!(!out.has_errors());
    let reported: Vec<(ErrorCode, &str)> = out
        .diagnostics
        .iter()
        .map(|d| (d.code, d.message.as_str()))
        .collect();
    assert_eq!(
        reported,
        vec![
            (ErrorCode::W2002, "template references no such argument `A1`"),
            (ErrorCode::W2002, "template references no such argument `A3`"),
            (ErrorCode::W2002, "template references no such argument `A5`"),
            (ErrorCode::W2002, "template references no such argument `A7`"),
        ]
    );
    let method = &out.containers[0].methods[0];
    assert_eq!(method.strategy, EmissionStrategy::GenericFallback);
    let shape = method.fields.as_ref().expect("fallback carries a field list");

    // The runtime list built from that shape has n+1 entries.
    let values: Vec<FieldValue> = (1..=7_i64).map(FieldValue::from).collect();
    let list = StructuredFieldList::from_shape(shape, values).expect("seven values");
    assert_eq!(list.len(), 8);
    assert_eq!(list.get(7).map(|f| f.name.to_string()), Ok("{OriginalFormat}".to_string()));
    assert!(list.get(8).is_err());
    assert_eq!(list.format(), "M2 1 2 3 4 5 6 7");
}

#[test]
fn repeated_legacy_call_shares_one_method() {
    let model = TableModel::new(TypeTable::with_defaults());
    let store = InMemoryStore::new();
    let calls = vec![
        legacy("LogDebug", vec![CallArgument::string("Hello")]).with_span(Span::new(10, 30)),
        legacy("LogDebug", vec![CallArgument::string("Hello")]).with_span(Span::new(80, 100)),
    ];

    let batch = migrate_batch(&calls, &model, &store, &CompilerOptions::default());

    let fixes: Vec<_> = batch.applied().collect();
    assert_eq!(fixes.len(), 2);
    assert_eq!(batch.minted(), 1);
    assert_eq!(fixes[0].rewrite.snippet, "Log.Hello(_logger)");
    assert_eq!(fixes[1].rewrite.snippet, "Log.Hello(_logger)");
    assert_eq!(store.declarations("Log").len(), 1);
}

#[test]
fn malformed_template_still_gets_a_name() {
    let model = TableModel::new(TypeTable::with_defaults());
    let store = InMemoryStore::new();
    let calls = vec![legacy("LogDebug", vec![CallArgument::string("Hello {arg1:0")])];

    let batch = migrate_batch(&calls, &model, &store, &CompilerOptions::default());
    let fix = batch.applied().next().expect("fix");
    assert_eq!(fix.declaration.name, "HelloArg10");

    // Lowering keeps the method and only warns about the template.
    let out = compile_batch(
        &[ContainerInput::new("Log", store.declarations("Log"))],
        model.types(),
        &CompilerOptions::default(),
    );
    assert!(!out.has_errors());
    assert_eq!(out.containers[0].methods.len(), 1);
    assert!(out.diagnostics.iter().any(|d| d.code == ErrorCode::W2007));
}

#[test]
fn migrated_declarations_lower_cleanly() {
    let mut types = TypeTable::with_defaults();
    types.register("IOException", WellKnownType::Exception);
    let model = TableModel::new(types);
    let store = InMemoryStore::new();
    let calls = vec![
        legacy(
            "LogError",
            vec![
                CallArgument::new("ex", "IOException"),
                CallArgument::string("Copy {source} to {target} failed"),
                CallArgument::new("src", "string"),
                CallArgument::new("dst", "string"),
            ],
        ),
        legacy(
            "Log",
            vec![
                CallArgument::new("lvl", "LogLevel"),
                CallArgument::string("Tick {n}"),
                CallArgument::new("i", "int"),
            ],
        ),
        legacy("LogInformation", vec![CallArgument::string("Started")]),
    ];

    let batch = migrate_batch(&calls, &model, &store, &CompilerOptions::default());
    assert_eq!(batch.failures().count(), 0);

    let out = compile_batch(
        &[ContainerInput::new("Log", store.declarations("Log"))],
        model.types(),
        &CompilerOptions::default(),
    );
    assert!(out.diagnostics.is_empty(), "{:#?}", out.diagnostics);

    let lowered: Vec<(&str, bool)> = out.containers[0]
        .methods
        .iter()
        .map(|m| (m.descriptor.target_name.as_str(), m.strategy.is_fast_path()))
        .collect();
    assert_eq!(
        lowered,
        vec![
            ("CopySourceToTargetFailed", true),
            // A level parameter always takes the fallback.
            ("TickN", false),
            ("Started", true),
        ]
    );
    let ids: Vec<i32> = out.containers[0].container.methods().iter().map(|m| m.event_id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
}

#[test]
fn parallel_and_sequential_runs_agree() {
    let inputs: Vec<ContainerInput> = (0..16)
        .map(|c| {
            let decls = (0..5)
                .map(|m| {
                    let mut params = vec![logger()];
                    params.extend((0..m * 2).map(|i| Parameter::new(format!("p{i}"), "int")));
                    let template: Vec<String> = (0..m * 2).map(|i| format!("{{p{i}}}")).collect();
                    let level = (m != 3).then_some(LogLevel::Information);
                    MethodDecl::stub(
                        format!("M{m}"),
                        LogAttribute::new(m % 3, level, format!("C{c} {}", template.join(" "))),
                        params,
                    )
                })
                .collect();
            ContainerInput::new(format!("Log{c}"), decls)
        })
        .collect();
    let oracle = TypeTable::with_defaults();

    let parallel = compile_batch(
        &inputs,
        &oracle,
        &CompilerOptions {
            threads: 4,
            ..CompilerOptions::default()
        },
    );
    let sequential = compile_batch(&inputs, &oracle, &CompilerOptions::sequential());

    assert_eq!(parallel.diagnostics, sequential.diagnostics);
    for (p, s) in parallel.containers.iter().zip(&sequential.containers) {
        assert_eq!(p.container, s.container);
        assert_eq!(p.methods, s.methods);
    }
    // Method 3 has no level; ids 0,1,2,0,1 repeat within each container.
    assert!(parallel.has_errors());
    assert!(parallel.diagnostics.iter().any(|d| d.code == ErrorCode::W2009));
}
