//! Migration scenarios across several call sites.

use pretty_assertions::assert_eq;
use weave_ir::{LogLevel, Span, TypeTable};
use weave_migrate::{
    CallArgument, ContainerStore, InMemoryStore, LegacyCall, MigrateOptions, Migrator, TableModel,
};

fn log_debug(message: &str, span: Span) -> LegacyCall {
    LegacyCall::new(
        "LogDebug",
        CallArgument::new("logger", "ILogger"),
        vec![CallArgument::string(message)],
    )
    .with_span(span)
}

#[test]
fn two_identical_calls_share_one_generated_method() {
    let model = TableModel::new(TypeTable::with_defaults());
    let store = InMemoryStore::new();
    let migrator = Migrator::new(&model, &store, MigrateOptions::default());

    // Same template, two different enclosing methods.
    let in_start = migrator.migrate(&log_debug("Hello", Span::new(100, 125))).expect("first site");
    let in_stop = migrator.migrate(&log_debug("Hello", Span::new(900, 925))).expect("second site");

    assert_eq!(store.declarations("Log").len(), 1);
    assert_eq!(in_start.declaration.name, in_stop.declaration.name);
    assert_eq!(in_start.rewrite.snippet, in_stop.rewrite.snippet);
    assert_eq!(in_start.rewrite.span, Span::new(100, 125));
    assert_eq!(in_stop.rewrite.span, Span::new(900, 925));
}

#[test]
fn rerunning_on_migrated_container_is_idempotent() {
    let model = TableModel::new(TypeTable::with_defaults());
    let store = InMemoryStore::new();
    let migrator = Migrator::new(&model, &store, MigrateOptions::default());
    let call = log_debug("Connected to {host}", Span::DUMMY);
    let call = LegacyCall {
        arguments: vec![
            CallArgument::string("Connected to {host}"),
            CallArgument::new("host", "string"),
        ],
        ..call
    };

    let first = migrator.migrate(&call).expect("first run");
    let generation = store.generation();
    let second = migrator.migrate(&call).expect("second run");

    assert!(second.reused);
    assert_eq!(second.signature, first.signature);
    assert_eq!(store.generation(), generation);
}

#[test]
fn event_ids_grow_monotonically_across_calls() {
    let model = TableModel::new(TypeTable::with_defaults());
    let store = InMemoryStore::new();
    let options = MigrateOptions {
        first_event_id: 500,
        ..MigrateOptions::default()
    };
    let migrator = Migrator::new(&model, &store, options);

    let ids: Vec<i32> = ["One", "Two", "Three"]
        .iter()
        .map(|message| {
            migrator
                .migrate(&log_debug(message, Span::DUMMY))
                .expect("fix")
                .declaration
                .attribute
                .event_id
        })
        .collect();
    assert_eq!(ids, vec![500, 501, 502]);
}

#[test]
fn concurrent_migrations_converge() {
    let model = TableModel::new(TypeTable::with_defaults());
    let store = InMemoryStore::new();
    let options = MigrateOptions {
        retry_budget: 64,
        ..MigrateOptions::default()
    };
    let messages = ["Alpha", "Beta", "Gamma", "Delta", "Alpha", "Beta"];

    let fixes: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = messages
            .iter()
            .map(|message| {
                let migrator = Migrator::new(&model, &store, options.clone());
                scope.spawn(move || migrator.migrate(&log_debug(message, Span::DUMMY)))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("thread").expect("fix"))
            .collect()
    });

    let decls = store.declarations("Log");
    assert_eq!(decls.len(), 4);
    let mut ids: Vec<i32> = decls.iter().map(|d| d.attribute.event_id).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert!(fixes
        .iter()
        .all(|fix| fix.declaration.attribute.level == Some(LogLevel::Debug)));
}
