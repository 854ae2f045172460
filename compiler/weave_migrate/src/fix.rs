//! Turning one legacy call into a generated method and a call rewrite.
//!
//! All type information is gathered before the container store is touched,
//! so a missing type aborts with nothing changed. The store interaction is
//! an optimistic loop: read a snapshot, resolve against it, append only if
//! the store has not moved on, otherwise read again.

use weave_diagnostic::Substitution;
use weave_ir::{LogAttribute, MethodDecl, MethodSignature, Parameter, TypeRef, WellKnownType};
use weave_template::MessageTemplate;

use crate::ident::{derive_identifier, parameter_names, EXCEPTION_PARAM, LEVEL_PARAM, LOGGER_PARAM};
use crate::{
    analyze, resolve, Candidate, ContainerStore, LegacyAnalysis, LegacyCall, LevelArg,
    MigrateOptions, MigrationError, Resolution, SemanticModel, Snapshot, StoreError,
};

/// A complete migration of one call site.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MigrationFix {
    pub container: String,
    /// The method the rewrite calls, ready for the generator direction:
    /// freshly generated, or the stored declaration when reused.
    pub declaration: MethodDecl,
    pub signature: MethodSignature,
    /// The declaration already existed; nothing was appended.
    pub reused: bool,
    /// Replacement for the legacy invocation expression.
    pub rewrite: Substitution,
}

/// Migrates legacy calls into one container of a store.
pub struct Migrator<'a> {
    model: &'a dyn SemanticModel,
    store: &'a dyn ContainerStore,
    options: MigrateOptions,
}

/// Parameters and identity of the method a call needs.
struct Plan {
    parameters: Vec<Parameter>,
    candidate: Candidate,
}

impl<'a> Migrator<'a> {
    pub fn new(model: &'a dyn SemanticModel, store: &'a dyn ContainerStore, options: MigrateOptions) -> Self {
        Migrator {
            model,
            store,
            options,
        }
    }

    pub fn options(&self) -> &MigrateOptions {
        &self.options
    }

    /// Migrate `call`, or explain why no fix was produced.
    #[tracing::instrument(level = "debug", skip_all, fields(method = %call.method, span = ?call.span))]
    pub fn migrate(&self, call: &LegacyCall) -> Result<MigrationFix, MigrationError> {
        let analysis = analyze(call, self.model)?;
        let plan = self.plan(call, &analysis)?;
        let container = self.options.container_name.as_str();

        let mut last_generation = 0;
        for attempt in 1..=self.options.retry_budget {
            let generation = self.store.generation();
            if generation < last_generation {
                return Err(MigrationError::NonMonotonic {
                    before: last_generation,
                    after: generation,
                });
            }
            last_generation = generation;

            let Some(snapshot) = self.store.snapshot(container)? else {
                self.store.create(container)?;
                continue;
            };

            let resolution = resolve(&plan.candidate, &snapshot.container, self.options.first_event_id)?;
            let span = self.model.reacquire(call).ok_or(MigrationError::SyntaxLost)?;

            let declaration = if resolution.reused {
                stored_declaration(&snapshot, &plan.candidate, &resolution)?
            } else {
                let attribute = LogAttribute::new(
                    resolution.event_id,
                    analysis.constant_level(),
                    analysis.template.clone(),
                );
                let declaration = MethodDecl::stub(resolution.name.clone(), attribute, plan.parameters.clone());
                match self.store.append(container, snapshot.generation, declaration.clone()) {
                    Ok(_) => declaration,
                    Err(StoreError::Conflict { expected, actual }) => {
                        tracing::debug!(attempt, expected, actual, "container changed, retrying");
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                }
            };

            tracing::debug!(
                name = %resolution.name,
                reused = resolution.reused,
                event_id = resolution.event_id,
                "migrated call"
            );
            let rewrite = Substitution::new(span, rewrite_call(container, &resolution.name, call, &analysis));
            return Ok(MigrationFix {
                container: container.to_string(),
                signature: MethodSignature::from_decl(&declaration),
                declaration,
                reused: resolution.reused,
                rewrite,
            });
        }

        Err(MigrationError::RetryBudgetExhausted {
            container: container.to_string(),
            attempts: self.options.retry_budget,
        })
    }

    fn plan(&self, call: &LegacyCall, analysis: &LegacyAnalysis) -> Result<Plan, MigrationError> {
        let mut parameters = vec![Parameter::new(LOGGER_PARAM, self.well_known(WellKnownType::Logger)?)];
        if let LevelArg::Argument(_) = analysis.level {
            parameters.push(Parameter::new(LEVEL_PARAM, self.well_known(WellKnownType::LogLevel)?));
        }
        if analysis.exception.is_some() {
            parameters.push(Parameter::new(EXCEPTION_PARAM, self.well_known(WellKnownType::Exception)?));
        }

        let template = MessageTemplate::new(analysis.template.clone());
        let placeholders: Vec<&str> = template.names().collect();
        let arguments = &call.arguments[analysis.format_arguments(call)];
        let names = parameter_names(&placeholders, arguments.len(), self.options.reserved_prefix);
        for (argument, name) in arguments.iter().zip(names) {
            let ty = self
                .model
                .type_of(argument)
                .ok_or_else(|| MigrationError::TypeUnavailable(format!("argument `{}`", argument.text)))?;
            parameters.push(Parameter::new(name, ty));
        }

        let candidate = Candidate {
            base_name: derive_identifier(&analysis.template),
            param_types: parameters.iter().map(|p| p.ty.clone()).collect(),
            level: analysis.constant_level(),
            template: analysis.template.clone(),
        };
        Ok(Plan {
            parameters,
            candidate,
        })
    }

    fn well_known(&self, known: WellKnownType) -> Result<TypeRef, MigrationError> {
        self.model
            .well_known(known)
            .ok_or_else(|| MigrationError::TypeUnavailable(format!("well-known type {known:?}")))
    }
}

/// The declaration a reused resolution points at, as the store holds it.
/// Its parameter names and attribute extras may differ from what this call
/// would have generated.
fn stored_declaration(
    snapshot: &Snapshot,
    candidate: &Candidate,
    resolution: &Resolution,
) -> Result<MethodDecl, MigrationError> {
    let signature = MethodSignature {
        name: resolution.name.clone(),
        param_types: candidate.param_types.clone(),
        level: candidate.level,
        template: candidate.template.clone(),
        event_id: resolution.event_id,
    };
    snapshot.declaration(&signature).cloned().ok_or_else(|| {
        StoreError::Unavailable(format!(
            "snapshot of `{}` lists `{}` without its declaration",
            snapshot.container.name, resolution.name
        ))
        .into()
    })
}

/// `Container.Name(logger, kept arguments...)`.
fn rewrite_call(container: &str, name: &str, call: &LegacyCall, analysis: &LegacyAnalysis) -> String {
    let mut args = vec![call.receiver.text.as_str()];
    args.extend(
        analysis
            .kept_arguments(call)
            .into_iter()
            .map(|index| call.arguments[index].text.as_str()),
    );
    format!("{container}.{name}({})", args.join(", "))
}

/// Migrate a single call with a one-off [`Migrator`].
pub fn migrate_call(
    call: &LegacyCall,
    model: &dyn SemanticModel,
    store: &dyn ContainerStore,
    options: &MigrateOptions,
) -> Result<MigrationFix, MigrationError> {
    Migrator::new(model, store, options.clone()).migrate(call)
}
