//! Symbol inventory extraction
//!
//! Walks a parsed translation unit once, in source order, and collects the
//! global variables and a `Function` record per definition. No type checking
//! or name resolution happens here; the pass never fails.

pub mod control;
pub mod functions;
pub mod inventory;
pub mod options;

use crate::ast::{self, TopLevelItem, TranslationUnit};
use log::{debug, warn};
use symscan_common::{Diagnostic, ErrorReporter, SourceSpan};

pub use control::classify;
pub use functions::FunctionAnalyzer;
pub use inventory::{ControlKind, ControlTag, Function, GlobalVariable, Inventory, Variable};
pub use options::{AnalysisOptions, RecursionStrategy};

/// Semantic analyzer context
pub struct SemanticAnalyzer {
    options: AnalysisOptions,
    reporter: ErrorReporter,
}

impl SemanticAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self {
            options,
            reporter: ErrorReporter::new(),
        }
    }

    /// Analyze a translation unit
    pub fn analyze(&mut self, unit: &TranslationUnit) -> Inventory {
        let functions = FunctionAnalyzer::new(&self.options);
        let mut inventory = Inventory::new();
        let mut first_entry: Option<SourceSpan> = None;

        for item in &unit.items {
            match item {
                TopLevelItem::GlobalVariable(global) => {
                    inventory.globals.push(global_record(global));
                }
                TopLevelItem::Function(func) => {
                    let function = functions.analyze(func);
                    if function.is_main {
                        match &first_entry {
                            Some(first) => {
                                warn!("additional entry function at {}", func.span);
                                self.reporter.report(
                                    Diagnostic::warning(
                                        format!("More than one entry function defined at {}", func.span),
                                        func.span.clone(),
                                    )
                                    .with_note(format!("first entry function defined at {}", first)),
                                );
                            }
                            None => first_entry = Some(func.span.clone()),
                        }
                    }
                    inventory.functions.push(function);
                }
            }
        }

        debug!(
            "inventory: {} globals, {} functions",
            inventory.globals.len(),
            inventory.functions.len()
        );

        inventory
    }

    /// Warnings collected while analyzing
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.reporter.diagnostics()
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new(AnalysisOptions::default())
    }
}

fn global_record(global: &ast::GlobalVariable) -> GlobalVariable {
    GlobalVariable {
        data_type: global.data_type.to_string(),
        name: global.name.clone(),
        value: global.value.text.clone(),
    }
}

/// Analyze `unit` with `options`, discarding diagnostics
pub fn analyze(unit: &TranslationUnit, options: AnalysisOptions) -> Inventory {
    SemanticAnalyzer::new(options).analyze(unit)
}
