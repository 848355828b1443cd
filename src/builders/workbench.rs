// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::errors::BuildError;
use crate::observability::messages::{builder::*, StructuredLog};
use crate::traits::BuildStage;

/// Partially recorded product state owned by a builder.
pub(crate) trait Draft: Default {
    type Product;

    /// Assembles the product, or names the aspects that are still missing.
    fn assemble(&self) -> Result<Self::Product, Vec<&'static str>>;
}

enum Bench<D> {
    Idle,
    Drafting(D),
    Delivered,
}

impl<D> Bench<D> {
    fn stage(&self) -> BuildStage {
        match self {
            Bench::Idle => BuildStage::Uninitialized,
            Bench::Drafting(_) => BuildStage::Configuring,
            Bench::Delivered => BuildStage::Complete,
        }
    }
}

/// Lifecycle bookkeeping for one builder: owns the in-progress draft and
/// rejects operations the current stage does not allow.
pub(crate) struct Workbench<D> {
    builder: &'static str,
    bench: Bench<D>,
}

impl<D: Draft> Workbench<D> {
    pub(crate) fn new(builder: &'static str) -> Self {
        Self {
            builder,
            bench: Bench::Idle,
        }
    }

    pub(crate) fn stage(&self) -> BuildStage {
        self.bench.stage()
    }

    pub(crate) fn reset(&mut self) {
        self.bench = Bench::Drafting(D::default());
        BuilderReset {
            builder: self.builder,
        }
        .log();
    }

    /// Applies `apply` to the draft if a product is being configured.
    pub(crate) fn record<F>(&mut self, operation: &'static str, apply: F) -> Result<(), BuildError>
    where
        F: FnOnce(&mut D),
    {
        match &mut self.bench {
            Bench::Drafting(draft) => {
                apply(draft);
                StepRecorded {
                    builder: self.builder,
                    step: operation,
                }
                .log();
                Ok(())
            }
            other => Err(violation(self.builder, operation, other.stage())),
        }
    }

    /// Moves the finished product out, leaving the bench in `Complete`.
    ///
    /// An incomplete draft stays in place so the caller can keep configuring.
    pub(crate) fn deliver(&mut self) -> Result<D::Product, BuildError> {
        let draft = match &self.bench {
            Bench::Drafting(draft) => draft,
            other => return Err(violation(self.builder, "take_result", other.stage())),
        };

        match draft.assemble() {
            Ok(product) => {
                self.bench = Bench::Delivered;
                ProductDelivered {
                    builder: self.builder,
                }
                .log();
                Ok(product)
            }
            Err(missing) => {
                IncompleteProductRequested {
                    builder: self.builder,
                    missing: &missing,
                }
                .log();
                Err(BuildError::IncompleteProduct {
                    builder: self.builder,
                    missing,
                })
            }
        }
    }
}

fn violation(builder: &'static str, operation: &'static str, stage: BuildStage) -> BuildError {
    ProtocolViolationDetected {
        builder,
        operation,
        stage,
    }
    .log();

    BuildError::ProtocolViolation {
        builder,
        operation,
        stage,
    }
}
