#![warn(clippy::all)]
pub(crate) mod access;
pub(crate) mod arn;
pub(crate) mod condition;
pub(crate) mod effect;
pub(crate) mod globals;
pub(crate) mod service;
pub mod services;
pub(crate) mod statement;

#[macro_use]
pub(crate) mod serutil;

pub use {
    access::AccessLevel,
    arn::{ArnDefaults, ArnDefaultsBuilder, ArnDefaultsBuilderError},
    condition::{op as condop, ConditionClause, ConditionMap, ConditionOp, ConditionValues, SetQualifier, Variant},
    effect::Effect,
    service::{ActionSpec, ConditionKeySpec, ResourceTypeSpec, ServiceSpec},
    serutil::StringSet,
    statement::PolicyStatement,
};
