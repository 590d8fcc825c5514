//! # GraphQL request builder
//!
//! Renders a tree of operations into GraphQL request text together with the variables to
//! send alongside it. Inline arguments and variables can be mixed freely across several
//! aliased operations, the variable definitions of all of them being hoisted into a
//! single operation header.
//!
//! ```
//! use graphql_request_builder::{Operation, QueryBuilder, Variable};
//!
//! let operations = [
//!     Operation::new("userLogin").field("id").param("email", "a@b.com"),
//!     Operation::new("customer")
//!         .alias("first")
//!         .field("id")
//!         .variable("id1", Variable::new("ID", "id", "c1").required()),
//! ];
//!
//! let request = QueryBuilder::default().create_query(&operations).unwrap();
//!
//! assert_eq!(
//!     request.request,
//!     r#"query($id1: ID!) { userLogin(email: "a@b.com") { id } first: customer(id: $id1) { id } }"#
//! );
//! ```
//!
//! The builder is a pure syntax generator: nothing is validated against a schema, and
//! string literals are embedded as given unless [`BuilderConfig::escape_strings`] is set.

#![cfg_attr(test, allow(unused_crate_dependencies))]

mod config;
mod error;
mod field;
mod operation;
mod render;
mod value;
mod variable;


use indexmap::IndexMap;

pub use self::{
    config::BuilderConfig,
    error::BuildError,
    field::Field,
    operation::{Operation, OperationType, Operations},
    value::{ParamMap, ParamValue},
    variable::{Variable, VariableMap},
};

/// A rendered request, ready to be sent by a transport.
///
/// Serializes as the usual GraphQL over HTTP body, `{"query": ..., "variables": ...}`.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct GraphqlRequest {
    /// The request text.
    #[serde(rename = "query")]
    pub request: String,
    /// The value of every variable referenced by the request, keyed by variable name.
    pub variables: IndexMap<String, ParamValue>,
}

/// Builds requests out of operation trees.
///
/// Every call renders with its own context, so a builder can be shared between threads and
/// successive calls never see each other's variables.
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    config: BuilderConfig,
}

impl QueryBuilder {
    /// A builder rendering with the given options.
    pub fn new(config: BuilderConfig) -> Self {
        Self { config }
    }

    /// The options used by this builder.
    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    /// Renders a `query` request, `None` if no operation produced any content.
    pub fn create_query(&self, operations: &[Operation]) -> Option<GraphqlRequest> {
        self.create(OperationType::Query, operations)
    }

    /// Renders a `mutation` request, `None` if no operation produced any content.
    pub fn create_mutation(&self, operations: &[Operation]) -> Option<GraphqlRequest> {
        self.create(OperationType::Mutation, operations)
    }

    /// Renders a `subscription` request, `None` if no operation produced any content.
    pub fn create_subscription(&self, operations: &[Operation]) -> Option<GraphqlRequest> {
        self.create(OperationType::Subscription, operations)
    }

    /// Renders a request of the given type, reporting why nothing could be built.
    pub fn build(&self, operation_type: OperationType, operations: &[Operation]) -> Result<GraphqlRequest, BuildError> {
        render::build(&self.config, operation_type, operations)
    }

    fn create(&self, operation_type: OperationType, operations: &[Operation]) -> Option<GraphqlRequest> {
        match self.build(operation_type, operations) {
            Ok(request) => Some(request),
            Err(BuildError::EmptyRequest) => {
                tracing::debug!("no operation produced any content, skipping the {operation_type}");
                None
            }
            Err(error) => {
                tracing::warn!("could not build the {operation_type}: {error}");
                None
            }
        }
    }
}
