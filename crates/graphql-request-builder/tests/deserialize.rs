#![allow(unused_crate_dependencies)]

use graphql_request_builder::{Field, Operation, Operations, ParamValue, QueryBuilder};
use indoc::indoc;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn single_operation() {
    let operations: Operations = serde_json::from_str(indoc! {r#"
        {
          "functionName": "userLogin",
          "fields": ["id"],
          "params": { "email": "a@b.com" }
        }
    "#})
    .unwrap();

    let query = QueryBuilder::default().create_query(&operations).unwrap();

    assert_eq!(query.request, r#"query { userLogin(email: "a@b.com") { id } }"#);
}

#[test]
fn list_of_operations() {
    let operations: Operations = serde_json::from_value(json!([
        { "functionName": "a" },
        { "functionName": "b", "fields": [] },
    ]))
    .unwrap();

    assert_eq!(operations.len(), 2);

    let query = QueryBuilder::default().create_query(&operations).unwrap();

    assert_eq!(query.request, "query { a b }");
}

#[test]
fn empty_operation_builds_nothing() {
    let operations: Operations = serde_json::from_str("{}").unwrap();

    assert_eq!(operations.len(), 1);
    assert_eq!(operations[0], Operation::default());
    assert_eq!(QueryBuilder::default().create_query(&operations), None);

    let operations: Operations = serde_json::from_str("[]").unwrap();

    assert_eq!(QueryBuilder::default().create_query(&operations), None);
}

#[test]
fn fields_are_resolved_once() {
    let operation: Operation = serde_json::from_value(json!({
        "key": "first",
        "functionName": "customer",
        "fields": [
            "id",
            { "address": ["city", { "geo": ["lat"] }] },
            { "functionName": "orders", "params": { "last": 3 }, "fields": ["total"] },
        ],
    }))
    .unwrap();

    assert_eq!(operation.key.as_deref(), Some("first"));
    assert_eq!(operation.fields[0], Field::from("id"));
    assert!(matches!(&operation.fields[1], Field::Group { name, .. } if name == "address"));
    assert!(matches!(&operation.fields[2], Field::Operation(nested) if nested.function_name == "orders"));

    let query = QueryBuilder::default().create_query(&[operation]).unwrap();

    assert_eq!(
        query.request,
        "query { first: customer { id address { city geo { lat } } orders(last: 3) { total } } }"
    );
}

#[test]
fn field_group_with_several_names_is_rejected() {
    let error = serde_json::from_value::<Operation>(json!({
        "functionName": "customer",
        "fields": [{ "address": ["city"], "phone": ["number"] }],
    }))
    .unwrap_err();

    assert!(error.to_string().contains("exactly one field name, found 2"), "{error}");
}

#[test]
fn variables() {
    let operations: Operations = serde_json::from_value(json!({
        "functionName": "customers",
        "fields": ["id"],
        "params": { "ignored": true },
        "variables": {
            "ids": { "type": "ID", "name": "ids", "value": ["1", "2"], "list": true, "required": true },
            "first": { "type": "Int", "name": "first", "value": 10 },
        },
    }))
    .unwrap();

    let query = QueryBuilder::default().create_query(&operations).unwrap();

    assert_eq!(
        query.request,
        "query($ids: [ID!], $first: Int) { customers(ids: $ids, first: $first) { id } }"
    );
    assert_eq!(
        serde_json::to_value(&query.variables).unwrap(),
        json!({ "ids": ["1", "2"], "first": 10 })
    );
}

#[test]
fn param_values_from_json() {
    let value: ParamValue = serde_json::from_value(json!({
        "int": 1,
        "float": 1.5,
        "null": null,
        "list": [true, "x"],
    }))
    .unwrap();

    assert_eq!(
        value,
        ParamValue::object([
            ("int", ParamValue::Int(1)),
            ("float", ParamValue::Float(1.5)),
            ("null", ParamValue::Null),
            ("list", ParamValue::list([ParamValue::Boolean(true), ParamValue::from("x")])),
        ])
    );
}
