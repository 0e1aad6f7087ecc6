//! Explain registry for rule kinds.
//!
//! Maps each rule kind to a human-readable description, its parameters and an example rule file.

use crate::ids;

/// Explanation entry for a rule kind.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the rule kind.
    pub title: &'static str,
    /// What the rule kind checks and when it stays silent.
    pub description: &'static str,
    /// Parameters accepted in the `rule:` block, one per line.
    pub parameters: &'static str,
    /// A complete rule definition file using this kind.
    pub example: &'static str,
}

/// Look up an explanation by rule kind.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::KIND_REQUIRED_FIELD => Some(explain_required_field()),
        ids::KIND_REQUIRED_FIELDS => Some(explain_required_fields()),
        ids::KIND_FIELD_TYPE => Some(explain_field_type()),
        ids::KIND_VALUE_RANGE => Some(explain_value_range()),
        ids::KIND_ARRAY_ITEM_REQUIRED_FIELDS => Some(explain_array_item_required_fields()),
        ids::KIND_ARRAY_ITEM_FIELD => Some(explain_array_item_field()),
        ids::KIND_PATTERN_MATCH => Some(explain_pattern_match()),
        ids::KIND_ARRAY_NO_DUPLICATES => Some(explain_array_no_duplicates()),
        ids::KIND_ARRAY_NO_DUPLICATES_COMBINE => Some(explain_array_no_duplicates_combine()),
        ids::KIND_NESTED_ARRAY_NO_DUPLICATES => Some(explain_nested_array_no_duplicates()),
        ids::KIND_NESTED_ARRAY_ITEM_REQUIRED_FIELDS => {
            Some(explain_nested_array_item_required_fields())
        }
        ids::KIND_NESTED_ARRAY_ITEM_FIELD => Some(explain_nested_array_item_field()),
        ids::KIND_HASHED_VALUE_CHECK => Some(explain_hashed_value_check()),
        ids::KIND_CONTAINS_KEYWORDS => Some(explain_contains_keywords()),
        ids::KIND_NO_TRAILING_WHITESPACE => Some(explain_no_trailing_whitespace()),
        _ => None,
    }
}

/// List all known rule kinds.
pub fn all_kinds() -> &'static [&'static str] {
    ids::ALL_KINDS
}

fn explain_required_field() -> Explanation {
    Explanation {
        title: "Required Field",
        description: "\
Reports a finding when the value at `path` does not exist.

Wildcard paths such as `routes[*].name` are expanded up to the last wildcard; every element
missing the remainder gets its own finding (`routes[1].name`). If the wildcard array itself is
missing, nothing is reported.",
        parameters: "\
path     dotted path expression (required)
message  finding message (required)",
        example: r#"id: API-001
name: Server port must be present
severity: error
targets:
  file_patterns: ["api*.yaml"]
rule:
  type: required_field
  path: server.port
  message: server.port is required"#,
    }
}

fn explain_required_fields() -> Explanation {
    Explanation {
        title: "Required Fields",
        description: "\
Checks that the mapping at `path` exists and carries every listed field.

A missing parent yields one finding on the parent path; otherwise one finding is emitted per
missing field at `<path>.<field>`.",
        parameters: "\
path     parent mapping path (required)
fields   list of child field names (required)
message  finding message (required)",
        example: r#"id: DB-002
name: Database connection settings
severity: error
targets:
  file_patterns: ["db.yaml"]
rule:
  type: required_fields
  path: database
  fields: [host, port, user]
  message: database settings are incomplete"#,
    }
}

fn explain_field_type() -> Explanation {
    Explanation {
        title: "Field Type",
        description: "\
Reports a finding when the value at `path` is not of `expected_type`.

Types are `string`, `number`, `boolean`, `array` and `object`; null values are `unknown`.
Missing values are not reported.",
        parameters: "\
path           path expression, wildcards allowed (required)
expected_type  string | number | boolean | array | object (required)
message        finding message (required)",
        example: r#"id: API-003
name: Port is numeric
severity: error
targets:
  file_patterns: ["*.yaml"]
rule:
  type: field_type
  path: server.port
  expected_type: number
  message: server.port must be a number"#,
    }
}

fn explain_value_range() -> Explanation {
    Explanation {
        title: "Value Range",
        description: "\
Reports a finding when the numeric value at `path` lies outside `[min, max]` (inclusive).

Non-numeric and missing values are not reported.",
        parameters: "\
path     path expression, wildcards allowed (required)
min      lower bound, inclusive (required)
max      upper bound, inclusive (required)
message  finding message (required)",
        example: r#"id: API-004
name: Port range
severity: error
targets:
  file_patterns: ["*.yaml"]
rule:
  type: value_range
  path: server.port
  min: 1
  max: 65535
  message: server.port out of range"#,
    }
}

fn explain_array_item_required_fields() -> Explanation {
    Explanation {
        title: "Array Item Required Fields",
        description: "\
Every mapping element of the array at `path` must carry each of `required_fields`.

Findings are attached to `<array>[i].<field>`. A missing array is not reported.",
        parameters: "\
path             array path, wildcards allowed (required)
required_fields  list of field names (required)
message          finding message (required)",
        example: r#"id: GW-001
name: Routes are complete
severity: error
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: array_item_required_fields
  path: routes
  required_fields: [name, upstream]
  message: route is missing a field"#,
    }
}

fn explain_array_item_field() -> Explanation {
    Explanation {
        title: "Array Item Field",
        description: "\
Validates one string field of every element of the array at `path` against an enum of allowed
values.

Elements where the field is absent or not a string are skipped.",
        parameters: "\
path        array path, wildcards allowed (required)
field       element field name (required)
validation  { type: enum, allowed_values: [...] } (required)
message     finding message (required)",
        example: r#"id: GW-002
name: Route methods
severity: warning
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: array_item_field
  path: routes
  field: method
  validation:
    type: enum
    allowed_values: [GET, POST]
  message: unsupported method"#,
    }
}

fn explain_pattern_match() -> Explanation {
    Explanation {
        title: "Pattern Match",
        description: "\
Reports a finding when the string at `path` does not match the regular expression `pattern`.

Non-string and missing values are not reported. An invalid expression produces a single
error finding for the rule.",
        parameters: "\
path     path expression, wildcards allowed (required)
pattern  regular expression (required)
message  finding message (required)",
        example: r#"id: API-005
name: Service name format
severity: error
targets:
  file_patterns: ["*.yaml"]
rule:
  type: pattern_match
  path: service.name
  pattern: "^[a-z][a-z0-9-]*$"
  message: service name must be kebab-case"#,
    }
}

fn explain_array_no_duplicates() -> Explanation {
    Explanation {
        title: "Array No Duplicates",
        description: "\
Reports every element of the array at `path` whose `field` value is shared with another element.

Each duplicated element gets one finding at `<array>[i].<field>`, with the shared value appended
to the message.",
        parameters: "\
path     array path, wildcards allowed (required)
field    element field name (required)
message  finding message (required)",
        example: r#"id: GW-003
name: Unique route names
severity: error
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: array_no_duplicates
  path: routes
  field: name
  message: route names must be unique"#,
    }
}

fn explain_array_no_duplicates_combine() -> Explanation {
    Explanation {
        title: "Array No Duplicate Combinations",
        description: "\
Like array_no_duplicates, keyed on the combination of several fields.

Findings are attached to the element (`<array>[i]`) and list the combination as `a|b`.",
        parameters: "\
path     array path, wildcards allowed (required)
fields   list of element field names (required)
message  finding message (required)",
        example: r#"id: GW-004
name: Unique method and path
severity: error
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: array_no_duplicates_combine
  path: routes
  fields: [method, path]
  message: duplicate route"#,
    }
}

fn explain_nested_array_no_duplicates() -> Explanation {
    Explanation {
        title: "Nested Array No Duplicates",
        description: "\
For every element of the array at `parent_path`, checks the array at `child_path` (relative to
that element) for duplicated `field` values, or duplicated `fields` combinations.

Duplicates are only detected within one child array, never across parents.",
        parameters: "\
parent_path  outer array path (required)
child_path   inner array path relative to each outer element (required)
field        element field name (field or fields required)
fields       list of element field names
message      finding message (required)",
        example: r#"id: GW-005
name: Unique upstream targets per service
severity: error
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: nested_array_no_duplicates
  parent_path: services
  child_path: upstreams
  field: host
  message: duplicate upstream host"#,
    }
}

fn explain_nested_array_item_required_fields() -> Explanation {
    Explanation {
        title: "Nested Array Item Required Fields",
        description: "\
Two-level array_item_required_fields: every element of every child array must carry each
required field. Findings are attached to `<parent>[i].<child>[j].<field>`.",
        parameters: "\
parent_path      outer array path (required)
child_path       inner array path relative to each outer element (required)
required_fields  list of field names (required)
message          finding message (required)",
        example: r#"id: GW-006
name: Upstreams are complete
severity: error
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: nested_array_item_required_fields
  parent_path: services
  child_path: upstreams
  required_fields: [host, port]
  message: upstream is missing a field"#,
    }
}

fn explain_nested_array_item_field() -> Explanation {
    Explanation {
        title: "Nested Array Item Field",
        description: "\
Two-level array_item_field: a string field of every element of every child array must be one of
the allowed values.",
        parameters: "\
parent_path  outer array path (required)
child_path   inner array path relative to each outer element (required)
field        element field name (required)
validation   { type: enum, allowed_values: [...] } (required)
message      finding message (required)",
        example: r#"id: GW-007
name: Upstream protocol
severity: warning
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: nested_array_item_field
  parent_path: services
  child_path: upstreams
  field: protocol
  validation:
    type: enum
    allowed_values: [http, https]
  message: unsupported upstream protocol"#,
    }
}

fn explain_hashed_value_check() -> Explanation {
    Explanation {
        title: "Hashed Value Check",
        description: "\
Hashes the string at `path` with `hash_algorithm` and compares the hex digest against
`hash_list` (case-insensitive).

In `forbidden` mode a listed digest is reported; in `allowed` mode an unlisted digest is
reported. Supported algorithms: sha1, sha256, sha512, md5.",
        parameters: "\
path            path expression, wildcards allowed (required)
hash_algorithm  sha1 | sha256 | sha512 | md5 (required)
mode            forbidden | allowed (required)
hash_list       list of hex digests (required)
message         finding message (required)",
        example: r#"id: SEC-001
name: No default passwords
severity: error
targets:
  file_patterns: ["*.yaml"]
rule:
  type: hashed_value_check
  path: database.password
  hash_algorithm: sha256
  mode: forbidden
  hash_list:
    - 2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b
  message: default password in use"#,
    }
}

fn explain_contains_keywords() -> Explanation {
    Explanation {
        title: "Contains Keywords",
        description: "\
Substring containment check on the string at `path`.

In `forbidden` mode the first listed keyword found in the value is reported; in `required`
mode the value is reported when it contains none of the keywords. Matching is case-insensitive unless `case_sensitive: true`.",
        parameters: "\
path            path expression, wildcards allowed (required)
mode            forbidden | required (required)
keywords        list of substrings (required)
case_sensitive  boolean (default false)
message         finding message (required)",
        example: r#"id: SEC-002
name: No debug endpoints
severity: warning
targets:
  file_patterns: ["gateway.yaml"]
rule:
  type: contains_keywords
  path: routes[*].path
  mode: forbidden
  keywords: [debug, internal]
  message: route path exposes internals"#,
    }
}

fn explain_no_trailing_whitespace() -> Explanation {
    Explanation {
        title: "No Leading Or Trailing Whitespace",
        description: "\
Scans every string value of the document and reports values with leading or trailing
whitespace. The message notes which side is affected.",
        parameters: "\
message  finding message (required)",
        example: r#"id: FMT-001
name: Clean string values
severity: info
targets:
  file_patterns: ["*.yaml", "*.yml"]
rule:
  type: no_trailing_whitespace
  message: string has surrounding whitespace"#,
    }
}
