//! Serialization of ordered dictionaries into the solver's text syntax.

use std::fmt::Display;

use crate::value::{FoamDict, FoamValue};
use crate::{DictError, DictResult};

/// Render a named block: `name{k1 v1;k2 v2;nested{...}}` followed by a
/// newline at the outermost level only. Recurses into dictionary values.
pub fn write_block(out: &mut String, name: &str, dict: &FoamDict) {
    block_into(out, name, dict);
    out.push('\n');
}

fn block_into(out: &mut String, name: &str, dict: &FoamDict) {
    out.push_str(name);
    out.push('{');
    for (key, value) in dict.iter() {
        match value {
            FoamValue::Dict(sub) => block_into(out, key, sub),
            scalar => {
                out.push_str(key);
                out.push(' ');
                out.push_str(&scalar.to_string());
                out.push(';');
            }
        }
    }
    out.push('}');
}

/// Render a fixed-length sequence as a parenthesized space-separated list:
/// `(a b c)`. Used for vectors and coordinate triples.
pub fn render_tuple<T: Display>(items: &[T]) -> String {
    let body: Vec<String> = items.iter().map(|item| item.to_string()).collect();
    format!("({})", body.join(" "))
}

/// Render a flat token list: `name ( x y );` with a trailing newline.
///
/// An empty token slice is a caller error and is rejected up front; lists
/// that are legitimately empty in the target syntax are written literally by
/// their writers.
pub fn write_list<S: AsRef<str>>(out: &mut String, name: &str, tokens: &[S]) -> DictResult<()> {
    if tokens.is_empty() {
        return Err(DictError::EmptyList {
            name: name.to_string(),
        });
    }
    out.push_str(name);
    out.push_str(" ( ");
    for token in tokens {
        out.push_str(token.as_ref());
        out.push(' ');
    }
    out.push_str(");\n");
    Ok(())
}

/// Render a tab-separated scalar assignment: `key\tvalue;` plus newline.
pub fn write_entry(out: &mut String, key: &str, value: impl Display) {
    out.push_str(key);
    out.push('\t');
    out.push_str(&value.to_string());
    out.push_str(";\n");
}
