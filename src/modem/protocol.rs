// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Request encoding for the modem management API

use std::fmt::Write;

use super::types::Domain;

/// Login action path
pub const LOGIN_PATH: &str = "/cgi/cgi_action";

/// Object query path
pub const QUERY_PATH: &str = "/cgi/cgi_get";

/// Encodes form fields as `application/x-www-form-urlencoded`, keeping the given order.
///
/// The modem rejects a login whose fields are not in the expected order, so this never
/// goes through a map.
#[must_use]
pub fn encode_form(fields: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (i, (name, value)) in fields.iter().enumerate() {
        if i > 0 {
            out.push('&');
        }
        percent_encode(&mut out, name);
        out.push('=');
        percent_encode(&mut out, value);
    }
    out
}

fn percent_encode(out: &mut String, s: &str) {
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(char::from(b));
            }
            b' ' => out.push('+'),
            _ => {
                let _ = write!(out, "%{b:02X}");
            }
        }
    }
}

/// Builds the query URL for a domain
#[must_use]
pub fn query_url(base_url: &str, domain: Domain) -> String {
    let mut url = format!("{base_url}{QUERY_PATH}?Object={}", domain.object());
    for filter in domain.filters() {
        url.push('&');
        url.push_str(filter);
        url.push('=');
    }
    url
}
