// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::{BTreeMap, HashMap};

/// Read-only source of ambient variable values, such as the process environment.
///
/// Lookups are exact and case-sensitive. A `None` means the name is absent from
/// the source; an empty string is a present value.
pub trait VariableSource {
    fn lookup(&self, name: &str) -> Option<String>;
}

impl VariableSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl VariableSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: VariableSource + ?Sized> VariableSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}
