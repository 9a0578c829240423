//! Fund definition
//!
//! This module defines the Fund entity and its properties. The entity is a
//! plain data holder; input validation belongs to the HTTP layer and
//! persistence belongs to the store.

use crate::identifier::FundId;

/// An investment fund managed by the registry
#[derive(Debug, Clone, PartialEq)]
pub struct Fund {
    /// Unique identifier, assigned at creation
    pub id: FundId,
    /// Fund name
    pub name: String,
    /// Manager overseeing the fund
    pub manager_name: String,
    /// Detailed description of the fund
    pub description: String,
    /// Net Asset Value
    pub nav: f64,
    /// Creation date as supplied by the client, stored verbatim
    pub creation_date: String,
    /// Performance percentage; the only field mutable after creation
    pub performance: f64,
}

impl Fund {
    /// Creates a new fund with a freshly generated identifier
    pub fn new(
        name: impl Into<String>,
        manager_name: impl Into<String>,
        description: impl Into<String>,
        nav: f64,
        creation_date: impl Into<String>,
        performance: f64,
    ) -> Self {
        Self {
            id: FundId::new(),
            name: name.into(),
            manager_name: manager_name.into(),
            description: description.into(),
            nav,
            creation_date: creation_date.into(),
            performance,
        }
    }

    /// Replaces the performance figure in place
    pub fn set_performance(&mut self, performance: f64) {
        self.performance = performance;
    }
}
