//! Closed sets of accepted values for enumerated fields.

/// A named, fixed set of allowed string values.
#[derive(Debug, PartialEq, Eq)]
pub struct AllowList {
    pub name: &'static str,
    pub values: &'static [&'static str],
}

impl AllowList {
    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(&value)
    }

    /// Values in lexical order, as shown in findings.
    pub fn sorted(&self) -> Vec<&'static str> {
        let mut values = self.values.to_vec();
        values.sort_unstable();
        values
    }
}

pub static STATUS: AllowList = AllowList {
    name: "status",
    values: &[
        "Draft",
        "Review",
        "Active",
        "Production",
        "Archived",
        "Deprecated",
        "Validation Complete",
        "Architectural Design",
    ],
};

pub static ACCESS_LEVEL: AllowList = AllowList {
    name: "access_level",
    values: &["public", "internal", "confidential", "restricted"],
};

pub static GOVERNANCE_LEVEL: AllowList = AllowList {
    name: "governance_level",
    values: &["enterprise", "department", "team", "project"],
};

pub static SECURITY_LEVEL: AllowList = AllowList {
    name: "security_level",
    values: &["public", "internal", "confidential", "restricted", "classified"],
};

pub static BUSINESS_VALUE: AllowList = AllowList {
    name: "business_value",
    values: &["critical", "high", "medium", "low"],
};

pub static TECHNICAL_COMPLEXITY: AllowList = AllowList {
    name: "technical_complexity",
    values: &["high", "medium", "low"],
};

pub static IMPLEMENTATION_PRIORITY: AllowList = AllowList {
    name: "implementation_priority",
    values: &["immediate", "high", "medium", "low"],
};

pub static VALIDATION_STATUS: AllowList = AllowList {
    name: "validation_status",
    values: &["validated", "pending", "uncertain", "architect_validated", "confirmed"],
};
