// src/catalog.rs
// Built-in scenario catalog: scenario name -> ordered field descriptors

/// One input required by a scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Lookup key for the answer and id of the form input
    pub id: &'static str,
    pub label: &'static str,
}

/// A named letter-writing use case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub fields: &'static [Field],
}

const fn field(id: &'static str, label: &'static str) -> Field {
    Field { id, label }
}

const PARKING_TICKET_APPEAL: &[Field] = &[
    field("fullName", "Your full name"),
    field("address", "Your mailing address"),
    field("ticketNumber", "Ticket number"),
    field("issuingAgency", "Issuing agency"),
    field("incidentDate", "Incident date"),
    field("reason", "Why is the ticket unfair?"),
    field("desiredOutcome", "What result do you want?"),
];

const MEDICAL_BILL_DISPUTE: &[Field] = &[
    field("fullName", "Your full name"),
    field("provider", "Medical provider"),
    field("amount", "Bill amount"),
    field("issue", "What is wrong with the bill?"),
    field("desiredOutcome", "What result do you want?"),
];

const REFUND_REQUEST_ESCALATION: &[Field] = &[
    field("fullName", "Your full name"),
    field("company", "Company name"),
    field("issue", "What happened?"),
    field("amount", "Refund amount (if any)"),
    field("desiredOutcome", "What result do you want?"),
];

const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "Parking Ticket Appeal",
        fields: PARKING_TICKET_APPEAL,
    },
    Scenario {
        name: "Medical Bill Dispute",
        fields: MEDICAL_BILL_DISPUTE,
    },
    Scenario {
        name: "Refund Request Escalation",
        fields: REFUND_REQUEST_ESCALATION,
    },
];

/// Read-only view over a scenario table.
///
/// The built-in table is a process-wide constant; tests build catalogs over
/// their own `'static` tables with [`Catalog::from_table`].
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    scenarios: &'static [Scenario],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The scenarios shipped with LetterHammer
    pub const fn builtin() -> Self {
        Self {
            scenarios: SCENARIOS,
        }
    }

    pub const fn from_table(scenarios: &'static [Scenario]) -> Self {
        Self { scenarios }
    }

    /// Look up a scenario by its exact display name
    pub fn get(&self, name: &str) -> Option<&'static Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// All scenarios in declaration order
    pub fn scenarios(&self) -> &'static [Scenario] {
        self.scenarios
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.scenarios.iter().map(|s| s.name)
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}

impl Scenario {
    pub fn field(&self, id: &str) -> Option<&'static Field> {
        self.fields.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_in_order() {
        let names: Vec<_> = Catalog::builtin().names().collect();
        assert_eq!(
            names,
            vec![
                "Parking Ticket Appeal",
                "Medical Bill Dispute",
                "Refund Request Escalation"
            ]
        );
    }

    #[test]
    fn test_field_ids_unique_within_each_scenario() {
        for scenario in Catalog::builtin().scenarios() {
            let mut seen = HashSet::new();
            for f in scenario.fields {
                assert!(
                    seen.insert(f.id),
                    "duplicate field id {} in {}",
                    f.id,
                    scenario.name
                );
            }
        }
    }

    #[test]
    fn test_scenario_names_unique() {
        let names: HashSet<_> = Catalog::builtin().names().collect();
        assert_eq!(names.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_get_exact_match() {
        let catalog = Catalog::builtin();
        let scenario = catalog.get("Medical Bill Dispute").unwrap();
        assert_eq!(scenario.fields.len(), 5);
        assert_eq!(scenario.fields[1].id, "provider");
        assert_eq!(scenario.fields[1].label, "Medical provider");
    }

    #[test]
    fn test_get_is_case_and_whitespace_sensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("medical bill dispute").is_none());
        assert!(catalog.get(" Medical Bill Dispute").is_none());
        assert!(catalog.get("Lease Termination").is_none());
    }

    #[test]
    fn test_parking_ticket_field_order() {
        let scenario = Catalog::builtin().get("Parking Ticket Appeal").unwrap();
        let ids: Vec<_> = scenario.fields.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            vec![
                "fullName",
                "address",
                "ticketNumber",
                "issuingAgency",
                "incidentDate",
                "reason",
                "desiredOutcome"
            ]
        );
    }

    #[test]
    fn test_scenario_field_lookup() {
        let scenario = Catalog::builtin().get("Refund Request Escalation").unwrap();
        assert_eq!(
            scenario.field("amount").map(|f| f.label),
            Some("Refund amount (if any)")
        );
        assert!(scenario.field("ticketNumber").is_none());
    }

    #[test]
    fn test_custom_table() {
        static FIELDS: &[Field] = &[field("a", "A"), field("b", "B")];
        static TABLE: &[Scenario] = &[Scenario {
            name: "Test",
            fields: FIELDS,
        }];
        let catalog = Catalog::from_table(TABLE);
        assert_eq!(catalog.len(), 1);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.get("Test").unwrap().fields.len(), 2);
    }
}
