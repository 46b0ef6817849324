// src/form.rs
// Form presenter: one labeled input per scenario field

use crate::catalog::{Catalog, Scenario};
use crate::error::Result;
use crate::modal::{ModalId, ModalKind, ModalStack};
use crate::prompt::AnswerSet;
use crate::ui::Surface;
use tracing::{info, warn};

/// Notice shown when a card names a scenario the catalog does not know
pub const NOT_DEFINED_MESSAGE: &str = "Scenario not defined.";

pub const GENERATE_LABEL: &str = "Generate Letter";
pub const CANCEL_LABEL: &str = "Cancel";

/// Read access to the current value of named inputs
pub trait InputValues {
    fn value(&self, id: &str) -> Option<&str>;
}

impl InputValues for AnswerSet {
    fn value(&self, id: &str) -> Option<&str> {
        self.get(id)
    }
}

/// One text input bound to a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub id: &'static str,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Generate,
    Cancel,
}

/// An open answer form for one scenario
#[derive(Debug, Clone)]
pub struct FormModal {
    modal_id: ModalId,
    scenario: &'static Scenario,
    inputs: Vec<FormInput>,
}

impl FormModal {
    pub fn modal_id(&self) -> ModalId {
        self.modal_id
    }

    pub fn scenario(&self) -> &'static Scenario {
        self.scenario
    }

    pub fn title(&self) -> &'static str {
        self.scenario.name
    }

    pub fn inputs(&self) -> &[FormInput] {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut [FormInput] {
        &mut self.inputs
    }

    /// Set the value of the first input with this id
    pub fn set_value(&mut self, id: &str, value: impl Into<String>) -> bool {
        match self.inputs.iter_mut().find(|i| i.id == id) {
            Some(input) => {
                input.value = value.into();
                true
            }
            None => false,
        }
    }
}

impl InputValues for FormModal {
    fn value(&self, id: &str) -> Option<&str> {
        self.inputs
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.value.as_str())
    }
}

/// Open the form for `name`.
///
/// An unknown name notifies the user and opens nothing. Opening a scenario
/// that already has an open form adds a second one.
pub fn open_scenario<S: Surface + ?Sized>(
    catalog: &Catalog,
    modals: &mut ModalStack,
    surface: &mut S,
    name: &str,
) -> Result<Option<FormModal>> {
    let Some(scenario) = catalog.get(name) else {
        warn!(scenario = name, "Scenario not defined");
        surface.notify(NOT_DEFINED_MESSAGE)?;
        return Ok(None);
    };

    let inputs = scenario
        .fields
        .iter()
        .map(|f| FormInput {
            id: f.id,
            label: f.label,
            value: String::new(),
        })
        .collect();

    let modal_id = modals.open(ModalKind::Form {
        scenario: scenario.name.to_string(),
    });
    info!(scenario = scenario.name, fields = scenario.fields.len(), "Opened scenario form");

    Ok(Some(FormModal {
        modal_id,
        scenario,
        inputs,
    }))
}
