use serde::Deserialize;
use serde::Serialize;

/// Whether a type-system definition introduces a name (`type Foo`) or adds
/// to an existing one (`extend type Foo`).
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum DefinitionForm {
    #[default]
    Base,
    Extension,
}

impl DefinitionForm {
    pub fn is_extension(&self) -> bool {
        matches!(self, DefinitionForm::Extension)
    }
}
