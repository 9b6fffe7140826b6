use crate::SdlDefinition;
use std::sync::Arc;

/// Accumulates every definition and extension seen for one declared name.
///
/// The first base definition wins; later same-kind bases are kept as
/// duplicates so the build can report each of them. Definitions of another
/// kind than the accumulator's are kept as-is in `mismatched`.
#[derive(Clone, Debug, PartialEq)]
pub struct CompositeDefinitionBuilder<T> {
    base: Option<Arc<T>>,
    duplicates: Vec<Arc<T>>,
    mismatched: Vec<SdlDefinition>,
    extensions: Vec<Arc<T>>,
}

impl<T> CompositeDefinitionBuilder<T> {
    pub fn new() -> Self {
        Self {
            base: None,
            duplicates: vec![],
            mismatched: vec![],
            extensions: vec![],
        }
    }

    pub fn set_base(&mut self, def: Arc<T>) {
        if self.base.is_none() {
            self.base = Some(def);
        } else {
            self.duplicates.push(def);
        }
    }

    pub fn add_extension(&mut self, def: Arc<T>) {
        self.extensions.push(def);
    }

    pub fn add_mismatched(&mut self, def: SdlDefinition) {
        self.mismatched.push(def);
    }

    pub fn base(&self) -> Option<&Arc<T>> {
        self.base.as_ref()
    }

    pub fn duplicates(&self) -> &[Arc<T>] {
        &self.duplicates
    }

    pub fn mismatched(&self) -> &[SdlDefinition] {
        &self.mismatched
    }

    pub fn extensions(&self) -> &[Arc<T>] {
        &self.extensions
    }

    /// Everything accumulated, in the order it is added to a registry:
    /// the base, the duplicate bases, the extensions and then the
    /// mismatched definitions.
    ///
    /// Mismatched definitions go last so that the accumulator's own kind is
    /// registered first, even when only extensions of that kind were seen.
    pub fn into_definitions(
        self,
        wrap: impl Fn(Arc<T>) -> SdlDefinition,
    ) -> Vec<SdlDefinition> {
        let Self {
            base,
            duplicates,
            mismatched,
            extensions,
        } = self;
        let wrap = &wrap;
        base.into_iter()
            .chain(duplicates)
            .chain(extensions)
            .map(wrap)
            .chain(mismatched)
            .collect()
    }
}

impl<T> Default for CompositeDefinitionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
