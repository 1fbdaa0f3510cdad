//! Skill catalog - compiled-in registry of skill registrars

use std::sync::Arc;
use crate::application::errors::SkillError;
use crate::application::messaging::Controller;

/// Registration function every skill exposes
pub type Registrar = Arc<dyn Fn(&mut Controller) -> Result<(), SkillError> + Send + Sync>;

/// A named skill and the function that wires it into the controller
#[derive(Clone)]
pub struct Skill {
    pub name: String,
    pub description: Option<String>,
    registrar: Registrar,
}

impl Skill {
    pub fn new<F>(name: impl Into<String>, registrar: F) -> Self
    where
        F: Fn(&mut Controller) -> Result<(), SkillError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: None,
            registrar: Arc::new(registrar),
        }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Run the registrar against `controller`
    pub fn register(&self, controller: &mut Controller) -> Result<(), SkillError> {
        (self.registrar)(controller)
    }
}

impl std::fmt::Debug for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skill")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Catalog of known skills, kept in insertion order
#[derive(Clone, Debug, Default)]
pub struct SkillCatalog {
    skills: Vec<Skill>,
}

impl SkillCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`SkillCatalog::register`] for static catalogs.
    /// A duplicate name is logged and the later skill ignored.
    pub fn with(mut self, skill: Skill) -> Self {
        if let Err(e) = self.register(skill) {
            tracing::warn!("{}", e);
        }
        self
    }

    pub fn register(&mut self, skill: Skill) -> Result<(), SkillError> {
        if self.contains(&skill.name) {
            return Err(SkillError::Registration(format!(
                "skill '{}' already in catalog",
                skill.name
            )));
        }
        self.skills.push(skill);
        Ok(())
    }

    /// Resolve a skill by name
    pub fn get(&self, name: &str) -> Result<&Skill, SkillError> {
        self.skills
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SkillError::NotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skills.iter().any(|s| s.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.skills.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter()
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(_: &mut Controller) -> Result<(), SkillError> {
        Ok(())
    }

    #[test]
    fn keeps_insertion_order() {
        let catalog = SkillCatalog::new()
            .with(Skill::new("weather", noop))
            .with(Skill::new("about", noop));
        assert_eq!(catalog.names(), vec!["weather", "about"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut catalog = SkillCatalog::new();
        catalog.register(Skill::new("about", noop)).unwrap();
        assert!(catalog.register(Skill::new("about", noop)).is_err());

        let catalog = catalog.with(Skill::new("about", noop));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn unknown_name_resolves_to_not_found() {
        let catalog = SkillCatalog::new().with(Skill::new("about", noop));
        assert!(catalog.get("about").is_ok());
        assert!(catalog.get("utils").unwrap_err().is_not_found());
    }
}
