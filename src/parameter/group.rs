use super::{ObjectId, Parameter, ParameterConfig, ParameterValue};

/// Parameters owned by one UI section, addressed by their local id.
pub struct ParameterGroup<V, Id>
where
    V: ParameterValue,
{
    label: String,
    config: ParameterConfig,
    parameters: Vec<Parameter<V, Id>>,
}

impl<V, Id> ParameterGroup<V, Id>
where
    V: ParameterValue,
    Id: PartialEq + std::fmt::Debug,
{
    pub fn new(label: impl Into<String>, config: ParameterConfig) -> Self {
        Self {
            label: label.into(),
            config,
            parameters: vec![],
        }
    }
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Panics if the group already has a parameter with the same local id.
    pub fn insert(&mut self, param: Parameter<V, Id>) -> &mut Parameter<V, Id> {
        assert!(
            self.get(param.local_id()).is_none(),
            "group \"{}\" already contains {:?}",
            self.label,
            param.local_id()
        );
        self.parameters.push(param);
        let last = self.parameters.len() - 1;
        &mut self.parameters[last]
    }

    /// Creates a parameter with a fresh global id and the group's config.
    pub fn create(
        &mut self,
        local_id: Id,
        label: impl Into<String>,
        value: V,
        maximum: V,
    ) -> &mut Parameter<V, Id> {
        let param = Parameter::with_config(ObjectId::next(), local_id, label, value, maximum, self.config);
        self.insert(param)
    }

    pub fn get(&self, local_id: &Id) -> Option<&Parameter<V, Id>> {
        self.parameters.iter().find(|p| p.local_id() == local_id)
    }
    pub fn get_mut(&mut self, local_id: &Id) -> Option<&mut Parameter<V, Id>> {
        self.parameters.iter_mut().find(|p| p.local_id() == local_id)
    }
    pub fn find(&self, global_id: ObjectId) -> Option<&Parameter<V, Id>> {
        self.parameters.iter().find(|p| p.global_id() == global_id)
    }
    pub fn find_mut(&mut self, global_id: ObjectId) -> Option<&mut Parameter<V, Id>> {
        self.parameters.iter_mut().find(|p| p.global_id() == global_id)
    }
    pub fn remove(&mut self, local_id: &Id) -> Option<Parameter<V, Id>> {
        let pos = self.parameters.iter().position(|p| p.local_id() == local_id)?;
        Some(self.parameters.remove(pos))
    }
    pub fn iter(&self) -> impl Iterator<Item = &Parameter<V, Id>> {
        self.parameters.iter()
    }
    pub fn len(&self) -> usize {
        self.parameters.len()
    }
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }
}
