use crate::geometry_attribute::{GeometryAttributeType, PointAttribute};

#[derive(Debug, Default, Clone)]
pub struct PointCloud {
    attributes: Vec<PointAttribute>,
    num_points: usize,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_num_points(&mut self, num_points: usize) {
        self.num_points = num_points;
    }

    /// Adds `attribute` and returns its id. The first non-empty attribute
    /// fixes the number of points.
    pub fn add_attribute(&mut self, mut attribute: PointAttribute) -> i32 {
        if self.num_points == 0 && attribute.size() > 0 {
            self.num_points = attribute.size();
        }
        let id = self.attributes.len() as i32;
        attribute.set_unique_id(id as u32);
        self.attributes.push(attribute);
        id
    }

    pub fn num_attributes(&self) -> i32 {
        self.attributes.len() as i32
    }

    pub fn attribute(&self, att_id: i32) -> &PointAttribute {
        &self.attributes[att_id as usize]
    }

    pub fn attributes(&self) -> impl Iterator<Item = &PointAttribute> {
        self.attributes.iter()
    }

    /// Id of the first attribute of type `att_type`, if any.
    pub fn named_attribute_id(&self, att_type: GeometryAttributeType) -> Option<i32> {
        self.attributes
            .iter()
            .position(|att| att.attribute_type() == att_type)
            .map(|i| i as i32)
    }

    pub fn named_attribute(&self, att_type: GeometryAttributeType) -> Option<&PointAttribute> {
        self.named_attribute_id(att_type)
            .map(|id| &self.attributes[id as usize])
    }

    pub fn has_named_attribute(&self, att_type: GeometryAttributeType) -> bool {
        self.named_attribute_id(att_type).is_some()
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }
}
