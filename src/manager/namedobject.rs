use serde::{
    Serialize,
    Deserialize
};

#[derive(Clone, Serialize, Deserialize)]
pub struct NamedJsonObject {
    name: String
}


impl NamedJsonObject {
    pub fn name(&self) -> &String {
        &self.name
    }
}
