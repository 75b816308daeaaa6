//! FoamFile header block.

use crate::value::FoamDict;
use crate::write::write_block;

/// The header every dictionary file re-declares before its payload.
///
/// `location` is omitted for field files and the mesh-quality dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct FoamHeader {
    pub class: String,
    pub location: Option<String>,
    pub object: String,
}

impl FoamHeader {
    /// Header for a plain dictionary file under the given case subdirectory.
    pub fn dictionary(location: &str, object: &str) -> Self {
        Self {
            class: "dictionary".to_string(),
            location: Some(location.to_string()),
            object: object.to_string(),
        }
    }

    /// Header for an initial/boundary-condition field file.
    pub fn field(class: &str, object: &str) -> Self {
        Self {
            class: class.to_string(),
            location: None,
            object: object.to_string(),
        }
    }

    /// Header for a dictionary that declares no location entry.
    pub fn bare_dictionary(object: &str) -> Self {
        Self {
            class: "dictionary".to_string(),
            location: None,
            object: object.to_string(),
        }
    }

    pub fn render(&self) -> String {
        let mut dict = FoamDict::new();
        dict.set("version", "2.0");
        dict.set("format", "ascii");
        dict.set("class", self.class.as_str());
        if let Some(location) = &self.location {
            dict.set("location", location.as_str());
        }
        dict.set("object", self.object.as_str());

        let mut out = String::new();
        write_block(&mut out, "FoamFile", &dict);
        out
    }
}
