use log::debug;

use scenetree_core::node::Node;

use crate::export::{Error, Exporter};

/// Writes the tree as tagged JSON.
///
/// Every node carries a `kind` of `container` or `scene_reference`;
/// containers list their `children` in declaration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExporter {
    pretty: bool,
}

impl JsonExporter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Exporter for JsonExporter {
    fn export(&self, root: &Node) -> Result<String, Error> {
        debug!(pretty = self.pretty; "Exporting JSON");

        let json = if self.pretty {
            serde_json::to_string_pretty(root)?
        } else {
            serde_json::to_string(root)?
        };
        Ok(json)
    }
}
