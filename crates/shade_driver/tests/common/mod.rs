use std::path::Path;
use std::sync::Arc;

use shade_config::{InvocationPolicy, LoweringOptions, ShadeConfig};

/// `x = Radius;` followed by an optional extra statement at node 5.
pub fn request_json(extra: Option<&str>) -> String {
  let (extra_node, statements) = match extra {
    Some(node) => (format!(",\n{}", node), "[3, 5]"),
    None => (String::new(), "[3]"),
  };

  format!(
    r#"{{
  "source": {{ "path": "Blur.cs", "text": "void Main()\n{{\n  x = Radius;\n  goto end;\n}}\n" }},
  "effect": {{
    "name": "Blur",
    "constants": [{{ "name": "Radius", "data_type": "float" }}],
    "textures": [{{ "name": "Diffuse", "data_type": "texture2d" }}]
  }},
  "nodes": [
    {{ "category": "expression", "kind": "identifier", "name": "x" }},
    {{ "category": "expression", "kind": "identifier", "name": "Radius" }},
    {{ "category": "expression", "kind": "assignment", "left": 0, "operator": "assign", "right": 1 }},
    {{ "category": "statement", "kind": "expression", "expression": 2 }},
    {{ "category": "statement", "kind": "block", "statements": {statements} }}{extra_node}
  ],
  "bindings": {{
    "0": {{ "kind": "local", "symbol": {{ "id": 1, "name": "x", "type": "float" }} }},
    "1": {{ "kind": "member", "declaring_type": "Blur", "member_name": "Radius", "member_type": "float" }}
  }},
  "methods": [
    {{ "name": "Main", "body": 4, "variables": [{{ "name": "x", "data_type": "float", "host_symbol": 1 }}] }}
  ]
}}"#
  )
}

pub fn write_request(
  dir: &Path,
  content: &str,
) -> String {
  let path = dir.join("request.json");
  std::fs::write(&path, content).unwrap();
  path.to_string_lossy().into_owned()
}

pub fn quiet_config(policy: InvocationPolicy) -> Arc<ShadeConfig> {
  let mut config = ShadeConfig::new_basic(false, vec![], true, 0);
  config.lowering = LoweringOptions::new(policy, None);
  Arc::new(config)
}
