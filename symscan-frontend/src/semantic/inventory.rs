//! Inventory records produced by the semantic pass

use serde::{Serialize, Serializer};
use std::fmt;

/// A module-level variable as it was declared
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GlobalVariable {
    #[serde(rename = "type")]
    pub data_type: String,
    pub name: String,
    pub value: String,
}

/// A local variable declared at the top level of a function body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    #[serde(rename = "type")]
    pub data_type: String,
    pub name: String,
    /// Initializer text, or `"null"` when there was none
    pub value: String,
}

impl Variable {
    /// Value recorded for a declaration without an initializer
    pub const NO_VALUE: &'static str = "null";

    pub fn new(data_type: String, name: String, value: Option<&str>) -> Self {
        Self {
            data_type,
            name,
            value: value.unwrap_or(Self::NO_VALUE).to_string(),
        }
    }
}

/// The four kinds of control construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ControlKind {
    If,
    IfElse,
    For,
    While,
}

impl fmt::Display for ControlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlKind::If => "if",
            ControlKind::IfElse => "if...else",
            ControlKind::For => "for",
            ControlKind::While => "while",
        };
        write!(f, "{}", name)
    }
}

/// A classified control construct, rendered `<kind, line>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlTag {
    pub kind: ControlKind,
    /// 1-based line of the opening keyword
    pub line: u32,
}

impl fmt::Display for ControlTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.kind, self.line)
    }
}

impl Serialize for ControlTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Everything recorded about one function definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: String,
    pub is_main: bool,
    pub is_recursive: bool,
    /// `None` only for an entry function declared without a return type
    pub return_type: Option<String>,
    /// `"type name"` per parameter, in declaration order
    pub parameters: Vec<String>,
    pub local_variables: Vec<Variable>,
    pub control_blocks: Vec<ControlTag>,
}

impl Function {
    /// An empty record, to be filled by a single traversal
    pub fn new(name: impl Into<String>, is_main: bool, return_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            is_main,
            is_recursive: false,
            return_type,
            parameters: Vec::new(),
            local_variables: Vec::new(),
            control_blocks: Vec::new(),
        }
    }
}

/// Result of analyzing one program: globals and functions in source order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    pub globals: Vec<GlobalVariable>,
    pub functions: Vec<Function>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The entry function, if the program has one
    pub fn entry_function(&self) -> Option<&Function> {
        self.functions.iter().find(|f| f.is_main)
    }

    pub fn function(&self, name: &str) -> Option<&Function> {
        self.functions.iter().find(|f| f.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_control_tag_display() {
        let tag = ControlTag { kind: ControlKind::IfElse, line: 12 };
        assert_eq!(tag.to_string(), "<if...else, 12>");
        assert_eq!(ControlTag { kind: ControlKind::For, line: 1 }.to_string(), "<for, 1>");
    }

    #[test]
    fn test_variable_defaults_to_null() {
        let var = Variable::new("int".to_string(), "y".to_string(), None);
        assert_eq!(var.value, "null");
    }

    #[test]
    fn test_serialized_shape() {
        let mut function = Function::new("main", true, Some("int".to_string()));
        function.control_blocks.push(ControlTag { kind: ControlKind::While, line: 3 });
        let inventory = Inventory {
            globals: vec![GlobalVariable {
                data_type: "int".to_string(),
                name: "x".to_string(),
                value: "5".to_string(),
            }],
            functions: vec![function],
        };

        let json = serde_json::to_value(&inventory).unwrap();
        assert_eq!(json["globals"][0]["type"], "int");
        assert_eq!(json["functions"][0]["control_blocks"][0], "<while, 3>");
        assert_eq!(json["functions"][0]["is_main"], true);
    }
}
