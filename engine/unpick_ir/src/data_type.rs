//! Group data types, display formats, and numeric radixes.

use std::fmt;

/// The data type of a constant group.
///
/// Determines which literal kinds the group's constants may produce and how
/// field references inside the group are interpreted (`Class` groups take
/// field-less references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    Char,
    String,
    Class,
}

impl DataType {
    /// The source keyword for this data type.
    pub fn keyword(self) -> &'static str {
        match self {
            DataType::Byte => "byte",
            DataType::Short => "short",
            DataType::Int => "int",
            DataType::Long => "long",
            DataType::Float => "float",
            DataType::Double => "double",
            DataType::Char => "char",
            DataType::String => "String",
            DataType::Class => "Class",
        }
    }

    /// Parses a source keyword, `None` if the word is not a data type.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "byte" => DataType::Byte,
            "short" => DataType::Short,
            "int" => DataType::Int,
            "long" => DataType::Long,
            "float" => DataType::Float,
            "double" => DataType::Double,
            "char" => DataType::Char,
            "String" => DataType::String,
            "Class" => DataType::Class,
            _ => return None,
        })
    }

    /// The JVM field descriptor for a field of this type.
    ///
    /// `String` and `Class` map to their reference descriptors.
    pub fn field_descriptor(self) -> &'static str {
        match self {
            DataType::Byte => "B",
            DataType::Short => "S",
            DataType::Int => "I",
            DataType::Long => "J",
            DataType::Float => "F",
            DataType::Double => "D",
            DataType::Char => "C",
            DataType::String => "Ljava/lang/String;",
            DataType::Class => "Ljava/lang/Class;",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Optional display hint attached to a group with `@format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupFormat {
    Decimal,
    Hex,
    Binary,
    Octal,
    Char,
}

impl GroupFormat {
    pub fn keyword(self) -> &'static str {
        match self {
            GroupFormat::Decimal => "decimal",
            GroupFormat::Hex => "hex",
            GroupFormat::Binary => "binary",
            GroupFormat::Octal => "octal",
            GroupFormat::Char => "char",
        }
    }

    pub fn from_keyword(word: &str) -> Option<Self> {
        Some(match word {
            "decimal" => GroupFormat::Decimal,
            "hex" => GroupFormat::Hex,
            "binary" => GroupFormat::Binary,
            "octal" => GroupFormat::Octal,
            "char" => GroupFormat::Char,
            _ => return None,
        })
    }
}

impl fmt::Display for GroupFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// The radix an integer literal was written in.
///
/// Carried on [`crate::Literal`] purely so the writer can reproduce the
/// source spelling (`0x`, `0b`, leading `0`, or plain decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Decimal,
    Hex,
    Binary,
    Octal,
}

impl Radix {
    /// The literal prefix (empty for decimal, `0` for octal).
    pub fn prefix(self) -> &'static str {
        match self {
            Radix::Decimal => "",
            Radix::Hex => "0x",
            Radix::Binary => "0b",
            Radix::Octal => "0",
        }
    }
}
