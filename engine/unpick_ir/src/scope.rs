/// Where a group definition applies.
///
/// Class names are dot-separated here; slash-separated internal names only
/// ever appear inside raw descriptor strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GroupScope {
    Package(String),
    Class(String),
    Method {
        class_name: String,
        method_name: String,
        method_desc: String,
    },
}

impl GroupScope {
    pub fn package(name: impl Into<String>) -> Self {
        GroupScope::Package(name.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        GroupScope::Class(name.into())
    }

    pub fn method(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        method_desc: impl Into<String>,
    ) -> Self {
        GroupScope::Method {
            class_name: class_name.into(),
            method_name: method_name.into(),
            method_desc: method_desc.into(),
        }
    }
}
