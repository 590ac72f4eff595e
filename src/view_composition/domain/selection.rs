/// What the invocation asked for: an optional explicit view name and the
/// raw coordinate strings of the selected components, in command-line order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionInput {
    pub explicit_view_name: Option<String>,
    pub selected_identifiers: Vec<String>,
}

impl SelectionInput {
    pub fn new(explicit_view_name: Option<String>, selected_identifiers: Vec<String>) -> Self {
        Self {
            explicit_view_name,
            selected_identifiers,
        }
    }

    /// Selection without an explicit name
    pub fn from_identifiers<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            explicit_view_name: None,
            selected_identifiers: identifiers.into_iter().map(Into::into).collect(),
        }
    }
}
