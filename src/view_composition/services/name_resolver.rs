use crate::view_composition::domain::SelectionInput;

/// Base name used when nothing was selected
pub const FALLBACK_BASE_NAME: &str = "my-project";

/// Appended to every derived (not explicit) view name
pub const VIEW_NAME_SUFFIX: &str = "_view";

const SEGMENT_SEPARATOR: char = '_';

/// NameResolver - derives the view's artifact id
///
/// An explicit, non-blank name wins and is used verbatim. Otherwise the
/// trailing segment of each selected coordinate (`group:artifact` or
/// `path/to/module`) is joined with `_` and suffixed with `_view`.
pub struct NameResolver;

impl NameResolver {
    /// Resolves the view name for a selection
    ///
    /// # Examples
    /// ```
    /// use reactor_view::view_composition::domain::SelectionInput;
    /// use reactor_view::view_composition::services::NameResolver;
    ///
    /// let selection = SelectionInput::from_identifiers(["com.acme:billing", "apps/web"]);
    /// assert_eq!(NameResolver::resolve(&selection), "billing_web_view");
    /// ```
    pub fn resolve(selection: &SelectionInput) -> String {
        if let Some(name) = selection
            .explicit_view_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
        {
            return name.to_string();
        }

        let mut view_name = String::new();
        for identifier in &selection.selected_identifiers {
            // No separator until something has accumulated.
            if !view_name.is_empty() {
                view_name.push(SEGMENT_SEPARATOR);
            }
            view_name.push_str(Self::trailing_segment(identifier));
        }

        if view_name.is_empty() {
            view_name.push_str(FALLBACK_BASE_NAME);
        }

        view_name.push_str(VIEW_NAME_SUFFIX);
        view_name
    }

    /// Everything after the last `:` or `/`
    fn trailing_segment(identifier: &str) -> &str {
        match identifier.rfind(|c: char| c == ':' || c == '/') {
            Some(index) => &identifier[index + 1..],
            None => identifier,
        }
    }
}
