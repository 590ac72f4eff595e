use crate::view_composition::domain::{
    Component, ExecutionContext, SelectionInput, ViewDescriptor, ViewOptions,
};
use crate::view_composition::services::{
    Eligibility, EligibilityFilter, NameResolver, PathRelativizer, RootResolver,
};
use std::path::PathBuf;

/// Per-rule counts of one composition run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositionStats {
    pub total: usize,
    pub included: usize,
    pub excluded_non_leaf: usize,
    pub excluded_packaging: usize,
}

impl CompositionStats {
    pub fn excluded(&self) -> usize {
        self.excluded_non_leaf + self.excluded_packaging
    }

    fn record(&mut self, eligibility: &Eligibility) {
        self.total += 1;
        match eligibility {
            Eligibility::Included => self.included += 1,
            Eligibility::ExcludedNonLeaf { .. } => self.excluded_non_leaf += 1,
            Eligibility::ExcludedPackaging { .. } => self.excluded_packaging += 1,
        }
    }
}

/// Result of composing a view: the descriptor and the directory it belongs in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewComposition {
    pub descriptor: ViewDescriptor,
    pub target_directory: PathBuf,
    pub stats: CompositionStats,
}

impl ViewComposition {
    pub fn into_parts(self) -> (ViewDescriptor, PathBuf) {
        (self.descriptor, self.target_directory)
    }
}

/// ViewComposer - builds a view descriptor from a reactor
///
/// Resolves the name and root once, then walks the components in reactor
/// order, keeping the eligible ones as paths relative to the view root.
/// Pure: no I/O and no failure modes.
pub struct ViewComposer;

impl ViewComposer {
    pub fn compose(
        components: &[Component],
        selection: &SelectionInput,
        options: &ViewOptions,
        context: &ExecutionContext,
    ) -> ViewComposition {
        let view_name = Self::resolve_name(selection, options);
        let view_root = RootResolver::resolve(options, context, &view_name);

        let mut modules = Vec::new();
        let mut stats = CompositionStats::default();

        for component in components {
            let eligibility = EligibilityFilter::evaluate(component, options);
            stats.record(&eligibility);

            let label = component.artifact_id().unwrap_or(component.name());
            if !eligibility.is_included() {
                tracing::debug!(
                    "Not adding module {} ({}): {}",
                    label,
                    component.packaging(),
                    eligibility
                );
                continue;
            }

            tracing::debug!("Adding module {} ({})", label, component.packaging());
            modules.push(PathRelativizer::relativize(
                component.base_directory(),
                &view_root,
            ));
        }

        let descriptor = ViewDescriptor::new(
            context.inherited_model_version.clone(),
            context.inherited_group_id.clone(),
            view_name,
            modules,
        );

        ViewComposition {
            descriptor,
            target_directory: view_root,
            stats,
        }
    }

    /// The selection's explicit name first, then the one from the options
    fn resolve_name(selection: &SelectionInput, options: &ViewOptions) -> String {
        let has_own_name = selection
            .explicit_view_name
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        if has_own_name || options.explicit_view_name.is_none() {
            return NameResolver::resolve(selection);
        }

        let selection = SelectionInput {
            explicit_view_name: options.explicit_view_name.clone(),
            selected_identifiers: selection.selected_identifiers.clone(),
        };
        NameResolver::resolve(&selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn scenario_components() -> Vec<Component> {
        vec![
            Component::new("a", "jar", "/r/a", 0),
            Component::new("b", "pom", "/r/b", 2),
            Component::new("c", "jar", "/r/c", 0),
        ]
    }

    fn context() -> ExecutionContext {
        ExecutionContext::new("/r", "4.0.0", "com.example")
    }

    #[test]
    fn test_reference_scenario() {
        let selection = SelectionInput::from_identifiers(["g:a", "g:c"]);
        let options = ViewOptions::default().with_output_base_directory("views");

        let composition =
            ViewComposer::compose(&scenario_components(), &selection, &options, &context());

        assert_eq!(composition.descriptor.artifact_id(), "a_c_view");
        assert_eq!(composition.target_directory, PathBuf::from("/r/views/a_c_view"));
        assert_eq!(composition.descriptor.modules(), ["../../a", "../../c"]);
        assert_eq!(composition.descriptor.packaging(), "aggregator");
        assert_eq!(composition.descriptor.group_id(), "com.example");
        assert_eq!(composition.descriptor.model_version(), "4.0.0");
    }

    #[test]
    fn test_stats_per_rule() {
        let components = vec![
            Component::new("a", "jar", "/r/a", 0),
            Component::new("b", "pom", "/r/b", 2),
            Component::new("c", "war", "/r/c", 0),
            Component::new("d", "jar", "/r/d", 0),
        ];
        let options = ViewOptions::default().with_excluded_packaging(["war"]);

        let composition = ViewComposer::compose(
            &components,
            &SelectionInput::default(),
            &options,
            &context(),
        );

        assert_eq!(
            composition.stats,
            CompositionStats {
                total: 4,
                included: 2,
                excluded_non_leaf: 1,
                excluded_packaging: 1,
            }
        );
        assert_eq!(composition.stats.excluded(), 2);
        assert_eq!(composition.descriptor.modules().len(), composition.stats.included);
    }

    #[test]
    fn test_modules_follow_reactor_order() {
        let components = vec![
            Component::new("z", "jar", "/r/z", 0),
            Component::new("a", "jar", "/r/a", 0),
            Component::new("m", "jar", "/r/m", 0),
        ];

        let composition = ViewComposer::compose(
            &components,
            &SelectionInput::default(),
            &ViewOptions::default(),
            &context(),
        );

        assert_eq!(
            composition.descriptor.modules(),
            ["../../z", "../../a", "../../m"]
        );
    }

    #[test]
    fn test_empty_reactor() {
        let composition = ViewComposer::compose(
            &[],
            &SelectionInput::default(),
            &ViewOptions::default(),
            &context(),
        );

        assert_eq!(composition.descriptor.artifact_id(), "my-project_view");
        assert!(composition.descriptor.modules().is_empty());
        assert_eq!(composition.stats, CompositionStats::default());
    }

    #[test]
    fn test_duplicate_paths_are_kept() {
        let components = vec![
            Component::new("a", "jar", "/r/a", 0),
            Component::new("a-again", "jar", "/r/a", 0),
        ];

        let composition = ViewComposer::compose(
            &components,
            &SelectionInput::default(),
            &ViewOptions::default(),
            &context(),
        );

        assert_eq!(composition.descriptor.modules(), ["../../a", "../../a"]);
    }

    #[test]
    fn test_explicit_name_from_options() {
        let options = ViewOptions::default().with_explicit_view_name("slice");
        let composition = ViewComposer::compose(
            &scenario_components(),
            &SelectionInput::from_identifiers(["g:a"]),
            &options,
            &context(),
        );

        assert_eq!(composition.descriptor.artifact_id(), "slice");
        assert_eq!(
            composition.target_directory,
            PathBuf::from("/r/project-views/slice")
        );
    }

    #[test]
    fn test_selection_name_wins_over_options_name() {
        let options = ViewOptions::default().with_explicit_view_name("from-options");
        let selection = SelectionInput::new(Some("from-selection".to_string()), vec![]);

        let composition =
            ViewComposer::compose(&scenario_components(), &selection, &options, &context());

        assert_eq!(composition.descriptor.artifact_id(), "from-selection");
    }

    #[test]
    fn test_every_module_resolves_back_to_its_component() {
        let components = scenario_components();
        let options = ViewOptions::default().with_only_leaf_projects(false);

        let composition =
            ViewComposer::compose(&components, &SelectionInput::default(), &options, &context());

        for (component, module) in components.iter().zip(composition.descriptor.modules()) {
            let resolved = PathRelativizer::normalize(&composition.target_directory.join(module));
            assert_eq!(resolved, PathRelativizer::normalize(component.base_directory()));
        }
    }

    #[test]
    fn test_into_parts() {
        let composition = ViewComposer::compose(
            &scenario_components(),
            &SelectionInput::default(),
            &ViewOptions::default(),
            &context(),
        );
        let (descriptor, target) = composition.into_parts();
        assert_eq!(descriptor.artifact_id(), "my-project_view");
        assert!(target.starts_with(Path::new("/r/project-views")));
    }
}
